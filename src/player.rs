//! The user-controlled actor.
//!
//! The player walks at a unit speed, jumps by an instant upward offset and
//! falls at a constant rate until it lands on the floor line, where it is
//! snapped. It is clamped to the screen horizontally before its velocity is
//! applied, so a single frame may leave it up to one walk step outside the
//! screen until the next clamp.

use glam::DVec2;
use log::trace;

use crate::actor::{ActorKind, ActorState};
use crate::context::{FrameContext, PlayerSnapshot};
use crate::facing::{Facing, FacingChange};
use crate::geometry::Size;
use crate::numeric::PixelSnap;
use crate::{PLAYER_FALL_RATE, PLAYER_HEIGHT, PLAYER_JUMP_OFFSET, PLAYER_WALK_SPEED, PLAYER_WIDTH};

/// Raw input events the driver forwards to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Start walking in a direction.
    Walk(Facing),
    /// Stop walking.
    Stop,
    /// Jump by the fixed offset.
    Jump,
}

/// The player actor.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    state: ActorState,
    horizontal_velocity: f64,
}

impl Player {
    /// Places a player at `spawn`, standing still.
    #[must_use]
    pub fn new(spawn: DVec2) -> Self {
        Self {
            state: ActorState::new(
                spawn,
                Size::new(PLAYER_WIDTH, PLAYER_HEIGHT),
                Facing::Right,
                ActorKind::Player,
                PixelSnap::Round,
            ),
            horizontal_velocity: 0.0,
        }
    }

    /// Shared actor state.
    #[must_use]
    pub const fn state(&self) -> &ActorState {
        &self.state
    }

    /// Current walk velocity: `-1`, `0` or `1`.
    #[must_use]
    pub const fn horizontal_velocity(&self) -> f64 {
        self.horizontal_velocity
    }

    /// Copy of the footprint enemies may observe this frame.
    #[must_use]
    pub const fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            bounding_box: self.state.bounding_box(),
        }
    }

    /// Walk towards `direction`. The last call wins.
    pub fn walk(&mut self, direction: Facing) {
        self.horizontal_velocity = direction.sign() * PLAYER_WALK_SPEED;
    }

    /// Stop walking.
    pub fn stop(&mut self) {
        self.horizontal_velocity = 0.0;
    }

    /// Moves the player up by the jump offset.
    ///
    /// There is no grounded check: jumping again while airborne stacks
    /// another offset.
    pub fn jump(&mut self) {
        self.state.translate(DVec2::new(0.0, -PLAYER_JUMP_OFFSET));
    }

    /// Applies a single input event.
    pub fn apply(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Walk(direction) => self.walk(direction),
            PlayerCommand::Stop => self.stop(),
            PlayerCommand::Jump => self.jump(),
        }
    }

    /// Descends while above the floor line, otherwise snaps onto it.
    pub fn fall(&mut self, frame: &FrameContext) {
        let floor_line = frame.floor_line();
        if self.state.is_above(floor_line) {
            self.state.translate(DVec2::new(0.0, PLAYER_FALL_RATE));
        } else {
            let resting = floor_line - self.state.bounding_box().height;
            self.state.set_y(f64::from(resting));
        }
    }

    /// Advances the player by one frame.
    ///
    /// Order: fall, clamp horizontally into the screen, then walk.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec2;
    /// use ledge::{Facing, FrameContext, Player, Size};
    ///
    /// let frame = FrameContext::new(Size::new(800, 720), 100)?;
    /// let mut player = Player::new(DVec2::new(790.0, 550.0));
    /// player.walk(Facing::Right);
    /// player.update(&frame);
    /// // clamped to 750, then one step right
    /// assert_eq!(player.state().bounding_box().x, 751);
    /// # Ok::<(), ledge::ContextError>(())
    /// ```
    pub fn update(&mut self, frame: &FrameContext) {
        self.fall(frame);
        self.clamp_to_screen(frame.screen());
        self.state.translate(DVec2::new(self.horizontal_velocity, 0.0));
        trace!(
            "player at {:?} moving {}",
            self.state.position(),
            self.horizontal_velocity
        );
    }

    /// Returns to the spawn point and stops walking.
    pub fn reinitialize(&mut self) -> FacingChange {
        self.horizontal_velocity = 0.0;
        self.state.reset()
    }

    fn clamp_to_screen(&mut self, screen: Size) {
        let bounds = self.state.bounding_box();
        if bounds.right() > screen.width {
            self.state.set_x(f64::from(screen.width - bounds.width));
        } else if bounds.x < 0 {
            self.state.set_x(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn frame() -> FrameContext {
        FrameContext::new(Size::new(800, 720), 100).expect("valid frame")
    }

    #[rstest]
    #[case::left(Facing::Left, -1.0)]
    #[case::right(Facing::Right, 1.0)]
    fn walk_sets_unit_velocity(#[case] direction: Facing, #[case] expected: f64) {
        let mut player = Player::new(DVec2::ZERO);
        player.walk(Facing::Left);
        player.walk(direction);
        assert_eq!(player.horizontal_velocity(), expected);
        player.stop();
        assert_eq!(player.horizontal_velocity(), 0.0);
    }

    #[rstest]
    fn falls_at_constant_rate_above_floor(frame: FrameContext) {
        let mut player = Player::new(DVec2::new(100.0, 0.0));
        player.fall(&frame);
        assert_eq!(player.state().bounding_box().y, 3);
    }

    #[rstest]
    #[case::exactly_on_floor(550.0)]
    #[case::one_pixel_short(548.0)]
    #[case::sunk_below(600.0)]
    fn snaps_to_floor_line(frame: FrameContext, #[case] start_y: f64) {
        let mut player = Player::new(DVec2::new(100.0, start_y));
        player.fall(&frame);
        player.fall(&frame);
        assert_eq!(player.state().bounding_box().y, 620 - PLAYER_HEIGHT);
    }

    #[rstest]
    fn jumps_stack_without_ground_check(frame: FrameContext) {
        let mut player = Player::new(DVec2::new(100.0, 550.0));
        player.jump();
        player.jump();
        assert_eq!(player.state().bounding_box().y, 450);
        player.update(&frame);
        assert_eq!(player.state().bounding_box().y, 453);
    }

    #[rstest]
    fn clamps_left_edge_before_walking(frame: FrameContext) {
        let mut player = Player::new(DVec2::new(-30.0, 550.0));
        player.walk(Facing::Left);
        player.update(&frame);
        assert_eq!(player.state().bounding_box().x, -1);
        player.update(&frame);
        assert_eq!(player.state().bounding_box().x, -1);
    }

    #[rstest]
    fn reinitialize_restores_spawn(frame: FrameContext) {
        let mut player = Player::new(DVec2::new(10.0, 20.0));
        player.walk(Facing::Right);
        player.jump();
        player.update(&frame);
        player.reinitialize();
        assert_eq!(player, Player::new(DVec2::new(10.0, 20.0)));
    }
}
