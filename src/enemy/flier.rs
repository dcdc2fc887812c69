//! Homing flier.
//!
//! Each frame the flier recomputes a unit heading from its own top-left
//! pixel to the player's, then moves one pixel along it. The position is
//! accumulated in floating point and truncated onto the pixel grid, so slow
//! diagonal motion stays smooth. There is no inertia: the heading depends
//! only on the current frame's displacement.

use glam::DVec2;
use log::trace;

use crate::actor::{ActorKind, ActorState, EnemyKind};
use crate::context::{EnemyContext, PlayerSnapshot};
use crate::facing::{facing_for, Facing, FacingChange};
use crate::geometry::Size;
use crate::numeric::PixelSnap;
use crate::vector_math::{heading, pursuit_angle};
use crate::{ENEMY_HEIGHT, ENEMY_WIDTH, FLIER_SPEED};

use super::Behaviour;

/// A flier chasing the player.
#[derive(Debug, Clone, PartialEq)]
pub struct HomingFlier {
    state: ActorState,
    velocity: DVec2,
}

impl HomingFlier {
    /// Places a flier at `spawn`, at rest and facing left.
    #[must_use]
    pub fn new(spawn: DVec2) -> Self {
        Self {
            state: ActorState::new(
                spawn,
                Size::new(ENEMY_WIDTH, ENEMY_HEIGHT),
                Facing::Left,
                ActorKind::Enemy(EnemyKind::Flying),
                PixelSnap::Truncate,
            ),
            velocity: DVec2::ZERO,
        }
    }

    /// Velocity applied during the last update.
    #[must_use]
    pub const fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// Heading angle towards the player, in radians.
    ///
    /// Uses bounding-box corners rather than centres.
    #[must_use]
    pub fn find_angle(&self, player: PlayerSnapshot) -> f64 {
        let own = self.state.bounding_box();
        let target = player.bounding_box;
        pursuit_angle(target.x - own.x, target.y - own.y)
    }
}

impl Behaviour for HomingFlier {
    fn state(&self) -> &ActorState {
        &self.state
    }

    /// Steers towards the player and moves one pixel along the new heading.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec2;
    /// use ledge::{
    ///     Behaviour, EnemyContext, Facing, FrameContext, HomingFlier, PlatformSet,
    ///     PlayerSnapshot, Rect, Size,
    /// };
    ///
    /// let frame = FrameContext::new(Size::new(800, 720), 100)?;
    /// let platforms = PlatformSet::new();
    /// let player = PlayerSnapshot { bounding_box: Rect::new(200, 100, 50, 70) };
    /// let mut flier = HomingFlier::new(DVec2::new(100.0, 100.0));
    ///
    /// let change = flier.update(&EnemyContext::new(&frame, player, &platforms));
    ///
    /// assert_eq!(flier.velocity(), DVec2::new(1.0, 0.0));
    /// assert_eq!(change.facing, Facing::Right);
    /// assert!(change.flipped);
    /// # Ok::<(), ledge::ContextError>(())
    /// ```
    fn update(&mut self, ctx: &EnemyContext<'_>) -> FacingChange {
        let angle = self.find_angle(ctx.player);
        self.velocity = heading(angle, FLIER_SPEED);
        self.state.translate(self.velocity);
        trace!(
            "flier at {:?} heading {angle:.3} rad",
            self.state.position()
        );
        let change = facing_for(self.velocity.x, self.state.facing());
        self.state.apply_facing(change)
    }

    fn reinitialize(&mut self) -> FacingChange {
        self.velocity = DVec2::ZERO;
        self.state.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{FrameContext, PlatformSet};
    use crate::geometry::Rect;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn chase(flier: &mut HomingFlier, player_x: i32, player_y: i32) -> FacingChange {
        let frame = FrameContext::new(Size::new(800, 720), 100).expect("valid frame");
        let platforms = PlatformSet::new();
        let player = PlayerSnapshot {
            bounding_box: Rect::new(player_x, player_y, 50, 70),
        };
        flier.update(&EnemyContext::new(&frame, player, &platforms))
    }

    #[rstest]
    #[case(400, 300)]
    #[case(-50, 20)]
    #[case(90, 800)]
    #[case(101, -400)]
    fn moves_at_unit_speed(#[case] player_x: i32, #[case] player_y: i32) {
        let mut flier = HomingFlier::new(DVec2::new(100.0, 100.0));
        chase(&mut flier, player_x, player_y);
        assert_relative_eq!(flier.velocity().length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(
            (flier.state().position() - DVec2::new(100.0, 100.0)).length(),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn vertical_alignment_uses_substituted_delta() {
        let mut flier = HomingFlier::new(DVec2::new(100.0, 100.0));
        chase(&mut flier, 100, 300);
        let expected = 200f64.atan();
        assert_relative_eq!(flier.velocity().x, expected.cos(), epsilon = 1e-12);
        assert_relative_eq!(flier.velocity().y, expected.sin(), epsilon = 1e-12);
        assert_eq!(flier.state().facing(), Facing::Right);
    }

    #[test]
    fn bounding_box_truncates_toward_zero() {
        let mut flier = HomingFlier::new(DVec2::new(100.0, 100.0));
        chase(&mut flier, 0, 0);
        // heading (-1/sqrt2, -1/sqrt2): 99.29.. truncates to 99
        assert_eq!(flier.state().bounding_box().x, 99);
        assert_eq!(flier.state().bounding_box().y, 99);

        let mut near_origin = HomingFlier::new(DVec2::new(0.5, 0.0));
        chase(&mut near_origin, -200, 0);
        assert_relative_eq!(near_origin.state().position().x, -0.5, epsilon = 1e-12);
        assert_eq!(near_origin.state().bounding_box().x, 0);
    }

    #[test]
    fn flips_only_on_sign_change() {
        let mut flier = HomingFlier::new(DVec2::new(100.0, 100.0));
        assert!(!chase(&mut flier, 0, 100).flipped, "spawned facing left");
        assert!(chase(&mut flier, 300, 100).flipped);
        assert!(!chase(&mut flier, 300, 100).flipped);
        assert!(chase(&mut flier, 0, 100).flipped);
    }

    #[test]
    fn reinitialize_twice_matches_spawn() {
        let spawn = DVec2::new(640.0, 40.0);
        let mut flier = HomingFlier::new(spawn);
        for _ in 0..25 {
            chase(&mut flier, 900, 500);
        }
        flier.reinitialize();
        let once = flier.clone();
        flier.reinitialize();
        assert_eq!(flier, once);
        assert_eq!(flier, HomingFlier::new(spawn));
    }
}
