//! Patrolling walker.
//!
//! Walks at a constant speed and turns around when its footprint crosses a
//! screen edge. It falls while above the floor line unless it overlaps a
//! platform. Unlike the player it is never snapped onto the floor.

use glam::DVec2;
use log::debug;

use crate::actor::{ActorKind, ActorState, EnemyKind};
use crate::context::{EnemyContext, FrameContext, PlatformSet};
use crate::facing::{facing_for, Facing, FacingChange};
use crate::geometry::Size;
use crate::numeric::PixelSnap;
use crate::{ENEMY_HEIGHT, ENEMY_WIDTH, WALKER_FALL_RATE, WALKER_SPEED};

use super::Behaviour;

/// A walker patrolling between the screen edges.
#[derive(Debug, Clone, PartialEq)]
pub struct PatrollingWalker {
    state: ActorState,
    horizontal_velocity: f64,
}

impl PatrollingWalker {
    /// Places a walker at `spawn`, heading right.
    #[must_use]
    pub fn new(spawn: DVec2) -> Self {
        Self {
            state: ActorState::new(
                spawn,
                Size::new(ENEMY_WIDTH, ENEMY_HEIGHT),
                Facing::Right,
                ActorKind::Enemy(EnemyKind::Walking),
                PixelSnap::Round,
            ),
            horizontal_velocity: WALKER_SPEED,
        }
    }

    /// Current horizontal velocity: `-3` or `+3`.
    #[must_use]
    pub const fn horizontal_velocity(&self) -> f64 {
        self.horizontal_velocity
    }

    /// Turns left. Reports a flip only if the walker was facing right.
    pub fn walk_left(&mut self) -> FacingChange {
        self.set_velocity(-WALKER_SPEED)
    }

    /// Turns right. Reports a flip only if the walker was facing left.
    pub fn walk_right(&mut self) -> FacingChange {
        self.set_velocity(WALKER_SPEED)
    }

    /// Descends unless resting on the floor line or on any platform.
    pub fn fall(&mut self, frame: &FrameContext, platforms_touching: &PlatformSet) {
        if self.state.is_above(frame.floor_line()) && platforms_touching.is_empty() {
            self.state.translate(DVec2::new(0.0, WALKER_FALL_RATE));
        }
    }

    fn set_velocity(&mut self, velocity: f64) -> FacingChange {
        self.horizontal_velocity = velocity;
        let change = facing_for(velocity, self.state.facing());
        if change.flipped {
            debug!(
                "walker at {:?} turned {:?}",
                self.state.bounding_box(),
                change.facing
            );
        }
        self.state.apply_facing(change)
    }

    /// Boundary check against the pre-move footprint.
    fn reflect(&mut self, screen: Size) -> FacingChange {
        let bounds = self.state.bounding_box();
        if bounds.right() > screen.width {
            self.walk_left()
        } else if bounds.x < 0 {
            self.walk_right()
        } else {
            FacingChange::unchanged(self.state.facing())
        }
    }
}

impl Behaviour for PatrollingWalker {
    fn state(&self) -> &ActorState {
        &self.state
    }

    fn update(&mut self, ctx: &EnemyContext<'_>) -> FacingChange {
        let change = self.reflect(ctx.frame.screen());
        self.state.translate(DVec2::new(self.horizontal_velocity, 0.0));
        self.fall(ctx.frame, ctx.platforms_touching);
        change
    }

    fn reinitialize(&mut self) -> FacingChange {
        self.horizontal_velocity = WALKER_SPEED;
        self.state.reset()
    }
}
