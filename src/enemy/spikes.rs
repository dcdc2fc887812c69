//! Stationary hazard.
//!
//! Spikes never move. They only supply a footprint for the collision rules
//! owned by the game, which decide what touching them means.

use glam::DVec2;

use crate::actor::{ActorKind, ActorState, EnemyKind};
use crate::context::EnemyContext;
use crate::facing::{Facing, FacingChange};
use crate::geometry::Size;
use crate::numeric::PixelSnap;
use crate::SPIKES_SIZE;

use super::Behaviour;

/// An immobile hazard.
#[derive(Debug, Clone, PartialEq)]
pub struct Spikes {
    state: ActorState,
}

impl Spikes {
    /// Places spikes at `spawn`.
    #[must_use]
    pub fn new(spawn: DVec2) -> Self {
        Self {
            state: ActorState::new(
                spawn,
                Size::new(SPIKES_SIZE, SPIKES_SIZE),
                Facing::Right,
                ActorKind::Enemy(EnemyKind::Spikes),
                PixelSnap::Round,
            ),
        }
    }
}

impl Behaviour for Spikes {
    fn state(&self) -> &ActorState {
        &self.state
    }

    fn update(&mut self, _ctx: &EnemyContext<'_>) -> FacingChange {
        FacingChange::unchanged(self.state.facing())
    }

    fn reinitialize(&mut self) -> FacingChange {
        FacingChange::unchanged(self.state.facing())
    }
}
