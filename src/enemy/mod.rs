//! Enemy archetypes and their shared capability.
//!
//! Each archetype owns an [`ActorState`] plus its own motion fields and
//! implements [`Behaviour`]. [`Enemy`] dispatches over the closed set of
//! archetypes so a level can hold them in a single collection.

mod flier;
mod spikes;
mod walker;

pub use flier::HomingFlier;
pub use spikes::Spikes;
pub use walker::PatrollingWalker;

use glam::DVec2;

use crate::actor::{ActorState, EnemyKind};
use crate::context::EnemyContext;
use crate::facing::FacingChange;

/// Per-frame behaviour of an enemy.
///
/// Both operations report the resulting orientation so the renderer can
/// mirror the sprite when `flipped` is set.
pub trait Behaviour {
    /// Shared actor state, read by the renderer and collision rules.
    fn state(&self) -> &ActorState;

    /// Advances the enemy by one frame.
    fn update(&mut self, ctx: &EnemyContext<'_>) -> FacingChange;

    /// Restores spawn-time state for a level restart.
    fn reinitialize(&mut self) -> FacingChange;
}

/// Any enemy in a level.
#[derive(Debug, Clone, PartialEq)]
pub enum Enemy {
    /// Immobile hazard.
    Spikes(Spikes),
    /// Patrolling walker.
    Walking(PatrollingWalker),
    /// Homing flier.
    Flying(HomingFlier),
}

impl Enemy {
    /// Creates an enemy of `kind` at `spawn`.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec2;
    /// use ledge::{Behaviour, Enemy, EnemyKind};
    ///
    /// let enemy = Enemy::spawn(EnemyKind::Flying, DVec2::new(5.0, 6.0));
    /// assert_eq!(enemy.kind(), EnemyKind::Flying);
    /// assert_eq!(enemy.state().bounding_box().width, 70);
    /// ```
    #[must_use]
    pub fn spawn(kind: EnemyKind, spawn: DVec2) -> Self {
        match kind {
            EnemyKind::Spikes => Self::Spikes(Spikes::new(spawn)),
            EnemyKind::Walking => Self::Walking(PatrollingWalker::new(spawn)),
            EnemyKind::Flying => Self::Flying(HomingFlier::new(spawn)),
        }
    }

    /// Archetype tag used by persistence.
    #[must_use]
    pub const fn kind(&self) -> EnemyKind {
        match self {
            Self::Spikes(_) => EnemyKind::Spikes,
            Self::Walking(_) => EnemyKind::Walking,
            Self::Flying(_) => EnemyKind::Flying,
        }
    }
}

impl Behaviour for Enemy {
    fn state(&self) -> &ActorState {
        match self {
            Self::Spikes(spikes) => spikes.state(),
            Self::Walking(walker) => walker.state(),
            Self::Flying(flier) => flier.state(),
        }
    }

    fn update(&mut self, ctx: &EnemyContext<'_>) -> FacingChange {
        match self {
            Self::Spikes(spikes) => spikes.update(ctx),
            Self::Walking(walker) => walker.update(ctx),
            Self::Flying(flier) => flier.update(ctx),
        }
    }

    fn reinitialize(&mut self) -> FacingChange {
        match self {
            Self::Spikes(spikes) => spikes.reinitialize(),
            Self::Walking(walker) => walker.reinitialize(),
            Self::Flying(flier) => flier.reinitialize(),
        }
    }
}
