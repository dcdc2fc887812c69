#![cfg_attr(docsrs, feature(doc_cfg))]
//! Actor motion and behaviour for a 2D side-scrolling platformer.
//!
//! The crate models a player and three enemy archetypes (spikes, a
//! patrolling walker and a homing flier) as plain state stepped once per
//! frame. Rendering, input polling and asset loading stay outside: they feed
//! [`PlayerCommand`]s in and read positions, bounding boxes and sprite flips
//! back out.
pub mod actor;
pub mod constants;
pub mod context;
pub mod enemy;
pub mod facing;
pub mod geometry;
pub mod level;
pub mod logging;
pub mod numeric;
pub mod player;
pub mod vector_math;
pub mod world;
pub use constants::*;

// Re-export commonly used items
pub use actor::{ActorKind, ActorState, EnemyKind};
pub use context::{
    ContextError, EnemyContext, FrameContext, PlatformId, PlatformSet, PlayerSnapshot,
};
pub use enemy::{Behaviour, Enemy, HomingFlier, PatrollingWalker, Spikes};
pub use facing::{facing_for, Facing, FacingChange};
pub use geometry::{Rect, Size};
pub use level::{EnemySpawn, LevelError, LevelLayout, SpawnPoint};
pub use logging::init as init_logging;
pub use player::{Player, PlayerCommand};
pub use world::{ActorRef, FrameEvent, FrameReport, Platform, World};

pub mod prelude {
    //! Prelude exports used by frame drivers.
    //!
    //! ```rust,no_run
    //! use ledge::prelude::*;
    //! ```

    pub use crate::Behaviour;
    pub use crate::EnemyKind;
    pub use crate::Facing;
    pub use crate::FrameContext;
    pub use crate::LevelLayout;
    pub use crate::PlayerCommand;
    pub use crate::World;
    pub use glam::DVec2;
}
