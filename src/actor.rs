//! State shared by every actor in a level.
//!
//! [`ActorState`] holds the spawn origin, the sub-pixel position, the
//! integer bounding box the renderer and collision rules read, and the
//! sprite orientation. Archetype-specific fields such as velocities live on
//! the owning actor type.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::facing::{Facing, FacingChange};
use crate::geometry::{Rect, Size};
use crate::numeric::PixelSnap;

/// Archetype of an enemy, as recorded in level layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyKind {
    /// Immobile hazard.
    Spikes,
    /// Patrolling walker.
    Walking,
    /// Homing flier.
    Flying,
}

impl EnemyKind {
    /// Tag used by level persistence.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spikes => "spikes",
            Self::Walking => "walking",
            Self::Flying => "flying",
        }
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies what sort of actor owns an [`ActorState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    /// The user-controlled actor.
    Player,
    /// One of the enemy archetypes.
    Enemy(EnemyKind),
}

/// Position, footprint and orientation common to all actors.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorState {
    spawn: DVec2,
    spawn_facing: Facing,
    position: DVec2,
    bounding_box: Rect,
    facing: Facing,
    kind: ActorKind,
    snap: PixelSnap,
}

impl ActorState {
    /// Creates the state for an actor placed at `spawn`.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec2;
    /// use ledge::actor::{ActorKind, ActorState, EnemyKind};
    /// use ledge::numeric::PixelSnap;
    /// use ledge::{Facing, Size};
    ///
    /// let state = ActorState::new(
    ///     DVec2::new(10.0, 20.0),
    ///     Size::new(70, 50),
    ///     Facing::Right,
    ///     ActorKind::Enemy(EnemyKind::Walking),
    ///     PixelSnap::Round,
    /// );
    /// assert_eq!(state.bounding_box().x, 10);
    /// assert_eq!(state.bounding_box().width, 70);
    /// ```
    #[must_use]
    pub fn new(
        spawn: DVec2,
        footprint: Size,
        facing: Facing,
        kind: ActorKind,
        snap: PixelSnap,
    ) -> Self {
        let mut state = Self {
            spawn,
            spawn_facing: facing,
            position: spawn,
            bounding_box: Rect::new(0, 0, footprint.width, footprint.height),
            facing,
            kind,
            snap,
        };
        state.sync_bounding_box();
        state
    }

    /// Origin the actor returns to on reset.
    #[must_use]
    pub const fn spawn(&self) -> DVec2 {
        self.spawn
    }

    /// Current sub-pixel position of the top-left corner.
    #[must_use]
    pub const fn position(&self) -> DVec2 {
        self.position
    }

    /// Pixel-aligned footprint derived from [`Self::position`].
    #[must_use]
    pub const fn bounding_box(&self) -> Rect {
        self.bounding_box
    }

    /// Current sprite orientation.
    #[must_use]
    pub const fn facing(&self) -> Facing {
        self.facing
    }

    /// Archetype tag.
    #[must_use]
    pub const fn kind(&self) -> ActorKind {
        self.kind
    }

    /// `true` while the bottom edge is strictly above `line`.
    pub(crate) const fn is_above(&self, line: i32) -> bool {
        self.bounding_box.bottom() < line
    }

    pub(crate) fn set_position(&mut self, position: DVec2) {
        self.position = position;
        self.sync_bounding_box();
    }

    pub(crate) fn translate(&mut self, offset: DVec2) {
        self.set_position(self.position + offset);
    }

    pub(crate) fn set_x(&mut self, x: f64) {
        self.set_position(DVec2::new(x, self.position.y));
    }

    pub(crate) fn set_y(&mut self, y: f64) {
        self.set_position(DVec2::new(self.position.x, y));
    }

    /// Records a new orientation produced by a facing transition.
    pub(crate) fn apply_facing(&mut self, change: FacingChange) -> FacingChange {
        self.facing = change.facing;
        change
    }

    /// Restores the spawn position and orientation.
    ///
    /// The returned change reports whether the sprite must be mirrored to
    /// get back to its spawn orientation. Velocities are reset by the owning
    /// actor.
    pub fn reset(&mut self) -> FacingChange {
        self.set_position(self.spawn);
        let change = FacingChange::towards(self.facing, self.spawn_facing);
        self.apply_facing(change)
    }

    fn sync_bounding_box(&mut self) {
        self.bounding_box.x = self.snap.apply(self.position.x);
        self.bounding_box.y = self.snap.apply(self.position.y);
    }
}
