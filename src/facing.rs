//! Sprite orientation as an explicit two-state machine.
//!
//! The renderer mirrors a sprite horizontally whenever an actor turns
//! around. Transitions are computed here as pure values so the flip can be
//! applied by whoever owns the image, and so redundant flips are never
//! requested while the velocity sign stays the same.

use serde::{Deserialize, Serialize};

/// Horizontal orientation of an actor's sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    /// Looking towards negative x.
    Left,
    /// Looking towards positive x.
    Right,
}

impl Facing {
    /// The orientation implied by a horizontal velocity. Zero counts as
    /// rightwards.
    #[must_use]
    pub fn from_velocity(velocity_x: f64) -> Self {
        if velocity_x < 0.0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Unit sign of the orientation along the x axis.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Outcome of an orientation transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FacingChange {
    /// Orientation after the transition.
    pub facing: Facing,
    /// `true` when the sprite must be mirrored to match `facing`.
    pub flipped: bool,
}

impl FacingChange {
    /// A transition that leaves the orientation as it was.
    #[must_use]
    pub const fn unchanged(facing: Facing) -> Self {
        Self {
            facing,
            flipped: false,
        }
    }

    /// Transition from `previous` straight to `next`.
    #[must_use]
    pub fn towards(previous: Facing, next: Facing) -> Self {
        Self {
            facing: next,
            flipped: previous != next,
        }
    }
}

/// Computes the orientation for `velocity_x` given the current one.
///
/// # Examples
/// ```
/// use ledge::{facing_for, Facing};
///
/// let turned = facing_for(-3.0, Facing::Right);
/// assert_eq!(turned.facing, Facing::Left);
/// assert!(turned.flipped);
///
/// let same = facing_for(-3.0, Facing::Left);
/// assert!(!same.flipped);
/// ```
#[must_use]
pub fn facing_for(velocity_x: f64, previous: Facing) -> FacingChange {
    FacingChange::towards(previous, Facing::from_velocity(velocity_x))
}
