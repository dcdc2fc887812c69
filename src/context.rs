//! Per-frame context handed to actor updates by the frame driver.
//!
//! [`FrameContext`] carries the screen size and floor height every actor
//! needs. It is validated once when constructed so the update rules can
//! stay total. Enemies additionally receive an [`EnemyContext`] with a
//! snapshot of the player and the platforms they currently overlap.

use hashbrown::HashSet;
use thiserror::Error;

use crate::geometry::{Rect, Size};

/// Reasons a frame context is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    /// Width or height is zero or negative.
    #[error("screen size must be positive, got {width}x{height}")]
    InvalidScreen {
        /// Offending width.
        width: i32,
        /// Offending height.
        height: i32,
    },
    /// Floor height lies outside `[0, screen height]`.
    #[error("floor height {floor_height} is outside 0..={screen_height}")]
    InvalidFloor {
        /// Offending floor height.
        floor_height: i32,
        /// Height of the screen it was checked against.
        screen_height: i32,
    },
}

/// Screen size and floor height shared by every update in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameContext {
    screen: Size,
    floor_height: i32,
}

impl FrameContext {
    /// Validates and builds a frame context.
    ///
    /// # Errors
    /// Returns [`ContextError`] if the screen is empty or the floor does not
    /// fit on it.
    ///
    /// # Examples
    /// ```
    /// use ledge::{FrameContext, Size};
    /// let frame = FrameContext::new(Size::new(800, 720), 100)?;
    /// assert_eq!(frame.floor_line(), 620);
    /// assert!(FrameContext::new(Size::new(0, 720), 100).is_err());
    /// # Ok::<(), ledge::ContextError>(())
    /// ```
    pub const fn new(screen: Size, floor_height: i32) -> Result<Self, ContextError> {
        if screen.width <= 0 || screen.height <= 0 {
            return Err(ContextError::InvalidScreen {
                width: screen.width,
                height: screen.height,
            });
        }
        if floor_height < 0 || floor_height > screen.height {
            return Err(ContextError::InvalidFloor {
                floor_height,
                screen_height: screen.height,
            });
        }
        Ok(Self {
            screen,
            floor_height,
        })
    }

    /// Screen dimensions in pixels.
    #[must_use]
    pub const fn screen(&self) -> Size {
        self.screen
    }

    /// Floor thickness measured up from the bottom of the screen.
    #[must_use]
    pub const fn floor_height(&self) -> i32 {
        self.floor_height
    }

    /// The y coordinate of the floor surface.
    #[must_use]
    pub const fn floor_line(&self) -> i32 {
        self.screen.height - self.floor_height
    }
}

/// Identifier of a platform within a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlatformId(pub u32);

/// Platforms an actor currently overlaps.
pub type PlatformSet = HashSet<PlatformId>;

/// Read-only view of the player taken once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSnapshot {
    /// Player footprint after its own update this frame.
    pub bounding_box: Rect,
}

/// Everything an enemy may observe while updating.
#[derive(Debug, Clone, Copy)]
pub struct EnemyContext<'a> {
    /// Shared frame parameters.
    pub frame: &'a FrameContext,
    /// Player position for this frame.
    pub player: PlayerSnapshot,
    /// Platforms overlapping this enemy's footprint.
    pub platforms_touching: &'a PlatformSet,
}

impl<'a> EnemyContext<'a> {
    /// Bundles the per-enemy context.
    #[must_use]
    pub const fn new(
        frame: &'a FrameContext,
        player: PlayerSnapshot,
        platforms_touching: &'a PlatformSet,
    ) -> Self {
        Self {
            frame,
            player,
            platforms_touching,
        }
    }
}
