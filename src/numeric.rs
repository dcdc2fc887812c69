//! Numeric conversion helpers used when snapping positions to pixels.
//!
//! Positions are tracked as `f64` for sub-pixel precision while bounding
//! boxes live on the integer pixel grid. These helpers clamp into the `i32`
//! domain before casting so a runaway coordinate saturates instead of
//! wrapping.

/// How a float position is mapped onto the pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelSnap {
    /// Round half away from zero.
    Round,
    /// Truncate toward zero.
    Truncate,
}

impl PixelSnap {
    /// Apply the snapping rule to a single coordinate.
    ///
    /// # Examples
    /// ```
    /// use ledge::numeric::PixelSnap;
    /// assert_eq!(PixelSnap::Round.apply(-2.5), -3);
    /// assert_eq!(PixelSnap::Truncate.apply(-2.5), -2);
    /// assert_eq!(PixelSnap::Truncate.apply(7.99), 7);
    /// ```
    #[must_use]
    pub fn apply(self, value: f64) -> i32 {
        match self {
            Self::Round => round_to_i32(value),
            Self::Truncate => trunc_to_i32(value),
        }
    }
}

/// Round to the nearest integer and clamp into the `i32` domain.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn round_to_i32(value: f64) -> i32 {
    debug_assert!(value.is_finite(), "expected finite coordinate, got {value}");
    value
        .round()
        .clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

/// Truncate toward zero and clamp into the `i32` domain.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn trunc_to_i32(value: f64) -> i32 {
    debug_assert!(value.is_finite(), "expected finite coordinate, got {value}");
    value
        .trunc()
        .clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}
