//! Heading helpers for pursuit movement.
//!
//! Turns pixel displacements into angles and fixed-speed headings.

use std::f64::consts::PI;

use glam::DVec2;

/// Angle in radians from a pixel displacement, using a single-argument
/// arctangent with a manual quadrant correction.
///
/// A zero horizontal displacement is replaced by `1` before dividing, so a
/// target directly above or below yields an angle just short of `±π/2`
/// rather than exactly vertical. Negative horizontal displacements add `π`
/// to move the result into the second or third quadrant.
///
/// # Examples
/// ```
/// use ledge::vector_math::pursuit_angle;
/// assert_eq!(pursuit_angle(100, 0), 0.0);
/// assert!((pursuit_angle(-100, 0) - std::f64::consts::PI).abs() < 1e-12);
/// assert!((pursuit_angle(0, 50) - 50f64.atan()).abs() < 1e-12);
/// ```
#[must_use]
pub fn pursuit_angle(delta_x: i32, delta_y: i32) -> f64 {
    let dx = if delta_x == 0 { 1 } else { delta_x };
    let angle = (f64::from(delta_y) / f64::from(dx)).atan();
    if dx < 0 {
        angle + PI
    } else {
        angle
    }
}

/// Vector of length `speed` pointing along `angle`.
///
/// # Examples
/// ```
/// use ledge::vector_math::heading;
/// let v = heading(0.0, 1.0);
/// assert_eq!((v.x, v.y), (1.0, 0.0));
/// ```
#[must_use]
pub fn heading(angle: f64, speed: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin()) * speed
}
