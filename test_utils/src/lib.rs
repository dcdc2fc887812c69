//! Utility helpers for tests.
//!
//! Fixtures for frame contexts, player snapshots and worlds so integration
//! tests can describe scenarios in a line or two.

pub mod fixtures;

/// Step `world` once with the given player commands and return the report.
///
/// # Examples
/// ```
/// use test_utils::{fixtures::empty_world, step};
/// let mut world = empty_world();
/// let report = step!(world);
/// assert_eq!(report.tick, 1);
/// ```
#[macro_export]
macro_rules! step {
    ($world:expr) => {
        $world.step(&[])
    };
    ($world:expr, $($command:expr),+ $(,)?) => {
        $world.step(&[$($command),+])
    };
}
