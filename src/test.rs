use crate::Component;

/// The tolerance used when comparing channels, the same one used by
/// [`Color::equals`](crate::Color::equals).
pub const TOLERANCE: Component = 0.0015;

/// Check for equality between two components allowing for the fuzzy
/// tolerance used by color comparisons.
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = $crate::test::TOLERANCE);
    }};
    ($actual:expr,$expected:expr,$epsilon:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = $epsilon);
    }};
}
