//! Math utility functions.

use euclid::default::Vector3D;
use num_traits::Float;

use crate::Component;

/// Three channels treated as a vector, used for weighted sums and blending.
pub type Vector = Vector3D<Component>;

/// Clamp `value` into `[0, 1]`. NaN is converted to `0.0`.
pub fn clamp_unit<T: Float>(value: T) -> T {
    if value.is_nan() {
        T::zero()
    } else {
        value.max(T::zero()).min(T::one())
    }
}

/// Wrap `value` into `[min, max)`.
pub fn keep_in_range<T: Float>(value: T, min: T, max: T) -> T {
    let span = max - min;
    let wrapped = min + (value - min) % span;
    let wrapped = if wrapped < min { wrapped + span } else { wrapped };
    // Adding the span to a tiny negative remainder can round up to `max`.
    if wrapped >= max {
        min
    } else {
        wrapped
    }
}

/// Wrap a hue in degrees into `[0, 360)`.
pub fn wrap_hue<T: Float>(hue: T) -> T {
    keep_in_range(hue, T::zero(), T::from(360.0).unwrap_or_else(T::max_value))
}

/// Check that `a` is strictly within `tolerance` of `b`.
pub fn fuzzy_eq<T: Float>(a: T, b: T, tolerance: T) -> bool {
    a < b + tolerance && a > b - tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_unit_limits_and_nan() {
        assert_eq!(clamp_unit(-1.0), 0.0);
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(Component::NAN), 0.0);
        assert_eq!(clamp_unit(Component::INFINITY), 1.0);
    }

    #[test]
    fn hue_wrapping() {
        assert_eq!(wrap_hue(0.0), 0.0);
        assert_eq!(wrap_hue(360.0), 0.0);
        assert_eq!(wrap_hue(720.0), 0.0);
        assert_eq!(wrap_hue(-90.0), 270.0);
        assert_eq!(wrap_hue(450.0), 90.0);
        assert_eq!(wrap_hue(-360.0), 0.0);
        let tiny = wrap_hue(-1.0e-9 as Component);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn keep_in_range_with_offset_bounds() {
        assert_eq!(keep_in_range(12.0, 5.0, 10.0), 7.0);
        assert_eq!(keep_in_range(4.0, 5.0, 10.0), 9.0);
    }

    #[test]
    fn fuzzy_equality_is_strict() {
        assert!(fuzzy_eq(0.5, 0.501, 0.0015));
        assert!(!fuzzy_eq(0.5, 0.502, 0.0015));
        assert!(!fuzzy_eq(0.0, Component::NAN, 0.0015));
    }
}
