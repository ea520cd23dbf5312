//! Channel arithmetic, lightness adjustments and comparisons.

use crate::{
    color::{Color, Component, Components},
    convert::{hsl_to_rgb, rgb_to_hsl},
    math::fuzzy_eq,
};

/// Channels closer than this are considered equal by [`Color::equals`].
pub const EQUALITY_TOLERANCE: Component = 0.0015;

impl Color {
    /// Add the channels of `other` to this color.
    pub fn add(&mut self, other: &Color) -> &mut Self {
        self.store(
            self.red + other.red,
            self.green + other.green,
            self.blue + other.blue,
        )
    }

    /// Subtract the channels of `other` from this color.
    pub fn subtract(&mut self, other: &Color) -> &mut Self {
        self.store(
            self.red - other.red,
            self.green - other.green,
            self.blue - other.blue,
        )
    }

    /// Multiply the channels of this color with the channels of `other`.
    pub fn multiply(&mut self, other: &Color) -> &mut Self {
        self.store(
            self.red * other.red,
            self.green * other.green,
            self.blue * other.blue,
        )
    }

    /// Multiply every channel with `scalar`.
    pub fn multiply_scalar(&mut self, scalar: Component) -> &mut Self {
        let Components(red, green, blue) = self.components().map(|c| c * scalar);
        self.store(red, green, blue)
    }

    /// Add `scalar` to every channel, on the 0 to 255 scale.
    pub fn add_scalar(&mut self, scalar: Component) -> &mut Self {
        self.add_scalar_f(scalar / 255.0)
    }

    /// Add `scalar` to every channel, on the 0.0 to 1.0 scale.
    pub fn add_scalar_f(&mut self, scalar: Component) -> &mut Self {
        let Components(red, green, blue) = self.components().map(|c| c + scalar);
        self.store(red, green, blue)
    }

    /// Offset hue (degrees), saturation and lightness.
    pub fn hsl_offset(
        &mut self,
        hue: Component,
        saturation: Component,
        lightness: Component,
    ) -> &mut Self {
        let Components(h, s, l) = rgb_to_hsl(&self.components());
        let offset = Components(h + hue, s + saturation, l + lightness);
        self.store_components(hsl_to_rgb(&offset))
    }

    /// Lighten the color by moving its lightness `amount` of the way towards
    /// `1.0`.
    pub fn brighten(&mut self, amount: Component) -> &mut Self {
        let Components(h, s, l) = rgb_to_hsl(&self.components());
        let l = l + (1.0 - l) * amount;
        self.store_components(hsl_to_rgb(&Components(h, s, l)))
    }

    /// Scale the lightness of the color by `amount`.
    ///
    /// `amount` is not clamped: `0.0` is fully dark, `1.0` leaves the color
    /// unchanged and values above `1.0` lighten it.
    pub fn darken(&mut self, amount: Component) -> &mut Self {
        let Components(h, s, l) = rgb_to_hsl(&self.components());
        self.store_components(hsl_to_rgb(&Components(h, s, l * amount)))
    }

    /// Compare the channels of both colors within [`EQUALITY_TOLERANCE`].
    pub fn equals(&self, other: &Color) -> bool {
        fuzzy_eq(self.red, other.red, EQUALITY_TOLERANCE)
            && fuzzy_eq(self.green, other.green, EQUALITY_TOLERANCE)
            && fuzzy_eq(self.blue, other.blue, EQUALITY_TOLERANCE)
    }

    /// Whether the color reads as dark. Blue, purple and red hues (210 to 27
    /// degrees, after rounding the hue to a whole degree) count as dark below
    /// 60% lightness, every other hue at or below 32%.
    pub fn is_dark(&self) -> bool {
        let Components(hue, _, lightness) = rgb_to_hsl(&self.components());
        let hue = hue.round();
        (lightness < 0.60 && (hue >= 210.0 || hue <= 27.0)) || lightness <= 0.32
    }

    /// The opposite of [`Color::is_dark`].
    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_arithmetic_clamps() {
        let mut color = Color::from_rgb(0.5, 0.25, 0.75);
        color.add(&Color::from_rgb(0.75, 0.25, 0.0));
        assert_eq!(color.components(), Components(1.0, 0.5, 0.75));

        color.subtract(&Color::from_rgb(0.25, 1.0, 0.5));
        assert_eq!(color.components(), Components(0.75, 0.0, 0.25));

        color.multiply(&Color::from_rgb(0.5, 1.0, 1.0));
        assert_eq!(color.components(), Components(0.375, 0.0, 0.25));

        color.multiply_scalar(4.0);
        assert_eq!(color.components(), Components(1.0, 0.0, 1.0));

        color.multiply_scalar(-1.0);
        assert_eq!(color.components(), Components(0.0, 0.0, 0.0));
    }

    #[test]
    fn scalar_offsets() {
        let mut color = Color::from_rgb(0.5, 0.0, 1.0);
        color.add_scalar_f(0.25);
        assert_eq!(color.components(), Components(0.75, 0.25, 1.0));

        let mut color = Color::from_hex(0x000000);
        color.add_scalar(51.0);
        assert_eq!(color.hex(), 0x333333);
    }

    #[test]
    fn brighten_moves_lightness_towards_white() {
        let mut color = Color::from_hex(0xFF0000);
        color.brighten(0.5);
        assert_component_eq!(color.hue(), 0.0);
        assert_component_eq!(color.saturation(), 1.0);
        assert_component_eq!(color.lightness(), 0.75);

        let mut white = Color::from_hex(0xFF0000);
        white.brighten(1.0);
        assert_eq!(white.hex(), 0xFFFFFF);
    }

    #[test]
    fn darken_scales_lightness() {
        let mut color = Color::from_hex(0xFF0000);
        color.darken(0.5);
        assert_component_eq!(color.lightness(), 0.25);
        assert_component_eq!(color.saturation(), 1.0);

        let mut black = Color::from_hex(0x336699);
        black.darken(0.0);
        assert_eq!(black.hex(), 0x000000);

        // Values above one lighten.
        let mut lighter = Color::from_hex(0xFF0000);
        lighter.darken(1.5);
        assert_component_eq!(lighter.lightness(), 0.75);
    }

    #[test]
    fn hsl_offset_shifts_all_three() {
        let mut color = Color::from_hsl(100.0, 0.5, 0.5);
        color.hsl_offset(20.0, 0.25, -0.25);
        assert_component_eq!(color.hue(), 120.0, 0.5);
        assert_component_eq!(color.saturation(), 0.75);
        assert_component_eq!(color.lightness(), 0.25);
    }

    #[test]
    fn equality_is_fuzzy() {
        let a = Color::from_rgb(0.5, 0.5, 0.5);
        assert!(a.equals(&Color::from_rgb(0.501, 0.4995, 0.5)));
        assert!(!a.equals(&Color::from_rgb(0.502, 0.5, 0.5)));
        assert!(!a.equals(&Color::from_rgb(0.5, 0.5, 0.498)));
    }

    #[test]
    fn dark_and_light() {
        assert!(!Color::from_rgb255(255.0, 255.0, 0.0).is_dark());
        assert!(Color::from_rgb255(255.0, 255.0, 0.0).is_light());

        // Blue reads as dark at 50% lightness, green does not.
        assert!(Color::from_hex(0x0000FF).is_dark());
        assert!(Color::from_hex(0xFF0000).is_dark());
        assert!(!Color::from_hex(0x00FF00).is_dark());

        // Everything is dark at or below 32% lightness.
        assert!(Color::from_hsl(120.0, 1.0, 0.3).is_dark());
        assert!(!Color::from_hsl(120.0, 1.0, 0.35).is_dark());

        // Nothing is dark from 60% lightness upwards.
        assert!(!Color::from_hsl(240.0, 1.0, 0.65).is_dark());
        assert!(Color::from_hsl(240.0, 1.0, 0.55).is_dark());
    }

    #[test]
    fn dark_hue_band_uses_whole_degrees() {
        assert!(Color::from_hsl(27.3, 1.0, 0.55).is_dark());
        assert!(!Color::from_hsl(27.7, 1.0, 0.55).is_dark());
        assert!(Color::from_hsl(209.6, 1.0, 0.55).is_dark());
        assert!(!Color::from_hsl(209.3, 1.0, 0.55).is_dark());
    }

    #[test]
    fn identity_adjustments_keep_the_hex_value() {
        for hex in (0..=0xFFFFFF).step_by(4099) {
            let original = Color::from_hex(hex);

            let mut brightened = original;
            brightened.brighten(0.0);
            assert_eq!(brightened.hex(), hex, "brighten {hex:06x}");

            let mut darkened = original;
            darkened.darken(1.0);
            assert_eq!(darkened.hex(), hex, "darken {hex:06x}");

            let mut offset = original;
            offset.hsl_offset(0.0, 0.0, 0.0);
            assert_eq!(offset.hex(), hex, "hsl_offset {hex:06x}");
        }
    }
}
