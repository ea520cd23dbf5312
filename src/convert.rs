//! Conversions between the RGB channels of a [`Color`] and the HSL and RYB
//! views of it.
//!
//! Hue is always expressed in degrees in `[0, 360)` here, except on the
//! [`Hsl`] record where it is a fraction of a full turn.

use crate::{
    color::{Color, Component, Components},
    cube::{cubic_interpolation, RGB_TO_RYB},
    Hsl, Rgb, Ryb,
};

pub use util::{hsl_to_rgb, rgb_to_hsl};

impl Color {
    /// The hue of the color in degrees, `[0, 360)`. Gray has a hue of `0`.
    pub fn hue(&self) -> Component {
        rgb_to_hsl(&self.components()).0
    }

    /// The hue of the color as a fraction of a full turn, `[0, 1)`.
    pub fn hue_f(&self) -> Component {
        self.hue() / 360.0
    }

    /// The saturation of the color, `[0, 1]`.
    pub fn saturation(&self) -> Component {
        rgb_to_hsl(&self.components()).1
    }

    /// The lightness of the color, `[0, 1]`.
    pub fn lightness(&self) -> Component {
        rgb_to_hsl(&self.components()).2
    }

    /// The color in the HSL notation, with the hue as a fraction of a full
    /// turn so it can be fed back into [`Color::set`].
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) = rgb_to_hsl(&self.components());
        Hsl::new(hue / 360.0, saturation, lightness)
    }

    /// The normalized RGB channels of the color.
    pub fn to_rgb(&self) -> Rgb {
        self.components().into()
    }

    /// The color converted to the RYB model through the RGB to RYB cube.
    pub fn to_ryb(&self) -> Ryb {
        cubic_interpolation(self.red, self.green, self.blue, 1.0, &RGB_TO_RYB).into()
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{clamp_unit, wrap_hue},
    };

    /// Convert from RGB notation to HSL notation. Returns the hue in degrees.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let lightness = (max + min) / 2.0;

        if delta == 0.0 {
            return Components(0.0, 0.0, lightness);
        }

        let saturation = if lightness <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let hue = 60.0
            * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };

        Components(wrap_hue(hue), saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation. The hue is in degrees and is
    /// wrapped into `[0, 360)`; saturation and lightness are clamped.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let hue = wrap_hue(from.0);
        let saturation = clamp_unit(from.1);
        let lightness = clamp_unit(from.2);

        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let m = lightness - c / 2.0;

        let (red, green, blue): (Component, Component, Component) = if hue < 60.0 {
            (c, x, 0.0)
        } else if hue < 120.0 {
            (x, c, 0.0)
        } else if hue < 180.0 {
            (0.0, c, x)
        } else if hue < 240.0 {
            (0.0, x, c)
        } else if hue < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Components(red + m, green + m, blue + m).map(clamp_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_components_eq(actual: Components, expected: Components) {
        assert_component_eq!(actual.0, expected.0);
        assert_component_eq!(actual.1, expected.1);
        assert_component_eq!(actual.2, expected.2);
    }

    #[test]
    fn primaries_to_hsl() {
        #[rustfmt::skip]
        const TESTS: &[(Component, Component, Component, Component, Component, Component)] = &[
            (1.0, 0.0, 0.0,   0.0, 1.0, 0.5),
            (1.0, 1.0, 0.0,  60.0, 1.0, 0.5),
            (0.0, 1.0, 0.0, 120.0, 1.0, 0.5),
            (0.0, 1.0, 1.0, 180.0, 1.0, 0.5),
            (0.0, 0.0, 1.0, 240.0, 1.0, 0.5),
            (1.0, 0.0, 1.0, 300.0, 1.0, 0.5),
            (0.5, 0.0, 0.0,   0.0, 1.0, 0.25),
            (1.0, 0.5, 0.5,   0.0, 1.0, 0.75),
        ];

        for &(r, g, b, h, s, l) in TESTS {
            let hsl = rgb_to_hsl(&Components(r, g, b));
            assert_components_eq(hsl, Components(h, s, l));
            assert_components_eq(hsl_to_rgb(&hsl), Components(r, g, b));
        }
    }

    #[test]
    fn gray_has_no_hue_or_saturation() {
        for v in [0.0, 0.25, 0.5, 1.0] {
            assert_eq!(rgb_to_hsl(&Components(v, v, v)), Components(0.0, 0.0, v));
        }
    }

    #[test]
    fn hue_just_below_red_stays_in_range() {
        // magenta-ish red: the red sector formula yields a value near 360.
        let hsl = rgb_to_hsl(&Components(1.0, 0.0, 0.01));
        assert!(hsl.0 < 360.0 && hsl.0 > 359.0);
    }

    #[test]
    fn rgb_to_hsl_to_rgb_round_trips() {
        let steps = [0.0, 0.1, 0.2, 0.35, 0.5, 0.65, 0.8, 0.9, 1.0];
        for r in steps {
            for g in steps {
                for b in steps {
                    let rgb = Components(r, g, b);
                    assert_components_eq(hsl_to_rgb(&rgb_to_hsl(&rgb)), rgb);
                }
            }
        }
    }

    #[test]
    fn hsl_to_rgb_wraps_and_clamps() {
        assert_components_eq(
            hsl_to_rgb(&Components(480.0, 1.0, 0.5)),
            hsl_to_rgb(&Components(120.0, 1.0, 0.5)),
        );
        assert_components_eq(
            hsl_to_rgb(&Components(-60.0, 1.0, 0.5)),
            Components(1.0, 0.0, 1.0),
        );
        assert_components_eq(
            hsl_to_rgb(&Components(200.0, 0.5, 1.5)),
            Components(1.0, 1.0, 1.0),
        );
        assert_components_eq(
            hsl_to_rgb(&Components(200.0, -1.0, 0.3)),
            Components(0.3, 0.3, 0.3),
        );
    }

    #[test]
    fn color_views() {
        let color = Color::from_hex(0xFF0000);
        assert_eq!(color.hue(), 0.0);
        assert_eq!(color.saturation(), 1.0);
        assert_eq!(color.lightness(), 0.5);

        let color = Color::from_rgb(0.0, 1.0, 1.0);
        assert_component_eq!(color.hue_f(), 0.5);
        assert_eq!(color.to_hsl(), Hsl::new(0.5, 1.0, 0.5));
        assert_eq!(color.to_rgb(), Rgb::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn to_ryb_uses_the_rgb_to_ryb_cube() {
        let ryb = Color::from_hex(0xFF0000).to_ryb();
        assert_component_eq!(ryb.red, 1.0);
        assert_component_eq!(ryb.yellow, 0.0);
        assert_component_eq!(ryb.blue, 0.0);

        let ryb = Color::from_hex(0xFFFFFF).to_ryb();
        assert_eq!(ryb, Ryb::new(0.0, 0.0, 0.0));

        let ryb = Color::from_hex(0x000000).to_ryb();
        assert_eq!(ryb, Ryb::new(1.0, 1.0, 1.0));
    }
}
