//! Assigning colors from the many shapes a color can be given in.

use std::str::FromStr;

use crate::{
    color::{unpack, Color, Component, Components},
    convert::hsl_to_rgb,
    cube::{cubic_interpolation, RYB_TO_RGB},
    error::{Error, Result},
    names::named_color,
    parse::parse_style,
    Hsl, Rgb, Ryb,
};

/// How three loose values passed to [`ColorInput::Triple`] are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Red, green and blue in `[0, 1]`.
    #[default]
    Rgb01,
    /// Red, green and blue in `[0, 255]`.
    Rgb255,
    /// Hue in degrees, saturation and lightness in `[0, 1]`.
    Hsl,
    /// Red, yellow and blue in `[0, 255]`.
    Ryb255,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "" | "rgb01" => Self::Rgb01,
            "rgb" | "rgb255" => Self::Rgb255,
            "hsl" => Self::Hsl,
            "ryb" | "ryb255" => Self::Ryb255,
            other => {
                return Err(Error::InvalidArgument(format!(
                    "unknown color format \"{other}\""
                )))
            }
        })
    }
}

/// Everything a [`Color`] can be assigned from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorInput<'a> {
    /// A packed `0xRRGGBB` value.
    Hex(u32),
    /// Normalized RGB channels.
    Rgb(Rgb),
    /// HSL with the hue as a fraction of a full turn.
    Hsl(Hsl),
    /// Normalized RYB channels.
    Ryb(Ryb),
    /// Three values interpreted according to the [`Format`].
    Triple(Component, Component, Component, Format),
    /// Normalized RGB channels read from a slice at the given offset.
    Array(&'a [Component], usize),
    /// A CSS style string or color name.
    Style(&'a str),
    /// Another color.
    Copy(Color),
}

impl From<u32> for ColorInput<'_> {
    fn from(value: u32) -> Self {
        Self::Hex(value)
    }
}

impl From<Rgb> for ColorInput<'_> {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<Hsl> for ColorInput<'_> {
    fn from(value: Hsl) -> Self {
        Self::Hsl(value)
    }
}

impl From<Ryb> for ColorInput<'_> {
    fn from(value: Ryb) -> Self {
        Self::Ryb(value)
    }
}

impl From<(Component, Component, Component, Format)> for ColorInput<'_> {
    fn from((a, b, c, format): (Component, Component, Component, Format)) -> Self {
        Self::Triple(a, b, c, format)
    }
}

impl<'a> From<&'a [Component]> for ColorInput<'a> {
    fn from(value: &'a [Component]) -> Self {
        Self::Array(value, 0)
    }
}

impl<'a> From<(&'a [Component], usize)> for ColorInput<'a> {
    fn from((array, offset): (&'a [Component], usize)) -> Self {
        Self::Array(array, offset)
    }
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Style(value)
    }
}

impl From<Color> for ColorInput<'_> {
    fn from(value: Color) -> Self {
        Self::Copy(value)
    }
}

fn check_not_nan(a: Component, b: Component, c: Component) -> Result<()> {
    if a.is_nan() || b.is_nan() || c.is_nan() {
        return Err(Error::InvalidArgument(format!(
            "color components can not be NaN, got ({a}, {b}, {c})"
        )));
    }
    Ok(())
}

fn check_hue(hue: Component) -> Result<()> {
    if !hue.is_finite() {
        return Err(Error::InvalidArgument(format!("hue must be finite, got {hue}")));
    }
    Ok(())
}

impl Color {
    /// Create a color from any [`ColorInput`]. The color starts out white and
    /// invalid input is logged and ignored, see [`Color::set`].
    pub fn new<'a>(input: impl Into<ColorInput<'a>>) -> Self {
        let mut color = Self::default();
        color.set(input);
        color
    }

    /// Create a color from any [`ColorInput`], failing on invalid input.
    pub fn try_new<'a>(input: impl Into<ColorInput<'a>>) -> Result<Self> {
        let mut color = Self::default();
        color.try_set(input)?;
        Ok(color)
    }

    /// Create a color from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        Self::new(hex)
    }

    /// Create a color from red, green and blue in `[0, 1]`.
    pub fn from_rgb(red: Component, green: Component, blue: Component) -> Self {
        let mut color = Self::default();
        color.set_rgb(red, green, blue);
        color
    }

    /// Create a color from red, green and blue in `[0, 255]`.
    pub fn from_rgb255(red: Component, green: Component, blue: Component) -> Self {
        let mut color = Self::default();
        color.set_rgb255(red, green, blue);
        color
    }

    /// Create a color from a hue in degrees and saturation and lightness in
    /// `[0, 1]`.
    pub fn from_hsl(hue: Component, saturation: Component, lightness: Component) -> Self {
        let mut color = Self::default();
        color.set_hsl(hue, saturation, lightness);
        color
    }

    /// Create a color from red, yellow and blue in `[0, 255]`.
    pub fn from_ryb255(red: Component, yellow: Component, blue: Component) -> Self {
        let mut color = Self::default();
        color.set_ryb255(red, yellow, blue);
        color
    }

    /// A random color.
    pub fn random() -> Self {
        let mut color = Self::default();
        color.set_random();
        color
    }

    /// Assign the color from any [`ColorInput`].
    ///
    /// On [`Error::InvalidArgument`] and [`Error::UnknownColorName`] the color
    /// is left unchanged. On [`Error::ValueOutOfRange`] the clamped value has
    /// already been assigned.
    pub fn try_set<'a>(&mut self, input: impl Into<ColorInput<'a>>) -> Result<&mut Self> {
        match input.into() {
            ColorInput::Hex(hex) => self.set_hex(hex),
            ColorInput::Rgb(Rgb { red, green, blue }) => {
                check_not_nan(red, green, blue)?;
                Ok(self.set_rgb(red, green, blue))
            }
            ColorInput::Hsl(Hsl {
                hue,
                saturation,
                lightness,
            }) => {
                check_not_nan(hue, saturation, lightness)?;
                check_hue(hue)?;
                Ok(self.set_hsl(hue * 360.0, saturation, lightness))
            }
            ColorInput::Ryb(Ryb { red, yellow, blue }) => {
                check_not_nan(red, yellow, blue)?;
                Ok(self.set_ryb255(red * 255.0, yellow * 255.0, blue * 255.0))
            }
            ColorInput::Triple(a, b, c, format) => {
                check_not_nan(a, b, c)?;
                Ok(match format {
                    Format::Rgb01 => self.set_rgb(a, b, c),
                    Format::Rgb255 => self.set_rgb255(a, b, c),
                    Format::Hsl => {
                        check_hue(a)?;
                        self.set_hsl(a, b, c)
                    }
                    Format::Ryb255 => self.set_ryb255(a, b, c),
                })
            }
            ColorInput::Array(array, offset) => {
                let Some(&[red, green, blue]) = offset
                    .checked_add(3)
                    .and_then(|end| array.get(offset..end))
                else {
                    return Err(Error::InvalidArgument(format!(
                        "array of length {} has no 3 components at offset {}",
                        array.len(),
                        offset
                    )));
                };
                check_not_nan(red, green, blue)?;
                Ok(self.set_rgb(red, green, blue))
            }
            ColorInput::Style(style) => self.set_style(style),
            ColorInput::Copy(color) => {
                *self = color;
                Ok(self)
            }
        }
    }

    /// Assign the color from any [`ColorInput`], logging invalid input
    /// instead of failing. See [`Color::try_set`] for what happens to the
    /// color in each case.
    pub fn set<'a>(&mut self, input: impl Into<ColorInput<'a>>) -> &mut Self {
        if let Err(err) = self.try_set(input) {
            log::warn!("{err}");
        }
        self
    }

    /// Assign a packed `0xRRGGBB` value. Values above `0xFFFFFF` are clamped
    /// to white, assigned and reported as [`Error::ValueOutOfRange`].
    pub fn set_hex(&mut self, hex: u32) -> Result<&mut Self> {
        let (red, green, blue) = unpack(hex.min(0xFFFFFF));
        self.set_rgb255(
            Component::from(red),
            Component::from(green),
            Component::from(blue),
        );

        if hex > 0xFFFFFF {
            return Err(Error::ValueOutOfRange { value: hex });
        }
        Ok(self)
    }

    /// Assign red, green and blue in `[0, 1]`.
    pub fn set_rgb(&mut self, red: Component, green: Component, blue: Component) -> &mut Self {
        self.store(red, green, blue)
    }

    /// Assign red, green and blue in `[0, 255]`.
    pub fn set_rgb255(&mut self, red: Component, green: Component, blue: Component) -> &mut Self {
        self.store(red / 255.0, green / 255.0, blue / 255.0)
    }

    /// Assign a hue in degrees with saturation and lightness in `[0, 1]`. The
    /// hue is wrapped into `[0, 360)`.
    pub fn set_hsl(
        &mut self,
        hue: Component,
        saturation: Component,
        lightness: Component,
    ) -> &mut Self {
        self.store_components(hsl_to_rgb(&Components(hue, saturation, lightness)))
    }

    /// Assign red, yellow and blue in `[0, 255]` through the RYB to RGB cube.
    pub fn set_ryb255(&mut self, red: Component, yellow: Component, blue: Component) -> &mut Self {
        self.store_components(cubic_interpolation(red, yellow, blue, 255.0, &RYB_TO_RGB))
    }

    /// Assign a CSS style string or color name.
    pub fn set_style(&mut self, style: &str) -> Result<&mut Self> {
        *self = parse_style(style)?;
        Ok(self)
    }

    /// Assign a color by name, ignoring case.
    pub fn set_color_name(&mut self, name: &str) -> Result<&mut Self> {
        let hex = named_color(name).ok_or_else(|| Error::UnknownColorName(name.to_string()))?;
        self.set_hex(hex)
    }

    /// Set all channels to `value`, on the 0 to 255 scale.
    pub fn set_scalar(&mut self, value: Component) -> &mut Self {
        self.set_scalar_f(value / 255.0)
    }

    /// Set all channels to `value`, on the 0.0 to 1.0 scale.
    pub fn set_scalar_f(&mut self, value: Component) -> &mut Self {
        self.store(value, value, value)
    }

    /// Assign a random color.
    pub fn set_random(&mut self) -> &mut Self {
        let channel = || fastrand::f64() as Component;
        let (red, green, blue) = (channel(), channel(), channel());
        self.store(red, green, blue)
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse a CSS style string or color name.
    fn from_str(s: &str) -> Result<Self> {
        parse_style(s)
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}
