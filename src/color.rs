//! A [`Color`] holds a single color as normalized red, green and blue
//! channels. Every other representation is a view computed on demand.

use std::fmt;

use crate::math::{clamp_unit, Vector};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    pub(crate) fn to_vector(self) -> Vector {
        Vector::new(self.0, self.1, self.2)
    }

    pub(crate) fn from_vector(vector: Vector) -> Self {
        Self(vector.x, vector.y, vector.z)
    }
}

/// Pack three 0 to 255 channels into a 24-bit integer.
pub(crate) fn pack(red: u8, green: u8, blue: u8) -> u32 {
    (u32::from(red) << 16) | (u32::from(green) << 8) | u32::from(blue)
}

/// Split a 24-bit integer into its three 0 to 255 channels.
pub(crate) fn unpack(hex: u32) -> (u8, u8, u8) {
    (
        ((hex & 0xFF0000) >> 16) as u8,
        ((hex & 0x00FF00) >> 8) as u8,
        (hex & 0x0000FF) as u8,
    )
}

/// Float error from an HSL round trip stays well below this, on the 0 to 255
/// scale.
const QUANTIZE_EPSILON: Component = 1.0e-3;

/// Quantize a normalized channel to 0 to 255. Values are floored, so `0.5`
/// becomes `127`, after adding [`QUANTIZE_EPSILON`] so a channel a rounding
/// error short of a step still lands on it.
pub(crate) fn to_u8(value: Component) -> u8 {
    (clamp_unit(value) * 255.0 + QUANTIZE_EPSILON).floor() as u8
}

/// Format a 24-bit color as `#rrggbb`. Bits above the lowest 24 are ignored.
pub fn hex_string(hex: u32) -> String {
    format!("#{:06x}", hex & 0xFFFFFF)
}

/// A color stored as red, green and blue channels in the range `[0, 1]`.
///
/// The channels are clamped whenever they are written, so they are always in
/// range. Mutating operations return `&mut Self` so calls can be chained:
/// ```rust
/// use tincture::Color;
/// let mut color = Color::from_hex(0xFF0000);
/// color.rgb_complementary().brighten(0.25);
/// assert_eq!(color.hex_string(), "#3fffff");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub(crate) red: Component,
    pub(crate) green: Component,
    pub(crate) blue: Component,
}

impl Default for Color {
    /// White, `0xFFFFFF`.
    fn default() -> Self {
        Self {
            red: 1.0,
            green: 1.0,
            blue: 1.0,
        }
    }
}

impl Color {
    /// Store the given channels, clamping each into `[0, 1]`. NaN is stored
    /// as `0.0`.
    pub(crate) fn store(&mut self, red: Component, green: Component, blue: Component) -> &mut Self {
        self.red = clamp_unit(red);
        self.green = clamp_unit(green);
        self.blue = clamp_unit(blue);
        self
    }

    pub(crate) fn store_components(&mut self, components: Components) -> &mut Self {
        self.store(components.0, components.1, components.2)
    }

    /// The channels as generic components.
    pub fn components(&self) -> Components {
        Components(self.red, self.green, self.blue)
    }

    /// The red channel, 0 to 255.
    pub fn red(&self) -> u8 {
        to_u8(self.red)
    }

    /// The green channel, 0 to 255.
    pub fn green(&self) -> u8 {
        to_u8(self.green)
    }

    /// The blue channel, 0 to 255.
    pub fn blue(&self) -> u8 {
        to_u8(self.blue)
    }

    /// The red channel, 0.0 to 1.0.
    pub fn red_f(&self) -> Component {
        self.red
    }

    /// The green channel, 0.0 to 1.0.
    pub fn green_f(&self) -> Component {
        self.green
    }

    /// The blue channel, 0.0 to 1.0.
    pub fn blue_f(&self) -> Component {
        self.blue
    }

    /// The color packed as a 24-bit integer, e.g. `0xFF0000` for red.
    pub fn hex(&self) -> u32 {
        pack(self.red(), self.green(), self.blue())
    }

    /// The color as `#rrggbb`.
    pub fn hex_string(&self) -> String {
        hex_string(self.hex())
    }

    /// The color as `r, g, b` with 0 to 255 channels, followed by `, a` when
    /// an alpha value is given. Alpha is passed through as is.
    pub fn rgb_string(&self, alpha: Option<Component>) -> String {
        let rgb = format!("{}, {}, {}", self.red(), self.green(), self.blue());
        match alpha {
            Some(alpha) => format!("{rgb}, {alpha}"),
            None => rgb,
        }
    }

    /// The color as `rgb(r, g, b)`, see [`Color::rgb_string`].
    pub fn css_string(&self, alpha: Option<Component>) -> String {
        format!("rgb({})", self.rgb_string(alpha))
    }

    /// Copy the normalized channels into `array` starting at `offset`.
    pub fn to_array(&self, array: &mut [Component], offset: usize) -> crate::Result<()> {
        let len = array.len();
        let Some(target) = offset
            .checked_add(3)
            .and_then(|end| array.get_mut(offset..end))
        else {
            return Err(crate::Error::InvalidArgument(format!(
                "array of length {} can not hold 3 components at offset {}",
                len, offset
            )));
        };
        target.copy_from_slice(&[self.red, self.green, self.blue]);
        Ok(())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex_string())
    }
}
