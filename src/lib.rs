//! tincture provides a color type with conversions between the RGB, HSL and
//! artistic RYB color models, CSS style parsing and mixing operations.
//!
//! ```rust
//! use tincture::{Color, Format};
//!
//! let mut color = Color::new("red");
//! color.mix(&Color::new((0.0, 0.0, 1.0, Format::Rgb01)), 0.5);
//! assert_eq!(color.css_string(None), "rgb(127, 0, 127)");
//! ```

#![deny(missing_docs)]

#[cfg(test)]
#[macro_use]
mod test;

mod adjust;
mod color;
mod convert;
mod cube;
mod error;
mod hsl;
mod input;
mod interpolate;
mod math;
mod names;
mod parse;
mod rgb;
mod ryb;
mod spectrum;

pub use adjust::EQUALITY_TOLERANCE;
pub use color::{hex_string, Color, Component, Components};
pub use convert::{hsl_to_rgb, rgb_to_hsl};
pub use cube::{cubic_interpolation, CubeTable, RGB_TO_RYB, RYB_TO_RGB};
pub use error::{Error, Result};
pub use hsl::Hsl;
pub use input::{ColorInput, Format};
pub use interpolate::Grayscale;
pub use names::named_color;
pub use rgb::Rgb;
pub use ryb::Ryb;
pub use spectrum::{match_spectrum, rgb_hue_to_ryb_hue, RYB_OFFSET, RYB_SPECTRUM};
