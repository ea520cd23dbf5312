//! Error types for color assignment.

use thiserror::Error;

/// Result type for color assignment.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported while assigning a color. All of them are recoverable: the
/// lenient [`Color::set`](crate::Color::set) logs them and carries on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The input can not be interpreted as a color. The color is unchanged.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A string matched neither a CSS pattern nor a color name. The color is
    /// unchanged.
    #[error("Unknown color: {0}")]
    UnknownColorName(String),

    /// A packed color exceeded `0xFFFFFF`. The clamped value has been applied.
    #[error("Given decimal outside of range, value was {value:#x}")]
    ValueOutOfRange {
        /// The value that was passed in.
        value: u32,
    },
}
