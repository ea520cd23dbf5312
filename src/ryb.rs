//! Model a color in the artistic red, yellow, blue color model.

use crate::color::Component;

tincture_macros::gen_model! {
    /// A color with red, yellow and blue pigment components in the range
    /// `[0, 1]`.
    pub struct Ryb {
        /// The red component of the color.
        red: Component,
        /// The yellow component of the color.
        yellow: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_are_public() {
        let ryb = Ryb::new(1.0, 0.5, 0.0);
        assert_eq!((ryb.red, ryb.yellow, ryb.blue), (1.0, 0.5, 0.0));
        assert_eq!(ryb.to_string(), "ryb(1, 0.5, 0)");
    }
}
