//! Model a color with the HSL notation.

use crate::color::Component;

tincture_macros::gen_model! {
    /// A color specified with the HSL notation. All three components are in
    /// the range `[0, 1]`; the hue is a fraction of a full turn.
    pub struct Hsl {
        /// The hue component of the color.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_the_model_name() {
        assert_eq!(Hsl::new(0.5, 1.0, 0.25).to_string(), "hsl(0.5, 1, 0.25)");
        assert_eq!(Hsl::default(), Hsl::new(0.0, 0.0, 0.0));
    }
}
