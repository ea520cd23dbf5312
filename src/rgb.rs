//! Model a color as normalized red, green and blue components.

use crate::color::Component;

tincture_macros::gen_model! {
    /// A color with red, green and blue components in the range `[0, 1]`.
    pub struct Rgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Components;

    #[test]
    fn conversions() {
        let rgb = Rgb::new(0.1, 0.2, 0.3);
        assert_eq!(rgb.to_components(), Components(0.1, 0.2, 0.3));
        assert_eq!(Rgb::from(Components(0.1, 0.2, 0.3)), rgb);
        assert_eq!(Rgb::from([0.1, 0.2, 0.3]), rgb);
        assert_eq!(Rgb::new(1.0, 0.5, 0.0).to_string(), "rgb(1, 0.5, 0)");
    }
}
