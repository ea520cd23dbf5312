use num_traits::Float;

use crate::{color::Components, math::clamp_unit, Color, Component};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a * (T::one() - t) + b * t
}

/// How [`Color::grayscale`] computes the gray level of a color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Grayscale {
    /// Weighted by perceived brightness, `0.21 R + 0.72 G + 0.07 B`.
    #[default]
    Luminosity,
    /// The arithmetic mean of the three channels.
    Average,
}

impl Grayscale {
    fn gray(self, color: &Color) -> Component {
        match self {
            Self::Luminosity => color.red * 0.21 + color.green * 0.72 + color.blue * 0.07,
            Self::Average => (color.red + color.green + color.blue) / 3.0,
        }
    }
}

impl Color {
    /// Linearly interpolate from this color towards `other` using `percent`
    /// as the progress between them. `percent` is clamped into `[0, 1]`.
    pub fn mix(&mut self, other: &Color, percent: Component) -> &mut Self {
        let percent = clamp_unit(percent);
        let mixed = self
            .components()
            .to_vector()
            .lerp(other.components().to_vector(), percent);
        self.store_components(Components::from_vector(mixed))
    }

    /// Move the color towards its gray level by `percent`, clamped into
    /// `[0, 1]`.
    pub fn grayscale(&mut self, percent: Component, mode: Grayscale) -> &mut Self {
        let gray = mode.gray(self);
        let percent = clamp_unit(percent);
        let Components(red, green, blue) = self
            .components()
            .map(|channel| lerp(channel, gray, percent));
        self.store(red, green, blue)
    }
}
