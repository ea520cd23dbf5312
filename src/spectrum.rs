//! The RYB hue wheel.
//!
//! The RYB wheel puts the pigment primaries red, yellow and blue at 0, 120
//! and 240 degrees. It is not a linear remapping of the RGB hue wheel, so it
//! is described by two tables: a spectrum of RGB stops sampled every 15
//! degrees of RYB hue, and an offset table mapping every RGB hue degree to an
//! RYB hue degree.

use crate::{
    color::{Color, Component, Components},
    convert::{hsl_to_rgb, rgb_to_hsl},
    math::wrap_hue,
};

/// RGB colors of the RYB wheel, one stop every 15 degrees. The first stop is
/// repeated at the end to close the wheel.
#[rustfmt::skip]
pub const RYB_SPECTRUM: [u32; 25] = [
    0xFF0000, 0xFF4900, 0xFF7400, 0xFF9200, 0xFFAA00, 0xFFBF00, 0xFFD300, 0xFFE800,
    0xFFFF00, 0xCCF600, 0x9FEE00, 0x67E300, 0x00CC00, 0x00AF64, 0x009999, 0x0B61A4,
    0x1240AB, 0x1B1BB3, 0x3914AF, 0x530FAD, 0x7109AA, 0xA600A6, 0xCD0074, 0xE40045,
    0xFF0000,
];

/// RGB hue offsets of the RYB wheel. Entry `i` is the RGB hue at which the
/// RYB hue reaches roughly `i` degrees. Terminated by a sentinel larger than
/// any hue.
#[rustfmt::skip]
pub const RYB_OFFSET: [u16; 361] = [
      0,   1,   2,   3,   5,   6,   7,   8,   9,  10,  11,  13,  14,  15,  16,  17,  18,  19,  19,  20,
     21,  21,  22,  23,  23,  24,  25,  25,  26,  27,  27,  28,  28,  29,  29,  30,  30,  31,  31,  32,
     32,  32,  33,  33,  34,  34,  35,  35,  35,  36,  36,  37,  37,  37,  38,  38,  38,  39,  39,  40,
     40,  40,  41,  41,  41,  42,  42,  42,  43,  43,  43,  44,  44,  44,  45,  45,  45,  46,  46,  46,
     47,  47,  47,  47,  48,  48,  48,  49,  49,  49,  50,  50,  50,  51,  51,  51,  52,  52,  52,  53,
     53,  53,  54,  54,  54,  55,  55,  55,  56,  56,  56,  57,  57,  57,  58,  58,  59,  59,  59,  60,
     60,  61,  61,  62,  63,  63,  64,  65,  65,  66,  67,  68,  68,  69,  70,  70,  71,  72,  72,  73,
     73,  74,  75,  75,  76,  77,  77,  78,  79,  79,  80,  81,  82,  82,  83,  84,  85,  86,  87,  88,
     88,  89,  90,  91,  92,  93,  95,  96,  98, 100, 102, 104, 105, 107, 109, 111, 113, 115, 116, 118,
    120, 122, 125, 127, 129, 131, 134, 136, 138, 141, 143, 145, 147, 150, 152, 154, 156, 158, 159, 161,
    163, 165, 166, 168, 170, 171, 173, 175, 177, 178, 180, 182, 184, 185, 187, 189, 191, 192, 194, 196,
    198, 199, 201, 203, 205, 206, 207, 208, 209, 210, 212, 213, 214, 215, 216, 217, 218, 219, 220, 221,
    222, 223, 224, 226, 227, 228, 229, 230, 232, 233, 234, 235, 236, 238, 239, 240, 241, 242, 243, 244,
    245, 246, 247, 248, 249, 250, 251, 251, 252, 253, 254, 255, 256, 257, 257, 258, 259, 260, 260, 261,
    262, 263, 264, 264, 265, 266, 267, 268, 268, 269, 270, 271, 272, 273, 274, 274, 275, 276, 277, 278,
    279, 280, 282, 283, 284, 286, 287, 289, 290, 292, 293, 294, 296, 297, 299, 300, 302, 303, 305, 307,
    309, 310, 312, 314, 316, 317, 319, 321, 323, 324, 326, 327, 328, 329, 330, 331, 332, 333, 334, 336,
    337, 338, 339, 340, 341, 342, 343, 344, 345, 347, 348, 349, 350, 352, 353, 354, 355, 356, 358, 359,
    999,
];

/// Find the RGB color at `hue` degrees on the wheel described by `spectrum`.
///
/// The stops of `spectrum` are spread evenly over 360 degrees with the last
/// stop closing the wheel, so `n` stops make `n - 1` segments. The result is
/// a linear mix of the two stops around `hue`. A spectrum with less than two
/// stops yields its only stop, or black when empty.
pub fn match_spectrum(hue: Component, spectrum: &[u32]) -> u32 {
    if spectrum.len() < 2 {
        return spectrum.first().copied().unwrap_or(0);
    }

    let segments = spectrum.len() - 1;
    let width = 360.0 / segments as Component;
    let hue = wrap_hue(hue);

    let stop = ((hue / width) as usize).min(segments - 1);
    let percent = ((stop + 1) as Component * width - hue) / width;

    let mut color = Color::from_hex(spectrum[stop + 1]);
    color.mix(&Color::from_hex(spectrum[stop]), percent);
    color.hex()
}

/// Map an RGB hue in degrees onto the RYB wheel using [`RYB_OFFSET`].
///
/// The table is scanned for the first entry past `hue`; the RYB hue is that
/// entry's index minus 2, wrapped into `[0, 360)`.
pub fn rgb_hue_to_ryb_hue(hue: Component) -> Component {
    let index = RYB_OFFSET
        .iter()
        .skip(1)
        .position(|&offset| Component::from(offset) > hue)
        .map_or(RYB_OFFSET.len() - 1, |i| i + 1);

    wrap_hue(index as Component - 2.0)
}

impl Color {
    /// The hue of the color on the RYB wheel, in degrees.
    pub fn ryb_hue(&self) -> Component {
        rgb_hue_to_ryb_hue(self.hue())
    }

    /// Replace the hue with `hue` degrees (RGB), keeping the current
    /// saturation and lightness.
    fn apply_hue(&mut self, hue: Component) -> &mut Self {
        let Components(_, saturation, lightness) = rgb_to_hsl(&self.components());
        self.store_components(hsl_to_rgb(&Components(hue, saturation, lightness)))
    }

    /// Snap the hue onto the RYB spectrum, treating the RGB hue as a position
    /// on the RYB wheel.
    pub fn ryb_adjust(&mut self) -> &mut Self {
        let hue = Color::from_hex(match_spectrum(self.hue(), &RYB_SPECTRUM)).hue();
        self.apply_hue(hue)
    }

    /// Rotate the hue by `degrees` on the RYB wheel.
    pub fn ryb_rotate_hue(&mut self, degrees: Component) -> &mut Self {
        let ryb_hue = wrap_hue(self.ryb_hue() + degrees);
        let hue = Color::from_hex(match_spectrum(ryb_hue, &RYB_SPECTRUM)).hue();
        self.apply_hue(hue)
    }

    /// The complementary color on the RYB wheel, i.e. a rotation by 180
    /// degrees.
    pub fn ryb_complementary(&mut self) -> &mut Self {
        self.ryb_rotate_hue(180.0)
    }

    /// Rotate the hue by `degrees` on the RGB wheel.
    pub fn rgb_rotate_hue(&mut self, degrees: Component) -> &mut Self {
        let hue = wrap_hue(self.hue() + degrees);
        self.apply_hue(hue)
    }

    /// The complementary color on the RGB wheel, i.e. a rotation by 180
    /// degrees.
    pub fn rgb_complementary(&mut self) -> &mut Self {
        self.rgb_rotate_hue(180.0)
    }
}
