//! Parse CSS style strings into colors.
//!
//! Recognized forms:
//! * `rgb(r, g, b)` / `rgba(r, g, b, a)` with integer channels up to 255
//! * `rgb(r%, g%, b%)` / `rgba(r%, g%, b%, a)` with integer percentages
//! * `hsl(h, s%, l%)` / `hsla(h, s%, l%, a)` with the hue in degrees
//! * `#rgb` and `#rrggbb`
//! * any keyword known to [`named_color`]
//!
//! Alpha values are accepted and ignored.

use crate::{
    color::{Color, Component},
    error::{Error, Result},
    names::named_color,
};

fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Digits with at most one decimal point, not ending in the point.
fn is_number(s: &str) -> bool {
    let (int, frac) = match s.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => ("", s),
    };
    (int.is_empty() || is_integer(int)) && is_integer(frac)
}

fn parse_integer(s: &str) -> Option<u32> {
    if !is_integer(s) {
        return None;
    }
    // Only overflow can fail past the digit check.
    Some(s.parse::<u32>().unwrap_or(u32::MAX))
}

fn parse_number(s: &str) -> Option<Component> {
    if !is_number(s) {
        return None;
    }
    s.parse::<Component>().ok()
}

fn parse_percent(s: &str) -> Option<u32> {
    parse_integer(s.strip_suffix('%')?)
}

/// Split the arguments of a color function into its three channels, checking
/// the optional trailing alpha.
fn split_args(args: &str) -> Option<[&str; 3]> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [a, b, c] => Some([*a, *b, *c]),
        [a, b, c, alpha] if is_number(alpha) => Some([*a, *b, *c]),
        _ => None,
    }
}

fn parse_rgb(args: &str) -> Option<Color> {
    let [r, g, b] = split_args(args)?;

    if let (Some(r), Some(g), Some(b)) = (parse_integer(r), parse_integer(g), parse_integer(b)) {
        let channel = |v: u32| v.min(255) as Component;
        return Some(Color::from_rgb255(channel(r), channel(g), channel(b)));
    }

    let channel = |v: u32| v.min(100) as Component / 100.0;
    let (r, g, b) = (parse_percent(r)?, parse_percent(g)?, parse_percent(b)?);
    Some(Color::from_rgb(channel(r), channel(g), channel(b)))
}

fn parse_hsl(args: &str) -> Option<Color> {
    let [h, s, l] = split_args(args)?;
    let h = parse_number(h)?;
    let s = parse_percent(s)? as Component / 100.0;
    let l = parse_percent(l)? as Component / 100.0;
    Some(Color::from_hsl(h, s, l))
}

fn parse_function(style: &str) -> Option<Color> {
    let (name, rest) = style.split_once('(')?;
    let args = rest.strip_suffix(')')?;
    match name {
        "rgb" | "rgba" => parse_rgb(args),
        "hsl" | "hsla" => parse_hsl(args),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let value = u32::from_str_radix(hex, 16).ok()?;
    let packed = match hex.len() {
        // #F80 -> #FF8800
        3 => {
            let (r, g, b) = ((value >> 8) & 0xF, (value >> 4) & 0xF, value & 0xF);
            (r * 0x11) << 16 | (g * 0x11) << 8 | b * 0x11
        }
        6 => value,
        _ => return None,
    };

    Some(Color::from_hex(packed))
}

/// Parse a CSS style string. Unparseable styles are looked up as color names.
pub(crate) fn parse_style(style: &str) -> Result<Color> {
    let style = style.trim();
    if style.is_empty() {
        return Err(Error::InvalidArgument("empty color style".to_string()));
    }

    let parsed = if let Some(hex) = style.strip_prefix('#') {
        parse_hex(hex)
    } else {
        parse_function(style)
    };

    parsed
        .or_else(|| named_color(style).map(Color::from_hex))
        .ok_or_else(|| Error::UnknownColorName(style.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Components;

    fn hex(style: &str) -> u32 {
        parse_style(style).unwrap().hex()
    }

    #[test]
    fn hex_literals() {
        assert_eq!(hex("#ff0000"), 0xFF0000);
        assert_eq!(hex("#00FF00"), 0x00FF00);
        assert_eq!(hex("#f80"), 0xFF8800);
        assert_eq!(hex("  #123456 "), 0x123456);
    }

    #[test]
    fn bad_hex_literals() {
        for style in ["#ff00", "#gg0000", "#", "#1234567"] {
            assert_eq!(
                parse_style(style),
                Err(Error::UnknownColorName(style.to_string())),
            );
        }
    }

    #[test]
    fn rgb_functions() {
        assert_eq!(hex("rgb(255, 0, 0)"), 0xFF0000);
        assert_eq!(hex("rgb(18,52,86)"), 0x123456);
        assert_eq!(hex("rgba(0, 0, 255, 0.5)"), 0x0000FF);
        assert_eq!(hex("rgba(0, 0, 255, .5)"), 0x0000FF);
        // Channels are capped.
        assert_eq!(hex("rgb(300, 0, 1000)"), 0xFF00FF);
    }

    #[test]
    fn rgb_percentages() {
        assert_eq!(hex("rgb(100%, 0%, 0%)"), 0xFF0000);
        assert_eq!(hex("rgba(0%, 100%, 0%, 1)"), 0x00FF00);
        assert_eq!(
            parse_style("rgb(50%, 200%, 0%)").unwrap().components(),
            Components(0.5, 1.0, 0.0),
        );
    }

    #[test]
    fn mixed_or_malformed_functions() {
        for style in [
            "rgb(100%, 0, 0)",
            "rgb(1.5, 0, 0)",
            "rgb(-1, 0, 0)",
            "rgb(1, 2)",
            "rgb(1, 2, 3, 4, 5)",
            "rgba(1, 2, 3, x)",
            "rgb(1, 2, 3",
            "hsl(120, 50, 50)",
            "cmyk(0, 0, 0, 0)",
        ] {
            assert!(
                matches!(parse_style(style), Err(Error::UnknownColorName(_))),
                "{style}"
            );
        }
    }

    #[test]
    fn hsl_functions() {
        let color = parse_style("hsl(120, 100%, 50%)").unwrap();
        assert_eq!(color.hex(), 0x00FF00);

        let color = parse_style("hsla(240.5, 50%, 25%, 0.3)").unwrap();
        assert_component_eq!(color.hue(), 240.5, 0.01);
        assert_component_eq!(color.saturation(), 0.5);
        assert_component_eq!(color.lightness(), 0.25);
    }

    #[test]
    fn names() {
        assert_eq!(hex("red"), 0xFF0000);
        assert_eq!(hex("CornflowerBlue"), 0x6495ED);
        assert_eq!(hex(" navy "), 0x000080);
        assert_eq!(
            parse_style("notacolor"),
            Err(Error::UnknownColorName("notacolor".to_string()))
        );
    }

    #[test]
    fn empty_styles() {
        assert!(matches!(parse_style(""), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse_style("   "), Err(Error::InvalidArgument(_))));
    }
}
