use image::{Rgba, RgbaImage};
use tincture::{Color, Component};

const SIZE: u32 = 512;
const HOLE: f32 = 0.75;
const BOX_HUE: Component = 30.0;

#[derive(Clone, Copy, Debug)]
enum Wheel {
    Rgb,
    Ryb,
}

fn pixel(color: &Color) -> Rgba<u8> {
    Rgba([color.red(), color.green(), color.blue(), 255])
}

/// Hue runs around the ring, starting at the top. Lightness grows towards the
/// edge.
fn draw_wheel(wheel: Wheel) -> RgbaImage {
    let half = SIZE as f32 / 2.0;

    let mut img = RgbaImage::from_pixel(SIZE, SIZE, Rgba([255, 255, 255, 255]));
    img.enumerate_pixels_mut().for_each(|(x, y, pixel_out)| {
        let ax = x as f32 - half;
        let ay = y as f32 - half;

        let lightness = (ax * ax + ay * ay).sqrt() / SIZE as f32;
        if lightness <= HOLE / 2.0 {
            return;
        }
        let hue = ay.atan2(ax).to_degrees() + 90.0;

        let mut color = Color::from_hsl(hue as Component, 1.0, lightness as Component);
        if let Wheel::Ryb = wheel {
            color.ryb_adjust();
        }
        *pixel_out = pixel(&color);
    });

    imageproc::drawing::draw_hollow_circle_mut(
        &mut img,
        (half as i32, half as i32),
        (half * HOLE) as i32,
        Rgba([0x44, 0x44, 0x44, 255]),
    );

    img
}

/// Saturation falls from top to bottom, lightness from left to right, for a
/// single hue snapped onto the RYB wheel.
fn draw_box(hue: Component) -> RgbaImage {
    let size = SIZE as Component;
    RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let saturation = 1.0 - y as Component / size;
        let lightness = 1.0 - x as Component / size;
        let lightness = 0.5 * saturation + lightness * (1.0 - saturation);

        let mut color = Color::from_hsl(hue, saturation, lightness);
        color.ryb_adjust();
        pixel(&color)
    })
}

fn main() {
    for wheel in [Wheel::Rgb, Wheel::Ryb] {
        let path = format!("wheel-{}.png", format!("{wheel:?}").to_lowercase());
        draw_wheel(wheel)
            .save(&path)
            .unwrap_or_else(|err| panic!("could not write image to {path}: {err}"));
    }

    draw_box(BOX_HUE)
        .save("box.png")
        .expect("could not write image to box.png");
}
