//! Trilinear interpolation through a unit cube of calibration colors, used to
//! convert between the RGB and RYB color models.
//!
//! Each table holds the color assigned to the 8 corners of the cube, in the
//! corner order `000, 001, 010, 100, 011, 101, 110, 111` of the three input
//! components.

use crate::{
    color::{Component, Components},
    math::{clamp_unit, Vector},
};

/// The 8 calibration colors of a conversion cube.
pub type CubeTable = [[Component; 3]; 8];

/// Corners used to convert RYB components to RGB.
#[rustfmt::skip]
pub const RYB_TO_RGB: CubeTable = [
    [1.000, 1.000, 1.000], // white
    [0.163, 0.373, 0.600], // blue
    [1.000, 1.000, 0.000], // yellow
    [1.000, 0.000, 0.000], // red
    [0.000, 0.660, 0.200], // green
    [0.500, 0.000, 0.500], // purple
    [1.000, 0.500, 0.000], // orange
    [0.000, 0.000, 0.000], // black
];

/// Corners used to convert RGB components to RYB.
#[rustfmt::skip]
pub const RGB_TO_RYB: CubeTable = [
    [1.000, 1.000, 1.000], // black
    [0.000, 0.000, 1.000], // blue
    [0.000, 1.000, 0.483], // green
    [1.000, 0.000, 0.000], // red
    [0.000, 0.053, 0.210], // cyan
    [0.309, 0.000, 0.469], // magenta
    [0.000, 1.000, 0.000], // yellow
    [0.000, 0.000, 0.000], // white
];

/// Interpolate the three values `v1`, `v2` and `v3` through `table`.
///
/// The values are divided by `scale` (usually `255.0` or `1.0`) and clamped
/// into `[0, 1]` first. Evaluating exactly at a corner yields that corner's
/// table entry.
pub fn cubic_interpolation(
    v1: Component,
    v2: Component,
    v3: Component,
    scale: Component,
    table: &CubeTable,
) -> Components {
    let v1 = clamp_unit(v1 / scale);
    let v2 = clamp_unit(v2 / scale);
    let v3 = clamp_unit(v3 / scale);

    let i1 = 1.0 - v1;
    let i2 = 1.0 - v2;
    let i3 = 1.0 - v3;

    let weights = [
        i1 * i2 * i3,
        i1 * i2 * v3,
        i1 * v2 * i3,
        v1 * i2 * i3,
        i1 * v2 * v3,
        v1 * i2 * v3,
        v1 * v2 * i3,
        v1 * v2 * v3,
    ];

    let out = table
        .iter()
        .zip(weights)
        .fold(Vector::zero(), |sum, (corner, weight)| {
            sum + Vector::from(*corner) * weight
        });

    Components::from_vector(out).map(clamp_unit)
}
