// src/utilities/scale.rs
//
// Helpers to split one animation progress value into sequential sub-parts.

use std::f32::consts::PI;

pub fn inverse(n: usize) -> f32 {
    1.0 / n as f32
}

/// Progress left over once the first `i` of `n` sub-parts are done.
pub fn max_scale(scale: f32, i: usize, n: usize) -> f32 {
    (scale - i as f32 * inverse(n)).max(0.0)
}

/// Progress of sub-part `i` of `n`, normalised to [0, 1].
pub fn divide_scale(scale: f32, i: usize, n: usize) -> f32 {
    inverse(n).min(max_scale(scale, i, n)) * n as f32
}

pub fn sinify(scale: f32) -> f32 {
    (scale * PI).sin()
}
