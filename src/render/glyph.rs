// src/render/glyph.rs
//
// The "+=" glyph. Each sub-part of the scale grows one piece:
// the plus' horizontal bar, its vertical bar, the two equals bars,
// and finally the quarter turn of the whole glyph.

use nannou::prelude::*;

use super::{Canvas, StrokeStyle, Transform2D};
use crate::config::constants::{GAP_FACTOR, PARTS, ROTATION};
use crate::utilities::scale::{divide_scale, sinify};

pub fn draw_plus_equal<C: Canvas>(
    canvas: &mut C,
    center: Point2,
    min_dimension: f32,
    scale: f32,
    style: &StrokeStyle,
) {
    let size = min_dimension / GAP_FACTOR;
    let turn = divide_scale(scale, 3, PARTS);
    let transform = Transform2D::rotated_at(center, ROTATION * sinify(turn / 2.0));

    let plus_center = pt2(-size, 0.0);
    let plus_h = size / 2.0 * divide_scale(scale, 0, PARTS);
    let plus_v = size / 2.0 * divide_scale(scale, 1, PARTS);
    let equal = size / 2.0 * divide_scale(scale, 2, PARTS);

    let mut bar = |start: Point2, end: Point2| {
        if start.distance(end) > f32::EPSILON {
            canvas.stroke_line(
                transform.apply_to_point(start),
                transform.apply_to_point(end),
                style,
            );
        }
    };

    // +
    bar(plus_center - vec2(plus_h, 0.0), plus_center + vec2(plus_h, 0.0));
    bar(plus_center - vec2(0.0, plus_v), plus_center + vec2(0.0, plus_v));

    // =
    for y in [size / 4.0, -size / 4.0] {
        let equal_center = pt2(size, y);
        bar(equal_center - vec2(equal, 0.0), equal_center + vec2(equal, 0.0));
    }
}
