// src/render/mod.rs
// Drawing seam between the glyph logic and nannou.

pub mod glyph;
pub mod renderer;
pub mod transform;

pub use renderer::Renderer;
pub use transform::Transform2D;

use nannou::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb8,
    pub stroke_weight: f32,
    pub round_caps: bool,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: rgb8(0, 0, 0),
            stroke_weight: 1.0,
            round_caps: true,
        }
    }
}

/// The few primitives the glyph needs from a 2D surface.
pub trait Canvas {
    fn fill(&mut self, color: Rgb8);
    fn stroke_line(&mut self, start: Point2, end: Point2, style: &StrokeStyle);
}

impl Canvas for Draw {
    fn fill(&mut self, color: Rgb8) {
        self.background().color(color);
    }

    fn stroke_line(&mut self, start: Point2, end: Point2, style: &StrokeStyle) {
        let line = self
            .line()
            .start(start)
            .end(end)
            .stroke_weight(style.stroke_weight)
            .color(style.color);
        if style.round_caps {
            line.caps_round();
        }
    }
}

/// Convert a 0xRRGGBB literal.
pub fn hex_color(hex: u32) -> Rgb8 {
    rgb8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}
