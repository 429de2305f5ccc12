// src/render/transform.rs

use nannou::prelude::*;
use std::f32::consts::PI;

#[derive(Debug, Clone)]
pub struct Transform2D {
    pub translation: Vec2,
    pub scale: f32,
    /// degrees, counter-clockwise
    pub rotation: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

impl Transform2D {
    pub fn rotated_at(translation: Vec2, rotation: f32) -> Self {
        Self {
            translation,
            scale: 1.0,
            rotation,
        }
    }

    pub fn apply_to_point(&self, point: Point2) -> Point2 {
        // 1. Scale
        let scaled = point * self.scale;

        // 2. Rotate
        let rotation = self.rotation * PI / 180.0;
        let cos_rot = rotation.cos();
        let sin_rot = rotation.sin();
        let rotated = pt2(
            scaled.x * cos_rot - scaled.y * sin_rot,
            scaled.x * sin_rot + scaled.y * cos_rot,
        );

        // 3. Translate
        rotated + self.translation
    }
}
