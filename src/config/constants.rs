// src/config/constants.rs
//
// Compiled-in animation constants. None of these are read from config.toml.

use std::time::Duration;

/// Number of sub-parts the glyph animation is split into.
pub const PARTS: usize = 4;

/// Scale increment per tick.
pub const SCALE_GAP: f32 = 0.02 / PARTS as f32;

/// Time between two animation ticks.
pub const TICK_DELAY: Duration = Duration::from_millis(20);

pub const BACKGROUND: u32 = 0xBDBDBD;

pub const PALETTE: [u32; 5] = [0xF44336, 0x673AB7, 0x00C853, 0x304FFE, 0xBF360C];

/// Stroke width is min(width, height) / STROKE_FACTOR
pub const STROKE_FACTOR: f32 = 90.0;

/// Arm length is min(width, height) / GAP_FACTOR
pub const GAP_FACTOR: f32 = 11.2;

/// Rotation in degrees reached at the end of the last sub-part.
pub const ROTATION: f32 = 90.0;

const _: () = assert!(!PALETTE.is_empty());
