// src/lib.rs
//
// The animated "+=" glyph: scale states, the color chain they live in,
// the sequence controller walking that chain and the renderer tying it
// to a canvas and a frame host.

pub mod animation;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod render;
pub mod utilities;

pub use error::{ConfigError, TickSchedulingError};
