pub mod color_node;

pub use color_node::{ColorChain, ColorNode};
