// src/models/color_node.rs
//
// The palette as a chain of nodes, each with its own scale state.
// Nodes link to their neighbours by index into the chain's arena.

use nannou::prelude::*;

use crate::animation::{Direction, ScaleState};
use crate::config::constants::{PALETTE, STROKE_FACTOR};
use crate::render::{glyph, hex_color, Canvas, StrokeStyle};

#[derive(Debug, Clone)]
pub struct ColorNode {
    pub color_index: usize,
    pub color: Rgb8,
    pub state: ScaleState,
    next: Option<usize>,
    prev: Option<usize>,
}

impl ColorNode {
    fn new(color_index: usize, color: Rgb8, len: usize) -> Self {
        Self {
            color_index,
            color,
            state: ScaleState::new(),
            next: (color_index + 1 < len).then_some(color_index + 1),
            prev: color_index.checked_sub(1),
        }
    }

    pub fn next(&self) -> Option<usize> {
        self.next
    }

    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C, viewport: &Rect) {
        let min_dimension = viewport.w().min(viewport.h());
        let style = StrokeStyle {
            color: self.color,
            stroke_weight: min_dimension / STROKE_FACTOR,
            round_caps: true,
        };
        glyph::draw_plus_equal(canvas, viewport.xy(), min_dimension, self.state.scale(), &style);
    }

    pub fn update<F: FnOnce(f32)>(&mut self, on_threshold: F) {
        self.state.update(on_threshold);
    }

    pub fn start_updating<F: FnOnce()>(&mut self, on_start: F) {
        self.state.start_updating(on_start);
    }

    /// Index of the neighbour in `direction`. At either end of the chain
    /// `on_boundary` runs and the node's own index comes back.
    pub fn get_next<F: FnOnce()>(&self, direction: Direction, on_boundary: F) -> usize {
        let neighbour = match direction {
            Direction::Backward => self.prev,
            Direction::Forward => self.next,
        };
        neighbour.unwrap_or_else(|| {
            on_boundary();
            self.color_index
        })
    }
}

#[derive(Debug, Clone)]
pub struct ColorChain {
    nodes: Vec<ColorNode>,
}

impl Default for ColorChain {
    fn default() -> Self {
        let palette: Vec<Rgb8> = PALETTE.iter().copied().map(hex_color).collect();
        Self::build(&palette)
    }
}

impl ColorChain {
    /// None for an empty palette.
    pub fn from_palette(palette: &[Rgb8]) -> Option<Self> {
        (!palette.is_empty()).then(|| Self::build(palette))
    }

    fn build(palette: &[Rgb8]) -> Self {
        let nodes = palette
            .iter()
            .enumerate()
            .map(|(i, color)| ColorNode::new(i, *color, palette.len()))
            .collect();
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> &ColorNode {
        &self.nodes[index]
    }

    pub fn node_mut(&mut self, index: usize) -> &mut ColorNode {
        &mut self.nodes[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorNode> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_canvas::{CanvasOp, RecordingCanvas};
    use std::collections::HashSet;

    fn palette(n: usize) -> Vec<Rgb8> {
        (0..n).map(|i| rgb8(i as u8, 0, 0)).collect()
    }

    #[test]
    fn test_chain_has_one_node_per_color() {
        for n in 2..=8 {
            let chain = ColorChain::from_palette(&palette(n)).unwrap();
            assert_eq!(chain.len(), n);

            let indices: HashSet<usize> = chain.iter().map(|node| node.color_index).collect();
            assert_eq!(indices, (0..n).collect());
            assert_eq!(chain.node(n - 1).next(), None);
            assert_eq!(chain.node(0).prev(), None);
        }
    }

    #[test]
    fn test_chain_links_both_ways() {
        let chain = ColorChain::from_palette(&palette(5)).unwrap();
        for i in 0..4 {
            let next = chain.node(i).next().unwrap();
            assert_eq!(next, i + 1);
            assert_eq!(chain.node(next).prev(), Some(i));
        }
    }

    #[test]
    fn test_empty_palette_has_no_chain() {
        assert!(ColorChain::from_palette(&[]).is_none());
    }

    #[test]
    fn test_default_chain_uses_compiled_palette() {
        let chain = ColorChain::default();
        assert_eq!(chain.len(), PALETTE.len());
        assert_eq!(chain.node(0).color, hex_color(PALETTE[0]));
    }

    #[test]
    fn test_get_next_at_head_backward_stays_put() {
        let chain = ColorChain::from_palette(&palette(5)).unwrap();
        let mut boundary = 0;
        let next = chain.node(0).get_next(Direction::Backward, || boundary += 1);
        assert_eq!(next, 0);
        assert_eq!(boundary, 1);
    }

    #[test]
    fn test_get_next_at_tail_forward_stays_put() {
        let chain = ColorChain::from_palette(&palette(5)).unwrap();
        let mut boundary = 0;
        let next = chain.node(4).get_next(Direction::Forward, || boundary += 1);
        assert_eq!(next, 4);
        assert_eq!(boundary, 1);
    }

    #[test]
    fn test_get_next_inside_chain_skips_boundary() {
        let chain = ColorChain::from_palette(&palette(5)).unwrap();
        let mut boundary = false;
        assert_eq!(chain.node(2).get_next(Direction::Forward, || boundary = true), 3);
        assert_eq!(chain.node(2).get_next(Direction::Backward, || boundary = true), 1);
        assert!(!boundary);
    }

    #[test]
    fn test_draw_uses_node_color_and_viewport_stroke() {
        let mut chain = ColorChain::from_palette(&palette(3)).unwrap();
        let node = chain.node_mut(2);
        node.start_updating(|| {});
        for _ in 0..50 {
            node.update(|_| {});
        }

        let mut canvas = RecordingCanvas::default();
        node.draw(&mut canvas, &Rect::from_w_h(900.0, 1800.0));

        assert!(!canvas.ops.is_empty());
        for op in &canvas.ops {
            match op {
                CanvasOp::Line { style, .. } => {
                    assert_eq!(style.color, rgb8(2, 0, 0));
                    assert!((style.stroke_weight - 10.0).abs() < 1e-4);
                    assert!(style.round_caps);
                }
                CanvasOp::Fill(_) => panic!("nodes never fill the background"),
            }
        }
    }
}
