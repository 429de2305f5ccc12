// src/controllers/sequence_controller.rs
/// SequenceController walks the color chain.
/// Every completed transition moves to the neighbouring color; at either end
/// of the palette the walk turns around and re-enters the boundary node.
use log::info;
use nannou::prelude::*;

use crate::animation::Direction;
use crate::models::{ColorChain, ColorNode};
use crate::render::Canvas;

#[derive(Debug, Clone)]
pub struct SequenceController {
    chain: ColorChain,
    current: usize,
    direction: Direction,
}

impl Default for SequenceController {
    fn default() -> Self {
        Self::new(ColorChain::default())
    }
}

impl SequenceController {
    pub fn new(chain: ColorChain) -> Self {
        Self {
            chain,
            current: 0,
            direction: Direction::Forward,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_node(&self) -> &ColorNode {
        self.chain.node(self.current)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn chain(&self) -> &ColorChain {
        &self.chain
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C, viewport: &Rect) {
        self.current_node().draw(canvas, viewport);
    }

    pub fn update<F: FnOnce()>(&mut self, on_complete: F) {
        let mut crossed = false;
        self.chain.node_mut(self.current).update(|_| crossed = true);
        if !crossed {
            return;
        }

        let direction = &mut self.direction;
        let next = self
            .chain
            .node(self.current)
            .get_next(*direction, || direction.reverse());
        if next != self.current {
            info!("color {} -> {}", self.current, next);
        } else {
            info!("color {} is a boundary, now moving {:?}", next, self.direction);
        }
        self.current = next;
        on_complete();
    }

    pub fn start_updating<F: FnOnce()>(&mut self, on_start: F) {
        self.chain.node_mut(self.current).start_updating(on_start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_transition(controller: &mut SequenceController) -> usize {
        controller.start_updating(|| {});
        let mut completions = 0;
        let mut steps = 0;
        while completions == 0 {
            controller.update(|| completions += 1);
            steps += 1;
            assert!(steps < 10_000, "transition never completed");
        }
        completions
    }

    #[test]
    fn test_starts_at_head_moving_forward() {
        let controller = SequenceController::default();
        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.direction(), Direction::Forward);
    }

    #[test]
    fn test_update_without_start_keeps_node() {
        let mut controller = SequenceController::default();
        let mut completed = false;
        controller.update(|| completed = true);
        assert!(!completed);
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn test_one_transition_moves_to_next_color() {
        let mut controller = SequenceController::default();
        assert_eq!(complete_transition(&mut controller), 1);
        assert_eq!(controller.current_index(), 1);
        assert_eq!(controller.direction(), Direction::Forward);
        assert_eq!(controller.chain().node(0).state.prev_scale(), 1.0);
    }

    #[test]
    fn test_walk_bounces_at_both_ends() {
        let mut controller = SequenceController::default();
        let mut visited = vec![controller.current_index()];
        let mut directions = vec![controller.direction()];
        for _ in 0..10 {
            complete_transition(&mut controller);
            visited.push(controller.current_index());
            directions.push(controller.direction());
        }

        assert_eq!(visited, vec![0, 1, 2, 3, 4, 4, 3, 2, 1, 0, 0]);
        assert_eq!(directions[4], Direction::Forward);
        assert_eq!(directions[5], Direction::Backward);
        assert_eq!(directions[9], Direction::Backward);
        assert_eq!(directions[10], Direction::Forward);
    }

    #[test]
    fn test_boundary_node_animates_back_out() {
        let mut controller = SequenceController::default();
        for _ in 0..5 {
            complete_transition(&mut controller);
        }
        // tail finished growing, the next tap shrinks it again
        assert_eq!(controller.current_index(), 4);
        assert_eq!(controller.current_node().state.prev_scale(), 1.0);

        controller.start_updating(|| {});
        assert_eq!(controller.current_node().state.direction(), -1.0);
    }

    #[test]
    fn test_start_while_animating_is_ignored() {
        let mut controller = SequenceController::default();
        let mut starts = 0;
        controller.start_updating(|| starts += 1);
        controller.update(|| {});
        controller.start_updating(|| starts += 1);
        assert_eq!(starts, 1);
        assert_eq!(controller.current_node().state.direction(), 1.0);
    }
}
