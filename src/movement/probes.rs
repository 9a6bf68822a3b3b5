//! Movement domain: sample points derived from a body's current position.
//!
//! Edge probes sit `epsilon` outside their edge, so a body resting flush
//! against a cell boundary still reads the neighbouring cell. Along the edge
//! they are inset by `epsilon` so corners do not pick up the perpendicular
//! neighbour. Nothing here is cached; always sample after moving.

use bevy::prelude::*;

use crate::movement::{Body, Side};

impl Body {
    pub fn feet(&self, epsilon: f32) -> [Vec2; 2] {
        let Vec2 { x, y } = self.position;
        let Vec2 { x: w, y: h } = self.size();
        let below = y + h + epsilon;
        [Vec2::new(x + epsilon, below), Vec2::new(x + w - epsilon, below)]
    }

    pub fn head(&self, epsilon: f32) -> [Vec2; 2] {
        let Vec2 { x, y } = self.position;
        let w = self.size().x;
        let above = y - epsilon;
        [Vec2::new(x + epsilon, above), Vec2::new(x + w - epsilon, above)]
    }

    pub fn left_side(&self, epsilon: f32) -> [Vec2; 2] {
        let Vec2 { x, y } = self.position;
        let h = self.size().y;
        let beside = x - epsilon;
        [Vec2::new(beside, y + epsilon), Vec2::new(beside, y + h - epsilon)]
    }

    pub fn right_side(&self, epsilon: f32) -> [Vec2; 2] {
        let Vec2 { x, y } = self.position;
        let Vec2 { x: w, y: h } = self.size();
        let beside = x + w + epsilon;
        [Vec2::new(beside, y + epsilon), Vec2::new(beside, y + h - epsilon)]
    }

    pub fn side(&self, side: Side, epsilon: f32) -> [Vec2; 2] {
        match side {
            Side::Left => self.left_side(epsilon),
            Side::Right => self.right_side(epsilon),
        }
    }

    /// The box's own corners, inset by `epsilon`. None of these may end a
    /// tick inside a solid cell.
    pub fn corners(&self, epsilon: f32) -> [Vec2; 4] {
        let Vec2 { x, y } = self.position;
        let Vec2 { x: w, y: h } = self.size();
        let (left, right) = (x + epsilon, x + w - epsilon);
        let (top, bottom) = (y + epsilon, y + h - epsilon);
        [
            Vec2::new(left, top),
            Vec2::new(right, top),
            Vec2::new(left, bottom),
            Vec2::new(right, bottom),
        ]
    }
}
