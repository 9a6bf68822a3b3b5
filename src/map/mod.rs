//! Map domain: the immutable tile grid the movement engine collides against.

mod grid;

#[cfg(test)]
mod tests;

pub use grid::{CellState, GridShapeError, TileGrid};

use bevy::prelude::*;

/// The loaded level: collision grid plus the player's spawn point.
#[derive(Resource, Debug, Clone)]
pub struct Level {
    pub grid: TileGrid,
    /// Top-left of the player's bounding box, in world units.
    pub spawn: Vec2,
}
