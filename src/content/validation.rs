//! Validation of level layouts before they become a collision grid.

use bevy::prelude::*;

use super::data::{CELL_EMPTY, CELL_SOLID, CELL_SPECIAL, MapLayoutDef};
use crate::map::{CellState, GridShapeError, Level, TileGrid};
use crate::movement::{Body, MovementTuning};

/// A problem with a level layout that prevents the level from starting.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    EmptyGrid,
    Shape(GridShapeError),
    WidthMismatch { dim: u32, columns: usize },
    ColumnLength { column: usize, dim: u32, found: usize },
    UnknownCell { x: usize, y: usize, value: u8 },
    SpawnNotFinite { start: [f32; 2] },
    SpawnOutOfBounds { start: [f32; 2] },
    SpawnBlocked { start: [f32; 2] },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::EmptyGrid => write!(f, "level has no cells"),
            LayoutError::Shape(e) => write!(f, "{}", e),
            LayoutError::WidthMismatch { dim, columns } => {
                write!(f, "dim width is {} but cells has {} columns", dim, columns)
            }
            LayoutError::ColumnLength { column, dim, found } => write!(
                f,
                "column {} has {} cells, dim height is {}",
                column, found, dim
            ),
            LayoutError::UnknownCell { x, y, value } => {
                write!(f, "cell ({}, {}) has unknown value {}", x, y, value)
            }
            LayoutError::SpawnNotFinite { start } => {
                write!(f, "spawn {:?} is not a finite coordinate", start)
            }
            LayoutError::SpawnOutOfBounds { start } => {
                write!(f, "spawn {:?} puts the player outside the grid", start)
            }
            LayoutError::SpawnBlocked { start } => {
                write!(f, "spawn {:?} overlaps a solid cell", start)
            }
        }
    }
}

fn cell_state(value: u8) -> Option<CellState> {
    match value {
        CELL_EMPTY => Some(CellState::Empty),
        CELL_SOLID => Some(CellState::Solid),
        CELL_SPECIAL => Some(CellState::Special),
        _ => None,
    }
}

/// Check the grid shape and cell values.
pub fn validate_layout(layout: &MapLayoutDef) -> Vec<LayoutError> {
    let mut errors = Vec::new();
    let [width, height] = layout.dim;

    if width == 0 || height == 0 || layout.cells.is_empty() {
        errors.push(LayoutError::EmptyGrid);
        return errors;
    }
    if layout.cells.len() != width as usize {
        errors.push(LayoutError::WidthMismatch {
            dim: width,
            columns: layout.cells.len(),
        });
    }

    for (x, column) in layout.cells.iter().enumerate() {
        if column.len() != height as usize {
            errors.push(LayoutError::ColumnLength {
                column: x,
                dim: height,
                found: column.len(),
            });
        }
        for (y, &value) in column.iter().enumerate() {
            if cell_state(value).is_none() {
                errors.push(LayoutError::UnknownCell { x, y, value });
            }
        }
    }

    errors
}

/// Validate a layout and turn it into a [`Level`]. The spawn must leave the
/// player's box fully inside non-solid cells.
pub fn build_level(
    layout: &MapLayoutDef,
    tuning: &MovementTuning,
) -> Result<Level, Vec<LayoutError>> {
    let errors = validate_layout(layout);
    if !errors.is_empty() {
        return Err(errors);
    }

    let columns: Vec<Vec<CellState>> = layout
        .cells
        .iter()
        .map(|column| column.iter().filter_map(|&v| cell_state(v)).collect())
        .collect();
    let grid = TileGrid::from_columns(&columns).map_err(|e| vec![LayoutError::Shape(e)])?;

    let start = layout.start;
    let spawn = Vec2::from(start);
    if !spawn.is_finite() {
        return Err(vec![LayoutError::SpawnNotFinite { start }]);
    }

    let far = spawn + tuning.body_size();
    if spawn.x < 0.0 || spawn.y < 0.0 || far.x > grid.width() as f32 || far.y > grid.height() as f32
    {
        return Err(vec![LayoutError::SpawnOutOfBounds { start }]);
    }

    let body = Body::new(spawn, tuning.body_size());
    if grid.any_solid(body.corners(tuning.epsilon)) {
        return Err(vec![LayoutError::SpawnBlocked { start }]);
    }

    Ok(Level { grid, spawn })
}
