//! Map domain: tests for grid construction and solidity queries.

use bevy::prelude::Vec2;

use super::{CellState, TileGrid};

fn room() -> TileGrid {
    TileGrid::from_rows(&[
        "#####", //
        "#.$.#", //
        "#####", //
    ])
}

// -----------------------------------------------------------------------------
// Construction
// -----------------------------------------------------------------------------

#[test]
fn test_new_rejects_mismatched_cell_count() {
    let err = TileGrid::new(3, 2, vec![CellState::Empty; 5]).unwrap_err();
    assert_eq!(err.width, 3);
    assert_eq!(err.height, 2);
    assert_eq!(err.cells, 5);
}

#[test]
fn test_new_rejects_empty_grid() {
    assert!(TileGrid::new(0, 0, Vec::new()).is_err());
}

#[test]
fn test_from_columns_is_column_major() {
    // columns[x][y]: column 0 is solid at its bottom cell only
    let grid = TileGrid::from_columns(&[
        vec![CellState::Empty, CellState::Solid],
        vec![CellState::Special, CellState::Empty],
        vec![CellState::Empty, CellState::Empty],
    ])
    .unwrap();

    assert_eq!(grid.width(), 3);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.cell_at(0.5, 1.5), CellState::Solid);
    assert_eq!(grid.cell_at(1.5, 0.5), CellState::Special);
    assert_eq!(grid.cell_at(0.5, 0.5), CellState::Empty);
}

#[test]
fn test_from_columns_rejects_ragged_columns() {
    let result = TileGrid::from_columns(&[
        vec![CellState::Empty, CellState::Empty],
        vec![CellState::Empty],
    ]);
    assert!(result.is_err());
}

// -----------------------------------------------------------------------------
// Queries
// -----------------------------------------------------------------------------

#[test]
fn test_cell_at_floors_coordinates() {
    let grid = room();
    assert_eq!(grid.cell_at(1.0, 1.0), CellState::Empty);
    assert_eq!(grid.cell_at(1.999, 1.999), CellState::Empty);
    assert_eq!(grid.cell_at(2.0, 1.0), CellState::Special);
    assert_eq!(grid.cell_at(0.999, 1.5), CellState::Solid);
}

#[test]
fn test_out_of_bounds_is_solid() {
    let grid = room();
    assert!(grid.is_solid(-1.0, 5.0));
    assert!(grid.is_solid(grid.width() as f32, 5.0));
    assert!(grid.is_solid(-0.001, 1.5));
    assert!(grid.is_solid(2.5, grid.height() as f32));
    assert!(grid.is_solid(f32::NAN, 1.5));
    assert!(grid.is_solid(f32::INFINITY, 1.5));
}

#[test]
fn test_boundary_solidity_holds_for_open_grid() {
    let grid = TileGrid::new(4, 8, vec![CellState::Empty; 32]).unwrap();
    assert!(grid.is_solid(-1.0, 5.0));
    assert!(grid.is_solid(4.0, 5.0));
    assert!(!grid.is_solid(3.5, 5.0));
}

#[test]
fn test_special_cells_are_not_solid() {
    let grid = room();
    assert_eq!(grid.cell_at(2.5, 1.5), CellState::Special);
    assert!(!grid.is_solid(2.5, 1.5));
}

#[test]
fn test_any_solid() {
    let grid = room();
    assert!(!grid.any_solid(Vec::<Vec2>::new()));
    assert!(!grid.any_solid([Vec2::new(1.5, 1.5), Vec2::new(3.5, 1.5)]));
    assert!(grid.any_solid([Vec2::new(1.5, 1.5), Vec2::new(4.5, 1.5)]));
}

#[test]
fn test_any_solid_short_circuits() {
    let grid = room();
    let mut visited = 0;
    let points = [Vec2::new(0.5, 0.5), Vec2::new(1.5, 1.5), Vec2::new(2.5, 1.5)]
        .into_iter()
        .inspect(|_| visited += 1);
    assert!(grid.any_solid(points));
    assert_eq!(visited, 1);
}

#[test]
fn test_cells_iterates_row_major_with_coordinates() {
    let grid = room();
    let special: Vec<_> = grid
        .cells()
        .filter(|(_, _, cell)| *cell == CellState::Special)
        .collect();
    assert_eq!(special, vec![(2, 1, CellState::Special)]);
    assert_eq!(grid.cells().count(), 15);
}
