//! Map domain: cell storage and point solidity queries.

use bevy::prelude::*;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Solid,
    /// Marked terrain from the level export. Not solid.
    Special,
}

/// Error returned when cell storage does not match the requested dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridShapeError {
    pub width: u32,
    pub height: u32,
    pub cells: usize,
}

impl std::fmt::Display for GridShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "grid of {}x{} cannot hold {} cells",
            self.width, self.height, self.cells
        )
    }
}

impl std::error::Error for GridShapeError {}

/// Immutable 2D tile grid. Cell edge length is one world unit and the origin
/// is the top-left corner, with y growing downward.
///
/// Every query is total: anything outside `[0, width) x [0, height)` reads as
/// [`CellState::Solid`], so the grid behaves as if walled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    /// Row-major, `cells[y * width + x]`.
    cells: Vec<CellState>,
}

impl TileGrid {
    pub fn new(width: u32, height: u32, cells: Vec<CellState>) -> Result<Self, GridShapeError> {
        if width == 0 || height == 0 || cells.len() != width as usize * height as usize {
            return Err(GridShapeError {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build from column-major storage (`columns[x][y]`), the layout used by
    /// persisted level files.
    pub fn from_columns(columns: &[Vec<CellState>]) -> Result<Self, GridShapeError> {
        let width = columns.len() as u32;
        let height = columns.first().map_or(0, |c| c.len()) as u32;
        if columns.iter().any(|c| c.len() as u32 != height) {
            return Err(GridShapeError {
                width,
                height,
                cells: columns.iter().map(Vec::len).sum(),
            });
        }

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height as usize {
            for column in columns {
                cells.push(column[y]);
            }
        }
        Self::new(width, height, cells)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cell containing the world point `(x, y)`.
    pub fn cell_at(&self, x: f32, y: f32) -> CellState {
        let (cx, cy) = (x.floor(), y.floor());
        // NaN fails every comparison below, so it falls through to Solid too
        if !(cx >= 0.0 && cx < self.width as f32 && cy >= 0.0 && cy < self.height as f32) {
            return CellState::Solid;
        }
        self.cells[cy as usize * self.width as usize + cx as usize]
    }

    pub fn is_solid(&self, x: f32, y: f32) -> bool {
        self.cell_at(x, y) == CellState::Solid
    }

    pub fn is_solid_at(&self, point: Vec2) -> bool {
        self.is_solid(point.x, point.y)
    }

    /// True if any point lies in a solid cell. Stops at the first hit.
    pub fn any_solid(&self, points: impl IntoIterator<Item = Vec2>) -> bool {
        points.into_iter().any(|p| self.is_solid_at(p))
    }

    /// Every in-bounds cell with its integer coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, CellState)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i as u32 % width, i as u32 / width, *cell))
    }

    /// Build a grid from text rows: `#` solid, `$` special, anything else empty.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        let cells = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(|c| match c {
                '#' => CellState::Solid,
                '$' => CellState::Special,
                _ => CellState::Empty,
            })
            .collect();
        Self::new(width, height, cells).expect("rows must be rectangular")
    }
}
