//! Persisted level layout as written by the level export tool.

use serde::{Deserialize, Serialize};

/// Raw cell value for an empty cell.
pub const CELL_EMPTY: u8 = 0;
/// Raw cell value for a solid cell.
pub const CELL_SOLID: u8 = 1;
/// Raw cell value for marked "special" terrain (e.g. a collectible zone).
pub const CELL_SPECIAL: u8 = 2;

/// `{ cells, dim, start }` level file. `cells` is column-major: `cells[x][y]`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MapLayoutDef {
    pub cells: Vec<Vec<u8>>,
    /// `[width, height]` in cells.
    pub dim: [u32; 2],
    /// Player spawn, top-left of the bounding box, in world units.
    pub start: [f32; 2],
}
