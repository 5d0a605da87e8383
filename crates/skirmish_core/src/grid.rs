//! Grid coordinate model.
//!
//! Converts between continuous world positions and discrete grid cells,
//! and answers bounds queries. All functions are pure; the playfield
//! dimensions live in a single shared [`GridConfig`].

use serde::{Deserialize, Serialize};

use crate::math::{Fixed, Vec2Fixed};

/// A discrete grid cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl GridPos {
    /// Create a new grid position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the cell offset by the given deltas.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Playfield dimensions shared by every unit.
///
/// `width` and `height` are the continuous extents of the playfield;
/// `cell_size` is the edge length of one grid cell. Cells that only
/// partially fit inside the playfield are out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Edge length of one grid cell.
    pub cell_size: u32,
    /// Playfield width in world units.
    pub width: u32,
    /// Playfield height in world units.
    pub height: u32,
}

impl GridConfig {
    /// Create a new grid configuration.
    ///
    /// `cell_size` must be non-zero.
    #[must_use]
    pub const fn new(cell_size: u32, width: u32, height: u32) -> Self {
        Self {
            cell_size,
            width,
            height,
        }
    }

    /// Number of whole columns that fit in the playfield.
    #[must_use]
    pub const fn cols(&self) -> i32 {
        (self.width / self.cell_size) as i32
    }

    /// Number of whole rows that fit in the playfield.
    #[must_use]
    pub const fn rows(&self) -> i32 {
        (self.height / self.cell_size) as i32
    }

    /// Convert a continuous position to its containing grid cell
    /// via floor division.
    #[must_use]
    pub fn to_grid(&self, pos: Vec2Fixed) -> GridPos {
        let cell = Fixed::from_num(self.cell_size);
        GridPos {
            x: (pos.x / cell).floor().to_num::<i32>(),
            y: (pos.y / cell).floor().to_num::<i32>(),
        }
    }

    /// Convert a grid cell to its continuous top-left corner position.
    #[must_use]
    pub fn to_world(&self, cell: GridPos) -> Vec2Fixed {
        let size = Fixed::from_num(self.cell_size);
        Vec2Fixed::new(Fixed::from_num(cell.x) * size, Fixed::from_num(cell.y) * size)
    }

    /// Check whether a cell lies within `[0, cols-1] × [0, rows-1]`.
    #[must_use]
    pub const fn in_bounds(&self, cell: GridPos) -> bool {
        cell.x >= 0 && cell.x < self.cols() && cell.y >= 0 && cell.y < self.rows()
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        // Matches the bundled demo playfield: 800x600 with 40-unit cells.
        Self::new(40, 800, 600)
    }
}
