//! Neighbor lookup seam and the dense tile map container
//!
//! Cells are addressed as `[column, row]` with signed coordinates. Lookups
//! outside the map are not errors: they simply find no tile, which the
//! classifier treats as a different identity.

use crate::io::error::{Result, invalid_parameter};
use crate::tiles::tile::Tile;
use ndarray::Array2;
use std::fmt;
use std::sync::Arc;

/// Identity lookup used by the compositor
pub trait NeighborGrid {
    /// Tile occupying `cell`, or `None` for empty and out-of-range cells
    fn tile_at(&self, cell: [i32; 2]) -> Option<&Arc<dyn Tile>>;
}

/// Dense grid of shared tile references
///
/// Storage is an `Array2` indexed `(row, column)`. Each occupied cell holds a
/// clone of the tile's `Arc`, so an autotile cannot be destroyed while any
/// cell still references it.
pub struct TileMap {
    cells: Array2<Option<Arc<dyn Tile>>>,
    cell_size: [u32; 2],
}

impl TileMap {
    /// Create an empty map of `columns` x `rows` cells
    ///
    /// `cell_size` is the unscaled pixel size of one full tile cell.
    pub fn new(columns: usize, rows: usize, cell_size: [u32; 2]) -> Self {
        Self {
            cells: Array2::from_shape_simple_fn((rows, columns), || None),
            cell_size,
        }
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Unscaled pixel size of one tile cell
    pub const fn cell_size(&self) -> [u32; 2] {
        self.cell_size
    }

    /// Unscaled pixel size of the whole map
    pub fn pixel_size(&self) -> [u32; 2] {
        [
            self.cell_size[0].saturating_mul(self.columns() as u32),
            self.cell_size[1].saturating_mul(self.rows() as u32),
        ]
    }

    /// Place `tile` at `cell`, returning the tile previously there
    ///
    /// # Errors
    ///
    /// Returns an error if `cell` lies outside the map
    pub fn set(&mut self, cell: [i32; 2], tile: Arc<dyn Tile>) -> Result<Option<Arc<dyn Tile>>> {
        let (columns, rows) = (self.columns(), self.rows());
        let slot = Self::index(cell)
            .and_then(|index| self.cells.get_mut(index))
            .ok_or_else(|| {
                invalid_parameter(
                    "cell",
                    &format!("{cell:?}"),
                    &format!("outside the {columns}x{rows} map"),
                )
            })?;
        Ok(slot.replace(tile))
    }

    /// Empty `cell`, returning the tile that was there
    pub fn clear(&mut self, cell: [i32; 2]) -> Option<Arc<dyn Tile>> {
        Self::index(cell)
            .and_then(|index| self.cells.get_mut(index))
            .and_then(Option::take)
    }

    /// Empty every cell
    pub fn clear_all(&mut self) {
        self.cells.fill(None);
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Occupied cells in row-major order as `([column, row], tile)`
    pub fn occupied(&self) -> impl Iterator<Item = ([i32; 2], &Arc<dyn Tile>)> {
        self.cells
            .indexed_iter()
            .filter_map(|((row, column), tile)| {
                tile.as_ref()
                    .map(|tile| ([column as i32, row as i32], tile))
            })
    }

    fn index(cell: [i32; 2]) -> Option<(usize, usize)> {
        let column = usize::try_from(cell[0]).ok()?;
        let row = usize::try_from(cell[1]).ok()?;
        Some((row, column))
    }
}

impl NeighborGrid for TileMap {
    fn tile_at(&self, cell: [i32; 2]) -> Option<&Arc<dyn Tile>> {
        Self::index(cell)
            .and_then(|index| self.cells.get(index))
            .and_then(Option::as_ref)
    }
}

impl fmt::Debug for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileMap")
            .field("columns", &self.columns())
            .field("rows", &self.rows())
            .field("cell_size", &self.cell_size)
            .field("occupied", &self.occupied_count())
            .finish()
    }
}
