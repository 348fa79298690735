//! Tile capability shared by every tile kind a grid can hold

use crate::animation::clock::FrameTime;
use crate::render::compositor::draw_autotile;
use crate::render::renderer::{DrawParams, Renderer};
use crate::tiles::autotile::AutoTile;
use crate::tiles::grid::NeighborGrid;
use image::RgbaImage;
use std::fmt;
use std::sync::Arc;

/// Everything a tile needs to draw itself at one grid cell
pub struct TileDrawContext<'a> {
    /// Grid the tile is placed in, used for neighbor lookups
    pub grid: &'a dyn NeighborGrid,
    /// Cell being drawn as `[column, row]`
    pub cell: [i32; 2],
    /// Host frame being rendered
    pub time: FrameTime,
    /// Screen placement of the cell's top-left corner
    pub params: DrawParams,
    /// Backend receiving the draw calls
    pub renderer: &'a mut dyn Renderer,
}

/// A tile kind that can be placed in a grid
///
/// Tiles are shared between cells by `Arc`; two cells hold the same tile
/// exactly when their `Arc`s point at the same allocation.
pub trait Tile: Send + Sync {
    /// Draw this tile at `context.cell`
    fn draw(&self, context: &mut TileDrawContext<'_>);
}

/// Check whether a grid entry is this very tile instance
///
/// Identity is pointer identity; an empty entry never matches.
pub fn is_same_tile<T: Tile>(entry: Option<&Arc<dyn Tile>>, tile: &T) -> bool {
    entry.is_some_and(|other| std::ptr::addr_eq(Arc::as_ptr(other), std::ptr::from_ref(tile)))
}

impl Tile for AutoTile {
    fn draw(&self, context: &mut TileDrawContext<'_>) {
        draw_autotile(
            self,
            context.grid,
            context.cell,
            context.time,
            &context.params,
            &mut *context.renderer,
        );
    }
}

/// A plain tile drawn as one full-cell image regardless of its neighbors
#[derive(Clone, PartialEq, Eq)]
pub struct StaticTile {
    image: RgbaImage,
}

impl StaticTile {
    /// Wrap a full-cell image
    pub const fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// The image drawn for every placement
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }
}

impl Tile for StaticTile {
    fn draw(&self, context: &mut TileDrawContext<'_>) {
        context.renderer.draw_image(&self.image, &context.params);
    }
}

impl fmt::Debug for StaticTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTile")
            .field("size", &self.image.dimensions())
            .finish()
    }
}
