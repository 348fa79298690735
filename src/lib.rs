//! WOLF RPG Editor compatible corner autotiles
//!
//! A sprite sheet is sliced into per-frame buckets of twenty quadrant images.
//! When a cell is drawn, each of its four quadrants is classified against the
//! neighboring cells into one of five shape classes, and the matching
//! sub-image of the tile's current animation frame is handed to a renderer.

#![forbid(unsafe_code)]

/// Shared animation clock driving frame selection
pub mod animation;
/// Sprite sheet loading, map masks, export, configuration and errors
pub mod io;
/// Renderer seam, compositor and software canvas
pub mod render;
/// Autotile identity, corner classification and tile grids
pub mod tiles;

pub use animation::clock::FrameTime;
pub use io::error::{AutotileError, Result};
pub use render::renderer::{DrawParams, Renderer};
pub use tiles::autotile::{AutoTile, FrameBucket, Quadrant, ShapeClass};
pub use tiles::grid::{NeighborGrid, TileMap};
pub use tiles::tile::Tile;
