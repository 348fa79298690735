//! Tile kinds and the grids holding them
//!
//! This module contains:
//! - Autotile frame buckets and the shape class / quadrant layout
//! - The corner classification table
//! - The tile capability trait and static tiles
//! - Neighbor lookup and the tile map container

/// Autotile identity and frame buckets
pub mod autotile;
/// Corner classification
pub mod classifier;
/// Neighbor grids and tile maps
pub mod grid;
/// Tile capability trait
pub mod tile;

pub use autotile::{AutoTile, FrameBucket, Quadrant, ShapeClass};
pub use grid::{NeighborGrid, TileMap};
