//! Occupancy mask parsing into a tile map
//!
//! One mask pixel is one grid cell. Pixels whose alpha reaches
//! [`MASK_ALPHA_THRESHOLD`] receive the tile; all others stay empty.

use crate::io::configuration::MASK_ALPHA_THRESHOLD;
use crate::io::error::{AutotileError, Result, invalid_source};
use crate::tiles::grid::TileMap;
use crate::tiles::tile::Tile;
use image::RgbaImage;
use std::path::Path;
use std::sync::Arc;

/// Build a map from a decoded mask, sharing `tile` across occupied cells
///
/// # Errors
///
/// Returns an error if the mask has no occupied pixel
pub fn map_from_mask_image(
    mask: &RgbaImage,
    tile: &Arc<dyn Tile>,
    cell_size: [u32; 2],
) -> Result<TileMap> {
    let (width, height) = mask.dimensions();
    let mut map = TileMap::new(width as usize, height as usize, cell_size);

    for (x, y, pixel) in mask.enumerate_pixels() {
        if pixel.0[3] >= MASK_ALPHA_THRESHOLD {
            map.set([x as i32, y as i32], Arc::clone(tile))?;
        }
    }

    if map.occupied_count() == 0 {
        return Err(invalid_source(&"mask has no occupied cells"));
    }
    tracing::debug!(
        columns = width,
        rows = height,
        occupied = map.occupied_count(),
        "tile map built from mask"
    );
    Ok(map)
}

/// Load a PNG mask and build a map from it
///
/// # Errors
///
/// Returns an error if the mask cannot be decoded or has no occupied pixel
pub fn map_from_mask(path: &Path, tile: &Arc<dyn Tile>, cell_size: [u32; 2]) -> Result<TileMap> {
    let mask = image::open(path)
        .map_err(|e| AutotileError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgba8();
    map_from_mask_image(&mask, tile, cell_size)
}
