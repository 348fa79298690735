//! Per-cell autotile composition and map-wide drawing
//!
//! For one cell the compositor ticks the tile's shared clock, classifies each
//! of the four quadrants against the neighbor grid and issues one draw per
//! quadrant with the sub-image picked from the active frame bucket.

use crate::animation::clock::FrameTime;
use crate::render::renderer::{DrawParams, Renderer};
use crate::tiles::autotile::{AutoTile, Quadrant, ShapeClass};
use crate::tiles::classifier::classify;
use crate::tiles::grid::{NeighborGrid, TileMap};
use crate::tiles::tile::{TileDrawContext, is_same_tile};

/// Shape class of one quadrant of `cell`
///
/// Neighbors outside the grid, or whose coordinates would overflow, count as
/// a different identity.
pub fn classify_quadrant(
    tile: &AutoTile,
    grid: &dyn NeighborGrid,
    cell: [i32; 2],
    quadrant: Quadrant,
) -> ShapeClass {
    let step_x = quadrant.horizontal_step();
    let step_y = quadrant.vertical_step();

    let same = |dx: i32, dy: i32| {
        let neighbor = cell[0]
            .checked_add(dx)
            .zip(cell[1].checked_add(dy))
            .map(|(x, y)| [x, y]);
        neighbor.is_some_and(|neighbor| is_same_tile(grid.tile_at(neighbor), tile))
    };

    classify(same(step_x, 0), same(0, step_y), same(step_x, step_y))
}

/// Shape classes of all four quadrants of `cell`, in [`Quadrant::ALL`] order
pub fn classify_cell(
    tile: &AutoTile,
    grid: &dyn NeighborGrid,
    cell: [i32; 2],
) -> [ShapeClass; 4] {
    Quadrant::ALL.map(|quadrant| classify_quadrant(tile, grid, cell, quadrant))
}

/// Draw one autotile cell
///
/// Ticks the shared animation clock for `time`, then draws the four quadrants
/// at `params.position + offset * params.scale`, where the offsets are
/// `(0, 0)`, `(L, 0)`, `(0, L)` and `(L, L)` for a quadrant side `L`. Scale,
/// rotation and tint are passed through to the renderer unchanged.
pub fn draw_autotile(
    tile: &AutoTile,
    grid: &dyn NeighborGrid,
    cell: [i32; 2],
    time: FrameTime,
    params: &DrawParams,
    renderer: &mut dyn Renderer,
) {
    let frame = tile.tick(time);
    let Some(bucket) = tile.frames().get(frame) else {
        return;
    };
    let side = tile.quadrant_size()[0] as f32;

    for quadrant in Quadrant::ALL {
        let shape = classify_quadrant(tile, grid, cell, quadrant);
        let placement = params.offset_by(quadrant.offset(side));
        renderer.draw_image(bucket.get(shape, quadrant), &placement);
    }
}

/// Draw every occupied cell of `map` in row-major order
///
/// `params.position` is the screen position of the map's top-left corner;
/// each cell is placed at its column and row times the scaled cell size.
pub fn draw_map(
    map: &TileMap,
    time: FrameTime,
    params: &DrawParams,
    renderer: &mut dyn Renderer,
) {
    let [cell_width, cell_height] = map.cell_size();

    for (cell, tile) in map.occupied() {
        let offset = [
            cell[0] as f32 * cell_width as f32,
            cell[1] as f32 * cell_height as f32,
        ];
        let mut context = TileDrawContext {
            grid: map,
            cell,
            time,
            params: params.offset_by(offset),
            renderer: &mut *renderer,
        };
        tile.draw(&mut context);
    }
}
