//! Sprite sheet layout constants and runtime configuration defaults

// Packed WOLF autotile layout
/// Rows of quadrant cells in every sprite sheet
pub const ATLAS_ROWS: usize = 10;
/// Quadrant columns occupied by one animation frame
pub const COLUMNS_PER_FRAME: usize = 2;
/// Number of shape classes (outside, vertical, horizontal, inside, fill)
pub const SHAPE_CLASS_COUNT: usize = 5;
/// Number of quadrants a tile cell is split into
pub const QUADRANT_COUNT: usize = 4;
/// Sub-images per animation frame
pub const BUCKET_LEN: usize = SHAPE_CLASS_COUNT * QUADRANT_COUNT;

/// Frame interval used when none is given (advance on every host frame)
pub const DEFAULT_INTERVAL: f64 = 0.0;

// Command-line defaults
/// Default quadrant side length in pixels
pub const DEFAULT_QUADRANT_SIZE: u32 = 16;
/// Default number of animation frames in a sheet
pub const DEFAULT_FRAME_COUNT: usize = 1;
/// Default render scale
pub const DEFAULT_SCALE: f32 = 1.0;
/// Default number of host frames to render
pub const DEFAULT_RENDER_FRAMES: usize = 1;
/// Default simulated host frame time, also used as the GIF frame delay
pub const DEFAULT_FRAME_DELTA_MS: u32 = 100;

/// Largest preview canvas side in pixels after scaling
pub const MAX_CANVAS_SIDE: u32 = 16_384;

// Mask interpretation
/// Minimum mask alpha for a cell to hold the autotile
pub const MASK_ALPHA_THRESHOLD: u8 = 128;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_preview";
