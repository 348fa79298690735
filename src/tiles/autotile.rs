//! Autotile identity, frame buckets and the shape class / quadrant index layout
//!
//! An [`AutoTile`] owns one [`FrameBucket`] per animation frame. Every bucket
//! holds exactly [`BUCKET_LEN`] quadrant sub-images laid out as
//! `shape_class * 4 + quadrant`, which is also the row-major order of the
//! packed WOLF sprite sheet once each frame's two columns are read top to bottom.

use crate::animation::clock::{AnimationClock, FrameTime};
use crate::io::configuration::{BUCKET_LEN, QUADRANT_COUNT};
use crate::io::error::{AutotileError, Result, invalid_parameter, invalid_source};
use image::RgbaImage;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// How a quadrant's corner relates to same-identity neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeClass {
    /// Neither orthogonal neighbor matches
    Outside = 0,
    /// Only the vertical neighbor matches
    Vertical = 1,
    /// Only the horizontal neighbor matches
    Horizontal = 2,
    /// Both orthogonal neighbors match but the diagonal does not
    Inside = 3,
    /// All three neighbors match
    Fill = 4,
}

impl ShapeClass {
    /// All shape classes in sprite sheet order
    pub const ALL: [Self; 5] = [
        Self::Outside,
        Self::Vertical,
        Self::Horizontal,
        Self::Inside,
        Self::Fill,
    ];

    /// Position of this class in the packed layout
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One of the four sub-regions a tile cell is split into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    /// Upper left corner
    TopLeft = 0,
    /// Upper right corner
    TopRight = 1,
    /// Lower left corner
    BottomLeft = 2,
    /// Lower right corner
    BottomRight = 3,
}

impl Quadrant {
    /// All quadrants in draw order
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Position of this quadrant within a shape class
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column step towards the horizontal neighbor (-1 left, +1 right)
    pub const fn horizontal_step(self) -> i32 {
        match self {
            Self::TopLeft | Self::BottomLeft => -1,
            Self::TopRight | Self::BottomRight => 1,
        }
    }

    /// Row step towards the vertical neighbor (-1 up, +1 down)
    pub const fn vertical_step(self) -> i32 {
        match self {
            Self::TopLeft | Self::TopRight => -1,
            Self::BottomLeft | Self::BottomRight => 1,
        }
    }

    /// Unscaled screen offset of this quadrant inside its cell
    pub const fn offset(self, side: f32) -> [f32; 2] {
        match self {
            Self::TopLeft => [0.0, 0.0],
            Self::TopRight => [side, 0.0],
            Self::BottomLeft => [0.0, side],
            Self::BottomRight => [side, side],
        }
    }
}

/// Index of a (shape class, quadrant) pair inside a [`FrameBucket`]
pub const fn bucket_index(shape: ShapeClass, quadrant: Quadrant) -> usize {
    shape.index() * QUADRANT_COUNT + quadrant.index()
}

/// The twenty quadrant sub-images of one animation frame
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBucket {
    images: Box<[RgbaImage; BUCKET_LEN]>,
}

impl FrameBucket {
    /// Sub-image drawn for a quadrant of the given shape class
    // bucket_index is below BUCKET_LEN for every enum pair
    #[allow(clippy::indexing_slicing)]
    pub fn get(&self, shape: ShapeClass, quadrant: Quadrant) -> &RgbaImage {
        &self.images[bucket_index(shape, quadrant)]
    }

    /// All sub-images in bucket order
    pub fn images(&self) -> &[RgbaImage] {
        self.images.as_slice()
    }

    /// Number of sub-images, always [`BUCKET_LEN`]
    pub const fn len(&self) -> usize {
        BUCKET_LEN
    }

    /// Buckets are never empty
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl TryFrom<Vec<RgbaImage>> for FrameBucket {
    type Error = AutotileError;

    fn try_from(images: Vec<RgbaImage>) -> Result<Self> {
        let count = images.len();
        let images: Box<[RgbaImage; BUCKET_LEN]> = images
            .into_boxed_slice()
            .try_into()
            .map_err(|_rejected: Box<[RgbaImage]>| {
                invalid_source(&format!(
                    "frame bucket needs exactly {BUCKET_LEN} sub-images, got {count}"
                ))
            })?;
        Ok(Self { images })
    }
}

impl fmt::Debug for FrameBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self
            .images
            .first()
            .map_or((0, 0), |image| image.dimensions());
        f.debug_struct("FrameBucket")
            .field("len", &BUCKET_LEN)
            .field("quadrant_size", &(width, height))
            .finish()
    }
}

/// A shared, animated corner autotile
///
/// Grid cells hold the tile by `Arc`; identity (not pixel equality) decides
/// whether two neighboring cells join. The animation state is stored once per
/// tile, so every placement animates in lockstep.
pub struct AutoTile {
    frames: Vec<FrameBucket>,
    interval: f64,
    clock: Mutex<AnimationClock>,
}

impl AutoTile {
    /// Create an autotile from precomputed frame buckets
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `frames` is empty
    /// - `interval` is negative or not finite
    /// - Sub-images differ in size or have a zero dimension
    pub fn new(frames: Vec<FrameBucket>, interval: f64) -> Result<Self> {
        if !interval.is_finite() || interval < 0.0 {
            return Err(invalid_parameter(
                "interval",
                &interval,
                &"must be a finite, non-negative number of seconds",
            ));
        }

        let Some(first) = frames.first() else {
            return Err(invalid_source(&"an autotile needs at least one frame"));
        };

        let size = first.get(ShapeClass::Outside, Quadrant::TopLeft).dimensions();
        if size.0 == 0 || size.1 == 0 {
            return Err(invalid_source(&"quadrant sub-images must not be empty"));
        }
        let mismatched = frames
            .iter()
            .flat_map(FrameBucket::images)
            .any(|image| image.dimensions() != size);
        if mismatched {
            return Err(invalid_source(
                &"all quadrant sub-images of an autotile must share one size",
            ));
        }

        Ok(Self {
            frames,
            interval,
            clock: Mutex::new(AnimationClock::default()),
        })
    }

    /// All animation frames in order
    pub fn frames(&self) -> &[FrameBucket] {
        &self.frames
    }

    /// Number of animation frames (at least one)
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Seconds each animation frame is shown
    pub const fn interval(&self) -> f64 {
        self.interval
    }

    /// Index of the frame currently shown
    pub fn animation_state(&self) -> usize {
        self.clock.lock().animation_state()
    }

    /// Snapshot of the shared animation clock
    pub fn clock(&self) -> AnimationClock {
        self.clock.lock().clone()
    }

    /// Pixel size of one quadrant sub-image
    pub fn quadrant_size(&self) -> [u32; 2] {
        let (width, height) = self
            .frames
            .first()
            .map_or((0, 0), |bucket| {
                bucket.get(ShapeClass::Outside, Quadrant::TopLeft).dimensions()
            });
        [width, height]
    }

    /// Bucket for the frame currently shown
    pub fn current_bucket(&self) -> Option<&FrameBucket> {
        self.frames.get(self.animation_state())
    }

    /// Advance the shared animation clock for one host frame
    ///
    /// Repeated calls with the same marker are ignored, so every cell that
    /// references this tile may call it. Returns the frame index to draw.
    pub fn tick(&self, time: FrameTime) -> usize {
        let mut clock = self.clock.lock();
        if clock.tick(time, self.interval, self.frames.len()) {
            tracing::trace!(
                state = clock.animation_state(),
                marker = time.marker,
                "autotile advanced"
            );
        }
        clock.animation_state()
    }

    /// Release every sub-image held by this tile
    ///
    /// Returns the number of released sub-images (`frame_count * 20`).
    ///
    /// # Errors
    ///
    /// Returns [`AutotileError::StillReferenced`] if grid cells or other
    /// owners still hold the tile. The error carries the handle back so the
    /// destroy can be retried once the other owners are gone.
    pub fn destroy(tile: Arc<Self>) -> Result<usize> {
        let references = Arc::strong_count(&tile);
        let tile = Arc::try_unwrap(tile)
            .map_err(|tile| AutotileError::StillReferenced { tile, references })?;

        let released = tile.frames.iter().map(FrameBucket::len).sum();
        drop(tile);
        tracing::debug!(released, "autotile destroyed");
        Ok(released)
    }
}

impl fmt::Debug for AutoTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoTile")
            .field("frame_count", &self.frames.len())
            .field("quadrant_size", &self.quadrant_size())
            .field("interval", &self.interval)
            .field("clock", &*self.clock.lock())
            .finish()
    }
}
