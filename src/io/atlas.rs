//! Sprite sheet slicing into per-frame buckets
//!
//! A WOLF autotile sheet is a grid of `2 * frame_count` columns by
//! [`ATLAS_ROWS`] rows of quadrant cells. Row pairs hold the shape classes in
//! order (outside, vertical, horizontal, inside, fill); the first row of a
//! pair holds the top quadrants and the second row the bottom ones. Column
//! pair `(2f, 2f + 1)` belongs to animation frame `f`.

use crate::io::configuration::{ATLAS_ROWS, BUCKET_LEN, COLUMNS_PER_FRAME};
use crate::io::error::{AutotileError, Result, invalid_parameter, invalid_source};
use crate::tiles::autotile::{AutoTile, FrameBucket};
use image::{ImageReader, RgbaImage};
use std::io::{BufRead, Seek};
use std::path::Path;

/// Pixel size a sheet must have for the given frame count and quadrant size
///
/// # Errors
///
/// Returns an error if the size overflows `u32`
pub fn required_sheet_size(frame_count: usize, quadrant_size: [u32; 2]) -> Result<[u32; 2]> {
    let columns = frame_count
        .checked_mul(COLUMNS_PER_FRAME)
        .and_then(|columns| u32::try_from(columns).ok());
    let width = columns.and_then(|columns| columns.checked_mul(quadrant_size[0]));
    let height = quadrant_size[1].checked_mul(ATLAS_ROWS as u32);

    width.zip(height).map(|(w, h)| [w, h]).ok_or_else(|| {
        invalid_parameter(
            "frame_count",
            &frame_count,
            &"sprite sheet size does not fit in 32 bits",
        )
    })
}

/// Split an image into `columns * rows` equally sized cells, row-major
///
/// Cell `(col, row)` covers the pixel rectangle
/// `[col * w, row * h, w, h]` and lands at index `row * columns + col`.
///
/// # Errors
///
/// Returns an error if:
/// - `cell_size` has a zero dimension
/// - `columns` or `rows` does not fit in 32 bits
/// - The image is smaller than the requested grid
pub fn split_grid(
    image: &RgbaImage,
    columns: usize,
    rows: usize,
    cell_size: [u32; 2],
) -> Result<Vec<RgbaImage>> {
    let [cell_width, cell_height] = cell_size;
    if cell_width == 0 || cell_height == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &format!("{cell_width}x{cell_height}"),
            &"both dimensions must be positive",
        ));
    }
    let (Ok(column_count), Ok(row_count)) = (u32::try_from(columns), u32::try_from(rows)) else {
        return Err(invalid_parameter(
            "columns",
            &format!("{columns}x{rows}"),
            &"grid dimensions must fit in 32 bits",
        ));
    };

    let needed_width = u64::from(cell_width) * u64::from(column_count);
    let needed_height = u64::from(cell_height) * u64::from(row_count);
    if u64::from(image.width()) < needed_width || u64::from(image.height()) < needed_height {
        return Err(invalid_source(&format!(
            "sprite sheet is {}x{} but {columns}x{rows} cells of {cell_width}x{cell_height} need {needed_width}x{needed_height}",
            image.width(),
            image.height(),
        )));
    }

    // Bounded by the pixel count once the size check passed
    let mut cells = Vec::with_capacity(columns * rows);
    for row in 0..row_count {
        for col in 0..column_count {
            let view = image::imageops::crop_imm(
                image,
                col * cell_width,
                row * cell_height,
                cell_width,
                cell_height,
            );
            cells.push(view.to_image());
        }
    }
    Ok(cells)
}

/// Regroup row-major sheet cells into one bucket per animation frame
///
/// For frame `f` and sheet row `r`, cells `r * 2F + 2f` and `r * 2F + 2f + 1`
/// become bucket entries `2r` and `2r + 1`.
///
/// # Errors
///
/// Returns an error if `frame_count` is zero or `cells` does not hold
/// exactly `2 * frame_count * 10` entries
pub fn group_frames(cells: &[RgbaImage], frame_count: usize) -> Result<Vec<FrameBucket>> {
    if frame_count < 1 {
        return Err(invalid_parameter(
            "frame_count",
            &frame_count,
            &"must be at least 1",
        ));
    }
    if frame_count.checked_mul(BUCKET_LEN) != Some(cells.len()) {
        return Err(invalid_source(&format!(
            "{} sheet cells do not form {frame_count} frame(s) of {BUCKET_LEN} cells",
            cells.len()
        )));
    }
    let width = frame_count * COLUMNS_PER_FRAME;

    let mut frames = Vec::with_capacity(frame_count);
    for first_column in (0..width).step_by(COLUMNS_PER_FRAME) {
        let mut bucket = Vec::with_capacity(BUCKET_LEN);
        for row in 0..ATLAS_ROWS {
            let offset = row * width + first_column;
            let pair = cells
                .get(offset..offset + COLUMNS_PER_FRAME)
                .ok_or_else(|| invalid_source(&format!("missing sheet cell {offset}")))?;
            bucket.extend_from_slice(pair);
        }
        frames.push(FrameBucket::try_from(bucket)?);
    }
    Ok(frames)
}

fn validate_layout(frame_count: usize, quadrant_size: [u32; 2]) -> Result<()> {
    if frame_count < 1 {
        return Err(invalid_parameter(
            "frame_count",
            &frame_count,
            &"must be at least 1",
        ));
    }
    if quadrant_size[0] == 0 || quadrant_size[1] == 0 {
        return Err(invalid_parameter(
            "quadrant_size",
            &format!("{}x{}", quadrant_size[0], quadrant_size[1]),
            &"both dimensions must be positive",
        ));
    }
    Ok(())
}

impl AutoTile {
    /// Slice a decoded sprite sheet into an autotile
    ///
    /// Pixels beyond the required `(2 * frame_count * qw, 10 * qh)` area are
    /// ignored with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `frame_count` is zero or `quadrant_size` has a zero dimension
    /// - `interval` is negative or not finite
    /// - The sheet is smaller than the packed layout requires
    pub fn from_image(
        sheet: &RgbaImage,
        frame_count: usize,
        quadrant_size: [u32; 2],
        interval: f64,
    ) -> Result<Self> {
        validate_layout(frame_count, quadrant_size)?;
        let [width, height] = required_sheet_size(frame_count, quadrant_size)?;
        if sheet.width() > width || sheet.height() > height {
            tracing::warn!(
                actual = ?sheet.dimensions(),
                expected = ?(width, height),
                "sprite sheet larger than its layout, extra pixels ignored"
            );
        }

        // required_sheet_size already bounded the column count
        let cells = split_grid(
            sheet,
            frame_count * COLUMNS_PER_FRAME,
            ATLAS_ROWS,
            quadrant_size,
        )?;
        let frames = group_frames(&cells, frame_count)?;
        let tile = Self::new(frames, interval)?;

        tracing::debug!(
            frame_count,
            quadrant = ?quadrant_size,
            interval,
            "autotile sliced"
        );
        Ok(tile)
    }

    /// Load and slice a sprite sheet file
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid (checked before any
    /// I/O), the file cannot be decoded, or the sheet is too small
    pub fn load_from_path<P: AsRef<Path>>(
        path: P,
        frame_count: usize,
        quadrant_size: [u32; 2],
        interval: f64,
    ) -> Result<Self> {
        validate_layout(frame_count, quadrant_size)?;
        let path = path.as_ref();
        let sheet = image::open(path)
            .map_err(|e| AutotileError::ImageLoad {
                path: path.to_path_buf(),
                source: e,
            })?
            .into_rgba8();
        tracing::debug!(path = %path.display(), "sprite sheet decoded");
        Self::from_image(&sheet, frame_count, quadrant_size, interval)
    }

    /// Load and slice a sprite sheet from an encoded byte stream
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, the stream cannot be
    /// read or decoded, or the sheet is too small
    pub fn load_from_reader<R: BufRead + Seek>(
        reader: R,
        frame_count: usize,
        quadrant_size: [u32; 2],
        interval: f64,
    ) -> Result<Self> {
        validate_layout(frame_count, quadrant_size)?;
        let sheet = ImageReader::new(reader)
            .with_guessed_format()?
            .decode()?
            .into_rgba8();
        Self::from_image(&sheet, frame_count, quadrant_size, interval)
    }
}
