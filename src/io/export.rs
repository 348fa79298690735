//! PNG and animated GIF export of rendered frames

use crate::io::error::{AutotileError, Result, invalid_source};
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AutotileError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

/// Save a single rendered frame as PNG
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be written
pub fn export_png(frame: &RgbaImage, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    frame
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| AutotileError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Save rendered frames as an endlessly looping GIF
///
/// # Errors
///
/// Returns an error if:
/// - `frames` is empty
/// - The parent directory or the file cannot be created
/// - GIF encoding fails
pub fn export_gif(frames: Vec<RgbaImage>, frame_delay_ms: u32, path: &Path) -> Result<()> {
    if frames.is_empty() {
        return Err(invalid_source(&"no frames rendered for animation export"));
    }
    ensure_parent(path)?;

    let file = std::fs::File::create(path).map_err(|e| AutotileError::FileSystem {
        path: path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let delay = Delay::from_numer_denom_ms(frame_delay_ms, 1);
    let export_error = |e| AutotileError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    };

    let mut encoder = image::codecs::gif::GifEncoder::new(file);
    encoder
        .set_repeat(image::codecs::gif::Repeat::Infinite)
        .map_err(export_error)?;
    encoder
        .encode_frames(
            frames
                .into_iter()
                .map(|buffer| Frame::from_parts(buffer, 0, 0, delay)),
        )
        .map_err(export_error)?;

    Ok(())
}
