//! Command-line preview of an autotile sheet over an occupancy mask

use crate::animation::clock::FrameTime;
use crate::io::configuration::{
    DEFAULT_FRAME_COUNT, DEFAULT_FRAME_DELTA_MS, DEFAULT_INTERVAL, DEFAULT_QUADRANT_SIZE,
    DEFAULT_RENDER_FRAMES, DEFAULT_SCALE, MAX_CANVAS_SIDE, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::{export_gif, export_png};
use crate::io::mask::map_from_mask;
use crate::io::progress::RenderProgress;
use crate::render::canvas::ImageCanvas;
use crate::render::compositor::draw_map;
use crate::render::renderer::DrawParams;
use crate::tiles::autotile::AutoTile;
use crate::tiles::tile::Tile;
use clap::Parser;
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "wolftile")]
#[command(
    author,
    version,
    about = "Render WOLF RPG Editor autotiles over a PNG occupancy mask"
)]
/// Command-line arguments for the preview tool
pub struct Cli {
    /// Autotile sprite sheet (2 columns per frame, 10 rows of quadrants)
    #[arg(value_name = "SHEET")]
    pub sheet: PathBuf,

    /// Occupancy mask, one pixel per cell (opaque pixels hold the autotile)
    #[arg(value_name = "MASK")]
    pub mask: PathBuf,

    /// Number of animation frames in the sheet
    #[arg(short, long, default_value_t = DEFAULT_FRAME_COUNT)]
    pub frames: usize,

    /// Quadrant side length in pixels
    #[arg(short, long, default_value_t = DEFAULT_QUADRANT_SIZE)]
    pub quadrant_size: u32,

    /// Seconds each animation frame is shown
    #[arg(short, long, default_value_t = DEFAULT_INTERVAL)]
    pub interval: f64,

    /// Render scale
    #[arg(short, long, default_value_t = DEFAULT_SCALE)]
    pub scale: f32,

    /// Host frames to render (1 writes a PNG, more write a GIF)
    #[arg(short = 'n', long, default_value_t = DEFAULT_RENDER_FRAMES)]
    pub render_frames: usize,

    /// Simulated host frame time in milliseconds, also the GIF frame delay
    #[arg(short, long, default_value_t = DEFAULT_FRAME_DELTA_MS)]
    pub delta_ms: u32,

    /// Output path (defaults to `<mask>_preview.png` or `.gif`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Tint applied to every quadrant, as RRGGBB or RRGGBBAA hex
    #[arg(short, long, value_parser = parse_tint)]
    pub tint: Option<Rgba<u8>>,

    /// Suppress progress output
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if an animated GIF should be written instead of a PNG
    pub const fn is_animated(&self) -> bool {
        self.render_frames > 1
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Simulated host frame time in seconds
    pub fn frame_delta(&self) -> f64 {
        f64::from(self.delta_ms) / 1000.0
    }
}

/// Parse a `RRGGBB` or `RRGGBBAA` hex color, with an optional leading `#`
///
/// # Errors
///
/// Returns a message if the text is not 6 or 8 hex digits
pub fn parse_tint(text: &str) -> std::result::Result<Rgba<u8>, String> {
    let digits = text.trim_start_matches('#');
    if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("'{text}' is not an RRGGBB or RRGGBBAA hex color"));
    }

    let mut channels = [u8::MAX; 4];
    for (channel, start) in channels.iter_mut().zip((0..digits.len()).step_by(2)) {
        let pair = digits.get(start..start + 2).unwrap_or("ff");
        *channel = u8::from_str_radix(pair, 16).map_err(|e| e.to_string())?;
    }
    Ok(Rgba(channels))
}

/// Loads a sheet and mask, renders host frames and writes the preview
pub struct Previewer {
    cli: Cli,
}

impl Previewer {
    /// Create a previewer for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Where the preview will be written
    pub fn output_path(&self) -> PathBuf {
        self.cli.output.clone().unwrap_or_else(|| {
            let extension = if self.cli.is_animated() { "gif" } else { "png" };
            Self::default_output_path(&self.cli.mask, extension)
        })
    }

    fn default_output_path(mask: &Path, extension: &str) -> PathBuf {
        let stem = mask.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

        if let Some(parent) = mask.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.cli.scale.is_finite() || self.cli.scale <= 0.0 {
            return Err(invalid_parameter(
                "scale",
                &self.cli.scale,
                &"must be a positive number",
            ));
        }
        if self.cli.render_frames == 0 {
            return Err(invalid_parameter(
                "render_frames",
                &self.cli.render_frames,
                &"at least one frame must be rendered",
            ));
        }
        Ok(())
    }

    // Scaled map size, refused when a side exceeds MAX_CANVAS_SIDE
    fn canvas_size(&self, map_size: [u32; 2]) -> Result<[u32; 2]> {
        let scale = f64::from(self.cli.scale);
        let scaled = map_size.map(|side| (f64::from(side) * scale).ceil());
        if scaled
            .iter()
            .any(|side| !side.is_finite() || *side > f64::from(MAX_CANVAS_SIDE))
        {
            return Err(invalid_parameter(
                "scale",
                &self.cli.scale,
                &format!(
                    "a {}x{} map would exceed {MAX_CANVAS_SIDE} pixels per side",
                    map_size[0], map_size[1]
                ),
            ));
        }
        Ok(scaled.map(|side| side as u32))
    }

    /// Render every requested host frame
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, the sheet or mask
    /// cannot be loaded, or the sheet does not match the requested layout
    pub fn render(&self) -> Result<Vec<RgbaImage>> {
        self.validate()?;

        let quadrant = self.cli.quadrant_size;
        let tile = Arc::new(AutoTile::load_from_path(
            &self.cli.sheet,
            self.cli.frames,
            [quadrant, quadrant],
            self.cli.interval,
        )?);
        let shared: Arc<dyn Tile> = tile.clone();
        let cell = quadrant.saturating_mul(2);
        let map = map_from_mask(&self.cli.mask, &shared, [cell, cell])?;

        let scale = self.cli.scale;
        let [width, height] = self.canvas_size(map.pixel_size())?;
        let mut canvas = ImageCanvas::new(width, height);
        let params = DrawParams::at([0.0, 0.0])
            .with_scale([scale, scale])
            .with_tint(self.cli.tint);

        let name = self
            .cli
            .mask
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let progress = if self.cli.should_show_progress() {
            RenderProgress::new(&name, self.cli.render_frames)
        } else {
            RenderProgress::hidden(self.cli.render_frames)
        };

        let delta = self.cli.frame_delta();
        let mut frames = Vec::with_capacity(self.cli.render_frames);
        for marker in 0..self.cli.render_frames as u64 {
            canvas.clear(Rgba([0, 0, 0, 0]));
            draw_map(&map, FrameTime::new(marker, delta), &params, &mut canvas);
            frames.push(canvas.image().clone());
            progress.frame_rendered();
        }
        progress.finish();

        drop(map);
        drop(shared);
        let released = AutoTile::destroy(tile)?;
        tracing::debug!(frames = frames.len(), released, "preview rendered");

        Ok(frames)
    }

    /// Render and write the preview, returning the output path
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or export fails
    pub fn run(&self) -> Result<PathBuf> {
        let output_path = self.output_path();
        let mut frames = self.render()?;

        if self.cli.is_animated() {
            export_gif(frames, self.cli.delta_ms, &output_path)?;
        } else if let Some(frame) = frames.pop() {
            export_png(&frame, &output_path)?;
        }

        Ok(output_path)
    }
}
