//! Software renderer that rasterizes sub-images into an RGBA buffer
//!
//! Sampling is nearest-neighbor through the inverse of the draw transform
//! (scale, then rotation about the draw position), followed by a
//! multiplicative tint and source-over alpha blending.

use crate::render::renderer::{DrawParams, Renderer};
use image::{Rgba, RgbaImage};

/// In-memory render target
#[derive(Debug, Clone)]
pub struct ImageCanvas {
    target: RgbaImage,
    draw_calls: usize,
}

impl ImageCanvas {
    /// Create a transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            target: RgbaImage::new(width, height),
            draw_calls: 0,
        }
    }

    /// Fill the whole canvas with `color` and reset the draw counter
    pub fn clear(&mut self, color: Rgba<u8>) {
        for pixel in self.target.pixels_mut() {
            *pixel = color;
        }
        self.draw_calls = 0;
    }

    /// Rendered pixels
    pub const fn image(&self) -> &RgbaImage {
        &self.target
    }

    /// Consume the canvas and return its pixels
    pub fn into_image(self) -> RgbaImage {
        self.target
    }

    /// Number of draw calls received since creation or the last clear
    pub const fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    // Screen-space bounds of the transformed image, clamped to the canvas
    fn covered_region(
        &self,
        size: (u32, u32),
        params: &DrawParams,
        sin: f32,
        cos: f32,
    ) -> Option<(u32, u32, u32, u32)> {
        let (width, height) = (size.0 as f32, size.1 as f32);
        let [scale_x, scale_y] = params.scale;
        let [origin_x, origin_y] = params.position;

        let corners = [[0.0, 0.0], [width, 0.0], [0.0, height], [width, height]].map(|[x, y]| {
            let (local_x, local_y) = (x * scale_x, y * scale_y);
            [
                origin_x + local_x * cos - local_y * sin,
                origin_y + local_x * sin + local_y * cos,
            ]
        });

        let min_x = corners.iter().map(|c| c[0]).fold(f32::INFINITY, f32::min);
        let max_x = corners.iter().map(|c| c[0]).fold(f32::NEG_INFINITY, f32::max);
        let min_y = corners.iter().map(|c| c[1]).fold(f32::INFINITY, f32::min);
        let max_y = corners.iter().map(|c| c[1]).fold(f32::NEG_INFINITY, f32::max);

        let x0 = min_x.floor().max(0.0) as u32;
        let y0 = min_y.floor().max(0.0) as u32;
        let x1 = (max_x.ceil().max(0.0) as u32).min(self.target.width());
        let y1 = (max_y.ceil().max(0.0) as u32).min(self.target.height());

        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }
}

impl Renderer for ImageCanvas {
    fn draw_image(&mut self, image: &RgbaImage, params: &DrawParams) {
        self.draw_calls += 1;

        let [scale_x, scale_y] = params.scale;
        let degenerate = scale_x == 0.0 || scale_y == 0.0;
        if degenerate || !scale_x.is_finite() || !scale_y.is_finite() {
            return;
        }

        let (sin, cos) = params.rotation.sin_cos();
        let Some((x0, y0, x1, y1)) = self.covered_region(image.dimensions(), params, sin, cos)
        else {
            return;
        };
        let [origin_x, origin_y] = params.position;

        for y in y0..y1 {
            for x in x0..x1 {
                // Sample at the pixel center, undoing rotation then scale
                let dx = x as f32 + 0.5 - origin_x;
                let dy = y as f32 + 0.5 - origin_y;
                let u = (dx * cos + dy * sin) / scale_x;
                let v = (-dx * sin + dy * cos) / scale_y;
                if u < 0.0 || v < 0.0 {
                    continue;
                }

                let Some(source) = image.get_pixel_checked(u as u32, v as u32) else {
                    continue;
                };
                let source = apply_tint(*source, params.tint);
                if let Some(destination) = self.target.get_pixel_mut_checked(x, y) {
                    *destination = blend_over(source, *destination);
                }
            }
        }
    }
}

/// Multiply every channel by the tint
pub fn apply_tint(color: Rgba<u8>, tint: Option<Rgba<u8>>) -> Rgba<u8> {
    let Some(tint) = tint else {
        return color;
    };
    let mut channels = color.0;
    for (channel, factor) in channels.iter_mut().zip(tint.0) {
        *channel = ((u16::from(*channel) * u16::from(factor) + 127) / 255) as u8;
    }
    Rgba(channels)
}

/// Source-over compositing of `source` onto `destination`
pub fn blend_over(source: Rgba<u8>, destination: Rgba<u8>) -> Rgba<u8> {
    let [sr, sg, sb, sa] = source.0;
    match sa {
        0 => return destination,
        255 => return source,
        _ => {}
    }

    let source_alpha = f32::from(sa) / 255.0;
    let destination_alpha = f32::from(destination.0[3]) / 255.0 * (1.0 - source_alpha);
    let out_alpha = source_alpha + destination_alpha;

    let mix = |s: u8, d: u8| {
        let value = (f32::from(s) * source_alpha + f32::from(d) * destination_alpha) / out_alpha;
        value.round().clamp(0.0, 255.0) as u8
    };
    let [dr, dg, db, _] = destination.0;

    Rgba([
        mix(sr, dr),
        mix(sg, dg),
        mix(sb, db),
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}
