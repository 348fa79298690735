//! Rendering backend seam and per-draw placement parameters

use image::{Rgba, RgbaImage};

/// Placement of one sub-image on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawParams {
    /// Top-left screen position in pixels
    pub position: [f32; 2],
    /// Horizontal and vertical scale
    pub scale: [f32; 2],
    /// Rotation in radians around `position`
    pub rotation: f32,
    /// Optional multiplicative tint
    pub tint: Option<Rgba<u8>>,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self::at([0.0, 0.0])
    }
}

impl DrawParams {
    /// Unscaled, unrotated, untinted placement at `position`
    pub const fn at(position: [f32; 2]) -> Self {
        Self {
            position,
            scale: [1.0, 1.0],
            rotation: 0.0,
            tint: None,
        }
    }

    /// Same placement with a different scale
    pub const fn with_scale(mut self, scale: [f32; 2]) -> Self {
        self.scale = scale;
        self
    }

    /// Same placement with a different rotation
    pub const fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Same placement with a tint
    pub const fn with_tint(mut self, tint: Option<Rgba<u8>>) -> Self {
        self.tint = tint;
        self
    }

    /// Move by an unscaled offset; the offset is multiplied by the scale
    pub fn offset_by(self, offset: [f32; 2]) -> Self {
        Self {
            position: [
                self.position[0] + offset[0] * self.scale[0],
                self.position[1] + offset[1] * self.scale[1],
            ],
            ..self
        }
    }
}

/// Backend that rasterizes sub-images
///
/// Implementations receive scale, rotation and tint unchanged from the
/// caller; the compositor only computes positions.
pub trait Renderer {
    /// Draw `image` with the given placement
    fn draw_image(&mut self, image: &RgbaImage, params: &DrawParams);
}
