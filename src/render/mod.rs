//! Drawing autotiles through a pluggable renderer
//!
//! This module contains:
//! - The renderer seam and draw placement parameters
//! - The per-cell compositor and map-wide drawing
//! - A software canvas renderer

/// Software renderer into an RGBA buffer
pub mod canvas;
/// Quadrant classification and draw issuing
pub mod compositor;
/// Renderer trait and draw parameters
pub mod renderer;

pub use canvas::ImageCanvas;
pub use renderer::{DrawParams, Renderer};
