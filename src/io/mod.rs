/// Sprite sheet slicing into per-frame buckets
pub mod atlas;
/// Command-line preview tool
pub mod cli;
/// Layout constants and runtime defaults
pub mod configuration;
/// Error types and helpers
pub mod error;
/// PNG and GIF export of rendered frames
pub mod export;
/// Occupancy mask parsing into tile maps
pub mod mask;
/// Frame rendering progress display
pub mod progress;
