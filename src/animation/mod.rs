//! Frame timing shared by every placement of an autotile

/// Per-tile animation clock and host frame information
pub mod clock;

pub use clock::{AnimationClock, FrameTime};
