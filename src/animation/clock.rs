//! Shared animation clock with per-host-frame de-duplication
//!
//! One clock lives inside every autotile and is ticked by every cell that
//! draws it. The host frame marker makes those ticks idempotent within one
//! render pass, so a tile placed on many cells animates at the same speed as
//! a tile placed once.

/// Host frame information passed explicitly into every tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Monotonic counter the host advances once per render pass
    pub marker: u64,
    /// Seconds elapsed since the previous render pass
    pub delta: f64,
}

impl FrameTime {
    /// Create frame information for one render pass
    pub const fn new(marker: u64, delta: f64) -> Self {
        Self { marker, delta }
    }
}

/// Mutable animation triple: active frame, accumulated time, last marker
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimationClock {
    animation_state: usize,
    timer: f64,
    // None never equals a host marker
    last_marker: Option<u64>,
}

impl AnimationClock {
    /// Index of the active animation frame
    pub const fn animation_state(&self) -> usize {
        self.animation_state
    }

    /// Seconds accumulated since the last advance
    pub const fn timer(&self) -> f64 {
        self.timer
    }

    /// Marker of the last host frame that ticked this clock
    pub const fn last_marker(&self) -> Option<u64> {
        self.last_marker
    }

    /// Tick once for a host frame
    ///
    /// Ticks carrying the marker already seen are ignored. Otherwise the
    /// delta is accumulated and, once the timer exceeds `interval`, the
    /// frame advances (wrapping at `frame_count`) and the timer resets.
    /// Returns whether the frame advanced.
    pub fn tick(&mut self, time: FrameTime, interval: f64, frame_count: usize) -> bool {
        if self.last_marker == Some(time.marker) {
            return false;
        }
        self.last_marker = Some(time.marker);

        self.timer += time.delta;
        if self.timer > interval {
            self.animation_state = (self.animation_state + 1) % frame_count.max(1);
            self.timer = 0.0;
            return true;
        }
        false
    }
}
