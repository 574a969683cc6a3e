use std::sync::Mutex;

use crate::frame::RgbFrame;

/// Single-slot hand-off from the capture thread to the render thread.
///
/// Frames are a freshness signal, not a queue to drain: publishing over an
/// unconsumed frame replaces it, so the render thread always uploads the
/// newest frame and performs at most one upload per tick.
#[derive(Default)]
pub struct FrameSlot {
    pending: Mutex<Option<RgbFrame>>,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a converted frame for the render thread, overwriting any
    /// frame it has not consumed yet. Returns true when an older frame was
    /// discarded, so the producer can account for drops.
    pub fn publish(&self, frame: RgbFrame) -> bool {
        let mut pending = self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        pending.replace(frame).is_some()
    }

    /// Moves the pending frame out, if any. Called once per draw tick.
    pub fn take(&self) -> Option<RgbFrame> {
        let mut pending = self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        pending.take()
    }
}
