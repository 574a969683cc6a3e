use std::sync::Arc;

use crossbeam::channel::{bounded, Receiver, Sender};
use log::debug;

use crate::capture::{CameraBackend, CaptureConfig, CaptureController};
use crate::error::Result;
use crate::frame::Size;
use crate::render::{FrameSlot, ModeCell, ProcessingMode};

/// Wires capture to rendering: converted frames go into the shared
/// [`FrameSlot`], and every publish (or mode change) sends a coalescing
/// wake-up on the redraw channel the render thread listens on.
///
/// This is the surface the controlling UI collaborator drives: `start`,
/// `stop`, `release`, `set_mode`. Start and stop are idempotent. Shutdown
/// is ordered: capture stops and its thread joins before any caller may
/// tear down graphics resources.
pub struct Pipeline {
    controller: CaptureController,
    slot: Arc<FrameSlot>,
    mode: Arc<ModeCell>,
    redraw_tx: Sender<()>,
}

impl Pipeline {
    /// Builds a pipeline around a camera backend. The returned receiver is
    /// the render thread's wake-up signal: one pending token at most, so
    /// redraw requests coalesce instead of queueing.
    pub fn new(backend: Box<dyn CameraBackend>, max_size: Size) -> (Self, Receiver<()>) {
        let (redraw_tx, redraw_rx) = bounded(1);
        let pipeline = Self {
            controller: CaptureController::new(backend, max_size),
            slot: Arc::new(FrameSlot::new()),
            mode: Arc::new(ModeCell::default()),
            redraw_tx,
        };
        (pipeline, redraw_rx)
    }

    /// Opens the camera and starts the capture thread. A no-op when already
    /// running.
    pub fn start(&mut self) -> Result<CaptureConfig> {
        let slot = Arc::clone(&self.slot);
        let redraw = self.redraw_tx.clone();
        let mut overwritten: u64 = 0;

        self.controller.start(move |frame| {
            if slot.publish(frame) {
                overwritten += 1;
                if overwritten % 100 == 0 {
                    debug!("Render thread behind capture: {} frames overwritten", overwritten);
                }
            }
            // Cooperative wake-up; a full channel means a redraw is already
            // pending.
            let _ = redraw.try_send(());
        })
    }

    /// Stops capture: no more deliveries, device closed, capture thread
    /// joined. A no-op when already stopped.
    pub fn stop(&mut self) {
        self.controller.stop();
    }

    /// Full release of the capture side; implies stop.
    pub fn release(&mut self) {
        self.stop();
    }

    /// Selects the processing mode for subsequent draws and requests a
    /// redraw. Callable from the UI thread at any time; visible to the
    /// render thread no later than its next tick.
    pub fn set_mode(&self, mode: ProcessingMode) {
        self.mode.set(mode);
        let _ = self.redraw_tx.try_send(());
    }

    pub fn mode(&self) -> ProcessingMode {
        self.mode.get()
    }

    pub fn is_running(&self) -> bool {
        self.controller.is_running()
    }

    pub fn config(&self) -> Option<&CaptureConfig> {
        self.controller.config()
    }

    /// Shared cells the render thread's [`Renderer`](crate::render::Renderer)
    /// consumes.
    pub fn frame_slot(&self) -> Arc<FrameSlot> {
        Arc::clone(&self.slot)
    }

    pub fn mode_cell(&self) -> Arc<ModeCell> {
        Arc::clone(&self.mode)
    }
}
