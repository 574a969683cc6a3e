use std::sync::Arc;

use crate::render::{FrameSlot, ModeCell, RenderBackend, TextureSink};

/// The render loop body. Runs on the graphics thread, once per redraw
/// request rather than on a fixed clock.
pub struct Renderer<B: RenderBackend> {
    backend: B,
    sink: TextureSink,
    slot: Arc<FrameSlot>,
    mode: Arc<ModeCell>,
}

impl<B: RenderBackend> Renderer<B> {
    pub fn new(backend: B, slot: Arc<FrameSlot>, mode: Arc<ModeCell>) -> Self {
        Self {
            backend,
            sink: TextureSink::new(),
            slot,
            mode,
        }
    }

    /// One draw tick: consume at most one pending upload, clear the target,
    /// then draw the current texture through the current mode.
    ///
    /// The mode is read exactly once per tick, so a change racing with a
    /// draw is never partially applied; it lands on the next tick.
    pub fn draw_tick(&mut self) {
        if let Some(frame) = self.slot.take() {
            self.sink.upload(&mut self.backend, &frame);
        }

        self.backend.clear();
        if let Some(texture) = self.sink.texture() {
            let mode = self.mode.get();
            self.backend.draw_quad(texture, mode);
        }
    }

    pub fn sink(&self) -> &TextureSink {
        &self.sink
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Releases graphics resources. Must run after capture shutdown, on the
    /// graphics thread, as the last teardown step.
    pub fn teardown(&mut self) {
        self.sink.destroy(&mut self.backend);
    }
}
