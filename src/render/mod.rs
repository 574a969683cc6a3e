mod mode;
mod renderer;
mod slot;
mod texture;

#[cfg(test)]
pub(crate) mod testing;

pub use mode::{ModeCell, ProcessingMode};
pub use renderer::Renderer;
pub use slot::FrameSlot;
pub use texture::{RenderBackend, TextureId, TextureSink};
