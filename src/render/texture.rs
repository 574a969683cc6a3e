use log::debug;

use crate::frame::{RgbFrame, Size};
use crate::render::ProcessingMode;

/// Opaque handle to a GPU texture owned by the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureId(pub u32);

/// The rendering/shader collaborator. Every method must be called from the
/// thread that owns the graphics context; the per-mode kernels behind
/// `draw_quad` are opaque to this crate.
pub trait RenderBackend {
    /// Creates a texture object configured with linear filtering and
    /// clamp-to-edge wrapping. Storage is allocated by the first
    /// [`tex_image`](RenderBackend::tex_image) on the bound texture.
    fn alloc_texture(&mut self, size: Size) -> TextureId;

    /// Binds the texture to unit 0, or unbinds with `None`.
    fn bind_texture(&mut self, id: Option<TextureId>);

    /// Allocates (or reallocates) storage for the bound texture and fills it.
    fn tex_image(&mut self, size: Size, pixels: &[u8]);

    /// Updates the bound texture in place. Storage dimensions must match.
    fn tex_sub_image(&mut self, size: Size, pixels: &[u8]);

    fn delete_texture(&mut self, id: TextureId);

    fn clear(&mut self);

    /// Draws the full-screen quad sampling `id` through the given mode.
    fn draw_quad(&mut self, id: TextureId, mode: ProcessingMode);
}

/// Owns the one texture that represents the current camera frame.
///
/// Allocates lazily on the first upload. Uploads at the current size take
/// the in-place sub-image path; a size change reallocates storage and
/// records the new size. Unit 0 is left unbound afterwards so the render
/// loop's own binds never see stale state.
#[derive(Default)]
pub struct TextureSink {
    texture: Option<TextureId>,
    size: Option<Size>,
}

impl TextureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads a converted frame. Render thread only.
    pub fn upload<B: RenderBackend>(&mut self, backend: &mut B, frame: &RgbFrame) {
        let size = Size::new(frame.width(), frame.height());

        let id = match self.texture {
            Some(id) => id,
            None => {
                let id = backend.alloc_texture(size);
                debug!("Allocated camera texture {:?} at {}", id, size);
                self.texture = Some(id);
                id
            }
        };

        backend.bind_texture(Some(id));
        match self.size {
            Some(current) if current == size => backend.tex_sub_image(size, frame.as_raw()),
            _ => {
                backend.tex_image(size, frame.as_raw());
                debug!("Texture storage sized to {}", size);
                self.size = Some(size);
            }
        }
        backend.bind_texture(None);
    }

    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    pub fn current_size(&self) -> Option<Size> {
        self.size
    }

    /// Releases the texture. Called when the graphics context is going away;
    /// best-effort, safe to call repeatedly.
    pub fn destroy<B: RenderBackend>(&mut self, backend: &mut B) {
        if let Some(id) = self.texture.take() {
            backend.delete_texture(id);
        }
        self.size = None;
    }
}
