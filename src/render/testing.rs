//! Recording render backend used by texture and renderer tests.

use crate::frame::Size;
use crate::render::{ProcessingMode, RenderBackend, TextureId};

/// Records every backend call so tests can assert on upload paths, bind
/// discipline, and draw dispatch.
#[derive(Default)]
pub(crate) struct RecordingBackend {
    next_id: u32,
    pub alloc_count: usize,
    pub tex_image_count: usize,
    pub tex_sub_image_count: usize,
    pub clear_count: usize,
    pub bound: Option<TextureId>,
    pub last_bound: Option<TextureId>,
    pub last_pixels: Vec<u8>,
    pub deleted: Vec<TextureId>,
    pub draws: Vec<(TextureId, ProcessingMode)>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderBackend for RecordingBackend {
    fn alloc_texture(&mut self, _size: Size) -> TextureId {
        self.alloc_count += 1;
        self.next_id += 1;
        TextureId(self.next_id)
    }

    fn bind_texture(&mut self, id: Option<TextureId>) {
        if id.is_some() {
            self.last_bound = id;
        }
        self.bound = id;
    }

    fn tex_image(&mut self, _size: Size, pixels: &[u8]) {
        assert!(self.bound.is_some(), "tex_image without a bound texture");
        self.tex_image_count += 1;
        self.last_pixels = pixels.to_vec();
    }

    fn tex_sub_image(&mut self, _size: Size, pixels: &[u8]) {
        assert!(self.bound.is_some(), "tex_sub_image without a bound texture");
        self.tex_sub_image_count += 1;
        self.last_pixels = pixels.to_vec();
    }

    fn delete_texture(&mut self, id: TextureId) {
        self.deleted.push(id);
    }

    fn clear(&mut self) {
        self.clear_count += 1;
    }

    fn draw_quad(&mut self, id: TextureId, mode: ProcessingMode) {
        self.draws.push((id, mode));
    }
}
