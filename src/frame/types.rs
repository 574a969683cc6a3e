use image::{ImageBuffer, Rgb};
use serde::{Deserialize, Serialize};

/// Pixel dimensions of a frame or texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One image plane as delivered by the camera stack. The declared byte
/// length is `data.len()`; row and pixel strides describe the layout the
/// device actually produced, padding included.
#[derive(Debug, Clone)]
pub struct Plane {
    pub data: Vec<u8>,
    pub row_stride: usize,
    pub pixel_stride: usize,
}

impl Plane {
    pub fn new(data: Vec<u8>, row_stride: usize, pixel_stride: usize) -> Self {
        Self {
            data,
            row_stride,
            pixel_stride,
        }
    }
}

/// One captured image in planar YUV 4:2:0: a full-resolution luma plane
/// followed by two chroma planes subsampled 2x in each dimension.
///
/// A `RawFrame` must not be retained past the delivery callback. The
/// underlying camera buffer pool is only two frames deep, so holding one
/// stalls capture.
#[derive(Debug, Clone)]
pub struct RawFrame {
    pub width: u32,
    pub height: u32,
    pub planes: Vec<Plane>,
    /// Monotonically increasing capture timestamp, in nanoseconds.
    pub timestamp: u64,
}

impl RawFrame {
    pub fn new(width: u32, height: u32, planes: Vec<Plane>, timestamp: u64) -> Self {
        Self {
            width,
            height,
            planes,
            timestamp,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Converted output: width x height x 3 bytes, row-major packed RGB.
pub type RgbFrame = ImageBuffer<Rgb<u8>, Vec<u8>>;
