//! A library for capturing live camera frames and rendering them through a
//! selectable processing mode with minimal latency.
//!
//! This library provides functionality for:
//! - Opening a camera capture session and negotiating an output resolution
//! - Extracting planar YUV 4:2:0 frames and converting them to packed RGB
//! - Handing converted frames across threads into a GPU texture
//! - Driving a render loop with pass-through, grayscale, or edge-detection
//!   processing modes

pub mod capture;
pub mod config;
pub mod error;
pub mod frame;
pub mod logging;
pub mod pipeline;
pub mod render;

pub use capture::{
    CameraBackend, CameraEvent, CaptureConfig, CaptureController, CaptureSession,
};
pub use config::Config;
pub use error::{CaptureError, PipelineError, Result};
pub use frame::{Plane, RawFrame, RgbFrame, Size};
pub use pipeline::Pipeline;
pub use render::{
    FrameSlot, ModeCell, ProcessingMode, RenderBackend, Renderer, TextureId, TextureSink,
};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
///
/// This function should be called before using any other functionality
/// from the library. It sets up logging and performs any necessary
/// global initialization.
///
/// # Arguments
///
/// * `verbosity` - 0 for info, 1 for debug, higher for trace
/// * `log_file` - Optional path to a log file. If None, logs will only be output to stdout.
pub fn initialize(verbosity: u8, log_file: Option<&str>) -> anyhow::Result<()> {
    logging::setup_logging(verbosity, log_file)?;
    logging::log_app_start(VERSION);
    Ok(())
}
