mod backend;
mod config;
mod controller;
mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{CameraBackend, CameraEvent, INFLIGHT_FRAMES};
pub use config::{select_resolution, CaptureConfig, MAX_PREVIEW_HEIGHT, MAX_PREVIEW_WIDTH};
pub use controller::CaptureController;
pub use session::{CaptureSession, SessionState};
