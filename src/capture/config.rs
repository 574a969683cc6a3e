use serde::{Deserialize, Serialize};

use crate::frame::Size;

/// Default upper bound on the negotiated preview resolution.
pub const MAX_PREVIEW_WIDTH: u32 = 1920;
pub const MAX_PREVIEW_HEIGHT: u32 = 1080;

/// The output resolution a capture session was opened with. Immutable while
/// the session is streaming; changing it means closing and reopening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureConfig {
    pub size: Size,
}

impl CaptureConfig {
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err("Capture resolution must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Picks the largest-area size whose width and height both fit under the
/// bound. Deterministic: ties and equal areas keep the first maximum found.
/// When no size qualifies, falls back to the first reported size.
pub fn select_resolution(choices: &[Size], max: Size) -> Size {
    let mut best: Option<Size> = None;
    for &candidate in choices {
        if candidate.width > max.width || candidate.height > max.height {
            continue;
        }
        match best {
            Some(current) if candidate.area() <= current.area() => {}
            _ => best = Some(candidate),
        }
    }
    best.unwrap_or(choices[0])
}
