use crate::error::{PipelineError, Result};
use crate::frame::RawFrame;

/// Copies the three planes of a captured frame into one contiguous buffer:
/// all Y bytes, then all U bytes, then all V bytes, each plane contributing
/// exactly its declared byte length.
///
/// Pure: no shared state, safe to call repeatedly.
pub fn extract_yuv(frame: &RawFrame) -> Result<Vec<u8>> {
    if frame.planes.len() < 3 {
        return Err(PipelineError::malformed_frame(format!(
            "expected 3 planes (Y, U, V), got {}",
            frame.planes.len()
        )));
    }

    let planes = &frame.planes[..3];
    let total: usize = planes.iter().map(|p| p.data.len()).sum();

    let mut yuv = Vec::with_capacity(total);
    for plane in planes {
        yuv.extend_from_slice(&plane.data);
    }

    Ok(yuv)
}
