use crate::error::{PipelineError, Result};
use crate::frame::RgbFrame;

// ITU-R BT.601 video-range coefficients, fixed-point scaled by 256.
const Y_COEFF: i32 = 298; // 1.164
const V_TO_R: i32 = 409; // 1.596
const U_TO_G: i32 = 100; // 0.392
const V_TO_G: i32 = 208; // 0.813
const U_TO_B: i32 = 516; // 2.017
const ROUND: i32 = 128;
const SHIFT: i32 = 8;

#[inline]
fn clamp(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Converts a contiguous planar YUV 4:2:0 buffer (Y, then U, then V) into
/// packed RGB, BT.601 video range.
///
/// This is the one per-frame cost proportional to width x height; it runs
/// on the capture thread and must finish well inside a frame interval, so
/// the loop does integer math only and never allocates per pixel.
///
/// Camera-reported dimensions are even in practice but are not trusted: a
/// buffer shorter than the planar layout requires is rejected, and a chroma
/// index pushed past the buffer end by odd dimensions skips that pixel,
/// leaving its zero-initialized output.
pub fn yuv420_to_rgb(yuv: &[u8], width: u32, height: u32) -> Result<RgbFrame> {
    let w = width as usize;
    let h = height as usize;
    let y_size = w * h;
    let uv_size = y_size / 4;
    let required = y_size + 2 * uv_size;

    if yuv.len() < required {
        return Err(PipelineError::malformed_frame(format!(
            "YUV buffer holds {} bytes, {} required for {}x{}",
            yuv.len(),
            required,
            width,
            height
        )));
    }

    let uv_width = w / 2;
    let mut rgb = vec![0u8; w * h * 3];

    for row in 0..h {
        let uv_row = row / 2;
        for col in 0..w {
            let y_idx = row * w + col;
            let uv_col = col / 2;
            let u_idx = y_size + uv_row * uv_width + uv_col;
            let v_idx = y_size + uv_size + uv_row * uv_width + uv_col;

            if u_idx >= yuv.len() || v_idx >= yuv.len() {
                continue;
            }

            let y = yuv[y_idx] as i32 - 16;
            let u = yuv[u_idx] as i32 - 128;
            let v = yuv[v_idx] as i32 - 128;

            let out = y_idx * 3;
            rgb[out] = clamp((Y_COEFF * y + V_TO_R * v + ROUND) >> SHIFT);
            rgb[out + 1] = clamp((Y_COEFF * y - U_TO_G * u - V_TO_G * v + ROUND) >> SHIFT);
            rgb[out + 2] = clamp((Y_COEFF * y + U_TO_B * u + ROUND) >> SHIFT);
        }
    }

    RgbFrame::from_raw(width, height, rgb).ok_or_else(|| {
        PipelineError::conversion_out_of_range(format!(
            "RGB buffer does not fit {}x{}",
            width, height
        ))
    })
}
