//! Fake camera backend used by capture and pipeline tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam::channel::{bounded, Receiver, SendTimeoutError};

use crate::capture::{CameraBackend, CameraEvent, CaptureConfig, INFLIGHT_FRAMES};
use crate::error::{CaptureError, Result};
use crate::frame::{Plane, RawFrame, Size};

/// Builds a well-formed uniform planar YUV 4:2:0 frame.
pub(crate) fn yuv_frame(width: u32, height: u32, y: u8, u: u8, v: u8) -> RawFrame {
    let y_size = (width * height) as usize;
    let uv_size = y_size / 4;
    RawFrame::new(
        width,
        height,
        vec![
            Plane::new(vec![y; y_size], width as usize, 1),
            Plane::new(vec![u; uv_size], (width / 2) as usize, 1),
            Plane::new(vec![v; uv_size], (width / 2) as usize, 1),
        ],
        0,
    )
}

/// Builds a malformed frame missing its V plane.
pub(crate) fn truncated_frame(width: u32, height: u32) -> RawFrame {
    let y_size = (width * height) as usize;
    RawFrame::new(
        width,
        height,
        vec![
            Plane::new(vec![128; y_size], width as usize, 1),
            Plane::new(vec![128; y_size / 4], (width / 2) as usize, 1),
        ],
        0,
    )
}

/// Scripted camera backend. Delivers a fixed list of frames once (or on a
/// loop) over a channel bounded like the real device's buffer pool.
pub(crate) struct FakeCamera {
    sizes: Vec<Size>,
    frames: Vec<RawFrame>,
    repeat: bool,
    fail_sizes: Option<CaptureError>,
    fail_open: bool,
    closed: Arc<AtomicBool>,
    opens: Arc<AtomicUsize>,
}

impl FakeCamera {
    pub fn new(sizes: Vec<Size>) -> Self {
        Self {
            sizes,
            frames: Vec::new(),
            repeat: false,
            fail_sizes: None,
            fail_open: false,
            closed: Arc::new(AtomicBool::new(false)),
            opens: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_frames(mut self, frames: Vec<RawFrame>) -> Self {
        self.frames = frames;
        self
    }

    /// Keep cycling the scripted frames until the device is closed.
    pub fn repeating(mut self) -> Self {
        self.repeat = true;
        self
    }

    pub fn failing_sizes(mut self, err: CaptureError) -> Self {
        self.fail_sizes = Some(err);
        self
    }

    pub fn failing_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    pub fn closed_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.closed)
    }

    pub fn open_count(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.opens)
    }
}

impl CameraBackend for FakeCamera {
    fn supported_sizes(&self) -> Result<Vec<Size>> {
        if let Some(err) = &self.fail_sizes {
            return Err(err.clone().into());
        }
        Ok(self.sizes.clone())
    }

    fn open(&mut self, _config: &CaptureConfig) -> Result<Receiver<CameraEvent>> {
        if self.fail_open {
            return Err(CaptureError::session_configuration("device rejected configuration").into());
        }
        self.opens.fetch_add(1, Ordering::AcqRel);
        self.closed.store(false, Ordering::Release);

        let (tx, rx) = bounded(INFLIGHT_FRAMES);
        let frames = self.frames.clone();
        let repeat = self.repeat;
        let closed = Arc::clone(&self.closed);

        thread::Builder::new()
            .name("fake-camera".into())
            .spawn(move || {
                let mut timestamp: u64 = 0;
                loop {
                    for frame in &frames {
                        if closed.load(Ordering::Acquire) {
                            return;
                        }
                        let mut frame = frame.clone();
                        frame.timestamp = timestamp;
                        timestamp += 33_000_000;

                        match tx
                            .send_timeout(CameraEvent::Frame(frame), Duration::from_millis(250))
                        {
                            Ok(()) => {}
                            // Buffer pool full: the device drops the frame.
                            Err(SendTimeoutError::Timeout(_)) => {}
                            Err(SendTimeoutError::Disconnected(_)) => return,
                        }
                        thread::sleep(Duration::from_millis(1));
                    }
                    if !repeat {
                        return;
                    }
                }
            })
            .expect("spawn fake camera thread");

        Ok(rx)
    }

    fn close(&mut self) {
        self.closed.store(true, Ordering::Release);
    }
}
