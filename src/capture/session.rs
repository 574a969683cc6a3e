use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossbeam::channel::{Receiver, RecvTimeoutError};
use log::{debug, error, info, warn};

use crate::capture::{select_resolution, CameraBackend, CameraEvent, CaptureConfig};
use crate::error::{CaptureError, Result};
use crate::frame::{extract_yuv, yuv420_to_rgb, RawFrame, RgbFrame, Size};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    Opening,
    Streaming,
}

/// Owns the camera device handle. Negotiates an output resolution on open,
/// then pumps the device's event stream from the capture thread, converting
/// each frame and handing the RGB result to the registered callback.
pub struct CaptureSession {
    backend: Box<dyn CameraBackend>,
    events: Option<Receiver<CameraEvent>>,
    config: Option<CaptureConfig>,
    state: SessionState,
}

impl CaptureSession {
    pub fn new(backend: Box<dyn CameraBackend>) -> Self {
        Self {
            backend,
            events: None,
            config: None,
            state: SessionState::Closed,
        }
    }

    /// Negotiates the largest supported resolution under the given bound and
    /// starts continuous delivery.
    ///
    /// Device enumeration and configuration failures surface as distinct
    /// `CaptureError` kinds and leave the session closed with no leaked
    /// handle.
    pub fn open(&mut self, max: Size) -> Result<CaptureConfig> {
        if self.state != SessionState::Closed {
            return Err(CaptureError::session_configuration("session is already open").into());
        }
        self.state = SessionState::Opening;

        let sizes = match self.backend.supported_sizes() {
            Ok(sizes) => sizes,
            Err(err) => {
                self.state = SessionState::Closed;
                return Err(err);
            }
        };
        if sizes.is_empty() {
            self.state = SessionState::Closed;
            return Err(
                CaptureError::unsupported_format("device reported no YUV 4:2:0 sizes").into(),
            );
        }

        let config = CaptureConfig::new(select_resolution(&sizes, max));
        debug!(
            "Negotiated capture resolution {} from {} candidates",
            config.size,
            sizes.len()
        );

        match self.backend.open(&config) {
            Ok(events) => {
                self.events = Some(events);
                self.config = Some(config.clone());
                self.state = SessionState::Streaming;
                info!("Capture session streaming at {}", config.size);
                Ok(config)
            }
            Err(err) => {
                self.backend.close();
                self.state = SessionState::Closed;
                Err(err)
            }
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> Option<&CaptureConfig> {
        self.config.as_ref()
    }

    /// Pumps camera events until `stop` is raised or the device goes away.
    /// Runs on the dedicated capture thread; each frame is extracted and
    /// converted synchronously inside the delivery turn, then released, so
    /// the two-deep device buffer pool provides natural backpressure.
    ///
    /// Malformed frames are dropped and the loop continues. Disconnects and
    /// device faults end the loop; either way the device handle is closed
    /// before this returns.
    pub fn run<F>(&mut self, stop: &AtomicBool, mut on_frame: F)
    where
        F: FnMut(RgbFrame),
    {
        let Some(events) = self.events.take() else {
            warn!("Capture loop started without an open session");
            return;
        };

        let mut delivered: u64 = 0;
        let mut dropped: u64 = 0;

        while !stop.load(Ordering::Acquire) {
            match events.recv_timeout(POLL_INTERVAL) {
                Ok(CameraEvent::Frame(frame)) => match Self::process_frame(&frame) {
                    Ok(rgb) => {
                        delivered += 1;
                        if delivered % 300 == 0 {
                            debug!("Delivered {} frames ({} dropped)", delivered, dropped);
                        }
                        on_frame(rgb);
                    }
                    Err(err) if err.is_per_frame() => {
                        dropped += 1;
                        warn!("Dropping frame: {}", err);
                    }
                    Err(err) => {
                        error!("Fatal error while processing frame: {}", err);
                        break;
                    }
                },
                Ok(CameraEvent::Disconnected) => {
                    info!("Camera disconnected");
                    break;
                }
                Ok(CameraEvent::Fault(msg)) => {
                    error!("Camera fault: {}", msg);
                    break;
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    debug!("Camera event stream ended");
                    break;
                }
            }
        }

        // Close the device handle before the capture thread exits so no
        // handle leaks on disconnect or fault paths.
        self.close();
    }

    fn process_frame(frame: &RawFrame) -> Result<RgbFrame> {
        let yuv = extract_yuv(frame)?;
        yuv420_to_rgb(&yuv, frame.width, frame.height)
    }

    /// Releases the device handle. Safe to call repeatedly and on every
    /// teardown path.
    pub fn close(&mut self) {
        if self.state == SessionState::Closed {
            return;
        }
        self.events = None;
        self.backend.close();
        self.state = SessionState::Closed;
        info!("Capture session closed");
    }
}
