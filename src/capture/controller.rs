use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, error, info};

use crate::capture::{CameraBackend, CaptureConfig, CaptureSession};
use crate::error::{CaptureError, Result};
use crate::frame::{RgbFrame, Size};

/// Lifecycle wrapper around [`CaptureSession`]. Owns the dedicated capture
/// thread: the session is opened on the caller's thread (so open errors
/// surface synchronously), then moved onto a named worker that pumps frames
/// until stopped. The worker hands the session back on join so a stopped
/// controller can start again.
///
/// Camera stacks expect callback delivery on one consistent thread, so the
/// worker is a single explicitly spawned and joined thread, never a pool.
pub struct CaptureController {
    session: Option<CaptureSession>,
    worker: Option<JoinHandle<CaptureSession>>,
    stop: Arc<AtomicBool>,
    max_size: Size,
    config: Option<CaptureConfig>,
}

impl CaptureController {
    pub fn new(backend: Box<dyn CameraBackend>, max_size: Size) -> Self {
        Self {
            session: Some(CaptureSession::new(backend)),
            worker: None,
            stop: Arc::new(AtomicBool::new(false)),
            max_size,
            config: None,
        }
    }

    /// Opens the session and starts the capture thread. Starting while
    /// already running is a no-op that returns the active configuration.
    pub fn start<F>(&mut self, on_frame: F) -> Result<CaptureConfig>
    where
        F: FnMut(RgbFrame) + Send + 'static,
    {
        if self.worker.is_some() {
            debug!("Capture already running, ignoring start");
            return match &self.config {
                Some(config) => Ok(config.clone()),
                None => Err(CaptureError::session_configuration(
                    "capture worker running without a configuration",
                )
                .into()),
            };
        }

        let mut session = self.session.take().ok_or_else(|| {
            CaptureError::session_configuration("capture session unavailable")
        })?;

        let config = match session.open(self.max_size) {
            Ok(config) => config,
            Err(err) => {
                self.session = Some(session);
                return Err(err);
            }
        };

        self.stop.store(false, Ordering::Release);
        let stop = Arc::clone(&self.stop);
        let mut on_frame = on_frame;
        let handle = thread::Builder::new()
            .name("capture".into())
            .spawn(move || {
                session.run(&stop, &mut on_frame);
                session
            })?;

        self.worker = Some(handle);
        self.config = Some(config.clone());
        info!("Capture started at {}", config.size);
        Ok(config)
    }

    /// Stops frame delivery, closes the device, and joins the capture
    /// thread. Joining waits out any frame callback still in flight, so no
    /// shared buffer is touched after this returns. Stopping while already
    /// stopped is a no-op.
    pub fn stop(&mut self) {
        let Some(handle) = self.worker.take() else {
            debug!("Capture already stopped, ignoring stop");
            return;
        };

        self.stop.store(true, Ordering::Release);
        match handle.join() {
            Ok(session) => {
                self.session = Some(session);
                info!("Capture stopped");
            }
            Err(_) => error!("Capture thread panicked during shutdown"),
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    pub fn config(&self) -> Option<&CaptureConfig> {
        self.config.as_ref()
    }
}

impl Drop for CaptureController {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::testing::{yuv_frame, FakeCamera};
    use std::sync::atomic::AtomicUsize;
    use std::time::{Duration, Instant};

    fn running_controller() -> (CaptureController, Arc<AtomicBool>, Arc<AtomicUsize>) {
        let camera = FakeCamera::new(vec![Size::new(8, 8)])
            .with_frames(vec![yuv_frame(8, 8, 128, 128, 128)])
            .repeating();
        let closed = camera.closed_flag();
        let opens = camera.open_count();
        let controller = CaptureController::new(Box::new(camera), Size::new(1920, 1080));
        (controller, closed, opens)
    }

    fn wait_for_frames(count: &Arc<AtomicUsize>, at_least: usize) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while count.load(Ordering::Acquire) < at_least {
            assert!(Instant::now() < deadline, "timed out waiting for frames");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn start_delivers_frames_and_stop_closes_device() {
        let (mut controller, closed, _) = running_controller();
        let frames = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&frames);

        let config = controller
            .start(move |_| {
                seen.fetch_add(1, Ordering::AcqRel);
            })
            .unwrap();
        assert_eq!(config.size, Size::new(8, 8));
        wait_for_frames(&frames, 3);

        controller.stop();
        assert!(!controller.is_running());
        assert!(closed.load(Ordering::Acquire));
    }

    #[test]
    fn double_start_is_a_noop() {
        let (mut controller, _, opens) = running_controller();

        let first = controller.start(|_| {}).unwrap();
        let second = controller.start(|_| {}).unwrap();

        assert_eq!(first, second);
        assert_eq!(opens.load(Ordering::Acquire), 1);
        controller.stop();
    }

    #[test]
    fn double_stop_is_a_noop() {
        let (mut controller, _, _) = running_controller();
        controller.start(|_| {}).unwrap();

        controller.stop();
        controller.stop();
        assert!(!controller.is_running());
    }

    #[test]
    fn controller_can_restart_after_stop() {
        let (mut controller, _, opens) = running_controller();

        controller.start(|_| {}).unwrap();
        controller.stop();
        controller.start(|_| {}).unwrap();

        assert!(controller.is_running());
        assert_eq!(opens.load(Ordering::Acquire), 2);
        controller.stop();
    }
}
