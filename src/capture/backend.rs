use crossbeam::channel::Receiver;

use crate::capture::CaptureConfig;
use crate::error::Result;
use crate::frame::{RawFrame, Size};

/// How many captured frames may be outstanding at once. A backend that
/// cannot enqueue a new frame drops it; the delivery channel must be bounded
/// to this depth so a slow consumer throttles capture instead of growing a
/// queue of stale frames.
pub const INFLIGHT_FRAMES: usize = 2;

/// Events delivered by the camera hardware collaborator.
#[derive(Debug)]
pub enum CameraEvent {
    /// A frame became available. Consumed synchronously by the capture loop
    /// and released immediately; never retained.
    Frame(RawFrame),
    /// The device went away (unplugged, claimed by another process).
    Disconnected,
    /// An unrecoverable device error. The session closes in response.
    Fault(String),
}

/// The camera hardware collaborator. Implementations own the device protocol;
/// this crate only negotiates an output size and consumes the event stream.
pub trait CameraBackend: Send {
    /// The output sizes the device reports for planar YUV 4:2:0.
    ///
    /// Fails with `NoDeviceAvailable`, `UnsupportedFormat`, or
    /// `PermissionDenied` as appropriate.
    fn supported_sizes(&self) -> Result<Vec<Size>>;

    /// Configures the device for the chosen size and starts continuous
    /// delivery. Events arrive on the returned channel, which must be
    /// bounded to [`INFLIGHT_FRAMES`].
    ///
    /// Fails with `SessionConfigurationFailed` when the device rejects the
    /// configuration.
    fn open(&mut self, config: &CaptureConfig) -> Result<Receiver<CameraEvent>>;

    /// Stops delivery and releases the device handle. Best-effort and
    /// idempotent; called on every teardown path.
    fn close(&mut self);
}
