use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    #[error("Malformed frame: {0}")]
    MalformedFrame(String),

    #[error("Conversion out of range: {0}")]
    ConversionOutOfRange(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Session-level failures. These are unrecoverable for the current capture
/// attempt: retrying with identical parameters cannot succeed, so they are
/// surfaced to the caller rather than silently retried.
#[derive(Error, Debug, Clone)]
pub enum CaptureError {
    #[error("No capture device available: {0}")]
    NoDeviceAvailable(String),

    #[error("Unsupported pixel format: {0}")]
    UnsupportedFormat(String),

    #[error("Capture permission denied: {0}")]
    PermissionDenied(String),

    #[error("Failed to configure capture session: {0}")]
    SessionConfigurationFailed(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

// Helper functions for creating errors
impl PipelineError {
    pub fn malformed_frame(msg: impl Into<String>) -> Self {
        PipelineError::MalformedFrame(msg.into())
    }

    pub fn conversion_out_of_range(msg: impl Into<String>) -> Self {
        PipelineError::ConversionOutOfRange(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        PipelineError::Config(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        PipelineError::Render(msg.into())
    }

    /// Whether the pipeline can recover by dropping the current frame and
    /// continuing with the next one.
    pub fn is_per_frame(&self) -> bool {
        matches!(
            self,
            PipelineError::MalformedFrame(_) | PipelineError::ConversionOutOfRange(_)
        )
    }
}

impl CaptureError {
    pub fn no_device(msg: impl Into<String>) -> Self {
        CaptureError::NoDeviceAvailable(msg.into())
    }

    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        CaptureError::UnsupportedFormat(msg.into())
    }

    pub fn permission_denied(msg: impl Into<String>) -> Self {
        CaptureError::PermissionDenied(msg.into())
    }

    pub fn session_configuration(msg: impl Into<String>) -> Self {
        CaptureError::SessionConfigurationFailed(msg.into())
    }
}
