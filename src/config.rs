use serde::{Deserialize, Serialize};

use crate::capture::{MAX_PREVIEW_HEIGHT, MAX_PREVIEW_WIDTH};
use crate::error::{PipelineError, Result};
use crate::frame::Size;

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub capture: CaptureLimits,
    pub log: LogConfig,
}

/// Upper bound for resolution negotiation; the session picks the largest
/// device-reported size fitting under it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureLimits {
    pub max_width: u32,
    pub max_height: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    pub verbosity: u8,
    pub file: Option<String>,
}

impl Default for CaptureLimits {
    fn default() -> Self {
        Self {
            max_width: MAX_PREVIEW_WIDTH,
            max_height: MAX_PREVIEW_HEIGHT,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capture: CaptureLimits::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_size(mut self, width: u32, height: u32) -> Self {
        self.capture.max_width = width;
        self.capture.max_height = height;
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.log.verbosity = verbosity;
        self
    }

    pub fn max_size(&self) -> Size {
        Size::new(self.capture.max_width, self.capture.max_height)
    }

    /// Parses a JSON document provided by the embedding application.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate().map_err(PipelineError::config)?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.capture.max_width == 0 || self.capture.max_height == 0 {
            return Err("Preview bounds must be greater than 0".to_string());
        }
        Ok(())
    }
}
