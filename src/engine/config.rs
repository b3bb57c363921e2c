use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Configuration for the overlay engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Frame rate the detection catalog was analyzed at.
    pub fps: f64,
    /// Maximum `|frame - target_frame|` for a record to be considered.
    pub frame_tolerance: i64,
    /// An event is active while `|start - now|` is strictly below this.
    pub event_tolerance_seconds: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fps: 30.0,
            frame_tolerance: 1,
            event_tolerance_seconds: 2.0,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(CatalogError::InvalidConfig {
                field: "fps",
                reason: format!("must be finite and positive, got {}", self.fps),
            });
        }
        if self.frame_tolerance < 0 {
            return Err(CatalogError::InvalidConfig {
                field: "frame_tolerance",
                reason: format!("must not be negative, got {}", self.frame_tolerance),
            });
        }
        if !self.event_tolerance_seconds.is_finite() || self.event_tolerance_seconds <= 0.0 {
            return Err(CatalogError::InvalidConfig {
                field: "event_tolerance_seconds",
                reason: format!(
                    "must be finite and positive, got {}",
                    self.event_tolerance_seconds
                ),
            });
        }
        Ok(())
    }
}
