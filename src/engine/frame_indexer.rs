//! Continuous playback time to discrete detection frames.

use crate::engine::catalog::DetectionCatalog;
use crate::engine::config::EngineConfig;
use crate::engine::detection::DetectionRecord;

/// `round(time * fps)`. `None` for non-finite input.
pub fn target_frame(time_seconds: f64, fps: f64) -> Option<i64> {
    let frame = (time_seconds * fps).round();
    frame.is_finite().then_some(frame as i64)
}

/// Selects the raw detections near the frame currently on screen.
///
/// The tolerance window absorbs rounding drift between wall-clock playback time and the
/// discretely analyzed frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameIndexer {
    fps: f64,
    tolerance: i64,
}

impl FrameIndexer {
    pub fn new(fps: f64, tolerance: i64) -> Self {
        Self { fps, tolerance }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.fps, config.frame_tolerance)
    }

    pub fn target_frame(&self, time_seconds: f64) -> Option<i64> {
        target_frame(time_seconds, self.fps)
    }

    /// Records with `|frame - target| <= tolerance`, in catalog order. Empty is a normal result.
    pub fn select<'a>(&self, catalog: &'a DetectionCatalog, target: i64) -> Vec<&'a DetectionRecord> {
        catalog.window(
            target.saturating_sub(self.tolerance),
            target.saturating_add(self.tolerance),
        )
    }
}

impl Default for FrameIndexer {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}
