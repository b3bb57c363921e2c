//! Error types for catalog loading and per-record validation.

use thiserror::Error;

/// Failure while loading a detection catalog, event list or engine configuration.
///
/// These only surface from loading entry points. Rendering a tick never fails.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

/// Reason a single detection record was rejected.
///
/// The engine logs these and drops the offending record; the rest of the batch continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("bounding box has {len} values, expected 4")]
    MalformedBoundingBox { len: usize },

    #[error("bounding box contains a non-finite value")]
    NonFiniteBoundingBox,

    #[error("bounding box is inverted (x2 < x1 or y2 < y1)")]
    InvertedBoundingBox,

    #[error("{count} keypoints supplied, at most 17 expected")]
    TooManyKeypoints { count: usize },

    #[error("keypoint {index} has {len} values, expected 2")]
    MalformedKeypoint { index: usize, len: usize },
}
