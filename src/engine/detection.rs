//! Raw detection records as delivered by the upstream vision pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::pose::Keypoints;
use crate::engine::rect::BoundingBox;
use crate::error::RecordError;

/// Stable identifier the upstream tracker assigns to one physical entity.
///
/// The backend emits track ids both as integers and as strings; both forms deserialize
/// to the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawTrackId")]
pub struct TrackId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTrackId {
    Int(i64),
    Str(String),
}

impl From<RawTrackId> for TrackId {
    fn from(raw: RawTrackId) -> Self {
        match raw {
            RawTrackId::Int(id) => Self(id.to_string()),
            RawTrackId::Str(id) => Self(id),
        }
    }
}

impl TrackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i64> for TrackId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kinds of entity the overlay knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Player,
    Referee,
    Ball,
    Hoop,
    ShotClock,
}

impl EntityKind {
    /// Parse an upstream class label. Unknown labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "player" => Some(Self::Player),
            "referee" => Some(Self::Referee),
            "ball" | "basketball" => Some(Self::Ball),
            "hoop" | "rim" | "basket" => Some(Self::Hoop),
            "shotclock" | "shot_clock" | "shot-clock" => Some(Self::ShotClock),
            _ => None,
        }
    }
}

/// Team side. Also used as the possession indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Home,
    Away,
    #[default]
    None,
}

impl Team {
    /// Team id `1` is home, any other defined id is away.
    pub fn from_team_id(team_id: Option<i64>) -> Self {
        match team_id {
            Some(1) => Self::Home,
            Some(_) => Self::Away,
            None => Self::None,
        }
    }
}

/// One raw per-frame observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub frame: i64,
    #[serde(alias = "trackId")]
    pub track_id: TrackId,
    #[serde(alias = "objectType")]
    pub object_type: String,
    /// Overrides `object_type` when present.
    #[serde(default, alias = "realType", skip_serializing_if = "Option::is_none")]
    pub real_type: Option<String>,
    /// `[x1, y1, x2, y2]` in source pixels.
    #[serde(default, alias = "boundingBox", skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f32>>,
    #[serde(default, alias = "teamId", skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(default, alias = "hasBall")]
    pub has_ball: bool,
    /// Up to 17 `[x, y]` pairs; `(0, 0)` marks an unobserved joint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keypoints: Option<Vec<Vec<f32>>>,
    #[serde(default, alias = "tacticalX", skip_serializing_if = "Option::is_none")]
    pub tactical_x: Option<f32>,
    #[serde(default, alias = "tacticalY", skip_serializing_if = "Option::is_none")]
    pub tactical_y: Option<f32>,
}

impl DetectionRecord {
    /// `real_type ?? object_type`, parsed. `None` for classes this engine does not draw.
    pub fn effective_kind(&self) -> Option<EntityKind> {
        EntityKind::parse(self.real_type.as_deref().unwrap_or(&self.object_type))
    }

    /// Validated bounding box. An absent box is `Ok(None)`; a present but unusable one is an error.
    pub fn bounding_box(&self) -> Result<Option<BoundingBox>, RecordError> {
        self.bbox
            .as_deref()
            .map(BoundingBox::from_slice)
            .transpose()
    }

    pub fn keypoints(&self) -> Result<Option<Keypoints>, RecordError> {
        self.keypoints
            .as_deref()
            .map(Keypoints::from_pairs)
            .transpose()
    }

    /// Upstream tactical coordinates, when both axes are present and finite.
    pub fn tactical(&self) -> Option<(f32, f32)> {
        match (self.tactical_x, self.tactical_y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((x, y)),
            _ => None,
        }
    }
}
