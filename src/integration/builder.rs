//! Builder for creating DetectionRecord objects.

use crate::engine::{BoundingBox, DetectionRecord, TrackId};

/// Builder for creating `DetectionRecord` objects from various input formats.
#[derive(Debug, Clone)]
pub struct DetectionRecordBuilder {
    record: DetectionRecord,
}

impl DetectionRecordBuilder {
    /// Start a record for `track_id` observed at `frame` with the given upstream class.
    pub fn new(frame: i64, track_id: i64, object_type: &str) -> Self {
        Self {
            record: DetectionRecord {
                frame,
                track_id: TrackId::from(track_id),
                object_type: object_type.to_owned(),
                real_type: None,
                bbox: None,
                team_id: None,
                has_ball: false,
                keypoints: None,
                tactical_x: None,
                tactical_y: None,
            },
        }
    }

    /// Replace the track id, e.g. with a string id.
    pub fn track(mut self, track_id: impl Into<TrackId>) -> Self {
        self.record.track_id = track_id.into();
        self
    }

    pub fn real_type(mut self, real_type: &str) -> Self {
        self.record.real_type = Some(real_type.to_owned());
        self
    }

    /// Set bounding box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.record.bbox = Some(BoundingBox::from_tlbr(x1, y1, x2, y2).to_tlbr().to_vec());
        self
    }

    /// Set bounding box in TLWH format (top-left x, top-left y, width, height).
    pub fn tlwh(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.record.bbox = Some(BoundingBox::from_tlwh(x, y, w, h).to_tlbr().to_vec());
        self
    }

    /// Set the raw box values verbatim, including malformed ones.
    pub fn raw_bbox(mut self, values: &[f32]) -> Self {
        self.record.bbox = Some(values.to_vec());
        self
    }

    pub fn team(mut self, team_id: i64) -> Self {
        self.record.team_id = Some(team_id);
        self
    }

    pub fn has_ball(mut self, has_ball: bool) -> Self {
        self.record.has_ball = has_ball;
        self
    }

    pub fn keypoints(mut self, keypoints: &[(f32, f32)]) -> Self {
        self.record.keypoints = Some(keypoints.iter().map(|&(x, y)| vec![x, y]).collect());
        self
    }

    pub fn tactical(mut self, tx: f32, ty: f32) -> Self {
        self.record.tactical_x = Some(tx);
        self.record.tactical_y = Some(ty);
        self
    }

    /// Build the final `DetectionRecord`.
    pub fn build(self) -> DetectionRecord {
        self.record
    }
}
