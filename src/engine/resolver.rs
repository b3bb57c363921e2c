//! Identity resolution: one canonical detection per track per tick.

use std::collections::HashMap;

use tracing::debug;

use crate::engine::detection::{DetectionRecord, EntityKind, Team, TrackId};
use crate::engine::pose::Keypoints;
use crate::engine::rect::BoundingBox;
use crate::error::RecordError;

/// A validated, classified detection chosen to represent its track for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDetection<'a> {
    pub record: &'a DetectionRecord,
    pub kind: EntityKind,
    pub team: Team,
    pub has_ball: bool,
    /// Display identifier for players. The pipeline does not track jersey numbers,
    /// so this is the track id.
    pub label: Option<String>,
    pub bbox: Option<BoundingBox>,
    pub keypoints: Option<Keypoints>,
}

impl ResolvedDetection<'_> {
    pub fn track_id(&self) -> &TrackId {
        &self.record.track_id
    }

    pub fn frame(&self) -> i64 {
        self.record.frame
    }

    pub fn is_player(&self) -> bool {
        self.kind == EntityKind::Player
    }
}

/// Validate and classify one record. `Ok(None)` for kinds the overlay does not draw.
fn classify(record: &DetectionRecord) -> Result<Option<ResolvedDetection<'_>>, RecordError> {
    let Some(kind) = record.effective_kind() else {
        return Ok(None);
    };
    let bbox = record.bounding_box()?;
    let keypoints = record.keypoints()?;

    let is_player = kind == EntityKind::Player;
    Ok(Some(ResolvedDetection {
        record,
        kind,
        team: if is_player {
            Team::from_team_id(record.team_id)
        } else {
            Team::None
        },
        has_ball: is_player && record.has_ball,
        label: is_player.then(|| record.track_id.to_string()),
        bbox,
        keypoints,
    }))
}

/// Collapse candidates into one detection per track id.
///
/// Per track, the record minimizing `|frame - target_frame|` wins; ties go to the record seen
/// first. Unknown kinds and malformed records are dropped individually and never compete.
/// Output order is the order in which each track id was first seen.
pub fn resolve_entities<'a, I>(candidates: I, target_frame: i64) -> Vec<ResolvedDetection<'a>>
where
    I: IntoIterator<Item = &'a DetectionRecord>,
{
    let mut resolved: Vec<ResolvedDetection<'a>> = Vec::new();
    let mut slots: HashMap<&'a TrackId, usize> = HashMap::new();

    for record in candidates {
        let detection = match classify(record) {
            Ok(Some(detection)) => detection,
            Ok(None) => {
                debug!(
                    track_id = %record.track_id,
                    frame = record.frame,
                    object_type = %record.object_type,
                    real_type = ?record.real_type,
                    "dropping detection of unknown kind"
                );
                continue;
            }
            Err(err) => {
                debug!(
                    track_id = %record.track_id,
                    frame = record.frame,
                    error = %err,
                    "dropping malformed detection"
                );
                continue;
            }
        };

        let distance = record.frame.abs_diff(target_frame);
        match slots.get(&record.track_id).copied() {
            Some(slot) => {
                if distance < resolved[slot].frame().abs_diff(target_frame) {
                    resolved[slot] = detection;
                }
            }
            None => {
                slots.insert(&record.track_id, resolved.len());
                resolved.push(detection);
            }
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::DetectionRecordBuilder;

    fn player(frame: i64, track: i64) -> DetectionRecord {
        DetectionRecordBuilder::new(frame, track, "player")
            .tlbr(0.0, 0.0, 10.0, 10.0)
            .build()
    }

    #[test]
    fn test_closest_frame_wins() {
        let records = vec![player(5, 1), player(6, 1), player(8, 1)];
        let entities = resolve_entities(&records, 7);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].frame(), 6);
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let records = vec![player(8, 1), player(6, 1)];
        let entities = resolve_entities(&records, 7);
        assert_eq!(entities[0].frame(), 8);
    }

    #[test]
    fn test_one_entity_per_track() {
        let records = vec![player(7, 1), player(7, 2), player(6, 1), player(8, 2), player(7, 3)];
        let entities = resolve_entities(&records, 7);
        let ids: Vec<&str> = entities.iter().map(|e| e.track_id().as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(entities.iter().all(|e| e.frame() == 7));
    }

    #[test]
    fn test_unknown_kind_dropped() {
        let records = vec![
            DetectionRecordBuilder::new(7, 1, "coach").build(),
            DetectionRecordBuilder::new(7, 2, "player").real_type("spectator").build(),
            DetectionRecordBuilder::new(7, 3, "basketball").build(),
        ];
        let entities = resolve_entities(&records, 7);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].kind, EntityKind::Ball);
    }

    #[test]
    fn test_malformed_record_does_not_abort_batch() {
        let records = vec![
            DetectionRecordBuilder::new(7, 1, "player").raw_bbox(&[1.0, 2.0]).build(),
            player(7, 2),
        ];
        let entities = resolve_entities(&records, 7);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].track_id().as_str(), "2");
    }

    #[test]
    fn test_malformed_closest_record_does_not_compete() {
        let records = vec![
            player(6, 1),
            DetectionRecordBuilder::new(7, 1, "player").raw_bbox(&[f32::NAN, 0.0, 1.0, 1.0]).build(),
        ];
        let entities = resolve_entities(&records, 7);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].frame(), 6);
    }

    #[test]
    fn test_absent_bbox_is_kept() {
        let records = vec![DetectionRecordBuilder::new(7, 1, "player").tactical(10.0, 10.0).build()];
        let entities = resolve_entities(&records, 7);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].bbox, None);
    }

    #[test]
    fn test_player_team_and_label() {
        let records = vec![
            DetectionRecordBuilder::new(7, 11, "player").team(1).has_ball(true).build(),
            DetectionRecordBuilder::new(7, 12, "player").team(2).build(),
            DetectionRecordBuilder::new(7, 13, "player").build(),
            DetectionRecordBuilder::new(7, 14, "referee").team(1).has_ball(true).build(),
        ];
        let entities = resolve_entities(&records, 7);
        assert_eq!(entities[0].team, Team::Home);
        assert!(entities[0].has_ball);
        assert_eq!(entities[0].label.as_deref(), Some("11"));
        assert_eq!(entities[1].team, Team::Away);
        assert_eq!(entities[2].team, Team::None);
        assert_eq!(entities[3].team, Team::None);
        assert!(!entities[3].has_ball);
        assert_eq!(entities[3].label, None);
    }
}
