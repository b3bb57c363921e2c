//! JSON catalog as served by the analysis backend.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::engine::{DetectionCatalog, DetectionRecord, EngineConfig, Event, TrackId};
use crate::error::CatalogError;

/// Everything the engine needs for one analyzed match.
#[derive(Debug, Clone, Default)]
pub struct MatchCatalog {
    pub detections: DetectionCatalog,
    pub events: Vec<Event>,
}

/// Entries stay undecoded so one bad entry is dropped without losing the rest.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    detections: Vec<Value>,
    #[serde(default)]
    events: Vec<Value>,
}

/// Decode each entry on its own, skipping the ones that do not fit `T`.
fn decode_entries<T: DeserializeOwned>(entries: Vec<Value>, what: &'static str) -> Vec<T> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                debug!(index, what, error = %err, "dropping undecodable entry");
                None
            }
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(default, alias = "startTimeSeconds", alias = "time")]
    timestamp_seconds: Option<f64>,
    #[serde(default)]
    frame: Option<i64>,
    #[serde(default, alias = "type", alias = "kind")]
    event_type: Option<String>,
    #[serde(default, alias = "actorId")]
    player_id: Option<TrackId>,
    #[serde(default, alias = "outcome")]
    result: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl RawEvent {
    /// Explicit timestamp first, then `frame / fps`. Events with neither are unusable.
    fn into_event(self, fps: f64) -> Option<Event> {
        let start = self
            .timestamp_seconds
            .filter(|t| t.is_finite())
            .or_else(|| self.frame.map(|frame| frame as f64 / fps))?;

        Some(Event {
            start_time_seconds: start,
            kind: self.event_type.unwrap_or_else(|| "unknown".to_owned()),
            actor_id: self
                .player_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "Unknown".to_owned()),
            outcome: self
                .result
                .or(self.description)
                .unwrap_or_else(|| "completed".to_owned()),
        })
    }
}

impl MatchCatalog {
    pub fn new(detections: Vec<DetectionRecord>, events: Vec<Event>) -> Self {
        Self {
            detections: DetectionCatalog::new(detections),
            events,
        }
    }

    /// Parse `{"detections": [...], "events": [...]}`. Either list may be omitted.
    pub fn from_json_str(json: &str, config: &EngineConfig) -> Result<Self, CatalogError> {
        config.validate()?;
        let raw: RawCatalog = serde_json::from_str(json)?;

        let detections: Vec<DetectionRecord> = decode_entries(raw.detections, "detection");
        let raw_events: Vec<RawEvent> = decode_entries(raw.events, "event");

        let mut events = Vec::with_capacity(raw_events.len());
        for (index, raw_event) in raw_events.into_iter().enumerate() {
            match raw_event.into_event(config.fps) {
                Some(event) => events.push(event),
                None => debug!(index, "dropping event without timestamp or frame"),
            }
        }

        let catalog = Self::new(detections, events);
        info!(
            detections = catalog.detections.len(),
            events = catalog.events.len(),
            "loaded match catalog"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend_payload() {
        let json = r#"{
            "detections": [
                {"frame": 0, "track_id": "1", "object_type": "player", "bbox": [0, 0, 10, 10], "team_id": 1},
                {"frame": 0, "track_id": 2, "object_type": "basketball", "bbox": [4, 4, 6, 6]}
            ],
            "events": [
                {"event_type": "shot", "frame": 90, "timestamp_seconds": 3.0, "player_id": 1, "details": {}},
                {"type": "pass", "frame": 150, "player_id": "4", "description": "completed"}
            ]
        }"#;
        let catalog = MatchCatalog::from_json_str(json, &EngineConfig::default()).unwrap();
        assert_eq!(catalog.detections.len(), 2);
        assert_eq!(catalog.events.len(), 2);
        assert_eq!(catalog.events[0].start_time_seconds, 3.0);
        assert_eq!(catalog.events[0].actor_id, "1");
        assert_eq!(catalog.events[0].outcome, "completed");
        assert_eq!(catalog.events[1].start_time_seconds, 5.0);
        assert_eq!(catalog.events[1].kind, "pass");
    }

    #[test]
    fn test_event_defaults_and_drops() {
        let json = r#"{"events": [{"frame": 30}, {"event_type": "shot"}]}"#;
        let catalog = MatchCatalog::from_json_str(json, &EngineConfig::default()).unwrap();
        assert_eq!(catalog.events.len(), 1);
        let event = &catalog.events[0];
        assert_eq!(event.start_time_seconds, 1.0);
        assert_eq!(event.kind, "unknown");
        assert_eq!(event.actor_id, "Unknown");
        assert_eq!(event.outcome, "completed");
        assert!(catalog.detections.is_empty());
    }

    #[test]
    fn test_undecodable_entries_are_dropped_individually() {
        let json = r#"{
            "detections": [
                {"frame": 0, "track_id": "1", "object_type": "player", "bbox": [0, 0, 10, 10]},
                {"frame": 0, "track_id": "2", "object_type": "player", "has_ball": null},
                {"frame": 0, "track_id": "3", "real_type": "referee"},
                {"frame": "late", "track_id": "4", "object_type": "player"}
            ],
            "events": [
                {"event_type": "shot", "timestamp_seconds": "soon"},
                {"event_type": "pass", "timestamp_seconds": 4.0}
            ]
        }"#;
        let catalog = MatchCatalog::from_json_str(json, &EngineConfig::default()).unwrap();
        assert_eq!(catalog.detections.len(), 1);
        assert_eq!(catalog.detections.records()[0].track_id.as_str(), "1");
        assert_eq!(catalog.events.len(), 1);
        assert_eq!(catalog.events[0].kind, "pass");
    }

    #[test]
    fn test_invalid_json() {
        let err = MatchCatalog::from_json_str("{not json", &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
