//! Per-tick composition of the overlay and tactical scenes.
//!
//! A tick is a pure function of `(time, catalog, events, source dimensions)`. Nothing is
//! carried from one tick to the next, so a backward scrub or a seek needs no special path.

use nalgebra::Point2;
use serde::Serialize;
use tracing::trace;

use crate::engine::catalog::DetectionCatalog;
use crate::engine::config::EngineConfig;
use crate::engine::coordinates::{CoordinateMapper, SourceDimensions};
use crate::engine::detection::{EntityKind, Team, TrackId};
use crate::engine::frame_indexer::FrameIndexer;
use crate::engine::pose::{PoseSegment, project_pose};
use crate::engine::possession::resolve_possession;
use crate::engine::resolver::{ResolvedDetection, resolve_entities};
use crate::engine::timeline::{Event, EventTimeline};

/// One tracked identity as resolved for a single tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub id: TrackId,
    pub kind: EntityKind,
    pub team: Team,
    pub has_ball: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Frame of the detection this entity was resolved from.
    pub frame: i64,
    pub overlay_position: Option<Point2<f32>>,
    pub tactical_position: Option<Point2<f32>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pose_segments: Vec<PoseSegment>,
    /// Possession indicator, carried by the ball only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub possession: Option<Team>,
}

/// Entities placed in overlay-percentage space, for compositing over the raw video.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayScene {
    pub time_seconds: f64,
    pub target_frame: Option<i64>,
    pub entities: Vec<Entity>,
    pub active_event: Option<Event>,
}

/// Entities placed in minimap drawing space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TacticalScene {
    pub time_seconds: f64,
    pub entities: Vec<Entity>,
    pub possession: Team,
    pub active_event: Option<Event>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenes {
    pub overlay: OverlayScene,
    pub tactical: TacticalScene,
}

impl Scenes {
    pub fn active_event(&self) -> Option<&Event> {
        self.overlay.active_event.as_ref()
    }
}

/// Canonical entities for one tick, before they are split into scenes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedTick {
    /// `None` when the playback time is not finite.
    pub target_frame: Option<i64>,
    pub entities: Vec<Entity>,
    pub possession: Team,
}

/// Borrows the immutable inputs and renders scenes for any playback time.
#[derive(Debug, Clone, Copy)]
pub struct SceneAssembler<'a> {
    catalog: &'a DetectionCatalog,
    timeline: &'a EventTimeline,
    indexer: FrameIndexer,
}

impl<'a> SceneAssembler<'a> {
    pub fn new(catalog: &'a DetectionCatalog, timeline: &'a EventTimeline, config: &EngineConfig) -> Self {
        Self {
            catalog,
            timeline,
            indexer: FrameIndexer::from_config(config),
        }
    }

    /// Canonical entities for `time_seconds`, before scene filtering.
    pub fn resolve_tick(&self, time_seconds: f64, dims: SourceDimensions) -> ResolvedTick {
        let Some(target) = self.indexer.target_frame(time_seconds) else {
            return ResolvedTick::default();
        };

        let candidates = self.indexer.select(self.catalog, target);
        let detections = resolve_entities(candidates.iter().copied(), target);
        let possession = resolve_possession(&detections);
        let mapper = CoordinateMapper::new(dims);

        let entities: Vec<Entity> = detections
            .iter()
            .map(|detection| build_entity(detection, &mapper, possession))
            .collect();

        trace!(
            time_seconds,
            target_frame = target,
            candidates = candidates.len(),
            entities = entities.len(),
            overlay = mapper.has_geometry(),
            "resolved tick"
        );

        ResolvedTick {
            target_frame: Some(target),
            entities,
            possession,
        }
    }

    pub fn render(&self, time_seconds: f64, dims: SourceDimensions) -> Scenes {
        let ResolvedTick {
            target_frame,
            entities,
            possession,
        } = self.resolve_tick(time_seconds, dims);
        let active_event = self.timeline.active_event(time_seconds).cloned();

        let tactical_entities = entities
            .iter()
            .filter(|e| e.tactical_position.is_some())
            .cloned()
            .collect();
        let overlay_entities = entities
            .into_iter()
            .filter(|e| e.overlay_position.is_some())
            .collect();

        Scenes {
            overlay: OverlayScene {
                time_seconds,
                target_frame,
                entities: overlay_entities,
                active_event: active_event.clone(),
            },
            tactical: TacticalScene {
                time_seconds,
                entities: tactical_entities,
                possession,
                active_event,
            },
        }
    }
}

fn build_entity(detection: &ResolvedDetection<'_>, mapper: &CoordinateMapper, possession: Team) -> Entity {
    let overlay_position = detection
        .bbox
        .as_ref()
        .and_then(|bbox| mapper.overlay_position(bbox));
    // Skeletons are drawn for players only.
    let pose_segments = detection
        .keypoints
        .as_ref()
        .filter(|_| detection.is_player())
        .map(|keypoints| project_pose(keypoints, mapper))
        .unwrap_or_default();

    Entity {
        id: detection.track_id().clone(),
        kind: detection.kind,
        team: detection.team,
        has_ball: detection.has_ball,
        label: detection.label.clone(),
        frame: detection.frame(),
        overlay_position,
        tactical_position: mapper.tactical_position(detection.record.tactical()),
        pose_segments,
        possession: (detection.kind == EntityKind::Ball).then_some(possession),
    }
}
