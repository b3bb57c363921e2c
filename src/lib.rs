//! Playback-synchronized overlay engine for basketball match video.
//!
//! Given the playback time and a frame-indexed catalog of detections, the engine resolves
//! which players, referees, ball, hoop and shot clock are visible, where they sit on the
//! video overlay and on the tactical minimap, who has possession, and which highlight
//! event is currently showing.

pub mod court;
pub mod engine;
pub mod error;
pub mod integration;

pub use court::{CourtGeometry, FIBA_COURT, map_tactical_to_drawing};
pub use engine::{
    BoundingBox, DetectionCatalog, DetectionRecord, EngineConfig, Entity, EntityKind, Event,
    EventTimeline, OverlayScene, SceneAssembler, Scenes, SeekRequest, SourceDimensions,
    TacticalScene, Team, TimelineState, TrackId,
};
pub use error::{CatalogError, RecordError};
pub use integration::{
    CatalogSource, DetectionRecordBuilder, JsonFileSource, JsonStrSource, MatchCatalog,
    PlaybackPipeline,
};
