mod catalog;
mod config;
mod coordinates;
mod detection;
mod frame_indexer;
mod pose;
mod possession;
mod rect;
mod resolver;
mod scene;
mod timeline;

pub use catalog::DetectionCatalog;
pub use config::EngineConfig;
pub use coordinates::{CoordinateMapper, SourceDimensions};
pub use detection::{DetectionRecord, EntityKind, Team, TrackId};
pub use frame_indexer::{FrameIndexer, target_frame};
pub use pose::{BONES, KEYPOINT_COUNT, Keypoints, PoseSegment, project_pose};
pub use possession::{PossessionSummary, possession_summary, resolve_possession};
pub use rect::BoundingBox;
pub use resolver::{ResolvedDetection, resolve_entities};
pub use scene::{Entity, OverlayScene, ResolvedTick, SceneAssembler, Scenes, TacticalScene};
pub use timeline::{Event, EventTimeline, OutcomeTone, SeekRequest, TimelineState};
