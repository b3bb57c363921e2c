//! Ball possession by team.

use serde::Serialize;
use tracing::warn;

use crate::engine::catalog::DetectionCatalog;
use crate::engine::detection::Team;
use crate::engine::resolver::{ResolvedDetection, resolve_entities};

/// Team of the first player flagged `has_ball`, or `Team::None`.
///
/// Several claimants are upstream noise; the first one in catalog order wins.
pub fn resolve_possession(detections: &[ResolvedDetection<'_>]) -> Team {
    let mut holders = detections.iter().filter(|d| d.is_player() && d.has_ball);
    let Some(first) = holders.next() else {
        return Team::None;
    };

    let others = holders.count();
    if others > 0 {
        warn!(
            track_id = %first.track_id(),
            frame = first.frame(),
            claimants = others + 1,
            "several players flagged with the ball, keeping the first"
        );
    }
    first.team
}

/// Possession split over every analyzed frame of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PossessionSummary {
    pub home_frames: usize,
    pub away_frames: usize,
    pub home_percent: f64,
    pub away_percent: f64,
}

/// Count possessed frames per team. Frames without possession are ignored;
/// with no possessed frames at all the split is 50/50.
pub fn possession_summary(catalog: &DetectionCatalog) -> PossessionSummary {
    let mut home_frames = 0;
    let mut away_frames = 0;

    for frame in catalog.frames() {
        let detections = resolve_entities(catalog.at_frame(frame), frame);
        match resolve_possession(&detections) {
            Team::Home => home_frames += 1,
            Team::Away => away_frames += 1,
            Team::None => {}
        }
    }

    let total = home_frames + away_frames;
    let (home_percent, away_percent) = if total > 0 {
        let home = home_frames as f64 / total as f64 * 100.0;
        (home, 100.0 - home)
    } else {
        (50.0, 50.0)
    };

    PossessionSummary {
        home_frames,
        away_frames,
        home_percent,
        away_percent,
    }
}
