//! Court geometry and the tactical-to-drawing projection used by the minimap.

mod geometry;
mod transform;

pub use geometry::{
    CourtEnd, CourtGeometry, CourtSide, DrawRect, Ellipse, FIBA_COURT, Segment, ThreePointLine,
};
pub use transform::{
    DRAWING_COURT_HEIGHT, DRAWING_COURT_WIDTH, DRAWING_MARGIN, TACTICAL_HEIGHT, TACTICAL_WIDTH,
    TacticalTransform, map_tactical_to_drawing,
};
