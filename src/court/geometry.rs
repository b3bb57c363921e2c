//! FIBA court features in minimap drawing space.
//!
//! Every feature is derived from rule-book metric constants multiplied by the per-axis
//! drawing scales of [`TacticalTransform`]. Because the two axes scale differently, circles
//! on the real court become axis-aligned ellipses on the minimap.

use nalgebra::{Point2, Vector2};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::court::transform::TacticalTransform;

pub const COURT_LENGTH_M: f32 = 28.0;
pub const COURT_WIDTH_M: f32 = 15.0;
pub const KEY_WIDTH_M: f32 = 4.9;
pub const KEY_LENGTH_M: f32 = 5.8;
pub const FREE_THROW_RADIUS_M: f32 = 1.8;
pub const CENTER_CIRCLE_RADIUS_M: f32 = 1.8;
pub const THREE_POINT_RADIUS_M: f32 = 6.75;
pub const THREE_POINT_CORNER_OFFSET_M: f32 = 0.9;
pub const RESTRICTED_AREA_RADIUS_M: f32 = 1.25;
pub const BACKBOARD_OFFSET_M: f32 = 1.2;
pub const BACKBOARD_WIDTH_M: f32 = 1.83;
pub const BASKET_CENTER_M: f32 = 1.575;

/// Court geometry computed once for the default tactical transform.
pub static FIBA_COURT: Lazy<CourtGeometry> = Lazy::new(CourtGeometry::fiba);

/// Axis-aligned rectangle in drawing units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawRect {
    pub origin: Point2<f32>,
    pub size: Vector2<f32>,
}

impl DrawRect {
    fn from_corners(a: Point2<f32>, b: Point2<f32>) -> Self {
        let origin = Point2::new(a.x.min(b.x), a.y.min(b.y));
        let size = Vector2::new((a.x - b.x).abs(), (a.y - b.y).abs());
        Self { origin, size }
    }
}

/// Circle of the real court, projected with unequal axis scales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ellipse {
    pub center: Point2<f32>,
    pub radii: Vector2<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: Point2<f32>,
    pub end: Point2<f32>,
}

/// Three-point line: two straight corner segments joined by an arc around the rim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThreePointLine {
    pub arc: Ellipse,
    /// Half of the arc's sweep in radians, measured from the court's long axis.
    pub half_sweep: f32,
    pub corners: [Segment; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CourtSide {
    Left,
    Right,
}

/// Features belonging to one basket end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CourtEnd {
    pub side: CourtSide,
    pub rim_center: Point2<f32>,
    pub key: DrawRect,
    pub free_throw_circle: Ellipse,
    pub three_point: ThreePointLine,
    pub restricted_area: Ellipse,
    pub backboard: Segment,
}

/// Complete set of court drawing features.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourtGeometry {
    /// Drawing units per metre (x, y).
    pub scale: Vector2<f32>,
    pub bounds: DrawRect,
    pub midline: Segment,
    pub center_circle: Ellipse,
    pub ends: [CourtEnd; 2],
}

impl CourtGeometry {
    /// Build the FIBA court for the default tactical transform.
    pub fn fiba() -> Self {
        Self::with_transform(&TacticalTransform::default())
    }

    pub fn with_transform(transform: &TacticalTransform) -> Self {
        let projector = Projector {
            origin: transform.origin(),
            scale: transform.metres_to_drawing(),
        };

        let bounds = DrawRect {
            origin: transform.origin(),
            size: transform.span(),
        };
        let half_length = COURT_LENGTH_M / 2.0;
        let midline = Segment {
            start: projector.point(half_length, 0.0),
            end: projector.point(half_length, COURT_WIDTH_M),
        };
        let center_circle = projector.ellipse(half_length, COURT_WIDTH_M / 2.0, CENTER_CIRCLE_RADIUS_M);

        Self {
            scale: projector.scale,
            bounds,
            midline,
            center_circle,
            ends: [
                projector.end(CourtSide::Left),
                projector.end(CourtSide::Right),
            ],
        }
    }

    pub fn end(&self, side: CourtSide) -> &CourtEnd {
        match side {
            CourtSide::Left => &self.ends[0],
            CourtSide::Right => &self.ends[1],
        }
    }
}

struct Projector {
    origin: Point2<f32>,
    scale: Vector2<f32>,
}

impl Projector {
    fn point(&self, xm: f32, ym: f32) -> Point2<f32> {
        self.origin + Vector2::new(xm, ym).component_mul(&self.scale)
    }

    fn ellipse(&self, xm: f32, ym: f32, radius_m: f32) -> Ellipse {
        Ellipse {
            center: self.point(xm, ym),
            radii: self.scale * radius_m,
        }
    }

    /// `depth` is the distance from this end's endline toward the opposite basket.
    fn along(side: CourtSide, depth: f32) -> f32 {
        match side {
            CourtSide::Left => depth,
            CourtSide::Right => COURT_LENGTH_M - depth,
        }
    }

    fn end(&self, side: CourtSide) -> CourtEnd {
        let mid_y = COURT_WIDTH_M / 2.0;
        let at = |depth: f32, ym: f32| self.point(Self::along(side, depth), ym);

        let rim_x = Self::along(side, BASKET_CENTER_M);
        let rim_center = self.point(rim_x, mid_y);

        let key_top = mid_y - KEY_WIDTH_M / 2.0;
        let key = DrawRect::from_corners(at(0.0, key_top), at(KEY_LENGTH_M, key_top + KEY_WIDTH_M));

        let free_throw_circle = self.ellipse(Self::along(side, KEY_LENGTH_M), mid_y, FREE_THROW_RADIUS_M);

        // Corner lines run parallel to the sideline until they meet the arc.
        let lateral = mid_y - THREE_POINT_CORNER_OFFSET_M;
        let corner_depth = BASKET_CENTER_M
            + (THREE_POINT_RADIUS_M.powi(2) - lateral.powi(2)).max(0.0).sqrt();
        let corner_near = THREE_POINT_CORNER_OFFSET_M;
        let corner_far = COURT_WIDTH_M - THREE_POINT_CORNER_OFFSET_M;
        let three_point = ThreePointLine {
            arc: self.ellipse(rim_x, mid_y, THREE_POINT_RADIUS_M),
            half_sweep: (lateral / THREE_POINT_RADIUS_M).clamp(-1.0, 1.0).asin(),
            corners: [
                Segment {
                    start: at(0.0, corner_near),
                    end: at(corner_depth, corner_near),
                },
                Segment {
                    start: at(0.0, corner_far),
                    end: at(corner_depth, corner_far),
                },
            ],
        };

        let restricted_area = self.ellipse(rim_x, mid_y, RESTRICTED_AREA_RADIUS_M);

        let backboard = Segment {
            start: at(BACKBOARD_OFFSET_M, mid_y - BACKBOARD_WIDTH_M / 2.0),
            end: at(BACKBOARD_OFFSET_M, mid_y + BACKBOARD_WIDTH_M / 2.0),
        };

        CourtEnd {
            side,
            rim_center,
            key,
            free_throw_circle,
            three_point,
            restricted_area,
            backboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_bounds_match_drawing_court() {
        let court = CourtGeometry::fiba();
        assert_eq!(court.bounds.origin, Point2::new(1.0, 1.0));
        assert!((court.bounds.size.x - 92.0).abs() < EPS);
        assert!((court.bounds.size.y - 48.0).abs() < EPS);
    }

    #[test]
    fn test_rim_centers_are_mirrored() {
        let court = &*FIBA_COURT;
        let left = court.end(CourtSide::Left).rim_center;
        let right = court.end(CourtSide::Right).rim_center;

        assert!((left.x - (1.0 + BASKET_CENTER_M * 92.0 / 28.0)).abs() < EPS);
        assert!((left.y - 25.0).abs() < EPS);
        assert!(((left.x - 47.0) + (right.x - 47.0)).abs() < EPS);
        assert!((left.y - right.y).abs() < EPS);
    }

    #[test]
    fn test_key_dimensions() {
        let court = CourtGeometry::fiba();
        let key = court.end(CourtSide::Right).key;
        assert!((key.size.x - KEY_LENGTH_M * 92.0 / 28.0).abs() < EPS);
        assert!((key.size.y - KEY_WIDTH_M * 48.0 / 15.0).abs() < EPS);
        assert!((key.origin.x + key.size.x - 93.0).abs() < EPS);
    }

    #[test]
    fn test_free_throw_circle_is_an_ellipse() {
        let court = CourtGeometry::fiba();
        let radii = court.end(CourtSide::Left).free_throw_circle.radii;
        assert!((radii.x - 1.8 * 92.0 / 28.0).abs() < EPS);
        assert!((radii.y - 1.8 * 48.0 / 15.0).abs() < EPS);
    }

    #[test]
    fn test_corner_three_meets_arc() {
        let court = CourtGeometry::fiba();
        let end = court.end(CourtSide::Left);
        let corner = end.three_point.corners[0];

        // Corner segment ends ~2.99 m from the endline.
        let depth_m = (corner.end.x - 1.0) / court.scale.x;
        assert!((depth_m - 2.990).abs() < 1e-2);
        // 0.9 m in from the sideline.
        assert!((corner.start.y - (1.0 + 0.9 * 48.0 / 15.0)).abs() < EPS);
    }

    #[test]
    fn test_backboard_sits_in_front_of_endline() {
        let court = CourtGeometry::fiba();
        let board = court.end(CourtSide::Left).backboard;
        assert!((board.start.x - (1.0 + 1.2 * 92.0 / 28.0)).abs() < EPS);
        let width_m = (board.end.y - board.start.y) / court.scale.y;
        assert!((width_m - BACKBOARD_WIDTH_M).abs() < EPS);
    }
}
