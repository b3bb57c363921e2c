//! Projection of resolved detections into overlay and tactical coordinates.

use nalgebra::Point2;
use ndarray::{Array2, array};
use serde::{Deserialize, Serialize};

use crate::court::TacticalTransform;
use crate::engine::rect::BoundingBox;

/// Pixel size of the source video, known once its metadata has loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceDimensions {
    pub width: f32,
    pub height: f32,
}

impl SourceDimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Dimensions before video metadata arrives.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Both axes finite and strictly positive.
    pub fn is_known(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Maps source pixels to overlay percentages and upstream tactical units to drawing units.
///
/// Overlay output is withheld entirely while the source dimensions are unknown.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    dims: Option<SourceDimensions>,
    transform: TacticalTransform,
}

impl CoordinateMapper {
    pub fn new(dims: SourceDimensions) -> Self {
        Self {
            dims: dims.is_known().then_some(dims),
            transform: TacticalTransform::default(),
        }
    }

    pub fn has_geometry(&self) -> bool {
        self.dims.is_some()
    }

    /// Overlay percentage of a single source-pixel point.
    pub fn overlay_point(&self, x: f32, y: f32) -> Option<Point2<f32>> {
        let dims = self.dims?;
        let p = Point2::new(x / dims.width * 100.0, y / dims.height * 100.0);
        (p.x.is_finite() && p.y.is_finite()).then_some(p)
    }

    /// Overlay percentage of the box centre.
    pub fn overlay_position(&self, bbox: &BoundingBox) -> Option<Point2<f32>> {
        let (cx, cy) = bbox.center();
        self.overlay_point(cx, cy)
    }

    /// Overlay percentages for an `(n, 2)` matrix of source-pixel points.
    pub fn overlay_points(&self, points: &Array2<f32>) -> Option<Array2<f32>> {
        let dims = self.dims?;
        Some(points / &array![dims.width, dims.height] * 100.0)
    }

    /// Drawing-space position from upstream tactical coordinates.
    pub fn tactical_position(&self, tactical: Option<(f32, f32)>) -> Option<Point2<f32>> {
        let (tx, ty) = tactical?;
        let p = self.transform.apply(tx, ty);
        (p.x.is_finite() && p.y.is_finite()).then_some(p)
    }
}
