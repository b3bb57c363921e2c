//! Tactical space to minimap drawing space.

use nalgebra::{Point2, Vector2};

/// Width of the normalized tactical court space (10 units per metre).
pub const TACTICAL_WIDTH: f32 = 280.0;
/// Height of the normalized tactical court space.
pub const TACTICAL_HEIGHT: f32 = 150.0;

/// Drawing-space span covered by the playing surface.
pub const DRAWING_COURT_WIDTH: f32 = 92.0;
pub const DRAWING_COURT_HEIGHT: f32 = 48.0;
/// Margin around the court in drawing units.
pub const DRAWING_MARGIN: f32 = 1.0;

/// Per-axis affine map from tactical units to drawing units.
///
/// The drawing canvas is `94 x 50`; the court itself sits inside a one-unit margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TacticalTransform {
    extent: Vector2<f32>,
    span: Vector2<f32>,
    origin: Vector2<f32>,
}

impl Default for TacticalTransform {
    fn default() -> Self {
        Self {
            extent: Vector2::new(TACTICAL_WIDTH, TACTICAL_HEIGHT),
            span: Vector2::new(DRAWING_COURT_WIDTH, DRAWING_COURT_HEIGHT),
            origin: Vector2::new(DRAWING_MARGIN, DRAWING_MARGIN),
        }
    }
}

impl TacticalTransform {
    /// Map a tactical coordinate to drawing space: `origin + (t / extent) * span`.
    #[inline]
    pub fn apply(&self, tx: f32, ty: f32) -> Point2<f32> {
        let normalized = Vector2::new(tx, ty).component_div(&self.extent);
        Point2::from(self.origin + normalized.component_mul(&self.span))
    }

    /// Drawing units per metre along each axis.
    ///
    /// Tactical space is 10 units per metre, so the two axes scale independently.
    pub fn metres_to_drawing(&self) -> Vector2<f32> {
        self.span.component_div(&(self.extent / 10.0))
    }

    /// Drawing-space origin of the playing surface (top-left corner of the court).
    pub fn origin(&self) -> Point2<f32> {
        Point2::from(self.origin)
    }

    /// Size of the playing surface in drawing units.
    pub fn span(&self) -> Vector2<f32> {
        self.span
    }
}

/// `mapTacticalToDrawing(tx, ty) = (1 + (tx / 280) * 92, 1 + (ty / 150) * 48)`.
#[inline]
pub fn map_tactical_to_drawing(tx: f32, ty: f32) -> Point2<f32> {
    TacticalTransform::default().apply(tx, ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_inside_margin() {
        let p = map_tactical_to_drawing(0.0, 0.0);
        assert_eq!(p, Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_far_corner() {
        let p = map_tactical_to_drawing(280.0, 150.0);
        assert_eq!(p, Point2::new(93.0, 49.0));
    }

    #[test]
    fn test_center_court() {
        let p = map_tactical_to_drawing(140.0, 75.0);
        assert!((p.x - 47.0).abs() < 1e-5);
        assert!((p.y - 25.0).abs() < 1e-5);
    }

    #[test]
    fn test_axis_scales_differ() {
        let scale = TacticalTransform::default().metres_to_drawing();
        assert!((scale.x - 92.0 / 28.0).abs() < 1e-5);
        assert!((scale.y - 48.0 / 15.0).abs() < 1e-5);
    }
}
