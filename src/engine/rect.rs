use serde::Serialize;

use crate::error::RecordError;

/// Bounding box in source-video pixels.
///
/// Upstream detections arrive in TLBR format (`x1, y1, x2, y2`); the overlay only ever needs
/// the box centre, so the box is stored in that format as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BoundingBox {
    /// Top-left x coordinate
    pub x1: f32,
    /// Top-left y coordinate
    pub y1: f32,
    /// Bottom-right x coordinate
    pub x2: f32,
    /// Bottom-right y coordinate
    pub y2: f32,
}

impl BoundingBox {
    /// Create a box from TLBR format (top-left x, top-left y, bottom-right x, bottom-right y).
    #[inline]
    pub fn from_tlbr(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a box from TLWH format (top-left x, top-left y, width, height).
    #[inline]
    pub fn from_tlwh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    /// Validate a raw `[x1, y1, x2, y2]` slice as delivered by the detection pipeline.
    pub fn from_slice(values: &[f32]) -> Result<Self, RecordError> {
        let [x1, y1, x2, y2] = values else {
            return Err(RecordError::MalformedBoundingBox { len: values.len() });
        };
        if !(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite()) {
            return Err(RecordError::NonFiniteBoundingBox);
        }
        if x2 < x1 || y2 < y1 {
            return Err(RecordError::InvertedBoundingBox);
        }
        Ok(Self::from_tlbr(*x1, *y1, *x2, *y2))
    }

    /// Convert to TLBR format: (x1, y1, x2, y2).
    #[inline]
    pub fn to_tlbr(&self) -> [f32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Get the center point of the bounding box.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tlwh() {
        let bbox = BoundingBox::from_tlwh(10.0, 20.0, 30.0, 40.0);
        assert_eq!(bbox.to_tlbr(), [10.0, 20.0, 40.0, 60.0]);
    }

    #[test]
    fn test_center() {
        let bbox = BoundingBox::from_tlbr(100.0, 200.0, 300.0, 400.0);
        assert_eq!(bbox.center(), (200.0, 300.0));
    }

    #[test]
    fn test_from_slice_short_box() {
        assert_eq!(
            BoundingBox::from_slice(&[1.0, 2.0, 3.0]),
            Err(RecordError::MalformedBoundingBox { len: 3 })
        );
        assert_eq!(
            BoundingBox::from_slice(&[]),
            Err(RecordError::MalformedBoundingBox { len: 0 })
        );
    }

    #[test]
    fn test_from_slice_non_finite() {
        assert_eq!(
            BoundingBox::from_slice(&[0.0, f32::NAN, 10.0, 10.0]),
            Err(RecordError::NonFiniteBoundingBox)
        );
    }

    #[test]
    fn test_from_slice_inverted() {
        assert_eq!(
            BoundingBox::from_slice(&[10.0, 0.0, 5.0, 10.0]),
            Err(RecordError::InvertedBoundingBox)
        );
    }

    #[test]
    fn test_from_slice_degenerate_point_is_valid() {
        let bbox = BoundingBox::from_slice(&[5.0, 5.0, 5.0, 5.0]).unwrap();
        assert_eq!(bbox.center(), (5.0, 5.0));
    }
}
