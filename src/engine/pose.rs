//! Keypoint validation and skeleton projection.

use nalgebra::Point2;
use ndarray::Array2;
use serde::Serialize;

use crate::engine::coordinates::CoordinateMapper;
use crate::error::RecordError;

/// Number of joints in the standard body layout.
pub const KEYPOINT_COUNT: usize = 17;

/// Bone topology: shoulders 5/6, elbows 7/8, wrists 9/10, hips 11/12, knees 13/14, ankles 15/16.
pub const BONES: [(usize, usize); 12] = [
    (5, 6),
    (5, 7),
    (7, 9),
    (6, 8),
    (8, 10),
    (5, 11),
    (6, 12),
    (11, 12),
    (11, 13),
    (13, 15),
    (12, 14),
    (14, 16),
];

/// Validated keypoints stored as an `(n, 2)` matrix of source-pixel coordinates, `n <= 17`.
#[derive(Debug, Clone, PartialEq)]
pub struct Keypoints {
    points: Array2<f32>,
}

impl Keypoints {
    pub fn from_pairs(pairs: &[Vec<f32>]) -> Result<Self, RecordError> {
        if pairs.len() > KEYPOINT_COUNT {
            return Err(RecordError::TooManyKeypoints { count: pairs.len() });
        }

        let mut points = Array2::zeros((pairs.len(), 2));
        for (index, pair) in pairs.iter().enumerate() {
            let [x, y] = pair.as_slice() else {
                return Err(RecordError::MalformedKeypoint {
                    index,
                    len: pair.len(),
                });
            };
            points[[index, 0]] = *x;
            points[[index, 1]] = *y;
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.points.nrows() == 0
    }

    /// A joint is observed when it exists and its first coordinate is not exactly zero.
    pub fn is_present(&self, index: usize) -> bool {
        index < self.points.nrows()
            && self.points[[index, 0]] != 0.0
            && self.points[[index, 0]].is_finite()
            && self.points[[index, 1]].is_finite()
    }

    pub fn points(&self) -> &Array2<f32> {
        &self.points
    }
}

/// One skeletal line in overlay-percentage space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PoseSegment {
    pub from: usize,
    pub to: usize,
    pub start: Point2<f32>,
    pub end: Point2<f32>,
}

/// Emit one segment per bone whose endpoints are both observed.
///
/// Returns nothing while the source dimensions are unknown.
pub fn project_pose(keypoints: &Keypoints, mapper: &CoordinateMapper) -> Vec<PoseSegment> {
    let Some(overlay) = mapper.overlay_points(keypoints.points()) else {
        return Vec::new();
    };

    let joint = |i: usize| {
        if !keypoints.is_present(i) {
            return None;
        }
        let p = Point2::new(overlay[[i, 0]], overlay[[i, 1]]);
        (p.x.is_finite() && p.y.is_finite()).then_some(p)
    };

    BONES
        .iter()
        .filter_map(|&(a, b)| {
            Some(PoseSegment {
                from: a,
                to: b,
                start: joint(a)?,
                end: joint(b)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::coordinates::SourceDimensions;

    fn full_body() -> Vec<Vec<f32>> {
        (0..KEYPOINT_COUNT)
            .map(|i| vec![10.0 + i as f32, 20.0 + i as f32])
            .collect()
    }

    fn mapper() -> CoordinateMapper {
        CoordinateMapper::new(SourceDimensions::new(200.0, 100.0))
    }

    #[test]
    fn test_full_skeleton() {
        let keypoints = Keypoints::from_pairs(&full_body()).unwrap();
        let segments = project_pose(&keypoints, &mapper());
        assert_eq!(segments.len(), BONES.len());

        let first = segments[0];
        assert_eq!((first.from, first.to), (5, 6));
        assert!((first.start.x - 7.5).abs() < 1e-5); // 15 / 200 * 100
        assert!((first.start.y - 25.0).abs() < 1e-5); // 25 / 100 * 100
    }

    #[test]
    fn test_missing_shoulder_drops_its_bones() {
        let mut pairs = full_body();
        pairs[5] = vec![0.0, 0.0];
        pairs[6] = vec![10.0, 20.0];
        let keypoints = Keypoints::from_pairs(&pairs).unwrap();
        let segments = project_pose(&keypoints, &mapper());

        assert!(segments.iter().all(|s| s.from != 5 && s.to != 5));
        // (5,6) (5,7) (5,11) are gone.
        assert_eq!(segments.len(), BONES.len() - 3);
    }

    #[test]
    fn test_short_keypoint_list() {
        let pairs: Vec<Vec<f32>> = (0..8).map(|i| vec![1.0 + i as f32, 1.0]).collect();
        let keypoints = Keypoints::from_pairs(&pairs).unwrap();
        let segments = project_pose(&keypoints, &mapper());
        // Only bones with both ends below index 8: (5,6) (5,7).
        assert_eq!(segments.len(), 2);
    }

    #[test]
    fn test_no_keypoints() {
        let keypoints = Keypoints::from_pairs(&[]).unwrap();
        assert!(keypoints.is_empty());
        assert!(project_pose(&keypoints, &mapper()).is_empty());
    }

    #[test]
    fn test_unknown_dimensions_emit_nothing() {
        let keypoints = Keypoints::from_pairs(&full_body()).unwrap();
        let mapper = CoordinateMapper::new(SourceDimensions::new(0.0, 0.0));
        assert!(project_pose(&keypoints, &mapper).is_empty());
    }

    #[test]
    fn test_malformed_keypoints() {
        assert_eq!(
            Keypoints::from_pairs(&[vec![1.0, 2.0], vec![3.0]]),
            Err(RecordError::MalformedKeypoint { index: 1, len: 1 })
        );

        let too_many: Vec<Vec<f32>> = (0..18).map(|_| vec![1.0, 1.0]).collect();
        assert_eq!(
            Keypoints::from_pairs(&too_many),
            Err(RecordError::TooManyKeypoints { count: 18 })
        );
    }
}
