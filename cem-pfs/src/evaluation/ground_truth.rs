//! Static survey ground truth.
//!
//! Survey features are stored in the world frame and re-expressed in the
//! vehicle frame for every evaluated timestamp.

use crate::core::{Anchored, Geometry, GroundTruthFeature, Pose2D};

/// World-frame ground-truth features of one recording.
#[derive(Clone, Debug, Default)]
pub struct GroundTruthMap {
    features: Vec<Geometry>,
    max_range: Option<f64>,
}

impl GroundTruthMap {
    /// Create a map from world-frame geometries.
    pub fn new(features: Vec<Geometry>) -> Self {
        Self {
            features,
            max_range: None,
        }
    }

    /// Only keep features whose vehicle-frame anchor is within `max_range` meters.
    pub fn with_max_range(mut self, max_range: Option<f64>) -> Self {
        self.max_range = max_range;
        self
    }

    /// Number of survey features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True if the survey is empty.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// World-frame geometries.
    pub fn features(&self) -> &[Geometry] {
        &self.features
    }

    /// Ground truth as seen from a vehicle at `pose`, in survey order.
    pub fn to_vehicle_frame(&self, pose: &Pose2D) -> Vec<GroundTruthFeature> {
        self.features
            .iter()
            .map(|g| GroundTruthFeature::new(g.map_points(|p| pose.inverse_transform_point(p))))
            .filter(|f| self.max_range.is_none_or(|r| f.distance_to_vehicle() <= r))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point2D;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn survey() -> GroundTruthMap {
        GroundTruthMap::new(vec![
            Geometry::Line([Point2D::new(10.0, 0.0), Point2D::new(12.0, 0.0)]),
            Geometry::Line([Point2D::new(40.0, 0.0), Point2D::new(42.0, 0.0)]),
        ])
    }

    #[test]
    fn test_identity_pose_keeps_geometry() {
        let gt = survey().to_vehicle_frame(&Pose2D::identity());
        assert_eq!(gt.len(), 2);
        assert_eq!(gt[0].anchor(), Point2D::new(10.0, 0.0));
    }

    #[test]
    fn test_translated_and_rotated_pose() {
        let pose = Pose2D::new(10.0, -5.0, FRAC_PI_2);
        let gt = survey().to_vehicle_frame(&pose);
        // World (10, 0) is 5m ahead of a vehicle at (10, -5) facing +Y.
        let anchor = gt[0].anchor();
        assert_relative_eq!(anchor.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(anchor.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_max_range_filter() {
        let map = survey().with_max_range(Some(20.0));
        let gt = map.to_vehicle_frame(&Pose2D::identity());
        assert_eq!(gt.len(), 1);
        assert_eq!(map.len(), 2);
    }
}
