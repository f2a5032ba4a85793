//! Ego-motion compensation of feature geometry.

use crate::core::{Feature, RelativeMotion};

/// Re-express `feature` in the vehicle frame of a later timestamp.
///
/// Every geometry point is transformed with [`RelativeMotion::apply`]
/// (translate, then rotate) and the anchor is recomputed from the
/// transformed points. NaN or infinite inputs propagate unchanged.
///
/// A zero motion returns an identical feature.
pub fn compensate(feature: &Feature, motion: RelativeMotion) -> Feature {
    if motion.is_identity() {
        return feature.clone();
    }
    let geometry = feature.geometry().map_points(|p| motion.apply(p));
    feature.with_geometry(geometry)
}

/// Compensate a whole feature list, preserving order.
pub fn compensate_all(features: &[Feature], motion: RelativeMotion) -> Vec<Feature> {
    features.iter().map(|f| compensate(f, motion)).collect()
}
