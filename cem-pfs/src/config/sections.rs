//! Configuration sections.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Association radii
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssociationSection {
    /// Frame-to-frame association radius (meters)
    #[serde(default = "defaults::association_radius")]
    pub radius: f64,

    /// Detection-to-ground-truth association radius (meters)
    #[serde(default = "defaults::association_radius")]
    pub ground_truth_radius: f64,
}

impl Default for AssociationSection {
    fn default() -> Self {
        Self {
            radius: defaults::association_radius(),
            ground_truth_radius: defaults::association_radius(),
        }
    }
}

/// Output list capacity of the system under test
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CapacitySection {
    /// Maximum features reported per cycle
    #[serde(default = "defaults::max_features")]
    pub max_features: usize,
}

impl Default for CapacitySection {
    fn default() -> Self {
        Self {
            max_features: defaults::max_features(),
        }
    }
}

/// Id lifecycle rules
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentitySection {
    /// Cycles an id must stay absent before it may be reused
    #[serde(default = "defaults::reuse_cooldown_cycles")]
    pub reuse_cooldown_cycles: u32,
}

impl Default for IdentitySection {
    fn default() -> Self {
        Self {
            reuse_cooldown_cycles: defaults::reuse_cooldown_cycles(),
        }
    }
}

/// Odometry lookup
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PoseSection {
    /// Largest accepted distance to the nearest pose sample (µs)
    #[serde(default = "defaults::max_pose_gap_us")]
    pub max_gap_us: u64,
}

impl Default for PoseSection {
    fn default() -> Self {
        Self {
            max_gap_us: defaults::max_pose_gap_us(),
        }
    }
}

/// Ground-truth projection
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GroundTruthSection {
    /// Drop survey features farther than this from the vehicle (meters)
    #[serde(default)]
    pub max_range: Option<f64>,
}
