//! Default value functions for serde deserialization.

pub fn association_radius() -> f64 {
    0.5
}

pub fn max_features() -> usize {
    16
}

pub fn reuse_cooldown_cycles() -> u32 {
    5
}

pub fn max_pose_gap_us() -> u64 {
    100_000
}
