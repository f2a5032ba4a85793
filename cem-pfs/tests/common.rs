//! Test utilities for cem-pfs.
//!
//! Builds synthetic drives past a surveyed parking row and renders what an
//! ideal system under test would report.

#![allow(dead_code)]

use cem_pfs::{Anchored, Feature, Geometry, Point2D, Pose2D, TimedPose, Timeframe};

/// Frame period for synthetic drives (µs).
pub const FRAME_PERIOD_US: u64 = 100_000;

/// Marker lines at `x = start + i * spacing`, running from y=2 to y=3 (left of the road).
pub fn parking_row(n: usize, start: f64, spacing: f64) -> Vec<Geometry> {
    (0..n)
        .map(|i| {
            let x = start + i as f64 * spacing;
            Geometry::Line([Point2D::new(x, 2.0), Point2D::new(x, 3.0)])
        })
        .collect()
}

/// Straight drive along +X.
pub fn straight_poses(frames: usize, step: f64) -> Vec<TimedPose> {
    (0..frames)
        .map(|k| TimedPose {
            timestamp: k as u64 * FRAME_PERIOD_US,
            pose: Pose2D::new(k as f64 * step, 0.0, 0.0),
        })
        .collect()
}

/// Constant-curvature drive, turning left by `yaw_step` every frame.
pub fn arc_poses(frames: usize, step: f64, yaw_step: f64) -> Vec<TimedPose> {
    let mut poses = Vec::with_capacity(frames);
    let mut pose = Pose2D::identity();
    for k in 0..frames {
        poses.push(TimedPose {
            timestamp: k as u64 * FRAME_PERIOD_US,
            pose,
        });
        pose = Pose2D::new(
            pose.x + step * pose.yaw.cos(),
            pose.y + step * pose.yaw.sin(),
            pose.yaw + yaw_step,
        );
    }
    poses
}

/// Survey features seen from `pose`, with id = survey index + 1.
///
/// Keeps at most `capacity` features, dropping the farthest, and returns
/// them in ascending id order.
pub fn observe(
    world: &[Geometry],
    pose: &Pose2D,
    timestamp: u64,
    capacity: Option<usize>,
) -> Vec<Feature> {
    let mut seen: Vec<Feature> = world
        .iter()
        .enumerate()
        .map(|(i, g)| {
            Feature::new(
                i as u32 + 1,
                timestamp,
                g.map_points(|p| pose.inverse_transform_point(p)),
            )
        })
        .collect();

    if let Some(cap) = capacity {
        seen.sort_by(|a, b| a.distance_to_vehicle().total_cmp(&b.distance_to_vehicle()));
        seen.truncate(cap);
        seen.sort_by_key(|f| f.id);
    }
    seen
}

/// Timeframes an ideal tracker would report along `poses`.
pub fn simulate(world: &[Geometry], poses: &[TimedPose], capacity: Option<usize>) -> Vec<Timeframe> {
    poses
        .iter()
        .map(|tp| Timeframe::new(tp.timestamp, observe(world, &tp.pose, tp.timestamp, capacity)))
        .collect()
}

/// Marker at vehicle-frame `(x, y)`, 1m long along +Y.
pub fn marker(id: u32, timestamp: u64, x: f64, y: f64) -> Feature {
    Feature::marker(id, timestamp, Point2D::new(x, y), Point2D::new(x, y + 1.0))
}
