//! Ego pose and relative motion.
//!
//! Coordinate frame follows ISO 8855 / REP-103 for the vehicle:
//! - X forward, Y left
//! - Counter-clockwise positive yaw

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use super::point::Point2D;

/// Normalize angle to [-π, π).
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle % TAU;
    if a >= PI {
        a -= TAU;
    } else if a < -PI {
        a += TAU;
    }
    a
}

/// Ego vehicle pose in the world (UTM) frame at a timestamp.
///
/// Yaw is not normalized on construction; callers normalize as needed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position in meters
    pub x: f64,
    /// Y position in meters
    pub y: f64,
    /// Heading in radians, CCW positive from +X
    pub yaw: f64,
}

impl Pose2D {
    /// Create a new pose.
    #[inline]
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self { x, y, yaw }
    }

    /// Identity pose (origin, facing +X).
    #[inline]
    pub const fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            yaw: 0.0,
        }
    }

    /// Position as a point.
    #[inline]
    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Transform a point from this pose's vehicle frame to the world frame.
    #[inline]
    pub fn transform_point(&self, point: Point2D) -> Point2D {
        point.rotate(self.yaw) + self.position()
    }

    /// Transform a point from the world frame into this pose's vehicle frame.
    #[inline]
    pub fn inverse_transform_point(&self, point: Point2D) -> Point2D {
        (point - self.position()).rotate(-self.yaw)
    }
}

/// Rigid transform mapping geometry expressed at an earlier timestamp into
/// the vehicle frame of a later timestamp.
///
/// Applied as translate-then-rotate:
///
/// ```text
/// p' = R(dyaw) · (p + (dx, dy))
/// ```
///
/// # Example
///
/// ```
/// use cem_pfs::core::{Point2D, Pose2D, RelativeMotion};
///
/// // Vehicle drove 1m forward: a marker 10m ahead is now 9m ahead.
/// let motion = RelativeMotion::between(Pose2D::identity(), Pose2D::new(1.0, 0.0, 0.0));
/// let p = motion.apply(Point2D::new(10.0, 0.0));
/// assert!((p.x - 9.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RelativeMotion {
    /// Translation along X applied before the rotation (meters)
    pub dx: f64,
    /// Translation along Y applied before the rotation (meters)
    pub dy: f64,
    /// Rotation applied after the translation (radians)
    pub dyaw: f64,
}

impl RelativeMotion {
    /// Create a new relative motion.
    #[inline]
    pub fn new(dx: f64, dy: f64, dyaw: f64) -> Self {
        Self { dx, dy, dyaw }
    }

    /// The zero motion.
    #[inline]
    pub const fn identity() -> Self {
        Self {
            dx: 0.0,
            dy: 0.0,
            dyaw: 0.0,
        }
    }

    /// True if all three components are exactly zero.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0 && self.dyaw == 0.0
    }

    /// Motion mapping vehicle-frame points at pose `from` into the vehicle
    /// frame at pose `to`.
    ///
    /// Both poses are in the same world frame. `dyaw` is normalized, so a
    /// heading that wrapped past ±π yields the short rotation.
    pub fn between(from: Pose2D, to: Pose2D) -> Self {
        let delta = (from.position() - to.position()).rotate(-from.yaw);
        Self {
            dx: delta.x,
            dy: delta.y,
            dyaw: normalize_angle(from.yaw - to.yaw),
        }
    }

    /// Apply the transform to a single point.
    #[inline]
    pub fn apply(&self, point: Point2D) -> Point2D {
        point.translate(self.dx, self.dy).rotate(self.dyaw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn assert_point_eq(a: Point2D, b: Point2D) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
    }

    #[test]
    fn test_normalize_angle() {
        assert_relative_eq!(normalize_angle(3.0 * PI).abs(), PI, epsilon = 1e-9);
        assert_relative_eq!(normalize_angle(FRAC_PI_2), FRAC_PI_2);
        assert_relative_eq!(normalize_angle(-FRAC_PI_2 - TAU), -FRAC_PI_2, epsilon = 1e-9);
    }

    #[test]
    fn test_pose_transform_roundtrip() {
        let pose = Pose2D::new(3.0, -2.0, 0.7);
        let local = Point2D::new(1.5, 0.25);
        let world = pose.transform_point(local);
        assert_point_eq(pose.inverse_transform_point(world), local);
    }

    #[test]
    fn test_pose_transform_facing_left() {
        let pose = Pose2D::new(1.0, 0.0, FRAC_PI_2);
        assert_point_eq(pose.transform_point(Point2D::new(1.0, 0.0)), Point2D::new(1.0, 1.0));
    }

    #[test]
    fn test_between_forward_motion() {
        let motion = RelativeMotion::between(Pose2D::identity(), Pose2D::new(1.0, 0.0, 0.0));
        assert_relative_eq!(motion.dx, -1.0);
        assert_relative_eq!(motion.dy, 0.0);
        assert_relative_eq!(motion.dyaw, 0.0);
        assert_point_eq(motion.apply(Point2D::new(10.0, 0.0)), Point2D::new(9.0, 0.0));
    }

    #[test]
    fn test_between_matches_world_roundtrip() {
        let from = Pose2D::new(2.0, 1.0, 0.4);
        let to = Pose2D::new(3.5, 2.2, -0.3);
        let motion = RelativeMotion::between(from, to);

        let local_from = Point2D::new(4.0, -1.0);
        let expected = to.inverse_transform_point(from.transform_point(local_from));
        assert_point_eq(motion.apply(local_from), expected);
    }

    #[test]
    fn test_between_same_pose_is_identity() {
        let pose = Pose2D::new(5.0, 5.0, 1.0);
        let motion = RelativeMotion::between(pose, pose);
        assert!(motion.is_identity());
    }

    #[test]
    fn test_between_wrapped_heading() {
        let from = Pose2D::new(0.0, 0.0, PI - 0.05);
        let to = Pose2D::new(0.0, 0.0, -PI + 0.05);
        let motion = RelativeMotion::between(from, to);
        assert_relative_eq!(motion.dyaw, -0.1, epsilon = 1e-9);

        let full_turn = RelativeMotion::between(Pose2D::identity(), Pose2D::new(0.0, 0.0, TAU));
        assert!(full_turn.is_identity());
    }

    #[test]
    fn test_sequential_motions_compose() {
        let a = Pose2D::new(0.0, 0.0, 0.0);
        let b = Pose2D::new(1.0, 0.5, 0.2);
        let c = Pose2D::new(2.0, 1.5, 0.6);

        let ab = RelativeMotion::between(a, b);
        let bc = RelativeMotion::between(b, c);
        let ac = RelativeMotion::between(a, c);

        let p = Point2D::new(7.0, -3.0);
        assert_point_eq(bc.apply(ab.apply(p)), ac.apply(p));
    }
}
