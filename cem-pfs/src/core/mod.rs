//! Core types for the CEM parking feature validator.
//!
//! All vehicle-frame types follow the ISO 8855 / REP-103 convention:
//! - **X-axis**: Forward (positive ahead of the vehicle)
//! - **Y-axis**: Left (positive to the vehicle's left)
//! - **Yaw**: Counter-clockwise rotation from +X axis (radians)
//!
//! ## Type Categories
//!
//! ### Geometry
//! - [`Point2D`]: Vehicle-frame or world-frame coordinate in meters
//! - [`Geometry`]: Marker line (2 points) or slot quad (4 points)
//!
//! ### Ego Motion
//! - [`Pose2D`]: Vehicle pose (x, y, yaw) in the world frame
//! - [`RelativeMotion`]: Rigid transform between two timestamps
//!
//! ### Features
//! - [`Feature`]: Tracked marker or slot with id and anchor
//! - [`GroundTruthFeature`]: Survey feature expressed in the vehicle frame
//! - [`Timeframe`]: All features of one decoded sample
//!
//! ## Example
//!
//! ```
//! use cem_pfs::core::{Anchored, Feature, Point2D};
//!
//! let marker = Feature::marker(7, 0, Point2D::new(10.0, 0.0), Point2D::new(14.0, 0.0));
//! assert_eq!(marker.anchor(), Point2D::new(10.0, 0.0));
//! ```

mod feature;
mod point;
mod pose;

pub use feature::{Anchored, Feature, FeatureKind, Geometry, GroundTruthFeature, Timeframe};
pub use point::Point2D;
pub use pose::{Pose2D, RelativeMotion, normalize_angle};
