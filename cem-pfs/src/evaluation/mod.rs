//! Ground-truth accuracy evaluation.
//!
//! 1. [`GroundTruthMap`] re-expresses the world-frame survey in the vehicle
//!    frame at each evaluated timestamp.
//! 2. [`evaluate`] associates ground truth with the frame's detections and
//!    computes precision, recall and false positive ratio.
//! 3. [`AccuracyAggregate`] averages frames over a run, skipping frames
//!    with an empty denominator.
//!
//! ## Example
//!
//! ```
//! use cem_pfs::core::{Feature, Geometry, Point2D, Pose2D};
//! use cem_pfs::evaluation::{AccuracyAggregate, GroundTruthMap, evaluate};
//!
//! let survey = GroundTruthMap::new(vec![Geometry::Line([
//!     Point2D::new(5.0, 2.0),
//!     Point2D::new(5.0, 7.0),
//! ])]);
//! let detections = vec![Feature::marker(1, 0, Point2D::new(5.1, 2.0), Point2D::new(5.1, 7.0))];
//!
//! let gt = survey.to_vehicle_frame(&Pose2D::identity());
//! let result = evaluate(&detections, &gt, 0.5);
//! assert_eq!(result.precision, 1.0);
//!
//! let mut run = AccuracyAggregate::new();
//! run.add(&result);
//! assert_eq!(run.mean_recall(), Some(1.0));
//! ```

mod accuracy;
mod ground_truth;

pub use accuracy::{AccuracyAggregate, AccuracyResult, AccuracySummary, evaluate};
pub use ground_truth::GroundTruthMap;
