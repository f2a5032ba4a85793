//! # cem-pfs
//!
//! Association and identity validation for parking features (PFS) reported
//! by a camera environment model (CEM).
//!
//! ## Overview
//!
//! The system under test reports, per timestamp, a list of parking features:
//!
//! - **Markers** - painted line segments (2 points)
//! - **Slots** - parking slot quads (4 points)
//!
//! Each feature carries an id that should stay stable while the feature is
//! tracked. This crate checks that from recorded data:
//!
//! - **Motion compensation**: re-express the previous frame in the current one
//! - **Association**: greedy nearest-anchor matching inside a radius
//! - **Identity continuity**: tracked features keep their id; dropped ids are
//!   not reused before a cool-down
//! - **Capacity eviction**: a saturated list drops its farthest feature
//! - **Ground-truth accuracy**: precision and recall against a survey
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cem_pfs::{EvalConfig, Recording, RunEvaluator};
//! use std::path::Path;
//!
//! let config = EvalConfig::load_default()?;
//! let recording = Recording::load(Path::new("recordings/slot_pass.yaml"))?;
//!
//! let report = RunEvaluator::new(config)?.evaluate(&recording);
//! report.print();
//! assert!(report.passed());
//! ```
//!
//! ## Coordinate System
//!
//! Vehicle frame follows ROS REP-103:
//! - X: Forward (positive ahead of the vehicle)
//! - Y: Left (positive to the vehicle's left)
//! - Yaw: Rotation in radians, CCW positive from +X axis
//!
//! Distances are meters, timestamps are microseconds.

#![warn(missing_docs)]

// Geometry and feature types
pub mod core;

// Pose lookup and motion compensation
pub mod motion;

// Greedy spatial association
pub mod association;

// Maintained-id and no-reuse checks
pub mod continuity;

// Capacity eviction check
pub mod eviction;

// Ground-truth accuracy
pub mod evaluation;

// Unified configuration
pub mod config;

// Recording files
pub mod io;

// Whole-run driver
pub mod run;

mod error;

// Re-export commonly used types
pub use crate::core::{
    Anchored, Feature, FeatureKind, Geometry, GroundTruthFeature, Point2D, Pose2D,
    RelativeMotion, Timeframe,
};

pub use association::{Association, AssociationMap, associate};

pub use continuity::{
    IdHistory, IdMismatch, IdState, ReuseViolation, check_maintained_id, check_no_reuse,
};

pub use eviction::{EvictionCheck, check_eviction};

pub use evaluation::{AccuracyAggregate, AccuracyResult, AccuracySummary, GroundTruthMap};

pub use motion::{MotionSource, PoseBuffer, TimedPose, compensate, compensate_all};

pub use config::{ConfigError, EvalConfig};

pub use io::{Recording, RecordingError};

pub use run::{EvictionViolation, RunEvaluator, RunReport};

pub use error::{Error, Result};
