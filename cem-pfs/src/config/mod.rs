//! Evaluation configuration.
//!
//! Loads every threshold from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cem_pfs::config::EvalConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = EvalConfig::load_default()?;
//! config.validate()?;
//!
//! // Or use built-in defaults (no file needed)
//! let config = EvalConfig::default();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`AssociationSection`] | Frame-to-frame and ground-truth radii |
//! | [`CapacitySection`] | Maximum reported features per cycle |
//! | [`IdentitySection`] | Id reuse cool-down |
//! | [`PoseSection`] | Pose lookup tolerance |
//! | [`GroundTruthSection`] | Survey field of view |
//!
//! ## Example YAML
//!
//! ```yaml
//! association:
//!   radius: 0.5              # meters
//!   ground_truth_radius: 0.5
//! capacity:
//!   max_features: 16
//! identity:
//!   reuse_cooldown_cycles: 5
//! poses:
//!   max_gap_us: 100000       # 100ms
//! ground_truth:
//!   max_range: 30.0          # omit for no cutoff
//! ```

mod defaults;
mod error;
mod eval;
mod sections;

pub use error::ConfigError;
pub use eval::{DEFAULT_CONFIG_PATH, EvalConfig};
pub use sections::{
    AssociationSection, CapacitySection, GroundTruthSection, IdentitySection, PoseSection,
};
