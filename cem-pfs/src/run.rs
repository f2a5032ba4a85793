//! Whole-run evaluation.
//!
//! Walks the timeframes of a recording in order; the cycle index of a frame
//! is its position in the sequence.
//!
//! ```text
//!  frame k-1 ──compensate──► previous'
//!                               │
//!  frame k ───────────────► associate ──► maintained id
//!     │                         └───────► eviction
//!     ├──► no reuse (IdHistory)
//!     └──► ground truth accuracy (pose at frame k)
//! ```
//!
//! A missing pose never aborts the run: the pose-dependent checks of that
//! pair or frame are skipped and counted.

use log::{debug, info, warn};
use serde::Serialize;

use crate::association::associate;
use crate::config::{ConfigError, EvalConfig};
use crate::continuity::{
    IdHistory, IdMismatch, ReuseViolation, check_maintained_id, check_no_reuse,
};
use crate::core::Timeframe;
use crate::evaluation::{AccuracyAggregate, AccuracySummary, GroundTruthMap, evaluate};
use crate::eviction::{EvictionCheck, check_eviction};
use crate::io::Recording;
use crate::motion::{MotionSource, compensate_all};

/// An eviction that did not drop the farthest feature.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvictionViolation {
    /// Timestamp of the current frame (µs)
    pub timestamp: u64,
    /// Id of the feature that was dropped
    pub dropped_id: u32,
    /// Distance of the dropped feature (meters)
    pub dropped_distance: f64,
    /// Id of the feature that should have been dropped
    pub expected_id: u32,
    /// Distance of the farthest surviving feature (meters)
    pub farthest_survivor_distance: f64,
}

impl EvictionViolation {
    fn from_check(timestamp: u64, check: &EvictionCheck) -> Self {
        Self {
            timestamp,
            dropped_id: check.dropped.id,
            dropped_distance: check.dropped_distance,
            expected_id: check.expected.id,
            farthest_survivor_distance: check.farthest_survivor_distance,
        }
    }
}

/// Result of evaluating one run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RunReport {
    /// Recording name
    pub name: String,
    /// Timeframes processed
    pub frames: usize,
    /// Adjacent frame pairs that were compensated and associated
    pub pairs_evaluated: usize,
    /// Adjacent pairs skipped for lack of a pose
    pub pairs_skipped: usize,
    /// Associated pairs over the whole run
    pub associations: usize,
    /// Frames whose ground truth was skipped for lack of a pose
    pub ground_truth_skipped: usize,
    /// Associated pairs that changed id
    pub id_mismatches: Vec<IdMismatch>,
    /// Ids reused inside the cool-down
    pub reuse_violations: Vec<ReuseViolation>,
    /// Eviction checks that triggered
    pub eviction_checks: usize,
    /// Triggered eviction checks that failed
    pub eviction_violations: Vec<EvictionViolation>,
    /// Ground-truth accuracy, when the run has ground truth
    pub accuracy: Option<AccuracySummary>,
}

impl RunReport {
    /// True if no identity or eviction rule was broken.
    pub fn passed(&self) -> bool {
        self.id_mismatches.is_empty()
            && self.reuse_violations.is_empty()
            && self.eviction_violations.is_empty()
    }

    /// Print a human-readable summary.
    pub fn print(&self) {
        println!("=== Run: {} ===", self.name);
        println!("Frames:              {}", self.frames);
        println!(
            "Pairs:               {} evaluated, {} skipped (no pose)",
            self.pairs_evaluated, self.pairs_skipped
        );
        println!("Associations:        {}", self.associations);
        println!("Id mismatches:       {}", self.id_mismatches.len());
        println!("Reuse violations:    {}", self.reuse_violations.len());
        println!(
            "Evictions:           {} checked, {} wrong",
            self.eviction_checks,
            self.eviction_violations.len()
        );
        if let Some(accuracy) = &self.accuracy {
            println!();
            accuracy.print();
            if self.ground_truth_skipped > 0 {
                println!("Skipped (no pose):  {}", self.ground_truth_skipped);
            }
        }
        println!();
        println!("Result: {}", if self.passed() { "PASS" } else { "FAIL" });
    }
}

/// Evaluates recordings against one configuration.
#[derive(Clone, Debug)]
pub struct RunEvaluator {
    config: EvalConfig,
}

impl RunEvaluator {
    /// Create an evaluator; invalid radii or capacity are rejected.
    pub fn new(config: EvalConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluate a loaded recording.
    pub fn evaluate(&self, recording: &Recording) -> RunReport {
        let poses = recording.pose_buffer(self.config.poses.max_gap_us);
        let ground_truth = recording.ground_truth_map(self.config.ground_truth.max_range);
        self.evaluate_parts(
            &recording.name,
            &recording.timeframes,
            &poses,
            ground_truth.as_ref(),
        )
    }

    /// Evaluate timeframes with an explicit motion source and ground truth.
    pub fn evaluate_parts<M: MotionSource + ?Sized>(
        &self,
        name: &str,
        timeframes: &[Timeframe],
        motion: &M,
        ground_truth: Option<&GroundTruthMap>,
    ) -> RunReport {
        let cfg = &self.config;
        let mut report = RunReport {
            name: name.to_string(),
            frames: timeframes.len(),
            ..RunReport::default()
        };
        let mut history = IdHistory::new();
        let mut accuracy = ground_truth.map(|_| AccuracyAggregate::new());

        for (idx, frame) in timeframes.iter().enumerate() {
            let cycle = u32::try_from(idx).unwrap_or(u32::MAX);
            debug!(
                "[Run] frame {} t={} features={}",
                idx,
                frame.timestamp,
                frame.len()
            );

            let reused = check_no_reuse(
                &mut history,
                cycle,
                frame.ids(),
                cfg.identity.reuse_cooldown_cycles,
            );
            for v in &reused {
                warn!(
                    "[Run] t={} id {} reused after {} cycles (cooldown {})",
                    frame.timestamp, v.id, v.gap, v.cooldown_cycles
                );
            }
            report.reuse_violations.extend(reused);

            if idx > 0 {
                self.evaluate_pair(&timeframes[idx - 1], frame, motion, &mut report);
            }

            if let (Some(gt), Some(agg)) = (ground_truth, accuracy.as_mut()) {
                match motion.estimate_pose(frame.timestamp) {
                    Some(pose) => {
                        let expected = gt.to_vehicle_frame(&pose);
                        let result =
                            evaluate(&frame.features, &expected, cfg.association.ground_truth_radius);
                        debug!(
                            "[Run] t={} precision={:.3} recall={:.3}",
                            frame.timestamp, result.precision, result.recall
                        );
                        agg.add(&result);
                    }
                    None => {
                        debug!("[Run] t={} no pose, ground truth skipped", frame.timestamp);
                        report.ground_truth_skipped += 1;
                    }
                }
            }
        }

        report.accuracy = accuracy.map(|agg| agg.summary());

        info!(
            "[Run] {}: {} frames, {} pairs ({} skipped), {} mismatches, {} reuse, {}/{} bad evictions",
            report.name,
            report.frames,
            report.pairs_evaluated,
            report.pairs_skipped,
            report.id_mismatches.len(),
            report.reuse_violations.len(),
            report.eviction_violations.len(),
            report.eviction_checks
        );
        report
    }

    fn evaluate_pair<M: MotionSource + ?Sized>(
        &self,
        previous: &Timeframe,
        current: &Timeframe,
        motion: &M,
        report: &mut RunReport,
    ) {
        let Some(delta) = motion.relative_motion(previous.timestamp, current.timestamp) else {
            debug!(
                "[Run] no motion for {} -> {}, pair skipped",
                previous.timestamp, current.timestamp
            );
            report.pairs_skipped += 1;
            return;
        };

        let compensated = compensate_all(&previous.features, delta);
        let map = associate(&compensated, &current.features, self.config.association.radius);
        report.pairs_evaluated += 1;
        report.associations += map.len();

        let mismatches = check_maintained_id(&map, &compensated, &current.features);
        for m in &mismatches {
            warn!(
                "[Run] t={} id changed {} -> {}",
                m.timestamp, m.previous_id, m.current_id
            );
        }
        report.id_mismatches.extend(mismatches);

        if let Some(check) = check_eviction(
            &compensated,
            &current.features,
            &map,
            self.config.capacity.max_features,
        ) {
            report.eviction_checks += 1;
            if !check.is_correct() {
                let violation = EvictionViolation::from_check(current.timestamp, &check);
                warn!(
                    "[Run] t={} evicted id {} at {:.2}m, expected id {} (farthest survivor {:.2}m)",
                    violation.timestamp,
                    violation.dropped_id,
                    violation.dropped_distance,
                    violation.expected_id,
                    violation.farthest_survivor_distance
                );
                report.eviction_violations.push(violation);
            }
        }
    }
}
