//! Precision / recall of detections against ground truth.
//!
//! Per frame, ground truth is associated (as "previous") with the detections
//! (as "current") using the same greedy radius rule as frame-to-frame
//! tracking. Every associated pair is a true positive.
//!
//! | Metric | Formula |
//! |--------|---------|
//! | precision | TP / detections |
//! | recall | TP / ground truth |
//! | false positive ratio | 1 − precision |
//!
//! Frames with no detections or no ground truth can't produce both ratios.
//! They are excluded from the run means instead of counting as zero.

use serde::Serialize;

use crate::association::associate;
use crate::core::{Feature, GroundTruthFeature};

/// Accuracy of one frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AccuracyResult {
    /// Associated ground-truth / detection pairs
    pub true_positives: usize,
    /// Number of detections in the frame
    pub detection_count: usize,
    /// Number of ground-truth features in the frame
    pub ground_truth_count: usize,
    /// TP / detections (0 when there are no detections)
    pub precision: f64,
    /// TP / ground truth (0 when there is no ground truth)
    pub recall: f64,
    /// 1 − precision
    pub false_positive_ratio: f64,
    /// Mean anchor distance of the associated pairs (meters)
    pub mean_position_error: Option<f64>,
}

impl AccuracyResult {
    /// Detections without a ground-truth partner.
    pub fn false_positives(&self) -> usize {
        self.detection_count - self.true_positives
    }

    /// Ground-truth features without a detection.
    pub fn false_negatives(&self) -> usize {
        self.ground_truth_count - self.true_positives
    }

    /// True if both denominators are non-zero and the frame counts toward means.
    pub fn is_countable(&self) -> bool {
        self.detection_count > 0 && self.ground_truth_count > 0
    }
}

/// Evaluate one frame of detections against ground truth.
///
/// `ground_truth` must already be in the vehicle frame of `detections`.
pub fn evaluate(
    detections: &[Feature],
    ground_truth: &[GroundTruthFeature],
    radius: f64,
) -> AccuracyResult {
    let map = associate(ground_truth, detections, radius);
    let tp = map.len();

    let precision = ratio(tp, detections.len());
    let recall = ratio(tp, ground_truth.len());
    let false_positive_ratio = 1.0 - precision;

    AccuracyResult {
        true_positives: tp,
        detection_count: detections.len(),
        ground_truth_count: ground_truth.len(),
        precision,
        recall,
        false_positive_ratio,
        mean_position_error: map.mean_distance(),
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Run-level accumulation of per-frame accuracy.
#[derive(Clone, Debug, Default)]
pub struct AccuracyAggregate {
    frames_included: usize,
    frames_excluded: usize,
    precision_sum: f64,
    recall_sum: f64,
    false_positive_ratio_sum: f64,
    matched_pairs: usize,
    position_error_sum: f64,
    true_positives: usize,
    detections: usize,
    ground_truth: usize,
}

impl AccuracyAggregate {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one frame.
    pub fn add(&mut self, result: &AccuracyResult) {
        self.true_positives += result.true_positives;
        self.detections += result.detection_count;
        self.ground_truth += result.ground_truth_count;

        if !result.is_countable() {
            self.frames_excluded += 1;
            return;
        }

        self.frames_included += 1;
        self.precision_sum += result.precision;
        self.recall_sum += result.recall;
        self.false_positive_ratio_sum += result.false_positive_ratio;
        if let Some(err) = result.mean_position_error {
            self.position_error_sum += err * result.true_positives as f64;
            self.matched_pairs += result.true_positives;
        }
    }

    fn mean(&self, sum: f64) -> Option<f64> {
        (self.frames_included > 0).then(|| sum / self.frames_included as f64)
    }

    /// Frames that entered the means.
    pub fn frames_included(&self) -> usize {
        self.frames_included
    }

    /// Frames skipped because detections or ground truth were empty.
    pub fn frames_excluded(&self) -> usize {
        self.frames_excluded
    }

    /// Mean precision over included frames.
    pub fn mean_precision(&self) -> Option<f64> {
        self.mean(self.precision_sum)
    }

    /// Mean recall over included frames.
    pub fn mean_recall(&self) -> Option<f64> {
        self.mean(self.recall_sum)
    }

    /// Mean false positive ratio over included frames.
    pub fn mean_false_positive_ratio(&self) -> Option<f64> {
        self.mean(self.false_positive_ratio_sum)
    }

    /// Mean anchor distance over every matched pair of the included frames.
    pub fn mean_position_error(&self) -> Option<f64> {
        (self.matched_pairs > 0).then(|| self.position_error_sum / self.matched_pairs as f64)
    }

    /// Snapshot of the means for reporting.
    pub fn summary(&self) -> AccuracySummary {
        AccuracySummary {
            frames_included: self.frames_included,
            frames_excluded: self.frames_excluded,
            true_positives: self.true_positives,
            detections: self.detections,
            ground_truth: self.ground_truth,
            mean_precision: self.mean_precision(),
            mean_recall: self.mean_recall(),
            mean_false_positive_ratio: self.mean_false_positive_ratio(),
            mean_position_error: self.mean_position_error(),
        }
    }
}

/// Aggregated accuracy of a whole run.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AccuracySummary {
    /// Frames that entered the means
    pub frames_included: usize,
    /// Frames without detections or without ground truth
    pub frames_excluded: usize,
    /// Total true positives over all frames
    pub true_positives: usize,
    /// Total detections over all frames
    pub detections: usize,
    /// Total ground-truth features over all frames
    pub ground_truth: usize,
    /// Mean precision
    pub mean_precision: Option<f64>,
    /// Mean recall
    pub mean_recall: Option<f64>,
    /// Mean false positive ratio
    pub mean_false_positive_ratio: Option<f64>,
    /// Mean anchor distance of matched pairs (meters)
    pub mean_position_error: Option<f64>,
}

impl AccuracySummary {
    /// Print the summary.
    pub fn print(&self) {
        fn pct(v: Option<f64>) -> String {
            v.map_or_else(|| "n/a".to_string(), |v| format!("{:.2}%", v * 100.0))
        }

        println!("=== Ground Truth Accuracy ===");
        println!(
            "Frames:          {} evaluated, {} excluded",
            self.frames_included, self.frames_excluded
        );
        println!("Precision:       {}", pct(self.mean_precision));
        println!("Recall:          {}", pct(self.mean_recall));
        println!("False Positives: {}", pct(self.mean_false_positive_ratio));
        match self.mean_position_error {
            Some(err) => println!("Position Error:  {:.3} m", err),
            None => println!("Position Error:  n/a"),
        }
    }
}
