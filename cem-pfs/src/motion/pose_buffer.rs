//! Timestamped ego pose buffer.
//!
//! Holds the recorded vehicle poses of a run and answers the two questions
//! the validators ask about ego motion:
//!
//! 1. **Where was the vehicle at `t`?** Nearest recorded sample, provided it
//!    is no farther than `max_gap_us` from `t`.
//! 2. **How did the vehicle move between `t_from` and `t_to`?** The
//!    [`RelativeMotion`] between the two estimated poses.
//!
//! A missing pose is not an error: callers skip the timeframe.

use serde::{Deserialize, Serialize};

use crate::core::{Pose2D, RelativeMotion};

/// Source of ego poses and relative motion.
pub trait MotionSource {
    /// Nearest available pose for `timestamp`, `None` if none is close enough.
    fn estimate_pose(&self, timestamp: u64) -> Option<Pose2D>;

    /// Motion mapping vehicle-frame geometry at `t_from` into the frame at `t_to`.
    fn relative_motion(&self, t_from: u64, t_to: u64) -> Option<RelativeMotion> {
        let from = self.estimate_pose(t_from)?;
        let to = self.estimate_pose(t_to)?;
        Some(RelativeMotion::between(from, to))
    }
}

/// A pose with timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimedPose {
    /// Recording time in microseconds
    pub timestamp: u64,
    /// Vehicle pose in the world frame
    pub pose: Pose2D,
}

/// Chronologically ordered pose samples.
#[derive(Clone, Debug, Default)]
pub struct PoseBuffer {
    samples: Vec<TimedPose>,
    max_gap_us: u64,
}

impl PoseBuffer {
    /// Create an empty buffer.
    ///
    /// `max_gap_us` is the largest distance between a query timestamp and
    /// the nearest sample that still counts as a valid estimate.
    pub fn new(max_gap_us: u64) -> Self {
        Self {
            samples: Vec::new(),
            max_gap_us,
        }
    }

    /// Build a buffer from unordered samples.
    pub fn from_samples(samples: impl IntoIterator<Item = TimedPose>, max_gap_us: u64) -> Self {
        let mut buffer = Self::new(max_gap_us);
        for sample in samples {
            buffer.push(sample.timestamp, sample.pose);
        }
        buffer
    }

    /// Insert a sample, keeping the buffer sorted.
    ///
    /// A sample with an already present timestamp replaces the old one.
    pub fn push(&mut self, timestamp: u64, pose: Pose2D) {
        let sample = TimedPose { timestamp, pose };
        match self.samples.last() {
            Some(last) if last.timestamp < timestamp => self.samples.push(sample),
            None => self.samples.push(sample),
            Some(_) => {
                let idx = self.samples.partition_point(|s| s.timestamp < timestamp);
                if self.samples.get(idx).is_some_and(|s| s.timestamp == timestamp) {
                    self.samples[idx] = sample;
                } else {
                    self.samples.insert(idx, sample);
                }
            }
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if no samples were recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum accepted gap between query and sample (µs).
    pub fn max_gap_us(&self) -> u64 {
        self.max_gap_us
    }

    /// Samples in chronological order.
    pub fn samples(&self) -> &[TimedPose] {
        &self.samples
    }

    /// Nearest sample to `timestamp`; equal gaps pick the earlier sample.
    fn nearest(&self, timestamp: u64) -> Option<&TimedPose> {
        let idx = self.samples.partition_point(|s| s.timestamp < timestamp);
        let after = self.samples.get(idx);
        let before = idx.checked_sub(1).and_then(|i| self.samples.get(i));

        match (before, after) {
            (Some(b), Some(a)) => {
                if timestamp - b.timestamp <= a.timestamp - timestamp {
                    Some(b)
                } else {
                    Some(a)
                }
            }
            (Some(b), None) => Some(b),
            (None, Some(a)) => Some(a),
            (None, None) => None,
        }
    }
}

impl MotionSource for PoseBuffer {
    fn estimate_pose(&self, timestamp: u64) -> Option<Pose2D> {
        let sample = self.nearest(timestamp)?;
        if sample.timestamp.abs_diff(timestamp) <= self.max_gap_us {
            Some(sample.pose)
        } else {
            None
        }
    }
}
