//! Recording YAML parsing.
//!
//! A recording captures one drive of the system under test:
//! - Timeframes of reported features (vehicle frame)
//! - Ego poses (world frame)
//! - Optional survey ground truth (world frame)
//!
//! ```yaml
//! name: straight_drive
//! description: two markers, constant speed
//! timeframes:
//!   - timestamp: 0
//!     features:
//!       - id: 7
//!         points: [{x: 10.0, y: 0.0}, {x: 10.0, y: 2.0}]
//! poses:
//!   - {timestamp: 0, x: 0.0, y: 0.0, yaw: 0.0}
//! ground_truth:
//!   - points: [{x: 10.0, y: 0.0}, {x: 10.0, y: 2.0}]
//! ```
//!
//! Two points make a marker line, four make a slot quad.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Feature, Geometry, Point2D, Pose2D, Timeframe};
use crate::evaluation::GroundTruthMap;
use crate::motion::{PoseBuffer, TimedPose};

/// Recording load error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordingError {
    /// I/O error reading file
    #[error("I/O error: {0}")]
    Io(String),

    /// YAML parsing error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Frame feature with a point count other than 2 or 4
    #[error("invalid geometry at t={timestamp}: {points} points (expected 2 or 4)")]
    InvalidGeometry {
        /// Frame timestamp
        timestamp: u64,
        /// Number of points found
        points: usize,
    },

    /// Ground-truth entry with a point count other than 2 or 4
    #[error("invalid ground truth geometry #{index}: {points} points (expected 2 or 4)")]
    InvalidGroundTruthGeometry {
        /// Position in the ground truth list
        index: usize,
        /// Number of points found
        points: usize,
    },

    /// Same id twice in one frame
    #[error("duplicate id {id} at t={timestamp}")]
    DuplicateId {
        /// Frame timestamp
        timestamp: u64,
        /// Duplicated id
        id: u32,
    },

    /// Frames not in strictly increasing time order
    #[error("timestamp {current} does not follow {previous}")]
    NonMonotonicTimestamp {
        /// Timestamp of the preceding frame
        previous: u64,
        /// Offending timestamp
        current: u64,
    },
}

/// Feature entry as written in the file
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RecordedFeature {
    id: u32,
    points: Vec<Point2D>,
}

/// Timeframe entry as written in the file
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RecordedFrame {
    timestamp: u64,
    #[serde(default)]
    features: Vec<RecordedFeature>,
}

/// Pose entry as written in the file
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RecordedPose {
    timestamp: u64,
    x: f64,
    y: f64,
    #[serde(default)]
    yaw: f64,
}

/// Survey entry as written in the file
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RecordedShape {
    points: Vec<Point2D>,
}

/// On-disk layout
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RecordingFile {
    name: String,
    #[serde(default)]
    description: String,
    timeframes: Vec<RecordedFrame>,
    #[serde(default)]
    poses: Vec<RecordedPose>,
    #[serde(default)]
    ground_truth: Option<Vec<RecordedShape>>,
}

/// A validated recording
#[derive(Clone, Debug, Default)]
pub struct Recording {
    /// Human-readable name
    pub name: String,
    /// Optional description
    pub description: String,
    /// Timeframes in strictly increasing time order
    pub timeframes: Vec<Timeframe>,
    /// Ego pose samples (world frame)
    pub poses: Vec<TimedPose>,
    /// Survey features (world frame)
    pub ground_truth: Option<Vec<Geometry>>,
}

impl Recording {
    /// Create a recording without poses or ground truth.
    pub fn new(name: impl Into<String>, timeframes: Vec<Timeframe>) -> Self {
        Self {
            name: name.into(),
            timeframes,
            ..Self::default()
        }
    }

    /// Attach pose samples.
    pub fn with_poses(mut self, poses: Vec<TimedPose>) -> Self {
        self.poses = poses;
        self
    }

    /// Attach world-frame ground truth.
    pub fn with_ground_truth(mut self, ground_truth: Vec<Geometry>) -> Self {
        self.ground_truth = Some(ground_truth);
        self
    }

    /// Load recording from YAML file
    pub fn load(path: &Path) -> Result<Self, RecordingError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| RecordingError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, RecordingError> {
        let file: RecordingFile =
            serde_yaml::from_str(yaml).map_err(|e| RecordingError::Parse(e.to_string()))?;
        Self::from_file(file)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, RecordingError> {
        serde_yaml::to_string(&self.to_file()).map_err(|e| RecordingError::Parse(e.to_string()))
    }

    /// Write recording to a YAML file
    pub fn save(&self, path: &Path) -> Result<(), RecordingError> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml).map_err(|e| RecordingError::Io(e.to_string()))
    }

    /// Pose samples as a lookup buffer.
    pub fn pose_buffer(&self, max_gap_us: u64) -> PoseBuffer {
        PoseBuffer::from_samples(self.poses.iter().copied(), max_gap_us)
    }

    /// Survey as a ground-truth map, if the recording has one.
    pub fn ground_truth_map(&self, max_range: Option<f64>) -> Option<GroundTruthMap> {
        self.ground_truth
            .as_ref()
            .map(|gt| GroundTruthMap::new(gt.clone()).with_max_range(max_range))
    }

    fn from_file(file: RecordingFile) -> Result<Self, RecordingError> {
        let mut timeframes = Vec::with_capacity(file.timeframes.len());
        let mut previous: Option<u64> = None;

        for frame in file.timeframes {
            if let Some(prev) = previous
                && frame.timestamp <= prev
            {
                return Err(RecordingError::NonMonotonicTimestamp {
                    previous: prev,
                    current: frame.timestamp,
                });
            }
            previous = Some(frame.timestamp);
            timeframes.push(decode_frame(frame)?);
        }

        let poses = file
            .poses
            .into_iter()
            .map(|p| TimedPose {
                timestamp: p.timestamp,
                pose: Pose2D::new(p.x, p.y, p.yaw),
            })
            .collect();

        let ground_truth = file
            .ground_truth
            .map(|shapes| {
                shapes
                    .iter()
                    .enumerate()
                    .map(|(index, s)| {
                        Geometry::from_points(&s.points).ok_or(
                            RecordingError::InvalidGroundTruthGeometry {
                                index,
                                points: s.points.len(),
                            },
                        )
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(Self {
            name: file.name,
            description: file.description,
            timeframes,
            poses,
            ground_truth,
        })
    }

    fn to_file(&self) -> RecordingFile {
        RecordingFile {
            name: self.name.clone(),
            description: self.description.clone(),
            timeframes: self
                .timeframes
                .iter()
                .map(|tf| RecordedFrame {
                    timestamp: tf.timestamp,
                    features: tf
                        .features
                        .iter()
                        .map(|f| RecordedFeature {
                            id: f.id,
                            points: f.geometry().points().to_vec(),
                        })
                        .collect(),
                })
                .collect(),
            poses: self
                .poses
                .iter()
                .map(|p| RecordedPose {
                    timestamp: p.timestamp,
                    x: p.pose.x,
                    y: p.pose.y,
                    yaw: p.pose.yaw,
                })
                .collect(),
            ground_truth: self.ground_truth.as_ref().map(|gt| {
                gt.iter()
                    .map(|g| RecordedShape {
                        points: g.points().to_vec(),
                    })
                    .collect()
            }),
        }
    }
}

fn decode_frame(frame: RecordedFrame) -> Result<Timeframe, RecordingError> {
    let timestamp = frame.timestamp;
    let mut features: Vec<Feature> = Vec::with_capacity(frame.features.len());

    for rf in &frame.features {
        if features.iter().any(|f| f.id == rf.id) {
            return Err(RecordingError::DuplicateId {
                timestamp,
                id: rf.id,
            });
        }
        let geometry =
            Geometry::from_points(&rf.points).ok_or(RecordingError::InvalidGeometry {
                timestamp,
                points: rf.points.len(),
            })?;
        features.push(Feature::new(rf.id, timestamp, geometry));
    }

    Ok(Timeframe::new(timestamp, features))
}
