//! Ego motion: pose lookup and motion compensation.
//!
//! - [`PoseBuffer`] / [`MotionSource`]: where the vehicle was, and how it moved
//! - [`compensate`]: re-express a previous frame's feature in the current frame

mod compensation;
mod pose_buffer;

pub use compensation::{compensate, compensate_all};
pub use pose_buffer::{MotionSource, PoseBuffer, TimedPose};
