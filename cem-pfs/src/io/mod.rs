//! Recording files.
//!
//! A [`Recording`] bundles what one evaluation run needs: the timeframes
//! reported by the system under test, the ego poses, and optionally the
//! survey ground truth.
//!
//! ```rust,ignore
//! use cem_pfs::io::Recording;
//! use std::path::Path;
//!
//! let recording = Recording::load(Path::new("recordings/slot_pass.yaml"))?;
//! let poses = recording.pose_buffer(100_000);
//! ```

mod recording;

pub use recording::{Recording, RecordingError};
