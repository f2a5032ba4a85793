//! Spatial association between two feature sets.
//!
//! The same greedy rule serves frame-to-frame tracking (previous frame vs
//! current frame) and ground-truth evaluation (survey vs detections). Both
//! sides only need an anchor, see [`Anchored`](crate::core::Anchored).
//!
//! ```text
//!  previous (compensated)        current
//!  ┌──────────────┐            ┌──────────────┐
//!  │ 0  ●─────────┼── 0.1 m ──►│ 1  ●         │
//!  │ 1  ●─────────┼── 0.3 m ──►│ 0  ●         │
//!  │ 2  ●  (exit) │            │ 2  ● (entry) │
//!  └──────────────┘            └──────────────┘
//! ```

mod greedy;
mod map;

pub use greedy::associate;
pub use map::{Association, AssociationMap};
