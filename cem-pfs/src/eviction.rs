//! Capacity eviction check.
//!
//! The system under test reports at most `max_count` features per cycle.
//! When more real features are available it must drop the one farthest from
//! the vehicle. This module derives, from two consecutive frames, the
//! element that should have been evicted and whether the actual drop
//! matches.
//!
//! The check only applies when:
//! 1. the current list is saturated (`current.len() == max_count`), and
//! 2. exactly one previous feature has no association in the current frame.

use serde::Serialize;

use crate::association::AssociationMap;
use crate::core::{Anchored, Feature};

/// Outcome of one triggered eviction check.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvictionCheck {
    /// Previous feature (compensated into the current frame) that vanished
    pub dropped: Feature,
    /// Distance of `dropped` from the vehicle origin (meters)
    pub dropped_distance: f64,
    /// Feature that should have been evicted: farthest of survivors and `dropped`
    pub expected: Feature,
    /// Largest distance among the surviving current features (meters)
    pub farthest_survivor_distance: f64,
}

impl EvictionCheck {
    /// True if the farthest element was the one evicted.
    pub fn is_correct(&self) -> bool {
        self.dropped_distance > self.farthest_survivor_distance
    }
}

/// Farthest feature from the vehicle; ties keep the first.
fn farthest<'a>(features: impl IntoIterator<Item = &'a Feature>) -> Option<(&'a Feature, f64)> {
    let mut best: Option<(&Feature, f64)> = None;
    for f in features {
        let d = f.distance_to_vehicle();
        if best.is_none_or(|(_, bd)| d > bd) {
            best = Some((f, d));
        }
    }
    best
}

/// Check which feature should have been evicted between two frames.
///
/// `previous` must already be motion-compensated into the current frame and
/// `associations` must map `previous` onto `current`. Returns `None` when the
/// check does not apply, which includes a zero `max_count`.
pub fn check_eviction(
    previous: &[Feature],
    current: &[Feature],
    associations: &AssociationMap,
    max_count: usize,
) -> Option<EvictionCheck> {
    if max_count == 0 || current.len() != max_count {
        return None;
    }

    let missing = associations.unmatched_previous(previous.len());
    let [dropped_idx] = missing.as_slice() else {
        return None;
    };

    let dropped = &previous[*dropped_idx];
    let dropped_distance = dropped.distance_to_vehicle();
    let survivor = farthest(current);
    let farthest_survivor_distance = survivor.map_or(f64::NEG_INFINITY, |(_, d)| d);

    let evicted_farthest = dropped_distance > farthest_survivor_distance;
    let expected = match survivor {
        Some((f, _)) if !evicted_farthest => f.clone(),
        _ => dropped.clone(),
    };

    Some(EvictionCheck {
        dropped: dropped.clone(),
        dropped_distance,
        expected,
        farthest_survivor_distance,
    })
}
