//! Maintained-id check across associated pairs.

use serde::Serialize;

use crate::association::AssociationMap;
use crate::core::Feature;

/// An associated pair whose ids differ.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IdMismatch {
    /// Timestamp of the current frame (µs)
    pub timestamp: u64,
    /// Id reported in the previous frame
    pub previous_id: u32,
    /// Id reported in the current frame
    pub current_id: u32,
    /// Index in the previous frame
    pub previous_index: usize,
    /// Index in the current frame
    pub current_index: usize,
}

/// Report every associated pair that changed id, in association order.
pub fn check_maintained_id(
    map: &AssociationMap,
    previous: &[Feature],
    current: &[Feature],
) -> Vec<IdMismatch> {
    map.iter()
        .filter_map(|a| {
            let prev = &previous[a.previous];
            let cur = &current[a.current];
            (prev.id != cur.id).then(|| IdMismatch {
                timestamp: cur.timestamp,
                previous_id: prev.id,
                current_id: cur.id,
                previous_index: a.previous,
                current_index: a.current,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::association::associate;
    use crate::core::Point2D;

    fn marker(id: u32, ts: u64, x: f64) -> Feature {
        Feature::marker(id, ts, Point2D::new(x, 0.0), Point2D::new(x, 2.0))
    }

    #[test]
    fn test_stable_ids() {
        let prev = vec![marker(1, 0, 2.0), marker(2, 0, 4.0)];
        let cur = vec![marker(2, 100, 4.1), marker(1, 100, 2.1)];
        let map = associate(&prev, &cur, 0.5);
        assert_eq!(map.len(), 2);
        assert!(check_maintained_id(&map, &prev, &cur).is_empty());
    }

    #[test]
    fn test_id_switch_reported() {
        let prev = vec![marker(1, 0, 2.0), marker(2, 0, 4.0)];
        let cur = vec![marker(1, 100, 2.0), marker(9, 100, 4.0)];
        let map = associate(&prev, &cur, 0.5);

        let mismatches = check_maintained_id(&map, &prev, &cur);
        assert_eq!(
            mismatches,
            vec![IdMismatch {
                timestamp: 100,
                previous_id: 2,
                current_id: 9,
                previous_index: 1,
                current_index: 1,
            }]
        );
    }

    #[test]
    fn test_unmatched_features_ignored() {
        let prev = vec![marker(1, 0, 2.0)];
        let cur = vec![marker(5, 100, 8.0)];
        let map = associate(&prev, &cur, 0.5);
        assert!(check_maintained_id(&map, &prev, &cur).is_empty());
    }
}
