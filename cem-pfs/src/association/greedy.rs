//! Greedy nearest-available association.

use crate::core::Anchored;

use super::map::{Association, AssociationMap};

/// Associate `previous` with `current` by anchor distance.
///
/// Previous features are scanned in list order. Each one claims the
/// unclaimed current feature with the smallest anchor distance strictly
/// below `radius`; equal distances go to the lower current index. A claimed
/// current feature is never offered to a later previous feature.
///
/// The result depends on the order of `previous`: swapping two previous
/// features that compete for the same current feature swaps who wins. This
/// is not a globally optimal assignment.
///
/// `previous` is expected to be motion-compensated into the current frame
/// already. Empty inputs yield an empty map.
///
/// # Example
///
/// ```
/// use cem_pfs::association::associate;
/// use cem_pfs::core::{Feature, Point2D};
///
/// let a = Feature::marker(1, 0, Point2D::new(1.0, 0.0), Point2D::new(2.0, 0.0));
/// let b = Feature::marker(2, 0, Point2D::new(1.2, 0.0), Point2D::new(2.0, 0.0));
/// let c = Feature::marker(1, 1, Point2D::new(1.1, 0.0), Point2D::new(2.0, 0.0));
///
/// let map = associate(&[a.clone(), b.clone()], &[c.clone()], 0.5);
/// assert_eq!(map.current_for(0), Some(0));
/// assert_eq!(map.current_for(1), None);
///
/// let map = associate(&[b, a], &[c], 0.5);
/// assert_eq!(map.current_for(0), Some(0));
/// ```
pub fn associate<P, C>(previous: &[P], current: &[C], radius: f64) -> AssociationMap
where
    P: Anchored,
    C: Anchored,
{
    let mut map = AssociationMap::new();
    if previous.is_empty() || current.is_empty() {
        return map;
    }

    let current_anchors: Vec<_> = current.iter().map(Anchored::anchor).collect();
    let mut claimed = vec![false; current.len()];

    for (prev_idx, prev) in previous.iter().enumerate() {
        let anchor = prev.anchor();
        let mut best: Option<(usize, f64)> = None;

        for (cur_idx, cur_anchor) in current_anchors.iter().enumerate() {
            if claimed[cur_idx] {
                continue;
            }
            let distance = anchor.distance(cur_anchor);
            if distance >= radius || distance.is_nan() {
                continue;
            }
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((cur_idx, distance));
            }
        }

        if let Some((cur_idx, distance)) = best {
            claimed[cur_idx] = true;
            map.push(Association {
                previous: prev_idx,
                current: cur_idx,
                distance,
            });
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feature, Point2D};

    fn marker_at(id: u32, x: f64, y: f64) -> Feature {
        Feature::marker(id, 0, Point2D::new(x, y), Point2D::new(x + 2.0, y))
    }

    #[test]
    fn test_empty_inputs() {
        let some = vec![marker_at(1, 1.0, 0.0)];
        let none: Vec<Feature> = Vec::new();
        assert!(associate(&some, &none, 1.0).is_empty());
        assert!(associate(&none, &some, 1.0).is_empty());
        assert!(associate(&none, &none, 1.0).is_empty());
    }

    #[test]
    fn test_nearest_wins() {
        let previous = vec![marker_at(1, 5.0, 0.0)];
        let current = vec![
            marker_at(10, 5.4, 0.0),
            marker_at(11, 5.1, 0.0),
            marker_at(12, 5.3, 0.0),
        ];
        let map = associate(&previous, &current, 0.5);
        assert_eq!(map.current_for(0), Some(1));
    }

    #[test]
    fn test_radius_is_strict() {
        let previous = vec![marker_at(1, 0.0, 1.0)];
        let current = vec![marker_at(1, 0.0, 1.5)];
        assert!(associate(&previous, &current, 0.5).is_empty());
        assert_eq!(associate(&previous, &current, 0.5001).len(), 1);
    }

    #[test]
    fn test_greedy_order_dependence() {
        let a = marker_at(1, 1.0, 0.0);
        let b = marker_at(2, 1.3, 0.0);
        let c = marker_at(3, 1.1, 0.0);

        let map = associate(&[a.clone(), b.clone()], std::slice::from_ref(&c), 0.5);
        assert_eq!(map.current_for(0), Some(0));
        assert_eq!(map.current_for(1), None);

        let map = associate(&[b, a], std::slice::from_ref(&c), 0.5);
        assert_eq!(map.current_for(0), Some(0));
        assert_eq!(map.current_for(1), None);
    }

    #[test]
    fn test_claimed_feature_falls_through_to_next_best() {
        let previous = vec![marker_at(1, 1.0, 0.0), marker_at(2, 1.2, 0.0)];
        let current = vec![marker_at(1, 1.1, 0.0), marker_at(2, 1.5, 0.0)];
        let map = associate(&previous, &current, 0.5);
        assert_eq!(map.current_for(0), Some(0));
        assert_eq!(map.current_for(1), Some(1));
    }

    #[test]
    fn test_distance_tie_keeps_first_current() {
        let previous = vec![marker_at(1, 0.0, 5.0)];
        let current = vec![marker_at(1, 0.25, 5.0), marker_at(2, -0.25, 5.0)];
        let map = associate(&previous, &current, 0.5);
        assert_eq!(map.current_for(0), Some(0));

        let reversed = vec![marker_at(2, -0.25, 5.0), marker_at(1, 0.25, 5.0)];
        let map = associate(&previous, &reversed, 0.5);
        assert_eq!(map.current_for(0), Some(0));
    }

    #[test]
    fn test_nan_anchor_never_matches() {
        let previous = vec![marker_at(1, f64::NAN, 0.0)];
        let current = vec![marker_at(1, 0.0, 0.0)];
        assert!(associate(&previous, &current, 10.0).is_empty());
    }
}
