//! Association result type.

use serde::Serialize;

/// One associated pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Association {
    /// Index into the previous (or ground-truth) list
    pub previous: usize,
    /// Index into the current (or detection) list
    pub current: usize,
    /// Anchor distance between the two features (meters)
    pub distance: f64,
}

/// Partial injective mapping from previous indices to current indices.
///
/// Keys are unique and values are unique: no current feature is claimed by
/// two previous features. Pairs are stored in ascending previous index,
/// which is the order the greedy associator produced them.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AssociationMap {
    pairs: Vec<Association>,
}

impl AssociationMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn push(&mut self, association: Association) {
        debug_assert!(self.current_for(association.previous).is_none());
        debug_assert!(self.previous_for(association.current).is_none());
        self.pairs.push(association);
    }

    /// Number of associated pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if nothing was associated.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// All pairs in ascending previous index.
    pub fn iter(&self) -> impl Iterator<Item = &Association> {
        self.pairs.iter()
    }

    /// Current index mapped from `previous`, if any.
    pub fn current_for(&self, previous: usize) -> Option<usize> {
        self.pairs
            .binary_search_by_key(&previous, |a| a.previous)
            .ok()
            .map(|i| self.pairs[i].current)
    }

    /// Previous index mapped onto `current`, if any.
    pub fn previous_for(&self, current: usize) -> Option<usize> {
        self.pairs
            .iter()
            .find(|a| a.current == current)
            .map(|a| a.previous)
    }

    /// Previous indices in `0..previous_len` without a partner (exits).
    pub fn unmatched_previous(&self, previous_len: usize) -> Vec<usize> {
        (0..previous_len)
            .filter(|&i| self.current_for(i).is_none())
            .collect()
    }

    /// Current indices in `0..current_len` without a partner (entries).
    pub fn unmatched_current(&self, current_len: usize) -> Vec<usize> {
        let mut claimed = vec![false; current_len];
        for a in &self.pairs {
            if let Some(slot) = claimed.get_mut(a.current) {
                *slot = true;
            }
        }
        claimed
            .iter()
            .enumerate()
            .filter(|(_, c)| !**c)
            .map(|(i, _)| i)
            .collect()
    }

    /// Mean anchor distance over all pairs, `None` for an empty map.
    pub fn mean_distance(&self) -> Option<f64> {
        if self.pairs.is_empty() {
            return None;
        }
        let sum: f64 = self.pairs.iter().map(|a| a.distance).sum();
        Some(sum / self.pairs.len() as f64)
    }
}

impl<'a> IntoIterator for &'a AssociationMap {
    type Item = &'a Association;
    type IntoIter = std::slice::Iter<'a, Association>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
