//! Id no-reuse check with a cool-down window.
//!
//! ```text
//!   gap = current_cycle - last_seen
//!
//!   0 ── 1 ────────────── cooldown ──────────►
//!   │ Active │   Dormant (violation)  │ Reclaimable
//! ```
//!
//! A dormant id that comes back before the cool-down has elapsed is reported,
//! whether the track resumed or the id was recycled. The two cases look the
//! same from the outside.

use std::collections::HashMap;

use serde::Serialize;

/// Lifecycle state of an id at a given cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum IdState {
    /// Never observed
    Unseen,
    /// Observed in this cycle or the one before
    Active,
    /// Absent, still inside the cool-down window
    Dormant,
    /// Absent long enough to be handed out again
    Reclaimable,
}

/// Last cycle each id was observed in.
#[derive(Clone, Debug, Default)]
pub struct IdHistory {
    last_seen: HashMap<u32, u32>,
}

impl IdHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cycle `id` was last observed in.
    pub fn last_seen(&self, id: u32) -> Option<u32> {
        self.last_seen.get(&id).copied()
    }

    /// State of `id` as seen from `cycle`.
    pub fn state(&self, id: u32, cycle: u32, cooldown_cycles: u32) -> IdState {
        match self.last_seen(id) {
            None => IdState::Unseen,
            Some(last) => {
                let gap = cycle.saturating_sub(last);
                if gap <= 1 {
                    IdState::Active
                } else if gap < cooldown_cycles {
                    IdState::Dormant
                } else {
                    IdState::Reclaimable
                }
            }
        }
    }

    /// Number of ids ever observed.
    pub fn len(&self) -> usize {
        self.last_seen.len()
    }

    /// True if no id was observed yet.
    pub fn is_empty(&self) -> bool {
        self.last_seen.is_empty()
    }

    fn record(&mut self, id: u32, cycle: u32) {
        self.last_seen.insert(id, cycle);
    }
}

/// A dormant id reappeared before its cool-down elapsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReuseViolation {
    /// Reappearing id
    pub id: u32,
    /// Cycle the id was last observed in
    pub last_seen_cycle: u32,
    /// Cycle of the reappearance
    pub current_cycle: u32,
    /// `current_cycle - last_seen_cycle`
    pub gap: u32,
    /// Cool-down in force
    pub cooldown_cycles: u32,
}

/// Check the ids observed in `current_cycle` against `history` and record them.
///
/// Every observed id is recorded, violating or not. Violations come back in
/// ascending id order; an id listed twice is only checked once.
pub fn check_no_reuse(
    history: &mut IdHistory,
    current_cycle: u32,
    observed_ids: impl IntoIterator<Item = u32>,
    cooldown_cycles: u32,
) -> Vec<ReuseViolation> {
    let mut ids: Vec<u32> = observed_ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();

    let mut violations = Vec::new();
    for id in ids {
        if history.state(id, current_cycle, cooldown_cycles) == IdState::Dormant
            && let Some(last) = history.last_seen(id)
        {
            violations.push(ReuseViolation {
                id,
                last_seen_cycle: last,
                current_cycle,
                gap: current_cycle - last,
                cooldown_cycles,
            });
        }
        history.record(id, current_cycle);
    }
    violations
}
