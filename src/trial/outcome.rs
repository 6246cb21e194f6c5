//! Outcome of a single trial

use crate::talent::{Registry, SLOT_COUNT};

/// Registry indices chosen for each slot; `None` marks an unfilled slot
///
/// Two outcomes are the same aggregation key only if every slot matches,
/// including the pattern of unfilled slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome {
    slots: [Option<usize>; SLOT_COUNT],
}

impl Outcome {
    pub fn new(slots: [Option<usize>; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    #[inline]
    pub fn slots(&self) -> &[Option<usize>; SLOT_COUNT] {
        &self.slots
    }

    #[inline]
    pub fn get(&self, slot: usize) -> Option<usize> {
        self.slots[slot]
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// 0-based indices of unfilled slots
    pub fn unfilled_slots(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.is_none().then_some(i))
            .collect()
    }

    /// Whether a registry index appears in any slot
    pub fn contains(&self, idx: usize) -> bool {
        self.slots.contains(&Some(idx))
    }

    /// Talent names per slot
    pub fn names<'a>(&self, registry: &'a Registry) -> Vec<Option<&'a str>> {
        self.slots
            .iter()
            .map(|s| s.map(|idx| registry.talent(idx).name.as_str()))
            .collect()
    }
}
