//! Candidate index: registry talents grouped by rarity tier

use super::rarity::{Rarity, RARITY_TIERS};
use super::registry::{Registry, Talent};
use smallvec::SmallVec;

/// Registry indices per tier, each tier in position order
#[derive(Debug, Clone, Default)]
pub struct CandidateIndex {
    tiers: [SmallVec<[usize; 8]>; RARITY_TIERS],
}

impl CandidateIndex {
    pub fn build(registry: &Registry) -> Self {
        let mut index = CandidateIndex::default();
        for (idx, talent) in registry.iter().enumerate() {
            index.tiers[talent.rarity.index()].push(idx);
        }

        tracing::debug!(
            "Candidate index tier sizes: {:?}",
            index.tiers.iter().map(|t| t.len()).collect::<Vec<_>>()
        );

        index
    }

    /// Registry indices of the given tier, in position order
    #[inline]
    pub fn by_rarity(&self, rarity: Rarity) -> &[usize] {
        &self.tiers[rarity.index()]
    }

    /// Talents of the given tier, in position order
    pub fn talents<'a>(
        &'a self,
        registry: &'a Registry,
        rarity: Rarity,
    ) -> impl Iterator<Item = &'a Talent> + 'a {
        self.by_rarity(rarity).iter().map(move |&idx| registry.talent(idx))
    }

    #[inline]
    pub fn tier_len(&self, rarity: Rarity) -> usize {
        self.tiers[rarity.index()].len()
    }
}
