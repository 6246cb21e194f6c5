//! Property tests for talent module
//!
//! Property 1: Registry names are unique and first occurrence wins
//! Property 2: Positions are dense, 1-based and follow combined input order
//! Property 3: Candidate index tiers match talent rarity, in position order

use proptest::prelude::*;
use std::collections::HashMap;

use crate::talent::{CandidateIndex, PoolEntry, Rarity, Registry, MAX_POOL_SIZE};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// Generate a parent pool drawing names from a small shared alphabet so that
/// both parents frequently overlap
fn pool_strategy() -> impl Strategy<Value = Vec<PoolEntry>> {
    prop::collection::vec((0..15usize, 0..=4i64), 0..=MAX_POOL_SIZE).prop_map(|rows| {
        rows.into_iter()
            .map(|(name, rarity)| PoolEntry::new(format!("Talent-{}", name), rarity))
            .collect()
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Property 1: every input name appears exactly once, with its first-seen rarity
    #[test]
    fn prop_registry_deduplicates(a in pool_strategy(), b in pool_strategy()) {
        let registry = Registry::build(&a, &b).unwrap();

        let mut first_seen: Vec<(String, i64)> = Vec::new();
        let mut seen: HashMap<String, i64> = HashMap::new();
        for entry in a.iter().chain(b.iter()) {
            if !seen.contains_key(&entry.name) {
                seen.insert(entry.name.clone(), entry.rarity.unwrap());
                first_seen.push((entry.name.clone(), entry.rarity.unwrap()));
            }
        }

        prop_assert_eq!(registry.len(), first_seen.len());
        for (talent, (name, rarity)) in registry.iter().zip(first_seen.iter()) {
            prop_assert_eq!(&talent.name, name);
            prop_assert_eq!(talent.rarity.tier() as i64, *rarity);
            prop_assert_eq!(registry.get(name).map(|t| t.position), Some(talent.position));
        }
    }

    /// Property 2: positions run 1..=n in registry order
    #[test]
    fn prop_positions_are_sequential(a in pool_strategy(), b in pool_strategy()) {
        let registry = Registry::build(&a, &b).unwrap();
        for (i, talent) in registry.iter().enumerate() {
            prop_assert_eq!(talent.position, i + 1);
        }
    }

    /// Property 3: every talent sits in exactly its own tier, tiers ordered by position
    #[test]
    fn prop_candidate_index_partitions_registry(a in pool_strategy(), b in pool_strategy()) {
        let registry = Registry::build(&a, &b).unwrap();
        let index = CandidateIndex::build(&registry);

        let mut total = 0;
        for rarity in Rarity::ALL {
            let tier: Vec<_> = index.talents(&registry, rarity).collect();
            total += tier.len();
            prop_assert!(tier.iter().all(|t| t.rarity == rarity));
            prop_assert!(tier.windows(2).all(|w| w[0].position < w[1].position));
        }
        prop_assert_eq!(total, registry.len());
    }

    /// Out-of-range tiers are rejected, never clamped
    #[test]
    fn prop_invalid_tier_rejected(bad in prop_oneof![-100..0i64, 5..100i64], slot in 0..MAX_POOL_SIZE) {
        let mut pool: Vec<PoolEntry> = (0..MAX_POOL_SIZE)
            .map(|i| PoolEntry::new(format!("T{}", i), 1))
            .collect();
        pool[slot].rarity = Some(bad);
        prop_assert!(Registry::build(&pool, &[]).is_err());
        prop_assert!(Registry::build(&[], &pool).is_err());
    }
}
