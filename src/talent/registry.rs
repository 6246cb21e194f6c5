//! Talent registry built from two parent pools

use super::pool::PoolEntry;
use super::rarity::Rarity;
use super::MAX_POOL_SIZE;
use crate::config::UnsetPolicy;
use crate::error::{PredictError, Result};
use ahash::AHashMap;
use serde::Serialize;

/// A deduplicated talent with its combined-order position (1-based)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Talent {
    pub name: String,
    pub rarity: Rarity,
    pub position: usize,
}

/// Deduplicated union of both parent pools, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct Registry {
    talents: Vec<Talent>,
    by_name: AHashMap<String, usize>,
}

impl Registry {
    /// Build a registry, dropping placeholder rows
    pub fn build(parent_a: &[PoolEntry], parent_b: &[PoolEntry]) -> Result<Self> {
        Self::build_with_policy(parent_a, parent_b, UnsetPolicy::default())
    }

    /// Build a registry from parent A then parent B, first occurrence wins
    pub fn build_with_policy(
        parent_a: &[PoolEntry],
        parent_b: &[PoolEntry],
        policy: UnsetPolicy,
    ) -> Result<Self> {
        let parents = [('A', parent_a), ('B', parent_b)];

        for (label, pool) in parents {
            if pool.len() > MAX_POOL_SIZE {
                return Err(PredictError::PoolTooLarge {
                    parent: label,
                    len: pool.len(),
                });
            }
        }

        let mut registry = Registry {
            talents: Vec::with_capacity(parent_a.len() + parent_b.len()),
            by_name: AHashMap::with_capacity(parent_a.len() + parent_b.len()),
        };

        for (label, pool) in parents {
            for (i, entry) in pool.iter().enumerate() {
                let context = format!("parent {} entry {}", label, i + 1);

                if entry.is_placeholder() && policy == UnsetPolicy::Exclude {
                    // An unset row may still carry a tier; it must be a real one
                    if let Some(value) = entry.rarity {
                        Rarity::parse(value, &context)?;
                    }
                    continue;
                }

                let rarity = match entry.rarity {
                    Some(value) => Rarity::parse(value, &context)?,
                    None => return Err(PredictError::MissingRarity { context }),
                };

                if let Some(&existing) = registry.by_name.get(&entry.name) {
                    let first = &registry.talents[existing];
                    if first.rarity != rarity {
                        tracing::debug!(
                            "Duplicate talent {} in {} has rarity {}, keeping first-seen rarity {}",
                            entry.name,
                            context,
                            rarity,
                            first.rarity
                        );
                    }
                    continue;
                }

                registry.push(entry.name.clone(), rarity);
            }
        }

        tracing::debug!(
            "Built talent registry with {} talents from {} + {} pool entries",
            registry.len(),
            parent_a.len(),
            parent_b.len()
        );

        Ok(registry)
    }

    fn push(&mut self, name: String, rarity: Rarity) {
        let idx = self.talents.len();
        self.by_name.insert(name.clone(), idx);
        self.talents.push(Talent {
            name,
            rarity,
            position: idx + 1,
        });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.talents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.talents.is_empty()
    }

    /// Look up a talent by exact name
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Talent> {
        self.by_name.get(name).map(|&idx| &self.talents[idx])
    }

    /// Talent at a registry index
    ///
    /// # Panics
    /// Panics if `idx` is out of bounds.
    #[inline]
    pub fn talent(&self, idx: usize) -> &Talent {
        &self.talents[idx]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Talent> {
        self.talents.iter()
    }

    /// Width of the name column in rendered reports
    pub fn longest_name_len(&self) -> usize {
        self.talents
            .iter()
            .map(|t| t.name.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Talent;
    type IntoIter = std::slice::Iter<'a, Talent>;

    fn into_iter(self) -> Self::IntoIter {
        self.talents.iter()
    }
}
