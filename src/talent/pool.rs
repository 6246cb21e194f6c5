//! Parent pool entries as supplied by the input layer

use crate::config::TalentTable;
use serde::{Deserialize, Serialize};

/// Sentinel name for a pool row the user has not filled in yet
pub const UNSET_TALENT: &str = "?";

/// One (name, rarity) row of a parent pool
///
/// The rarity is kept raw so that validation happens at the registry
/// boundary, where the offending row can be named in the error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolEntry {
    pub name: String,
    #[serde(default)]
    pub rarity: Option<i64>,
}

impl PoolEntry {
    pub fn new(name: impl Into<String>, rarity: i64) -> Self {
        Self {
            name: name.into(),
            rarity: Some(rarity),
        }
    }

    /// Placeholder row, optionally with a user-chosen tier
    pub fn unset(rarity: Option<i64>) -> Self {
        Self {
            name: UNSET_TALENT.to_string(),
            rarity,
        }
    }

    /// Build a row for a known name, pre-filling the rarity from the table
    pub fn from_table(name: impl Into<String>, table: &TalentTable) -> Self {
        let name = name.into();
        let rarity = table.resolve(&name).map(|r| r.tier() as i64);
        Self { name, rarity }
    }

    /// Whether this row is an unknown/unset placeholder
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        let trimmed = self.name.trim();
        trimmed.is_empty() || trimmed == UNSET_TALENT
    }
}

impl<S: Into<String>> From<(S, i64)> for PoolEntry {
    fn from((name, rarity): (S, i64)) -> Self {
        PoolEntry::new(name, rarity)
    }
}
