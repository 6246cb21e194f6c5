//! Persisted talent name -> rarity table used to pre-fill pool rows

use crate::error::{PredictError, Result};
use crate::talent::Rarity;
use ahash::AHashMap;
use std::path::Path;

/// Known talent names and their rarity tiers
#[derive(Debug, Clone, Default)]
pub struct TalentTable {
    rarities: AHashMap<String, Rarity>,
}

impl TalentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (name, tier) pairs, skipping invalid tiers
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (name, tier) in pairs {
            let name = name.into();
            match Rarity::parse(tier, &name) {
                Ok(rarity) => {
                    table.rarities.insert(name, rarity);
                }
                Err(e) => tracing::warn!("Skipping talent table entry: {}", e),
            }
        }
        table
    }

    /// Parse a JSON object of `{"name": tier, ...}`
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: AHashMap<String, i64> =
            serde_json::from_str(json).map_err(|e| PredictError::TalentTable(e.to_string()))?;
        Ok(Self::from_pairs(raw))
    }

    /// Load a table, failing on a missing or corrupt file
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| PredictError::TalentTable(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// Load a table; a missing or corrupt file yields an empty table
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::try_load(path) {
            Ok(table) => {
                tracing::debug!("Loaded talent table with {} entries", table.len());
                table
            }
            Err(e) => {
                tracing::warn!("Using empty talent table: {}", e);
                Self::new()
            }
        }
    }

    #[inline]
    pub fn resolve(&self, name: &str) -> Option<Rarity> {
        self.rarities.get(name).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rarities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rarities.is_empty()
    }

    /// Known names, sorted for stable display
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rarities.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Death-Spear": 2, "Mighty": 3, "Broken": 9}}"#).unwrap();

        let table = TalentTable::load(file.path());
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("Mighty").map(|r| r.tier()), Some(3));
        assert_eq!(table.resolve("Broken"), None);
        assert_eq!(table.names(), vec!["Death-Spear", "Mighty"]);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("talents.json");

        assert!(TalentTable::load(&path).is_empty());
        assert!(matches!(
            TalentTable::try_load(&path),
            Err(PredictError::TalentTable(_))
        ));
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(TalentTable::load(file.path()).is_empty());
        assert!(TalentTable::try_load(file.path()).is_err());
    }
}
