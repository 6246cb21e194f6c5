//! Rarity tiers

use crate::error::{PredictError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest valid rarity tier
pub const MAX_RARITY: u8 = 4;

/// Number of rarity tiers (0..=MAX_RARITY)
pub const RARITY_TIERS: usize = MAX_RARITY as usize + 1;

/// Rarity tier of a talent or a mask slot, always in 0..=4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rarity(u8);

impl Rarity {
    /// All tiers in ascending order
    pub const ALL: [Rarity; RARITY_TIERS] = [Rarity(0), Rarity(1), Rarity(2), Rarity(3), Rarity(4)];

    /// Validate a raw tier, naming `context` in the error
    pub fn parse(value: i64, context: &str) -> Result<Self> {
        if (0..=MAX_RARITY as i64).contains(&value) {
            Ok(Rarity(value as u8))
        } else {
            Err(PredictError::InvalidRarity {
                context: context.to_string(),
                value,
            })
        }
    }

    #[inline]
    pub fn tier(self) -> u8 {
        self.0
    }

    /// Index into per-tier tables
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<i64> for Rarity {
    type Error = PredictError;

    fn try_from(value: i64) -> Result<Self> {
        Rarity::parse(value, "rarity")
    }
}

impl From<Rarity> for u8 {
    fn from(rarity: Rarity) -> u8 {
        rarity.0
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
