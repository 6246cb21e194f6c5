//! Mask sequence: the required rarity per offspring slot

use super::rarity::Rarity;
use super::SLOT_COUNT;
use crate::error::{PredictError, Result};
use serde::{Deserialize, Serialize};

/// Exactly [`SLOT_COUNT`] validated rarity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>")]
pub struct Mask([Rarity; SLOT_COUNT]);

impl Mask {
    pub fn new(tiers: &[i64]) -> Result<Self> {
        if tiers.len() != SLOT_COUNT {
            return Err(PredictError::InvalidMaskLength(tiers.len()));
        }

        let mut slots = [Rarity::ALL[0]; SLOT_COUNT];
        for (slot, (&value, target)) in tiers.iter().zip(slots.iter_mut()).enumerate() {
            *target = Rarity::parse(value, &format!("mask slot {}", slot + 1))?;
        }

        Ok(Mask(slots))
    }

    /// Required rarity at a 0-based slot index
    #[inline]
    pub fn get(&self, slot: usize) -> Rarity {
        self.0[slot]
    }

    pub fn iter(&self) -> impl Iterator<Item = Rarity> + '_ {
        self.0.iter().copied()
    }
}

impl TryFrom<Vec<i64>> for Mask {
    type Error = PredictError;

    fn try_from(tiers: Vec<i64>) -> Result<Self> {
        Mask::new(&tiers)
    }
}
