//! Talent data model: rarity tiers, parent pools, registry, candidate index, mask

mod index;
mod mask;
mod pool;
mod rarity;
mod registry;

#[cfg(test)]
mod property_tests;

pub use index::*;
pub use mask::*;
pub use pool::*;
pub use rarity::*;
pub use registry::*;

/// Number of offspring slots
pub const SLOT_COUNT: usize = 10;

/// Maximum number of entries per parent pool
pub const MAX_POOL_SIZE: usize = 10;
