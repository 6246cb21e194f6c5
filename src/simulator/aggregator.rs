//! Outcome aggregation across many trials

use crate::config::WeightParams;
use crate::error::{PredictError, Result};
use crate::talent::{CandidateIndex, Mask, Registry};
use crate::trial::{run_one_trial, Outcome};
use ahash::AHashMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Outcome counts, remembering first-seen order for tie-breaking
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<(Outcome, u32)>,
    positions: AHashMap<Outcome, usize>,
    total: u32,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        self.add(outcome, 1);
    }

    fn add(&mut self, outcome: Outcome, count: u32) {
        match self.positions.get(&outcome) {
            Some(&pos) => self.entries[pos].1 += count,
            None => {
                self.positions.insert(outcome, self.entries.len());
                self.entries.push((outcome, count));
            }
        }
        self.total += count;
    }

    /// Add another table's counts; its new outcomes are appended in its own order
    pub fn merge(&mut self, other: FrequencyTable) {
        for (outcome, count) in other.entries {
            self.add(outcome, count);
        }
    }

    /// Most frequent outcome; the first-seen one wins a tie
    pub fn most_common(&self) -> Result<(Outcome, u32)> {
        let mut best: Option<(Outcome, u32)> = None;
        for &(outcome, count) in &self.entries {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((outcome, count));
            }
        }
        best.ok_or(PredictError::EmptyAggregation)
    }

    pub fn count(&self, outcome: &Outcome) -> u32 {
        self.positions
            .get(outcome)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Total number of recorded trials
    #[inline]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Number of distinct outcomes
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Outcome, u32)> {
        self.entries.iter()
    }
}

/// Winning outcome with its count over all trials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationSummary {
    pub outcome: Outcome,
    pub count: u32,
    pub trials: u32,
    /// Distinct outcomes seen
    pub distinct: usize,
}

impl SimulationSummary {
    fn from_table(table: &FrequencyTable) -> Result<Self> {
        let (outcome, count) = table.most_common()?;
        Ok(Self {
            outcome,
            count,
            trials: table.total(),
            distinct: table.len(),
        })
    }

    /// Empirical frequency of the winning outcome, in [0, 1]
    #[inline]
    pub fn confidence(&self) -> f64 {
        self.count as f64 / self.trials as f64
    }

    /// Confidence as a percentage rounded to 2 decimal places
    pub fn confidence_percent(&self) -> f64 {
        (self.confidence() * 100.0 * 100.0).round() / 100.0
    }
}

/// Run `trials` trials on one stream and tally their outcomes
pub fn tally<R: Rng + ?Sized>(
    registry: &Registry,
    index: &CandidateIndex,
    mask: &Mask,
    params: &WeightParams,
    trials: u32,
    rng: &mut R,
) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for _ in 0..trials {
        table.record(run_one_trial(registry, index, mask, params, rng));
    }
    table
}

/// Run `trials` sequential trials and select the most frequent outcome
pub fn simulate<R: Rng + ?Sized>(
    registry: &Registry,
    index: &CandidateIndex,
    mask: &Mask,
    params: &WeightParams,
    trials: u32,
    rng: &mut R,
) -> Result<SimulationSummary> {
    if trials == 0 {
        return Err(PredictError::EmptyAggregation);
    }

    let table = tally(registry, index, mask, params, trials, rng);
    SimulationSummary::from_table(&table)
}

/// Seed of a worker's stream; worker 0 uses the master seed itself
#[inline]
pub fn worker_seed(seed: u64, worker: usize) -> u64 {
    seed.wrapping_add((worker as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Split the trials across `workers` independently seeded streams
///
/// Partitions run in parallel and their tables are merged in worker order,
/// so the result depends only on `(seed, workers)`. With one worker this is
/// the sequential run on `StdRng::seed_from_u64(seed)`.
pub fn simulate_partitioned(
    registry: &Registry,
    index: &CandidateIndex,
    mask: &Mask,
    params: &WeightParams,
    trials: u32,
    seed: u64,
    workers: usize,
) -> Result<SimulationSummary> {
    if trials == 0 {
        return Err(PredictError::EmptyAggregation);
    }
    let workers = workers.clamp(1, trials as usize);

    let base = trials / workers as u32;
    let extra = trials as usize % workers;

    let tables: Vec<FrequencyTable> = (0..workers)
        .into_par_iter()
        .map(|worker| {
            let share = base + u32::from(worker < extra);
            let mut rng = StdRng::seed_from_u64(worker_seed(seed, worker));
            tally(registry, index, mask, params, share, &mut rng)
        })
        .collect();

    let mut merged = FrequencyTable::new();
    for table in tables {
        merged.merge(table);
    }

    SimulationSummary::from_table(&merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::talent::SLOT_COUNT;

    fn outcome(first: Option<usize>) -> Outcome {
        let mut slots = [None; SLOT_COUNT];
        slots[0] = first;
        Outcome::new(slots)
    }

    #[test]
    fn test_most_common_first_seen_wins_ties() {
        let mut table = FrequencyTable::new();
        table.record(outcome(Some(2)));
        table.record(outcome(Some(1)));
        table.record(outcome(Some(1)));
        table.record(outcome(Some(2)));

        let (best, count) = table.most_common().unwrap();
        assert_eq!(best, outcome(Some(2)));
        assert_eq!(count, 2);
        assert_eq!(table.total(), 4);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_partial_outcomes_are_distinct_keys() {
        let mut table = FrequencyTable::new();
        table.record(outcome(None));
        table.record(outcome(Some(0)));
        assert_eq!(table.len(), 2);
        assert_eq!(table.count(&outcome(None)), 1);
    }

    #[test]
    fn test_empty_table_fails() {
        assert_eq!(
            FrequencyTable::new().most_common().unwrap_err(),
            PredictError::EmptyAggregation
        );
    }

    #[test]
    fn test_merge_sums_counts() {
        let mut a = FrequencyTable::new();
        a.record(outcome(Some(0)));
        let mut b = FrequencyTable::new();
        b.record(outcome(Some(1)));
        b.record(outcome(Some(0)));

        a.merge(b);
        assert_eq!(a.count(&outcome(Some(0))), 2);
        assert_eq!(a.count(&outcome(Some(1))), 1);
        assert_eq!(a.total(), 3);
    }

    #[test]
    fn test_confidence_percent_rounding() {
        let summary = SimulationSummary {
            outcome: outcome(None),
            count: 617,
            trials: 5000,
            distinct: 10,
        };
        assert_eq!(summary.confidence(), 0.1234);
        assert_eq!(summary.confidence_percent(), 12.34);

        let summary = SimulationSummary { count: 1, trials: 3, ..summary };
        assert_eq!(summary.confidence_percent(), 33.33);
    }

    #[test]
    fn test_worker_zero_uses_master_seed() {
        assert_eq!(worker_seed(42, 0), 42);
        assert_ne!(worker_seed(42, 1), worker_seed(42, 2));
    }
}
