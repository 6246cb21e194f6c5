//! Main prediction engine

use super::aggregator::{simulate, simulate_partitioned, SimulationSummary};
use crate::config::PredictorConfig;
use crate::error::Result;
use crate::report::{build_report, render_registry, render_report, Report};
use crate::talent::{CandidateIndex, Mask, PoolEntry, Registry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Complete prediction: the registry it ran on, the raw summary and the report
#[derive(Debug, Clone)]
pub struct Prediction {
    pub registry: Registry,
    pub summary: SimulationSummary,
    pub report: Report,
}

impl Prediction {
    /// Combined pool listing followed by the predicted pool
    pub fn render(&self) -> String {
        format!(
            "{}\n{}",
            render_registry(&self.registry),
            render_report(&self.report, &self.registry)
        )
    }
}

/// Main prediction engine
#[derive(Debug, Clone, Default)]
pub struct Predictor {
    config: PredictorConfig,
}

impl Predictor {
    pub fn new(config: PredictorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    fn prepare(&self, parent_a: &[PoolEntry], parent_b: &[PoolEntry]) -> Result<(Registry, CandidateIndex)> {
        let registry = Registry::build_with_policy(parent_a, parent_b, self.config.unset_policy)?;
        let index = CandidateIndex::build(&registry);
        Ok((registry, index))
    }

    /// Run the configured number of trials on the configured seed
    pub fn predict(&self, parent_a: &[PoolEntry], parent_b: &[PoolEntry], mask: &Mask) -> Result<Prediction> {
        let (registry, index) = self.prepare(parent_a, parent_b)?;

        tracing::debug!(
            "Predicting {} trials over {} talents (seed {}, {} workers)",
            self.config.trials,
            registry.len(),
            self.config.seed,
            self.config.workers
        );

        let summary = if self.config.workers > 1 {
            simulate_partitioned(
                &registry,
                &index,
                mask,
                &self.config.weights,
                self.config.trials,
                self.config.seed,
                self.config.workers,
            )?
        } else {
            let mut rng = StdRng::seed_from_u64(self.config.seed);
            simulate(&registry, &index, mask, &self.config.weights, self.config.trials, &mut rng)?
        };

        Ok(self.finish(registry, summary))
    }

    /// Run the configured number of trials on a caller-supplied random stream
    pub fn predict_with_rng<R: Rng + ?Sized>(
        &self,
        parent_a: &[PoolEntry],
        parent_b: &[PoolEntry],
        mask: &Mask,
        rng: &mut R,
    ) -> Result<Prediction> {
        let (registry, index) = self.prepare(parent_a, parent_b)?;
        let summary = simulate(&registry, &index, mask, &self.config.weights, self.config.trials, rng)?;
        Ok(self.finish(registry, summary))
    }

    fn finish(&self, registry: Registry, summary: SimulationSummary) -> Prediction {
        let report = build_report(&registry, &summary);

        tracing::info!(
            "Best outcome seen {}/{} times ({}%), {} distinct outcomes, {} unfilled slots",
            summary.count,
            summary.trials,
            report.confidence,
            summary.distinct,
            report.unfilled_slots().len()
        );

        Prediction {
            registry,
            summary,
            report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredictError;

    fn pools() -> (Vec<PoolEntry>, Vec<PoolEntry>) {
        let a = vec![
            PoolEntry::new("Plaguebringer", 3),
            PoolEntry::new("Death-Spear", 2),
            PoolEntry::new("Virulence", 3),
        ];
        let b = vec![PoolEntry::new("Death-Ward", 3), PoolEntry::new("Armor-Breaker", 4)];
        (a, b)
    }

    #[test]
    fn test_predict_is_deterministic() {
        let (a, b) = pools();
        let mask = Mask::new(&[3, 2, 3, 3, 4, 0, 3, 4, 3, 4]).unwrap();
        let predictor = Predictor::new(PredictorConfig {
            trials: 500,
            ..Default::default()
        })
        .unwrap();

        let first = predictor.predict(&a, &b, &mask).unwrap();
        let second = predictor.predict(&a, &b, &mask).unwrap();
        assert_eq!(first.report, second.report);
        assert_eq!(first.render(), second.render());
        assert!(first.report.confidence > 0.0);
    }

    #[test]
    fn test_zero_trials_fails_fast() {
        let (a, b) = pools();
        let mask = Mask::new(&[3; 10]).unwrap();
        let predictor = Predictor::new(PredictorConfig {
            trials: 0,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            predictor.predict(&a, &b, &mask).unwrap_err(),
            PredictError::EmptyAggregation
        );
    }

    #[test]
    fn test_partitioned_single_worker_matches_sequential() {
        let (a, b) = pools();
        let mask = Mask::new(&[3, 2, 3, 3, 4, 0, 3, 4, 3, 4]).unwrap();
        let config = PredictorConfig {
            trials: 300,
            ..Default::default()
        };
        let predictor = Predictor::new(config.clone()).unwrap();
        let sequential = predictor.predict(&a, &b, &mask).unwrap();

        let (registry, index) = predictor.prepare(&a, &b).unwrap();
        let partitioned =
            simulate_partitioned(&registry, &index, &mask, &config.weights, 300, config.seed, 1).unwrap();
        assert_eq!(sequential.summary, partitioned);
    }

    #[test]
    fn test_parallel_workers_cover_all_trials() {
        let (a, b) = pools();
        let mask = Mask::new(&[3, 2, 3, 3, 4, 0, 3, 4, 3, 4]).unwrap();
        let predictor = Predictor::new(PredictorConfig {
            trials: 1001,
            workers: 4,
            ..Default::default()
        })
        .unwrap();

        let first = predictor.predict(&a, &b, &mask).unwrap();
        let second = predictor.predict(&a, &b, &mask).unwrap();
        assert_eq!(first.summary.trials, 1001);
        assert_eq!(first.summary, second.summary);
    }
}
