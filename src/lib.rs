//! Talent Inherit Core - Monte Carlo predictor for inherited talents
//!
//! Given two parent talent pools and a mask of required rarity tiers, this
//! crate runs many randomized trials and reports the most frequent offspring
//! talent arrangement together with its empirical confidence.
//!
//! With the `python` feature the predictor is also exposed as a Python
//! extension module via PyO3.

pub mod config;
pub mod error;
pub mod report;
pub mod simulator;
pub mod talent;
pub mod trial;

pub use config::{PredictorConfig, TalentTable, UnsetPolicy, WeightParams};
pub use error::{PredictError, Result};
pub use report::Report;
pub use simulator::{Prediction, Predictor};
pub use talent::{Mask, PoolEntry, Rarity, Registry, Talent};

#[cfg(feature = "python")]
mod python {
    use crate::config::{self, TalentTable};
    use crate::simulator::{PredictionSession, Predictor};
    use crate::talent::{Mask, PoolEntry};
    use once_cell::sync::OnceCell;
    use parking_lot::RwLock;
    use pyo3::prelude::*;
    use pyo3::types::PyDict;
    use std::sync::Arc;

    // ========================================================================
    // Cached Configuration
    // ========================================================================

    /// Cached predictor and talent table
    struct CachedConfig {
        predictor: Predictor,
        table: TalentTable,
    }

    /// Global cached configuration
    static CACHED_CONFIG: OnceCell<Arc<RwLock<CachedConfig>>> = OnceCell::new();

    // ========================================================================
    // Helper Functions
    // ========================================================================

    fn cached_config() -> PyResult<Arc<RwLock<CachedConfig>>> {
        CACHED_CONFIG.get().cloned().ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
                "Config not initialized. Call init_config() first.",
            )
        })
    }

    /// Turn Python rows into pool entries, pre-filling missing rarities from the table
    fn to_pool(rows: Vec<(String, Option<i64>)>, table: &TalentTable) -> Vec<PoolEntry> {
        rows.into_iter()
            .map(|(name, rarity)| match rarity {
                Some(tier) => PoolEntry::new(name, tier),
                None => PoolEntry::from_table(name, table),
            })
            .collect()
    }

    fn run_prediction(
        cached: &CachedConfig,
        parent_a: Vec<(String, Option<i64>)>,
        parent_b: Vec<(String, Option<i64>)>,
        mask: &[i64],
    ) -> PyResult<PredictionSession> {
        let mask = Mask::new(mask)?;
        let parent_a = to_pool(parent_a, &cached.table);
        let parent_b = to_pool(parent_b, &cached.table);
        let prediction = cached.predictor.predict(&parent_a, &parent_b, &mask)?;
        Ok(PredictionSession::new(prediction))
    }

    // ========================================================================
    // Python Functions
    // ========================================================================

    /// Initialize the predictor configuration (call once at startup)
    ///
    /// # Arguments
    /// * `config` - Optional settings dict: trials, seed, workers, unset_policy, weights
    /// * `talent_table` - Optional path to a `{"name": rarity}` JSON file
    #[pyfunction]
    #[pyo3(signature = (config=None, talent_table=None))]
    fn init_config(config: Option<&Bound<'_, PyDict>>, talent_table: Option<String>) -> PyResult<()> {
        let settings = match config {
            Some(dict) => config::deserialize_config(dict)?,
            None => config::PredictorConfig::default(),
        };

        let cached = CachedConfig {
            predictor: Predictor::new(settings)?,
            table: talent_table.map(TalentTable::load).unwrap_or_default(),
        };

        // If already initialized, update the config
        if let Some(existing) = CACHED_CONFIG.get() {
            let mut guard = existing.write();
            *guard = cached;
        } else {
            let _ = CACHED_CONFIG.set(Arc::new(RwLock::new(cached)));
        }

        Ok(())
    }

    /// Check if config is initialized
    #[pyfunction]
    fn is_config_initialized() -> bool {
        CACHED_CONFIG.get().is_some()
    }

    /// Replace the cached talent table; returns the number of known talents
    ///
    /// A missing or corrupt file is logged and leaves an empty table.
    #[pyfunction]
    fn load_talent_table(path: String) -> PyResult<usize> {
        let config_arc = cached_config()?;
        let table = TalentTable::load(path);
        let len = table.len();
        config_arc.write().table = table;
        Ok(len)
    }

    /// Look up a talent's rarity in the cached table
    #[pyfunction]
    fn resolve_rarity(name: &str) -> PyResult<Option<u8>> {
        let config_arc = cached_config()?;
        let config = config_arc.read();
        Ok(config.table.resolve(name).map(|r| r.tier()))
    }

    /// Predict the offspring talents
    ///
    /// # Arguments
    /// * `parent_a` - List of (name, rarity or None) rows
    /// * `parent_b` - List of (name, rarity or None) rows
    /// * `mask` - Exactly 10 required rarity tiers
    ///
    /// # Raises
    /// RuntimeError if `init_config` was not called first or no trials ran,
    /// ValueError on invalid rarities or mask length
    #[pyfunction]
    fn predict(
        parent_a: Vec<(String, Option<i64>)>,
        parent_b: Vec<(String, Option<i64>)>,
        mask: Vec<i64>,
    ) -> PyResult<PredictionSession> {
        let config_arc = cached_config()?;
        let config = config_arc.read();
        run_prediction(&config, parent_a, parent_b, &mask)
    }

    /// Predict the offspring talents asynchronously
    ///
    /// The trials run on a blocking thread so the asyncio event loop stays
    /// responsive.
    ///
    /// # Example (Python)
    /// ```python
    /// session = await predict_async(pet1, pet2, [3, 2, 3, 3, 4, 0, 3, 4, 3, 4])
    /// print(session.render())
    /// ```
    #[pyfunction]
    fn predict_async<'py>(
        py: Python<'py>,
        parent_a: Vec<(String, Option<i64>)>,
        parent_b: Vec<(String, Option<i64>)>,
        mask: Vec<i64>,
    ) -> PyResult<Bound<'py, PyAny>> {
        let config_arc = cached_config()?;

        pyo3_async_runtimes::tokio::future_into_py(py, async move {
            let session = tokio::task::spawn_blocking(move || {
                let config = config_arc.read();
                run_prediction(&config, parent_a, parent_b, &mask)
            })
            .await
            .map_err(|e| {
                PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                    "Prediction task panicked: {}",
                    e
                ))
            })??;

            Ok(session)
        })
    }

    // ========================================================================
    // Python Module Definition
    // ========================================================================

    /// Python module definition
    #[pymodule]
    fn talent_inherit_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(init_config, m)?)?;
        m.add_function(wrap_pyfunction!(is_config_initialized, m)?)?;
        m.add_function(wrap_pyfunction!(load_talent_table, m)?)?;
        m.add_function(wrap_pyfunction!(resolve_rarity, m)?)?;
        m.add_function(wrap_pyfunction!(predict, m)?)?;
        m.add_function(wrap_pyfunction!(predict_async, m)?)?;
        m.add_class::<PredictionSession>()?;
        Ok(())
    }
}
