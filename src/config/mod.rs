//! Configuration module for predictor settings and the persisted talent table
//!
//! With the `python` feature this module also handles deserialization of
//! the predictor settings from Python dicts.

mod settings;
mod table;

pub use settings::*;
pub use table::*;

#[cfg(feature = "python")]
pub use self::python::deserialize_config;

#[cfg(feature = "python")]
mod python {
    use super::{PredictorConfig, UnsetPolicy, WeightParams};
    use crate::error::PredictError;
    use pyo3::prelude::*;
    use pyo3::types::PyDict;

    /// Helper to get an optional, non-None item from a dict
    fn get_opt<'py>(dict: &Bound<'py, PyDict>, name: &str) -> PyResult<Option<Bound<'py, PyAny>>> {
        Ok(dict.get_item(name)?.filter(|v| !v.is_none()))
    }

    fn extract_weights(dict: &Bound<'_, PyDict>) -> PyResult<WeightParams> {
        let mut weights = WeightParams::default();
        if let Some(v) = get_opt(dict, "base")? {
            weights.base = v.extract()?;
        }
        if let Some(v) = get_opt(dict, "chain")? {
            weights.chain = v.extract()?;
        }
        if let Some(v) = get_opt(dict, "distance")? {
            weights.distance = v.extract()?;
        }
        if let Some(v) = get_opt(dict, "floor")? {
            weights.floor = v.extract()?;
        }
        Ok(weights)
    }

    /// Deserialize predictor settings from a Python dict
    /// Expected format: {"trials": 5000, "seed": 42, "workers": 1,
    /// "unset_policy": "exclude", "weights": {"base": 1.0, ...}}
    pub fn deserialize_config(dict: &Bound<'_, PyDict>) -> PyResult<PredictorConfig> {
        let mut config = PredictorConfig::default();

        if let Some(v) = get_opt(dict, "trials")? {
            config.trials = v.extract()?;
        }
        if let Some(v) = get_opt(dict, "seed")? {
            config.seed = v.extract()?;
        }
        if let Some(v) = get_opt(dict, "workers")? {
            config.workers = v.extract()?;
        }
        if let Some(v) = get_opt(dict, "unset_policy")? {
            let policy: String = v.extract()?;
            config.unset_policy = match policy.as_str() {
                "exclude" => UnsetPolicy::Exclude,
                "keep" => UnsetPolicy::Keep,
                other => {
                    return Err(PredictError::InvalidConfig(format!(
                        "unknown unset_policy: {}",
                        other
                    ))
                    .into())
                }
            };
        }
        if let Some(v) = get_opt(dict, "weights")? {
            let weights: Bound<'_, PyDict> = v.extract()?;
            config.weights = extract_weights(&weights)?;
        }

        config.validate()?;
        Ok(config)
    }
}
