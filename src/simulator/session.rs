//! PredictionSession - Result handle for the Python-Rust boundary
//!
//! This module provides the PredictionSession PyClass that keeps a finished
//! prediction in Rust heap memory, letting Python read the parts it needs
//! without converting the whole result upfront.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::report::NO_CANDIDATE;
use crate::talent::Talent;

use super::Prediction;

/// Build a `{"name", "rarity", "position"}` dict for a talent
fn talent_to_dict<'py>(py: Python<'py>, talent: &Talent) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("name", &talent.name)?;
    dict.set_item("rarity", talent.rarity.tier())?;
    dict.set_item("position", talent.position)?;
    Ok(dict)
}

// ============================================================================
// PredictionSession PyClass
// ============================================================================

/// PredictionSession - Finished prediction held in Rust heap
///
/// Distinguishes "ran, some slots unfilled" (`is_complete == False`) from a
/// run that could not start at all, which raises before a session exists.
#[pyclass]
pub struct PredictionSession {
    prediction: Prediction,
}

impl PredictionSession {
    pub fn new(prediction: Prediction) -> Self {
        Self { prediction }
    }

    pub fn prediction(&self) -> &Prediction {
        &self.prediction
    }
}

#[pymethods]
impl PredictionSession {
    /// Confidence percentage, rounded to 2 decimal places
    #[getter]
    fn confidence(&self) -> f64 {
        self.prediction.report.confidence
    }

    /// Times the winning outcome was produced
    #[getter]
    fn count(&self) -> u32 {
        self.prediction.report.count
    }

    /// Number of trials run
    #[getter]
    fn trials(&self) -> u32 {
        self.prediction.report.trials
    }

    /// Whether every slot received a talent
    #[getter]
    fn is_complete(&self) -> bool {
        self.prediction.report.is_complete()
    }

    /// 1-based numbers of unfilled slots
    #[getter]
    fn unfilled_slots(&self) -> Vec<usize> {
        self.prediction.report.unfilled_slots()
    }

    /// Predicted slots as (slot, name, rarity); name and rarity are None when unfilled
    fn get_slots(&self) -> Vec<(usize, Option<String>, Option<u8>)> {
        self.prediction
            .report
            .slots
            .iter()
            .map(|s| {
                (
                    s.slot,
                    s.talent.as_ref().map(|t| t.name.clone()),
                    s.talent.as_ref().map(|t| t.rarity.tier()),
                )
            })
            .collect()
    }

    /// Predicted slots as dicts, with a "text" entry for unfilled slots
    fn get_slot_dicts(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let list = PyList::empty(py);
        for slot in &self.prediction.report.slots {
            let dict = match &slot.talent {
                Some(talent) => talent_to_dict(py, talent)?,
                None => {
                    let dict = PyDict::new(py);
                    dict.set_item("name", py.None())?;
                    dict.set_item("text", NO_CANDIDATE)?;
                    dict
                }
            };
            dict.set_item("slot", slot.slot)?;
            list.append(dict)?;
        }
        Ok(list.into_any().unbind())
    }

    /// Registry talents missing from the winning outcome, in registry order
    fn get_lost_talents(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let list = PyList::empty(py);
        for talent in &self.prediction.report.lost {
            list.append(talent_to_dict(py, talent)?)?;
        }
        Ok(list.into_any().unbind())
    }

    /// Combined parent pool in position order
    fn get_combined_pool(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let list = PyList::empty(py);
        for talent in &self.prediction.registry {
            list.append(talent_to_dict(py, talent)?)?;
        }
        Ok(list.into_any().unbind())
    }

    /// Text report: combined pool, predicted pool, confidence and lost talents
    fn render(&self) -> String {
        self.prediction.render()
    }

    /// Report as a JSON string
    fn to_json(&self) -> String {
        self.prediction.report.to_json()
    }

    fn __repr__(&self) -> String {
        format!(
            "PredictionSession(confidence={}%, unfilled={:?})",
            self.prediction.report.confidence,
            self.prediction.report.unfilled_slots()
        )
    }
}
