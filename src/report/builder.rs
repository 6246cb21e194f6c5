//! Structured prediction report

use crate::simulator::SimulationSummary;
use crate::talent::{Registry, Talent};
use serde::Serialize;

/// One predicted offspring slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictedSlot {
    /// 1-based slot number
    pub slot: usize,
    /// `None` when no candidate of the required tier was available
    pub talent: Option<Talent>,
}

/// Winning outcome, its confidence and the talents it leaves out
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub slots: Vec<PredictedSlot>,
    /// Percentage, rounded to 2 decimal places
    pub confidence: f64,
    pub count: u32,
    pub trials: u32,
    /// Registry talents absent from the winning outcome, in registry order
    pub lost: Vec<Talent>,
}

impl Report {
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.talent.is_some())
    }

    /// 1-based numbers of slots left without a talent
    pub fn unfilled_slots(&self) -> Vec<usize> {
        self.slots
            .iter()
            .filter(|s| s.talent.is_none())
            .map(|s| s.slot)
            .collect()
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Build the report for a simulation's winning outcome
pub fn build_report(registry: &Registry, summary: &SimulationSummary) -> Report {
    let slots = summary
        .outcome
        .slots()
        .iter()
        .enumerate()
        .map(|(i, chosen)| PredictedSlot {
            slot: i + 1,
            talent: chosen.map(|idx| registry.talent(idx).clone()),
        })
        .collect();

    let lost = registry
        .iter()
        .enumerate()
        .filter(|(idx, _)| !summary.outcome.contains(*idx))
        .map(|(_, t)| t.clone())
        .collect();

    Report {
        slots,
        confidence: summary.confidence_percent(),
        count: summary.count,
        trials: summary.trials,
        lost,
    }
}
