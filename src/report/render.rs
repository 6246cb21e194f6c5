//! Plain-text rendering of registries and reports

use super::builder::Report;
use crate::talent::Registry;
use std::fmt::Write;

/// Text shown for a slot that could not be filled
pub const NO_CANDIDATE: &str = "no candidate available";

/// Confidence percentage; whole numbers keep one decimal ("100.0")
pub fn format_confidence(confidence: f64) -> String {
    if confidence.fract() == 0.0 {
        format!("{:.1}", confidence)
    } else {
        format!("{}", confidence)
    }
}

/// Numbered listing of the combined parent pool
pub fn render_registry(registry: &Registry) -> String {
    let mut out = String::from("Combined Parents Pool:\n");
    for talent in registry {
        let _ = writeln!(out, "{}. {} ({})", talent.position, talent.name, talent.rarity);
    }
    out
}

/// Predicted pool, confidence and lost talents
///
/// The name column is as wide as the longest name in `registry`.
pub fn render_report(report: &Report, registry: &Registry) -> String {
    let width = registry.longest_name_len();
    let mut out = String::from("Predicted Pool:\n");

    for slot in &report.slots {
        match &slot.talent {
            Some(t) => {
                let _ = writeln!(out, "[{:<2}] {:<width$} ({})", slot.slot, t.name, t.rarity);
            }
            None => {
                let _ = writeln!(out, "[{:<2}] {}", slot.slot, NO_CANDIDATE);
            }
        }
    }

    let _ = writeln!(out, "Confidence: {}%", format_confidence(report.confidence));
    out.push_str("-------------\n");
    out.push_str("Lost talents:\n");
    for t in &report.lost {
        let _ = writeln!(out, "{:<5} {:<width$} ({})", "", t.name, t.rarity);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::build_report;
    use crate::simulator::SimulationSummary;
    use crate::talent::{PoolEntry, SLOT_COUNT};
    use crate::trial::Outcome;

    #[test]
    fn test_render_layout() {
        let pool = vec![PoolEntry::new("Mighty", 3), PoolEntry::new("Death-Boon", 0)];
        let registry = Registry::build(&pool, &[]).unwrap();

        let mut slots = [None; SLOT_COUNT];
        slots[0] = Some(0);
        let summary = SimulationSummary {
            outcome: Outcome::new(slots),
            count: 1,
            trials: 8,
            distinct: 2,
        };
        let text = render_report(&build_report(&registry, &summary), &registry);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Predicted Pool:");
        assert_eq!(lines[1], "[1 ] Mighty     (3)");
        assert_eq!(lines[2], "[2 ] no candidate available");
        assert_eq!(lines[10], "[10] no candidate available");
        assert_eq!(lines[11], "Confidence: 12.5%");
        assert_eq!(lines[12], "-------------");
        assert_eq!(lines[13], "Lost talents:");
        assert_eq!(lines[14], "      Death-Boon (0)");
    }

    #[test]
    fn test_render_whole_number_confidence() {
        let pool = vec![PoolEntry::new("Mighty", 3)];
        let registry = Registry::build(&pool, &[]).unwrap();

        let mut slots = [None; SLOT_COUNT];
        slots[0] = Some(0);
        let summary = SimulationSummary {
            outcome: Outcome::new(slots),
            count: 5000,
            trials: 5000,
            distinct: 1,
        };
        let text = render_report(&build_report(&registry, &summary), &registry);
        assert!(text.contains("Confidence: 100.0%\n"), "{}", text);

        let summary = SimulationSummary { count: 1250, ..summary };
        let text = render_report(&build_report(&registry, &summary), &registry);
        assert!(text.contains("Confidence: 25.0%\n"), "{}", text);
    }

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(100.0), "100.0");
        assert_eq!(format_confidence(0.0), "0.0");
        assert_eq!(format_confidence(12.5), "12.5");
        assert_eq!(format_confidence(33.33), "33.33");
    }

    #[test]
    fn test_render_registry() {
        let pool = vec![PoolEntry::new("Mighty", 3), PoolEntry::new("Rugged", 1)];
        let registry = Registry::build(&pool, &[]).unwrap();
        assert_eq!(
            render_registry(&registry),
            "Combined Parents Pool:\n1. Mighty (3)\n2. Rugged (1)\n"
        );
    }
}
