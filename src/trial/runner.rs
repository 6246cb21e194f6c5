//! One randomized trial: fill every slot by weighted choice without replacement

use super::outcome::Outcome;
use super::selector::weighted_choice;
use super::weight::slot_weight;
use crate::config::WeightParams;
use crate::talent::{CandidateIndex, Mask, Registry, Talent, SLOT_COUNT};
use rand::Rng;
use smallvec::SmallVec;

/// Run one trial over the shared registry and index
///
/// Slots are filled in order. A slot whose tier has no unused candidate left
/// stays unfilled and the trial moves on to the next slot.
pub fn run_one_trial<R: Rng + ?Sized>(
    registry: &Registry,
    index: &CandidateIndex,
    mask: &Mask,
    params: &WeightParams,
    rng: &mut R,
) -> Outcome {
    let mut placed: [Option<&Talent>; SLOT_COUNT] = [None; SLOT_COUNT];
    let mut chosen: [Option<usize>; SLOT_COUNT] = [None; SLOT_COUNT];
    let mut used = vec![false; registry.len()];
    let mut weights: SmallVec<[(usize, f64); 10]> = SmallVec::new();

    for (slot, rarity) in mask.iter().enumerate() {
        weights.clear();
        for &idx in index.by_rarity(rarity) {
            if used[idx] {
                continue;
            }
            let candidate = registry.talent(idx);
            weights.push((idx, slot_weight(candidate, slot, &placed[..slot], params)));
        }

        match weighted_choice(&weights, rng) {
            Some(idx) => {
                used[idx] = true;
                placed[slot] = Some(registry.talent(idx));
                chosen[slot] = Some(idx);
            }
            None => {
                tracing::trace!("No candidate of rarity {} left for slot {}", rarity, slot + 1);
            }
        }
    }

    Outcome::new(chosen)
}
