//! Slot weighting: base weight, chain bonus and distance penalty

use crate::config::WeightParams;
use crate::talent::Talent;

/// Length of the unbroken positional run ending right before `candidate`
///
/// Walks `placed` backwards from the most recently filled slot. Each step must
/// hold a talent whose position is exactly one below the previous step's; an
/// unfilled slot or any other position ends the run.
pub fn chain_length(candidate: &Talent, placed: &[Option<&Talent>]) -> usize {
    let mut expected = candidate.position;
    let mut run = 0;

    for prev in placed.iter().rev() {
        match prev {
            Some(prev) if prev.position + 1 == expected => {
                run += 1;
                expected = prev.position;
            }
            _ => break,
        }
    }

    run
}

/// Chain bonus for placing `candidate` after `placed`
#[inline]
pub fn chain_bonus(candidate: &Talent, placed: &[Option<&Talent>], params: &WeightParams) -> f64 {
    chain_length(candidate, placed) as f64 * params.chain
}

/// Quadratic penalty for the distance between the candidate's position and the 1-based slot
#[inline]
pub fn distance_penalty(candidate: &Talent, slot_index: usize, params: &WeightParams) -> f64 {
    let distance = candidate.position as f64 - (slot_index + 1) as f64;
    params.distance * distance * distance
}

/// Sampling weight of `candidate` at `slot_index`, never below `params.floor`
#[inline]
pub fn slot_weight(
    candidate: &Talent,
    slot_index: usize,
    placed: &[Option<&Talent>],
    params: &WeightParams,
) -> f64 {
    let weight = params.base + chain_bonus(candidate, placed, params)
        - distance_penalty(candidate, slot_index, params);
    weight.max(params.floor)
}
