//! Weighted random selection over a candidate list

use rand::Rng;

/// Pick one id from `(id, weight)` pairs with probability proportional to weight
///
/// Draws a uniform value in `[0, total)` and walks the items in the given
/// order until the running sum reaches it, so the same random stream always
/// yields the same pick for the same list.
#[inline]
pub fn weighted_choice<R: Rng + ?Sized>(items: &[(usize, f64)], rng: &mut R) -> Option<usize> {
    if items.is_empty() {
        return None;
    }

    let total_weight: f64 = items.iter().map(|(_, w)| w).sum();
    if total_weight <= 0.0 {
        return None;
    }

    let mut random_value = rng.gen::<f64>() * total_weight;

    for (id, weight) in items {
        random_value -= weight;
        if random_value <= 0.0 {
            return Some(*id);
        }
    }

    // Rounding can leave a tiny remainder
    items.last().map(|(id, _)| *id)
}
