//! Inverse-CDF sampling over raw weights.

use rand::Rng;

/// Draw an index from `weights` with probability proportional to each value.
///
/// Walks the cumulative sum in input order, so a seeded RNG yields
/// reproducible draws. Weights must be non-negative; a weight of zero gets
/// zero probability, any positive weight (however small) gets a nonzero
/// one. Returns `None` when the total weight is zero or not finite.
pub fn sample_index<R: Rng>(rng: &mut R, weights: &[f64]) -> Option<usize> {
    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return None;
    }

    let draw = rng.gen_range(0.0..total);
    let mut cumulative = 0.0;
    for (index, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if draw < cumulative {
            return Some(index);
        }
    }
    // Floating-point accumulation can leave `draw` just past the final sum;
    // land on the last positive weight, never a zero one.
    weights.iter().rposition(|w| *w > 0.0)
}
