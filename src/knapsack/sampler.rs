//! Bounded-retry random sampling of a feasible starting selection.

use super::energy::total_weight;
use super::selection::Selection;
use crate::error::{KnapsackError, Result};
use rand::Rng;
use tracing::warn;

/// Draws uniform random selections until one fits within `capacity`.
///
/// Each draw includes every item independently with probability 1/2.
/// Draws are independent of one another.
///
/// # Errors
///
/// Returns [`KnapsackError::InfeasibleInit`] if none of `max_attempts`
/// draws is feasible.
pub fn sample_feasible<R: Rng>(
    weights: &[f64],
    capacity: f64,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Selection> {
    for _ in 0..max_attempts {
        let candidate: Selection = (0..weights.len()).map(|_| rng.random_bool(0.5)).collect();
        if total_weight(&candidate, weights) <= capacity {
            return Ok(candidate);
        }
    }

    warn!(
        attempts = max_attempts,
        capacity,
        items = weights.len(),
        "no feasible initial selection"
    );
    Err(KnapsackError::InfeasibleInit {
        attempts: max_attempts,
        capacity,
    })
}
