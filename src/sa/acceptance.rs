//! Metropolis acceptance criterion.

use rand::Rng;

/// Acceptance probability `exp(-delta / temperature)` for a non-improving move.
///
/// A non-positive temperature yields `0.0` for a strictly worse move and
/// `1.0` for a lateral one, so a frozen search never climbs.
pub fn metropolis_probability(delta: f64, temperature: f64) -> f64 {
    if temperature <= 0.0 {
        return if delta <= 0.0 { 1.0 } else { 0.0 };
    }
    (-delta / temperature).exp()
}

/// Returns `true` when `probability` beats a uniform draw from `[0, 1)`.
///
/// Any `probability >= 1`, including `+inf`, is always accepted. `NaN`
/// is never accepted.
pub fn accept<R: Rng>(probability: f64, rng: &mut R) -> bool {
    let draw: f64 = rng.random();
    probability > draw
}
