//! Penalized knapsack energy.
//!
//! `energy = -total_value + max(0, total_weight - capacity)^2`
//!
//! Value is negated so that minimizing energy maximizes value. Overweight
//! selections are not forbidden here, only surcharged quadratically.

use super::selection::Selection;

/// Sum of `values[i]` over included items.
pub fn total_value(selection: &Selection, values: &[f64]) -> f64 {
    weighted_sum(selection, values)
}

/// Sum of `weights[i]` over included items.
pub fn total_weight(selection: &Selection, weights: &[f64]) -> f64 {
    weighted_sum(selection, weights)
}

/// Quadratic surcharge on weight above `capacity`.
pub fn penalty(total_weight: f64, capacity: f64) -> f64 {
    let excess = (total_weight - capacity).max(0.0);
    excess * excess
}

/// Energy of a selection. Pure; infeasible selections are allowed.
pub fn energy(selection: &Selection, values: &[f64], weights: &[f64], capacity: f64) -> f64 {
    -total_value(selection, values) + penalty(total_weight(selection, weights), capacity)
}

fn weighted_sum(selection: &Selection, coefficients: &[f64]) -> f64 {
    debug_assert_eq!(selection.len(), coefficients.len());
    selection
        .iter()
        .zip(coefficients)
        .filter_map(|(on, &c)| on.then_some(c))
        .sum()
}
