//! 0/1 knapsack by simulated annealing.
//!
//! Picks a subset of items maximizing total value while keeping total
//! weight within a capacity. The search state is a binary [`Selection`];
//! its energy is the negated value plus a quadratic penalty on excess
//! weight, and moves flip one item at a time, keeping only flips that stay
//! within capacity.
//!
//! This is a heuristic: results are near-optimal, not guaranteed optimal.

pub mod energy;
mod instance;
mod neighbor;
mod sampler;
mod selection;
mod solve;

pub use instance::KnapsackInstance;
pub use neighbor::feasible_neighbors;
pub use sampler::sample_feasible;
pub use selection::Selection;
pub use solve::{
    optimize, optimize_instance, optimize_multi_start, KnapsackProblem, KnapsackResult,
};
