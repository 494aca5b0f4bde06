//! Simulated annealing for the 0/1 knapsack problem.
//!
//! Given index-aligned item values and weights and a capacity, searches for
//! a selection of items with high total value whose total weight fits:
//!
//! - **Energy**: `-total_value + max(0, total_weight - capacity)^2`
//! - **Moves**: single-item flips, filtered to those that stay feasible
//! - **Cooling**: `T(t) = T_0 * exp(-rate * t)`, cut to zero at the iteration cap
//! - **Acceptance**: improvements always, other moves with probability `exp(-delta / T)`
//!
//! The generic engine lives in [`sa`]; the knapsack model in [`knapsack`].
//! All randomness comes from a single seedable RNG per run.
//!
//! # Examples
//!
//! ```
//! use u_knapsack::{optimize, sa::AnnealConfig};
//!
//! let values = [150.0, 80.0, 20.0, 40.0, 50.0, 20.0];
//! let weights = [7.0, 30.0, 18.0, 60.0, 12.0, 20.0];
//! let config = AnnealConfig::default().with_seed(42);
//!
//! let result = optimize(&values, &weights, 50.0, &config).unwrap();
//! assert_eq!(result.solution.len(), 6);
//! assert!(result.energy <= 0.0);
//! ```

pub mod error;
pub mod knapsack;
pub mod random;
pub mod sa;

pub use error::{KnapsackError, Result};
pub use knapsack::{optimize, optimize_multi_start, KnapsackInstance, Selection};
