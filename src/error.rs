//! Error types for knapsack annealing.

use thiserror::Error;

/// Errors surfaced by the annealing engine and the knapsack model.
///
/// Termination of the search loop is never an error: every stopping
/// condition yields a usable result. Only invalid input and a failed
/// initial draw abort a run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnapsackError {
    /// Caller-supplied data violates the model contract.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Annealing parameters are out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No random draw fit within the capacity before the attempt budget ran out.
    #[error("no feasible initial selection found in {attempts} attempts (capacity {capacity})")]
    InfeasibleInit {
        /// Number of independent draws made.
        attempts: usize,
        /// Capacity the draws were checked against.
        capacity: f64,
    },
}

/// Result type alias for knapsack operations.
pub type Result<T> = std::result::Result<T, KnapsackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infeasible_init_message() {
        let err = KnapsackError::InfeasibleInit {
            attempts: 20,
            capacity: 5.0,
        };
        assert_eq!(
            err.to_string(),
            "no feasible initial selection found in 20 attempts (capacity 5)"
        );
    }
}
