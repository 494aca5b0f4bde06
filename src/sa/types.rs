//! Core trait for the annealing engine.

use crate::error::Result;
use rand::Rng;

/// Defines a problem the annealing engine can search.
///
/// The implementor supplies a starting state, the energy function, and the
/// set of neighbors reachable in one move. The engine handles temperature,
/// random neighbor choice, and Metropolis acceptance.
///
/// # Minimization
///
/// The engine minimizes energy. For maximization, negate the objective.
///
/// # Immutable states
///
/// Neighbors are returned as fresh values. The engine replaces its current
/// state with an accepted neighbor and never mutates a state in place.
pub trait SaProblem: Send + Sync {
    /// The state representation.
    type Solution: Clone + Send;

    /// Produces the starting state, or fails if none can be found.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<Self::Solution>;

    /// Energy of a state. Lower is better.
    fn energy(&self, solution: &Self::Solution) -> f64;

    /// All states reachable from `solution` in one move.
    ///
    /// An empty vector means the search is stuck and ends the run.
    fn neighbors(&self, solution: &Self::Solution) -> Vec<Self::Solution>;
}
