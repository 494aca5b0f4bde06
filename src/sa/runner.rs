//! Annealing execution loop.
//!
//! # Algorithm
//!
//! 1. Sample a starting state
//! 2. For each iteration `t`:
//!    a. Read the temperature; stop if it is zero
//!    b. Generate the neighbor set; stop if it is empty
//!    c. Pick one neighbor uniformly at random
//!    d. Accept it if it lowers the energy, otherwise with Metropolis probability
//! 3. Stop when the iteration budget is spent

use super::acceptance::{accept, metropolis_probability};
use super::config::AnnealConfig;
use super::types::SaProblem;
use crate::error::Result;
use crate::random::{create_rng, resolve_seed};
use rand::Rng;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// Iterations between two samples of the best-energy history.
const HISTORY_INTERVAL: usize = 100;

/// Why a run stopped. None of these is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The cooling schedule reached zero temperature.
    ScheduleExhausted,
    /// The current state has no neighbors.
    NoFeasibleMove,
    /// The iteration budget was spent.
    IterationLimit,
    /// The cancellation flag was raised.
    Cancelled,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Termination::ScheduleExhausted => "schedule_exhausted",
            Termination::NoFeasibleMove => "no_feasible_move",
            Termination::IterationLimit => "iteration_limit",
            Termination::Cancelled => "cancelled",
        };
        f.write_str(reason)
    }
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// State the search was in when it stopped.
    pub solution: S,

    /// Energy of `solution`.
    pub energy: f64,

    /// Lowest-energy state visited during the run.
    pub best: S,

    /// Energy of `best`.
    pub best_energy: f64,

    /// Number of completed iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature of the last iteration started.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Seed the run's RNG was created from.
    pub seed: u64,

    /// Best energy sampled at regular intervals.
    pub energy_history: Vec<f64>,
}

/// Executes the annealing loop.
pub struct SaRunner;

impl SaRunner {
    /// Runs an annealing search.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the problem
    /// cannot produce a starting state.
    pub fn run<P: SaProblem>(problem: &P, config: &AnnealConfig) -> Result<SaResult<P::Solution>> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs with an optional cancellation flag, polled once per iteration.
    pub fn run_with_cancel<P: SaProblem>(
        problem: &P,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution>> {
        config.validate()?;

        let seed = resolve_seed(config.seed);
        let mut rng = create_rng(seed);
        let schedule = config.schedule();

        debug!(
            event = "anneal_start",
            seed,
            initial_temperature = schedule.initial_temperature,
            cooling_rate = schedule.cooling_rate,
            iteration_limit = schedule.iteration_limit,
        );

        let mut current = problem.initial_solution(&mut rng)?;
        let mut current_energy = problem.energy(&current);
        let mut best = current.clone();
        let mut best_energy = current_energy;

        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut final_temperature = schedule.temperature(0);
        let mut termination = Termination::IterationLimit;

        let mut energy_history = vec![best_energy];

        for t in 0..schedule.iteration_limit {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    termination = Termination::Cancelled;
                    break;
                }
            }

            let temperature = schedule.temperature(t);
            final_temperature = temperature;
            if temperature == 0.0 {
                termination = Termination::ScheduleExhausted;
                break;
            }

            let mut candidates = problem.neighbors(&current);
            if candidates.is_empty() {
                termination = Termination::NoFeasibleMove;
                break;
            }

            let candidate = candidates.swap_remove(rng.random_range(0..candidates.len()));
            let candidate_energy = problem.energy(&candidate);
            let delta = candidate_energy - current_energy;

            // Lateral moves (delta == 0) get probability 1 and are always taken.
            let accepted = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                accept(metropolis_probability(delta, temperature), &mut rng)
            };

            if accepted {
                trace!(iteration = t, delta, temperature, "move accepted");
                current = candidate;
                current_energy = candidate_energy;
                accepted_moves += 1;

                if current_energy < best_energy {
                    best = current.clone();
                    best_energy = current_energy;
                }
            }

            iterations += 1;

            if iterations % HISTORY_INTERVAL == 0 {
                energy_history.push(best_energy);
            }
        }

        if energy_history.last() != Some(&best_energy) {
            energy_history.push(best_energy);
        }

        debug!(
            event = "anneal_end",
            termination = %termination,
            iterations,
            accepted_moves,
            improving_moves,
            energy = current_energy,
            best_energy,
        );

        Ok(SaResult {
            solution: current,
            energy: current_energy,
            best,
            best_energy,
            iterations,
            final_temperature,
            accepted_moves,
            improving_moves,
            termination,
            seed,
            energy_history,
        })
    }
}
