//! Knapsack annealing entry points.

use super::instance::KnapsackInstance;
use super::sampler::sample_feasible;
use super::selection::Selection;
use crate::error::{KnapsackError, Result};
use crate::random::resolve_seed;
use crate::sa::{AnnealConfig, SaProblem, SaResult, SaRunner};
use rand::Rng;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a knapsack annealing run.
pub type KnapsackResult = SaResult<Selection>;

/// The 0/1 knapsack as an annealing problem.
///
/// States are feasible selections: the start is sampled feasible and every
/// neighbor passes the capacity filter, so the penalty term never fires
/// during the search.
#[derive(Debug, Clone, Copy)]
pub struct KnapsackProblem<'a> {
    instance: &'a KnapsackInstance,
    init_max_attempts: usize,
}

impl<'a> KnapsackProblem<'a> {
    pub fn new(instance: &'a KnapsackInstance, init_max_attempts: usize) -> Self {
        Self {
            instance,
            init_max_attempts,
        }
    }

    pub fn instance(&self) -> &'a KnapsackInstance {
        self.instance
    }
}

impl SaProblem for KnapsackProblem<'_> {
    type Solution = Selection;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<Selection> {
        sample_feasible(
            self.instance.weights(),
            self.instance.capacity(),
            self.init_max_attempts,
            rng,
        )
    }

    fn energy(&self, selection: &Selection) -> f64 {
        self.instance.energy(selection)
    }

    fn neighbors(&self, selection: &Selection) -> Vec<Selection> {
        self.instance.neighbors(selection)
    }
}

/// Anneals a selection of items maximizing value within `capacity`.
///
/// `values` and `weights` are index-aligned. The returned
/// [`solution`](SaResult::solution) is always feasible.
///
/// # Errors
///
/// - [`KnapsackError::InvalidInput`] for malformed item data
/// - [`KnapsackError::InvalidConfig`] for out-of-range parameters
/// - [`KnapsackError::InfeasibleInit`] if no feasible start was drawn
///
/// # Examples
///
/// ```
/// use u_knapsack::{optimize, sa::AnnealConfig};
///
/// let values = [150.0, 80.0, 20.0, 40.0, 50.0, 20.0];
/// let weights = [7.0, 30.0, 18.0, 60.0, 12.0, 20.0];
/// let result = optimize(&values, &weights, 50.0, &AnnealConfig::default().with_seed(1)).unwrap();
///
/// let weight: f64 = result
///     .solution
///     .selected_indices()
///     .map(|i| weights[i])
///     .sum();
/// assert!(weight <= 50.0);
/// ```
pub fn optimize(
    values: &[f64],
    weights: &[f64],
    capacity: f64,
    config: &AnnealConfig,
) -> Result<KnapsackResult> {
    let instance = KnapsackInstance::new(values.to_vec(), weights.to_vec(), capacity)?;
    optimize_instance(&instance, config)
}

/// Anneals over an already validated instance.
pub fn optimize_instance(
    instance: &KnapsackInstance,
    config: &AnnealConfig,
) -> Result<KnapsackResult> {
    let problem = KnapsackProblem::new(instance, config.init_max_attempts);
    SaRunner::run(&problem, config)
}

/// Runs `restarts` independent annealing runs and keeps the lowest final energy.
///
/// Run `k` is seeded with `base + k`, where `base` is the configured seed
/// or a fresh one. Runs share the instance read-only; with the `parallel`
/// feature they execute on the rayon pool.
///
/// Runs whose initial sampling fails are skipped. The call fails only if
/// every run fails, returning the first run's error.
///
/// # Errors
///
/// Returns [`KnapsackError::InvalidInput`] if `restarts` is zero, and
/// otherwise the same errors as [`optimize_instance`].
pub fn optimize_multi_start(
    instance: &KnapsackInstance,
    config: &AnnealConfig,
    restarts: usize,
) -> Result<KnapsackResult> {
    if restarts == 0 {
        return Err(KnapsackError::InvalidInput("restarts must be at least 1".into()));
    }
    config.validate()?;

    let base = resolve_seed(config.seed);
    let run = |k: usize| {
        let config = config.clone().with_seed(base.wrapping_add(k as u64));
        optimize_instance(instance, &config)
    };

    #[cfg(feature = "parallel")]
    let outcomes: Vec<Result<KnapsackResult>> =
        (0..restarts).into_par_iter().map(run).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<Result<KnapsackResult>> = (0..restarts).map(run).collect();

    let mut best: Option<KnapsackResult> = None;
    let mut first_error = None;
    for outcome in outcomes {
        match outcome {
            Ok(result) => match &best {
                Some(current) if current.energy <= result.energy => {}
                _ => best = Some(result),
            },
            Err(err) => {
                first_error.get_or_insert(err);
            }
        }
    }

    let Some(result) = best else {
        return Err(first_error.unwrap_or_else(|| {
            KnapsackError::InvalidInput("restarts must be at least 1".into())
        }));
    };

    debug!(
        event = "multi_start_end",
        restarts,
        energy = result.energy,
        seed = result.seed,
    );
    Ok(result)
}
