//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. At each iteration one neighbor is drawn from the
//! current state's neighborhood; improvements are always taken and
//! worsening moves are taken with probability `exp(-delta / T)`, where the
//! temperature `T` decays exponentially with the iteration index.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod acceptance;
mod config;
mod runner;
mod types;

pub use acceptance::{accept, metropolis_probability};
pub use config::{AnnealConfig, CoolingSchedule};
pub use runner::{SaResult, SaRunner, Termination};
pub use types::SaProblem;
