//! Monte Carlo cross-check of the grid integral.
//!
//! Samples endpoints `aim + σ·N(0, I)` from a seeded RNG and counts zone
//! membership. The empirical hit rates converge on the analytic
//! [`probability_of_landing`](crate::GainLandscapeModel::probability_of_landing)
//! values (up to grid resolution and domain truncation, which the sampler does
//! not share: samples outside the domain still count toward zone membership).
//! Deterministic for a fixed seed and sample count.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::config::PlannerConfig;

/// Empirical outcome counts for `n_samples` simulated reaches at one aim point.
pub struct SimulationResult {
    pub n_samples: u64,
    /// Endpoints inside the target zone (overlapping zones both count).
    pub target_hits: u64,
    /// Endpoints inside the penalty zone.
    pub penalty_hits: u64,
    /// Endpoints in neither zone.
    pub misses: u64,
    /// Mean payoff per reach, summing both zones' values where applicable.
    pub mean_gain: f64,
}

impl SimulationResult {
    pub fn target_rate(&self) -> f64 {
        self.target_hits as f64 / self.n_samples as f64
    }

    pub fn penalty_rate(&self) -> f64 {
        self.penalty_hits as f64 / self.n_samples as f64
    }
}

/// Simulate `n_samples` noisy reaches aimed at `aim` under the configured
/// variance and zone geometry.
pub fn simulate_reaches(
    config: &PlannerConfig,
    aim: (f64, f64),
    n_samples: u64,
    seed: u64,
) -> SimulationResult {
    let mut rng = SmallRng::seed_from_u64(seed);
    let sigma = config.movement_variance.sqrt();

    let mut target_hits = 0u64;
    let mut penalty_hits = 0u64;
    let mut misses = 0u64;
    let mut total_gain = 0.0f64;

    for _ in 0..n_samples {
        let nx: f64 = rng.sample(StandardNormal);
        let ny: f64 = rng.sample(StandardNormal);
        let x = aim.0 + sigma * nx;
        let y = aim.1 + sigma * ny;

        let in_target = config.target.contains(x, y);
        let in_penalty = config.penalty.contains(x, y);
        if in_target {
            target_hits += 1;
            total_gain += config.target.value;
        }
        if in_penalty {
            penalty_hits += 1;
            total_gain += config.penalty.value;
        }
        if !in_target && !in_penalty {
            misses += 1;
        }
    }

    SimulationResult {
        n_samples,
        target_hits,
        penalty_hits,
        misses,
        mean_gain: total_gain / n_samples as f64,
    }
}
