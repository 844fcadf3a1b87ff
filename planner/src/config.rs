//! Model configuration: noise variance, domain limits, zone geometry, payoffs.
//!
//! Defaults reproduce the experiment layout: two radius-5 circles centred at
//! (±2.5, 0) on a (-10, 10)² domain, payoffs ±100. All validation happens at
//! model construction; after that every operation is pure arithmetic with no
//! failure path.

use serde::Serialize;
use thiserror::Error;

/// Configuration rejected at [`GainLandscapeModel::new`](crate::GainLandscapeModel::new).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("movement variance must be positive, got {0}")]
    NonPositiveVariance(f64),
    #[error("grid needs at least 2 points per axis, got {0}")]
    DegenerateGrid(usize),
    #[error("{axis} limits are empty: min {min} must be below max {max}")]
    EmptyLimits {
        axis: &'static str,
        min: f64,
        max: f64,
    },
}

/// Circular region of the domain carrying a payoff.
///
/// Membership is strict: a point belongs to the zone iff its squared distance
/// from the centre is less than `radius²` (boundary points are outside).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Zone {
    pub center: (f64, f64),
    pub radius: f64,
    /// Signed payoff for landing in this zone.
    pub value: f64,
}

impl Zone {
    pub fn new(center: (f64, f64), radius: f64, value: f64) -> Self {
        Self {
            center,
            radius,
            value,
        }
    }

    /// Strict membership test: `(x-cx)² + (y-cy)² < r²`.
    #[inline(always)]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let dx = x - self.center.0;
        let dy = y - self.center.1;
        dx * dx + dy * dy < self.radius * self.radius
    }
}

/// Full model configuration. Plain fields; mutate before handing it to
/// [`GainLandscapeModel::new`](crate::GainLandscapeModel::new), immutable after.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannerConfig {
    /// Variance of the isotropic aiming-noise Gaussian (shared by both axes,
    /// zero cross-covariance). Must be positive.
    pub movement_variance: f64,
    pub x_limits: (f64, f64),
    pub y_limits: (f64, f64),
    /// Samples per axis; the landscape is `n_points × n_points`.
    pub n_points: usize,
    pub target: Zone,
    pub penalty: Zone,
}

impl PlannerConfig {
    /// Experiment-default geometry with the given noise variance.
    pub fn new(movement_variance: f64) -> Self {
        Self {
            movement_variance,
            x_limits: (-10.0, 10.0),
            y_limits: (-10.0, 10.0),
            n_points: 1000,
            target: Zone::new((2.5, 0.0), 5.0, 100.0),
            penalty: Zone::new((-2.5, 0.0), 5.0, -100.0),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.movement_variance <= 0.0 {
            return Err(ConfigError::NonPositiveVariance(self.movement_variance));
        }
        if self.n_points < 2 {
            return Err(ConfigError::DegenerateGrid(self.n_points));
        }
        if self.x_limits.0 >= self.x_limits.1 {
            return Err(ConfigError::EmptyLimits {
                axis: "x",
                min: self.x_limits.0,
                max: self.x_limits.1,
            });
        }
        if self.y_limits.0 >= self.y_limits.1 {
            return Err(ConfigError::EmptyLimits {
                axis: "y",
                min: self.y_limits.0,
                max: self.y_limits.1,
            });
        }
        Ok(())
    }
}
