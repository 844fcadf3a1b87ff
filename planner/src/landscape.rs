//! The expected-gain landscape model: grid integration of Gaussian endpoint
//! noise against the target and penalty zones.
//!
//! `probability_of_landing` is the single numerical primitive: a Riemann sum
//! of `density × indicator × cell_area` over every grid cell. The landscape
//! repeats it twice (target, penalty) per candidate aim point, making the full
//! sweep O(n⁴). Rows of the output are independent, so the sweep runs
//! row-parallel under rayon; per-cell summation order within a row is fixed,
//! keeping results reproducible run to run.
//!
//! Known approximation artifact, preserved deliberately: only density mass
//! inside the configured domain is counted. With variance large relative to
//! the domain, probabilities undercount and never reach 1 even when a zone
//! covers the whole domain.

use rayon::prelude::*;

use crate::config::{ConfigError, PlannerConfig};
use crate::grid::Grid;

/// Isotropic 2D Gaussian density with the given variance, mean at `centre`.
///
/// `exp(-((x-cx)² + (y-cy)²) / (2·var)) / (2·π·var)` — shared variance on
/// both axes, zero cross-covariance.
#[inline(always)]
pub fn gauss2d(x: f64, y: f64, var: f64, centre: (f64, f64)) -> f64 {
    let dx = x - centre.0;
    let dy = y - centre.1;
    (-(dx * dx + dy * dy) / (2.0 * var)).exp() / (2.0 * std::f64::consts::PI * var)
}

/// Expected-gain values over the full grid, row-major, `[row=y-index,
/// col=x-index]`. Freshly allocated per landscape computation, read-only
/// afterward.
#[derive(Debug, Clone)]
pub struct ExpectedGainGrid {
    n: usize,
    data: Vec<f64>,
}

impl ExpectedGainGrid {
    /// `(rows, cols)` — always `(n_points, n_points)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    /// Gain for aiming at `(x_axis[col], y_axis[row])`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n + col]
    }

    /// All gains for one y index, ordered along the x axis.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.n..(row + 1) * self.n]
    }

    /// Flat row-major view of the whole landscape.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Location and value of the maximum gain: the optimal aim point at this
    /// resolution. First occurrence wins on exact ties.
    pub fn peak(&self) -> (usize, usize, f64) {
        let mut best = (0, 0, f64::NEG_INFINITY);
        for (i, &g) in self.data.iter().enumerate() {
            if g > best.2 {
                best = (i / self.n, i % self.n, g);
            }
        }
        best
    }
}

/// The model: validated configuration plus the precomputed grid.
///
/// Stateless after construction — every operation is a pure function of the
/// configuration and its arguments, with no interior mutability and no
/// caching across calls.
#[derive(Debug, Clone)]
pub struct GainLandscapeModel {
    config: PlannerConfig,
    grid: Grid,
}

impl GainLandscapeModel {
    /// Validate the configuration and precompute the grid axes and cell area.
    pub fn new(config: PlannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::from_config(&config);
        Ok(Self { config, grid })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Probability that a movement aimed at `aim` lands inside the circle of
    /// `zone_radius` around `zone_center`, under the model's noise variance.
    ///
    /// Riemann sum over the grid: Gaussian density at each cell centre times
    /// the strict zone indicator, summed and scaled by the cell area. Rows
    /// whose y coordinate cannot intersect the zone are skipped — the
    /// indicator is exactly zero there, so the skip does not change the sum.
    pub fn probability_of_landing(
        &self,
        aim: (f64, f64),
        zone_center: (f64, f64),
        zone_radius: f64,
    ) -> f64 {
        let var = self.config.movement_variance;
        let r2 = zone_radius * zone_radius;
        let mut sum = 0.0;
        for &y in self.grid.y_axis() {
            let zdy = y - zone_center.1;
            if zdy * zdy >= r2 {
                continue;
            }
            for &x in self.grid.x_axis() {
                let zdx = x - zone_center.0;
                if zdx * zdx + zdy * zdy < r2 {
                    sum += gauss2d(x, y, var, aim);
                }
            }
        }
        sum * self.grid.cell_area()
    }

    /// Expected gain for a single aim point:
    /// `reward · P(target | aim) + penalty · P(penalty | aim)`.
    pub fn expected_gain_at(&self, aim: (f64, f64), reward: f64, penalty: f64) -> f64 {
        let p_target = self.probability_of_landing(
            aim,
            self.config.target.center,
            self.config.target.radius,
        );
        let p_penalty = self.probability_of_landing(
            aim,
            self.config.penalty.center,
            self.config.penalty.radius,
        );
        reward * p_target + penalty * p_penalty
    }

    /// Expected gain at every grid point, treated as a candidate aim location.
    ///
    /// O(n⁴): each of the n² aim points integrates over all n² cells. Rows
    /// are computed in parallel; within a row the double sum runs in the
    /// fixed y-major, x-minor cell order.
    pub fn expected_gain_landscape(&self, reward: f64, penalty: f64) -> ExpectedGainGrid {
        let n = self.grid.len();
        let mut data = vec![0.0f64; n * n];
        let y_axis = self.grid.y_axis();
        let x_axis = self.grid.x_axis();

        data.par_chunks_mut(n)
            .zip(y_axis.par_iter())
            .for_each(|(row, &y)| {
                for (col, &x) in x_axis.iter().enumerate() {
                    row[col] = self.expected_gain_at((x, y), reward, penalty);
                }
            });

        ExpectedGainGrid { n, data }
    }
}
