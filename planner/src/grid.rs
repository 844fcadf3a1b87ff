//! Evenly spaced 2D sampling of the rectangular domain.
//!
//! The grid stores the two coordinate axes and the constant per-cell area.
//! The dense meshgrid is never materialized: every consumer walks the axes in
//! y-major, x-minor order, which visits exactly the same (x, y) pairs.

use crate::config::PlannerConfig;

/// Immutable sampling of `x_limits × y_limits` with `n_points` samples per
/// axis, endpoints included. Spacing is uniform along each axis, so the cell
/// area `dx · dy` is constant across the grid.
#[derive(Debug, Clone)]
pub struct Grid {
    x_axis: Vec<f64>,
    y_axis: Vec<f64>,
    cell_area: f64,
}

/// `n` evenly spaced samples covering `[min, max]`, both endpoints included.
/// Caller guarantees `n >= 2` and `min < max` (validated configuration).
fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    let step = (max - min) / (n - 1) as f64;
    (0..n).map(|i| min + i as f64 * step).collect()
}

impl Grid {
    pub(crate) fn from_config(config: &PlannerConfig) -> Self {
        let x_axis = linspace(config.x_limits.0, config.x_limits.1, config.n_points);
        let y_axis = linspace(config.y_limits.0, config.y_limits.1, config.n_points);
        let cell_area = (x_axis[1] - x_axis[0]) * (y_axis[1] - y_axis[0]);
        Self {
            x_axis,
            y_axis,
            cell_area,
        }
    }

    pub fn x_axis(&self) -> &[f64] {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &[f64] {
        &self.y_axis
    }

    /// Samples per axis.
    pub fn len(&self) -> usize {
        self.x_axis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_axis.is_empty()
    }

    /// Constant area of one grid cell, `dx · dy`.
    pub fn cell_area(&self) -> f64 {
        self.cell_area
    }
}
