//! # Planner — expected-gain landscapes for aiming under motor noise
//!
//! Models a speeded reaching task in which a movement aimed at a point lands
//! at a Gaussian-perturbed endpoint, and the endpoint falls (or not) inside a
//! circular **target** zone and a circular **penalty** zone, each carrying a
//! payoff. For every candidate aim point on a dense 2D grid the model computes
//! the **expected gain**
//!
//! ```text
//! gain(x, y) = reward · P(land in target | aim=(x,y))
//!            + penalty · P(land in penalty | aim=(x,y))
//! ```
//!
//! Each probability is a deterministic Riemann sum: the isotropic Gaussian
//! density (variance `movement_variance`, mean at the aim point) is evaluated
//! at every grid cell, multiplied by the zone indicator, summed, and scaled by
//! the cell area. This is numerical integration, not Monte Carlo — accuracy is
//! governed by grid resolution and by domain truncation (density mass outside
//! the configured limits is silently dropped; see [`GainLandscapeModel`]).
//!
//! The full landscape is O(n⁴) for an n×n grid: each of the n² aim points
//! integrates over all n² cells. Rows of the output are independent, so the
//! landscape computation parallelizes across rows with rayon. Resolution
//! (`n_points`) is the single accuracy/cost knob.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`config`] | [`PlannerConfig`], [`Zone`], construction-time validation |
//! | [`grid`] | evenly spaced sampling of the rectangular domain |
//! | [`landscape`] | the model itself plus [`ExpectedGainGrid`] |
//! | [`simulation`] | seeded Monte Carlo cross-check of the grid integral |
//! | [`env_config`] | rayon thread-pool setup shared by the binaries |

pub mod config;
pub mod env_config;
pub mod grid;
pub mod landscape;
pub mod simulation;

pub use config::{ConfigError, PlannerConfig, Zone};
pub use grid::Grid;
pub use landscape::{ExpectedGainGrid, GainLandscapeModel};
