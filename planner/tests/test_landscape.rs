//! Numerical behavior of the expected-gain landscape: variance monotonicity,
//! mirror symmetry, the zero-variance limit, concrete payoff scenarios, and a
//! Monte Carlo cross-check of the grid integral.

use planner::simulation::simulate_reaches;
use planner::{ConfigError, GainLandscapeModel, PlannerConfig};

fn model_with(variance: f64, n_points: usize) -> GainLandscapeModel {
    let mut cfg = PlannerConfig::new(variance);
    cfg.n_points = n_points;
    GainLandscapeModel::new(cfg).unwrap()
}

#[test]
fn degenerate_grid_is_rejected() {
    let mut cfg = PlannerConfig::new(1.0);
    cfg.n_points = 1;
    assert_eq!(
        GainLandscapeModel::new(cfg).unwrap_err(),
        ConfigError::DegenerateGrid(1)
    );
}

#[test]
fn in_zone_probability_decreases_with_variance() {
    // aiming dead centre: once sigma is non-trivial relative to the radius,
    // more noise can only push mass out of the zone
    let variances = [0.5, 1.0, 2.0, 4.0, 8.0];
    let mut previous = f64::INFINITY;
    for &var in &variances {
        let model = model_with(var, 101);
        let p = model.probability_of_landing((2.5, 0.0), (2.5, 0.0), 5.0);
        assert!(
            p < previous,
            "variance {var}: p={p} did not decrease from {previous}"
        );
        previous = p;
    }
}

#[test]
fn landscape_is_point_symmetric_for_mirrored_geometry() {
    // default geometry is its own mirror image (target at (2.5,0), penalty at
    // (-2.5,0), equal radii); with payoffs (G, -G) the landscape must satisfy
    // gain(x, y) == -gain(-x, -y)
    let model = model_with(2.0, 41);
    let landscape = model.expected_gain_landscape(100.0, -100.0);
    let n = 41;
    for row in 0..n {
        for col in 0..n {
            let g = landscape.get(row, col);
            let mirrored = landscape.get(n - 1 - row, n - 1 - col);
            let tol = 1e-9 * g.abs().max(1.0);
            assert!(
                (g + mirrored).abs() < tol,
                "asymmetry at ({row},{col}): {g} vs {mirrored}"
            );
        }
    }
}

#[test]
fn zero_variance_limit_approaches_the_indicator() {
    // sigma = 0.1 with grid spacing 0.05: the Riemann sum still converges,
    // and essentially all mass lands within a few spacings of the aim point
    let model = model_with(0.01, 401);
    let p_inside = model.probability_of_landing((2.5, 0.0), (2.5, 0.0), 5.0);
    assert!((p_inside - 1.0).abs() < 1e-3, "inside: p={p_inside}");

    let p_outside = model.probability_of_landing((9.0, 9.0), (2.5, 0.0), 5.0);
    assert!(p_outside < 1e-3, "outside: p={p_outside}");
}

#[test]
fn default_geometry_scenario() {
    // n=200, variance 1, default zones. The circles overlap
    // (centres ±2.5, radius 5), so aiming at the target centre still carries
    // real penalty mass; the gain is strongly positive but below +100.
    let model = model_with(1.0, 200);

    let at_target = model.expected_gain_at((2.5, 0.0), 100.0, -100.0);
    let at_penalty = model.expected_gain_at((-2.5, 0.0), 100.0, -100.0);
    let at_origin = model.expected_gain_at((0.0, 0.0), 100.0, -100.0);

    assert!(at_target > 25.0 && at_target < 100.0, "at_target={at_target}");
    assert!(
        at_penalty < -25.0 && at_penalty > -100.0,
        "at_penalty={at_penalty}"
    );
    // mirrored aim points carry mirrored gains
    assert!((at_target + at_penalty).abs() < 1e-9 * at_target.abs());
    // the origin sits between the two zones' payoffs, near zero by symmetry
    assert!(at_origin > -100.0 && at_origin < 100.0);
    assert!(at_origin.abs() < 1e-6, "at_origin={at_origin}");
    assert!(at_target > at_origin && at_origin > at_penalty);
}

#[test]
fn separated_zones_reach_the_full_payoffs() {
    // with non-overlapping zones and noise small relative to the radius, the
    // gain at each zone centre approaches that zone's payoff
    let mut cfg = PlannerConfig::new(0.25);
    cfg.n_points = 200;
    cfg.target.radius = 2.0;
    cfg.penalty.radius = 2.0;
    let model = GainLandscapeModel::new(cfg).unwrap();

    let at_target = model.expected_gain_at((2.5, 0.0), 100.0, -100.0);
    let at_penalty = model.expected_gain_at((-2.5, 0.0), 100.0, -100.0);
    assert!(at_target > 95.0 && at_target < 100.5, "at_target={at_target}");
    assert!(
        at_penalty < -95.0 && at_penalty > -100.5,
        "at_penalty={at_penalty}"
    );
}

#[test]
fn landscape_rows_match_pointwise_evaluation() {
    // the parallel sweep must agree with direct evaluation at every index
    let model = model_with(3.0, 31);
    let landscape = model.expected_gain_landscape(50.0, -150.0);
    assert_eq!(landscape.shape(), (31, 31));
    for &(row, col) in &[(0, 0), (0, 30), (30, 0), (15, 15), (7, 22)] {
        let x = model.grid().x_axis()[col];
        let y = model.grid().y_axis()[row];
        let direct = model.expected_gain_at((x, y), 50.0, -150.0);
        assert_eq!(landscape.get(row, col), direct);
    }
}

#[test]
fn monte_carlo_agrees_with_grid_integral() {
    let model = model_with(2.0, 201);
    let aim = (1.0, 0.5);
    let sim = simulate_reaches(model.config(), aim, 200_000, 12345);

    let p_target = model.probability_of_landing(
        aim,
        model.config().target.center,
        model.config().target.radius,
    );
    let p_penalty = model.probability_of_landing(
        aim,
        model.config().penalty.center,
        model.config().penalty.radius,
    );

    assert!(
        (sim.target_rate() - p_target).abs() < 0.01,
        "target: mc={} grid={}",
        sim.target_rate(),
        p_target
    );
    assert!(
        (sim.penalty_rate() - p_penalty).abs() < 0.01,
        "penalty: mc={} grid={}",
        sim.penalty_rate(),
        p_penalty
    );

    let analytic_gain = model.expected_gain_at(aim, 100.0, -100.0);
    assert!(
        (sim.mean_gain - analytic_gain).abs() < 1.5,
        "gain: mc={} grid={}",
        sim.mean_gain,
        analytic_gain
    );
}
