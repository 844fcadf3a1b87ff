//! variance-sweep: expected-gain summaries across a range of noise variances.
//!
//! For each variance, computes the full landscape at the sweep resolution and
//! reports the optimal aim point, its gain, and the gains for aiming straight
//! at each zone centre. Shows how growing motor noise pushes the optimal aim
//! away from the penalty zone and shrinks the attainable gain.

use std::time::Instant;

use planner::{GainLandscapeModel, PlannerConfig};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut variances_csv = "0.25,0.5,1,2,4,8".to_string();
    let mut n_points = 101usize;
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--variances" => {
                i += 1;
                variances_csv = args[i].clone();
            }
            "--n-points" => {
                i += 1;
                n_points = args[i].parse().expect("Invalid --n-points value");
            }
            "--output" => {
                i += 1;
                output = Some(args[i].clone());
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let variances: Vec<f64> = variances_csv
        .split(',')
        .map(|s| s.trim().parse().expect("Invalid variance in --variances"))
        .collect();

    let num_threads = planner::env_config::init_rayon_threads();
    println!("Rayon threads: {}", num_threads);
    println!(
        "{:>9} {:>10} {:>9} {:>9} {:>12} {:>13} {:>8}",
        "variance", "peak_gain", "peak_x", "peak_y", "gain@target", "gain@penalty", "time"
    );

    let mut rows = Vec::new();
    for &variance in &variances {
        let mut config = PlannerConfig::new(variance);
        config.n_points = n_points;
        let reward = config.target.value;
        let penalty = config.penalty.value;

        let model = match GainLandscapeModel::new(config) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("Invalid configuration for variance {}: {}", variance, e);
                std::process::exit(1);
            }
        };

        let t = Instant::now();
        let landscape = model.expected_gain_landscape(reward, penalty);
        let elapsed = t.elapsed().as_secs_f64();

        let (peak_row, peak_col, peak_gain) = landscape.peak();
        let peak_x = model.grid().x_axis()[peak_col];
        let peak_y = model.grid().y_axis()[peak_row];
        let gain_at_target = model.expected_gain_at(model.config().target.center, reward, penalty);
        let gain_at_penalty =
            model.expected_gain_at(model.config().penalty.center, reward, penalty);

        println!(
            "{:>9.3} {:>10.3} {:>9.3} {:>9.3} {:>12.3} {:>13.3} {:>7.2}s",
            variance, peak_gain, peak_x, peak_y, gain_at_target, gain_at_penalty, elapsed
        );

        rows.push(serde_json::json!({
            "variance": variance,
            "peak": { "x": peak_x, "y": peak_y, "gain": peak_gain },
            "gain_at_target_center": gain_at_target,
            "gain_at_penalty_center": gain_at_penalty,
        }));
    }

    if let Some(path) = output {
        let json = serde_json::json!({ "n_points": n_points, "sweep": rows });
        if let Some(parent) = std::path::Path::new(&path).parent() {
            std::fs::create_dir_all(parent).expect("Failed to create output directory");
        }
        let payload = serde_json::to_string(&json).expect("Failed to serialize output");
        std::fs::write(&path, payload).expect("Failed to write");
        println!("Wrote {}", path);
    }
}

fn print_usage() {
    println!("Usage: variance-sweep [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --variances <csv>  Comma-separated variances (default 0.25,0.5,1,2,4,8)");
    println!("  --n-points <n>     Grid resolution per axis (default 101)");
    println!("  --output <path>    Optional JSON output path");
}
