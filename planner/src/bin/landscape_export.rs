//! landscape-export: compute an expected-gain landscape and write it as JSON.
//!
//! Output: `{config, x_axis, y_axis, gain (row-major, y-major), peak}`,
//! suitable for downstream heat-map rendering.

use std::time::Instant;

use planner::{GainLandscapeModel, PlannerConfig};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut variance = 1.0f64;
    let mut n_points = 200usize;
    let mut reward: Option<f64> = None;
    let mut penalty: Option<f64> = None;
    let mut output = "outputs/landscape.json".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--variance" => {
                i += 1;
                variance = args[i].parse().expect("Invalid --variance value");
            }
            "--n-points" => {
                i += 1;
                n_points = args[i].parse().expect("Invalid --n-points value");
            }
            "--reward" => {
                i += 1;
                reward = Some(args[i].parse().expect("Invalid --reward value"));
            }
            "--penalty" => {
                i += 1;
                penalty = Some(args[i].parse().expect("Invalid --penalty value"));
            }
            "--output" => {
                i += 1;
                output = args[i].clone();
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

    let num_threads = planner::env_config::init_rayon_threads();
    println!("Rayon threads: {}", num_threads);

    let mut config = PlannerConfig::new(variance);
    config.n_points = n_points;
    let reward = reward.unwrap_or(config.target.value);
    let penalty = penalty.unwrap_or(config.penalty.value);

    let model = match GainLandscapeModel::new(config) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Computing {n}×{n} landscape (variance={v}, reward={r}, penalty={p})...",
        n = n_points,
        v = variance,
        r = reward,
        p = penalty
    );
    let t = Instant::now();
    let landscape = model.expected_gain_landscape(reward, penalty);
    let elapsed = t.elapsed().as_secs_f64();

    let (peak_row, peak_col, peak_gain) = landscape.peak();
    let peak_x = model.grid().x_axis()[peak_col];
    let peak_y = model.grid().y_axis()[peak_row];
    println!(
        "Done in {:.2}s. Peak gain {:.3} at ({:.3}, {:.3})",
        elapsed, peak_gain, peak_x, peak_y
    );

    let rows: Vec<&[f64]> = (0..n_points).map(|r| landscape.row(r)).collect();
    let json = serde_json::json!({
        "config": model.config(),
        "reward": reward,
        "penalty": penalty,
        "x_axis": model.grid().x_axis(),
        "y_axis": model.grid().y_axis(),
        "gain": rows,
        "peak": { "x": peak_x, "y": peak_y, "gain": peak_gain },
    });

    if let Some(parent) = std::path::Path::new(&output).parent() {
        std::fs::create_dir_all(parent).expect("Failed to create output directory");
    }
    let payload = serde_json::to_string(&json).expect("Failed to serialize output");
    std::fs::write(&output, payload).expect("Failed to write");
    println!("Wrote {}", output);
}

fn print_usage() {
    println!("Usage: landscape-export [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --variance <f64>   Movement noise variance (default 1.0)");
    println!("  --n-points <n>     Grid resolution per axis (default 200)");
    println!("  --reward <f64>     Reward payoff (default: target zone value)");
    println!("  --penalty <f64>    Penalty payoff (default: penalty zone value)");
    println!("  --output <path>    Output JSON path (default outputs/landscape.json)");
}
