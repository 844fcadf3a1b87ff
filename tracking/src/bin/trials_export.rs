//! trials-export: load a subject recording and write the trial table as JSON.
//!
//! Prints a per-outcome summary with mean reaction times, then writes
//! `{n_trials, trials}` for downstream analysis.

use std::path::PathBuf;

use tracking::{Outcome, Subject};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut data_dir: Option<PathBuf> = None;
    let mut output = "outputs/trials.json".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--output" => {
                i += 1;
                output = args[i].clone();
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other if data_dir.is_none() && !other.starts_with('-') => {
                data_dir = Some(PathBuf::from(other));
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let Some(data_dir) = data_dir else {
        print_usage();
        std::process::exit(1);
    };

    let subject = match Subject::load(&data_dir) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load {}: {}", data_dir.display(), e);
            std::process::exit(1);
        }
    };

    println!(
        "Loaded {}: {} events, {} head samples, {} trials",
        data_dir.display(),
        subject.events.len(),
        subject.head.len(),
        subject.trials.len()
    );

    for outcome in [
        Outcome::Hit,
        Outcome::Missed,
        Outcome::Penalty,
        Outcome::Neutral,
    ] {
        let rts: Vec<f64> = subject
            .trials
            .iter()
            .filter(|t| t.outcome == outcome)
            .map(|t| t.reaction_time_ms)
            .collect();
        if rts.is_empty() {
            continue;
        }
        let mean = rts.iter().sum::<f64>() / rts.len() as f64;
        println!(
            "  {:?}: {} trials, mean reaction time {:.1} ms",
            outcome,
            rts.len(),
            mean
        );
    }

    let json = serde_json::json!({
        "n_trials": subject.trials.len(),
        "trials": subject.trials,
    });
    if let Some(parent) = std::path::Path::new(&output).parent() {
        std::fs::create_dir_all(parent).expect("Failed to create output directory");
    }
    let payload = serde_json::to_string(&json).expect("Failed to serialize output");
    std::fs::write(&output, payload).expect("Failed to write");
    println!("Wrote {}", output);
}

fn print_usage() {
    println!("Usage: trials-export <data_dir> [--output <path>]");
    println!();
    println!("Expects <data_dir>/events.csv and <data_dir>/head.csv.");
}
