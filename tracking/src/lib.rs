//! # Tracking — head-tracking data for the reaching experiment
//!
//! Loads the two per-subject recordings produced by the acquisition rig and
//! turns them into per-trial trajectories and a trial summary table:
//!
//! - `events.csv` — space-delimited event log (target onsets, outcomes),
//!   one timestamped named event per line.
//! - `head.csv` — head pose over time, one 4×4 affine matrix per sample in
//!   `Value.M11..Value.M44` columns.
//!
//! The pipeline ([`subject::Subject::load`]) segments the head stream into
//! trials (target onset to the next logged event), resamples each trajectory
//! onto a 10 ms grid with forward-fill, extracts static y-z-x Euler angles
//! from the pose matrices, centres them on the across-trial baseline, and
//! derives per-trial reaction times, movement endpoints, and outcomes.

pub mod euler;
pub mod events;
pub mod head;
pub mod subject;
pub mod timestamps;
pub mod trials;

pub use events::EventRecord;
pub use head::HeadSample;
pub use subject::Subject;
pub use trials::{Outcome, TargetSide, TrialInfo, TrialTrajectory};

use thiserror::Error;

/// Errors from loading or assembling the experiment data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: malformed timestamp '{value}'")]
    Timestamp { line: usize, value: String },
    #[error("line {line}: malformed number '{value}'")]
    Number { line: usize, value: String },
    #[error("line {line}: expected at least {expected} fields, got {got}")]
    FieldCount {
        line: usize,
        expected: usize,
        got: usize,
    },
    #[error("head data header is missing column '{0}'")]
    MissingColumn(String),
    #[error("event log contains no target-onset events")]
    NoTrials,
    #[error("expected {trials} outcome events, found {outcomes}")]
    OutcomeMismatch { trials: usize, outcomes: usize },
}
