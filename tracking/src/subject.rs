//! Whole-subject loading: one recording directory in, trajectories and the
//! trial table out.

use std::path::Path;

use crate::events::{load_event_data, EventRecord};
use crate::head::{load_head_data, HeadSample};
use crate::trials::{build_trial_info, segment_trials, TrialInfo, TrialTrajectory};
use crate::DataError;

/// A fully loaded subject recording.
#[derive(Debug)]
pub struct Subject {
    pub events: Vec<EventRecord>,
    pub head: Vec<HeadSample>,
    pub trajectories: Vec<TrialTrajectory>,
    pub trials: Vec<TrialInfo>,
}

impl Subject {
    /// Load `events.csv` and `head.csv` from a subject directory and run the
    /// full segmentation pipeline.
    pub fn load(data_dir: &Path) -> Result<Self, DataError> {
        let events = load_event_data(&data_dir.join("events.csv"))?;
        let head = load_head_data(&data_dir.join("head.csv"))?;
        let trajectories = segment_trials(&head, &events)?;
        let trials = build_trial_info(&trajectories, &events)?;
        Ok(Self {
            events,
            head,
            trajectories,
            trials,
        })
    }
}
