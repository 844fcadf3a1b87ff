//! Trial segmentation, resampling, and the per-trial summary table.
//!
//! A trial opens at each `TargetLeft`/`TargetRight` event and closes at the
//! timestamp of the next event in the log (the outcome event, in a
//! well-formed recording). The head samples inside that closed interval are
//! resampled onto a 10 ms grid by forward-fill, converted to static y-z-x
//! Euler angles in degrees, and centred on the across-trial baseline: the
//! mean second-sample y/z rotation over all trials.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::euler::mat2euler_syzx;
use crate::events::EventRecord;
use crate::head::HeadSample;
use crate::DataError;

/// Resampling period for trial trajectories.
const RESAMPLE_MS: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TargetSide {
    Left,
    Right,
}

impl TargetSide {
    fn from_event_name(name: &str) -> Option<Self> {
        match name {
            "TargetLeft" => Some(TargetSide::Left),
            "TargetRight" => Some(TargetSide::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Hit,
    Missed,
    Penalty,
    Neutral,
}

impl Outcome {
    fn from_event_name(name: &str) -> Option<Self> {
        match name {
            "Hit" => Some(Outcome::Hit),
            "Missed" => Some(Outcome::Missed),
            "Penalty" => Some(Outcome::Penalty),
            "Neutral" => Some(Outcome::Neutral),
            _ => None,
        }
    }
}

/// One resampled trajectory sample.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectorySample {
    pub timestamp: NaiveDateTime,
    /// Time since the first resampled tick of the trial, in ms.
    pub trial_time_ms: f64,
    pub location: [f64; 3],
    /// Static-frame Euler angles in degrees, (y, z, x) order.
    pub rotation_deg: [f64; 3],
    /// Y rotation minus the across-trial starting baseline.
    pub centred_y: f64,
    /// Z rotation minus the across-trial starting baseline.
    pub centred_z: f64,
}

/// One trial's resampled head trajectory.
#[derive(Debug, Clone)]
pub struct TrialTrajectory {
    pub trial: usize,
    pub target_side: TargetSide,
    pub samples: Vec<TrajectorySample>,
}

/// Per-trial summary row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialInfo {
    pub trial: usize,
    pub target_side: TargetSide,
    /// Duration from trial start to the last trajectory sample, in ms.
    pub reaction_time_ms: f64,
    pub start_y: f64,
    pub end_y: f64,
    pub start_z: f64,
    pub end_z: f64,
    pub outcome: Outcome,
}

/// Cut the head stream into per-trial trajectories.
///
/// Trials are target-onset events paired with the next event in the log; a
/// trailing onset with no closing event is dropped. Ticks before the first
/// head sample of a trial have nothing to forward-fill from and are skipped.
pub fn segment_trials(
    head: &[HeadSample],
    events: &[EventRecord],
) -> Result<Vec<TrialTrajectory>, DataError> {
    let onsets: Vec<(usize, TargetSide)> = events
        .iter()
        .enumerate()
        .filter_map(|(i, e)| TargetSide::from_event_name(&e.name).map(|side| (i, side)))
        .collect();
    if onsets.is_empty() {
        return Err(DataError::NoTrials);
    }

    let mut trajectories = Vec::with_capacity(onsets.len());
    for (trial, &(event_idx, target_side)) in onsets.iter().enumerate() {
        let Some(end_event) = events.get(event_idx + 1) else {
            continue; // trial never closed
        };
        let start = events[event_idx].timestamp;
        let end = end_event.timestamp;

        let in_trial: Vec<&HeadSample> = head
            .iter()
            .filter(|s| s.timestamp >= start && s.timestamp <= end)
            .collect();

        let mut samples = Vec::new();
        let mut first_tick: Option<NaiveDateTime> = None;
        let mut tick = start;
        while tick <= end {
            // forward-fill: latest in-trial sample at or before the tick
            if let Some(src) = in_trial.iter().rev().find(|s| s.timestamp <= tick) {
                let first = *first_tick.get_or_insert(tick);
                let angles = mat2euler_syzx(&src.matrix);
                samples.push(TrajectorySample {
                    timestamp: tick,
                    trial_time_ms: duration_ms(tick - first),
                    location: src.location(),
                    rotation_deg: [
                        angles[0].to_degrees(),
                        angles[1].to_degrees(),
                        angles[2].to_degrees(),
                    ],
                    centred_y: 0.0,
                    centred_z: 0.0,
                });
            }
            tick += Duration::milliseconds(RESAMPLE_MS);
        }

        trajectories.push(TrialTrajectory {
            trial,
            target_side,
            samples,
        });
    }

    apply_centring(&mut trajectories);
    Ok(trajectories)
}

/// Subtract the across-trial starting baseline (mean second-sample y/z
/// rotation) from every sample's angles.
fn apply_centring(trajectories: &mut [TrialTrajectory]) {
    let starts: Vec<[f64; 3]> = trajectories
        .iter()
        .filter_map(|t| t.samples.get(1).map(|s| s.rotation_deg))
        .collect();
    if starts.is_empty() {
        return;
    }
    let zero_y = starts.iter().map(|r| r[0]).sum::<f64>() / starts.len() as f64;
    let zero_z = starts.iter().map(|r| r[1]).sum::<f64>() / starts.len() as f64;

    for trajectory in trajectories {
        for sample in &mut trajectory.samples {
            sample.centred_y = sample.rotation_deg[0] - zero_y;
            sample.centred_z = sample.rotation_deg[1] - zero_z;
        }
    }
}

/// Build the per-trial summary table from segmented trajectories plus the
/// outcome events in the log.
pub fn build_trial_info(
    trajectories: &[TrialTrajectory],
    events: &[EventRecord],
) -> Result<Vec<TrialInfo>, DataError> {
    let outcomes: Vec<Outcome> = events
        .iter()
        .filter_map(|e| Outcome::from_event_name(&e.name))
        .collect();
    if outcomes.len() != trajectories.len() {
        return Err(DataError::OutcomeMismatch {
            trials: trajectories.len(),
            outcomes: outcomes.len(),
        });
    }

    let mut trials = Vec::with_capacity(trajectories.len());
    for (trajectory, &outcome) in trajectories.iter().zip(&outcomes) {
        // movement start is the second sample; a single-sample trial
        // degenerates to its only sample
        let start = trajectory
            .samples
            .get(1)
            .or_else(|| trajectory.samples.first());
        let end = trajectory.samples.last();
        let (Some(start), Some(end)) = (start, end) else {
            continue;
        };
        trials.push(TrialInfo {
            trial: trajectory.trial,
            target_side: trajectory.target_side,
            reaction_time_ms: end.trial_time_ms,
            start_y: start.centred_y,
            end_y: end.centred_y,
            start_z: start.centred_z,
            end_z: end.centred_z,
            outcome,
        });
    }
    Ok(trials)
}

fn duration_ms(d: Duration) -> f64 {
    d.num_microseconds().unwrap_or(0) as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(ms: i64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 3, 14)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
            + Duration::milliseconds(ms)
    }

    fn event(ms: i64, name: &str) -> EventRecord {
        EventRecord {
            timestamp: ts(ms),
            name: name.to_string(),
            value1: None,
            value2: None,
        }
    }

    /// Head sample rotated about y by `y_deg`, translated to `location`.
    fn head(ms: i64, y_deg: f64, location: [f64; 3]) -> HeadSample {
        let theta = y_deg.to_radians();
        let (s, c) = theta.sin_cos();
        let mut matrix = [
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        matrix[0][3] = location[0];
        matrix[1][3] = location[1];
        matrix[2][3] = location[2];
        HeadSample {
            timestamp: ts(ms),
            matrix,
        }
    }

    fn two_trial_recording() -> (Vec<HeadSample>, Vec<EventRecord>) {
        // trial 0: onset 0 ms, closes at 50 ms; trial 1: onset 200 ms,
        // closes at 240 ms; head sampled every 10 ms with a y-angle ramp
        let head: Vec<HeadSample> = (0..30i64)
            .map(|i| head(i * 10, i as f64, [0.1 * i as f64, 0.0, 0.0]))
            .collect();
        let events = vec![
            event(0, "TargetLeft"),
            event(50, "Hit"),
            event(200, "TargetRight"),
            event(240, "Penalty"),
        ];
        (head, events)
    }

    #[test]
    fn segments_and_resamples_trials() {
        let (head, events) = two_trial_recording();
        let trajectories = segment_trials(&head, &events).unwrap();
        assert_eq!(trajectories.len(), 2);

        let t0 = &trajectories[0];
        assert_eq!(t0.target_side, TargetSide::Left);
        // ticks 0..=50 ms on a 10 ms grid
        assert_eq!(t0.samples.len(), 6);
        assert_eq!(t0.samples[0].trial_time_ms, 0.0);
        assert_eq!(t0.samples[5].trial_time_ms, 50.0);
        // forward-fill at 10 ms picks the sample with y-angle 1°
        assert!((t0.samples[1].rotation_deg[0] - 1.0).abs() < 1e-9);
        assert!((t0.samples[1].location[0] - 0.1).abs() < 1e-12);

        let t1 = &trajectories[1];
        assert_eq!(t1.target_side, TargetSide::Right);
        assert_eq!(t1.samples.len(), 5);
        // trial 1 starts at 200 ms where the ramp reads 20°
        assert!((t1.samples[0].rotation_deg[0] - 20.0).abs() < 1e-9);
    }

    #[test]
    fn centring_uses_mean_second_sample() {
        let (head, events) = two_trial_recording();
        let trajectories = segment_trials(&head, &events).unwrap();
        // second samples carry 1° and 21°: baseline is 11°
        let t0 = &trajectories[0];
        assert!((t0.samples[1].centred_y - (1.0 - 11.0)).abs() < 1e-9);
        let t1 = &trajectories[1];
        assert!((t1.samples[1].centred_y - (21.0 - 11.0)).abs() < 1e-9);
        // z baseline is 0 for pure y rotations
        assert!(t0.samples[0].centred_z.abs() < 1e-9);
    }

    #[test]
    fn trial_info_summarizes_each_trial() {
        let (head, events) = two_trial_recording();
        let trajectories = segment_trials(&head, &events).unwrap();
        let trials = build_trial_info(&trajectories, &events).unwrap();
        assert_eq!(trials.len(), 2);

        assert_eq!(trials[0].outcome, Outcome::Hit);
        assert_eq!(trials[0].target_side, TargetSide::Left);
        assert_eq!(trials[0].reaction_time_ms, 50.0);
        assert!((trials[0].start_y - (1.0 - 11.0)).abs() < 1e-9);
        assert!((trials[0].end_y - (5.0 - 11.0)).abs() < 1e-9);

        assert_eq!(trials[1].outcome, Outcome::Penalty);
        assert_eq!(trials[1].reaction_time_ms, 40.0);
        assert!((trials[1].end_y - (24.0 - 11.0)).abs() < 1e-9);
    }

    #[test]
    fn no_onsets_is_an_error() {
        let (head, _) = two_trial_recording();
        let events = vec![event(0, "SessionStart")];
        assert!(matches!(
            segment_trials(&head, &events),
            Err(DataError::NoTrials)
        ));
    }

    #[test]
    fn trailing_unclosed_trial_is_dropped() {
        let (head, mut events) = two_trial_recording();
        events.push(event(290, "TargetLeft"));
        let trajectories = segment_trials(&head, &events).unwrap();
        assert_eq!(trajectories.len(), 2);
    }

    #[test]
    fn outcome_count_mismatch_is_an_error() {
        let (head, mut events) = two_trial_recording();
        events.push(event(260, "Neutral"));
        let trajectories = segment_trials(&head, &events).unwrap();
        assert!(matches!(
            build_trial_info(&trajectories, &events),
            Err(DataError::OutcomeMismatch {
                trials: 2,
                outcomes: 3
            })
        ));
    }
}
