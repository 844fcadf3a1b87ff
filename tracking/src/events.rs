//! Event log parsing.
//!
//! `events.csv` is space-delimited with no header: timestamp, event name, and
//! up to two optional numeric values. Target onsets are named `TargetLeft` /
//! `TargetRight`; trial outcomes are `Hit`, `Missed`, `Penalty`, `Neutral`.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::timestamps::parse_timestamp;
use crate::DataError;

/// One line of the event log.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub timestamp: NaiveDateTime,
    pub name: String,
    pub value1: Option<f64>,
    pub value2: Option<f64>,
}

/// Load the space-delimited event log, in file order.
pub fn load_event_data(path: &Path) -> Result<Vec<EventRecord>, DataError> {
    let contents = fs::read_to_string(path)?;
    let mut events = Vec::new();
    for (idx, raw_line) in contents.lines().enumerate() {
        let line = idx + 1;
        if raw_line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = raw_line.split_whitespace().collect();
        if fields.len() < 2 {
            return Err(DataError::FieldCount {
                line,
                expected: 2,
                got: fields.len(),
            });
        }
        let timestamp = parse_timestamp(fields[0], line)?;
        let value1 = parse_optional_number(fields.get(2), line)?;
        let value2 = parse_optional_number(fields.get(3), line)?;
        events.push(EventRecord {
            timestamp,
            name: fields[1].to_string(),
            value1,
            value2,
        });
    }
    Ok(events)
}

fn parse_optional_number(field: Option<&&str>, line: usize) -> Result<Option<f64>, DataError> {
    match field {
        None => Ok(None),
        Some(s) => s.parse::<f64>().map(Some).map_err(|_| DataError::Number {
            line,
            value: s.to_string(),
        }),
    }
}
