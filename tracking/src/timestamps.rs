//! Timestamp parsing for the acquisition rig's log format.
//!
//! The rig writes `YYYY-MM-DDTHH:MM:SS.fffffff+TZ` — seven fractional digits
//! and a timezone offset. Parsing truncates to 26 characters, which drops the
//! timezone and the seventh fractional digit, keeping microsecond precision.

use chrono::NaiveDateTime;

use crate::DataError;

const TRUNCATED_LEN: usize = 26;
const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse a rig timestamp, ignoring the timezone suffix.
pub fn parse_timestamp(raw: &str, line: usize) -> Result<NaiveDateTime, DataError> {
    let trimmed = raw.trim();
    // byte index 26 may fall inside a multi-byte character in garbage input;
    // let the parser reject the full string in that case instead of panicking
    let truncated = trimmed.get(..TRUNCATED_LEN).unwrap_or(trimmed);
    NaiveDateTime::parse_from_str(truncated, FORMAT).map_err(|_| DataError::Timestamp {
        line,
        value: raw.to_string(),
    })
}
