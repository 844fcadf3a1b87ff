//! Head pose loading.
//!
//! `head.csv` carries one 4×4 affine matrix per sample in columns
//! `Value.M11..Value.M44` plus a `Timestamp` column. The rig has written both
//! comma- and space-delimited variants of this file, so the delimiter is
//! sniffed from the header line; empty or unnamed columns are dropped.
//!
//! The rig stores the pose as column vectors: field `Value.Mrc` lands at
//! `matrix[c-1][r-1]`, so the translation (`M41..M43`) ends up in the last
//! column of the matrix and the rotation in the upper-left 3×3 block.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::timestamps::parse_timestamp;
use crate::DataError;

/// One timestamped head pose.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadSample {
    pub timestamp: NaiveDateTime,
    /// Row-major affine pose; `matrix[i][3]` for `i < 3` is the translation.
    pub matrix: [[f64; 4]; 4],
}

impl HeadSample {
    /// Head position (x, y, z) — the `M41..M43` fields.
    pub fn location(&self) -> [f64; 3] {
        [self.matrix[0][3], self.matrix[1][3], self.matrix[2][3]]
    }
}

/// Load the head pose file, in file order.
pub fn load_head_data(path: &Path) -> Result<Vec<HeadSample>, DataError> {
    let contents = fs::read_to_string(path)?;
    let mut lines = contents.lines().enumerate();

    let (_, header) = lines.next().ok_or(DataError::FieldCount {
        line: 1,
        expected: 17,
        got: 0,
    })?;
    let delimiter = if header.contains(',') { ',' } else { ' ' };
    // columns keep their raw split positions: an unnamed or empty header slot
    // never matches a lookup, and data fields are indexed by the same raw
    // position, so an empty interior field cannot shift its neighbours
    let columns: Vec<&str> = header.split(delimiter).map(str::trim).collect();

    let timestamp_col = find_column(&columns, "Timestamp")?;
    // matrix_cols[i][j] is the field index for matrix[i][j] = Value.M{j+1}{i+1}
    let mut matrix_cols = [[0usize; 4]; 4];
    for i in 0..4 {
        for j in 0..4 {
            let name = format!("Value.M{}{}", j + 1, i + 1);
            matrix_cols[i][j] = find_column(&columns, &name)?;
        }
    }
    let required_fields = matrix_cols
        .iter()
        .flatten()
        .copied()
        .chain([timestamp_col])
        .max()
        .unwrap_or(0)
        + 1;

    let mut samples = Vec::new();
    for (idx, raw_line) in lines {
        let line = idx + 1;
        if raw_line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = raw_line.split(delimiter).map(str::trim).collect();
        if fields.len() < required_fields {
            return Err(DataError::FieldCount {
                line,
                expected: required_fields,
                got: fields.len(),
            });
        }
        let timestamp = parse_timestamp(fields[timestamp_col], line)?;
        let mut matrix = [[0.0f64; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                let raw = fields[matrix_cols[i][j]];
                matrix[i][j] = raw.parse().map_err(|_| DataError::Number {
                    line,
                    value: raw.to_string(),
                })?;
            }
        }
        samples.push(HeadSample { timestamp, matrix });
    }
    Ok(samples)
}

fn find_column(columns: &[&str], name: &str) -> Result<usize, DataError> {
    columns
        .iter()
        .position(|c| *c == name)
        .ok_or_else(|| DataError::MissingColumn(name.to_string()))
}
