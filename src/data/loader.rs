use std::path::Path;

use super::error::{FieldError, LoadError};
use super::literal::parse_number_list;
use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Default log file name written by the simulator.
pub const DEFAULT_LOG_FILE: &str = "SIMULATION_PROGRESS_OUT.csv";

/// Load a progress log from a file.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    parse_log(&text)
}

/// Parse the full text of a progress log.
///
/// Expected layout, one sample per line:
///
/// ```text
/// <time>:<points>;<point_cap>;<pps>;[<v0>, <v1>, ...]
/// 5:100;500;20;[1.0, 2.0, 3.0]
/// ```
///
/// Parsing stops at the first bad line. After all lines are decoded every
/// vector must have the length of the first one.
pub fn parse_log(text: &str) -> Result<Dataset, LoadError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Dataset::default());
    }

    let mut records = Vec::new();
    for (i, raw) in text.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let record = parse_line(line).map_err(|reason| LoadError::Parse {
            line: i + 1,
            content: line.to_string(),
            reason,
        })?;
        log::trace!("line {}: {record:?}", i + 1);
        records.push(record);
    }

    check_vector_lengths(&records)?;
    Ok(Dataset { records })
}

// ---------------------------------------------------------------------------
// Line decoding
// ---------------------------------------------------------------------------

/// Decode one `time:points;point_cap;pps;vector` line.
pub fn parse_line(line: &str) -> Result<Record, FieldError> {
    let (time_str, rest) = line.split_once(':').ok_or(FieldError::MissingColon)?;

    let fields: Vec<&str> = rest.split(';').collect();
    let [points_str, point_cap_str, pps_str, vector_str] = fields[..] else {
        return Err(FieldError::FieldCount(fields.len()));
    };

    Ok(Record {
        time: parse_int(time_str, "time")?,
        points: parse_int(points_str, "points")?,
        point_cap: parse_int(point_cap_str, "point cap")?,
        points_per_second: parse_int(pps_str, "pps")?,
        vector: parse_number_list(vector_str)?,
    })
}

fn parse_int(s: &str, field: &'static str) -> Result<i128, FieldError> {
    let tok = s.trim();
    tok.parse::<i128>().map_err(|_| FieldError::NotAnInteger {
        field,
        text: tok.to_string(),
    })
}

fn check_vector_lengths(records: &[Record]) -> Result<(), LoadError> {
    let Some(first) = records.first() else {
        return Ok(());
    };
    let expected = first.vector.len();

    match records.iter().position(|r| r.vector.len() != expected) {
        Some(idx) => Err(LoadError::Schema {
            line: idx + 1,
            expected,
            found: records[idx].vector.len(),
        }),
        None => Ok(()),
    }
}
