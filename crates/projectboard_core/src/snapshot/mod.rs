//! JSON snapshot codec.
//!
//! # Responsibility
//! - Serialize the ordered project list into a JSON array.
//! - Split an import document into independently decodable candidates.
//!
//! # Invariants
//! - Field names and enum values are part of the wire contract.
//! - Dates are written as `YYYY-MM-DD`.
//! - A malformed element never prevents decoding of its siblings.

pub mod file;
pub mod record;

use crate::model::date::DateParseError;
use crate::model::project::Project;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use file::{read_snapshot_file, write_snapshot_file};
pub use record::{ProjectRecord, ToDoRecord};

/// Whole-document snapshot failures.
#[derive(Debug)]
pub enum SnapshotError {
    /// Document is not valid JSON or could not be produced.
    Json(serde_json::Error),
    /// Document is valid JSON but not an array of projects.
    NotAnArray,
    Io(std::io::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "snapshot json error: {err}"),
            Self::NotAnArray => write!(f, "snapshot must be a JSON array of projects"),
            Self::Io(err) => write!(f, "snapshot io error: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::NotAnArray => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Per-record decode failures inside an otherwise readable document.
#[derive(Debug)]
pub enum RecordError {
    Malformed(serde_json::Error),
    InvalidDate {
        field: &'static str,
        source: DateParseError,
    },
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "malformed project record: {err}"),
            Self::InvalidDate { field, source } => write!(f, "invalid `{field}`: {source}"),
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            Self::InvalidDate { source, .. } => Some(source),
        }
    }
}

/// Serializes projects in order as a pretty-printed JSON array.
pub fn encode_projects<'a>(
    projects: impl IntoIterator<Item = &'a Project>,
) -> Result<String, SnapshotError> {
    let projects: Vec<&Project> = projects.into_iter().collect();
    Ok(serde_json::to_string_pretty(&projects)?)
}

/// Splits a snapshot document into raw candidate values in document order.
pub fn parse_candidates(text: &str) -> Result<Vec<Value>, SnapshotError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(items) => Ok(items),
        _ => Err(SnapshotError::NotAnArray),
    }
}

/// Decodes one candidate value into a wire record.
pub fn decode_record(value: Value) -> Result<ProjectRecord, RecordError> {
    serde_json::from_value(value).map_err(RecordError::Malformed)
}
