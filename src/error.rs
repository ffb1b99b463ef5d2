//! Error types
//!
//! The only error surface of the composition layer is input validation at the
//! visualization primitive boundary. Unknown routes are redirected, never
//! reported, and empty data is a valid state.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Visualization primitive that rejected its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    SummaryCard,
    HighlightList,
    KeyValueList,
    Table,
    IntensityGrid,
    TrendChart,
    ShareChart,
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Primitive::SummaryCard => "summary card",
            Primitive::HighlightList => "highlight list",
            Primitive::KeyValueList => "key/value list",
            Primitive::Table => "table",
            Primitive::IntensityGrid => "intensity grid",
            Primitive::TrendChart => "trend chart",
            Primitive::ShareChart => "share chart",
        };
        f.write_str(name)
    }
}

/// What exactly was wrong with the offending field
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Problem {
    /// A sequence does not have the length its parallel sequence demands
    #[error("entry {index} has {found} items, expected {expected}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A sequence is shorter or longer than its label list
    #[error("{found} entries for {expected} labels")]
    CountMismatch { expected: usize, found: usize },

    /// A named field is absent from a data point
    #[error("point {index} (`{key}`) has no such field")]
    MissingField { index: usize, key: String },

    /// NaN or infinite value
    #[error("entry {index} is not a finite number")]
    NonFinite { index: usize },

    /// Negative magnitude where parts of a whole are expected
    #[error("entry {index} is negative ({value})")]
    Negative { index: usize, value: f64 },
}

/// Malformed data handed to a visualization primitive.
///
/// Identifies the primitive and the offending field so a failing view can be
/// reported precisely instead of rendering garbled output.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("malformed {primitive} input in `{field}`: {problem}")]
pub struct MalformedInputError {
    pub primitive: Primitive,
    pub field: String,
    pub problem: Problem,
}

impl MalformedInputError {
    pub fn new(primitive: Primitive, field: impl Into<String>, problem: Problem) -> Self {
        Self {
            primitive,
            field: field.into(),
            problem,
        }
    }
}

/// Result type for primitive construction and view composition
pub type ComposeResult<T> = Result<T, MalformedInputError>;

/// Errors loading a dataset supplied by the aggregation collaborator
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read dataset {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Invalid dataset: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MalformedInputError::new(
            Primitive::Table,
            "rows",
            Problem::LengthMismatch {
                index: 2,
                expected: 4,
                found: 3,
            },
        );
        assert_eq!(
            err.to_string(),
            "malformed table input in `rows`: entry 2 has 3 items, expected 4"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let data_err: DataError = json_err.into();
        assert!(matches!(data_err, DataError::Parse(_)));
    }
}
