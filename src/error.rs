//! Error types for parsing, formatting and conversion.

use thiserror::Error;

use crate::units::Unit;

/// Reasons a duration string cannot be read.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("an empty string is not a valid duration")]
    Empty,

    #[error("{input:?} is not a single number followed by an optional unit")]
    Malformed { input: String },

    #[error("unexpected {found:?} at offset {offset}")]
    Unexpected { offset: usize, found: char },

    #[error("unit {unit} appears more than once")]
    DuplicateUnit { unit: Unit },
}

/// Reasons a millisecond count cannot be rendered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("colonify cannot be combined with compact or verbose")]
    ColonConflict,

    #[error("expected a finite number of milliseconds, got {0}")]
    NonFinite(f64),
}

/// Uniform error returned by [`crate::convert`].
///
/// The message always ends with the JSON encoding of the offending value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ConvertError {
    message: String,
}

impl ConvertError {
    pub(crate) fn new(reason: impl std::fmt::Display, value_json: &str) -> Self {
        Self {
            message: format!("{reason}. value={value_json}"),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
