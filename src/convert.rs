//! Single entry point that parses strings and formats numbers.

use thiserror::Error;

use crate::error::{ConvertError, FormatError};
use crate::format::{FormatOptions, format};
use crate::parse::{ParseOptions, parse};

/// Input accepted by [`convert`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Millis(f64),
}

impl Value {
    /// JSON rendering used in error messages. Whole numbers carry no
    /// fractional part and non-finite numbers become `null`.
    pub fn to_json(&self) -> String {
        match self {
            Value::Text(text) => {
                serde_json::to_string(text).unwrap_or_else(|_| format!("{text:?}"))
            }
            Value::Millis(ms) if ms.is_finite() => ms.to_string(),
            Value::Millis(_) => "null".to_string(),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Millis(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Millis(value as f64)
    }
}

/// Output of [`convert`]: a millisecond count for parsed text, a duration
/// string for a formatted number.
#[derive(Debug, Clone, PartialEq)]
pub enum Converted {
    Millis(f64),
    Text(String),
}

impl Converted {
    pub fn as_millis(&self) -> Option<f64> {
        match self {
            Converted::Millis(ms) => Some(*ms),
            Converted::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Converted::Millis(_) => None,
            Converted::Text(text) => Some(text),
        }
    }
}

impl std::fmt::Display for Converted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Converted::Millis(ms) => write!(f, "{ms}"),
            Converted::Text(text) => f.write_str(text),
        }
    }
}

/// Parser and formatter options in one record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub parse: ParseOptions,
    pub format: FormatOptions,
}

#[derive(Error, Debug)]
enum Reason {
    #[error("Value is not a string or number")]
    InvalidValue,
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Parses a non-empty string or formats a finite number.
///
/// Unparseable text is not an error: it comes back as `Converted::Millis`
/// holding `NaN`. Invalid values and option conflicts come back as a
/// [`ConvertError`] whose message ends with `value=<json>`.
pub fn convert(value: &Value, options: &Options) -> Result<Converted, ConvertError> {
    let result: Result<Converted, Reason> = match value {
        Value::Text(text) if !text.is_empty() => match parse(text, &options.parse) {
            Ok(ms) => Ok(Converted::Millis(ms)),
            Err(err) => {
                tracing::debug!(error = %err, input = %text, "unparseable duration");
                Ok(Converted::Millis(f64::NAN))
            }
        },
        Value::Millis(ms) if ms.is_finite() => format(*ms, &options.format)
            .map(Converted::Text)
            .map_err(Reason::from),
        _ => Err(Reason::InvalidValue),
    };

    result.map_err(|reason| {
        let err = ConvertError::new(reason, &value.to_json());
        tracing::debug!(error = %err, "conversion failed");
        err
    })
}
