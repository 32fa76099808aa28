mod args;

pub use args::{Cli, Command, FormatArgs, ParseArgs};

use ms_codec::Value;

/// Interprets a raw command-line value: plain finite numbers are millisecond
/// counts, everything else is duration text.
pub fn input_value(raw: &str) -> Value {
    match raw.trim().parse::<f64>() {
        Ok(ms) if ms.is_finite() => Value::Millis(ms),
        _ => Value::Text(raw.to_string()),
    }
}
