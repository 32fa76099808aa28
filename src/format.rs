//! Rendering millisecond counts as duration strings.
//!
//! The count is split into years, days, hours, minutes, seconds and
//! milliseconds using truncating division, so every component of a negative
//! count is itself zero or negative. Years are whole blocks of 365 days.

use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::units::{DAY, HOUR, MINUTE, SECOND, Unit};

/// Unit fields that can be left out of formatted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ShowKey {
    #[serde(rename = "ms")]
    Millis,
    #[serde(rename = "s")]
    Seconds,
    #[serde(rename = "m")]
    Minutes,
    #[serde(rename = "h")]
    Hours,
    #[serde(rename = "d")]
    Days,
    #[serde(rename = "y")]
    Years,
}

impl ShowKey {
    pub const fn unit(self) -> Unit {
        match self {
            ShowKey::Millis => Unit::Millisecond,
            ShowKey::Seconds => Unit::Second,
            ShowKey::Minutes => Unit::Minute,
            ShowKey::Hours => Unit::Hour,
            ShowKey::Days => Unit::Day,
            ShowKey::Years => Unit::Year,
        }
    }
}

/// Options accepted by [`format`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Only show the most significant field: `1h 10m` becomes `1h`.
    pub compact: bool,
    /// Full unit words: `5 hours 1 minute 45 seconds`.
    pub verbose: bool,
    /// Maximum number of fields to show; `None` shows all of them.
    pub units: Option<usize>,
    /// Fractional digits of the seconds field.
    pub seconds_digits: usize,
    /// Fractional digits of the milliseconds field.
    pub ms_digits: usize,
    /// Positional notation: `5:01:45.240`.
    pub colonify: bool,
    /// Zero-pad every positional field after the first; implied by
    /// `colonify` and ignored without it.
    pub fill_zero: bool,
    pub omit: Vec<ShowKey>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            compact: false,
            verbose: false,
            units: None,
            seconds_digits: 1,
            ms_digits: 0,
            colonify: false,
            fill_zero: false,
            omit: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Short,
    Verbose,
    Colon,
}

/// [`FormatOptions`] after every implied setting has been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFormat {
    pub style: Style,
    pub compact: bool,
    pub max_fields: usize,
    pub seconds_digits: usize,
    pub ms_digits: usize,
    pub fill_zero: bool,
    pub omit: Vec<ShowKey>,
}

impl FormatOptions {
    /// Checks for conflicting options and applies the ones implied by
    /// colon notation and verbose output.
    pub fn resolve(&self) -> Result<ResolvedFormat, FormatError> {
        if self.colonify && (self.compact || self.verbose) {
            return Err(FormatError::ColonConflict);
        }

        let style = if self.colonify {
            Style::Colon
        } else if self.verbose {
            Style::Verbose
        } else {
            Style::Short
        };
        let seconds_digits = match style {
            Style::Short => self.seconds_digits,
            Style::Verbose | Style::Colon => 0,
        };
        if seconds_digits != self.seconds_digits {
            tracing::trace!(?style, "seconds digits forced to 0");
        }

        Ok(ResolvedFormat {
            style,
            compact: self.compact,
            max_fields: self.units.map_or(usize::MAX, |n| n.max(1)),
            seconds_digits,
            ms_digits: self.ms_digits,
            fill_zero: self.fill_zero || self.colonify,
            omit: self.omit.clone(),
        })
    }
}

/// Whole-unit breakdown of a millisecond count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Components {
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub millis: f64,
}

impl Components {
    pub fn years(&self) -> f64 {
        non_negative_zero((self.days / 365.0).trunc())
    }

    pub fn day_of_year(&self) -> f64 {
        non_negative_zero(self.days % 365.0)
    }
}

pub fn decompose(ms: f64) -> Components {
    let whole = |unit: u64| (ms / unit as f64).trunc();
    Components {
        days: non_negative_zero(whole(DAY)),
        hours: non_negative_zero(whole(HOUR) % 24.0),
        minutes: non_negative_zero(whole(MINUTE) % 60.0),
        seconds: non_negative_zero(whole(SECOND) % 60.0),
        millis: non_negative_zero(ms.trunc() % 1000.0),
    }
}

fn non_negative_zero(value: f64) -> f64 {
    value + 0.0
}

/// Renders `ms` as a duration string.
pub fn format(ms: f64, options: &FormatOptions) -> Result<String, FormatError> {
    if !ms.is_finite() {
        return Err(FormatError::NonFinite(ms));
    }
    let resolved = options.resolve()?;
    Ok(render(&decompose(ms), &resolved))
}

fn render(parts: &Components, fmt: &ResolvedFormat) -> String {
    let colon = fmt.style == Style::Colon;

    let fields = [
        (ShowKey::Years, parts.years(), 0),
        (ShowKey::Days, parts.day_of_year(), 0),
        (ShowKey::Hours, parts.hours, 0),
        (ShowKey::Minutes, parts.minutes, 0),
        (ShowKey::Seconds, parts.seconds, fmt.seconds_digits),
        (ShowKey::Millis, parts.millis, fmt.ms_digits),
    ];

    let mut out: Vec<String> = Vec::new();
    for (key, value, digits) in fields {
        if fmt.omit.contains(&key) {
            continue;
        }
        let text = fixed(value, digits);
        // Colon notation keeps zero fields once a non-zero one has been seen.
        if text == "0" && (!colon || out.is_empty()) {
            continue;
        }

        let text = if colon && fmt.fill_zero && !out.is_empty() {
            let width = if key == ShowKey::Millis { 3 } else { 2 };
            pad_whole(&text, width)
        } else {
            text
        };

        let unit = key.unit();
        let field = match fmt.style {
            Style::Colon if out.is_empty() => text,
            Style::Colon if key == ShowKey::Millis => format!(".{text}"),
            Style::Colon => format!(":{text}"),
            Style::Verbose => {
                let word = if value == 1.0 {
                    unit.singular()
                } else {
                    unit.plural()
                };
                format!("{text} {word}")
            }
            Style::Short => format!("{text}{}", unit.short()),
        };
        out.push(field);
    }

    if out.is_empty() {
        return match fmt.style {
            Style::Verbose => "0 milliseconds".to_string(),
            Style::Short | Style::Colon => "0ms".to_string(),
        };
    }
    if fmt.compact {
        return out.swap_remove(0);
    }

    out.truncate(fmt.max_fields);
    let separator = if colon { "" } else { " " };
    out.join(separator)
}

/// Fixed-point rendering without trailing fractional zeros.
fn fixed(value: f64, digits: usize) -> String {
    let text = format!("{value:.digits$}");
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Left-pads the integer part of `text` with zeros up to `width` digits.
fn pad_whole(text: &str, width: usize) -> String {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let whole = digits.find('.').unwrap_or(digits.len());
    let zeros = "0".repeat(width.saturating_sub(whole));
    format!("{sign}{zeros}{digits}")
}
