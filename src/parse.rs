//! Reading duration strings such as `"2h 30m"` or `"-3.2hrs"` into a
//! millisecond count.
//!
//! A term is a decimal number (optional leading `-`, optional fractional
//! part, the integer part may be absent as in `.5`) followed by any number of
//! spaces and an optional unit spelling. A term without a unit counts as
//! milliseconds. Single mode accepts exactly one term; compound mode sums
//! every term and rejects anything between them that is not whitespace.

use std::ops::Range;

use serde::Deserialize;

use crate::error::ParseError;
use crate::units::{self, Unit};

/// Options controlling how [`parse`] reads its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Accept several terms, e.g. `2y3s`.
    pub compound: bool,
    /// In compound mode, reject inputs where two terms resolve to the same
    /// unit, e.g. `2y3y` or `4m3min`.
    pub unique: bool,
}

impl ParseOptions {
    pub fn compound() -> Self {
        Self {
            compound: true,
            unique: false,
        }
    }

    pub fn unique() -> Self {
        Self {
            compound: true,
            unique: true,
        }
    }
}

/// One `number [unit]` occurrence in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub value: f64,
    pub unit: Unit,
    /// Byte range of the term within the scanned text.
    pub span: Range<usize>,
}

impl Term {
    pub fn millis(&self) -> f64 {
        self.value * self.unit.millis() as f64
    }
}

/// Parses `text` into milliseconds.
pub fn parse(text: &str, options: &ParseOptions) -> Result<f64, ParseError> {
    if options.compound {
        parse_compound(text, options.unique)
    } else {
        parse_single(text)
    }
}

/// Like [`parse`], but signals failure with `NaN`.
pub fn parse_or_nan(text: &str, options: &ParseOptions) -> f64 {
    parse(text, options).unwrap_or(f64::NAN)
}

/// Iterates over the terms of `text` left to right.
///
/// Yields an error, then stops, at the first non-whitespace character that
/// does not start a term.
pub fn terms(text: &str) -> Terms<'_> {
    Terms { text, pos: 0 }
}

pub struct Terms<'i> {
    text: &'i str,
    pos: usize,
}

impl Iterator for Terms<'_> {
    type Item = Result<Term, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let skipped = rest.len() - rest.trim_start().len();
        self.pos += skipped;
        if self.pos >= self.text.len() {
            return None;
        }

        match scan_term(self.text, self.pos) {
            Some(term) => {
                self.pos = term.span.end;
                Some(Ok(term))
            }
            None => {
                let offset = self.pos;
                let found = self.text[offset..].chars().next()?;
                self.pos = self.text.len();
                tracing::trace!(offset, ?found, "no duration term at offset");
                Some(Err(ParseError::Unexpected { offset, found }))
            }
        }
    }
}

fn parse_single(text: &str) -> Result<f64, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    match scan_term(trimmed, 0) {
        Some(term) if term.span.end == trimmed.len() => Ok(term.millis()),
        _ => Err(ParseError::Malformed {
            input: text.to_string(),
        }),
    }
}

fn parse_compound(text: &str, unique: bool) -> Result<f64, ParseError> {
    let mut total = 0.0;
    let mut seen: Vec<Unit> = Vec::new();
    for term in terms(text) {
        let term = term?;
        if seen.contains(&term.unit) {
            if unique {
                return Err(ParseError::DuplicateUnit { unit: term.unit });
            }
        } else {
            seen.push(term.unit);
        }
        total += term.millis();
    }
    if seen.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(total)
}

/// Reads one term starting at byte `start`, if one begins there.
fn scan_term(text: &str, start: usize) -> Option<Term> {
    let bytes = text.as_bytes();
    let mut pos = start;

    if bytes.get(pos) == Some(&b'-') {
        pos += 1;
    }
    let int_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    let has_int = pos > int_start;

    let mut has_frac = false;
    if bytes.get(pos) == Some(&b'.') && bytes.get(pos + 1).is_some_and(u8::is_ascii_digit) {
        pos += 1;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
        has_frac = true;
    }
    if !has_int && !has_frac {
        return None;
    }
    let number_end = pos;
    let value: f64 = text[start..number_end].parse().ok()?;

    while bytes.get(pos) == Some(&b' ') {
        pos += 1;
    }
    let (unit, end) = match units::match_prefix(&text[pos..]) {
        Some((unit, len)) => (unit, pos + len),
        None => (Unit::Millisecond, number_end),
    };

    Some(Term {
        value,
        unit,
        span: start..end,
    })
}
