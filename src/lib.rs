//! Conversion between human-readable duration strings and millisecond
//! counts.
//!
//! ```
//! use ms_codec::{FormatOptions, ParseOptions, format, parse};
//!
//! assert_eq!(parse("2h 30m", &ParseOptions::compound()), Ok(9_000_000.0));
//! assert_eq!(format(9_000_000.0, &FormatOptions::default()).unwrap(), "2h 30m");
//! ```

pub mod convert;
pub mod error;
pub mod format;
pub mod parse;
pub mod units;

pub use convert::{Converted, Options, Value, convert};
pub use error::{ConvertError, FormatError, ParseError};
pub use format::{Components, FormatOptions, ShowKey, decompose, format};
pub use parse::{ParseOptions, Term, parse, parse_or_nan, terms};
pub use units::{UNIT_SPELLINGS, Unit, unit_table};
