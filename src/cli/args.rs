use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use ms_codec::ShowKey;
use serde::Deserialize;

/// Command-line interface definition.
#[derive(Parser, Debug)]
#[command(
    name = "ms",
    author,
    version,
    about = "Convert between duration strings and milliseconds"
)]
pub struct Cli {
    /// Path to the optional TOML configuration file.
    #[arg(
        long = "config",
        alias = "config-file",
        env = "MS_CONFIG",
        value_name = "FILE",
        global = true,
        help = "Optional. Path to the TOML configuration file; defaults to the platform-specific user config directory (ProjectDirs) when omitted."
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read a duration string and print its length in milliseconds.
    Parse {
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        text: String,

        /// Print the day/hour/minute/second breakdown before the total.
        #[arg(long)]
        breakdown: bool,

        #[command(flatten)]
        parse: ParseArgs,
    },

    /// Render a millisecond count as a duration string.
    Format {
        #[arg(value_name = "MILLIS", allow_negative_numbers = true)]
        millis: f64,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Parse text or format a number, whichever the value is.
    Convert {
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,

        #[command(flatten)]
        parse: ParseArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Args, Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseArgs {
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL",
        help = "Optional. Accept several terms such as `2y3s` and sum them. [default: false]"
    )]
    pub compound: Option<bool>,

    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL",
        help = "Optional. Reject compound input that names the same unit twice. [default: false]"
    )]
    pub unique: Option<bool>,
}

impl ParseArgs {
    /// `--breakdown` reads its input in compound mode unless `--compound`
    /// was given explicitly.
    pub fn with_breakdown(mut self, breakdown: bool) -> Self {
        if breakdown && self.compound.is_none() {
            self.compound = Some(true);
        }
        self
    }
}

#[derive(Args, Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatArgs {
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL",
        help = "Optional. Only print the most significant field. [default: false]"
    )]
    pub compact: Option<bool>,

    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL",
        help = "Optional. Spell out unit names. [default: false]"
    )]
    pub verbose: Option<bool>,

    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL",
        help = "Optional. Positional notation such as `5:01:45.240`; conflicts with compact and verbose. [default: false]"
    )]
    pub colonify: Option<bool>,

    #[arg(
        long = "fill-zero",
        alias = "fill_zero",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL",
        help = "Optional. Zero-pad every field after the first. [default: false]"
    )]
    pub fill_zero: Option<bool>,

    #[arg(
        long,
        value_name = "N",
        help = "Optional. Maximum number of fields to print (at least 1). [default: all]"
    )]
    pub units: Option<usize>,

    #[arg(
        long = "seconds-digits",
        alias = "seconds_digits",
        value_name = "N",
        help = "Optional. Fractional digits of the seconds field. [default: 1]"
    )]
    pub seconds_digits: Option<usize>,

    #[arg(
        long = "ms-digits",
        alias = "ms_digits",
        value_name = "N",
        help = "Optional. Fractional digits of the milliseconds field. [default: 0]"
    )]
    pub ms_digits: Option<usize>,

    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        value_name = "UNIT",
        help = "Optional. Unit fields to leave out, e.g. `--omit ms,s`."
    )]
    pub omit: Option<Vec<OmitArg>>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OmitArg {
    Ms,
    S,
    M,
    H,
    D,
    Y,
}

impl From<OmitArg> for ShowKey {
    fn from(value: OmitArg) -> Self {
        match value {
            OmitArg::Ms => ShowKey::Millis,
            OmitArg::S => ShowKey::Seconds,
            OmitArg::M => ShowKey::Minutes,
            OmitArg::H => ShowKey::Hours,
            OmitArg::D => ShowKey::Days,
            OmitArg::Y => ShowKey::Years,
        }
    }
}
