use ms_codec::FormatOptions;

use crate::cli::FormatArgs;

use super::overlay::Overlay;

impl FormatArgs {
    /// Fills unset fields from [`FormatOptions::default`].
    pub fn build(self) -> FormatOptions {
        let defaults = FormatOptions::default();
        FormatOptions {
            compact: self.compact.unwrap_or(defaults.compact),
            verbose: self.verbose.unwrap_or(defaults.verbose),
            units: self.units.or(defaults.units),
            seconds_digits: self.seconds_digits.unwrap_or(defaults.seconds_digits),
            ms_digits: self.ms_digits.unwrap_or(defaults.ms_digits),
            colonify: self.colonify.unwrap_or(defaults.colonify),
            fill_zero: self.fill_zero.unwrap_or(defaults.fill_zero),
            omit: self
                .omit
                .map(|keys| keys.into_iter().map(Into::into).collect())
                .unwrap_or(defaults.omit),
        }
    }
}

impl Overlay for FormatArgs {
    fn overlay(self, overrides: Self) -> Self {
        Self {
            compact: overrides.compact.or(self.compact),
            verbose: overrides.verbose.or(self.verbose),
            colonify: overrides.colonify.or(self.colonify),
            fill_zero: overrides.fill_zero.or(self.fill_zero),
            units: overrides.units.or(self.units),
            seconds_digits: overrides.seconds_digits.or(self.seconds_digits),
            ms_digits: overrides.ms_digits.or(self.ms_digits),
            omit: overrides.omit.or(self.omit),
        }
    }
}
