use ms_codec::ParseOptions;

use crate::cli::ParseArgs;

use super::overlay::Overlay;

impl ParseArgs {
    pub fn build(self) -> ParseOptions {
        let defaults = ParseOptions::default();
        ParseOptions {
            compound: self.compound.unwrap_or(defaults.compound),
            unique: self.unique.unwrap_or(defaults.unique),
        }
    }
}

impl Overlay for ParseArgs {
    fn overlay(self, overrides: Self) -> Self {
        Self {
            compound: overrides.compound.or(self.compound),
            unique: overrides.unique.or(self.unique),
        }
    }
}
