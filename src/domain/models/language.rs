#[cfg(test)]
#[path = "language_test.rs"]
mod tests;

use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

/// The closed set of languages the portfolio ships content for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
    Fr,
}

impl Language {
    pub fn parse(text: &str) -> Option<Language> {
        return Language::iter().find(|e| return e.to_string() == text);
    }

    /// Next language in display order, wrapping around. Drives the switcher
    /// key in the UI.
    pub fn cycle(&self) -> Language {
        match self {
            Language::En => return Language::Zh,
            Language::Zh => return Language::Fr,
            Language::Fr => return Language::En,
        }
    }

    pub fn label(&self) -> String {
        return self.to_string().to_uppercase();
    }
}
