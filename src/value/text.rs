//! Text values.

use std::fmt;

/// A plain string value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringValue(String);

impl StringValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A language code accepted by the target site
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `xx` or `xxx` in lowercase, optionally followed by `-subtag` groups
    pub fn is_well_formed(code: &str) -> bool {
        let mut parts = code.split('-');
        let primary = parts.next().unwrap_or_default();
        (2..=3).contains(&primary.len())
            && primary.chars().all(|c| c.is_ascii_lowercase())
            && parts.all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_alphanumeric()))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text in a given language
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonolingualTextValue {
    text: String,
    language: LanguageCode,
}

impl MonolingualTextValue {
    pub fn new(text: impl Into<String>, language: LanguageCode) -> Self {
        Self {
            text: text.into(),
            language,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> &LanguageCode {
        &self.language
    }
}

impl fmt::Display for MonolingualTextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.text, self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_language_codes() {
        for code in ["en", "fr", "ast", "be-tarask", "zh-hans", "de-1901"] {
            assert!(LanguageCode::is_well_formed(code), "{:?}", code);
        }
        for code in ["", "e", "french", "f1", "EN", "en-", "en--us", "en_us"] {
            assert!(!LanguageCode::is_well_formed(code), "{:?}", code);
        }
    }

    #[test]
    fn test_monolingual_display() {
        let text = MonolingualTextValue::new("Tour Eiffel", LanguageCode::new("fr"));
        assert_eq!(text.to_string(), "\"Tour Eiffel\"@fr");
    }
}
