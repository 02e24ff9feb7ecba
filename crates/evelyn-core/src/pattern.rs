//! # Validation Patterns
//!
//! Postcode and tax-identifier formats are held as data on each
//! jurisdiction record. A [`ValidationPattern`] keeps the source text (for
//! serialization and display) next to the compiled [`Regex`].
//!
//! Inputs are normalized with [`normalize_identifier`] before matching:
//! every whitespace character is removed and the rest is upper-cased. The
//! normalized form is never handed back to the caller.

use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ValidationError;

/// A compiled, anchored validation pattern.
#[derive(Debug, Clone)]
pub struct ValidationPattern {
    source: String,
    regex: Regex,
}

impl ValidationPattern {
    /// Compile a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPattern`] if the regex does not
    /// compile.
    pub fn new(source: impl Into<String>) -> Result<Self, ValidationError> {
        let source = source.into();
        let regex = Regex::new(&source).map_err(|e| ValidationError::InvalidPattern {
            pattern: source.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { source, regex })
    }

    /// The pattern source text.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Test raw input exactly as given.
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// Normalize `input` with [`normalize_identifier`], then test it.
    pub fn matches_normalized(&self, input: &str) -> bool {
        self.regex.is_match(&normalize_identifier(input))
    }
}

impl PartialEq for ValidationPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for ValidationPattern {}

impl std::fmt::Display for ValidationPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

impl Serialize for ValidationPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for ValidationPattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Strip all whitespace and upper-case what remains.
pub fn normalize_identifier(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const UK_POSTCODE: &str = r"(?i)^[A-Z]{1,2}[0-9][A-Z0-9]?\s?[0-9][A-Z]{2}$";

    #[test]
    fn normalize_strips_and_upper_cases() {
        assert_eq!(normalize_identifier(" sw1a 1aa "), "SW1A1AA");
        assert_eq!(normalize_identifier("ab 12\t34\n56 c"), "AB123456C");
        assert_eq!(normalize_identifier(""), "");
    }

    #[test]
    fn pattern_matches_normalized_input() {
        let pattern = ValidationPattern::new(UK_POSTCODE).unwrap();
        assert!(pattern.matches_normalized("SW1A 1AA"));
        assert!(pattern.matches_normalized("m1 1ae"));
        assert!(!pattern.matches_normalized("SW1A 1AAX"));
        assert!(!pattern.matches_normalized(""));
    }

    #[test]
    fn pattern_rejects_partial_matches() {
        let pattern = ValidationPattern::new(r"(?i)^[0-9]{7}[A-Z]{1,2}$").unwrap();
        assert!(pattern.is_match("1234567AB"));
        assert!(!pattern.is_match("01234567AB"));
        assert!(!pattern.is_match("1234567ABC"));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = ValidationPattern::new("^[A-Z").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPattern { .. }));
    }

    #[test]
    fn serde_roundtrip_keeps_source() {
        let pattern = ValidationPattern::new(UK_POSTCODE).unwrap();
        let json = serde_json::to_string(&pattern).unwrap();
        let back: ValidationPattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pattern);
        assert_eq!(back.as_str(), UK_POSTCODE);
    }

    #[test]
    fn deserialize_rejects_broken_regex() {
        assert!(serde_json::from_str::<ValidationPattern>("\"(unclosed\"").is_err());
    }
}
