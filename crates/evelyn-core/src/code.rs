//! # Code Newtypes
//!
//! Registry keys and product identifiers. Each is a distinct type, so a
//! product code cannot be looked up where a jurisdiction is expected.
//!
//! ## Validation
//!
//! - [`JurisdictionCode`]: exactly two uppercase ASCII letters (`UK`, `IE`).
//! - [`ProductCode`]: non-empty lowercase ASCII alphanumerics (`isa`, `sipp`).
//!
//! Both validate at construction and again when deserialized, so a YAML
//! registry cannot smuggle in a malformed key.

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ValidationError;

/// Routes string deserialization through the type's validating `new()`.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Jurisdiction codes
// ---------------------------------------------------------------------------

/// A two-letter jurisdiction code keying the registry.
///
/// Stored inline as two ASCII bytes, so the type is `Copy` and the two
/// supported jurisdictions are available as constants.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JurisdictionCode([u8; 2]);

impl_validating_deserialize!(JurisdictionCode);

impl JurisdictionCode {
    /// United Kingdom. Also the fallback when nothing else resolves.
    pub const UK: Self = Self(*b"UK");
    /// Ireland.
    pub const IE: Self = Self(*b"IE");

    /// Create a code from a string, requiring exactly two uppercase letters.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidJurisdictionCode`] for anything
    /// else, including lowercase input. Use [`JurisdictionCode::parse_lenient`]
    /// for user-supplied values that should be case-folded first.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        match value.as_bytes() {
            [a, b] if a.is_ascii_uppercase() && b.is_ascii_uppercase() => Ok(Self([*a, *b])),
            _ => Err(ValidationError::InvalidJurisdictionCode(value)),
        }
    }

    /// Upper-case the input, then validate it. Returns `None` when the
    /// result is not a well-formed code.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        Self::new(value.to_uppercase()).ok()
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII uppercase by construction.
        std::str::from_utf8(&self.0).unwrap_or("")
    }
}

impl Default for JurisdictionCode {
    fn default() -> Self {
        Self::UK
    }
}

impl std::fmt::Debug for JurisdictionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("JurisdictionCode").field(&self.as_str()).finish()
    }
}

impl std::fmt::Display for JurisdictionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JurisdictionCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for JurisdictionCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Product codes
// ---------------------------------------------------------------------------

/// An investment product identifier such as `isa`, `jisa`, `sipp`, `gia`
/// or `aim`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl_validating_deserialize!(ProductCode);

impl ProductCode {
    /// Create a product code, requiring non-empty lowercase alphanumerics.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidProductCode`] otherwise.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let well_formed = !value.is_empty()
            && value
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit());
        if !well_formed {
            return Err(ValidationError::InvalidProductCode(value));
        }
        Ok(Self(value))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against caller input.
    pub fn matches(&self, input: &str) -> bool {
        self.0 == input.to_lowercase()
    }
}

impl std::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jurisdiction_code_valid() {
        let code = JurisdictionCode::new("IE").unwrap();
        assert_eq!(code, JurisdictionCode::IE);
        assert_eq!(code.as_str(), "IE");
    }

    #[test]
    fn jurisdiction_code_rejects_malformed() {
        for bad in ["", "U", "UKX", "uk", "U1", "  ", "ÜK"] {
            assert!(JurisdictionCode::new(bad).is_err(), "{bad:?} accepted");
        }
    }

    #[test]
    fn jurisdiction_code_lenient_upper_cases() {
        assert_eq!(JurisdictionCode::parse_lenient("ie"), Some(JurisdictionCode::IE));
        assert_eq!(JurisdictionCode::parse_lenient("Uk"), Some(JurisdictionCode::UK));
        assert_eq!(JurisdictionCode::parse_lenient("usa"), None);
        assert_eq!(JurisdictionCode::parse_lenient(""), None);
    }

    #[test]
    fn jurisdiction_code_default_is_uk() {
        assert_eq!(JurisdictionCode::default(), JurisdictionCode::UK);
    }

    #[test]
    fn jurisdiction_code_display_and_from_str() {
        let code: JurisdictionCode = "UK".parse().unwrap();
        assert_eq!(format!("{code}"), "UK");
    }

    #[test]
    fn jurisdiction_code_serde_roundtrip() {
        let json = serde_json::to_string(&JurisdictionCode::IE).unwrap();
        assert_eq!(json, "\"IE\"");
        let back: JurisdictionCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, JurisdictionCode::IE);
    }

    #[test]
    fn jurisdiction_code_deserialize_rejects_lowercase() {
        let result: Result<JurisdictionCode, _> = serde_json::from_str("\"ie\"");
        assert!(result.is_err());
    }

    #[test]
    fn product_code_valid_and_matches_any_case() {
        let isa = ProductCode::new("isa").unwrap();
        assert!(isa.matches("isa"));
        assert!(isa.matches("ISA"));
        assert!(!isa.matches("jisa"));
    }

    #[test]
    fn product_code_rejects_malformed() {
        assert!(ProductCode::new("").is_err());
        assert!(ProductCode::new("ISA").is_err());
        assert!(ProductCode::new("stocks isa").is_err());
    }

    #[test]
    fn product_code_deserialize_validates() {
        let ok: ProductCode = serde_json::from_str("\"sipp\"").unwrap();
        assert_eq!(ok.as_str(), "sipp");
        assert!(serde_json::from_str::<ProductCode>("\"Sipp\"").is_err());
    }
}
