//! Validated primitives shared across the clinic crates.
//!
//! Everything here is checked once at construction time, so holders of these
//! values never need to re-validate them:
//! - [`NonEmptyText`] for free text that must carry at least one visible character
//! - [`PatientId`] and [`LicenseNumber`] for the registry keys
//!
//! The two identifier types wrap the same kind of string but are deliberately
//! distinct, so a physician license cannot be passed where a patient id is expected.

use std::borrow::Borrow;
use std::str::FromStr;

/// Errors that can occur when creating validated text types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("text cannot be empty")]
    Empty,
}

/// A string type that guarantees non-empty content.
///
/// The input is trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares against `other` ignoring case.
    ///
    /// Uses full Unicode lowercasing so that names such as "Pediatría" and
    /// "PEDIATRÍA" compare equal.
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.trim().to_lowercase()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for NonEmptyText {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Declares an opaque registry key backed by [`NonEmptyText`].
macro_rules! registry_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(NonEmptyText);

        impl $name {
            /// Parses a key, trimming surrounding whitespace.
            ///
            /// # Errors
            ///
            /// Returns `TextError::Empty` for blank input.
            pub fn parse(input: impl AsRef<str>) -> Result<Self, TextError> {
                NonEmptyText::new(input).map(Self)
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                self.0.as_str()
            }
        }

        impl FromStr for $name {
            type Err = TextError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<$name> for NonEmptyText {
            fn from(key: $name) -> Self {
                key.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                self.0.serialize(serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                NonEmptyText::deserialize(deserializer).map(Self)
            }
        }
    };
}

registry_key!(
    /// Unique identifier of a registered patient (a national id number in practice).
    PatientId
);

registry_key!(
    /// Unique professional license number of a registered physician.
    LicenseNumber
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_input() {
        let text = NonEmptyText::new("  Juan Perez \n").expect("valid text");
        assert_eq!(text.as_str(), "Juan Perez");
    }

    #[test]
    fn non_empty_text_rejects_whitespace() {
        assert_eq!(NonEmptyText::new(" \t "), Err(TextError::Empty));
        assert_eq!(NonEmptyText::new(""), Err(TextError::Empty));
    }

    #[test]
    fn eq_ignore_case_handles_accented_names() {
        let text = NonEmptyText::new("Pediatría").unwrap();
        assert!(text.eq_ignore_case("PEDIATRÍA"));
        assert!(text.eq_ignore_case(" pediatría "));
        assert!(!text.eq_ignore_case("Cardiología"));
    }

    #[test]
    fn identifiers_render_their_inner_value() {
        let id = PatientId::parse(" 12345678 ").unwrap();
        let license = LicenseNumber::parse("M123").unwrap();
        assert_eq!(id.to_string(), "12345678");
        assert_eq!(license.as_str(), "M123");
    }

    #[test]
    fn identifiers_reject_blank_input() {
        assert!(PatientId::parse("   ").is_err());
        assert!("".parse::<LicenseNumber>().is_err());
    }

    #[test]
    fn deserialising_blank_key_fails() {
        let err = serde_json::from_str::<LicenseNumber>("\"  \"").expect_err("blank license");
        assert!(err.to_string().contains("empty"));

        let id: PatientId = serde_json::from_str("\"99\"").expect("valid id");
        assert_eq!(id.as_str(), "99");
    }
}
