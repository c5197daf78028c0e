//! Input validation utilities.
//!
//! Raw strings handed to the registry are converted to validated types here so that
//! every constructor reports the offending field in the same way.

use crate::{ClinicError, ClinicResult};
use clinic_types::{LicenseNumber, NonEmptyText, PatientId};

/// Requires `value` to contain visible text, naming `field` in the error.
///
/// # Errors
///
/// Returns `ClinicError::Validation` for empty or whitespace-only input.
pub fn required_text(field: &str, value: impl AsRef<str>) -> ClinicResult<NonEmptyText> {
    NonEmptyText::new(value).map_err(|_| ClinicError::Validation(format!("{field} is required")))
}

pub fn required_patient_id(value: impl AsRef<str>) -> ClinicResult<PatientId> {
    PatientId::parse(value).map_err(|_| ClinicError::Validation("patient id is required".into()))
}

pub fn required_license(value: impl AsRef<str>) -> ClinicResult<LicenseNumber> {
    LicenseNumber::parse(value)
        .map_err(|_| ClinicError::Validation("license number is required".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_names_the_field() {
        let err = required_text("birth date", "  ").expect_err("blank");
        match err {
            ClinicError::Validation(msg) => assert_eq!(msg, "birth date is required"),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn required_keys_accept_padded_values() {
        assert_eq!(required_patient_id(" 42 ").unwrap().as_str(), "42");
        assert_eq!(required_license("M1").unwrap().as_str(), "M1");
        assert!(required_license("").is_err());
    }
}
