//! Registered patients.

use crate::validation::{required_patient_id, required_text};
use crate::ClinicResult;
use clinic_types::{NonEmptyText, PatientId};

/// An immutable patient record, keyed by its [`PatientId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    name: NonEmptyText,
    id: PatientId,
    birth_date: NonEmptyText,
}

impl Patient {
    /// Builds a patient from raw field values.
    ///
    /// The birth date is kept as supplied; parsing it is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::Validation` if any field is empty.
    pub fn new(
        name: impl AsRef<str>,
        id: impl AsRef<str>,
        birth_date: impl AsRef<str>,
    ) -> ClinicResult<Self> {
        Ok(Self {
            name: required_text("patient name", name)?,
            id: required_patient_id(id)?,
            birth_date: required_text("birth date", birth_date)?,
        })
    }

    pub fn name(&self) -> &NonEmptyText {
        &self.name
    }

    pub fn id(&self) -> &PatientId {
        &self.id
    }

    pub fn birth_date(&self) -> &NonEmptyText {
        &self.birth_date
    }
}

impl std::fmt::Display for Patient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClinicError;

    #[test]
    fn renders_name_and_id() {
        let patient = Patient::new("Juan Perez", "12345678", "01/01/1990").unwrap();
        assert_eq!(patient.to_string(), "Juan Perez (ID: 12345678)");
        assert_eq!(patient.birth_date().as_str(), "01/01/1990");
    }

    #[test]
    fn rejects_each_missing_field() {
        for (name, id, birth) in [("", "1", "x"), ("A", " ", "x"), ("A", "1", "")] {
            let err = Patient::new(name, id, birth).expect_err("missing field");
            assert!(matches!(err, ClinicError::Validation(_)));
        }
    }
}
