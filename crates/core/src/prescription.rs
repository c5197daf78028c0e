//! Issued prescriptions.

use crate::patient::Patient;
use crate::physician::Physician;
use crate::{ClinicError, ClinicResult};
use chrono::{DateTime, Utc};
use clinic_types::NonEmptyText;
use std::sync::Arc;

/// An immutable prescription stamped with the moment it was issued.
#[derive(Debug, Clone)]
pub struct Prescription {
    patient: Arc<Patient>,
    physician: Arc<Physician>,
    medications: Vec<NonEmptyText>,
    issued_at: DateTime<Utc>,
}

impl Prescription {
    pub(crate) fn new(
        patient: Arc<Patient>,
        physician: Arc<Physician>,
        medications: Vec<NonEmptyText>,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            patient,
            physician,
            medications,
            issued_at,
        }
    }

    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    pub fn physician(&self) -> &Physician {
        &self.physician
    }

    pub fn medications(&self) -> &[NonEmptyText] {
        &self.medications
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

/// Validates a medication list.
///
/// # Errors
///
/// Returns `ClinicError::InvalidPrescription` if the list is empty or any entry is blank.
pub(crate) fn parse_medications<I, S>(medications: I) -> ClinicResult<Vec<NonEmptyText>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let medications = medications
        .into_iter()
        .map(|m| {
            NonEmptyText::new(m).map_err(|_| {
                ClinicError::InvalidPrescription("medication names cannot be blank".into())
            })
        })
        .collect::<ClinicResult<Vec<_>>>()?;

    if medications.is_empty() {
        return Err(ClinicError::InvalidPrescription(
            "at least one medication is required".into(),
        ));
    }
    Ok(medications)
}

impl std::fmt::Display for Prescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let meds: Vec<&str> = self.medications.iter().map(|m| m.as_str()).collect();
        write!(
            f,
            "Prescription for {} by {} on {}: {}",
            self.patient,
            self.physician,
            self.issued_at.format("%Y-%m-%d %H:%M:%S"),
            meds.join(", ")
        )
    }
}
