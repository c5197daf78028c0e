use crate::weekday::Weekday;
use chrono::NaiveDateTime;
use clinic_types::{LicenseNumber, PatientId};

/// Why a physician could not take a booking.
///
/// All three causes surface as [`ClinicError::PhysicianUnavailable`]; the reason only
/// refines the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    UnknownLicense,
    SpecialtyNotOffered { specialty: String },
    NotOnWeekday { specialty: String, weekday: Weekday },
}

impl std::fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLicense => f.write_str("physician not found"),
            Self::SpecialtyNotOffered { specialty } => {
                write!(f, "physician does not practise {specialty}")
            }
            Self::NotOnWeekday { specialty, weekday } => {
                write!(f, "physician does not practise {specialty} on {weekday}")
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("duplicate record: {0}")]
    DuplicateRecord(String),
    #[error("invalid specialty: {0}")]
    InvalidSpecialty(String),
    #[error("patient not found: {0}")]
    PatientNotFound(PatientId),
    #[error("physician {license} unavailable: {reason}")]
    PhysicianUnavailable {
        license: LicenseNumber,
        reason: UnavailableReason,
    },
    #[error("physician {license} already has an appointment at {at}")]
    SlotTaken {
        license: LicenseNumber,
        at: NaiveDateTime,
    },
    #[error("invalid prescription: {0}")]
    InvalidPrescription(String),
}

/// The stable error taxonomy exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    DuplicateRecord,
    InvalidSpecialty,
    PatientNotFound,
    PhysicianUnavailable,
    SlotTaken,
    InvalidPrescription,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::DuplicateRecord => "duplicate_record",
            Self::InvalidSpecialty => "invalid_specialty",
            Self::PatientNotFound => "patient_not_found",
            Self::PhysicianUnavailable => "physician_unavailable",
            Self::SlotTaken => "slot_taken",
            Self::InvalidPrescription => "invalid_prescription",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ClinicError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::DuplicateRecord(_) => ErrorKind::DuplicateRecord,
            Self::InvalidSpecialty(_) => ErrorKind::InvalidSpecialty,
            Self::PatientNotFound(_) => ErrorKind::PatientNotFound,
            Self::PhysicianUnavailable { .. } => ErrorKind::PhysicianUnavailable,
            Self::SlotTaken { .. } => ErrorKind::SlotTaken,
            Self::InvalidPrescription(_) => ErrorKind::InvalidPrescription,
        }
    }

    pub(crate) fn unknown_license(license: &LicenseNumber) -> Self {
        Self::PhysicianUnavailable {
            license: license.clone(),
            reason: UnavailableReason::UnknownLicense,
        }
    }
}

pub type ClinicResult<T> = std::result::Result<T, ClinicError>;
