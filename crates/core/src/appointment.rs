//! Booked appointments.

use crate::patient::Patient;
use crate::physician::Physician;
use chrono::NaiveDateTime;
use clinic_types::{LicenseNumber, NonEmptyText};
use std::sync::Arc;

/// A physician at an exact instant. At most one appointment may occupy a slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slot {
    pub license: LicenseNumber,
    pub at: NaiveDateTime,
}

/// An immutable booking of a patient with a physician for one specialty.
///
/// Patient and physician are shared with the registry, not copied. The stored
/// specialty is the name as requested at booking time.
#[derive(Debug, Clone)]
pub struct Appointment {
    patient: Arc<Patient>,
    physician: Arc<Physician>,
    at: NaiveDateTime,
    specialty: NonEmptyText,
}

impl Appointment {
    pub(crate) fn new(
        patient: Arc<Patient>,
        physician: Arc<Physician>,
        at: NaiveDateTime,
        specialty: NonEmptyText,
    ) -> Self {
        Self {
            patient,
            physician,
            at,
            specialty,
        }
    }

    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    pub fn physician(&self) -> &Physician {
        &self.physician
    }

    pub fn at(&self) -> NaiveDateTime {
        self.at
    }

    pub fn specialty(&self) -> &NonEmptyText {
        &self.specialty
    }

    pub fn slot(&self) -> Slot {
        Slot {
            license: self.physician.license().clone(),
            at: self.at,
        }
    }
}

impl std::fmt::Display for Appointment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Appointment: {} with {} - {} on {}",
            self.patient, self.physician, self.specialty, self.at
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specialty::Specialty;
    use chrono::NaiveDate;

    fn monday_ten() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 9)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn appointment() -> Appointment {
        let patient = Arc::new(Patient::new("Juan Perez", "12345678", "01/01/1990").unwrap());
        let physician = Physician::new("Dra. Gomez", "M123").unwrap();
        physician
            .add_specialty(Specialty::new("Pediatría", ["monday"]).unwrap())
            .unwrap();
        Appointment::new(
            patient,
            Arc::new(physician),
            monday_ten(),
            NonEmptyText::new("Pediatría").unwrap(),
        )
    }

    #[test]
    fn slot_is_the_exact_instant() {
        let slot = appointment().slot();
        let license = LicenseNumber::parse("M123").unwrap();

        assert_eq!(
            slot,
            Slot {
                license: license.clone(),
                at: monday_ten()
            }
        );
        assert_ne!(
            slot,
            Slot {
                license,
                at: monday_ten() + chrono::Duration::minutes(1)
            }
        );
        assert_ne!(
            slot,
            Slot {
                license: LicenseNumber::parse("M999").unwrap(),
                at: monday_ten()
            }
        );
    }

    #[test]
    fn renders_patient_physician_and_time() {
        assert_eq!(
            appointment().to_string(),
            "Appointment: Juan Perez (ID: 12345678) with Dra. Gomez (License: M123) - \
             Specialties: Pediatría (Days: monday) - Pediatría on 2025-06-09 10:00:00"
        );
    }
}
