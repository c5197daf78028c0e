//! The clinic registry: the single owner of all clinic state.
//!
//! Every operation validates completely before touching any collection, so a failed
//! call leaves the registry exactly as it was.
//!
//! ## Booking
//!
//! [`ClinicRegistry::book_appointment`] is a two-gate check:
//!
//! 1. **Capability**: the physician must practise the requested specialty on the
//!    weekday the timestamp falls on.
//! 2. **Collision**: no existing appointment may hold the same physician at exactly the
//!    same timestamp. Appointments are instants, not ranges, so there is no overlap
//!    window.

use crate::appointment::{Appointment, Slot};
use crate::error::{ClinicError, ClinicResult};
use crate::history::MedicalHistory;
use crate::patient::Patient;
use crate::physician::Physician;
use crate::prescription::{parse_medications, Prescription};
use crate::specialty::Specialty;
use crate::validation::required_text;
use crate::weekday::Weekday;
use chrono::{NaiveDateTime, Utc};
use clinic_types::{LicenseNumber, PatientId};
use std::collections::BTreeMap;
use std::sync::Arc;

/// In-memory registry of patients, physicians, appointments and medical histories.
///
/// Construct one explicitly and pass it to whoever needs it; independent registries
/// never share state.
#[derive(Debug, Default)]
pub struct ClinicRegistry {
    patients: BTreeMap<PatientId, Arc<Patient>>,
    physicians: BTreeMap<LicenseNumber, Arc<Physician>>,
    appointments: Vec<Appointment>,
    histories: BTreeMap<PatientId, MedicalHistory>,
}

impl ClinicRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a patient and opens an empty medical history for them.
    ///
    /// # Errors
    ///
    /// - `ClinicError::Validation` if any field is empty.
    /// - `ClinicError::DuplicateRecord` if the id is already registered.
    pub fn register_patient(
        &mut self,
        name: impl AsRef<str>,
        id: impl AsRef<str>,
        birth_date: impl AsRef<str>,
    ) -> ClinicResult<Arc<Patient>> {
        let patient = Patient::new(name, id, birth_date)?;
        if self.patients.contains_key(patient.id()) {
            return Err(ClinicError::DuplicateRecord(format!(
                "patient {} is already registered",
                patient.id()
            )));
        }

        let id = patient.id().clone();
        let patient = Arc::new(patient);
        self.patients.insert(id.clone(), patient.clone());
        self.histories
            .insert(id.clone(), MedicalHistory::new(patient.clone()));

        tracing::info!("registered patient {}", id);
        Ok(patient)
    }

    /// Registers a physician with no specialties.
    ///
    /// # Errors
    ///
    /// - `ClinicError::Validation` if the name or license is empty.
    /// - `ClinicError::DuplicateRecord` if the license is already registered.
    pub fn register_physician(
        &mut self,
        name: impl AsRef<str>,
        license: impl AsRef<str>,
    ) -> ClinicResult<Arc<Physician>> {
        let physician = Physician::new(name, license)?;
        if self.physicians.contains_key(physician.license()) {
            return Err(ClinicError::DuplicateRecord(format!(
                "physician {} is already registered",
                physician.license()
            )));
        }

        let license = physician.license().clone();
        let physician = Arc::new(physician);
        self.physicians.insert(license.clone(), physician.clone());

        tracing::info!("registered physician {}", license);
        Ok(physician)
    }

    /// Adds a specialty to a registered physician.
    ///
    /// The physician record is updated in place, so appointments and prescriptions
    /// already naming the physician see the new specialty too. They stay valid.
    ///
    /// # Errors
    ///
    /// - `ClinicError::PhysicianUnavailable` if the license is not registered.
    /// - `ClinicError::InvalidSpecialty` if the name is blank or no valid weekday is given.
    /// - `ClinicError::DuplicateRecord` if the physician already has that specialty.
    pub fn add_specialty<I, S>(
        &mut self,
        license: &LicenseNumber,
        name: impl AsRef<str>,
        weekdays: I,
    ) -> ClinicResult<Arc<Physician>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let physician = self.physician_arc(license)?;
        let specialty = Specialty::new(name, weekdays)?;
        physician.add_specialty(specialty)?;

        tracing::info!("added specialty to physician {}", license);
        Ok(physician)
    }

    /// Books an appointment.
    ///
    /// The appointment keeps `specialty` as the caller spelled it; matching against
    /// the physician's specialties ignores case.
    ///
    /// # Errors
    ///
    /// - `ClinicError::PatientNotFound` if the patient is not registered.
    /// - `ClinicError::PhysicianUnavailable` if the license is not registered, or the
    ///   physician does not practise `specialty` on the weekday of `at`.
    /// - `ClinicError::SlotTaken` if the physician already has an appointment at `at`.
    pub fn book_appointment(
        &mut self,
        patient_id: &PatientId,
        license: &LicenseNumber,
        specialty: &str,
        at: NaiveDateTime,
    ) -> ClinicResult<Appointment> {
        let patient = self.patient_arc(patient_id)?;
        let physician = self.physician_arc(license)?;

        let weekday = Weekday::of(&at);
        physician
            .practice(specialty, weekday)
            .map_err(|reason| ClinicError::PhysicianUnavailable {
                license: license.clone(),
                reason,
            })?;
        let specialty = required_text("specialty", specialty)?;

        let slot = Slot {
            license: license.clone(),
            at,
        };
        if self.appointments.iter().any(|a| a.slot() == slot) {
            return Err(ClinicError::SlotTaken {
                license: slot.license,
                at: slot.at,
            });
        }

        let history = self
            .histories
            .get_mut(patient_id)
            .ok_or_else(|| ClinicError::PatientNotFound(patient_id.clone()))?;
        let appointment = Appointment::new(patient, physician, at, specialty);
        history.record_appointment(appointment.clone());
        self.appointments.push(appointment.clone());

        tracing::info!(
            "booked patient {} with physician {} at {} ({})",
            patient_id,
            license,
            at,
            weekday
        );
        Ok(appointment)
    }

    /// Issues a prescription, stamped with the current time.
    ///
    /// No appointment is required beforehand.
    ///
    /// # Errors
    ///
    /// - `ClinicError::InvalidPrescription` if `medications` is empty or has a blank
    ///   entry. This is checked first, whatever the patient or license.
    /// - `ClinicError::PatientNotFound` / `ClinicError::PhysicianUnavailable` for
    ///   unknown ids.
    pub fn issue_prescription<I, S>(
        &mut self,
        patient_id: &PatientId,
        license: &LicenseNumber,
        medications: I,
    ) -> ClinicResult<Prescription>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let medications = parse_medications(medications)?;
        let patient = self.patient_arc(patient_id)?;
        let physician = self.physician_arc(license)?;

        let prescription = Prescription::new(patient, physician, medications, Utc::now());
        self.history_mut(patient_id)?
            .record_prescription(prescription.clone());

        tracing::info!(
            "issued prescription for patient {} by physician {}",
            patient_id,
            license
        );
        Ok(prescription)
    }

    /// Snapshot of all patients, ordered by id.
    pub fn list_patients(&self) -> Vec<Arc<Patient>> {
        self.patients.values().cloned().collect()
    }

    /// Snapshot of all physicians, ordered by license.
    pub fn list_physicians(&self) -> Vec<Arc<Physician>> {
        self.physicians.values().cloned().collect()
    }

    /// Snapshot of all appointments in booking order.
    pub fn list_appointments(&self) -> Vec<Appointment> {
        self.appointments.clone()
    }

    /// Snapshot of one physician's appointments in booking order.
    pub fn appointments_for(&self, license: &LicenseNumber) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.physician().license() == license)
            .cloned()
            .collect()
    }

    /// # Errors
    ///
    /// Returns `ClinicError::PhysicianUnavailable` if the license is not registered.
    pub fn physician_by_license(&self, license: &LicenseNumber) -> ClinicResult<&Physician> {
        self.physicians
            .get(license)
            .map(|p| p.as_ref())
            .ok_or_else(|| ClinicError::unknown_license(license))
    }

    /// # Errors
    ///
    /// Returns `ClinicError::PatientNotFound` if the patient is not registered.
    pub fn medical_history(&self, patient_id: &PatientId) -> ClinicResult<&MedicalHistory> {
        self.histories
            .get(patient_id)
            .ok_or_else(|| ClinicError::PatientNotFound(patient_id.clone()))
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    pub fn physician_count(&self) -> usize {
        self.physicians.len()
    }

    pub fn appointment_count(&self) -> usize {
        self.appointments.len()
    }

    fn patient_arc(&self, patient_id: &PatientId) -> ClinicResult<Arc<Patient>> {
        self.patients
            .get(patient_id)
            .cloned()
            .ok_or_else(|| ClinicError::PatientNotFound(patient_id.clone()))
    }

    fn physician_arc(&self, license: &LicenseNumber) -> ClinicResult<Arc<Physician>> {
        self.physicians
            .get(license)
            .cloned()
            .ok_or_else(|| ClinicError::unknown_license(license))
    }

    fn history_mut(&mut self, patient_id: &PatientId) -> ClinicResult<&mut MedicalHistory> {
        self.histories
            .get_mut(patient_id)
            .ok_or_else(|| ClinicError::PatientNotFound(patient_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnavailableReason;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn pid(id: &str) -> PatientId {
        PatientId::parse(id).unwrap()
    }

    fn lic(license: &str) -> LicenseNumber {
        LicenseNumber::parse(license).unwrap()
    }

    fn test_registry() -> ClinicRegistry {
        let mut registry = ClinicRegistry::new();
        registry
            .register_patient("Juan Perez", "12345678", "01/01/1990")
            .expect("register patient");
        registry
            .register_physician("Dra. Gomez", "M123")
            .expect("register physician");
        registry
            .add_specialty(&lic("M123"), "Pediatría", ["monday", "wednesday"])
            .expect("add specialty");
        registry
    }

    #[test]
    fn registering_patient_opens_empty_history() {
        let registry = test_registry();
        let history = registry
            .medical_history(&pid("12345678"))
            .expect("history exists");
        assert_eq!(history.patient().name().as_str(), "Juan Perez");
        assert!(history.appointments().is_empty());
    }

    #[test]
    fn duplicate_physician_is_rejected() {
        let mut registry = test_registry();
        let err = registry
            .register_physician("Otra", "M123")
            .expect_err("duplicate license");
        assert!(matches!(err, ClinicError::DuplicateRecord(_)));
        assert_eq!(registry.physician_count(), 1);
    }

    #[test]
    fn add_specialty_to_unknown_physician_fails() {
        let mut registry = test_registry();
        let err = registry
            .add_specialty(&lic("Z9"), "Cardiology", ["friday"])
            .expect_err("unknown physician");
        assert!(matches!(
            err,
            ClinicError::PhysicianUnavailable {
                reason: UnavailableReason::UnknownLicense,
                ..
            }
        ));
    }

    #[test]
    fn failed_specialty_add_leaves_physician_untouched() {
        let mut registry = test_registry();
        let before = registry.physician_by_license(&lic("M123")).unwrap().to_string();

        let err = registry
            .add_specialty(&lic("M123"), "pediatría", ["friday"])
            .expect_err("duplicate specialty");
        assert!(matches!(err, ClinicError::DuplicateRecord(_)));
        assert!(registry
            .add_specialty(&lic("M123"), "Cardiology", [" "])
            .is_err());

        assert_eq!(
            registry.physician_by_license(&lic("M123")).unwrap().to_string(),
            before
        );
    }

    #[test]
    fn booking_stores_the_requested_specialty_name() {
        let mut registry = test_registry();
        let appointment = registry
            .book_appointment(&pid("12345678"), &lic("M123"), "PEDIATRÍA", at(11, 9))
            .expect("wednesday booking");
        assert_eq!(appointment.specialty().as_str(), "PEDIATRÍA");
        assert!(appointment.to_string().ends_with("- PEDIATRÍA on 2025-06-11 09:00:00"));
        assert_eq!(registry.appointments_for(&lic("M123")).len(), 1);
    }

    #[test]
    fn booking_checks_patient_before_physician() {
        let mut registry = test_registry();
        let err = registry
            .book_appointment(&pid("000"), &lic("NOPE"), "Pediatría", at(9, 10))
            .expect_err("unknown patient");
        assert!(matches!(err, ClinicError::PatientNotFound(_)));

        let err = registry
            .book_appointment(&pid("12345678"), &lic("NOPE"), "Pediatría", at(9, 10))
            .expect_err("unknown physician");
        assert!(matches!(err, ClinicError::PhysicianUnavailable { .. }));
    }

    #[test]
    fn unknown_specialty_is_reported_as_unavailable() {
        let mut registry = test_registry();
        let err = registry
            .book_appointment(&pid("12345678"), &lic("M123"), "Cardiology", at(9, 10))
            .expect_err("specialty not offered");
        match err {
            ClinicError::PhysicianUnavailable { reason, .. } => assert_eq!(
                reason,
                UnavailableReason::SpecialtyNotOffered {
                    specialty: "Cardiology".into()
                }
            ),
            other => panic!("expected PhysicianUnavailable error, got {other:?}"),
        }
        assert_eq!(registry.appointment_count(), 0);
    }

    #[test]
    fn same_time_with_another_physician_is_allowed() {
        let mut registry = test_registry();
        registry.register_physician("Dr. Ruiz", "M456").unwrap();
        registry
            .add_specialty(&lic("M456"), "Pediatría", ["monday"])
            .unwrap();

        registry
            .book_appointment(&pid("12345678"), &lic("M123"), "Pediatría", at(9, 10))
            .expect("first physician");
        registry
            .book_appointment(&pid("12345678"), &lic("M456"), "Pediatría", at(9, 10))
            .expect("second physician");
        assert_eq!(registry.appointment_count(), 2);
    }

    #[test]
    fn later_specialty_is_visible_through_existing_appointment() {
        let mut registry = test_registry();
        let booked = registry
            .book_appointment(&pid("12345678"), &lic("M123"), "Pediatría", at(9, 10))
            .unwrap();
        registry
            .issue_prescription(&pid("12345678"), &lic("M123"), ["Paracetamol"])
            .unwrap();

        registry
            .add_specialty(&lic("M123"), "Clínica", ["friday"])
            .unwrap();

        let current = registry
            .physician_by_license(&lic("M123"))
            .unwrap()
            .to_string();
        assert!(current.ends_with("Pediatría (Days: monday, wednesday), Clínica (Days: friday)"));

        assert_eq!(booked.physician().specialties().len(), 2);
        let stored = registry.list_appointments();
        assert_eq!(stored[0].physician().to_string(), current);
        assert_eq!(stored[0].specialty().as_str(), "Pediatría");

        let history = registry.medical_history(&pid("12345678")).unwrap();
        assert_eq!(history.appointments()[0].physician().to_string(), current);
        assert_eq!(history.prescriptions()[0].physician().to_string(), current);
        assert_eq!(registry.appointment_count(), 1);
    }

    #[test]
    fn prescription_is_stamped_and_recorded() {
        let mut registry = test_registry();
        let before = Utc::now();
        let prescription = registry
            .issue_prescription(&pid("12345678"), &lic("M123"), ["Paracetamol"])
            .expect("prescription");
        let after = Utc::now();

        assert!(prescription.issued_at() >= before && prescription.issued_at() <= after);
        let history = registry.medical_history(&pid("12345678")).unwrap();
        assert_eq!(history.prescriptions().len(), 1);
        assert!(history.appointments().is_empty());
    }

    #[test]
    fn empty_prescription_wins_over_unknown_ids() {
        let mut registry = test_registry();
        let none: Vec<&str> = Vec::new();
        let err = registry
            .issue_prescription(&pid("nobody"), &lic("nobody"), none)
            .expect_err("empty medications");
        assert!(matches!(err, ClinicError::InvalidPrescription(_)));
    }

    #[test]
    fn prescription_for_unknown_physician_fails() {
        let mut registry = test_registry();
        let err = registry
            .issue_prescription(&pid("12345678"), &lic("X"), ["Ibuprofeno"])
            .expect_err("unknown physician");
        assert!(matches!(err, ClinicError::PhysicianUnavailable { .. }));
        assert!(registry
            .medical_history(&pid("12345678"))
            .unwrap()
            .prescriptions()
            .is_empty());
    }

    #[test]
    fn listings_are_ordered_by_key() {
        let mut registry = test_registry();
        registry
            .register_patient("Ana Lopez", "00000001", "02/02/2000")
            .unwrap();
        let ids: Vec<String> = registry
            .list_patients()
            .iter()
            .map(|p| p.id().to_string())
            .collect();
        assert_eq!(ids, vec!["00000001", "12345678"]);
    }
}
