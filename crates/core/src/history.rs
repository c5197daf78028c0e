//! Per-patient medical history.

use crate::appointment::Appointment;
use crate::patient::Patient;
use crate::prescription::Prescription;
use std::sync::Arc;

/// Append-only log of one patient's appointments and prescriptions.
///
/// Histories are created by the registry when the patient registers and can only be
/// extended by it.
#[derive(Debug, Clone)]
pub struct MedicalHistory {
    patient: Arc<Patient>,
    appointments: Vec<Appointment>,
    prescriptions: Vec<Prescription>,
}

impl MedicalHistory {
    pub(crate) fn new(patient: Arc<Patient>) -> Self {
        Self {
            patient,
            appointments: Vec::new(),
            prescriptions: Vec::new(),
        }
    }

    pub(crate) fn record_appointment(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
    }

    pub(crate) fn record_prescription(&mut self, prescription: Prescription) {
        self.prescriptions.push(prescription);
    }

    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn prescriptions(&self) -> &[Prescription] {
        &self.prescriptions
    }
}

impl std::fmt::Display for MedicalHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Medical history of {}", self.patient)?;
        writeln!(f, "Appointments:")?;
        for appointment in &self.appointments {
            writeln!(f, "{appointment}")?;
        }
        write!(f, "Prescriptions:")?;
        for prescription in &self.prescriptions {
            write!(f, "\n{prescription}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_renders_headers_only() {
        let patient = Arc::new(Patient::new("Ana Lopez", "87654321", "02/02/2000").unwrap());
        let history = MedicalHistory::new(patient);

        assert!(history.appointments().is_empty());
        assert!(history.prescriptions().is_empty());
        assert_eq!(
            history.to_string(),
            "Medical history of Ana Lopez (ID: 87654321)\nAppointments:\nPrescriptions:"
        );
    }
}
