//! JSON request and response bodies.
//!
//! Requests carry raw strings; validation happens in `clinic-core` so that every
//! rejection surfaces with the same error kinds as a direct library call.

use chrono::{DateTime, NaiveDateTime, Utc};
use clinic_core::{
    Appointment, MedicalHistory, Patient, Physician, Prescription, Specialty, Weekday,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    /// Stable error kind, e.g. `slot_taken`.
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePatientReq {
    pub name: String,
    pub id: String,
    pub birth_date: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PatientRes {
    pub id: String,
    pub name: String,
    pub birth_date: String,
    pub display: String,
}

impl From<&Patient> for PatientRes {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id().to_string(),
            name: patient.name().to_string(),
            birth_date: patient.birth_date().to_string(),
            display: patient.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListPatientsRes {
    pub patients: Vec<PatientRes>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePhysicianReq {
    pub name: String,
    pub license: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddSpecialtyReq {
    pub name: String,
    /// Weekday names, any case. Blank entries are ignored; any other name that is
    /// not an English weekday rejects the request.
    pub weekdays: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SpecialtyRes {
    pub name: String,
    /// Lowercase English weekday names, in the order first given.
    #[schema(value_type = Vec<String>, example = json!(["monday", "wednesday"]))]
    pub weekdays: Vec<Weekday>,
}

impl From<&Specialty> for SpecialtyRes {
    fn from(specialty: &Specialty) -> Self {
        Self {
            name: specialty.name().to_string(),
            weekdays: specialty.weekdays().iter().copied().collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PhysicianRes {
    pub license: String,
    pub name: String,
    pub specialties: Vec<SpecialtyRes>,
    pub display: String,
}

impl From<&Physician> for PhysicianRes {
    fn from(physician: &Physician) -> Self {
        Self {
            license: physician.license().to_string(),
            name: physician.name().to_string(),
            specialties: physician.specialties().iter().map(SpecialtyRes::from).collect(),
            display: physician.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListPhysiciansRes {
    pub physicians: Vec<PhysicianRes>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookAppointmentReq {
    pub patient_id: String,
    pub license: String,
    pub specialty: String,
    /// Local clinic time, e.g. `2025-06-09T10:00:00`.
    pub at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AppointmentRes {
    pub patient_id: String,
    pub license: String,
    pub specialty: String,
    pub at: NaiveDateTime,
    #[schema(value_type = String, example = "monday")]
    pub weekday: Weekday,
    pub display: String,
}

impl From<&Appointment> for AppointmentRes {
    fn from(appointment: &Appointment) -> Self {
        Self {
            patient_id: appointment.patient().id().to_string(),
            license: appointment.physician().license().to_string(),
            specialty: appointment.specialty().to_string(),
            at: appointment.at(),
            weekday: Weekday::of(&appointment.at()),
            display: appointment.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListAppointmentsRes {
    pub appointments: Vec<AppointmentRes>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IssuePrescriptionReq {
    pub patient_id: String,
    pub license: String,
    pub medications: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PrescriptionRes {
    pub patient_id: String,
    pub license: String,
    pub medications: Vec<String>,
    pub issued_at: DateTime<Utc>,
}

impl From<&Prescription> for PrescriptionRes {
    fn from(prescription: &Prescription) -> Self {
        Self {
            patient_id: prescription.patient().id().to_string(),
            license: prescription.physician().license().to_string(),
            medications: prescription
                .medications()
                .iter()
                .map(|m| m.to_string())
                .collect(),
            issued_at: prescription.issued_at(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MedicalHistoryRes {
    pub patient: PatientRes,
    pub appointments: Vec<AppointmentRes>,
    pub prescriptions: Vec<PrescriptionRes>,
}

impl From<&MedicalHistory> for MedicalHistoryRes {
    fn from(history: &MedicalHistory) -> Self {
        Self {
            patient: PatientRes::from(history.patient()),
            appointments: history.appointments().iter().map(AppointmentRes::from).collect(),
            prescriptions: history
                .prescriptions()
                .iter()
                .map(PrescriptionRes::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn specialty_weekdays_serialize_as_lowercase_names() {
        let specialty = Specialty::new("Pediatría", ["Wednesday", "MONDAY"]).unwrap();
        let body = serde_json::to_value(SpecialtyRes::from(&specialty)).unwrap();
        assert_eq!(
            body,
            json!({"name": "Pediatría", "weekdays": ["wednesday", "monday"]})
        );
    }

    #[test]
    fn weekdays_deserialize_back_into_the_enum() {
        let res: SpecialtyRes =
            serde_json::from_value(json!({"name": "Clínica", "weekdays": ["friday"]})).unwrap();
        assert_eq!(res.weekdays, vec![Weekday::Friday]);
    }
}
