//! # Clinic Core
//!
//! Scheduling and records engine for a single clinic.
//!
//! The [`ClinicRegistry`] owns every patient, physician, appointment and medical
//! history, and is the only place where cross-entity rules are enforced:
//! - patient ids and physician licenses are unique
//! - a physician's specialty names are unique, ignoring case
//! - a booking must match a specialty the physician practises on that weekday
//! - a physician holds at most one appointment per exact timestamp
//!
//! **No I/O**: the crate performs no parsing of free text, persistence or network
//! access. Adapters such as `api-rest` hand it already-parsed values.

pub mod appointment;
pub mod error;
pub mod history;
pub mod patient;
pub mod physician;
pub mod prescription;
pub mod registry;
pub mod shared;
pub mod specialty;
pub mod validation;
pub mod weekday;

pub use appointment::{Appointment, Slot};
pub use error::{ClinicError, ClinicResult, ErrorKind, UnavailableReason};
pub use history::MedicalHistory;
pub use patient::Patient;
pub use physician::Physician;
pub use prescription::Prescription;
pub use registry::ClinicRegistry;
pub use shared::SharedRegistry;
pub use specialty::Specialty;
pub use weekday::Weekday;

pub use clinic_types::{LicenseNumber, NonEmptyText, PatientId};
