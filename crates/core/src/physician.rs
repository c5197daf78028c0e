//! Physician profiles and specialty matching.

use crate::error::UnavailableReason;
use crate::specialty::Specialty;
use crate::validation::{required_license, required_text};
use crate::weekday::Weekday;
use crate::{ClinicError, ClinicResult};
use clinic_types::{LicenseNumber, NonEmptyText};
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

/// A registered physician and the specialties they practise.
///
/// One record is shared by the registry and every appointment or prescription that
/// names the physician, so a specialty added later is visible through all of them.
/// Specialties are only ever appended, through [`Physician::add_specialty`].
#[derive(Debug)]
pub struct Physician {
    name: NonEmptyText,
    license: LicenseNumber,
    specialties: RwLock<Vec<Specialty>>,
}

impl Physician {
    /// Builds a physician with no specialties.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::Validation` if the name or license is empty.
    pub fn new(name: impl AsRef<str>, license: impl AsRef<str>) -> ClinicResult<Self> {
        Ok(Self {
            name: required_text("physician name", name)?,
            license: required_license(license)?,
            specialties: RwLock::new(Vec::new()),
        })
    }

    pub fn name(&self) -> &NonEmptyText {
        &self.name
    }

    pub fn license(&self) -> &LicenseNumber {
        &self.license
    }

    /// Snapshot of the specialties in insertion order.
    pub fn specialties(&self) -> Vec<Specialty> {
        self.read().clone()
    }

    /// Appends a specialty.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::DuplicateRecord` if a specialty with the same name
    /// (ignoring case) is already present.
    pub(crate) fn add_specialty(&self, specialty: Specialty) -> ClinicResult<()> {
        let mut specialties = self
            .specialties
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if specialties
            .iter()
            .any(|s| s.is_named(specialty.name().as_str()))
        {
            return Err(ClinicError::DuplicateRecord(format!(
                "physician {} already practises {}",
                self.license,
                specialty.name()
            )));
        }
        specialties.push(specialty);
        Ok(())
    }

    /// First specialty, in insertion order, practised on `weekday`.
    pub fn specialty_for_day(&self, weekday: Weekday) -> Option<Specialty> {
        self.read().iter().find(|s| s.offered_on(weekday)).cloned()
    }

    /// Finds the specialty named `name` that is practised on `weekday`.
    ///
    /// On failure the reason tells apart a specialty that is not offered at all from
    /// one that is offered on other days.
    pub fn practice(&self, name: &str, weekday: Weekday) -> Result<Specialty, UnavailableReason> {
        let specialties = self.read();
        if let Some(found) = specialties
            .iter()
            .find(|s| s.is_named(name) && s.offered_on(weekday))
        {
            return Ok(found.clone());
        }

        match specialties.iter().find(|s| s.is_named(name)) {
            Some(other_days) => Err(UnavailableReason::NotOnWeekday {
                specialty: other_days.name().to_string(),
                weekday,
            }),
            None => Err(UnavailableReason::SpecialtyNotOffered {
                specialty: name.trim().to_string(),
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Specialty>> {
        self.specialties.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Display for Physician {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let specialties: Vec<String> = self.read().iter().map(|s| s.to_string()).collect();
        write!(
            f,
            "{} (License: {}) - Specialties: {}",
            self.name,
            self.license,
            specialties.join(", ")
        )
    }
}
