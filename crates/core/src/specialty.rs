//! Specialties and the weekdays on which they are practised.

use crate::weekday::Weekday;
use crate::{ClinicError, ClinicResult};
use clinic_types::NonEmptyText;

/// A named practice area plus the weekdays it is offered on.
///
/// Names compare case-insensitively. The weekday set is never empty and keeps the
/// order in which days were first given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specialty {
    name: NonEmptyText,
    weekdays: Vec<Weekday>,
}

impl Specialty {
    /// Builds a specialty from a name and a list of weekday names.
    ///
    /// Weekday names are matched case-insensitively, blank entries are dropped and
    /// repeated days collapse into one.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::InvalidSpecialty` if the name is blank, a weekday name is
    /// not recognised, or no weekday remains after dropping blanks.
    pub fn new<I, S>(name: impl AsRef<str>, weekdays: I) -> ClinicResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = NonEmptyText::new(name)
            .map_err(|_| ClinicError::InvalidSpecialty("specialty name is required".into()))?;

        let mut days = Vec::new();
        for raw in weekdays {
            let raw = raw.as_ref();
            if raw.trim().is_empty() {
                continue;
            }
            let day = raw
                .parse::<Weekday>()
                .map_err(|e| ClinicError::InvalidSpecialty(e.to_string()))?;
            if !days.contains(&day) {
                days.push(day);
            }
        }

        if days.is_empty() {
            return Err(ClinicError::InvalidSpecialty(
                "at least one valid weekday is required".into(),
            ));
        }

        Ok(Self {
            name,
            weekdays: days,
        })
    }

    pub fn name(&self) -> &NonEmptyText {
        &self.name
    }

    pub fn weekdays(&self) -> &[Weekday] {
        &self.weekdays
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_case(name)
    }

    pub fn offered_on(&self, weekday: Weekday) -> bool {
        self.weekdays.contains(&weekday)
    }
}

impl std::fmt::Display for Specialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let days: Vec<&str> = self.weekdays.iter().map(|d| d.as_str()).collect();
        write!(f, "{} (Days: {})", self.name, days.join(", "))
    }
}
