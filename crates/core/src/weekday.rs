//! Weekday resolution for appointment timestamps.

use chrono::{Datelike, NaiveDateTime};
use std::str::FromStr;

/// One of the seven calendar weekdays, in ISO order (Monday first).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays indexed by ISO position (0 = Monday).
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Resolves the weekday a timestamp falls on.
    ///
    /// Locale independent: the ISO index from the calendar date is mapped directly.
    pub fn of(at: &NaiveDateTime) -> Self {
        Self::ALL[at.weekday().num_days_from_monday() as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown weekday: {0}")]
pub struct UnknownWeekday(pub String);

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == normalised)
            .ok_or_else(|| UnknownWeekday(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn resolves_known_dates() {
        assert_eq!(Weekday::of(&at(2025, 6, 9)), Weekday::Monday);
        assert_eq!(Weekday::of(&at(2025, 6, 10)), Weekday::Tuesday);
        assert_eq!(Weekday::of(&at(2025, 6, 15)), Weekday::Sunday);
        assert_eq!(Weekday::of(&at(2024, 2, 29)), Weekday::Thursday);
    }

    #[test]
    fn parses_any_case_with_padding() {
        assert_eq!(" Wednesday ".parse::<Weekday>(), Ok(Weekday::Wednesday));
        assert_eq!("SATURDAY".parse::<Weekday>(), Ok(Weekday::Saturday));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "funday".parse::<Weekday>().expect_err("not a weekday");
        assert_eq!(err, UnknownWeekday("funday".into()));
    }
}
