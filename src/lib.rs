mod consts;
mod form;
mod options;
mod prelude;
mod reconcile;
mod types;

pub use consts::*;
pub use form::{DatePickerForm, FormError, day_options, month_options, year_options};
pub use options::{SelectControl, SelectOption};
pub use reconcile::{Reconciliation, reconcile};
pub use types::{Day, Month, is_leap_year, max_day_of_month};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The user's current picks across the three date controls.
///
/// The month and day are validated scalars; the year is any proleptic
/// calendar year, since the year dropdown can offer whatever range the form
/// builder asked for. A selection may name a date that does not exist, such
/// as Feb 31st; reconciliation resolves that, it is not an error here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateSelection {
    pub year: i32,
    pub month: Month,
    pub day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PickerError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid month index: {} (must be 0-{})", "_0", "MAX_MONTH - 1")]
    InvalidMonthIndex(u8),
    #[display(fmt = "Invalid day: {} (must be {}-{})", "_0", MIN_DAY, MAX_DAY)]
    InvalidDay(u8),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for PickerError {}

impl DateSelection {
    /// Creates a selection from already validated components
    pub const fn new(year: i32, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Creates a selection from raw one-based numbers
    ///
    /// # Errors
    /// Returns `PickerError` when the month or day is out of range.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, PickerError> {
        Ok(Self {
            year,
            month: Month::new(month)?,
            day: Day::new(day)?,
        })
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, PickerError> {
        s.parse::<u8>()
            .map_err(|_| PickerError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse i32 with better error messages
    fn parse_i32(s: &str) -> Result<i32, PickerError> {
        s.parse::<i32>()
            .map_err(|_| PickerError::InvalidFormat(s.to_owned()))
    }
}

impl fmt::Display for DateSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year,
            self.month.get(),
            self.day.get()
        )
    }
}

impl FromStr for DateSelection {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PickerError::EmptyInput);
        }

        // Month-first is checked before ISO so negative years still parse:
        // in MM/DD/YYYY the year sits alone in its slash-separated token,
        // while a leading minus would be eaten by an ISO hyphen split.
        if trimmed.contains(MONTH_FIRST_SEPARATOR) {
            let parts: Vec<&str> = trimmed
                .split(MONTH_FIRST_SEPARATOR)
                .map(str::trim)
                .collect();
            if parts.len() != 3 {
                return Err(PickerError::InvalidFormat(trimmed.to_owned()));
            }
            let month = Month::new(Self::parse_u8(parts[0])?)?;
            let day = Day::new(Self::parse_u8(parts[1])?)?;
            let year = Self::parse_i32(parts[2])?;
            return Ok(Self { year, month, day });
        }

        // ISO format: YYYY-MM-DD
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(PickerError::InvalidFormat(trimmed.to_owned()));
        }
        let year = Self::parse_i32(parts[0])?;
        let month = Month::new(Self::parse_u8(parts[1])?)?;
        let day = Day::new(Self::parse_u8(parts[2])?)?;
        Ok(Self { year, month, day })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_full_date() {
        let date = "1991-08-15".parse::<DateSelection>().unwrap();
        assert_eq!(date.year, 1991);
        assert_eq!(date.month.get(), 8);
        assert_eq!(date.day.get(), 15);
    }

    #[test]
    fn test_parse_month_first() {
        let date = "08/15/1991".parse::<DateSelection>().unwrap();
        assert_eq!(date.year, 1991);
        assert_eq!(date.month.get(), 8);
        assert_eq!(date.day.get(), 15);
    }

    #[test]
    fn test_parse_with_whitespace() {
        let date = " 08 / 15 / 1991 ".parse::<DateSelection>().unwrap();
        assert_eq!(date.year, 1991);
        assert_eq!(date.month.get(), 8);
        assert_eq!(date.day.get(), 15);
    }

    #[test]
    fn test_parse_negative_year_month_first() {
        let date = "3/15/-44".parse::<DateSelection>().unwrap();
        assert_eq!(date.year, -44);
        assert_eq!(date.month.get(), 3);
        assert_eq!(date.day.get(), 15);
    }

    #[test]
    fn test_parse_empty() {
        let result = "".parse::<DateSelection>();
        assert!(matches!(result, Err(PickerError::EmptyInput)));

        let result = "   ".parse::<DateSelection>();
        assert!(matches!(result, Err(PickerError::EmptyInput)));
    }

    #[test]
    fn test_parse_invalid_month() {
        let result = "13/01/1991".parse::<DateSelection>();
        assert!(matches!(result, Err(PickerError::InvalidMonth(13))));

        let result = "1991-00-15".parse::<DateSelection>();
        assert!(matches!(result, Err(PickerError::InvalidMonth(0))));
    }

    #[test]
    fn test_parse_invalid_day() {
        let result = "1991-08-32".parse::<DateSelection>();
        assert!(matches!(result, Err(PickerError::InvalidDay(32))));
    }

    #[test]
    fn test_parse_overflowing_day_is_accepted() {
        // Feb 31 parses: a selection may name a date that does not exist,
        // and reconciliation clamps it afterwards.
        let date = "1991-02-31".parse::<DateSelection>().unwrap();
        assert_eq!(date.day.get(), 31);
    }

    #[test]
    fn test_parse_wrong_part_count() {
        let result = "1991-08".parse::<DateSelection>();
        assert!(matches!(result, Err(PickerError::InvalidFormat(_))));

        let result = "08/1991".parse::<DateSelection>();
        assert!(matches!(result, Err(PickerError::InvalidFormat(_))));

        let result = "1991-08-15-23".parse::<DateSelection>();
        assert!(matches!(result, Err(PickerError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_mixed_delimiters() {
        let result = "1991-08/15".parse::<DateSelection>();
        assert!(matches!(result, Err(PickerError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_bad_tokens() {
        let result = "199A-08-15".parse::<DateSelection>();
        assert!(matches!(result, Err(PickerError::InvalidFormat(_))));

        let result = "08/XX/1991".parse::<DateSelection>();
        assert!(matches!(result, Err(PickerError::InvalidFormat(_))));
    }

    #[test]
    fn test_display() {
        let date = DateSelection::from_ymd(1991, 8, 5).unwrap();
        assert_eq!(date.to_string(), "1991-08-05");

        let date = DateSelection::from_ymd(33, 12, 31).unwrap();
        assert_eq!(date.to_string(), "0033-12-31");
    }

    #[test]
    fn test_display_parse_round_trip() {
        let date = DateSelection::from_ymd(2024, 2, 29).unwrap();
        let parsed = date.to_string().parse::<DateSelection>().unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_from_ymd_validation() {
        assert!(DateSelection::from_ymd(2024, 1, 1).is_ok());
        assert!(DateSelection::from_ymd(2024, 0, 1).is_err());
        assert!(DateSelection::from_ymd(2024, 13, 1).is_err());
        assert!(DateSelection::from_ymd(2024, 1, 0).is_err());
        assert!(DateSelection::from_ymd(2024, 1, 32).is_err());
    }

    #[test]
    fn test_serde() {
        let date = DateSelection::from_ymd(1991, 8, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"year":1991,"month":8,"day":15}"#);

        let parsed: DateSelection = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<DateSelection, _> =
            serde_json::from_str(r#"{"year":1991,"month":13,"day":15}"#);
        assert!(result.is_err());

        let result: Result<DateSelection, _> =
            serde_json::from_str(r#"{"year":1991,"month":8,"day":0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            PickerError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            PickerError::InvalidMonthIndex(12).to_string(),
            "Invalid month index: 12 (must be 0-11)"
        );
        assert_eq!(
            PickerError::InvalidDay(32).to_string(),
            "Invalid day: 32 (must be 1-31)"
        );
    }
}
