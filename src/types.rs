use crate::PickerError;
use crate::consts::{
    FEBRUARY, FEBRUARY_DAYS, FEBRUARY_DAYS_LEAP, LONG_MONTH_DAYS, MAX_DAY, MAX_MONTH, MONTH_NAMES,
    SHORT_MONTH_DAYS,
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
///
/// Dropdown controls carry zero-based month values (0 = January, a calendar
/// API heritage); use [`Month::from_index`] and [`Month::index`] to convert
/// at that boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `PickerError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, PickerError> {
        let non_zero = NonZeroU8::new(value).ok_or(PickerError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(PickerError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Creates a Month from a zero-based dropdown index (0 = January)
    ///
    /// # Errors
    /// Returns `PickerError::InvalidMonthIndex` if the index is >= `MAX_MONTH`.
    pub fn from_index(index: u8) -> Result<Self, PickerError> {
        if index >= MAX_MONTH {
            return Err(PickerError::InvalidMonthIndex(index));
        }
        Self::new(index + 1)
    }

    /// Returns the one-based month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the zero-based dropdown index (0 = January)
    #[inline]
    pub const fn index(self) -> u8 {
        self.0.get() - 1
    }

    /// Returns the English month name
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.index() as usize]
    }

    /// Whether this month is February, the only month with a year-dependent length
    #[inline]
    pub const fn is_february(self) -> bool {
        self.0.get() == FEBRUARY
    }
}

impl TryFrom<u8> for Month {
    type Error = PickerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value guaranteed to be in the range `1..=MAX_DAY` (1..=31)
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
///
/// A Day is deliberately not validated against a month: a day that overflows
/// the currently selected month is legal input, and reconciliation clamps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and <= `MAX_DAY`
    ///
    /// # Errors
    /// Returns `PickerError::InvalidDay` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, PickerError> {
        let non_zero = NonZeroU8::new(value).ok_or(PickerError::InvalidDay(value))?;
        if value > MAX_DAY {
            return Err(PickerError::InvalidDay(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = PickerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// True when (year, month, day) constructs as a real proleptic Gregorian
/// date whose day reads back unchanged. An overflowing day (Feb 30, Apr 31)
/// fails this check, which is the month-length signal.
fn day_is_representable(year: i32, month: u8, day: u8) -> bool {
    NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
        .is_some_and(|date| date.day() == u32::from(day))
}

/// Leap-year test by construction: February 29th only exists in leap years.
pub fn is_leap_year(year: i32) -> bool {
    day_is_representable(year, FEBRUARY, FEBRUARY_DAYS_LEAP)
}

/// Last valid day-of-month for the given month and year.
///
/// Probes the date primitive instead of consulting a days-per-month table:
/// non-February months try day 31 and fall back to 30, February tries day 29
/// and falls back to 28. Years the primitive cannot represent at all take the
/// fallback length rather than panicking.
pub fn max_day_of_month(year: i32, month: Month) -> u8 {
    let (probe, fallback) = if month.is_february() {
        (FEBRUARY_DAYS_LEAP, FEBRUARY_DAYS)
    } else {
        (LONG_MONTH_DAYS, SHORT_MONTH_DAYS)
    };

    if day_is_representable(year, month.get(), probe) {
        probe
    } else {
        fallback
    }
}
