use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::consts::{LONG_MONTH_DAYS, MIN_DAY, MONTH_NAMES};
use crate::options::{SelectControl, SelectOption};
use crate::reconcile::{Reconciliation, reconcile};
use crate::types::{Day, Month};
use crate::{DateSelection, PickerError};

const MONTH_CONTROL: &str = "month";
const DATE_CONTROL: &str = "date";
const YEAR_CONTROL: &str = "year";

/// Error type for reading a date selection out of the form controls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The control is empty or its selection points past the end.
    #[error("Nothing selected in the {0} control")]
    NothingSelected(&'static str),

    /// The selected option carries a value that does not parse as a number.
    #[error("Unreadable {control} control value: {value:?}")]
    BadValue {
        control: &'static str,
        value: String,
    },

    /// The parsed number is out of range for its component.
    #[error(transparent)]
    Picker(#[from] PickerError),
}

/// The three linked dropdowns of a date picker: month, day-of-month, year.
///
/// The month control carries zero-based values with month-name labels, the
/// year control carries the year number, and the day control is kept
/// consistent with the other two by [`DatePickerForm::adjust`]. Controls are
/// public so a UI layer can move selections directly, the same way a browser
/// form would.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerForm {
    pub starting_month: SelectControl,
    pub starting_date: SelectControl,
    pub starting_year: SelectControl,
}

impl DatePickerForm {
    /// Builds a form offering the given years, opened on January 1st of the
    /// first year. January always has 31 days, so the initial day list is a
    /// full one.
    pub fn new(years: RangeInclusive<i32>) -> Self {
        Self {
            starting_month: SelectControl::new(month_options()),
            starting_date: SelectControl::new(day_options(LONG_MONTH_DAYS)),
            starting_year: SelectControl::new(year_options(years)),
        }
    }

    /// Reads the current selections of all three controls.
    ///
    /// # Errors
    /// Returns `FormError` when a control has no selectable option or its
    /// selected value does not parse into its date component.
    pub fn selection(&self) -> Result<DateSelection, FormError> {
        let month_index: u8 = control_value(&self.starting_month, MONTH_CONTROL)?;
        let day: u8 = control_value(&self.starting_date, DATE_CONTROL)?;
        let year: i32 = control_value(&self.starting_year, YEAR_CONTROL)?;

        let month = Month::from_index(month_index)?;
        let day = Day::new(day)?;
        Ok(DateSelection::new(year, month, day))
    }

    /// Re-reads the selection and reconciles the day control against it.
    /// Call after any change to the month or year control.
    ///
    /// # Errors
    /// Returns `FormError` when the current selection cannot be read; the
    /// day control is left untouched in that case.
    pub fn adjust(&mut self) -> Result<Reconciliation, FormError> {
        let selection = self.selection()?;
        Ok(reconcile(selection, &mut self.starting_date))
    }
}

fn control_value<T: FromStr>(control: &SelectControl, name: &'static str) -> Result<T, FormError> {
    let value = control
        .selected_value()
        .ok_or(FormError::NothingSelected(name))?;
    value.parse().map_err(|_| FormError::BadValue {
        control: name,
        value: value.to_owned(),
    })
}

/// Month options in calendar order: zero-based values, English name labels.
pub fn month_options() -> Vec<SelectOption> {
    MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| SelectOption::new(index.to_string(), *name))
        .collect()
}

/// One option per year in the range, value and label both the year number.
pub fn year_options(years: RangeInclusive<i32>) -> Vec<SelectOption> {
    years
        .map(|year| {
            let text = year.to_string();
            SelectOption::new(text.clone(), text)
        })
        .collect()
}

/// Day options `1..=max_day` in canonical numeric form.
pub fn day_options(max_day: u8) -> Vec<SelectOption> {
    (MIN_DAY..=max_day).map(SelectOption::numeric).collect()
}
