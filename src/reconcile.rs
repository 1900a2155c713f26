use crate::DateSelection;
use crate::options::{SelectControl, SelectOption};
use crate::types::max_day_of_month;

/// Report of one reconciliation pass.
///
/// `day` is the effective day after clamping; `changed` is true when the
/// pass actually mutated the control, so callers driving a UI know whether
/// a repaint is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    /// Last valid day for the selected month and year
    pub max_day: u8,
    /// The selected day, clamped into range when necessary
    pub day: u8,
    /// Whether the selected day had to be pulled back to `max_day`
    pub clamped: bool,
    /// Whether the day control's options or selection were mutated
    pub changed: bool,
}

/// Brings the day control in line with the selected month and year.
///
/// Trailing options are removed when the month got shorter, and options
/// whose value and label are the consecutive day numbers are appended when
/// it got longer, so the control always ends up with exactly
/// `max_day_of_month(year, month)` entries. A selected day past the new
/// maximum is clamped and the control's selection moved onto it.
///
/// The pass is idempotent: running it again without changing the selection
/// reports `changed == false` and leaves the control untouched.
pub fn reconcile(selection: DateSelection, days: &mut SelectControl) -> Reconciliation {
    let max_day = max_day_of_month(selection.year, selection.month);
    let target = usize::from(max_day);

    let len_before = days.len();
    let selected_before = days.selected_index();

    if days.len() > target {
        days.truncate(target);
    }
    while days.len() < target {
        // len stays below max_day (<= 31) inside this loop, so it fits in u8
        let value = days.len() as u8 + 1;
        days.push(SelectOption::numeric(value));
    }

    let mut day = selection.day.get();
    let mut clamped = false;
    if day > max_day {
        day = max_day;
        clamped = true;
        days.select(target - 1);
    }

    let changed = days.len() != len_before || days.selected_index() != selected_before;
    Reconciliation {
        max_day,
        day,
        clamped,
        changed,
    }
}
