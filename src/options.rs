use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry in a selectable list: the submitted value plus the text
/// shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    value: String,
    label: String,
}

impl SelectOption {
    /// Creates an option with distinct value and label
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Creates an option whose value and label are both the given number,
    /// the canonical form for day-of-month entries.
    pub fn numeric(value: u8) -> Self {
        let text = value.to_string();
        Self {
            value: text.clone(),
            label: text,
        }
    }

    /// Returns the submitted value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the display text
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for SelectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// An ordered list of options with a current selected index, modeling one
/// dropdown control of the form.
///
/// The selected index is left alone by mutations that keep it in range;
/// accessors return `None` when it points past the end, so a control never
/// has to be in a valid state to be read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectControl {
    options: Vec<SelectOption>,
    selected: usize,
}

impl SelectControl {
    /// Creates a control with the first option selected
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            selected: 0,
        }
    }

    /// Number of options
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True when the control has no options
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Returns all options in order
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Returns the current selected index
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// Moves the selection to `index`
    pub fn select(&mut self, index: usize) {
        debug_assert!(index < self.options.len());
        self.selected = index;
    }

    /// Returns the currently selected option, or `None` when the control is
    /// empty or the selection points past the end
    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.options.get(self.selected)
    }

    /// Returns the value of the currently selected option
    pub fn selected_value(&self) -> Option<&str> {
        self.selected_option().map(SelectOption::value)
    }

    /// Appends an option at the end of the list
    pub fn push(&mut self, option: SelectOption) {
        self.options.push(option);
    }

    /// Drops trailing options until at most `len` remain
    pub fn truncate(&mut self, len: usize) {
        self.options.truncate(len);
    }
}
