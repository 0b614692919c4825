//! Core option record as edited and rendered by a host control.

use serde::{Deserialize, Serialize};

/// A single editable option in a select, radio, or checkbox list.
///
/// All text fields are stored trimmed. The two hide-window bounds are either
/// empty or a canonical ISO-8601 instant (see [`crate::datetime`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionRecord {
    /// Submission value. May be empty only on the first record of a list
    /// that allows an empty leading option.
    pub value: String,
    /// Human-readable text shown to the end user.
    pub label: String,
    /// Whether the option is pre-selected.
    pub selected: bool,
    /// Whether the option is withheld from rendered output.
    pub hidden: bool,
    /// Name of the group the option belongs to, empty for ungrouped.
    pub group: String,
    /// Instant before which the option is suppressed, or empty.
    pub hide_before: String,
    /// Instant after which the option is suppressed, or empty.
    pub hide_after: String,
    /// Tooltip text carried through import and export.
    pub title: String,
}

impl OptionRecord {
    /// Creates a record with the given value and label and all flags cleared.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Creates the blank record appended by the add operation.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Marks the record as pre-selected.
    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Marks the record as hidden.
    #[must_use]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Assigns the record to a named group.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Sets the instant before which the option is suppressed.
    #[must_use]
    pub fn with_hide_before(mut self, hide_before: impl Into<String>) -> Self {
        self.hide_before = hide_before.into();
        self
    }

    /// Sets the instant after which the option is suppressed.
    #[must_use]
    pub fn with_hide_after(mut self, hide_after: impl Into<String>) -> Self {
        self.hide_after = hide_after.into();
        self
    }

    /// Sets the tooltip text.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// True when both the value and the label are empty.
    pub fn is_blank(&self) -> bool {
        self.value.is_empty() && self.label.is_empty()
    }
}

/// Collects the distinct non-empty group names in first-seen order.
pub fn group_names(options: &[OptionRecord]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for option in options {
        if !option.group.is_empty() && !names.iter().any(|name| name == &option.group) {
            names.push(option.group.clone());
        }
    }
    names
}
