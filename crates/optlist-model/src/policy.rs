//! Editor configuration flags and render-mode selection.

use serde::{Deserialize, Serialize};

/// The control kind an option list is edited for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Drop-down select, the default.
    #[default]
    Select,
    /// Radio button group.
    Radio,
    /// Checkbox group.
    Checkbox,
}

impl RenderMode {
    /// Parses a loosely formatted mode name.
    ///
    /// Whitespace and any non-alphabetic characters are stripped and case is
    /// ignored, so `" Check-Box "` parses as [`RenderMode::Checkbox`].
    /// Unrecognized input falls back to [`RenderMode::Select`].
    pub fn parse(input: &str) -> Self {
        let cleaned: String = input
            .chars()
            .filter(char::is_ascii_alphabetic)
            .collect::<String>()
            .to_lowercase();
        match cleaned.as_str() {
            "radio" => Self::Radio,
            "checkbox" => Self::Checkbox,
            _ => Self::Select,
        }
    }

    /// True for the modes rendered as individually checkable items.
    pub fn is_checkable(self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox)
    }
}

/// Behavioral switches for an option-list editor.
///
/// A policy is plain data; [`EditorPolicy::normalized`] resolves the
/// implications between flags and is applied once when an editor is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorPolicy {
    /// Control kind the list is edited for.
    pub mode: RenderMode,
    /// Permit repeated values and labels across the list.
    pub allow_duplicate: bool,
    /// Permit more than one record to be selected at once.
    pub allow_multi: bool,
    /// Permit an empty value on the first record.
    pub allow_empty_first: bool,
    /// Permit group assignment on records.
    pub allow_group: bool,
    /// Permit hide-window bounds on records.
    pub allow_hide_by_date: bool,
    /// Permit the delimited-text import commands.
    pub allow_import: bool,
    /// Hide the value column in a hosting editor surface.
    pub hide_value: bool,
    /// Expose group editing and group the rendered preview.
    pub show_group: bool,
    /// Expose the hide-before bound and include it in exports.
    pub show_hide_before: bool,
    /// Expose the hide-after bound and include it in exports.
    pub show_hide_after: bool,
    /// Place grouped options after ungrouped ones in the preview.
    pub group_last: bool,
    /// Reject every mutating command.
    pub readonly: bool,
}

impl EditorPolicy {
    /// Sets the render mode.
    #[must_use]
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Permits repeated values and labels.
    #[must_use]
    pub fn with_allow_duplicate(mut self, allow: bool) -> Self {
        self.allow_duplicate = allow;
        self
    }

    /// Permits multiple selected records.
    #[must_use]
    pub fn with_allow_multi(mut self, allow: bool) -> Self {
        self.allow_multi = allow;
        self
    }

    /// Permits an empty value on the first record.
    #[must_use]
    pub fn with_allow_empty_first(mut self, allow: bool) -> Self {
        self.allow_empty_first = allow;
        self
    }

    /// Permits group assignment.
    #[must_use]
    pub fn with_allow_group(mut self, allow: bool) -> Self {
        self.allow_group = allow;
        self
    }

    /// Permits hide-window bounds.
    #[must_use]
    pub fn with_allow_hide_by_date(mut self, allow: bool) -> Self {
        self.allow_hide_by_date = allow;
        self
    }

    /// Permits the import commands.
    #[must_use]
    pub fn with_allow_import(mut self, allow: bool) -> Self {
        self.allow_import = allow;
        self
    }

    /// Hides the value column in a hosting editor surface.
    #[must_use]
    pub fn with_hide_value(mut self, hide: bool) -> Self {
        self.hide_value = hide;
        self
    }

    /// Exposes group editing and groups the preview.
    #[must_use]
    pub fn with_show_group(mut self, show: bool) -> Self {
        self.show_group = show;
        self
    }

    /// Exposes the hide-before bound.
    #[must_use]
    pub fn with_show_hide_before(mut self, show: bool) -> Self {
        self.show_hide_before = show;
        self
    }

    /// Exposes the hide-after bound.
    #[must_use]
    pub fn with_show_hide_after(mut self, show: bool) -> Self {
        self.show_hide_after = show;
        self
    }

    /// Places grouped options after ungrouped ones in the preview.
    #[must_use]
    pub fn with_group_last(mut self, last: bool) -> Self {
        self.group_last = last;
        self
    }

    /// Rejects every mutating command.
    #[must_use]
    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Resolves the implications between flags.
    ///
    /// Checkbox mode implies multi-select, showing groups implies allowing
    /// them, and showing either hide bound implies allowing hide-by-date.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.mode == RenderMode::Checkbox {
            self.allow_multi = true;
        }
        if self.show_group {
            self.allow_group = true;
        }
        if self.show_hide_before || self.show_hide_after {
            self.allow_hide_by_date = true;
        }
        self
    }
}
