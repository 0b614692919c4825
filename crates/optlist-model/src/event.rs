//! Change notifications emitted after an applied mutation.

use serde::{Deserialize, Serialize};

use crate::record::OptionRecord;

/// The kind of mutation an applied command performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditAction {
    /// A record moved one position up or down.
    Move,
    /// A boolean flag on a record flipped.
    Toggle,
    /// A text field on a record changed.
    Update,
    /// A record was removed.
    Delete,
    /// A blank record was appended.
    Add,
    /// The whole list was reordered.
    Sort,
    /// Imported records were appended to the list.
    AppendImported,
    /// Imported records replaced the list.
    ImportReplace,
}

/// A record field addressable by the update command.
///
/// Selection and visibility are flipped through dedicated toggle commands and
/// the tooltip is carried through import only, so none of them appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionField {
    Value,
    Label,
    Group,
    HideBefore,
    HideAfter,
}

impl OptionField {
    /// The wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Label => "label",
            Self::Group => "group",
            Self::HideBefore => "hideBefore",
            Self::HideAfter => "hideAfter",
        }
    }

    /// True for the two hide-window bounds.
    pub fn is_date(self) -> bool {
        matches!(self, Self::HideBefore | Self::HideAfter)
    }

    /// Reads this field from a record.
    pub fn get(self, record: &OptionRecord) -> &str {
        match self {
            Self::Value => &record.value,
            Self::Label => &record.label,
            Self::Group => &record.group,
            Self::HideBefore => &record.hide_before,
            Self::HideAfter => &record.hide_after,
        }
    }

    /// Writes this field on a record.
    pub fn set(self, record: &mut OptionRecord, value: impl Into<String>) {
        let value = value.into();
        match self {
            Self::Value => record.value = value,
            Self::Label => record.label = value,
            Self::Group => record.group = value,
            Self::HideBefore => record.hide_before = value,
            Self::HideAfter => record.hide_after = value,
        }
    }
}

impl std::fmt::Display for OptionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor attached to a change notification.
///
/// `index` addresses the touched record, or [`EventDescriptor::LIST_LEVEL`]
/// for operations that act on the list as a whole. `field` and `value` are
/// filled for field-level mutations and empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDescriptor {
    pub index: i32,
    pub action: EditAction,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub value: String,
}

impl EventDescriptor {
    /// Index reported for list-level operations.
    pub const LIST_LEVEL: i32 = -1;

    /// Descriptor for an operation on one record.
    pub fn at(index: usize, action: EditAction) -> Self {
        Self {
            index: index as i32,
            action,
            field: String::new(),
            value: String::new(),
        }
    }

    /// Descriptor for an operation on the list as a whole.
    pub fn list_level(action: EditAction) -> Self {
        Self {
            index: Self::LIST_LEVEL,
            action,
            field: String::new(),
            value: String::new(),
        }
    }

    /// Names the touched field.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Records the stored value of the touched field.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}
