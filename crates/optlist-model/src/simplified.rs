//! Compact export form with default-valued fields elided.

use serde::{Deserialize, Serialize};

use crate::record::OptionRecord;

/// An [`OptionRecord`] reduced for persistence.
///
/// Fields holding their default are skipped during serialization and the
/// label is dropped entirely when it repeats the value, so a plain yes/no
/// list serializes as `[{"value":"y"},{"value":"n"}]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimplifiedOption {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub selected: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub hidden: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub group: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hide_before: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hide_after: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl From<&OptionRecord> for SimplifiedOption {
    fn from(record: &OptionRecord) -> Self {
        Self {
            value: record.value.clone(),
            label: (record.label != record.value).then(|| record.label.clone()),
            selected: record.selected,
            hidden: record.hidden,
            group: record.group.clone(),
            hide_before: record.hide_before.clone(),
            hide_after: record.hide_after.clone(),
            title: record.title.clone(),
        }
    }
}

impl From<&SimplifiedOption> for OptionRecord {
    fn from(simplified: &SimplifiedOption) -> Self {
        Self {
            value: simplified.value.clone(),
            label: simplified
                .label
                .clone()
                .unwrap_or_else(|| simplified.value.clone()),
            selected: simplified.selected,
            hidden: simplified.hidden,
            group: simplified.group.clone(),
            hide_before: simplified.hide_before.clone(),
            hide_after: simplified.hide_after.clone(),
            title: simplified.title.clone(),
        }
    }
}

/// Reduces a list for persistence, dropping records without a label.
///
/// Unlabeled records are work in progress in an editing surface and carry no
/// renderable content, so they never travel.
pub fn simplify(options: &[OptionRecord]) -> Vec<SimplifiedOption> {
    options
        .iter()
        .filter(|option| !option.label.is_empty())
        .map(SimplifiedOption::from)
        .collect()
}

/// Restores full records from their reduced form.
pub fn expand(simplified: &[SimplifiedOption]) -> Vec<OptionRecord> {
    simplified.iter().map(OptionRecord::from).collect()
}
