//! Command-driven editing state for one option list.
//!
//! The editor owns the records, the policy, and the import session settings
//! of a single hosted list. Commands are applied atomically: a rejected
//! command leaves the state untouched and reports `false`, an applied one
//! records an [`EventDescriptor`] for the host to relay.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use optlist_delim::{
    ExportOptions, ImportOptions, MergePolicy, Separator, merge, parse_options, write_options,
};
use optlist_model::{
    EditAction, EditorPolicy, EventDescriptor, OptionField, OptionRecord, SimplifiedOption,
    group_names, normalize_instant, simplify, validate,
};

use crate::error::{EditorError, Result};
use crate::ops::{self, MoveDirection};
use crate::preview::{CheckablePreview, Preview, SelectPreview, checkable_preview, select_preview};

/// One editing step against an option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    /// Move the record at `index` one step.
    Move { index: usize, direction: MoveDirection },
    /// Flip the hidden flag of the record at `index`.
    ToggleVisibility { index: usize },
    /// Flip the selected flag of the record at `index`.
    ToggleSelected { index: usize },
    /// Store a new field value on the record at `index`.
    UpdateField {
        index: usize,
        field: OptionField,
        value: String,
    },
    /// Remove the record at `index`.
    Delete { index: usize },
    /// Append a blank record.
    Add,
    /// Sort the list by label, group-aware while groups are shown.
    Sort,
    /// Parse pasted text and replace the list with it.
    ImportReplace { text: String },
    /// Parse pasted text and append it behind the list.
    ImportAppend { text: String },
}

/// Editing state for one hosted option list.
///
/// Constructed from host-supplied records, after which every change flows
/// through [`OptionListEditor::apply`].
#[derive(Debug, Clone)]
pub struct OptionListEditor {
    id: String,
    policy: EditorPolicy,
    options: Vec<OptionRecord>,
    import: ImportOptions,
    last_event: Option<EventDescriptor>,
}

impl OptionListEditor {
    /// Builds an editor from host-supplied records.
    ///
    /// The records are normalized on the way in: text fields are trimmed,
    /// records without a label are dropped, an empty value is backfilled from
    /// the label everywhere the empty-first policy does not cover it, group
    /// names are cleared while grouping is not allowed, and hide-window
    /// bounds are normalized with the matching editing surfaces switched on
    /// for lists that carry bounds.
    pub fn new(
        id: impl Into<String>,
        records: Vec<OptionRecord>,
        policy: EditorPolicy,
    ) -> Result<Self> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(EditorError::MissingId);
        }

        let mut editor = Self {
            id,
            policy: policy.normalized(),
            options: Vec::with_capacity(records.len()),
            import: ImportOptions::default(),
            last_event: None,
        };

        for record in records {
            let mut record = normalize_record(record);
            if record.label.is_empty() {
                tracing::debug!(value = %record.value, "Dropping unlabeled record");
                continue;
            }
            if record.value.is_empty()
                && !(editor.options.is_empty() && editor.policy.allow_empty_first)
            {
                record.value = record.label.clone();
            }
            if !editor.policy.allow_group {
                record.group.clear();
            }
            editor.options.push(record);
        }
        editor.adopt_hide_bounds();

        Ok(editor)
    }

    /// The host identifier this editor was created for.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The resolved policy in effect.
    pub fn policy(&self) -> &EditorPolicy {
        &self.policy
    }

    /// The current records, in list order.
    pub fn options(&self) -> &[OptionRecord] {
        &self.options
    }

    /// Number of records in the list.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True when the list holds no records.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// The descriptor of the most recently applied command.
    pub fn last_event(&self) -> Option<&EventDescriptor> {
        self.last_event.as_ref()
    }

    /// The import session settings.
    pub fn import_options(&self) -> &ImportOptions {
        &self.import
    }

    /// Reconfigures the import separator from operator input.
    pub fn set_separator(&mut self, input: &str) {
        self.import.separator = Separator::parse(input);
    }

    /// Declares whether pasted text starts with a header row.
    pub fn set_import_header(&mut self, has_header: bool) {
        self.import.has_header = has_header;
    }

    /// True when the list starts with an empty-valued placeholder.
    pub fn first_is_empty(&self) -> bool {
        self.options
            .first()
            .is_some_and(|option| option.value.is_empty())
    }

    /// The distinct group names present, in first-seen order.
    pub fn group_names(&self) -> Vec<String> {
        group_names(&self.options)
    }

    /// True when the add command would currently be accepted.
    pub fn can_add(&self) -> bool {
        validate::can_add_more(&self.options, self.policy.allow_empty_first)
    }

    /// True when the delete command would currently accept `index`.
    pub fn can_delete(&self, index: usize) -> bool {
        self.options.get(index).is_some_and(validate::can_delete)
    }

    /// Applies one command.
    ///
    /// Returns whether the list changed. On success the matching descriptor
    /// is available through [`OptionListEditor::last_event`].
    pub fn apply(&mut self, command: Command) -> bool {
        if self.policy.readonly {
            tracing::debug!(id = %self.id, "Read-only editor ignored a command");
            return false;
        }
        let applied = match command {
            Command::Move { index, direction } => self.apply_move(index, direction),
            Command::ToggleVisibility { index } => self.apply_toggle_visibility(index),
            Command::ToggleSelected { index } => self.apply_toggle_selected(index),
            Command::UpdateField {
                index,
                field,
                value,
            } => self.apply_update(index, field, &value),
            Command::Delete { index } => self.apply_delete(index),
            Command::Add => self.apply_add(),
            Command::Sort => self.apply_sort(),
            Command::ImportReplace { text } => self.apply_import(&text, MergePolicy::Replace),
            Command::ImportAppend { text } => self.apply_import(&text, MergePolicy::Append),
        };
        match applied {
            Some(event) => {
                tracing::debug!(id = %self.id, action = ?event.action, index = event.index, "Applied command");
                self.last_event = Some(event);
                true
            }
            None => false,
        }
    }

    fn apply_move(&mut self, index: usize, direction: MoveDirection) -> Option<EventDescriptor> {
        self.options = ops::move_option(&self.options, index, direction)?;
        Some(EventDescriptor::at(index, EditAction::Move))
    }

    fn apply_toggle_visibility(&mut self, index: usize) -> Option<EventDescriptor> {
        self.options = ops::toggle_hidden(&self.options, index)?;
        Some(EventDescriptor::at(index, EditAction::Toggle).with_field("hidden"))
    }

    fn apply_toggle_selected(&mut self, index: usize) -> Option<EventDescriptor> {
        self.options = ops::toggle_selected(&self.options, index, self.policy.allow_multi)?;
        Some(EventDescriptor::at(index, EditAction::Toggle).with_field("selected"))
    }

    fn apply_update(
        &mut self,
        index: usize,
        field: OptionField,
        value: &str,
    ) -> Option<EventDescriptor> {
        self.options = ops::update_field(
            &self.options,
            index,
            field,
            value,
            self.policy.allow_duplicate,
        )?;
        let stored = field.get(&self.options[index]).to_string();
        Some(
            EventDescriptor::at(index, EditAction::Update)
                .with_field(field.as_str())
                .with_value(stored),
        )
    }

    fn apply_delete(&mut self, index: usize) -> Option<EventDescriptor> {
        self.options = ops::delete_option(&self.options, index)?;
        Some(EventDescriptor::at(index, EditAction::Delete))
    }

    fn apply_add(&mut self) -> Option<EventDescriptor> {
        self.options = ops::add_option(&self.options, self.policy.allow_empty_first)?;
        Some(EventDescriptor::list_level(EditAction::Add))
    }

    fn apply_sort(&mut self) -> Option<EventDescriptor> {
        self.options = ops::sort_options(&self.options, self.policy.show_group);
        Some(EventDescriptor::list_level(EditAction::Sort))
    }

    fn apply_import(&mut self, text: &str, policy: MergePolicy) -> Option<EventDescriptor> {
        if !self.policy.allow_import {
            tracing::debug!(id = %self.id, "Import is not allowed here");
            return None;
        }
        let at_list_start = match policy {
            MergePolicy::Replace => true,
            MergePolicy::Append => self.options.is_empty(),
        };
        let batch = parse_options(text, &self.import, &self.policy, at_list_start);
        if !batch.is_valid() {
            tracing::debug!(id = %self.id, skipped = batch.skipped, "Import produced no records");
            return None;
        }
        self.options = merge(
            &self.options,
            batch.records,
            policy,
            self.policy.allow_duplicate,
        )?;
        if !self.policy.allow_group {
            for option in &mut self.options {
                option.group.clear();
            }
        }
        self.adopt_hide_bounds();
        let action = match policy {
            MergePolicy::Replace => EditAction::ImportReplace,
            MergePolicy::Append => EditAction::AppendImported,
        };
        Some(EventDescriptor::list_level(action))
    }

    /// Switches the hide-bound surfaces on for lists that carry bounds.
    fn adopt_hide_bounds(&mut self) {
        if self.options.iter().any(|o| !o.hide_before.is_empty()) {
            self.policy.show_hide_before = true;
        }
        if self.options.iter().any(|o| !o.hide_after.is_empty()) {
            self.policy.show_hide_after = true;
        }
        self.policy = std::mem::take(&mut self.policy).normalized();
    }

    /// Exports the list as delimited text without a header row.
    ///
    /// The column separator is the import session separator, so an export
    /// pastes back into an editor configured the same way.
    pub fn export_data(&self) -> String {
        write_options(&self.options, &self.export_options().with_header(false))
    }

    /// Exports the list as delimited text with a header row.
    pub fn export_data_with_header(&self) -> String {
        write_options(&self.options, &self.export_options().with_header(true))
    }

    /// Exports the list with full control over the layout.
    pub fn export_with(&self, options: &ExportOptions) -> String {
        write_options(&self.options, options)
    }

    /// The export layout derived from the policy and session separator.
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::from_policy(&self.policy)
            .with_column_separator(self.import.separator.clone())
    }

    /// The list in its reduced persistence form.
    pub fn simplified(&self) -> Vec<SimplifiedOption> {
        simplify(&self.options)
    }

    /// The reduced persistence form rendered as JSON.
    pub fn to_simplified_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.simplified())?)
    }

    /// The render preview for the policy's mode at `instant`.
    ///
    /// Passing `None` skips hide-window evaluation, previewing the list as
    /// its timeless shape.
    pub fn preview(&self, instant: Option<NaiveDateTime>) -> Preview {
        if self.policy.mode.is_checkable() {
            Preview::Checkable(self.checkable_preview(instant))
        } else {
            Preview::Select(self.select_preview(instant))
        }
    }

    /// The drop-down preview at `instant`, regardless of mode.
    pub fn select_preview(&self, instant: Option<NaiveDateTime>) -> SelectPreview {
        select_preview(&self.options, &self.policy, instant)
    }

    /// The checkable-items preview at `instant`, regardless of mode.
    pub fn checkable_preview(&self, instant: Option<NaiveDateTime>) -> CheckablePreview {
        checkable_preview(&self.options, instant)
    }
}

/// Trims the text fields and normalizes the hide-window bounds.
fn normalize_record(mut record: OptionRecord) -> OptionRecord {
    record.value = record.value.trim().to_string();
    record.label = record.label.trim().to_string();
    record.group = record.group.trim().to_string();
    record.hide_before = normalize_instant(&record.hide_before);
    record.hide_after = normalize_instant(&record.hide_after);
    record.title = record.title.trim().to_string();
    record
}

#[cfg(test)]
mod tests {
    use super::{Command, OptionListEditor};
    use crate::error::EditorError;
    use optlist_model::{EditorPolicy, OptionRecord};

    fn editor(records: Vec<OptionRecord>, policy: EditorPolicy) -> OptionListEditor {
        OptionListEditor::new("field-1", records, policy).unwrap()
    }

    #[test]
    fn a_blank_id_is_fatal() {
        let result = OptionListEditor::new("   ", vec![], EditorPolicy::default());
        assert!(matches!(result, Err(EditorError::MissingId)));
    }

    #[test]
    fn init_drops_unlabeled_records_and_backfills_values() {
        let editor = editor(
            vec![
                OptionRecord::new("x", ""),
                OptionRecord::new("", " Yes "),
                OptionRecord::new(" n ", "No"),
            ],
            EditorPolicy::default(),
        );
        assert_eq!(editor.len(), 2);
        assert_eq!(editor.options()[0].value, "Yes");
        assert_eq!(editor.options()[1].value, "n");
    }

    #[test]
    fn init_keeps_an_empty_first_value_when_allowed() {
        let editor = editor(
            vec![OptionRecord::new("", "Pick one"), OptionRecord::new("y", "Yes")],
            EditorPolicy::default().with_allow_empty_first(true),
        );
        assert!(editor.first_is_empty());
        assert_eq!(editor.options()[1].value, "y");
    }

    #[test]
    fn init_clears_groups_unless_allowed() {
        let records = vec![OptionRecord::new("a", "A").with_group("Fruit")];
        let cleared = editor(records.clone(), EditorPolicy::default());
        assert_eq!(cleared.options()[0].group, "");
        let kept = editor(records, EditorPolicy::default().with_allow_group(true));
        assert_eq!(kept.options()[0].group, "Fruit");
    }

    #[test]
    fn init_adopts_hide_bounds_into_the_policy() {
        let editor = editor(
            vec![OptionRecord::new("a", "A").with_hide_before("2024-01-01")],
            EditorPolicy::default(),
        );
        assert!(editor.policy().show_hide_before);
        assert!(editor.policy().allow_hide_by_date);
        assert!(!editor.policy().show_hide_after);
        assert_eq!(editor.options()[0].hide_before, "2024-01-01T00:00:00");
    }

    #[test]
    fn readonly_rejects_every_command() {
        let mut editor = editor(
            vec![OptionRecord::new("a", "A")],
            EditorPolicy::default().with_readonly(true),
        );
        assert!(!editor.apply(Command::Add));
        assert!(!editor.apply(Command::Sort));
        assert!(editor.last_event().is_none());
    }

    #[test]
    fn rejected_commands_leave_no_event() {
        let mut editor = editor(vec![OptionRecord::new("a", "A")], EditorPolicy::default());
        assert!(!editor.apply(Command::Delete { index: 0 }));
        assert!(editor.last_event().is_none());
    }

    #[test]
    fn commands_serialize_with_a_type_tag() {
        let json = serde_json::to_value(Command::ImportAppend {
            text: "a\tA".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "importAppend");
        let json = serde_json::to_value(Command::Add).unwrap();
        assert_eq!(json["type"], "add");
    }
}
