//! Delimited-text export for option lists.

use optlist_model::{EditorPolicy, OptionRecord};

use crate::separator::Separator;

/// Layout of one delimited export.
///
/// The four core columns `value`, `label`, `selected`, and `hidden` are
/// always written; the remaining columns are opted in individually. Exports
/// read back losslessly through the import pipeline with a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Separator between cells.
    pub column_separator: Separator,
    /// Separator between rows.
    pub row_separator: String,
    /// Whether to emit the header row.
    pub include_header: bool,
    /// Whether to emit the group column.
    pub include_group: bool,
    /// Whether to emit the hide-before column.
    pub include_hide_before: bool,
    /// Whether to emit the hide-after column.
    pub include_hide_after: bool,
    /// Whether to emit the tooltip column.
    pub include_title: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            column_separator: Separator::tab(),
            row_separator: "\n".to_string(),
            include_header: true,
            include_group: false,
            include_hide_before: false,
            include_hide_after: false,
            include_title: false,
        }
    }
}

impl ExportOptions {
    /// Derives the column set from an editor policy.
    ///
    /// Group data travels whenever grouping is allowed; each hide bound
    /// travels only while its editing surface is exposed, which is switched
    /// on automatically for lists that carry bounds.
    pub fn from_policy(policy: &EditorPolicy) -> Self {
        Self {
            include_group: policy.allow_group,
            include_hide_before: policy.show_hide_before,
            include_hide_after: policy.show_hide_after,
            ..Self::default()
        }
    }

    /// Sets the separator between cells.
    #[must_use]
    pub fn with_column_separator(mut self, separator: Separator) -> Self {
        self.column_separator = separator;
        self
    }

    /// Sets the separator between rows.
    #[must_use]
    pub fn with_row_separator(mut self, separator: impl Into<String>) -> Self {
        self.row_separator = separator.into();
        self
    }

    /// Switches the header row on or off.
    #[must_use]
    pub fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Switches the group column on or off.
    #[must_use]
    pub fn with_group(mut self, include: bool) -> Self {
        self.include_group = include;
        self
    }

    /// Switches the hide-before column on or off.
    #[must_use]
    pub fn with_hide_before(mut self, include: bool) -> Self {
        self.include_hide_before = include;
        self
    }

    /// Switches the hide-after column on or off.
    #[must_use]
    pub fn with_hide_after(mut self, include: bool) -> Self {
        self.include_hide_after = include;
        self
    }

    /// Switches the tooltip column on or off.
    #[must_use]
    pub fn with_title(mut self, include: bool) -> Self {
        self.include_title = include;
        self
    }

    fn header_cells(&self) -> Vec<&'static str> {
        let mut cells = vec!["value", "label", "selected", "hidden"];
        if self.include_group {
            cells.push("group");
        }
        if self.include_hide_before {
            cells.push("hideBefore");
        }
        if self.include_hide_after {
            cells.push("hideAfter");
        }
        if self.include_title {
            cells.push("title");
        }
        cells
    }

    fn record_cells<'a>(&self, record: &'a OptionRecord) -> Vec<&'a str> {
        let mut cells = vec![
            record.value.as_str(),
            record.label.as_str(),
            flag(record.selected),
            flag(record.hidden),
        ];
        if self.include_group {
            cells.push(record.group.as_str());
        }
        if self.include_hide_before {
            cells.push(record.hide_before.as_str());
        }
        if self.include_hide_after {
            cells.push(record.hide_after.as_str());
        }
        if self.include_title {
            cells.push(record.title.as_str());
        }
        cells
    }
}

fn flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Renders records as delimited text.
///
/// Rows are joined by the row separator with no trailing one, so the output
/// of a headerless empty list is the empty string.
pub fn write_options(records: &[OptionRecord], options: &ExportOptions) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(records.len() + 1);
    if options.include_header {
        lines.push(options.header_cells().join(options.column_separator.as_str()));
    }
    for record in records {
        lines.push(
            options
                .record_cells(record)
                .join(options.column_separator.as_str()),
        );
    }
    lines.join(&options.row_separator)
}
