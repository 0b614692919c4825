//! Import pipeline for pasted delimited option data.
//!
//! Parsing never fails hard: rows that cannot become a usable record are
//! dropped and counted, and the batch as a whole is usable only when at
//! least one record survived.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use optlist_model::{EditorPolicy, OptionRecord, datetime};

use crate::columns::ColumnMap;
use crate::separator::Separator;

/// Longest accepted submission value, in characters.
pub const VALUE_MAX_LEN: usize = 128;
/// Longest accepted label, in characters.
pub const LABEL_MAX_LEN: usize = 512;
/// Longest accepted group name, in characters.
pub const GROUP_MAX_LEN: usize = 64;
/// Longest accepted hide-window bound, in characters.
pub const HIDE_BOUND_MAX_LEN: usize = 64;
/// Longest accepted tooltip, in characters.
pub const TITLE_MAX_LEN: usize = 255;
/// A row carries at most this many cells; extras are dropped.
pub const MAX_COLUMNS: usize = 11;

/// Session settings for one paste-import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportOptions {
    /// Column separator, tab unless reconfigured.
    pub separator: Separator,
    /// Whether the first row names its columns.
    pub has_header: bool,
}

impl ImportOptions {
    /// Sets the column separator.
    #[must_use]
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    /// Declares the first row a header row.
    #[must_use]
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }
}

/// The outcome of parsing one paste.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportBatch {
    /// Records that passed decoding and the acceptance rules, in input order.
    pub records: Vec<OptionRecord>,
    /// Data rows that were dropped.
    pub skipped: usize,
}

impl ImportBatch {
    /// True when the batch carries at least one record.
    pub fn is_valid(&self) -> bool {
        !self.records.is_empty()
    }

    /// Number of accepted records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no record was accepted.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parses pasted text into an [`ImportBatch`].
///
/// `at_list_start` tells the reader whether the first accepted record would
/// land at position 0 of the receiving list; only there may an empty value
/// survive, and only under the empty-first policy.
pub fn parse_options(
    text: &str,
    options: &ImportOptions,
    policy: &EditorPolicy,
    at_list_start: bool,
) -> ImportBatch {
    let rows = tokenize(text, &options.separator);
    if rows.is_empty() {
        return ImportBatch::default();
    }

    let (columns, data_rows) = if options.has_header {
        (ColumnMap::from_header(&rows[0]), &rows[1..])
    } else {
        (ColumnMap::positional(), &rows[..])
    };

    if !columns.has_required() {
        tracing::warn!(
            rows = data_rows.len(),
            "Import aborted: no value and label columns found"
        );
        return ImportBatch {
            records: Vec::new(),
            skipped: data_rows.len(),
        };
    }

    let mut batch = ImportBatch::default();
    let mut seen_values: HashSet<String> = HashSet::new();
    let mut seen_labels: HashSet<String> = HashSet::new();

    for (row_index, row) in data_rows.iter().enumerate() {
        let mut record = decode_row(row, columns);

        // An empty value may survive only on the very first data row, and
        // only when that row will land at position 0 of the receiving list.
        let keep_empty_value = row_index == 0
            && at_list_start
            && policy.allow_empty_first
            && record.value.is_empty()
            && !record.label.is_empty();

        if record.value.is_empty() && !record.label.is_empty() && !keep_empty_value {
            record.value = record.label.clone();
        } else if !record.value.is_empty() && record.label.is_empty() {
            record.label = record.value.clone();
        }

        let complete = !record.label.is_empty() && (keep_empty_value || !record.value.is_empty());
        let unique = policy.allow_duplicate
            || (!seen_values.contains(&record.value) && !seen_labels.contains(&record.label));

        if complete && unique {
            seen_values.insert(record.value.clone());
            seen_labels.insert(record.label.clone());
            batch.records.push(record);
        } else {
            tracing::debug!(row = row_index, "Import row dropped");
            batch.skipped += 1;
        }
    }

    batch
}

/// Splits pasted text into normalized cell rows.
///
/// Blank lines are skipped, every cell is trimmed with internal whitespace
/// collapsed, and rows are truncated to [`MAX_COLUMNS`] cells.
fn tokenize(text: &str, separator: &Separator) -> Vec<Vec<String>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split(separator.as_str())
                .take(MAX_COLUMNS)
                .map(normalize_cell)
                .collect()
        })
        .collect()
}

fn normalize_cell(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn decode_row(row: &[String], columns: ColumnMap) -> OptionRecord {
    OptionRecord {
        value: capped_cell(row, columns.value, VALUE_MAX_LEN),
        label: capped_cell(row, columns.label, LABEL_MAX_LEN),
        selected: parse_flag(cell(row, columns.selected)),
        hidden: parse_flag(cell(row, columns.hidden)),
        group: capped_cell(row, columns.group, GROUP_MAX_LEN),
        hide_before: decode_bound(row, columns.hide_before),
        hide_after: decode_bound(row, columns.hide_after),
        title: capped_cell(row, columns.title, TITLE_MAX_LEN),
    }
}

fn cell(row: &[String], column: Option<usize>) -> &str {
    column
        .and_then(|position| row.get(position))
        .map_or("", String::as_str)
}

fn capped_cell(row: &[String], column: Option<usize>, max_len: usize) -> String {
    cell(row, column).chars().take(max_len).collect()
}

fn decode_bound(row: &[String], column: Option<usize>) -> String {
    let raw = capped_cell(row, column, HIDE_BOUND_MAX_LEN);
    let normalized = datetime::normalize_instant(&raw);
    if normalized.is_empty() && !raw.is_empty() {
        tracing::warn!(input = %raw, "Discarding unparseable hide-window bound");
    }
    normalized
}

/// Decodes a truthy cell: `1`, `true`, `yes`, and `on`, case-insensitively.
fn parse_flag(input: &str) -> bool {
    matches!(
        input.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
