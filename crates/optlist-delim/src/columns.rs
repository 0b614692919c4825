//! Column discovery for imported option tables.

/// Resolved column positions for one import.
///
/// Headerless input is read positionally; input with a header row is mapped
/// by name through [`ColumnMap::from_header`]. Absent columns stay `None` and
/// decode to field defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub value: Option<usize>,
    pub label: Option<usize>,
    pub selected: Option<usize>,
    pub hidden: Option<usize>,
    pub group: Option<usize>,
    pub hide_before: Option<usize>,
    pub hide_after: Option<usize>,
    pub title: Option<usize>,
}

impl ColumnMap {
    /// The fixed column order used when no header row is present.
    pub fn positional() -> Self {
        Self {
            value: Some(0),
            label: Some(1),
            selected: Some(2),
            hidden: Some(3),
            group: Some(4),
            hide_before: Some(5),
            hide_after: Some(6),
            title: Some(7),
        }
    }

    /// Maps columns by header name, case-insensitively.
    ///
    /// Legacy header synonyms are accepted: `default` and `checked` address
    /// the selected column, `show` and the historical misspelling `visable`
    /// address the hidden column. Unrecognized headers are ignored and a
    /// repeated name keeps its last position.
    pub fn from_header(header: &[String]) -> Self {
        let mut map = Self::default();
        for (position, cell) in header.iter().enumerate() {
            match cell.to_lowercase().as_str() {
                "value" => map.value = Some(position),
                "label" => map.label = Some(position),
                "default" | "selected" | "checked" => map.selected = Some(position),
                "hidden" | "show" | "visable" => map.hidden = Some(position),
                "group" => map.group = Some(position),
                "hidebefore" => map.hide_before = Some(position),
                "hideafter" => map.hide_after = Some(position),
                "title" => map.title = Some(position),
                _ => {}
            }
        }
        map
    }

    /// True when the columns an import cannot do without were found.
    pub fn has_required(self) -> bool {
        self.value.is_some() && self.label.is_some()
    }
}
