//! Render previews derived from the current records.
//!
//! A preview is a pure function of the list, the policy, and an optional
//! evaluation instant for the hide windows. Nothing here feeds back into the
//! editing state.

use chrono::NaiveDateTime;

use optlist_model::{EditorPolicy, OptionRecord, group_names, parse_instant, validate};

/// The preview shape for whichever mode the policy selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// Drop-down select with optional grouping.
    Select(SelectPreview),
    /// Flat list of checkable items.
    Checkable(CheckablePreview),
}

/// Flat preview used by the radio and checkbox modes.
pub type CheckablePreview = Vec<OptionRecord>;

/// Drop-down preview: a leading placeholder plus ordered sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectPreview {
    /// The empty-valued placeholder, when one leads the visible list.
    pub leading_empty: Option<OptionRecord>,
    /// Grouped and ungrouped sections in render order.
    pub sections: Vec<PreviewSection>,
}

impl SelectPreview {
    /// True when nothing would render.
    pub fn is_empty(&self) -> bool {
        self.leading_empty.is_none() && self.sections.is_empty()
    }

    /// Number of options across the placeholder and all sections.
    pub fn option_count(&self) -> usize {
        let sectioned: usize = self
            .sections
            .iter()
            .map(|section| section.options().len())
            .sum();
        sectioned + usize::from(self.leading_empty.is_some())
    }
}

/// One rendered section of a drop-down preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewSection {
    /// Options rendered under a named group heading.
    Group {
        label: String,
        options: Vec<OptionRecord>,
    },
    /// Options rendered without a heading.
    Ungrouped { options: Vec<OptionRecord> },
}

impl PreviewSection {
    /// The options inside the section.
    pub fn options(&self) -> &[OptionRecord] {
        match self {
            Self::Group { options, .. } | Self::Ungrouped { options } => options,
        }
    }
}

/// True when the record renders at `instant`.
///
/// A hidden record never renders. With an instant, a record is suppressed
/// before its hide-before bound and after its hide-after bound; without one,
/// the hide windows are not evaluated.
pub fn visible_at(record: &OptionRecord, instant: Option<NaiveDateTime>) -> bool {
    if record.hidden {
        return false;
    }
    let Some(now) = instant else {
        return true;
    };
    if let Some(before) = parse_instant(&record.hide_before) {
        if now < before {
            return false;
        }
    }
    if let Some(after) = parse_instant(&record.hide_after) {
        if now > after {
            return false;
        }
    }
    true
}

/// Builds the drop-down preview.
///
/// Visible records whose empty value sits outside the allowed first position
/// are dropped rather than rendered unsubmittable. Grouping applies only
/// while the policy shows groups; section order follows first appearance,
/// with the ungrouped section placed before or after per `group_last`.
pub fn select_preview(
    options: &[OptionRecord],
    policy: &EditorPolicy,
    instant: Option<NaiveDateTime>,
) -> SelectPreview {
    let visible: Vec<&OptionRecord> = options
        .iter()
        .enumerate()
        .filter(|(index, option)| {
            visible_at(option, instant)
                && validate::empty_value_allowed(option, *index, policy.allow_empty_first)
        })
        .map(|(_, option)| option)
        .collect();

    let (leading_empty, rest) = match visible.split_first() {
        Some((first, rest)) if first.value.is_empty() && policy.allow_empty_first => {
            (Some((*first).clone()), rest)
        }
        _ => (None, visible.as_slice()),
    };

    let mut sections: Vec<PreviewSection> = Vec::new();
    if policy.show_group {
        let mut grouped: Vec<PreviewSection> = Vec::new();
        for name in group_names(options) {
            let members: Vec<OptionRecord> = rest
                .iter()
                .filter(|option| option.group == name)
                .map(|option| (*option).clone())
                .collect();
            if !members.is_empty() {
                grouped.push(PreviewSection::Group {
                    label: name,
                    options: members,
                });
            }
        }
        let ungrouped: Vec<OptionRecord> = rest
            .iter()
            .filter(|option| option.group.is_empty())
            .map(|option| (*option).clone())
            .collect();
        let ungrouped =
            (!ungrouped.is_empty()).then_some(PreviewSection::Ungrouped { options: ungrouped });
        if policy.group_last {
            sections.extend(ungrouped);
            sections.extend(grouped);
        } else {
            sections.extend(grouped);
            sections.extend(ungrouped);
        }
    } else if !rest.is_empty() {
        sections.push(PreviewSection::Ungrouped {
            options: rest.iter().map(|option| (*option).clone()).collect(),
        });
    }

    SelectPreview {
        leading_empty,
        sections,
    }
}

/// Builds the flat preview for the radio and checkbox modes.
///
/// Checkable items need a submittable value, so empty-valued records never
/// appear here even when the policy allows a leading one.
pub fn checkable_preview(
    options: &[OptionRecord],
    instant: Option<NaiveDateTime>,
) -> CheckablePreview {
    options
        .iter()
        .filter(|option| visible_at(option, instant) && !option.value.is_empty())
        .cloned()
        .collect()
}
