//! Pure list transformations behind the editor commands.
//!
//! Every rejectable operation takes the current records and returns the next
//! list, or `None` when its guard fails. Nothing here mutates in place, so
//! the editor can atomically commit or discard a step.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use optlist_model::{OptionField, OptionRecord, datetime, validate};

/// Direction of a single-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

/// Moves the record at `index` one step, if it has somewhere to go.
pub fn move_option(
    options: &[OptionRecord],
    index: usize,
    direction: MoveDirection,
) -> Option<Vec<OptionRecord>> {
    if index >= options.len() {
        return None;
    }
    let target = match direction {
        MoveDirection::Up => index.checked_sub(1)?,
        MoveDirection::Down => {
            if index + 1 >= options.len() {
                return None;
            }
            index + 1
        }
    };
    let mut next = options.to_vec();
    let record = next.remove(index);
    next.insert(target, record);
    Some(next)
}

/// Flips the hidden flag of the record at `index`.
pub fn toggle_hidden(options: &[OptionRecord], index: usize) -> Option<Vec<OptionRecord>> {
    if index >= options.len() {
        return None;
    }
    let mut next = options.to_vec();
    next[index].hidden = !next[index].hidden;
    Some(next)
}

/// Flips the selected flag of the record at `index`.
///
/// Without `allow_multi` every other record is deselected, so flipping a
/// selected record off can leave the list with no selection at all.
pub fn toggle_selected(
    options: &[OptionRecord],
    index: usize,
    allow_multi: bool,
) -> Option<Vec<OptionRecord>> {
    if index >= options.len() {
        return None;
    }
    let mut next = options.to_vec();
    next[index].selected = !next[index].selected;
    if !allow_multi {
        for (position, record) in next.iter_mut().enumerate() {
            if position != index {
                record.selected = false;
            }
        }
    }
    Some(next)
}

/// Stores a trimmed field value on the record at `index`.
///
/// Hide-window bounds are normalized on the way in and an unparseable bound
/// is stored empty. The write is rejected when it would leave a duplicate
/// value or label anywhere in the list.
pub fn update_field(
    options: &[OptionRecord],
    index: usize,
    field: OptionField,
    input: &str,
    allow_duplicate: bool,
) -> Option<Vec<OptionRecord>> {
    if index >= options.len() {
        return None;
    }
    let stored = if field.is_date() {
        datetime::normalize_instant(input)
    } else {
        input.trim().to_string()
    };
    let mut next = options.to_vec();
    field.set(&mut next[index], stored);
    if validate::no_duplicates(&next, allow_duplicate) {
        Some(next)
    } else {
        None
    }
}

/// Removes the record at `index`, if the deletion guard passes.
pub fn delete_option(options: &[OptionRecord], index: usize) -> Option<Vec<OptionRecord>> {
    let record = options.get(index)?;
    if !validate::can_delete(record) {
        return None;
    }
    let mut next = options.to_vec();
    next.remove(index);
    Some(next)
}

/// Appends a blank record, if every present record is complete.
pub fn add_option(options: &[OptionRecord], allow_empty_first: bool) -> Option<Vec<OptionRecord>> {
    if !validate::can_add_more(options, allow_empty_first) {
        return None;
    }
    let mut next = options.to_vec();
    next.push(OptionRecord::blank());
    Some(next)
}

/// Sorts the list case-insensitively by label, stably.
///
/// An empty-valued record is pinned to the front so a leading placeholder
/// keeps its seat. With `group_aware` the list orders by group name first,
/// labels breaking ties within each group.
pub fn sort_options(options: &[OptionRecord], group_aware: bool) -> Vec<OptionRecord> {
    let mut next = options.to_vec();
    if group_aware {
        next.sort_by(compare_by_group);
    } else {
        next.sort_by(compare_by_label);
    }
    next
}

fn placeholder_rank(record: &OptionRecord) -> u8 {
    u8::from(!record.value.is_empty())
}

fn compare_by_label(a: &OptionRecord, b: &OptionRecord) -> Ordering {
    placeholder_rank(a)
        .cmp(&placeholder_rank(b))
        .then_with(|| a.label.to_lowercase().cmp(&b.label.to_lowercase()))
}

fn compare_by_group(a: &OptionRecord, b: &OptionRecord) -> Ordering {
    placeholder_rank(a)
        .cmp(&placeholder_rank(b))
        .then_with(|| a.group.to_lowercase().cmp(&b.group.to_lowercase()))
        .then_with(|| a.label.to_lowercase().cmp(&b.label.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::{
        MoveDirection, add_option, delete_option, move_option, sort_options, toggle_hidden,
        toggle_selected, update_field,
    };
    use optlist_model::{OptionField, OptionRecord};

    fn abc() -> Vec<OptionRecord> {
        vec![
            OptionRecord::new("a", "A"),
            OptionRecord::new("b", "B"),
            OptionRecord::new("c", "C"),
        ]
    }

    fn values(options: &[OptionRecord]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn move_swaps_with_the_neighbor() {
        let next = move_option(&abc(), 1, MoveDirection::Up).unwrap();
        assert_eq!(values(&next), vec!["b", "a", "c"]);
        let next = move_option(&abc(), 1, MoveDirection::Down).unwrap();
        assert_eq!(values(&next), vec!["a", "c", "b"]);
    }

    #[test]
    fn move_rejects_both_ends() {
        assert!(move_option(&abc(), 0, MoveDirection::Up).is_none());
        assert!(move_option(&abc(), 2, MoveDirection::Down).is_none());
        assert!(move_option(&abc(), 9, MoveDirection::Up).is_none());
    }

    #[test]
    fn toggle_hidden_flips_one_record() {
        let next = toggle_hidden(&abc(), 1).unwrap();
        assert!(next[1].hidden);
        let back = toggle_hidden(&next, 1).unwrap();
        assert_eq!(back, abc());
    }

    #[test]
    fn single_select_clears_the_others() {
        let mut options = abc();
        options[0].selected = true;
        let next = toggle_selected(&options, 2, false).unwrap();
        assert!(!next[0].selected);
        assert!(next[2].selected);
    }

    #[test]
    fn single_select_can_end_up_with_nothing_selected() {
        let mut options = abc();
        options[1].selected = true;
        let next = toggle_selected(&options, 1, false).unwrap();
        assert!(next.iter().all(|o| !o.selected));
    }

    #[test]
    fn multi_select_leaves_the_others_alone() {
        let mut options = abc();
        options[0].selected = true;
        let next = toggle_selected(&options, 2, true).unwrap();
        assert!(next[0].selected);
        assert!(next[2].selected);
    }

    #[test]
    fn update_trims_and_stores() {
        let next = update_field(&abc(), 0, OptionField::Label, "  Alpha  ", false).unwrap();
        assert_eq!(next[0].label, "Alpha");
    }

    #[test]
    fn update_rejects_a_resulting_duplicate() {
        assert!(update_field(&abc(), 2, OptionField::Value, "a", false).is_none());
        assert!(update_field(&abc(), 2, OptionField::Label, "B", false).is_none());
        assert!(update_field(&abc(), 2, OptionField::Value, "a", true).is_some());
    }

    #[test]
    fn update_normalizes_date_fields() {
        let next = update_field(&abc(), 0, OptionField::HideBefore, "2024-03-01", false).unwrap();
        assert_eq!(next[0].hide_before, "2024-03-01T00:00:00");
        let next = update_field(&abc(), 0, OptionField::HideAfter, "whenever", false).unwrap();
        assert_eq!(next[0].hide_after, "");
    }

    #[test]
    fn delete_requires_hidden_or_blank() {
        assert!(delete_option(&abc(), 1).is_none());
        let mut options = abc();
        options[1].hidden = true;
        let next = delete_option(&options, 1).unwrap();
        assert_eq!(values(&next), vec!["a", "c"]);
    }

    #[test]
    fn add_appends_one_blank_record() {
        let next = add_option(&abc(), false).unwrap();
        assert_eq!(next.len(), 4);
        assert!(next[3].is_blank());
        assert!(add_option(&next, false).is_none());
    }

    #[test]
    fn sort_orders_labels_case_insensitively() {
        let options = vec![
            OptionRecord::new("1", "banana"),
            OptionRecord::new("2", "Apple"),
            OptionRecord::new("3", "cherry"),
        ];
        let next = sort_options(&options, false);
        assert_eq!(values(&next), vec!["2", "1", "3"]);
    }

    #[test]
    fn sort_pins_the_empty_valued_placeholder() {
        let options = vec![
            OptionRecord::new("z", "Zebra"),
            OptionRecord::new("", "Pick one"),
            OptionRecord::new("a", "Aardvark"),
        ];
        let next = sort_options(&options, false);
        assert_eq!(values(&next), vec!["", "a", "z"]);
        let next = sort_options(&options, true);
        assert_eq!(next[0].value, "");
    }

    #[test]
    fn group_sort_orders_groups_then_labels() {
        let options = vec![
            OptionRecord::new("c", "Carrot").with_group("Veg"),
            OptionRecord::new("b", "Banana").with_group("Fruit"),
            OptionRecord::new("a", "Apple").with_group("Fruit"),
        ];
        let next = sort_options(&options, true);
        assert_eq!(values(&next), vec!["a", "b", "c"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let options = vec![
            OptionRecord::new("1", "same"),
            OptionRecord::new("2", "same"),
            OptionRecord::new("3", "other"),
        ];
        let next = sort_options(&options, false);
        assert_eq!(values(&next), vec!["3", "1", "2"]);
    }
}
