//! List-level and record-level acceptance predicates.
//!
//! Every mutation gate in the editor reduces to one of these checks, so they
//! stay pure and take their policy inputs as plain flags.

use std::collections::HashSet;

use crate::record::OptionRecord;

/// True when the record may be removed from the list.
///
/// Only hidden records and fully blank records are deletable; everything else
/// must be hidden first so a removal is always a deliberate two-step act.
pub fn can_delete(option: &OptionRecord) -> bool {
    option.hidden || option.is_blank()
}

/// True when the record's value passes the empty-value rule at `index`.
///
/// An empty value is acceptable only on the first record and only when the
/// policy allows an empty leading option.
pub fn empty_value_allowed(option: &OptionRecord, index: usize, allow_empty_first: bool) -> bool {
    !option.value.is_empty() || (index == 0 && allow_empty_first)
}

/// True when no value and no label occurs twice across the list.
///
/// Empty strings count like any other text, so two records with blank values
/// already collide. With `allow_duplicate` the check always passes.
pub fn no_duplicates(options: &[OptionRecord], allow_duplicate: bool) -> bool {
    if allow_duplicate {
        return true;
    }
    let mut values: HashSet<&str> = HashSet::with_capacity(options.len());
    let mut labels: HashSet<&str> = HashSet::with_capacity(options.len());
    for option in options {
        if !values.insert(option.value.as_str()) || !labels.insert(option.label.as_str()) {
            return false;
        }
    }
    true
}

/// True when a blank record may be appended.
///
/// Appending is held back until every present record has a label and a value
/// that passes the empty-value rule, so at most one record is ever incomplete.
pub fn can_add_more(options: &[OptionRecord], allow_empty_first: bool) -> bool {
    options.iter().enumerate().all(|(index, option)| {
        !option.label.is_empty() && empty_value_allowed(option, index, allow_empty_first)
    })
}

#[cfg(test)]
mod tests {
    use super::{can_add_more, can_delete, empty_value_allowed, no_duplicates};
    use crate::record::OptionRecord;

    #[test]
    fn only_hidden_or_blank_records_are_deletable() {
        assert!(can_delete(&OptionRecord::blank()));
        assert!(can_delete(&OptionRecord::new("y", "Yes").with_hidden(true)));
        assert!(!can_delete(&OptionRecord::new("y", "Yes")));
        assert!(!can_delete(&OptionRecord::new("", "Pick one")));
    }

    #[test]
    fn empty_value_is_confined_to_the_first_position() {
        let record = OptionRecord::new("", "Pick one");
        assert!(empty_value_allowed(&record, 0, true));
        assert!(!empty_value_allowed(&record, 0, false));
        assert!(!empty_value_allowed(&record, 3, true));
        assert!(empty_value_allowed(&OptionRecord::new("y", "Yes"), 3, false));
    }

    #[test]
    fn duplicate_values_and_labels_are_both_rejected() {
        let same_value = vec![OptionRecord::new("a", "A"), OptionRecord::new("a", "B")];
        let same_label = vec![OptionRecord::new("a", "A"), OptionRecord::new("b", "A")];
        let distinct = vec![OptionRecord::new("a", "A"), OptionRecord::new("b", "B")];
        assert!(!no_duplicates(&same_value, false));
        assert!(!no_duplicates(&same_label, false));
        assert!(no_duplicates(&distinct, false));
        assert!(no_duplicates(&same_value, true));
    }

    #[test]
    fn two_blank_values_collide() {
        let options = vec![OptionRecord::new("", "Pick one"), OptionRecord::new("", "Other")];
        assert!(!no_duplicates(&options, false));
    }

    #[test]
    fn add_waits_for_every_record_to_be_complete() {
        let mut options = vec![OptionRecord::new("a", "A"), OptionRecord::blank()];
        assert!(!can_add_more(&options, false));
        options[1] = OptionRecord::new("b", "B");
        assert!(can_add_more(&options, false));
    }

    #[test]
    fn add_applies_the_empty_value_rule_per_position() {
        let options = vec![OptionRecord::new("", "Pick one"), OptionRecord::new("b", "B")];
        assert!(can_add_more(&options, true));
        assert!(!can_add_more(&options, false));
    }

    #[test]
    fn empty_list_can_always_add() {
        assert!(can_add_more(&[], false));
    }
}
