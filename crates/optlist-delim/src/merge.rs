//! Merge rules for landing an imported batch in an existing list.

use std::collections::HashSet;

use optlist_model::OptionRecord;

/// How an imported batch lands in the receiving list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Discard the existing records and keep the batch.
    Replace,
    /// Keep the existing records and add the batch behind them.
    Append,
}

/// Applies a merge policy to an accepted batch.
///
/// Returns the merged list, or `None` when the merge would not change the
/// receiving list: an empty batch, or an append in which every incoming
/// record collides away.
pub fn merge(
    existing: &[OptionRecord],
    incoming: Vec<OptionRecord>,
    policy: MergePolicy,
    allow_duplicate: bool,
) -> Option<Vec<OptionRecord>> {
    if incoming.is_empty() {
        return None;
    }
    match policy {
        MergePolicy::Replace => Some(incoming),
        MergePolicy::Append => merge_append(existing, incoming, allow_duplicate),
    }
}

/// Appends a batch behind the existing records, existing records winning.
///
/// Without `allow_duplicate` every value and label may occur once across the
/// union; collisions inside the existing list itself are also squeezed out so
/// the result always satisfies the uniqueness rule. Incoming records with an
/// empty value are dropped when the list already has a first record.
fn merge_append(
    existing: &[OptionRecord],
    incoming: Vec<OptionRecord>,
    allow_duplicate: bool,
) -> Option<Vec<OptionRecord>> {
    let mut merged: Vec<OptionRecord> = Vec::with_capacity(existing.len() + incoming.len());
    let mut seen_values: HashSet<String> = HashSet::new();
    let mut seen_labels: HashSet<String> = HashSet::new();

    for record in existing {
        if allow_duplicate || !collides(&seen_values, &seen_labels, record) {
            seen_values.insert(record.value.clone());
            seen_labels.insert(record.label.clone());
            merged.push(record.clone());
        }
    }

    let mut appended = 0usize;
    for record in incoming {
        if record.value.is_empty() && !merged.is_empty() {
            tracing::debug!(label = %record.label, "Dropping empty-valued record mid-list");
            continue;
        }
        if allow_duplicate || !collides(&seen_values, &seen_labels, &record) {
            seen_values.insert(record.value.clone());
            seen_labels.insert(record.label.clone());
            merged.push(record);
            appended += 1;
        }
    }

    if appended > 0 { Some(merged) } else { None }
}

fn collides(values: &HashSet<String>, labels: &HashSet<String>, record: &OptionRecord) -> bool {
    values.contains(&record.value) || labels.contains(&record.label)
}

#[cfg(test)]
mod tests {
    use super::{MergePolicy, merge};
    use optlist_model::OptionRecord;

    fn records(pairs: &[(&str, &str)]) -> Vec<OptionRecord> {
        pairs
            .iter()
            .map(|(value, label)| OptionRecord::new(*value, *label))
            .collect()
    }

    #[test]
    fn replace_discards_the_existing_list() {
        let existing = records(&[("a", "A")]);
        let incoming = records(&[("b", "B"), ("c", "C")]);
        let merged = merge(&existing, incoming.clone(), MergePolicy::Replace, false);
        assert_eq!(merged, Some(incoming));
    }

    #[test]
    fn append_keeps_existing_records_first() {
        let existing = records(&[("a", "A")]);
        let incoming = records(&[("b", "B")]);
        let merged = merge(&existing, incoming, MergePolicy::Append, false).unwrap();
        assert_eq!(merged, records(&[("a", "A"), ("b", "B")]));
    }

    #[test]
    fn append_drops_colliding_incomers() {
        let existing = records(&[("a", "A"), ("b", "B")]);
        let incoming = records(&[("b", "Other"), ("x", "A"), ("c", "C")]);
        let merged = merge(&existing, incoming, MergePolicy::Append, false).unwrap();
        assert_eq!(merged, records(&[("a", "A"), ("b", "B"), ("c", "C")]));
    }

    #[test]
    fn append_with_nothing_surviving_is_a_no_op() {
        let existing = records(&[("a", "A")]);
        let incoming = records(&[("a", "Dup"), ("z", "A")]);
        assert_eq!(merge(&existing, incoming, MergePolicy::Append, false), None);
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let existing = records(&[("a", "A")]);
        assert_eq!(merge(&existing, Vec::new(), MergePolicy::Replace, false), None);
        assert_eq!(merge(&existing, Vec::new(), MergePolicy::Append, false), None);
    }

    #[test]
    fn empty_valued_incomer_may_not_land_mid_list() {
        let existing = records(&[("a", "A")]);
        let incoming = records(&[("", "Pick one"), ("b", "B")]);
        let merged = merge(&existing, incoming, MergePolicy::Append, false).unwrap();
        assert_eq!(merged, records(&[("a", "A"), ("b", "B")]));
    }

    #[test]
    fn append_into_an_empty_list_keeps_a_leading_empty_value() {
        let incoming = records(&[("", "Pick one"), ("b", "B")]);
        let merged = merge(&[], incoming.clone(), MergePolicy::Append, false);
        assert_eq!(merged, Some(incoming));
    }

    #[test]
    fn duplicates_survive_when_allowed() {
        let existing = records(&[("a", "A")]);
        let incoming = records(&[("a", "A")]);
        let merged = merge(&existing, incoming, MergePolicy::Append, true).unwrap();
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn existing_internal_duplicates_are_squeezed_out() {
        let existing = records(&[("a", "A"), ("a", "Again"), ("b", "B")]);
        let incoming = records(&[("c", "C")]);
        let merged = merge(&existing, incoming, MergePolicy::Append, false).unwrap();
        assert_eq!(merged, records(&[("a", "A"), ("b", "B"), ("c", "C")]));
    }
}
