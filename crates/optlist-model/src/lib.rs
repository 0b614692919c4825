pub mod datetime;
pub mod event;
pub mod policy;
pub mod record;
pub mod simplified;
pub mod validate;

pub use datetime::{ISO_INSTANT_FORMAT, is_valid_instant, normalize_instant, parse_instant};
pub use event::{EditAction, EventDescriptor, OptionField};
pub use policy::{EditorPolicy, RenderMode};
pub use record::{OptionRecord, group_names};
pub use simplified::{SimplifiedOption, expand, simplify};
pub use validate::{can_add_more, can_delete, empty_value_allowed, no_duplicates};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips_through_json() {
        let record = OptionRecord::new("y", "Yes")
            .with_group("Answers")
            .with_hide_before("2024-01-01T00:00:00");
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: OptionRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }

    #[test]
    fn predicates_compose_over_a_small_list() {
        let options = vec![
            OptionRecord::new("", "Pick one"),
            OptionRecord::new("y", "Yes"),
            OptionRecord::new("n", "No").with_hidden(true),
        ];
        assert!(no_duplicates(&options, false));
        assert!(can_add_more(&options, true));
        assert!(!can_delete(&options[1]));
        assert!(can_delete(&options[2]));
    }
}
