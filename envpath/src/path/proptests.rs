//! Property-based tests for splitting, joining and classification.

use super::classify::{classify_with, EntryStatus};
use super::reader::{join_path_list, split_path_list, LIST_SEPARATOR};
use super::types::{InvalidReason, PathEntry};
use proptest::prelude::*;

// Entries never contain the separator; empty entries are allowed.
fn entry_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./ -]{0,12}"
}

fn entries_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(entry_strategy(), 1..12)
}

// Deterministic stand-in for the filesystem: entries with an even length
// "exist".
fn parity_probe(entry: &PathEntry) -> EntryStatus {
    if entry.as_os_str().len() % 2 == 0 {
        EntryStatus::Valid
    } else {
        EntryStatus::Invalid(InvalidReason::Missing)
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Splitting a joined list gives back the same entries.
    #[test]
    fn split_join_roundtrip(parts in entries_strategy()) {
        let value = parts.join(&LIST_SEPARATOR.to_string());
        let entries = split_path_list(&value);
        let texts: Vec<String> = entries.iter().map(ToString::to_string).collect();
        prop_assert_eq!(&texts, &parts);
        prop_assert_eq!(join_path_list(&entries), value.as_str());
    }

    // Every entry lands in exactly one class.
    #[test]
    fn classification_partitions_entries(parts in entries_strategy()) {
        let entries: Vec<PathEntry> = parts.iter().map(|p| PathEntry::from(p.as_str())).collect();
        let classified = classify_with(&entries, &parity_probe, |_, _| {});
        prop_assert_eq!(classified.valid().len() + classified.invalid().count(), entries.len());
    }

    // Each class keeps the original relative order.
    #[test]
    fn classification_preserves_order(parts in entries_strategy()) {
        let entries: Vec<PathEntry> = parts.iter().map(|p| PathEntry::from(p.as_str())).collect();
        let classified = classify_with(&entries, &parity_probe, |_, _| {});

        let expected_valid: Vec<&PathEntry> =
            entries.iter().filter(|e| parity_probe(e).is_valid()).collect();
        let expected_invalid: Vec<&PathEntry> =
            entries.iter().filter(|e| !parity_probe(e).is_valid()).collect();

        prop_assert_eq!(classified.valid().iter().collect::<Vec<_>>(), expected_valid);
        prop_assert_eq!(classified.invalid().collect::<Vec<_>>(), expected_invalid);
    }

    // The cleaned value re-splits into exactly the valid entries.
    #[test]
    fn cleaned_value_resplits_to_valid(parts in entries_strategy()) {
        let entries: Vec<PathEntry> = parts.iter().map(|p| PathEntry::from(p.as_str())).collect();
        let classified = classify_with(&entries, &parity_probe, |_, _| {});
        prop_assume!(!classified.valid().is_empty());

        let resplit = split_path_list(&classified.cleaned_value());
        prop_assert_eq!(resplit.as_slice(), classified.valid());
    }

    // Classifying twice against the same view gives the same partition.
    #[test]
    fn classification_idempotent(parts in entries_strategy()) {
        let entries: Vec<PathEntry> = parts.iter().map(|p| PathEntry::from(p.as_str())).collect();
        let first = classify_with(&entries, &parity_probe, |_, _| {});
        let second = classify_with(&entries, &parity_probe, |_, _| {});
        prop_assert_eq!(first, second);
    }
}
