//! Visibility Derivation
//!
//! Pure mapping from (checklist, filter controls, dataset) to per-row
//! hidden flags. Recomputed in full on every pass.

use crate::checklist::{merge_hidden, persist, ChecklistStorage, StorageError};
use crate::models::{ChecklistRow, ControlOption, Eaten, Entry};

/// Whether the eaten filter alone hides a row
pub fn eaten_hides(eaten: Eaten, checked: bool) -> bool {
    match eaten {
        Eaten::Default => false,
        Eaten::Yes => !checked,
        Eaten::No => checked,
    }
}

/// Case-sensitive substring search over all of the entry's fields.
/// An empty search matches everything.
pub fn search_hides(entry: &Entry, search: &str) -> bool {
    !entry.search_text().contains(search)
}

/// One hidden flag per checklist row.
///
/// The eaten filter takes precedence: once it hides a row the search is
/// not evaluated. A row without a matching entry is hidden.
pub fn derive_hidden(rows: &[ChecklistRow], controls: &ControlOption, dataset: &[Entry]) -> Vec<bool> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            if eaten_hides(controls.eaten, row.value) {
                return true;
            }
            dataset
                .get(i)
                .map_or(true, |entry| search_hides(entry, &controls.search))
        })
        .collect()
}

/// Checklist and dataset lengths diverged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Misaligned {
    pub rows: usize,
    pub entries: usize,
}

impl std::fmt::Display for Misaligned {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Checklist has {} rows but dataset has {} entries", self.rows, self.entries)
    }
}

impl std::error::Error for Misaligned {}

pub fn check_alignment(rows: &[ChecklistRow], dataset: &[Entry]) -> Result<(), Misaligned> {
    if rows.len() == dataset.len() {
        Ok(())
    } else {
        Err(Misaligned { rows: rows.len(), entries: dataset.len() })
    }
}

/// Output of one derivation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPass {
    /// Freshly derived flags, used to gate rendering
    pub hidden: Vec<bool>,
    /// Checklist copy carrying `hidden`, reported upward and persisted
    pub merged: Vec<ChecklistRow>,
}

pub fn sync_pass(rows: &[ChecklistRow], controls: &ControlOption, dataset: &[Entry]) -> SyncPass {
    let hidden = derive_hidden(rows, controls, dataset);
    let merged = merge_hidden(rows, &hidden);
    SyncPass { hidden, merged }
}

/// Derive, then persist the merged checklist.
///
/// Runs on every pass, whether triggered by a toggle or a filter change.
/// The pass is returned even when the write fails.
pub fn run_pass<S: ChecklistStorage + ?Sized>(
    storage: &S,
    rows: &[ChecklistRow],
    controls: &ControlOption,
    dataset: &[Entry],
) -> (SyncPass, Result<(), StorageError>) {
    let pass = sync_pass(rows, controls, dataset);
    let saved = persist(storage, &pass.merged);
    (pass, saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{fresh, initialize, toggle, MemoryStorage};
    use std::collections::BTreeMap;

    fn entry(name: &str, tags: &str) -> Entry {
        Entry {
            name: name.to_string(),
            google_map: format!("https://maps.example/{}", name.to_lowercase()),
            reservation: None,
            waiting: None,
            tags: Some(tags.to_string()),
            extra: BTreeMap::new(),
        }
    }

    fn dataset() -> Vec<Entry> {
        vec![entry("Ichiran", "tonkotsu"), entry("Ippudo", "miso")]
    }

    fn checked(values: &[bool]) -> Vec<ChecklistRow> {
        values
            .iter()
            .enumerate()
            .map(|(id, &value)| ChecklistRow { id, value, is_hidden: false })
            .collect()
    }

    fn controls(eaten: Eaten, search: &str) -> ControlOption {
        ControlOption { eaten, search: search.to_string() }
    }

    #[test]
    fn test_eaten_yes_hides_unchecked() {
        let hidden = derive_hidden(&checked(&[false, false]), &controls(Eaten::Yes, ""), &dataset());
        assert_eq!(hidden, vec![true, true]);
    }

    #[test]
    fn test_search_matches_any_field() {
        let hidden = derive_hidden(&checked(&[false, false]), &controls(Eaten::Default, "miso"), &dataset());
        assert_eq!(hidden, vec![true, false]);

        // Map link is searchable too
        let hidden = derive_hidden(&checked(&[false, false]), &controls(Eaten::Default, "maps.example/ichiran"), &dataset());
        assert_eq!(hidden, vec![false, true]);
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let hidden = derive_hidden(&checked(&[false, false]), &controls(Eaten::Default, "MISO"), &dataset());
        assert_eq!(hidden, vec![true, true]);
    }

    #[test]
    fn test_eaten_no_keeps_unchecked() {
        let hidden = derive_hidden(&checked(&[true, false]), &controls(Eaten::No, ""), &dataset());
        assert_eq!(hidden, vec![true, false]);
    }

    #[test]
    fn test_eaten_precedence_over_search() {
        let rows = checked(&[false, true]);
        for search in ["", "Ichiran", "miso", "nothing matches"] {
            let hidden = derive_hidden(&rows, &controls(Eaten::Yes, search), &dataset());
            assert!(hidden[0], "unchecked row must stay hidden for search {:?}", search);
        }
    }

    #[test]
    fn test_empty_search_hides_only_eaten() {
        let rows = checked(&[true, false]);
        for eaten in [Eaten::Default, Eaten::Yes, Eaten::No] {
            let hidden = derive_hidden(&rows, &controls(eaten, ""), &dataset());
            let expected: Vec<bool> = rows.iter().map(|r| eaten_hides(eaten, r.value)).collect();
            assert_eq!(hidden, expected);
        }
    }

    #[test]
    fn test_derive_is_idempotent() {
        let rows = checked(&[true, false]);
        let c = controls(Eaten::No, "Ipp");
        assert_eq!(derive_hidden(&rows, &c, &dataset()), derive_hidden(&rows, &c, &dataset()));
    }

    #[test]
    fn test_toggle_under_default_keeps_hidden_flag() {
        let data = dataset();
        let c = controls(Eaten::Default, "miso");
        let before = derive_hidden(&fresh(2), &c, &data);
        for i in 0..2 {
            let after = derive_hidden(&toggle(&fresh(2), i, true), &c, &data);
            assert_eq!(after[i], before[i]);
        }
    }

    #[test]
    fn test_missing_entry_is_hidden() {
        let rows = fresh(3);
        assert_eq!(check_alignment(&rows, &dataset()), Err(Misaligned { rows: 3, entries: 2 }));
        assert_eq!(derive_hidden(&rows, &ControlOption::default(), &dataset()), vec![false, false, true]);
        assert!(check_alignment(&fresh(2), &dataset()).is_ok());
    }

    #[test]
    fn test_sync_pass_reports_fresh_flags() {
        // Stale flags from a previous pass must be overwritten
        let rows = vec![
            ChecklistRow { id: 0, value: true, is_hidden: true },
            ChecklistRow { id: 1, value: false, is_hidden: false },
        ];
        let pass = sync_pass(&rows, &controls(Eaten::Yes, ""), &dataset());
        assert_eq!(pass.hidden, vec![false, true]);
        let values: Vec<bool> = pass.merged.iter().map(|r| r.value).collect();
        let flags: Vec<bool> = pass.merged.iter().map(|r| r.is_hidden).collect();
        assert_eq!(values, vec![true, false]);
        assert_eq!(flags, pass.hidden);
    }

    #[test]
    fn test_run_pass_persists_on_filter_change() {
        let storage = MemoryStorage::default();
        let data = dataset();
        let rows = checked(&[true, false]);

        let (first, saved) = run_pass(&storage, &rows, &controls(Eaten::Default, ""), &data);
        assert!(saved.is_ok());
        assert_eq!(first.hidden, vec![false, false]);
        assert_eq!(initialize(storage.load().as_deref(), 2), first.merged);

        // Only the eaten filter changes; checked values stay put
        let (second, saved) = run_pass(&storage, &rows, &controls(Eaten::No, ""), &data);
        assert!(saved.is_ok());
        assert_eq!(second.hidden, vec![true, false]);
        let stored = initialize(storage.load().as_deref(), 2);
        assert_eq!(stored, second.merged);
        let stored_flags: Vec<bool> = stored.iter().map(|r| r.is_hidden).collect();
        let stored_values: Vec<bool> = stored.iter().map(|r| r.value).collect();
        assert_eq!(stored_flags, vec![true, false]);
        assert_eq!(stored_values, vec![true, false]);
    }
}
