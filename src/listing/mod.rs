// SPDX-License-Identifier: MPL-2.0
//! Remote listing data model and entry classification.
//!
//! A listing is an ordered snapshot of one remote folder's contents. This
//! module partitions it into folders and playable videos and sorts each
//! group independently with the locale-aware comparator from [`collate`],
//! in the direction selected by the user.

pub mod collate;

use crate::config::SortDirection;

/// What an [`Entry`] is, derived from the backend type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A folder that can be descended into.
    Folder,
    /// A video that can be opened in the overlay player.
    Playable,
}

/// One item in a remote listing. Immutable snapshot; never mutated after
/// the backend returns it.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Opaque backend identifier, unique within the backend.
    pub id: String,
    pub name: String,
    pub kind: EntryKind,
    /// Thumbnail URL, meaningful only for playable entries.
    pub thumbnail: Option<String>,
    /// File size in bytes, meaningful only for playable entries.
    pub size_bytes: Option<u64>,
    /// Video duration in milliseconds, meaningful only for playable entries.
    pub duration_millis: Option<u64>,
}

impl Entry {
    /// Creates a folder entry with no display metadata.
    #[must_use]
    pub fn folder(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: EntryKind::Folder,
            thumbnail: None,
            size_bytes: None,
            duration_millis: None,
        }
    }

    /// Creates a playable entry with no display metadata.
    #[must_use]
    pub fn playable(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: EntryKind::Playable,
            thumbnail: None,
            size_bytes: None,
            duration_millis: None,
        }
    }

    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.kind == EntryKind::Playable
    }
}

/// A listing partitioned into sorted folders and sorted playables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classified {
    pub folders: Vec<Entry>,
    pub playables: Vec<Entry>,
}

impl Classified {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.playables.is_empty()
    }
}

/// Partitions `entries` by kind and sorts each partition by name.
///
/// Sorting is stable: entries whose names compare equal under
/// [`collate::compare`] keep their original relative order, in both
/// directions. Descending order negates the comparator rather than
/// reversing the sorted result, so ties are never flipped. The input is
/// not mutated.
#[must_use]
pub fn classify(entries: &[Entry], direction: SortDirection) -> Classified {
    let mut folders: Vec<Entry> = Vec::new();
    let mut playables: Vec<Entry> = Vec::new();

    for entry in entries {
        match entry.kind {
            EntryKind::Folder => folders.push(entry.clone()),
            EntryKind::Playable => playables.push(entry.clone()),
        }
    }

    sort_by_name(&mut folders, direction);
    sort_by_name(&mut playables, direction);

    Classified { folders, playables }
}

fn sort_by_name(entries: &mut [Entry], direction: SortDirection) {
    match direction {
        SortDirection::Ascending => {
            entries.sort_by(|a, b| collate::compare(&a.name, &b.name));
        }
        SortDirection::Descending => {
            entries.sort_by(|a, b| collate::compare(&b.name, &a.name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn partitions_folders_and_playables_independently() {
        let entries = vec![
            Entry::folder("1", "Zeta"),
            Entry::playable("2", "alpha"),
        ];

        let classified = classify(&entries, SortDirection::Ascending);

        assert_eq!(names(&classified.folders), vec!["Zeta"]);
        assert_eq!(names(&classified.playables), vec!["alpha"]);
    }

    #[test]
    fn sorts_each_partition_by_locale_aware_name() {
        let entries = vec![
            Entry::folder("a", "Ñu"),
            Entry::folder("b", "zorro"),
            Entry::folder("c", "Noche"),
            Entry::playable("d", "Éxodo"),
            Entry::playable("e", "agua"),
        ];

        let classified = classify(&entries, SortDirection::Ascending);

        assert_eq!(names(&classified.folders), vec!["Noche", "Ñu", "zorro"]);
        assert_eq!(names(&classified.playables), vec!["agua", "Éxodo"]);
    }

    #[test]
    fn descending_exactly_reverses_distinct_names() {
        let entries = vec![
            Entry::playable("1", "beta"),
            Entry::playable("2", "alpha"),
            Entry::playable("3", "gamma"),
        ];

        let ascending = classify(&entries, SortDirection::Ascending);
        let descending = classify(&entries, SortDirection::Descending);

        let mut reversed = ascending.playables.clone();
        reversed.reverse();
        assert_eq!(descending.playables, reversed);
    }

    #[test]
    fn classify_is_idempotent_under_resorting() {
        let entries = vec![
            Entry::playable("1", "charlie"),
            Entry::playable("2", "alpha"),
            Entry::playable("3", "bravo"),
        ];

        let once = classify(&entries, SortDirection::Ascending);
        let twice = classify(&once.playables, SortDirection::Ascending);

        assert_eq!(once.playables, twice.playables);
    }

    #[test]
    fn equal_names_keep_original_relative_order() {
        // "Árbol" and "arbol" compare equal under base sensitivity, so a
        // stable sort must leave the id order untouched.
        let entries = vec![
            Entry::playable("first", "Árbol"),
            Entry::playable("second", "arbol"),
        ];

        let ascending = classify(&entries, SortDirection::Ascending);
        let ids: Vec<&str> = ascending.playables.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);

        // Stability comes from the comparator, not from reversing arrays:
        // the tie keeps its original order in descending as well.
        let descending = classify(&entries, SortDirection::Descending);
        let ids: Vec<&str> = descending.playables.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn input_is_not_mutated() {
        let entries = vec![
            Entry::playable("1", "zeta"),
            Entry::playable("2", "alpha"),
        ];
        let snapshot = entries.clone();

        let _ = classify(&entries, SortDirection::Ascending);

        assert_eq!(entries, snapshot);
    }

    #[test]
    fn empty_listing_classifies_to_empty() {
        let classified = classify(&[], SortDirection::Ascending);
        assert!(classified.is_empty());
    }
}
