// SPDX-License-Identifier: MPL-2.0
//! Folder navigation and history management for the remote tree.
//!
//! This module provides a shared `FolderNavigator` that tracks where the
//! user is in the remote folder hierarchy: the current folder id, the
//! breadcrumb trail shown in the header, and the back history used to
//! restore the exact parent folder on "back". The three pieces are only
//! ever modified together, so breadcrumb clicks, "back" and "home" always
//! reconstruct a consistent location.

use crate::listing::Entry;

/// One record per descent, in descent order. `prior_folder_id` is the
/// folder the user was in before the descent (`None` = root) and
/// `prior_label` the breadcrumb label shown for it at that moment.
#[derive(Debug, Clone, PartialEq)]
struct HistoryEntry {
    prior_folder_id: Option<String>,
    prior_label: String,
}

/// Tracks the current location in the remote tree.
///
/// All operations are total: malformed indices are caller-contract
/// violations guarded by debug assertions, not runtime failures. The
/// navigator never talks to the backend itself; operations report whether
/// the current folder changed so the caller knows when to re-fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderNavigator {
    current_folder_id: Option<String>,
    /// Non-empty; element 0 is always the root label.
    breadcrumb: Vec<String>,
    history: Vec<HistoryEntry>,
}

impl FolderNavigator {
    /// Creates a navigator positioned at the root of the tree.
    pub fn new(root_label: impl Into<String>) -> Self {
        Self {
            current_folder_id: None,
            breadcrumb: vec![root_label.into()],
            history: Vec::new(),
        }
    }

    /// Descends into `folder`, recording the prior location in the
    /// history and appending the folder's name to the breadcrumb.
    ///
    /// The caller must only pass folder entries; classification upstream
    /// guarantees this. The caller re-fetches the listing afterwards.
    pub fn enter_folder(&mut self, folder: &Entry) {
        debug_assert!(folder.is_folder(), "enter_folder requires a folder entry");

        let prior_label = self
            .breadcrumb
            .last()
            .expect("breadcrumb is never empty")
            .clone();
        self.history.push(HistoryEntry {
            prior_folder_id: self.current_folder_id.clone(),
            prior_label,
        });
        self.breadcrumb.push(folder.name.clone());
        self.current_folder_id = Some(folder.id.clone());
    }

    /// Goes back one level. Returns whether the location changed, which
    /// is `false` only when the history is already empty.
    pub fn go_back(&mut self) -> bool {
        let Some(record) = self.history.pop() else {
            return false;
        };
        self.current_folder_id = record.prior_folder_id;
        self.breadcrumb.pop();
        true
    }

    /// Jumps to the breadcrumb at `index`, shrinking trail and history as
    /// if the user had walked there. `index` must be within the
    /// breadcrumb; anything else is a caller bug.
    ///
    /// Returns whether the current folder id changed. The caller only
    /// re-fetches when it did; clicking the crumb of the folder already
    /// shown must not spend a request.
    pub fn jump_to_crumb(&mut self, index: usize) -> bool {
        debug_assert!(
            index < self.breadcrumb.len(),
            "breadcrumb index {index} out of range"
        );

        if index == 0 {
            let changed = self.current_folder_id.is_some();
            self.go_to_root();
            return changed;
        }

        let previous = self.current_folder_id.clone();
        // The record pushed when leaving crumb `index` carries that
        // crumb's folder id. Jumping to the last crumb finds no record
        // and keeps the current id.
        if let Some(record) = self.history.get(index) {
            self.current_folder_id = record.prior_folder_id.clone();
        }
        self.history.truncate(index - 1);
        self.breadcrumb.truncate(index + 1);

        self.current_folder_id != previous
    }

    /// Resets to the initial root state unconditionally. The caller
    /// re-fetches the root listing.
    pub fn go_to_root(&mut self) {
        self.current_folder_id = None;
        self.history.clear();
        self.breadcrumb.truncate(1);
    }

    /// Returns the current folder id, `None` at root.
    pub fn current_folder_id(&self) -> Option<&str> {
        self.current_folder_id.as_deref()
    }

    /// Returns the breadcrumb trail, root label first.
    pub fn breadcrumb(&self) -> &[String] {
        &self.breadcrumb
    }

    /// Checks whether a "back" operation would change the location.
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns the number of recorded descents.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_at_root(&self) -> bool {
        self.current_folder_id.is_none()
    }

    /// Display label for the current folder.
    ///
    /// At root this is the root label. Below root the authoritative name
    /// is looked up in the freshly fetched `listing`, since the name known
    /// at click-time may have drifted from the backend's. `None` means no
    /// match was found and the caller should show a generic placeholder
    /// rather than a possibly stale label.
    pub fn current_label<'a>(&'a self, listing: &'a [Entry]) -> Option<&'a str> {
        let Some(current_id) = self.current_folder_id.as_deref() else {
            return Some(self.breadcrumb[0].as_str());
        };
        if self.history.is_empty() {
            return None;
        }
        listing
            .iter()
            .find(|entry| entry.id == current_id)
            .map(|entry| entry.name.as_str())
    }
}
