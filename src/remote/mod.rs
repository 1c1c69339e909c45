// SPDX-License-Identifier: MPL-2.0
//! Remote listing port and backend wire types.
//!
//! The browsing core never talks HTTP itself; it depends on the
//! [`FolderLister`] capability, which turns an optional folder id into an
//! ordered list of entries or a [`FetchError`]. The production adapter in
//! [`http`] speaks the Drive-style JSON protocol; tests substitute
//! in-memory fakes.

pub mod http;

use crate::listing::{Entry, EntryKind};
use futures_util::future::BoxFuture;
use serde::Deserialize;
use std::fmt;

/// MIME type the backend uses to tag folders.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Failure to retrieve a listing, the only recoverable error in the core.
///
/// Carries the backend's human-readable detail message, surfaced verbatim
/// in the error state next to the retry button. Retrying is always a
/// human decision; the core never retries on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    detail: String,
}

impl FetchError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// The backend-provided detail message.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.detail)
    }
}

/// Capability to list one folder of the remote tree.
///
/// `folder_id = None` lists the root. Implementations must resolve each
/// call independently; the caller handles superseding of overlapping
/// requests.
pub trait FolderLister: Send + Sync {
    fn list(
        &self,
        folder_id: Option<String>,
    ) -> BoxFuture<'static, Result<Vec<Entry>, FetchError>>;
}

/// Top-level success body: `{"files": [...]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingResponse {
    #[serde(default)]
    pub files: Vec<DriveFile>,
}

/// Error body the backend may attach to a non-success status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub details: Option<String>,
}

/// One file object as transmitted by the backend.
///
/// Numeric metadata arrives as decimal strings; parsing is lenient and an
/// unparseable value degrades to absent metadata rather than failing the
/// whole listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    #[serde(default)]
    pub thumbnail_link: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub video_media_metadata: Option<VideoMediaMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMediaMetadata {
    #[serde(default)]
    pub duration_millis: Option<String>,
}

impl DriveFile {
    /// Converts the wire object into a domain entry.
    ///
    /// Returns `None` for items that are neither folders nor video
    /// content; the browser has nothing to do with them.
    pub fn into_entry(self) -> Option<Entry> {
        let kind = if self.mime_type == FOLDER_MIME_TYPE {
            EntryKind::Folder
        } else if self.mime_type.contains("video") {
            EntryKind::Playable
        } else {
            return None;
        };

        let duration_millis = self
            .video_media_metadata
            .and_then(|meta| meta.duration_millis)
            .and_then(|raw| raw.parse::<u64>().ok());

        Some(Entry {
            id: self.id,
            name: self.name,
            kind,
            thumbnail: self.thumbnail_link,
            size_bytes: self.size.and_then(|raw| raw.parse::<u64>().ok()),
            duration_millis,
        })
    }
}
