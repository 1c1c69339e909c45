// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the [`FolderLister`] port.
//!
//! Speaks the Drive-style listing protocol: `GET {base_url}` for the
//! root, `GET {base_url}?folderId={id}` for a subfolder. Success bodies
//! carry `{"files": [...]}`; error bodies may carry `{"details": "..."}`,
//! which becomes the user-visible [`FetchError`] detail.

use super::{DriveFile, ErrorResponse, FetchError, FolderLister, ListingResponse};
use crate::listing::Entry;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;

/// Production [`FolderLister`] backed by a reqwest client.
///
/// The client is cheap to clone; each `list` call owns its own copy so
/// the returned future is `'static` and can outlive the adapter borrow.
#[derive(Debug, Clone)]
pub struct HttpFolderLister {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFolderLister {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl FolderLister for HttpFolderLister {
    fn list(
        &self,
        folder_id: Option<String>,
    ) -> BoxFuture<'static, Result<Vec<Entry>, FetchError>> {
        let client = self.client.clone();
        let base_url = self.base_url.clone();

        async move {
            let mut request = client.get(&base_url);
            if let Some(id) = &folder_id {
                request = request.query(&[("folderId", id.as_str())]);
            }

            let response = request
                .send()
                .await
                .map_err(|err| FetchError::new(err.to_string()))?;
            let status = response.status();
            let body = response
                .bytes()
                .await
                .map_err(|err| FetchError::new(err.to_string()))?;

            if !status.is_success() {
                let detail = serde_json::from_slice::<ErrorResponse>(&body)
                    .ok()
                    .and_then(|parsed| parsed.details)
                    .unwrap_or_else(|| format!("HTTP {status}"));
                return Err(FetchError::new(detail));
            }

            let listing: ListingResponse = serde_json::from_slice(&body)
                .map_err(|err| FetchError::new(err.to_string()))?;
            Ok(listing
                .files
                .into_iter()
                .filter_map(DriveFile::into_entry)
                .collect())
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_remembers_base_url() {
        let lister = HttpFolderLister::new("https://example.test/api/drive-list");
        assert_eq!(lister.base_url(), "https://example.test/api/drive-list");
    }

    #[test]
    fn error_body_details_win_over_status_line() {
        // The mapping logic itself: a parseable error body yields its
        // details field, anything else degrades to the status text.
        let parsed = serde_json::from_slice::<ErrorResponse>(br#"{"details": "rate limited"}"#)
            .ok()
            .and_then(|body| body.details);
        assert_eq!(parsed.as_deref(), Some("rate limited"));

        let unparseable = serde_json::from_slice::<ErrorResponse>(b"<html>nope</html>")
            .ok()
            .and_then(|body| body.details);
        assert_eq!(unparseable, None);
    }
}
