// SPDX-License-Identifier: MPL-2.0
use drive_lens::config::{self, Config, SortDirection};
use drive_lens::i18n::fluent::I18n;
use drive_lens::listing::{classify, Entry};
use drive_lens::navigation::FolderNavigator;
use drive_lens::remote::{FetchError, FolderLister};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

/// In-memory [`FolderLister`] over a fixed tree, recording every request
/// it serves.
struct FakeLister {
    tree: HashMap<Option<String>, Vec<Entry>>,
    calls: Arc<Mutex<Vec<Option<String>>>>,
}

impl FakeLister {
    fn new(tree: HashMap<Option<String>, Vec<Entry>>) -> Self {
        Self {
            tree,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> Vec<Option<String>> {
        self.calls.lock().expect("call log poisoned").clone()
    }
}

impl FolderLister for FakeLister {
    fn list(
        &self,
        folder_id: Option<String>,
    ) -> BoxFuture<'static, Result<Vec<Entry>, FetchError>> {
        self.calls
            .lock()
            .expect("call log poisoned")
            .push(folder_id.clone());
        let result = self
            .tree
            .get(&folder_id)
            .cloned()
            .ok_or_else(|| FetchError::new("no such folder"));
        async move { result }.boxed()
    }
}

fn sample_tree() -> HashMap<Option<String>, Vec<Entry>> {
    let mut tree = HashMap::new();
    tree.insert(
        None,
        vec![
            Entry::folder("A", "Movies"),
            Entry::playable("v-root", "Intro"),
        ],
    );
    tree.insert(
        Some("A".to_string()),
        vec![
            Entry::folder("B", "2020"),
            Entry::playable("v1", "Zeta"),
            Entry::playable("v2", "Árbol"),
        ],
    );
    tree.insert(
        Some("B".to_string()),
        vec![Entry::playable("v3", "January recap")],
    );
    tree
}

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("browser-home"), "Home");

    // 2. Change config to es
    let spanish_config = Config {
        language: Some("es".to_string()),
        ..Config::default()
    };
    config::save_to_path(&spanish_config, &temp_config_file_path)
        .expect("Failed to write spanish config file");

    let loaded_spanish_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load spanish config from path");
    let i18n_es = I18n::new(None, None, &loaded_spanish_config);
    assert_eq!(i18n_es.current_locale().to_string(), "es");
    assert_eq!(i18n_es.tr("browser-home"), "Inicio");

    dir.close().expect("Failed to close temporary directory");
}

#[tokio::test]
async fn scripted_session_walks_the_tree() {
    let lister = FakeLister::new(sample_tree());
    let mut navigator = FolderNavigator::new("Inicio");

    // Root listing: one folder, one video.
    let root = lister
        .list(navigator.current_folder_id().map(str::to_string))
        .await
        .expect("root listing should succeed");
    let classified = classify(&root, SortDirection::Ascending);
    assert_eq!(classified.folders.len(), 1);
    assert_eq!(classified.playables.len(), 1);

    // Descend into "Movies".
    navigator.enter_folder(&classified.folders[0]);
    let movies = lister
        .list(navigator.current_folder_id().map(str::to_string))
        .await
        .expect("folder listing should succeed");
    assert_eq!(navigator.breadcrumb(), ["Inicio", "Movies"]);

    // Case/accent-insensitive sort: Árbol before Zeta.
    let classified = classify(&movies, SortDirection::Ascending);
    let names: Vec<&str> = classified
        .playables
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["Árbol", "Zeta"]);

    // Descend again, then jump back to "Movies" via the breadcrumb.
    navigator.enter_folder(&classified.folders[0]);
    lister
        .list(navigator.current_folder_id().map(str::to_string))
        .await
        .expect("subfolder listing should succeed");
    assert!(navigator.jump_to_crumb(1));
    assert_eq!(navigator.current_folder_id(), Some("A"));
    assert_eq!(navigator.breadcrumb(), ["Inicio", "Movies"]);

    // The session issued exactly root, A, B in that order.
    assert_eq!(
        lister.calls(),
        vec![
            None,
            Some("A".to_string()),
            Some("B".to_string()),
        ]
    );
}

#[tokio::test]
async fn fetch_failure_surfaces_detail_and_retry_repeats_request() {
    let lister = FakeLister::new(sample_tree());
    let mut navigator = FolderNavigator::new("Inicio");
    navigator.enter_folder(&Entry::folder("missing", "Ghost"));

    let folder_id = navigator.current_folder_id().map(str::to_string);
    let error = lister
        .list(folder_id.clone())
        .await
        .expect_err("unknown folder should fail");
    assert_eq!(error.detail(), "no such folder");

    // Retry re-issues the identical request; nothing is rewritten.
    let retry_error = lister
        .list(folder_id)
        .await
        .expect_err("retry hits the same folder");
    assert_eq!(retry_error, error);
    assert_eq!(
        lister.calls(),
        vec![
            Some("missing".to_string()),
            Some("missing".to_string()),
        ]
    );
}

#[tokio::test]
async fn listings_resolve_independently_for_superseded_requests() {
    // Two overlapping fetches: the slow one (root) is superseded by the
    // fast one (folder A). Whichever resolves, each result is tagged by
    // the request that produced it, so the stale root answer is
    // distinguishable and discardable.
    let lister = FakeLister::new(sample_tree());

    let slow = lister.list(None);
    let fast = lister.list(Some("A".to_string()));

    let fast_result = fast.await.expect("fast fetch succeeds");
    let slow_result = slow.await.expect("slow fetch succeeds");

    assert_ne!(fast_result, slow_result);
    assert_eq!(lister.calls(), vec![None, Some("A".to_string())]);
}
