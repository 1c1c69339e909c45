// SPDX-License-Identifier: MPL-2.0
//! Browser screen: header, breadcrumb trail, and the classified entry
//! grids.
//!
//! The component is intentionally thin. Navigation state lives in the
//! application's `FolderNavigator`; this module translates clicks into
//! events the application applies, and renders whatever location and
//! listing it is handed.

mod view;

pub use view::{view, ViewContext};

use crate::listing::Entry;
use crate::remote::FetchError;

/// Where the browser currently is with respect to the backend.
///
/// While a fetch is pending the previous listing is not shown; the
/// loading state replaces it until the matching result arrives.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(FetchError),
}

impl LoadState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Messages emitted by the browser widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// A tile was activated; folders descend, playables open the player.
    EntryPressed(Entry),
    CrumbPressed(usize),
    BackPressed,
    HomePressed,
    RefreshPressed,
    /// Retry after a failed fetch; re-issues the identical request.
    RetryPressed,
    SortTogglePressed,
    ThemeTogglePressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    OpenFolder(Entry),
    Play(Entry),
    JumpToCrumb(usize),
    GoBack,
    GoHome,
    Refresh,
    Retry,
    ToggleSort,
    ToggleTheme,
}

/// Translates a browser message into an application event.
pub fn update(message: Message) -> Event {
    match message {
        Message::EntryPressed(entry) => {
            if entry.is_folder() {
                Event::OpenFolder(entry)
            } else {
                Event::Play(entry)
            }
        }
        Message::CrumbPressed(index) => Event::JumpToCrumb(index),
        Message::BackPressed => Event::GoBack,
        Message::HomePressed => Event::GoHome,
        Message::RefreshPressed => Event::Refresh,
        Message::RetryPressed => Event::Retry,
        Message::SortTogglePressed => Event::ToggleSort,
        Message::ThemeTogglePressed => Event::ToggleTheme,
    }
}
