// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the browser and the
//! overlay player.
//!
//! The `App` struct wires together the domains (navigation, listing,
//! playback, localization) and translates messages into side effects like
//! listing fetches or window mode changes. This file intentionally keeps
//! policy decisions (supersede rule, endpoint resolution, persistence of
//! toggles) close to the main update loop so it is easy to audit
//! user-facing behavior.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, SortDirection};
use crate::i18n::fluent::I18n;
use crate::listing::{Classified, Entry};
use crate::navigation::FolderNavigator;
use crate::remote::http::HttpFolderLister;
use crate::remote::FolderLister;
use crate::ui::browser::LoadState;
use crate::ui::player;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 650;

/// Root Iced application state that bridges the browser, the overlay
/// player, localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    navigator: FolderNavigator,
    /// Raw entries of the last applied fetch, in backend order. Kept for
    /// live breadcrumb-label lookups; the grids render `classified`.
    listing: Vec<Entry>,
    classified: Classified,
    load: LoadState,
    player: Option<player::State>,
    sort_direction: SortDirection,
    theme_mode: ThemeMode,
    overlay_timeout: Duration,
    lister: Arc<dyn FolderLister>,
    viewer_base_url: String,
    /// Sequence number of the latest issued fetch. A completing fetch
    /// whose number differs was superseded by a faster navigation and its
    /// result is discarded.
    fetch_seq: u64,
    window_id: Option<window::Id>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("load", &self.load)
            .field("current_folder_id", &self.navigator.current_folder_id())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let i18n = I18n::default();
        let navigator = FolderNavigator::new(i18n.tr("browser-home"));
        Self {
            i18n,
            screen: Screen::Browser,
            navigator,
            listing: Vec::new(),
            classified: Classified::default(),
            load: LoadState::Loading,
            player: None,
            sort_direction: SortDirection::Ascending,
            theme_mode: ThemeMode::System,
            overlay_timeout: Duration::from_secs(config::DEFAULT_OVERLAY_TIMEOUT_SECS as u64),
            lister: Arc::new(HttpFolderLister::new(config::DEFAULT_BASE_URL)),
            viewer_base_url: config::DEFAULT_VIEWER_BASE_URL.to_string(),
            fetch_seq: 0,
            window_id: None,
        }
    }
}

impl App {
    /// Initializes application state from config and flags, and kicks off
    /// the initial root listing fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);
        let navigator = FolderNavigator::new(i18n.tr("browser-home"));

        let base_url = flags
            .base_url
            .or_else(|| config.base_url.clone())
            .unwrap_or_else(|| config::DEFAULT_BASE_URL.to_string());
        let viewer_base_url = config
            .viewer_base_url
            .clone()
            .unwrap_or_else(|| config::DEFAULT_VIEWER_BASE_URL.to_string());
        let overlay_timeout_secs = config::clamp_overlay_timeout(
            config
                .overlay_timeout_secs
                .unwrap_or(config::DEFAULT_OVERLAY_TIMEOUT_SECS),
        );

        let mut app = App {
            i18n,
            navigator,
            sort_direction: config.sort_direction.unwrap_or_default(),
            theme_mode: config.theme_mode.unwrap_or_default(),
            overlay_timeout: Duration::from_secs(overlay_timeout_secs as u64),
            lister: Arc::new(HttpFolderLister::new(base_url)),
            viewer_base_url,
            ..Self::default()
        };

        let task = update::refetch(&mut app);
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        if self.navigator.is_at_root() {
            return app_name;
        }

        let label = self
            .navigator
            .current_label(&self.listing)
            .map(str::to_string)
            .unwrap_or_else(|| self.i18n.tr("browser-folder-placeholder"));
        format!("{label} - {app_name}")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.player.is_some()),
        ])
    }

    /// Persists the toggleable preferences, keeping any settings the
    /// session does not own.
    fn persist_preferences(&self) {
        let mut config = config::load().unwrap_or_default();
        config.sort_direction = Some(self.sort_direction);
        config.theme_mode = Some(self.theme_mode);
        // Best effort: a read-only config dir must not break the session.
        let _ = config::save(&config);
    }
}
