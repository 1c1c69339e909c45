// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function, the listing fetch
//! machinery with its supersede rule, and the handlers translating
//! browser and player events into navigation operations.

use super::{App, Message, Screen};
use crate::listing::{classify, Entry};
use crate::remote::FetchError;
use crate::ui::browser::{self, LoadState};
use crate::ui::player;
use iced::{keyboard, window, Task};

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Browser(msg) => handle_browser_event(app, browser::update(msg)),
        Message::Player(msg) => handle_player_message(app, msg),
        Message::ListingFetched { seq, result } => handle_listing_fetched(app, seq, result),
        Message::Tick(_) => {
            // Only the player owns a deferred action; forward the tick so
            // its idle deadline can fire.
            handle_player_message(app, player::Message::Tick)
        }
        Message::EventOccurred { window, event } => {
            app.window_id = Some(window);
            handle_runtime_event(app, event)
        }
    }
}

/// Issues a fetch for the navigator's current folder.
///
/// The browser switches to the loading state immediately (stale entries
/// are never shown) and the fetch is tagged with a fresh sequence number
/// so any still-running request for a superseded folder is discarded on
/// completion instead of queueing behind this one.
pub(super) fn refetch(app: &mut App) -> Task<Message> {
    app.load = LoadState::Loading;
    app.fetch_seq += 1;
    let seq = app.fetch_seq;
    let folder_id = app.navigator.current_folder_id().map(str::to_string);
    let future = app.lister.list(folder_id);

    Task::perform(future, move |result| Message::ListingFetched { seq, result })
}

fn handle_listing_fetched(
    app: &mut App,
    seq: u64,
    result: Result<Vec<Entry>, FetchError>,
) -> Task<Message> {
    if seq != app.fetch_seq {
        // Result for a folder the user already navigated away from.
        return Task::none();
    }

    match result {
        Ok(entries) => {
            app.classified = classify(&entries, app.sort_direction);
            app.listing = entries;
            app.load = LoadState::Loaded;
        }
        Err(error) => {
            app.load = LoadState::Failed(error);
        }
    }
    Task::none()
}

fn handle_browser_event(app: &mut App, event: browser::Event) -> Task<Message> {
    match event {
        browser::Event::OpenFolder(folder) => {
            app.navigator.enter_folder(&folder);
            refetch(app)
        }
        browser::Event::Play(entry) => {
            app.player = Some(player::State::new(
                entry,
                &app.viewer_base_url,
                app.overlay_timeout,
            ));
            app.screen = Screen::Player;
            Task::none()
        }
        browser::Event::JumpToCrumb(index) => {
            if app.navigator.jump_to_crumb(index) {
                refetch(app)
            } else {
                Task::none()
            }
        }
        browser::Event::GoBack => {
            if app.navigator.go_back() {
                refetch(app)
            } else {
                Task::none()
            }
        }
        browser::Event::GoHome => {
            app.navigator.go_to_root();
            refetch(app)
        }
        browser::Event::Refresh | browser::Event::Retry => refetch(app),
        browser::Event::ToggleSort => {
            app.sort_direction = app.sort_direction.toggled();
            // Re-sorting is local; the listing snapshot is still valid.
            app.classified = classify(&app.listing, app.sort_direction);
            app.persist_preferences();
            Task::none()
        }
        browser::Event::ToggleTheme => {
            app.theme_mode = app.theme_mode.toggled();
            app.persist_preferences();
            Task::none()
        }
    }
}

fn handle_player_message(app: &mut App, message: player::Message) -> Task<Message> {
    let Some(player) = app.player.as_mut() else {
        return Task::none();
    };

    match player.update(message) {
        player::Event::None => Task::none(),
        player::Event::SetFullscreen(desired) => apply_fullscreen(app, desired),
        player::Event::Closed(after) => {
            // Terminal: the overlay state is dropped and, with it, the
            // tick subscription and key routing that served it.
            app.player = None;
            app.screen = Screen::Browser;

            let leave_fullscreen = ensure_windowed(app);
            let navigate = match after {
                player::After::Nothing => Task::none(),
                player::After::GoBack => {
                    if app.navigator.go_back() {
                        refetch(app)
                    } else {
                        Task::none()
                    }
                }
                player::After::GoHome => {
                    app.navigator.go_to_root();
                    refetch(app)
                }
            };
            Task::batch([leave_fullscreen, navigate])
        }
    }
}

/// Requests the window mode change and immediately asks the environment
/// for the actual resulting mode. The environment's answer, not our
/// request, is what updates the player state.
fn apply_fullscreen(app: &App, desired: bool) -> Task<Message> {
    let Some(id) = app.window_id else {
        return Task::none();
    };

    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };

    window::set_mode(id, mode).chain(
        window::mode(id)
            .map(|actual| Message::Player(player::Message::FullscreenChanged(actual == window::Mode::Fullscreen))),
    )
}

/// The browser never runs fullscreen; closing the overlay restores the
/// windowed mode if the session left fullscreen dangling.
fn ensure_windowed(app: &App) -> Task<Message> {
    let Some(id) = app.window_id else {
        return Task::none();
    };
    window::set_mode(id, window::Mode::Windowed)
}

/// Routes raw runtime events according to the active screen.
///
/// While the player is open it owns the keyboard: mapped keys drive the
/// overlay and the save/print/view-source chords are swallowed. Pointer
/// movement is observed by the player view itself, so only key events
/// travel this path.
fn handle_runtime_event(app: &mut App, event: iced::Event) -> Task<Message> {
    if app.screen != Screen::Player {
        return Task::none();
    }

    if let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event {
        if let Some(message) = player::map_key(&key, modifiers) {
            return handle_player_message(app, message);
        }
    }
    Task::none()
}
