// SPDX-License-Identifier: MPL-2.0
//! Overlay player component.
//!
//! While a playable entry is active this component owns the whole window:
//! the browser underneath is fully occluded, so selecting another entry
//! is unreachable until the overlay closes. The component is a small
//! state machine over the transient UI of one playback session: the
//! auto-hiding control bar, the fullscreen flag, and the initial play
//! affordance. Video bytes never pass through here; the selected entry id
//! is handed to an opaque embedded viewer surface.

mod view;

pub use view::{view, ViewContext};

use crate::listing::Entry;
use iced::keyboard;
use std::time::{Duration, Instant};

/// What should happen after the overlay closes. Back/Home taken from
/// inside the overlay close it first, then run the navigation operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum After {
    Nothing,
    GoBack,
    GoHome,
}

/// Messages consumed by [`State::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Any pointer movement over the overlay; coarseness is fine.
    PointerMoved,
    /// Periodic check of the idle deadline.
    Tick,
    /// The user dismissed the initial play affordance.
    DismissFirstPlay,
    /// Fullscreen toggle via button or the `f` key.
    ToggleFullscreen,
    /// The environment reports its actual fullscreen status.
    FullscreenChanged(bool),
    /// Close button.
    CloseRequested,
    /// Click on the dimmed area outside the player surface.
    BackdropPressed,
    /// Click on the player surface itself; consumed so it cannot reach
    /// the backdrop, mirroring the surface's stop-propagation contract.
    SurfacePressed,
    EscapePressed,
    /// "Back" taken from inside the overlay.
    GoBackRequested,
    /// "Home" taken from inside the overlay.
    GoHomeRequested,
    /// An intercepted chord (save/print/view-source); swallowed.
    KeySwallowed,
}

/// Effects the parent application must apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Request the window mode change, then resynchronize from the
    /// environment's answer via [`Message::FullscreenChanged`].
    SetFullscreen(bool),
    /// Terminal: drop this state and return to the browser.
    Closed(After),
}

/// Transient state for one playback session.
#[derive(Debug, Clone)]
pub struct State {
    entry: Entry,
    fullscreen: bool,
    controls_visible: bool,
    awaiting_first_play: bool,
    /// Idle deadline bookkeeping. Re-arming overwrites the timestamp, so
    /// a superseded deadline can never fire; `None` means disarmed.
    last_activity: Option<Instant>,
    hide_delay: Duration,
    embed_url: String,
}

impl State {
    /// Opens the overlay for a playable entry.
    ///
    /// Controls start visible with the idle timer armed, and the play
    /// affordance is shown until dismissed once.
    pub fn new(entry: Entry, viewer_base_url: &str, hide_delay: Duration) -> Self {
        debug_assert!(entry.is_playable(), "the overlay only plays playable entries");

        let embed_url = format!(
            "{}/{}/preview",
            viewer_base_url.trim_end_matches('/'),
            entry.id
        );
        Self {
            entry,
            fullscreen: false,
            controls_visible: true,
            awaiting_first_play: true,
            last_activity: Some(Instant::now()),
            hide_delay,
            embed_url,
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::PointerMoved => {
                // Cancel-and-restart: the previous deadline is overwritten,
                // never accumulated.
                self.controls_visible = true;
                self.last_activity = Some(Instant::now());
                Event::None
            }
            Message::Tick => {
                if let Some(armed) = self.last_activity {
                    if armed.elapsed() >= self.hide_delay {
                        self.controls_visible = false;
                        self.last_activity = None;
                    }
                }
                Event::None
            }
            Message::DismissFirstPlay => {
                // Never shown again for this overlay instance.
                self.awaiting_first_play = false;
                Event::None
            }
            Message::ToggleFullscreen => {
                let desired = !self.fullscreen;
                self.fullscreen = desired;
                Event::SetFullscreen(desired)
            }
            Message::FullscreenChanged(actual) => {
                // The environment can leave fullscreen behind our back
                // (system gesture); its report always wins.
                self.fullscreen = actual;
                Event::None
            }
            Message::EscapePressed => {
                if self.fullscreen {
                    self.fullscreen = false;
                    Event::SetFullscreen(false)
                } else {
                    Event::Closed(After::Nothing)
                }
            }
            Message::CloseRequested | Message::BackdropPressed => Event::Closed(After::Nothing),
            Message::GoBackRequested => Event::Closed(After::GoBack),
            Message::GoHomeRequested => Event::Closed(After::GoHome),
            Message::SurfacePressed | Message::KeySwallowed => Event::None,
        }
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// The opaque viewer URL handed to the embedding surface. The
    /// component's contract ends here; it never decodes or transports
    /// video itself.
    pub fn embed_url(&self) -> &str {
        &self.embed_url
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    #[must_use]
    pub fn awaiting_first_play(&self) -> bool {
        self.awaiting_first_play
    }
}

/// Maps a key press to a player message while the overlay is open.
///
/// Save/print/view-source chords (Ctrl/Cmd + `s`/`p`/`u`) are swallowed:
/// a best-effort deterrent, not a security boundary. Returns `None` for
/// keys the overlay does not care about.
#[must_use]
pub fn map_key(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    if modifiers.command() {
        if let keyboard::Key::Character(c) = key {
            if matches!(c.as_str(), "s" | "S" | "p" | "P" | "u" | "U") {
                return Some(Message::KeySwallowed);
            }
        }
        return None;
    }

    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::EscapePressed),
        keyboard::Key::Character(c) if matches!(c.as_str(), "f" | "F") && !modifiers.alt() => {
            Some(Message::ToggleFullscreen)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> State {
        State::new(
            Entry::playable("v1", "Clip"),
            "https://drive.google.com/file",
            Duration::from_secs(3),
        )
    }

    /// Moves the armed deadline into the past, as if `elapsed` had gone by.
    fn backdate(state: &mut State, elapsed: Duration) {
        state.last_activity = Instant::now().checked_sub(elapsed);
    }

    #[test]
    fn opening_shows_controls_and_play_affordance() {
        let state = open();
        assert!(state.controls_visible());
        assert!(state.awaiting_first_play());
        assert!(!state.is_fullscreen());
        assert!(state.last_activity.is_some());
    }

    #[test]
    fn embed_url_is_built_from_the_entry_id() {
        let state = open();
        assert_eq!(
            state.embed_url(),
            "https://drive.google.com/file/v1/preview"
        );
    }

    #[test]
    fn tick_before_the_deadline_keeps_controls() {
        let mut state = open();
        assert_eq!(state.update(Message::Tick), Event::None);
        assert!(state.controls_visible());
    }

    #[test]
    fn tick_after_the_deadline_hides_controls() {
        let mut state = open();
        backdate(&mut state, Duration::from_secs(5));

        state.update(Message::Tick);

        assert!(!state.controls_visible());
        assert!(state.last_activity.is_none(), "timer is disarmed");
    }

    #[test]
    fn pointer_movement_shows_controls_and_rearms() {
        let mut state = open();
        backdate(&mut state, Duration::from_secs(5));
        state.update(Message::Tick);
        assert!(!state.controls_visible());

        state.update(Message::PointerMoved);

        assert!(state.controls_visible());
        // The fresh deadline must not fire immediately.
        state.update(Message::Tick);
        assert!(state.controls_visible());
    }

    #[test]
    fn pointer_movement_overwrites_a_pending_deadline() {
        let mut state = open();
        backdate(&mut state, Duration::from_secs(2));

        // Movement just before the old deadline would have fired.
        state.update(Message::PointerMoved);
        state.update(Message::Tick);

        assert!(
            state.controls_visible(),
            "the superseded deadline must not hide the controls"
        );
    }

    #[test]
    fn first_play_dismissal_is_permanent() {
        let mut state = open();
        state.update(Message::DismissFirstPlay);
        assert!(!state.awaiting_first_play());

        // Later idle firings never resurrect the affordance.
        backdate(&mut state, Duration::from_secs(5));
        state.update(Message::Tick);
        assert!(!state.awaiting_first_play());
    }

    #[test]
    fn toggle_requests_fullscreen_from_the_environment() {
        let mut state = open();
        assert_eq!(
            state.update(Message::ToggleFullscreen),
            Event::SetFullscreen(true)
        );
        assert!(state.is_fullscreen());
        assert_eq!(
            state.update(Message::ToggleFullscreen),
            Event::SetFullscreen(false)
        );
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn environment_report_overrides_local_fullscreen() {
        let mut state = open();
        state.update(Message::ToggleFullscreen);
        assert!(state.is_fullscreen());

        // A system gesture left fullscreen without asking us.
        state.update(Message::FullscreenChanged(false));
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn escape_in_fullscreen_exits_fullscreen_only() {
        let mut state = open();
        state.update(Message::ToggleFullscreen);

        let event = state.update(Message::EscapePressed);

        assert_eq!(event, Event::SetFullscreen(false));
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn escape_outside_fullscreen_closes() {
        let mut state = open();
        state.update(Message::ToggleFullscreen);
        state.update(Message::EscapePressed);

        // Second escape, now windowed, closes the overlay.
        let event = state.update(Message::EscapePressed);
        assert_eq!(event, Event::Closed(After::Nothing));
    }

    #[test]
    fn close_paths_report_their_follow_up() {
        assert_eq!(
            open().update(Message::CloseRequested),
            Event::Closed(After::Nothing)
        );
        assert_eq!(
            open().update(Message::BackdropPressed),
            Event::Closed(After::Nothing)
        );
        assert_eq!(
            open().update(Message::GoBackRequested),
            Event::Closed(After::GoBack)
        );
        assert_eq!(
            open().update(Message::GoHomeRequested),
            Event::Closed(After::GoHome)
        );
    }

    #[test]
    fn surface_clicks_do_not_close() {
        let mut state = open();
        assert_eq!(state.update(Message::SurfacePressed), Event::None);
    }

    mod keymap {
        use super::*;
        use iced::keyboard::{key::Named, Key, Modifiers};

        fn character(c: &str) -> Key {
            Key::Character(c.into())
        }

        #[test]
        fn save_print_source_chords_are_swallowed() {
            for c in ["s", "S", "p", "P", "u", "U"] {
                let mapped = map_key(&character(c), Modifiers::COMMAND);
                assert!(
                    matches!(mapped, Some(Message::KeySwallowed)),
                    "chord for {c:?} should be swallowed"
                );
            }
        }

        #[test]
        fn plain_letters_pass_through_untouched() {
            assert!(map_key(&character("s"), Modifiers::empty()).is_none());
            assert!(map_key(&character("x"), Modifiers::empty()).is_none());
        }

        #[test]
        fn escape_maps_to_escape() {
            let mapped = map_key(&Key::Named(Named::Escape), Modifiers::empty());
            assert!(matches!(mapped, Some(Message::EscapePressed)));
        }

        #[test]
        fn f_maps_to_fullscreen_toggle() {
            for c in ["f", "F"] {
                let mapped = map_key(&character(c), Modifiers::empty());
                assert!(matches!(mapped, Some(Message::ToggleFullscreen)));
            }
        }

        #[test]
        fn command_f_is_not_a_toggle() {
            assert!(map_key(&character("f"), Modifiers::COMMAND).is_none());
        }
    }
}
