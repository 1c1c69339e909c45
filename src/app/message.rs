// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::listing::Entry;
use crate::remote::FetchError;
use crate::ui::browser;
use crate::ui::player;
use iced::window;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Browser(browser::Message),
    Player(player::Message),
    /// A listing fetch completed. `seq` identifies the request; a result
    /// whose sequence number is no longer current belongs to a superseded
    /// navigation and is discarded.
    ListingFetched {
        seq: u64,
        result: Result<Vec<Entry>, FetchError>,
    },
    /// Periodic tick driving the player's idle auto-hide.
    Tick(Instant),
    /// Raw runtime event routed according to the active screen.
    EventOccurred {
        window: window::Id,
        event: iced::Event,
    },
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional listing endpoint override; takes precedence over the
    /// configured `base_url`.
    pub base_url: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
}
