// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen based on application state.

use super::{App, Message, Screen};
use crate::ui::browser;
use crate::ui::player;
use iced::widget::{Container, Text};
use iced::{Element, Length};

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    match app.screen {
        Screen::Browser => browser::view(browser::ViewContext {
            i18n: &app.i18n,
            breadcrumb: app.navigator.breadcrumb(),
            can_go_back: app.navigator.can_go_back(),
            at_root: app.navigator.is_at_root(),
            load: &app.load,
            classified: &app.classified,
            sort_direction: app.sort_direction,
            theme_is_dark: app.theme_mode.is_dark(),
        })
        .map(Message::Browser),
        Screen::Player => view_player(app),
    }
}

fn view_player(app: &App) -> Element<'_, Message> {
    if let Some(player) = &app.player {
        player::view(
            player,
            player::ViewContext {
                i18n: &app.i18n,
                // Back/Home shortcuts only make sense below the root.
                can_navigate: app.navigator.can_go_back() || !app.navigator.is_at_root(),
            },
        )
        .map(Message::Player)
    } else {
        // Fallback if player state is missing
        Container::new(Text::new("Player error"))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
