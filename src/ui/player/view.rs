// SPDX-License-Identifier: MPL-2.0
//! View rendering for the overlay player.
//!
//! The layout mirrors the session structure: a dimmed backdrop that
//! closes on click, the opaque embedded viewer surface centered on top of
//! it, a transient control bar, and the one-shot play affordance.

use super::{Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Context required to render the player view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Whether the in-overlay Back/Home shortcuts are shown; hidden when
    /// the session is already at the root with no history.
    pub can_navigate: bool,
}

/// Renders the overlay player.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    // The embedded viewer surface is opaque to us: the contract ends at
    // handing it the viewer URL.
    let surface = Container::new(
        Text::new(state.embed_url())
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom)
    .padding(spacing::SM)
    .style(styles::container::player_surface);

    // Clicks on the surface are consumed here so the backdrop below never
    // interprets them as "click outside".
    let surface_area = mouse_area(surface).on_press(Message::SurfacePressed);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(surface_area);

    if state.controls_visible() {
        layers = layers.push(control_bar(state, &ctx));
    }

    if state.awaiting_first_play() {
        layers = layers.push(play_affordance(ctx.i18n));
    }

    let framed: Element<'_, Message> = if state.is_fullscreen() {
        layers.into()
    } else {
        Container::new(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .max_width(1024.0)
            .padding(spacing::MD)
            .into()
    };

    let centered = Container::new(framed)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::backdrop);

    mouse_area(centered)
        .on_press(Message::BackdropPressed)
        .on_move(|_| Message::PointerMoved)
        .into()
}

/// Transient control bar across the top of the surface.
fn control_bar<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(state.entry().name.as_str())
        .size(typography::TITLE_SM)
        .color(palette::WHITE);

    let mut actions = Row::new().spacing(spacing::XS).align_y(Vertical::Center);

    if ctx.can_navigate {
        actions = actions
            .push(overlay_button(
                ctx.i18n.tr("browser-home"),
                Message::GoHomeRequested,
            ))
            .push(overlay_button(
                ctx.i18n.tr("browser-back"),
                Message::GoBackRequested,
            ));
    }

    actions = actions.push(overlay_button("✕", Message::CloseRequested));

    let bar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(actions);

    let bar_container = Container::new(bar)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::overlay::controls_container);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(bar_container)
        .into()
}

fn overlay_button<'a>(label: impl Into<String>, message: Message) -> Element<'a, Message> {
    button(Text::new(label.into()).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::TRANSPARENT,
            opacity::OVERLAY_MEDIUM,
        ))
        .into()
}

/// Centered one-shot play affordance shown until first dismissed.
fn play_affordance<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let badge = button(
        Text::new("▶")
            .size(sizing::PLAY_BADGE / 2.0)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(sizing::PLAY_BADGE)
    .height(sizing::PLAY_BADGE)
    .on_press(Message::DismissFirstPlay)
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_STRONG,
        opacity::OVERLAY_PRESSED,
    ));

    let labeled = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(badge)
        .push(
            Text::new(i18n.tr("player-play"))
                .size(typography::BODY)
                .color(palette::WHITE),
        );

    Container::new(labeled)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
