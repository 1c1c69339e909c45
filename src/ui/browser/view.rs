// SPDX-License-Identifier: MPL-2.0
//! View rendering for the browser screen.

use super::{LoadState, Message};
use crate::config::SortDirection;
use crate::i18n::fluent::I18n;
use crate::listing::{Classified, Entry};
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentArgs;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Context required to render the browser view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub breadcrumb: &'a [String],
    pub can_go_back: bool,
    pub at_root: bool,
    pub load: &'a LoadState,
    pub classified: &'a Classified,
    pub sort_direction: SortDirection,
    pub theme_is_dark: bool,
}

/// Renders the browser screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill).height(Length::Fill);

    content = content.push(header(&ctx));

    if ctx.breadcrumb.len() > 1 {
        content = content.push(breadcrumb_row(&ctx));
    }

    let body: Element<'a, Message> = match ctx.load {
        LoadState::Loading => centered_notice(ctx.i18n.tr("browser-loading")),
        LoadState::Failed(error) => {
            let detail = if error.detail().is_empty() {
                ctx.i18n.tr("browser-error-unknown")
            } else {
                error.detail().to_string()
            };
            centered_error_view(
                ErrorDisplay::new()
                    .title(ctx.i18n.tr("browser-error-title"))
                    .message(detail)
                    .action(ctx.i18n.tr("browser-retry"), Message::RetryPressed),
            )
        }
        LoadState::Loaded => {
            if ctx.classified.is_empty() {
                centered_notice(ctx.i18n.tr("browser-empty"))
            } else {
                listing_body(&ctx)
            }
        }
    };

    content.push(body).into()
}

/// Top header bar: app title on the left, actions on the right.
fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);

    let theme_label = if ctx.theme_is_dark {
        ctx.i18n.tr("browser-theme-light")
    } else {
        ctx.i18n.tr("browser-theme-dark")
    };

    let mut actions = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    actions = actions.push(toolbar_button(theme_label, Message::ThemeTogglePressed));
    if !ctx.at_root {
        actions = actions.push(toolbar_button(
            ctx.i18n.tr("browser-home"),
            Message::HomePressed,
        ));
    }
    if ctx.can_go_back {
        actions = actions.push(toolbar_button(
            ctx.i18n.tr("browser-back"),
            Message::BackPressed,
        ));
    }
    let refresh = button(Text::new(ctx.i18n.tr("browser-refresh")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::toolbar);
    // Disabled while a fetch is pending; the supersede guard upstream
    // would discard a stale result anyway, but there is nothing to gain.
    let refresh = if ctx.load.is_loading() {
        refresh
    } else {
        refresh.on_press(Message::RefreshPressed)
    };
    actions = actions.push(refresh);

    let bar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(actions);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::header)
        .into()
}

/// Breadcrumb trail; every crumb is clickable, the last one emphasized.
fn breadcrumb_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let last = ctx.breadcrumb.len() - 1;
    let mut row = Row::new().spacing(spacing::XXS).align_y(Vertical::Center);

    for (index, label) in ctx.breadcrumb.iter().enumerate() {
        if index > 0 {
            row = row.push(Text::new("›").size(typography::BODY));
        }
        row = row.push(
            button(Text::new(label.as_str()).size(typography::BODY))
                .padding([spacing::XXS, spacing::XXS])
                .on_press(Message::CrumbPressed(index))
                .style(styles::button::breadcrumb(index == last)),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .into()
}

/// Loaded, non-empty listing: summary row plus the sectioned grids.
fn listing_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut sections = Column::new().spacing(spacing::LG).width(Length::Fill);

    sections = sections.push(summary_row(ctx));

    if !ctx.classified.folders.is_empty() {
        sections = sections.push(section(
            ctx.i18n.tr("browser-folders"),
            &ctx.classified.folders,
        ));
    }
    if !ctx.classified.playables.is_empty() {
        sections = sections.push(section(
            ctx.i18n.tr("browser-videos"),
            &ctx.classified.playables,
        ));
    }

    scrollable(
        Container::new(sections)
            .width(Length::Fill)
            .padding(spacing::MD),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Folder/video counters and the sort direction toggle.
fn summary_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut parts = Vec::new();
    if !ctx.classified.folders.is_empty() {
        let mut args = FluentArgs::new();
        args.set("count", ctx.classified.folders.len() as u32);
        parts.push(ctx.i18n.tr_with("browser-folder-count", &args));
    }
    if !ctx.classified.playables.is_empty() {
        let mut args = FluentArgs::new();
        args.set("count", ctx.classified.playables.len() as u32);
        parts.push(ctx.i18n.tr_with("browser-video-count", &args));
    }

    let sort_label = match ctx.sort_direction {
        SortDirection::Ascending => ctx.i18n.tr("browser-sort-ascending"),
        SortDirection::Descending => ctx.i18n.tr("browser-sort-descending"),
    };

    Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(parts.join(" • ")).size(typography::BODY_SM))
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(toolbar_button(sort_label, Message::SortTogglePressed))
        .into()
}

/// One titled section with its entries laid out as a wrapped grid.
fn section<'a>(title: String, entries: &'a [Entry]) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::SM).width(Length::Fill);
    column = column.push(Text::new(title).size(typography::TITLE_SM));

    for chunk in entries.chunks(sizing::GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::SM);
        for entry in chunk {
            row = row.push(tile(entry));
        }
        column = column.push(row);
    }

    column.into()
}

/// One clickable entry tile.
fn tile(entry: &Entry) -> Element<'_, Message> {
    let mut body = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(
            Text::new(entry.name.as_str())
                .size(typography::BODY_SM)
                .width(Length::Fill),
        );

    if let Some(size) = crate::format::file_size(entry.size_bytes) {
        body = body.push(Text::new(size).size(typography::CAPTION));
    }
    if let Some(duration) = crate::format::duration(entry.duration_millis) {
        body = body.push(Text::new(duration).size(typography::CAPTION));
    }

    button(
        Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XS)
            .align_y(Vertical::Bottom),
    )
    .width(sizing::TILE_WIDTH)
    .height(sizing::TILE_HEIGHT)
    .on_press(Message::EntryPressed(entry.clone()))
    .style(styles::button::tile)
    .into()
}

fn toolbar_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .on_press(message)
        .style(styles::button::toolbar)
        .into()
}

fn centered_notice<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
