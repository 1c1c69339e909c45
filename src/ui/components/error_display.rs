// SPDX-License-Identifier: MPL-2.0
//! Reusable error display component with consistent styling.
//!
//! This component displays errors with:
//! - A title describing the issue
//! - A detailed message explaining what went wrong (the backend's words,
//!   verbatim)
//! - Optional action button (e.g., "Retry")
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::ErrorDisplay;
//!
//! ErrorDisplay::new()
//!     .title("Unable to load files")
//!     .message("quota exceeded for user")
//!     .action("Retry", Message::Retry)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Configuration for the ErrorDisplay component.
#[derive(Debug, Clone, Default)]
pub struct ErrorDisplay<Message> {
    title: Option<String>,
    message: Option<String>,
    action_label: Option<String>,
    action_message: Option<Message>,
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    /// Creates an empty error display.
    pub fn new() -> Self {
        Self {
            title: None,
            message: None,
            action_label: None,
            action_message: None,
        }
    }

    /// Sets the title (main heading).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message (the backend detail, shown as-is).
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the action button label and message.
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    /// Renders the error display component.
    pub fn view(self) -> Element<'static, Message> {
        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title_text) = self.title {
            let title = Text::new(title_text)
                .size(typography::TITLE_MD)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                });
            content = content.push(title);
        }

        if let Some(message_text) = self.message {
            let message = Text::new(message_text).size(typography::BODY);
            content = content.push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let (Some(label), Some(msg)) = (self.action_label, self.action_message) {
            let action_btn = button(Text::new(label))
                .on_press(msg)
                .style(button_styles::primary);
            content = content.push(
                Container::new(action_btn)
                    .padding(spacing::SM)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        Container::new(content)
            .width(Length::Fill)
            .max_width(500.0)
            .padding(spacing::LG)
            .style(|theme: &Theme| {
                let bg_color = theme.extended_palette().background.weak.color;
                let border_color = theme.extended_palette().background.strong.color;
                container::Style {
                    background: Some(iced::Background::Color(bg_color)),
                    border: iced::Border {
                        color: border_color,
                        width: 1.0,
                        radius: radius::MD.into(),
                    },
                    text_color: Some(theme.palette().text),
                    ..Default::default()
                }
            })
            .into()
    }
}

/// Centered error view filling its container.
pub fn centered_error_view<Message: Clone + 'static>(
    error_display: ErrorDisplay<Message>,
) -> Element<'static, Message> {
    Container::new(error_display.view())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum TestMessage {
        Retry,
    }

    #[test]
    fn error_display_builder_works() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new()
            .title("Test Error")
            .message("Something went wrong")
            .action("Retry", TestMessage::Retry);

        assert_eq!(display.title, Some("Test Error".to_string()));
        assert_eq!(display.message, Some("Something went wrong".to_string()));
        assert_eq!(display.action_label, Some("Retry".to_string()));
    }

    #[test]
    fn empty_display_has_no_content() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new();
        assert_eq!(display.title, None);
        assert_eq!(display.message, None);
        assert_eq!(display.action_label, None);
    }
}
