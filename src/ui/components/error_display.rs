// SPDX-License-Identifier: MPL-2.0
//! Reusable error display component with consistent styling.
//!
//! Displays errors, warnings, and info messages with an icon matching the
//! severity, a title, a detailed message and an optional action button
//! (e.g. "Retry").
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
//!
//! ErrorDisplay::new(ErrorSeverity::Error)
//!     .title("Unable to load the marketplace")
//!     .message("The server did not respond.")
//!     .action("Retry", Message::Refresh)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, radius, sizing, spacing};
use crate::ui::icons;
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Severity level determines the color scheme and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    /// Critical error - prevents operation (red)
    #[default]
    Error,
    /// Warning - operation degraded but possible (orange)
    Warning,
    /// Informational - no action required (blue)
    Info,
}

impl ErrorSeverity {
    /// Returns the primary color for this severity level.
    pub fn color(&self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::WARNING_500,
            ErrorSeverity::Info => palette::INFO_500,
        }
    }

    /// Returns the icon glyph for this severity level.
    pub fn icon(&self) -> Text<'static> {
        match self {
            ErrorSeverity::Error | ErrorSeverity::Warning => icons::warning(),
            ErrorSeverity::Info => icons::info(),
        }
    }
}

/// Builder for the error display component.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    severity: ErrorSeverity,
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
    action_label: Option<String>,
    action_message: Option<Message>,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            severity: ErrorSeverity::default(),
            title: None,
            message: None,
            details: None,
            action_label: None,
            action_message: None,
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    /// Creates a new error display with the given severity.
    pub fn new(severity: ErrorSeverity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    /// Sets the title (main heading).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message (user-friendly explanation).
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the technical details shown below the message.
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
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
        let accent_color = self.severity.color();

        let icon = icons::sized(self.severity.icon(), sizing::ICON_LG).color(accent_color);

        let icon_container = Container::new(icon)
            .width(Length::Shrink)
            .align_x(alignment::Horizontal::Center);

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title_text) = self.title {
            let title = Text::new(title_text)
                .size(20)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(accent_color),
                });
            content = content.push(title);
        }

        if let Some(message_text) = self.message {
            let message = Text::new(message_text).size(14);
            content = content.push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let Some(details_text) = self.details {
            let details = Text::new(details_text)
                .size(12)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                });
            content = content.push(
                Container::new(details)
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

        let main_row = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Top)
            .push(icon_container)
            .push(content);

        Container::new(main_row)
            .width(Length::Fill)
            .max_width(500.0)
            .padding(spacing::LG)
            .style(move |theme: &Theme| {
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

/// Centered error view that fills its container.
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

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Retry,
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(ErrorSeverity::Error.color(), ErrorSeverity::Warning.color());
        assert_ne!(ErrorSeverity::Warning.color(), ErrorSeverity::Info.color());
    }

    #[test]
    fn builder_accumulates_fields() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new(ErrorSeverity::Error)
            .title("Unable to load the marketplace")
            .message("The server did not respond.")
            .details("connection refused")
            .action("Retry", TestMessage::Retry);

        assert_eq!(display.severity, ErrorSeverity::Error);
        assert_eq!(
            display.title.as_deref(),
            Some("Unable to load the marketplace")
        );
        assert_eq!(display.action_message, Some(TestMessage::Retry));
    }

    #[test]
    fn default_severity_is_error() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::default();
        assert_eq!(display.severity, ErrorSeverity::Error);
    }
}
