// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with severity-colored accents and a dismiss button.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::icons;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();

        // Severity icon tinted with the accent color
        let icon_widget = Self::severity_icon(severity).color(accent_color);

        // Message text
        let message_widget =
            Text::new(notification.message().to_string())
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                });

        // Dismiss button (always visible, uses main text color for good contrast)
        let notification_id = notification.id();
        let dismiss_button = button(icons::sized(icons::cross(), sizing::ICON_SM))
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        // Toast container with accent border
        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> =
            manager.visible().map(Self::view).collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            // Position in bottom-right with padding
            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }

    /// Returns the appropriate icon for the severity level.
    fn severity_icon(severity: Severity) -> Text<'static> {
        match severity {
            Severity::Success => icons::checkmark(),
            Severity::Info => icons::info(),
            Severity::Warning | Severity::Error => icons::warning(),
        }
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn toast_view_renders_for_each_severity() {
        let _ = Toast::view(&Notification::success("saved"));
        let _ = Toast::view(&Notification::info("heads up"));
        let _ = Toast::view(&Notification::warning("careful"));
        let _ = Toast::view(&Notification::error("broken"));
    }

    #[test]
    fn overlay_renders_empty_and_populated() {
        let mut manager = Manager::new();
        let _ = Toast::view_overlay(&manager);

        manager.push(Notification::success("one"));
        let _ = Toast::view_overlay(&manager);
    }
}
