// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary action button (mint, submit, sign in).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled()(_theme, status),
    }
}

/// Secondary button: outlined, theme-aware text.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(extended.background.weak.color)),
            text_color: extended.background.base.text,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color: extended.background.base.text,
            border: Border {
                color: extended.background.strong.color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Disabled button: grayed out, non-interactive.
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Selected/active state for toggle groups (tabs, market filter, view mode).
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
    }
}

/// Borderless text button for inline links (e.g. "Recover my wallet").
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let _ = theme;
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => palette::PRIMARY_400,
            _ => palette::PRIMARY_500,
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Destructive action button (sign out).
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: match status {
            button::Status::Hovered => Some(Background::Color(palette::ERROR_500)),
            _ => None,
        },
        text_color: match status {
            button::Status::Hovered => palette::WHITE,
            _ => palette::ERROR_500,
        },
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_uses_brand_background_when_active() {
        let style = primary(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn disabled_ignores_status() {
        let style_fn = disabled();
        let active = style_fn(&Theme::Light, button::Status::Active);
        let hovered = style_fn(&Theme::Light, button::Status::Hovered);
        assert_eq!(active.background, hovered.background);
    }

    #[test]
    fn danger_fills_on_hover_only() {
        let idle = danger(&Theme::Dark, button::Status::Active);
        let hovered = danger(&Theme::Dark, button::Status::Hovered);
        assert!(idle.background.is_none());
        assert!(hovered.background.is_some());
    }
}
