// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for forms and dialogs.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Card surface for marketplace NFT cards.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: extended.background.strong.color,
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Toolbar strip at the top of a section.
pub fn toolbar(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind modal dialogs.
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Pill badge (category tag, sold marker).
pub fn badge(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        border: Border {
            radius: radius::FULL.into(),
            width: 1.0,
            color: accent,
        },
        text_color: Some(accent),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_backdrop_is_translucent_black() {
        let style = modal_backdrop(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => {
                assert!(color.a > 0.0 && color.a < 1.0);
            }
            _ => panic!("expected a translucent color background"),
        }
    }

    #[test]
    fn badge_uses_accent_for_border_and_text() {
        let accent = palette::SUCCESS_500;
        let style = badge(accent)(&Theme::Dark);
        assert_eq!(style.border.color, accent);
        assert_eq!(style.text_color, Some(accent));
    }
}
