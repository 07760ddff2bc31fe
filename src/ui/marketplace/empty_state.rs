// SPDX-License-Identifier: MPL-2.0
//! Placeholder shown when the filter pipeline yields no items.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, text, Column, Container, Text};
use iced::{Element, Length, Theme};

use super::toolbar;

/// Render the empty state.
///
/// `filters_active` switches the caption between "nothing matches your
/// filters" and "the marketplace is empty", and decides whether the
/// clear-filters shortcut is offered.
pub fn view(filters_active: bool) -> Element<'static, toolbar::Message> {
    let glyph = icons::sized(icons::frame(), sizing::ICON_XL).color(palette::PRIMARY_200);

    let caption = if filters_active {
        "No items match your filters."
    } else {
        "The marketplace is empty. Minted items will appear here."
    };

    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(glyph)
        .push(
            Text::new(caption)
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                }),
        );

    if filters_active {
        content = content.push(
            button(Text::new("Clear filters").size(typography::BODY_SM))
                .on_press(toolbar::Message::ClearFilters)
                .style(styles::button::link),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .style(styles::container::panel)
        .into()
}
