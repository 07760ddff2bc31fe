// SPDX-License-Identifier: MPL-2.0
//! Hero banner shown above the marketplace grid.

use crate::ui::design_tokens::{palette, spacing};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{text, Column, Container, Text};
use iced::{Element, Length, Theme};

/// Summary figures displayed in the banner.
pub struct Stats {
    pub total_nfts: usize,
    pub listed: usize,
    pub categories: usize,
}

pub fn view<Message: 'static>(stats: Stats) -> Element<'static, Message> {
    let headline = Text::new("Discover, collect and mint digital art")
        .size(26)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PRIMARY_400),
        });

    let subline = Text::new(format!(
        "{} items · {} listed · {} categories",
        stats.total_nfts, stats.listed, stats.categories
    ))
    .size(14)
    .style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().secondary.base.text),
    });

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(headline)
        .push(subline);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .style(styles::container::panel)
        .into()
}
