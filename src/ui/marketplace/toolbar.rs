// SPDX-License-Identifier: MPL-2.0
//! Marketplace toolbar: category pick list, market filter buttons, sort
//! pick list and the grid/list toggle.

use crate::domain::market::{FilterConfig, MarketFilter, SortKey, ViewMode};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, pick_list, Container, Row},
    Element, Length,
};

/// Label standing in for "no category filter" in the pick list.
pub const ALL_CATEGORIES: &str = "All categories";

/// Contextual data needed to render the toolbar.
pub struct ViewContext<'a> {
    pub filter: &'a FilterConfig,
    /// Distinct categories present in the current collection, sorted.
    pub categories: &'a [String],
}

/// Messages emitted by the toolbar.
#[derive(Debug, Clone)]
pub enum Message {
    CategorySelected(String),
    MarketSelected(MarketFilter),
    SortSelected(SortKey),
    ViewModeToggled,
    ClearFilters,
}

/// Apply a toolbar message to the filter configuration.
pub fn update(message: Message, filter: &mut FilterConfig) {
    match message {
        Message::CategorySelected(category) => {
            filter.category = if category == ALL_CATEGORIES {
                None
            } else {
                Some(category)
            };
        }
        Message::MarketSelected(market) => filter.market = market,
        Message::SortSelected(sort) => filter.sort = sort,
        Message::ViewModeToggled => filter.view_mode = filter.view_mode.toggled(),
        Message::ClearFilters => {
            filter.category = None;
            filter.market = MarketFilter::default();
        }
    }
}

/// Render the toolbar. The element owns copies of everything it shows, so
/// it is not tied to the view context's lifetime.
pub fn view(ctx: ViewContext<'_>) -> Element<'static, Message> {
    let mut category_options = Vec::with_capacity(ctx.categories.len() + 1);
    category_options.push(ALL_CATEGORIES.to_string());
    category_options.extend_from_slice(ctx.categories);

    let selected_category = ctx
        .filter
        .category
        .clone()
        .unwrap_or_else(|| ALL_CATEGORIES.to_string());

    let category_picker = pick_list(
        category_options,
        Some(selected_category),
        Message::CategorySelected,
    )
    .text_size(13)
    .padding(spacing::XS);

    let mut market_buttons = Row::new().spacing(spacing::XXS).align_y(Vertical::Center);
    for market in MarketFilter::ALL {
        let label = iced::widget::Text::new(market.to_string()).size(13);
        let market_button = if market == ctx.filter.market {
            button(label).style(styles::button::selected)
        } else {
            button(label)
                .on_press(Message::MarketSelected(market))
                .style(styles::button::secondary)
        };
        market_buttons = market_buttons.push(market_button);
    }

    let sort_picker = pick_list(
        SortKey::ALL,
        Some(ctx.filter.sort),
        Message::SortSelected,
    )
    .text_size(13)
    .padding(spacing::XS);

    let view_mode_icon = match ctx.filter.view_mode {
        ViewMode::Grid => icons::rows(),
        ViewMode::List => icons::grid(),
    };
    let view_mode_button = button(icons::sized(view_mode_icon, sizing::ICON_SM))
        .on_press(Message::ViewModeToggled)
        .style(styles::button::secondary)
        .padding(spacing::XS);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(category_picker)
        .push(market_buttons)
        .push(sort_picker)
        .push(iced::widget::space::horizontal())
        .push(view_mode_button);

    if ctx.filter.is_active() {
        let clear = button(iced::widget::Text::new("Clear filters").size(13))
            .on_press(Message::ClearFilters)
            .style(styles::button::link);
        row = row.push(clear);
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}
