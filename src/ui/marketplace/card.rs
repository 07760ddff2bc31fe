// SPDX-License-Identifier: MPL-2.0
//! Single NFT presentation, in grid-card and list-row variants.
//!
//! Cards take ownership of the record because the filter pipeline hands out
//! owned snapshots per frame.

use crate::domain::market::ViewMode;
use crate::domain::Nft;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{text, Column, Container, Image, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Theme,
};

/// Per-item sale state derived from the listings snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SaleState {
    /// An active listing references this NFT. Sold listings still count.
    pub listed: bool,
    /// The listing has been sold.
    pub sold: bool,
}

/// Render one NFT in the mode the toolbar selected.
pub fn view<Message: 'static>(
    nft: Nft,
    sale: SaleState,
    image: Option<Handle>,
    view_mode: ViewMode,
) -> Element<'static, Message> {
    match view_mode {
        ViewMode::Grid => grid_card(nft, sale, image),
        ViewMode::List => list_row(nft, sale, image),
    }
}

fn artwork<Message: 'static>(image: Option<Handle>, height: f32) -> Element<'static, Message> {
    match image {
        Some(handle) => Image::new(handle)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into(),
        None => Container::new(
            icons::sized(icons::frame(), sizing::ICON_XL).color(palette::PRIMARY_200),
        )
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into(),
    }
}

fn price_text(nft: &Nft, listed: bool) -> Text<'static> {
    if listed {
        Text::new(format!("{:.2} TT", nft.price_or_zero()))
            .size(typography::BODY)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::SUCCESS_500),
            })
    } else {
        Text::new("Not listed")
            .size(typography::BODY_SM)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().secondary.base.text),
            })
    }
}

fn creator_text(nft: &Nft) -> Text<'static> {
    let name = nft
        .creator
        .as_ref()
        .map_or("unknown", |c| c.username.as_str());
    Text::new(format!("by @{name}"))
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().secondary.base.text),
        })
}

fn category_badge<Message: 'static>(category: String) -> Element<'static, Message> {
    Container::new(Text::new(category).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge(palette::PRIMARY_500))
        .into()
}

fn sold_badge<Message: 'static>() -> Element<'static, Message> {
    Container::new(Text::new("Sold").size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge(palette::WARNING_500))
        .into()
}

fn grid_card<Message: 'static>(
    nft: Nft,
    sale: SaleState,
    image: Option<Handle>,
) -> Element<'static, Message> {
    let price = price_text(&nft, sale.listed);
    let creator = creator_text(&nft);

    let mut badges = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(category_badge(nft.category));
    if sale.sold {
        badges = badges.push(sold_badge());
    }

    let content = Column::new()
        .spacing(spacing::XS)
        .push(artwork(image, sizing::CARD_ART_HEIGHT))
        .push(Text::new(nft.title).size(typography::BODY_LG))
        .push(creator)
        .push(
            badges
                .push(iced::widget::space::horizontal())
                .push(price),
        );

    Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}

fn list_row<Message: 'static>(
    nft: Nft,
    sale: SaleState,
    image: Option<Handle>,
) -> Element<'static, Message> {
    let price = price_text(&nft, sale.listed);
    let creator = creator_text(&nft);

    let thumbnail = Container::new(artwork::<Message>(image, sizing::ICON_XL))
        .width(Length::Fixed(sizing::ICON_XL))
        .height(Length::Fixed(sizing::ICON_XL));

    let identity = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(nft.title).size(typography::BODY_LG))
        .push(creator);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(thumbnail)
        .push(identity)
        .push(iced::widget::space::horizontal())
        .push(category_badge(nft.category));
    if sale.sold {
        row = row.push(sold_badge());
    }
    let row = row.push(price);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_nft() -> Nft {
        Nft {
            id: 1,
            title: "Aurora".to_string(),
            category: "art".to_string(),
            price: Some(4.5),
            created_at: None,
            creator: None,
            image_url: None,
        }
    }

    #[test]
    fn grid_card_renders_listed_and_sold_states() {
        for sale in [
            SaleState::default(),
            SaleState {
                listed: true,
                sold: false,
            },
            SaleState {
                listed: true,
                sold: true,
            },
        ] {
            let _element: Element<'static, ()> =
                view(test_nft(), sale, None, ViewMode::Grid);
        }
    }

    #[test]
    fn list_row_renders_without_artwork() {
        let _element: Element<'static, ()> =
            view(test_nft(), SaleState::default(), None, ViewMode::List);
    }
}
