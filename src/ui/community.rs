// SPDX-License-Identifier: MPL-2.0
//! Community screen: a reverse-chronological feed of recently minted items
//! and the creators behind them.
//!
//! The feed is derived on every frame from the marketplace collection; it
//! holds no state of its own.

use crate::domain::market::{FilterConfig, SortKey};
use crate::domain::{market, Nft};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{text, Column, Container, Image, Row, Scrollable, Text};
use iced::{Element, Length, Theme};
use lru::LruCache;
use std::collections::BTreeMap;

/// Maximum number of feed entries shown.
const FEED_LIMIT: usize = 12;

/// Most recently minted items, newest first.
pub fn recent_feed(nfts: &[Nft]) -> Vec<Nft> {
    let config = FilterConfig {
        sort: SortKey::Recent,
        ..FilterConfig::default()
    };
    let mut feed = market::apply(nfts, &[], &config);
    feed.truncate(FEED_LIMIT);
    feed
}

/// Mint counts per creator, sorted by username.
pub fn creator_counts(nfts: &[Nft]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for nft in nfts {
        if let Some(creator) = &nft.creator {
            *counts.entry(creator.username.clone()).or_insert(0) += 1;
        }
    }
    counts.into_iter().collect()
}

/// Render the community screen.
pub fn view<'a, Message: 'a>(
    nfts: &[Nft],
    images: &'a LruCache<String, Handle>,
) -> Element<'a, Message> {
    let feed = recent_feed(nfts);
    let creators = creator_counts(nfts);

    let mut feed_column = Column::new()
        .spacing(spacing::XS)
        .width(Length::FillPortion(3))
        .push(Text::new("Recent mints").size(typography::TITLE_SM));

    if feed.is_empty() {
        feed_column = feed_column.push(
            Text::new("Nothing has been minted yet.")
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                }),
        );
    } else {
        for nft in feed {
            feed_column = feed_column.push(feed_entry(nft, images));
        }
    }

    let mut creators_column = Column::new()
        .spacing(spacing::XS)
        .width(Length::FillPortion(1))
        .push(Text::new("Creators").size(typography::TITLE_SM));

    for (username, count) in creators {
        let label = if count == 1 {
            format!("@{username} · 1 mint")
        } else {
            format!("@{username} · {count} mints")
        };
        creators_column = creators_column.push(
            Container::new(Text::new(label).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::badge(palette::PRIMARY_600)),
        );
    }

    let layout = Row::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(feed_column)
        .push(creators_column);

    Scrollable::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn feed_entry<'a, Message: 'a>(
    nft: Nft,
    images: &'a LruCache<String, Handle>,
) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match nft
        .image_url
        .as_deref()
        .and_then(|url| images.peek(url))
        .cloned()
    {
        Some(handle) => Image::new(handle)
            .width(Length::Fixed(40.0))
            .height(Length::Fixed(40.0))
            .into(),
        None => Container::new(Text::new("·"))
            .width(Length::Fixed(40.0))
            .height(Length::Fixed(40.0))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into(),
    };

    let minted_at = nft
        .created_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown date".to_string());

    let creator = nft
        .creator
        .as_ref()
        .map_or("unknown".to_string(), |c| c.username.clone());

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(nft.title).size(typography::BODY))
        .push(
            Text::new(format!("@{creator} · {minted_at}"))
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                }),
        );

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(thumbnail)
            .push(details),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Creator;
    use chrono::TimeZone;

    fn nft(id: u64, username: &str, minted_at: i64) -> Nft {
        Nft {
            id,
            title: format!("Item {id}"),
            category: "art".to_string(),
            price: None,
            created_at: chrono::Utc.timestamp_opt(minted_at, 0).single(),
            creator: Some(Creator {
                id,
                username: username.to_string(),
            }),
            image_url: None,
        }
    }

    #[test]
    fn feed_is_newest_first_and_capped() {
        let nfts: Vec<Nft> = (0..20)
            .map(|i| nft(i, "maker", 1_700_000_000 + i as i64))
            .collect();
        let feed = recent_feed(&nfts);
        assert_eq!(feed.len(), FEED_LIMIT);
        assert_eq!(feed[0].id, 19);
        assert_eq!(feed[FEED_LIMIT - 1].id, 20 - FEED_LIMIT as u64);
    }

    #[test]
    fn creator_counts_aggregate_by_username() {
        let nfts = vec![
            nft(1, "ada", 1),
            nft(2, "ada", 2),
            nft(3, "bob", 3),
        ];
        let counts = creator_counts(&nfts);
        assert_eq!(
            counts,
            vec![("ada".to_string(), 2), ("bob".to_string(), 1)]
        );
    }

    #[test]
    fn anonymous_mints_are_excluded_from_creator_counts() {
        let mut anonymous = nft(1, "ada", 1);
        anonymous.creator = None;
        let counts = creator_counts(&[anonymous]);
        assert!(counts.is_empty());
    }
}
