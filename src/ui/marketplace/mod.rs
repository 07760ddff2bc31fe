// SPDX-License-Identifier: MPL-2.0
//! Marketplace screen: hero banner, filter toolbar and the NFT grid.
//!
//! The component owns the fetched collection and the transient filter
//! configuration. Fetching itself is driven by the application shell; this
//! module only ingests snapshots and derives the visible sequence through
//! the pure pipeline in [`crate::domain::market`].

pub mod card;
pub mod empty_state;
pub mod toolbar;

use crate::domain::market::{self, FilterConfig, ViewMode};
use crate::domain::{Listing, Nft};
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::spacing;
use crate::ui::hero;
use iced::widget::image::Handle;
use iced::widget::{Column, Row, Scrollable};
use iced::{Element, Length};
use lru::LruCache;
use std::collections::HashSet;

/// Cards per row in grid mode.
const GRID_COLUMNS: usize = 4;

/// Marketplace component state.
#[derive(Debug, Default)]
pub struct State {
    pub nfts: Vec<Nft>,
    pub listings: Vec<Listing>,
    pub filter: FilterConfig,
    /// Message of the most recent failed fetch; cleared by the next
    /// successful snapshot.
    pub error: Option<String>,
}

impl State {
    /// Replace the collection with a fresh snapshot.
    pub fn apply_snapshot(&mut self, nfts: Vec<Nft>, listings: Vec<Listing>) {
        self.nfts = nfts;
        self.listings = listings;
        self.error = None;
    }

    /// Record a fetch failure. Existing data stays on screen.
    pub fn record_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Whether any snapshot has ever been ingested.
    pub fn has_data(&self) -> bool {
        !self.nfts.is_empty() || !self.listings.is_empty()
    }

    /// URLs of artwork the current collection references.
    pub fn image_urls(&self) -> impl Iterator<Item = &str> {
        self.nfts.iter().filter_map(|nft| nft.image_url.as_deref())
    }
}

/// Messages emitted by the marketplace screen.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(toolbar::Message),
    Retry,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user asked for a fresh fetch after a failure.
    RefreshRequested,
}

/// Process a marketplace message.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::Toolbar(toolbar_message) => {
            toolbar::update(toolbar_message, &mut state.filter);
            Event::None
        }
        Message::Retry => Event::RefreshRequested,
    }
}

/// Contextual data needed to render the marketplace.
pub struct ViewContext<'a> {
    pub state: &'a State,
    /// Decoded artwork keyed by URL. Reads use `peek` so the cache order is
    /// only advanced by actual fetches.
    pub images: &'a LruCache<String, Handle>,
}

/// Render the marketplace screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;

    // Total failure with nothing to show: full error panel with a retry.
    if !state.has_data() {
        if let Some(error_message) = &state.error {
            return centered_error_view(
                ErrorDisplay::new(ErrorSeverity::Error)
                    .title("Unable to load the marketplace")
                    .message("The server could not be reached.")
                    .details(error_message.clone())
                    .action("Retry", Message::Retry),
            );
        }
    }

    let visible = market::apply(&state.nfts, &state.listings, &state.filter);
    let categories = market::categories(&state.nfts);
    let listed_ids: HashSet<u64> = state.listings.iter().map(|l| l.nft_id).collect();
    let sold_ids: HashSet<u64> = state
        .listings
        .iter()
        .filter(|l| l.sold)
        .map(|l| l.nft_id)
        .collect();

    let banner = hero::view(hero::Stats {
        total_nfts: state.nfts.len(),
        listed: listed_ids.len(),
        categories: categories.len(),
    });

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .push(banner);

    // Stale-data warning when a poll failed but old data is still shown.
    if state.has_data() {
        if let Some(error_message) = &state.error {
            content = content.push(
                ErrorDisplay::new(ErrorSeverity::Warning)
                    .title("Connection lost")
                    .message("Showing the last known marketplace state.")
                    .details(error_message.clone())
                    .action("Retry", Message::Retry)
                    .view(),
            );
        }
    }

    content = content.push(
        toolbar::view(toolbar::ViewContext {
            filter: &state.filter,
            categories: &categories,
        })
        .map(Message::Toolbar),
    );

    if visible.is_empty() {
        content = content.push(empty_state::view(state.filter.is_active()).map(Message::Toolbar));
    } else {
        content = content.push(collection_view(
            visible,
            &listed_ids,
            &sold_ids,
            ctx.images,
            state.filter.view_mode,
        ));
    }

    Scrollable::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Lay out the derived sequence as a grid of cards or a flat list of rows.
fn collection_view<'a>(
    visible: Vec<Nft>,
    listed_ids: &HashSet<u64>,
    sold_ids: &HashSet<u64>,
    images: &'a LruCache<String, Handle>,
    view_mode: ViewMode,
) -> Element<'a, Message> {
    let card_for = |nft: Nft| -> Element<'a, Message> {
        let sale = card::SaleState {
            listed: listed_ids.contains(&nft.id),
            sold: sold_ids.contains(&nft.id),
        };
        let image = nft
            .image_url
            .as_deref()
            .and_then(|url| images.peek(url))
            .cloned();
        card::view(nft, sale, image, view_mode)
    };

    match view_mode {
        ViewMode::Grid => {
            let mut grid = Column::new().spacing(spacing::SM);
            let mut row = Row::new().spacing(spacing::SM);
            let mut in_row = 0;
            for nft in visible {
                row = row.push(card_for(nft));
                in_row += 1;
                if in_row == GRID_COLUMNS {
                    grid = grid.push(row);
                    row = Row::new().spacing(spacing::SM);
                    in_row = 0;
                }
            }
            if in_row > 0 {
                grid = grid.push(row);
            }
            grid.into()
        }
        ViewMode::List => {
            let mut list = Column::new().spacing(spacing::XS);
            for nft in visible {
                list = list.push(card_for(nft));
            }
            list.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn nft(id: u64, category: &str) -> Nft {
        Nft {
            id,
            title: format!("Item {id}"),
            category: category.to_string(),
            price: Some(id as f64),
            created_at: chrono::Utc.timestamp_opt(1_700_000_000 + id as i64, 0).single(),
            creator: None,
            image_url: None,
        }
    }

    #[test]
    fn snapshot_ingestion_clears_a_previous_error() {
        let mut state = State::default();
        state.record_error("connection refused".to_string());
        assert!(state.error.is_some());

        state.apply_snapshot(vec![nft(1, "art")], vec![]);
        assert!(state.error.is_none());
        assert!(state.has_data());
    }

    #[test]
    fn record_error_keeps_existing_data() {
        let mut state = State::default();
        state.apply_snapshot(vec![nft(1, "art"), nft(2, "music")], vec![]);
        state.record_error("timeout".to_string());
        assert_eq!(state.nfts.len(), 2);
        assert_eq!(state.error.as_deref(), Some("timeout"));
    }

    #[test]
    fn toolbar_messages_mutate_the_filter_without_events() {
        let mut state = State::default();
        let event = update(
            Message::Toolbar(toolbar::Message::CategorySelected("art".to_string())),
            &mut state,
        );
        assert!(matches!(event, Event::None));
        assert_eq!(state.filter.category.as_deref(), Some("art"));
    }

    #[test]
    fn retry_requests_a_refresh() {
        let mut state = State::default();
        let event = update(Message::Retry, &mut state);
        assert!(matches!(event, Event::RefreshRequested));
    }

    #[test]
    fn image_urls_skips_items_without_artwork() {
        let mut state = State::default();
        let mut with_art = nft(1, "art");
        with_art.image_url = Some("https://cdn.example/1.png".to_string());
        state.apply_snapshot(vec![with_art, nft(2, "art")], vec![]);

        let urls: Vec<&str> = state.image_urls().collect();
        assert_eq!(urls, vec!["https://cdn.example/1.png"]);
    }
}
