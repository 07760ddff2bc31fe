// SPDX-License-Identifier: MPL-2.0
//! Marketplace filtering and ordering for the domain layer.
//!
//! This module contains the pure filter/sort pipeline over already-fetched
//! NFT and listing collections. No I/O happens here; the displayed sequence
//! is always a function of (NFTs, listings, configuration).
//!
//! # Available configuration
//!
//! - Category: exact match on [`Nft::category`], or pass-through
//! - [`MarketFilter`]: listed / unlisted membership against listings
//! - [`SortKey`]: price, title, or creation-time ordering
//! - [`ViewMode`]: grid or list presentation (display only)

use crate::domain::nft::{Listing, Nft};
use std::collections::HashSet;
use std::fmt;

// =============================================================================
// Market Filter
// =============================================================================

/// Filter by marketplace membership.
///
/// An NFT counts as "listed" when its id appears in any listing, sold or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarketFilter {
    /// Show every NFT regardless of listing state.
    #[default]
    All,
    /// Show only NFTs that have a listing.
    Listed,
    /// Show only NFTs without a listing.
    Unlisted,
}

impl MarketFilter {
    /// Every variant, in toolbar display order.
    pub const ALL: [MarketFilter; 3] =
        [MarketFilter::All, MarketFilter::Listed, MarketFilter::Unlisted];

    /// Returns `true` if an NFT with the given membership passes this filter.
    #[must_use]
    pub fn matches(&self, is_listed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Listed => is_listed,
            Self::Unlisted => !is_listed,
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

impl fmt::Display for MarketFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::All => "All items",
            Self::Listed => "On sale",
            Self::Unlisted => "Not listed",
        };
        write!(f, "{label}")
    }
}

// =============================================================================
// Sort Key
// =============================================================================

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest creation timestamp first.
    #[default]
    Recent,
    /// Oldest creation timestamp first.
    Oldest,
    /// Cheapest first; missing prices sort as zero.
    PriceLow,
    /// Most expensive first; missing prices sort as zero.
    PriceHigh,
    /// Lexicographic ascending on title.
    Name,
}

impl SortKey {
    /// Every variant, in pick-list display order.
    pub const ALL: [SortKey; 5] = [
        SortKey::Recent,
        SortKey::Oldest,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Name,
    ];
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Recent => "Recently created",
            Self::Oldest => "Oldest first",
            Self::PriceLow => "Price: low to high",
            Self::PriceHigh => "Price: high to low",
            Self::Name => "Name A-Z",
        };
        write!(f, "{label}")
    }
}

// =============================================================================
// View Mode
// =============================================================================

/// Presentation of the derived sequence. Display-only; the pipeline ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    /// Returns the other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

// =============================================================================
// Filter Configuration
// =============================================================================

/// Transient marketplace view configuration. Exists only for the duration of
/// the session; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterConfig {
    /// Exact category to keep; `None` keeps every category.
    pub category: Option<String>,
    pub market: MarketFilter,
    pub sort: SortKey,
    pub view_mode: ViewMode,
}

impl FilterConfig {
    /// Returns `true` if any narrowing filter is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.category.is_some() || self.market.is_active()
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Produces the ordered, displayable sequence for the marketplace view.
///
/// Applies the category filter, then listing membership, then the sort key.
/// Malformed or missing fields degrade to defaults rather than failing.
#[must_use]
pub fn apply(nfts: &[Nft], listings: &[Listing], config: &FilterConfig) -> Vec<Nft> {
    let listed_ids: HashSet<u64> = listings.iter().map(|l| l.nft_id).collect();

    let mut result: Vec<Nft> = nfts
        .iter()
        .filter(|nft| match &config.category {
            Some(category) => nft.category == *category,
            None => true,
        })
        .filter(|nft| config.market.matches(listed_ids.contains(&nft.id)))
        .cloned()
        .collect();

    match config.sort {
        SortKey::PriceLow => {
            result.sort_by(|a, b| a.price_or_zero().total_cmp(&b.price_or_zero()));
        }
        SortKey::PriceHigh => {
            result.sort_by(|a, b| b.price_or_zero().total_cmp(&a.price_or_zero()));
        }
        SortKey::Name => result.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Oldest => result.sort_by_key(Nft::created_timestamp),
        SortKey::Recent => {
            result.sort_by_key(|nft| std::cmp::Reverse(nft.created_timestamp()));
        }
    }

    result
}

/// Distinct categories present in the collection, sorted, for the toolbar
/// pick list.
#[must_use]
pub fn categories(nfts: &[Nft]) -> Vec<String> {
    let mut set: Vec<String> = nfts
        .iter()
        .map(|nft| nft.category.clone())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    set.sort();
    set
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn nft(id: u64, title: &str, category: &str, price: Option<f64>, day: Option<u32>) -> Nft {
        Nft {
            id,
            title: title.to_string(),
            category: category.to_string(),
            price,
            created_at: day.map(|d| Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0).unwrap()),
            creator: None,
            image_url: None,
        }
    }

    fn listing(id: u64, nft_id: u64, sold: bool) -> Listing {
        Listing { id, nft_id, sold }
    }

    fn sample_nfts() -> Vec<Nft> {
        vec![
            nft(1, "Aurora", "art", Some(5.0), Some(3)),
            nft(2, "Basalt", "photography", Some(2.0), Some(1)),
            nft(3, "Cinder", "art", None, None),
            nft(4, "Dusk", "music", Some(9.0), Some(7)),
        ]
    }

    // -------------------------------------------------------------------------
    // Category filter
    // -------------------------------------------------------------------------

    #[test]
    fn category_filter_keeps_only_matching_records() {
        let config = FilterConfig {
            category: Some("art".to_string()),
            ..FilterConfig::default()
        };
        let result = apply(&sample_nfts(), &[], &config);

        assert!(!result.is_empty());
        assert!(result.iter().all(|n| n.category == "art"));
    }

    #[test]
    fn no_category_passes_everything_through() {
        let result = apply(&sample_nfts(), &[], &FilterConfig::default());
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn unknown_category_yields_empty_sequence() {
        let config = FilterConfig {
            category: Some("sculpture".to_string()),
            ..FilterConfig::default()
        };
        assert!(apply(&sample_nfts(), &[], &config).is_empty());
    }

    // -------------------------------------------------------------------------
    // Market filter
    // -------------------------------------------------------------------------

    #[test]
    fn listed_yields_exactly_nfts_with_listings() {
        let listings = vec![listing(10, 1, false), listing(11, 3, true)];
        let config = FilterConfig {
            market: MarketFilter::Listed,
            ..FilterConfig::default()
        };
        let mut ids: Vec<u64> = apply(&sample_nfts(), &listings, &config)
            .iter()
            .map(|n| n.id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn unlisted_yields_exactly_the_complement() {
        let listings = vec![listing(10, 1, false), listing(11, 3, true)];
        let config = FilterConfig {
            market: MarketFilter::Unlisted,
            ..FilterConfig::default()
        };
        let mut ids: Vec<u64> = apply(&sample_nfts(), &listings, &config)
            .iter()
            .map(|n| n.id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn sold_listing_still_counts_as_listed() {
        let listings = vec![listing(10, 2, true)];
        let config = FilterConfig {
            market: MarketFilter::Listed,
            ..FilterConfig::default()
        };
        let result = apply(&sample_nfts(), &listings, &config);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn market_and_category_filters_compose() {
        let listings = vec![listing(10, 1, false), listing(11, 2, false)];
        let config = FilterConfig {
            category: Some("art".to_string()),
            market: MarketFilter::Listed,
            ..FilterConfig::default()
        };
        let result = apply(&sample_nfts(), &listings, &config);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    #[test]
    fn price_low_sorts_ascending_with_missing_price_as_zero() {
        let config = FilterConfig {
            sort: SortKey::PriceLow,
            ..FilterConfig::default()
        };
        let ids: Vec<u64> = apply(&sample_nfts(), &[], &config)
            .iter()
            .map(|n| n.id)
            .collect();
        // Cinder has no price and sorts first as zero.
        assert_eq!(ids, vec![3, 2, 1, 4]);
    }

    #[test]
    fn price_high_reverses_price_low_when_no_ties() {
        let nfts = sample_nfts();
        let low = FilterConfig {
            sort: SortKey::PriceLow,
            ..FilterConfig::default()
        };
        let high = FilterConfig {
            sort: SortKey::PriceHigh,
            ..FilterConfig::default()
        };

        let mut low_ids: Vec<u64> = apply(&nfts, &[], &low).iter().map(|n| n.id).collect();
        let high_ids: Vec<u64> = apply(&nfts, &[], &high).iter().map(|n| n.id).collect();
        low_ids.reverse();
        assert_eq!(low_ids, high_ids);
    }

    #[test]
    fn name_sorts_lexicographically_ascending() {
        let config = FilterConfig {
            sort: SortKey::Name,
            ..FilterConfig::default()
        };
        let titles: Vec<String> = apply(&sample_nfts(), &[], &config)
            .iter()
            .map(|n| n.title.clone())
            .collect();
        assert_eq!(titles, vec!["Aurora", "Basalt", "Cinder", "Dusk"]);
    }

    #[test]
    fn oldest_sorts_missing_timestamp_first() {
        let config = FilterConfig {
            sort: SortKey::Oldest,
            ..FilterConfig::default()
        };
        let ids: Vec<u64> = apply(&sample_nfts(), &[], &config)
            .iter()
            .map(|n| n.id)
            .collect();
        // Cinder has no timestamp and sorts as epoch.
        assert_eq!(ids, vec![3, 2, 1, 4]);
    }

    #[test]
    fn recent_sorts_newest_first() {
        let config = FilterConfig {
            sort: SortKey::Recent,
            ..FilterConfig::default()
        };
        let ids: Vec<u64> = apply(&sample_nfts(), &[], &config)
            .iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec![4, 1, 2, 3]);
    }

    // -------------------------------------------------------------------------
    // Configuration + helpers
    // -------------------------------------------------------------------------

    #[test]
    fn empty_collection_yields_empty_sequence() {
        let result = apply(&[], &[], &FilterConfig::default());
        assert!(result.is_empty());
    }

    #[test]
    fn default_config_is_inactive() {
        assert!(!FilterConfig::default().is_active());
    }

    #[test]
    fn category_or_market_filter_activates_config() {
        let with_category = FilterConfig {
            category: Some("art".to_string()),
            ..FilterConfig::default()
        };
        let with_market = FilterConfig {
            market: MarketFilter::Unlisted,
            ..FilterConfig::default()
        };
        assert!(with_category.is_active());
        assert!(with_market.is_active());
    }

    #[test]
    fn view_mode_toggles_between_grid_and_list() {
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
        assert_eq!(ViewMode::List.toggled(), ViewMode::Grid);
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        let cats = categories(&sample_nfts());
        assert_eq!(cats, vec!["art", "music", "photography"]);
    }

    #[test]
    fn market_filter_matches_table() {
        assert!(MarketFilter::All.matches(true));
        assert!(MarketFilter::All.matches(false));
        assert!(MarketFilter::Listed.matches(true));
        assert!(!MarketFilter::Listed.matches(false));
        assert!(!MarketFilter::Unlisted.matches(true));
        assert!(MarketFilter::Unlisted.matches(false));
    }
}
