// SPDX-License-Identifier: MPL-2.0
//! Core marketplace records as served by the backend API.
//!
//! All DTOs deserialize from camelCase JSON. Fields the backend may omit are
//! `Option`s; the filter/sort pipeline substitutes defaults instead of
//! rejecting such records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference to the account that minted an NFT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub id: u64,
    pub username: String,
}

/// A unique digital-art item. Immutable once fetched; the whole collection
/// is replaced on every poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nft {
    pub id: u64,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub creator: Option<Creator>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Nft {
    /// Price used for ordering; missing prices sort as zero.
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Creation time as a Unix timestamp; missing timestamps sort as epoch.
    pub fn created_timestamp(&self) -> i64 {
        self.created_at.map_or(0, |t| t.timestamp_millis())
    }
}

/// An offer-for-sale association between an NFT and a marketplace sale state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: u64,
    pub nft_id: u64,
    #[serde(default)]
    pub sold: bool,
}

/// The locally held representation of an authenticated user for the duration
/// of the UI session. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: u64,
    pub username: String,
    pub wallet_address: String,
    #[serde(default)]
    pub test_token_balance: f64,
    #[serde(default)]
    pub delegated_credits: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nft_deserializes_from_camel_case_json() {
        let json = r#"{
            "id": 7,
            "title": "Nebula #7",
            "category": "art",
            "price": 12.5,
            "createdAt": "2024-03-01T12:00:00Z",
            "creator": {"id": 3, "username": "astra"},
            "imageUrl": "https://cdn.prooforia.example/nfts/7.png"
        }"#;

        let nft: Nft = serde_json::from_str(json).expect("failed to parse NFT");
        assert_eq!(nft.id, 7);
        assert_eq!(nft.title, "Nebula #7");
        assert_eq!(nft.price, Some(12.5));
        assert_eq!(nft.creator.as_ref().map(|c| c.username.as_str()), Some("astra"));
        assert!(nft.created_at.is_some());
    }

    #[test]
    fn nft_tolerates_missing_optional_fields() {
        let json = r#"{"id": 1, "title": "Bare", "category": "misc"}"#;
        let nft: Nft = serde_json::from_str(json).expect("failed to parse NFT");

        assert_eq!(nft.price_or_zero(), 0.0);
        assert_eq!(nft.created_timestamp(), 0);
        assert!(nft.creator.is_none());
        assert!(nft.image_url.is_none());
    }

    #[test]
    fn listing_defaults_sold_to_false() {
        let json = r#"{"id": 4, "nftId": 7}"#;
        let listing: Listing = serde_json::from_str(json).expect("failed to parse listing");
        assert_eq!(listing.nft_id, 7);
        assert!(!listing.sold);
    }

    #[test]
    fn session_user_deserializes_balances() {
        let json = r#"{
            "id": 9,
            "username": "collector",
            "walletAddress": "0xabc123",
            "testTokenBalance": 42.0,
            "delegatedCredits": 3.5
        }"#;
        let user: SessionUser = serde_json::from_str(json).expect("failed to parse user");
        assert_eq!(user.wallet_address, "0xabc123");
        assert_eq!(user.test_token_balance, 42.0);
        assert_eq!(user.delegated_credits, 3.5);
    }
}
