// SPDX-License-Identifier: MPL-2.0
//! `prooforia` is a desktop client for the prooforia NFT marketplace, built
//! with the Iced GUI framework.
//!
//! It provides marketplace browsing with client-side filtering and sorting,
//! a community feed, Discord-based sign-in with wallet recovery, and a mint
//! form for creating new items.

#![doc(html_root_url = "https://docs.rs/prooforia/0.1.0")]

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
