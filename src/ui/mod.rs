// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`marketplace`] - NFT grid with filter toolbar and hero banner
//! - [`community`] - Recent-mints feed and creator roster
//! - [`upload`] - Mint form, reachable only with an active session
//! - [`recovery`] - Wallet recovery form with client-side validation
//! - [`auth_dialog`] - Modal Discord login / recovery dialog
//!
//! # Shared Infrastructure
//!
//! - [`header`] - Tab navigation and session controls
//! - [`hero`] - Marketplace summary banner
//! - [`loading`] - Full-screen spinner for the initial fetch
//! - [`components`] - Reusable UI components (error display)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Glyph icon primitives
//! - [`notifications`] - Toast notification system for user feedback

pub mod auth_dialog;
pub mod community;
pub mod components;
pub mod design_tokens;
pub mod header;
pub mod hero;
pub mod icons;
pub mod loading;
pub mod marketplace;
pub mod notifications;
pub mod recovery;
pub mod styles;
pub mod theming;
pub mod upload;
pub mod widgets;
