// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`error_display`] - Consistent error presentation with severity levels
//!   and an optional action button (e.g. "Retry")

pub mod error_display;
