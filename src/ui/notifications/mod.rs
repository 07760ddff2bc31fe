// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (login success, request failures, etc.) without
//! blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Design Considerations
//!
//! - Toast duration: ~3s for success/info, ~5s for warnings, manual dismiss for errors
//! - Max visible toasts: 3 (others are queued)
//! - Position: bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
