// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two timers drive the app: the marketplace poll and a fast animation tick
//! that runs only while something on screen actually moves.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic marketplace poll.
pub fn create_poll_subscription(interval: Duration) -> Subscription<Message> {
    time::every(interval).map(|_| Message::PollTick)
}

/// Creates the animation tick for the loading spinner and toast
/// auto-dismiss. Idle when neither is active so the app stays quiet.
pub fn create_tick_subscription(
    is_loading: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if is_loading || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::AnimationTick)
    } else {
        Subscription::none()
    }
}
