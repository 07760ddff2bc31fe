// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the marketplace, the
//! community feed, the upload form and the auth dialog.
//!
//! The `App` struct wires the components together and translates their
//! events into side effects like HTTP requests and toast notifications.
//! Policy decisions (poll cadence, image cache size, window bounds) live
//! here so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Snapshot};

use crate::api::ApiClient;
use crate::config;
use crate::domain::SessionUser;
use crate::ui::auth_dialog;
use crate::ui::header::Tab;
use crate::ui::marketplace;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use crate::ui::upload;
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};
use lru::LruCache;
use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroUsize;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 760;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Decoded card-art handles kept in memory.
const IMAGE_CACHE_CAPACITY: usize = 256;

/// Root Iced application state.
pub struct App {
    api: ApiClient,
    active_tab: Tab,
    marketplace: marketplace::State,
    upload: upload::State,
    session: Option<SessionUser>,
    /// Modal auth dialog; `None` while closed.
    auth_dialog: Option<auth_dialog::State>,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    poll_interval: Duration,
    /// True until the first snapshot response (success or failure) lands.
    initial_load_pending: bool,
    spinner_rotation: f32,
    /// Decoded card art keyed by URL.
    images: LruCache<String, Handle>,
    /// URLs with a download currently in flight.
    pending_images: HashSet<String>,
    /// Stamp of the newest snapshot fetch; older responses are dropped.
    fetch_generation: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_tab", &self.active_tab)
            .field("logged_in", &self.session.is_some())
            .field("nfts", &self.marketplace.nfts.len())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            api: ApiClient::new(config::DEFAULT_API_BASE_URL),
            active_tab: Tab::Marketplace,
            marketplace: marketplace::State::default(),
            upload: upload::State::default(),
            session: None,
            auth_dialog: None,
            notifications: notifications::Manager::new(),
            theme_mode: ThemeMode::System,
            poll_interval: Duration::from_secs(config::DEFAULT_POLL_INTERVAL_SECS),
            initial_load_pending: true,
            spinner_rotation: 0.0,
            images: LruCache::new(
                NonZeroUsize::new(IMAGE_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN),
            ),
            pending_images: HashSet::new(),
            fetch_generation: 0,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from config and flags, and kicks off
    /// the first marketplace fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app = App::default();

        let config = match flags
            .config_path
            .as_deref()
            .map_or_else(config::load, config::load_from_path)
        {
            Ok(config) => config,
            Err(error) => {
                eprintln!("could not load settings: {error}");
                app.notifications.push(notifications::Notification::warning(
                    "Settings could not be read, using defaults",
                ));
                config::Config::default()
            }
        };

        let base_url = flags
            .api_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| config.api_base_url());
        app.api = ApiClient::new(base_url);
        app.theme_mode = config.theme_mode;
        app.poll_interval = Duration::from_secs(config.poll_interval_secs());

        let task = update::fetch_snapshot(&mut app);
        (app, task)
    }

    fn title(&self) -> String {
        format!("{} - prooforia", self.active_tab.label())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let poll = subscription::create_poll_subscription(self.poll_interval);
        let tick = subscription::create_tick_subscription(
            self.initial_load_pending,
            self.notifications.has_notifications(),
        );
        Subscription::batch([poll, tick])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(header_message) => {
                update::handle_header_message(self, header_message)
            }
            Message::Marketplace(marketplace_message) => {
                update::handle_marketplace_message(self, marketplace_message)
            }
            Message::Upload(upload_message) => {
                update::handle_upload_message(self, upload_message)
            }
            Message::AuthDialog(dialog_message) => {
                update::handle_auth_dialog_message(self, dialog_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::PollTick => update::fetch_snapshot(self),
            Message::AnimationTick(_) => update::handle_animation_tick(self),
            Message::SnapshotFetched { generation, result } => {
                update::handle_snapshot_fetched(self, generation, result)
            }
            Message::ImageFetched { url, result } => {
                update::handle_image_fetched(self, url, result)
            }
            Message::LoginCompleted(result) => update::handle_login_completed(self, result),
            Message::RecoveryCompleted(result) => {
                update::handle_recovery_completed(self, result)
            }
            Message::MintCompleted(result) => update::handle_mint_completed(self, result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Listing, Nft};
    use crate::error::Error;
    use crate::ui::header;

    fn nft(id: u64) -> Nft {
        Nft {
            id,
            title: format!("Item {id}"),
            category: "art".to_string(),
            price: Some(1.0),
            created_at: None,
            creator: None,
            image_url: None,
        }
    }

    fn user() -> SessionUser {
        SessionUser {
            id: 1,
            username: "ada".to_string(),
            wallet_address: "0xabc".to_string(),
            test_token_balance: 10.0,
            delegated_credits: 2.0,
        }
    }

    #[test]
    fn stale_snapshot_responses_are_dropped() {
        let mut app = App::default();
        app.fetch_generation = 2;

        let _ = app.update(Message::SnapshotFetched {
            generation: 1,
            result: Ok((vec![nft(1)], vec![])),
        });

        assert!(app.marketplace.nfts.is_empty());
        assert!(app.initial_load_pending);
    }

    #[test]
    fn current_snapshot_is_ingested() {
        let mut app = App::default();
        app.fetch_generation = 3;

        let _ = app.update(Message::SnapshotFetched {
            generation: 3,
            result: Ok((
                vec![nft(1), nft(2)],
                vec![Listing {
                    id: 1,
                    nft_id: 1,
                    sold: false,
                }],
            )),
        });

        assert_eq!(app.marketplace.nfts.len(), 2);
        assert_eq!(app.marketplace.listings.len(), 1);
        assert!(!app.initial_load_pending);
        assert!(app.marketplace.error.is_none());
    }

    #[test]
    fn failed_snapshot_keeps_previous_data_and_toasts_once() {
        let mut app = App::default();
        app.fetch_generation = 1;
        app.marketplace.apply_snapshot(vec![nft(1)], vec![]);

        let _ = app.update(Message::SnapshotFetched {
            generation: 1,
            result: Err(Error::Http("connection refused".to_string())),
        });
        assert_eq!(app.marketplace.nfts.len(), 1);
        assert!(app.marketplace.error.is_some());
        assert_eq!(app.notifications.visible_count(), 1);

        // A second consecutive failure must not stack another toast.
        let _ = app.update(Message::SnapshotFetched {
            generation: 1,
            result: Err(Error::Http("connection refused".to_string())),
        });
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn login_stores_the_session_and_closes_the_dialog() {
        let mut app = App::default();
        app.auth_dialog = Some(auth_dialog::State::default());

        let _ = app.update(Message::LoginCompleted(Ok(user())));

        assert!(app.session.is_some());
        assert!(app.auth_dialog.is_none());
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn failed_login_keeps_the_dialog_open() {
        let mut app = App::default();
        let mut dialog = auth_dialog::State::default();
        dialog.login_in_progress = true;
        app.auth_dialog = Some(dialog);

        let _ = app.update(Message::LoginCompleted(Err(Error::Api {
            status: 502,
            message: "discord unavailable".to_string(),
        })));

        assert!(app.session.is_none());
        let dialog = app.auth_dialog.as_ref().expect("dialog should stay open");
        assert!(!dialog.login_in_progress);
    }

    #[test]
    fn upload_tab_without_session_opens_the_auth_dialog() {
        let mut app = App::default();

        let _ = app.update(Message::Header(header::Message::TabSelected(Tab::Upload)));

        assert_eq!(app.active_tab, Tab::Marketplace);
        assert!(app.auth_dialog.is_some());
    }

    #[test]
    fn logout_leaves_guarded_tabs() {
        let mut app = App::default();
        app.session = Some(user());
        app.active_tab = Tab::Upload;

        let _ = app.update(Message::Header(header::Message::LogoutPressed));

        assert!(app.session.is_none());
        assert_eq!(app.active_tab, Tab::Marketplace);
    }

    #[test]
    fn fetched_images_land_in_the_cache() {
        let mut app = App::default();
        let url = "https://cdn.example/1.png".to_string();
        app.pending_images.insert(url.clone());

        let _ = app.update(Message::ImageFetched {
            url: url.clone(),
            result: Ok(vec![0u8; 16]),
        });

        assert!(app.pending_images.is_empty());
        assert!(app.images.contains(&url));
    }

    #[test]
    fn failed_image_fetch_is_silent() {
        let mut app = App::default();
        let url = "https://cdn.example/1.png".to_string();
        app.pending_images.insert(url.clone());

        let _ = app.update(Message::ImageFetched {
            url: url.clone(),
            result: Err(Error::Http("410".to_string())),
        });

        assert!(app.pending_images.is_empty());
        assert!(!app.images.contains(&url));
        assert_eq!(app.notifications.visible_count(), 0);
    }

    #[test]
    fn mint_success_resets_the_form_and_returns_to_the_marketplace() {
        let mut app = App::default();
        app.session = Some(user());
        app.active_tab = Tab::Upload;
        app.upload.begin_submit();

        let _ = app.update(Message::MintCompleted(Ok(nft(9))));

        assert_eq!(app.active_tab, Tab::Marketplace);
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn poll_tick_supersedes_older_fetches() {
        let mut app = App::default();
        let before = app.fetch_generation;
        let _ = app.update(Message::PollTick);
        assert_eq!(app.fetch_generation, before + 1);
    }
}
