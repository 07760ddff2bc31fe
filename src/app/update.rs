// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! `App::update` in `mod.rs` dispatches every [`Message`] to one of the
//! handlers here. Handlers translate component events into side effects:
//! HTTP tasks, toast notifications, and tab switches.

use super::{App, Message, Snapshot};
use crate::domain::{Nft, SessionUser};
use crate::error::Error;
use crate::ui::auth_dialog::{self, Event as AuthDialogEvent};
use crate::ui::header::{self, Event as HeaderEvent, Tab};
use crate::ui::marketplace::{self, Event as MarketplaceEvent};
use crate::ui::notifications::Notification;
use crate::ui::upload::{self, Event as UploadEvent};
use iced::widget::image::Handle;
use iced::Task;

/// Radians the spinner advances per animation tick.
const SPINNER_STEP: f32 = 0.35;

/// Starts a marketplace fetch, superseding any in-flight poll.
///
/// NFTs and listings are fetched together so the grid never shows a frame
/// where one half of the snapshot is newer than the other.
pub fn fetch_snapshot(app: &mut App) -> Task<Message> {
    app.fetch_generation += 1;
    let generation = app.fetch_generation;
    let api = app.api.clone();

    Task::perform(
        async move {
            let nfts = api.fetch_nfts(None).await?;
            let listings = api.fetch_listings().await?;
            Ok::<Snapshot, Error>((nfts, listings))
        },
        move |result| Message::SnapshotFetched { generation, result },
    )
}

/// Starts downloads for card art that is neither cached nor in flight.
fn fetch_missing_images(app: &mut App) -> Task<Message> {
    let missing: Vec<String> = app
        .marketplace
        .image_urls()
        .filter(|url| !app.images.contains(*url) && !app.pending_images.contains(*url))
        .map(str::to_string)
        .collect();

    let mut tasks = Vec::with_capacity(missing.len());
    for url in missing {
        app.pending_images.insert(url.clone());
        let api = app.api.clone();
        let result_url = url.clone();
        tasks.push(Task::perform(
            async move { api.fetch_image(url).await },
            move |result| Message::ImageFetched {
                url: result_url.clone(),
                result,
            },
        ));
    }

    Task::batch(tasks)
}

pub fn handle_header_message(app: &mut App, message: header::Message) -> Task<Message> {
    match header::update(message, app.session.is_some()) {
        HeaderEvent::None => Task::none(),
        HeaderEvent::TabChanged(tab) => {
            app.active_tab = tab;
            Task::none()
        }
        HeaderEvent::LoginRequired | HeaderEvent::LoginRequested => {
            app.auth_dialog = Some(auth_dialog::State::default());
            Task::none()
        }
        HeaderEvent::LogoutRequested => {
            app.session = None;
            app.upload.reset();
            if app.active_tab.requires_session() {
                app.active_tab = Tab::Marketplace;
            }
            app.notifications.push(Notification::info("Signed out"));
            Task::none()
        }
    }
}

pub fn handle_marketplace_message(
    app: &mut App,
    message: marketplace::Message,
) -> Task<Message> {
    match marketplace::update(message, &mut app.marketplace) {
        MarketplaceEvent::None => Task::none(),
        MarketplaceEvent::RefreshRequested => fetch_snapshot(app),
    }
}

pub fn handle_upload_message(app: &mut App, message: upload::Message) -> Task<Message> {
    match upload::update(message, &mut app.upload) {
        UploadEvent::None => Task::none(),
        UploadEvent::Submit(request) => {
            app.upload.begin_submit();
            let api = app.api.clone();
            Task::perform(
                async move { api.mint_nft(request).await },
                Message::MintCompleted,
            )
        }
    }
}

pub fn handle_auth_dialog_message(
    app: &mut App,
    message: auth_dialog::Message,
) -> Task<Message> {
    let Some(dialog) = app.auth_dialog.as_mut() else {
        return Task::none();
    };

    match auth_dialog::update(message, dialog) {
        AuthDialogEvent::None => Task::none(),
        AuthDialogEvent::Closed => {
            app.auth_dialog = None;
            Task::none()
        }
        AuthDialogEvent::DiscordLoginRequested => {
            dialog.login_in_progress = true;
            let api = app.api.clone();
            Task::perform(
                async move { api.login_discord().await },
                Message::LoginCompleted,
            )
        }
        AuthDialogEvent::RecoverySubmitted(request) => {
            dialog.recovery.begin_submit();
            let api = app.api.clone();
            Task::perform(
                async move { api.recover_wallet(request).await },
                Message::RecoveryCompleted,
            )
        }
    }
}

pub fn handle_snapshot_fetched(
    app: &mut App,
    generation: u64,
    result: Result<Snapshot, Error>,
) -> Task<Message> {
    // A newer poll has been started since this response left; drop it.
    if generation != app.fetch_generation {
        return Task::none();
    }

    app.initial_load_pending = false;

    match result {
        Ok((nfts, listings)) => {
            app.marketplace.apply_snapshot(nfts, listings);
            fetch_missing_images(app)
        }
        Err(error) => {
            eprintln!("marketplace fetch failed: {error}");
            let first_failure = app.marketplace.error.is_none();
            app.marketplace.record_error(error.to_string());
            if first_failure {
                app.notifications
                    .push(Notification::warning(error.user_message()));
            }
            Task::none()
        }
    }
}

pub fn handle_image_fetched(
    app: &mut App,
    url: String,
    result: Result<Vec<u8>, Error>,
) -> Task<Message> {
    app.pending_images.remove(&url);

    match result {
        Ok(bytes) => {
            app.images.put(url, Handle::from_bytes(bytes));
        }
        Err(error) => {
            // Missing art falls back to the placeholder glyph; not worth a toast.
            eprintln!("image fetch failed for {url}: {error}");
        }
    }
    Task::none()
}

pub fn handle_login_completed(
    app: &mut App,
    result: Result<SessionUser, Error>,
) -> Task<Message> {
    match result {
        Ok(user) => {
            app.notifications
                .push(Notification::success(format!("Signed in as @{}", user.username)));
            app.session = Some(user);
            app.auth_dialog = None;
        }
        Err(error) => {
            if let Some(dialog) = app.auth_dialog.as_mut() {
                dialog.login_in_progress = false;
            }
            app.notifications
                .push(Notification::error(error.user_message()));
        }
    }
    Task::none()
}

pub fn handle_recovery_completed(app: &mut App, result: Result<(), Error>) -> Task<Message> {
    let Some(dialog) = app.auth_dialog.as_mut() else {
        return Task::none();
    };
    dialog.recovery.finish_submit();

    match result {
        Ok(()) => {
            dialog.recovery.reset();
            dialog.stage = auth_dialog::Stage::Login;
            app.notifications.push(Notification::success(
                "Password updated. You can sign in again.",
            ));
        }
        Err(error) => {
            app.notifications
                .push(Notification::error(error.user_message()));
        }
    }
    Task::none()
}

pub fn handle_mint_completed(app: &mut App, result: Result<Nft, Error>) -> Task<Message> {
    app.upload.finish_submit();

    match result {
        Ok(nft) => {
            app.upload.reset();
            app.notifications
                .push(Notification::success(format!("Minted \"{}\"", nft.title)));
            app.active_tab = Tab::Marketplace;
            // Pick up the new item without waiting for the next poll.
            fetch_snapshot(app)
        }
        Err(error) => {
            app.notifications
                .push(Notification::error(error.user_message()));
            Task::none()
        }
    }
}

pub fn handle_animation_tick(app: &mut App) -> Task<Message> {
    app.spinner_rotation += SPINNER_STEP;
    if app.spinner_rotation > std::f32::consts::TAU {
        app.spinner_rotation -= std::f32::consts::TAU;
    }
    app.notifications.tick();
    Task::none()
}
