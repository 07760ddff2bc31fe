// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::{Listing, Nft, SessionUser};
use crate::error::Error;
use crate::ui::auth_dialog;
use crate::ui::header;
use crate::ui::marketplace;
use crate::ui::notifications;
use crate::ui::upload;
use std::path::PathBuf;
use std::time::Instant;

/// One poll's worth of marketplace data, fetched as a unit.
pub type Snapshot = (Vec<Nft>, Vec<Listing>);

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Marketplace(marketplace::Message),
    Upload(upload::Message),
    AuthDialog(auth_dialog::Message),
    Notification(notifications::NotificationMessage),
    /// Kick off the next marketplace fetch.
    PollTick,
    /// Periodic tick for spinner rotation and toast auto-dismiss.
    AnimationTick(Instant),
    /// Result of a marketplace fetch. The generation stamp lets stale
    /// responses from superseded polls be dropped.
    SnapshotFetched {
        generation: u64,
        result: Result<Snapshot, Error>,
    },
    /// Raw card-art bytes arrived for one image URL.
    ImageFetched {
        url: String,
        result: Result<Vec<u8>, Error>,
    },
    LoginCompleted(Result<SessionUser, Error>),
    RecoveryCompleted(Result<(), Error>),
    MintCompleted(Result<Nft, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Backend base URL override. Takes precedence over the config file.
    pub api_url: Option<String>,
    /// Config file override, mainly for tests and portable installs.
    pub config_path: Option<PathBuf>,
}
