// SPDX-License-Identifier: MPL-2.0
//! Typed client for the prooforia backend HTTP API.
//!
//! Thin reqwest wrapper: issue the request, check the status, decode JSON.
//! Transport and status problems map into [`Error`] and are surfaced to the
//! user as toasts; there is no retry or backoff policy here. Polling
//! supersedes rather than cancels in-flight requests (last response wins).

use crate::domain::{Listing, Nft, SessionUser};
use crate::error::{Error, Result};
use serde::Serialize;

const USER_AGENT: &str = concat!("Prooforia/", env!("CARGO_PKG_VERSION"));

/// Body of `POST /api/auth/wallet-recovery`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryRequest {
    pub email: String,
    pub private_key: String,
    pub new_password: String,
}

/// Body of `POST /api/nfts`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintRequest {
    pub title: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Shared, cheaply clonable handle to the backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client against the given base URL (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Backend base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/nfts?category=<c>`. The category parameter is omitted
    /// entirely when filtering client-side only.
    pub async fn fetch_nfts(&self, category: Option<String>) -> Result<Vec<Nft>> {
        let mut request = self.client.get(format!("{}/api/nfts", self.base_url));
        if let Some(category) = category {
            request = request.query(&[("category", category)]);
        }

        let response = check_status(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// `GET /api/listings`.
    pub async fn fetch_listings(&self) -> Result<Vec<Listing>> {
        let response = self
            .client
            .get(format!("{}/api/listings", self.base_url))
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// `POST /api/auth/discord`. The backend brokers the OAuth exchange and
    /// answers with the session user.
    pub async fn login_discord(&self) -> Result<SessionUser> {
        let response = self
            .client
            .post(format!("{}/api/auth/discord", self.base_url))
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// `POST /api/auth/wallet-recovery`. Success is any "ok" HTTP status;
    /// the body is ignored.
    pub async fn recover_wallet(&self, request: RecoveryRequest) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/api/auth/wallet-recovery", self.base_url))
            .json(&request)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// `POST /api/nfts`. Mints a new NFT for the logged-in user.
    pub async fn mint_nft(&self, request: MintRequest) -> Result<Nft> {
        let response = self
            .client
            .post(format!("{}/api/nfts", self.base_url))
            .json(&request)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Fetches raw card-art bytes for an NFT image URL.
    pub async fn fetch_image(&self, url: String) -> Result<Vec<u8>> {
        let response = check_status(self.client.get(url).send().await?).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Maps a non-success response into [`Error::Api`], pulling the backend's
/// `message` field out of the body when one is present.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::Api {
        status: status.as_u16(),
        message: extract_api_message(&body),
    })
}

/// Pulls `{"message": "..."}` out of an error body, falling back to the raw
/// body when it is short and printable, otherwise to an empty string.
fn extract_api_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() && trimmed.len() <= 200 && !trimmed.starts_with('<') {
        trimmed.to_string()
    } else {
        String::new()
    }
}
