//! Async HTTP client for the remote user directory.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use roster_core::record::UserRecord;

/// Connection settings for the directory endpoint.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  /// Full URL of the resource returning the JSON array of user records.
  pub endpoint: String,
}

/// Async HTTP client for the user-directory endpoint.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  /// `GET <endpoint>` — the one request the application ever makes.
  ///
  /// No query parameters or headers are sent; all filtering, sorting, and
  /// pagination happen client-side on the full fetched set.
  pub async fn list_users(&self) -> Result<Vec<UserRecord>> {
    let resp = self
      .client
      .get(&self.config.endpoint)
      .send()
      .await
      .with_context(|| format!("GET {} failed", self.config.endpoint))?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET {} → {}", self.config.endpoint, resp.status()));
    }
    resp.json().await.context("deserialising user records")
  }
}
