//! HTTP market feed.
//!
//! Polls a screener-style endpoint returning a JSON array of token rows
//! and maps each row into a `TokenSnapshot`. Fields the endpoint omits
//! default to `0` / `"UNKNOWN"` so one sparse row never poisons a batch.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::MarketFeed;
use super::errors::FeedError;
use crate::types::{Observation, TokenIdentity, TokenSnapshot};

fn default_symbol() -> String {
    "UNKNOWN".to_string()
}

/// Raw feed row. Everything except the address is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRow {
    pub token_address: String,

    #[serde(default = "default_symbol")]
    pub symbol: String,

    #[serde(default)]
    pub chain_id: String,

    #[serde(default)]
    pub price_usd: f64,

    #[serde(default)]
    pub liquidity_usd: f64,

    #[serde(default)]
    pub volume_24h_usd: f64,
}

impl TokenRow {
    pub fn into_snapshot(self, ts_ms: u64) -> TokenSnapshot {
        TokenSnapshot {
            identity: TokenIdentity::new(self.token_address, self.symbol, self.chain_id),
            observation: Observation {
                ts_ms,
                price_usd: self.price_usd,
                liquidity_usd: self.liquidity_usd,
                volume_24h_usd: self.volume_24h_usd,
            },
        }
    }
}

#[derive(Clone)]
pub struct HttpMarketFeed {
    http: Client,
    url: String,
}

impl HttpMarketFeed {
    pub fn new(url: String, timeout: Duration) -> Result<Self, FeedError> {
        let http = Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { http, url })
    }
}

#[async_trait]
impl MarketFeed for HttpMarketFeed {
    #[instrument(skip(self), level = "debug")]
    async fn fetch_snapshots(&self) -> Result<Vec<TokenSnapshot>, FeedError> {
        let resp = self.http.get(&self.url).send().await?.error_for_status()?;

        let rows: Vec<TokenRow> = resp.json().await?;

        let now_ms = chrono::Utc::now().timestamp_millis() as u64;
        let snapshots: Vec<TokenSnapshot> = rows
            .into_iter()
            .map(|row| row.into_snapshot(now_ms))
            .collect();

        debug!(count = snapshots.len(), "feed batch fetched");

        Ok(snapshots)
    }
}
