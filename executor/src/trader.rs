//! Trade-execution adapters.
//!
//! `HttpTradeChannel` POSTs the serialized intent to the execution
//! endpoint. `NoopTradeChannel` stands in when no endpoint is
//! configured, so the pipeline can run in watch-only mode.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use engine::types::TradeIntent;

use crate::types::{ExecutionError, TradeChannel};

pub struct HttpTradeChannel {
    http: Client,
    url: String,
}

impl HttpTradeChannel {
    pub fn new(url: String, timeout: Duration) -> Result<Self, ExecutionError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self { http, url })
    }
}

#[async_trait]
impl TradeChannel for HttpTradeChannel {
    async fn submit(&self, intent: &TradeIntent) -> Result<(), ExecutionError> {
        self.http
            .post(&self.url)
            .json(intent)
            .send()
            .await?
            .error_for_status()?;

        debug!(action = ?intent.action, token = %intent.address, "trade command submitted");
        Ok(())
    }
}

/// Watch-only fallback: intents are acknowledged and dropped.
pub struct NoopTradeChannel;

impl NoopTradeChannel {
    pub fn new() -> Self {
        info!("no trade endpoint configured, running watch-only");
        Self
    }
}

impl Default for NoopTradeChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TradeChannel for NoopTradeChannel {
    async fn submit(&self, intent: &TradeIntent) -> Result<(), ExecutionError> {
        debug!(action = ?intent.action, token = %intent.address, "watch-only, intent dropped");
        Ok(())
    }
}
