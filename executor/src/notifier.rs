//! Notification adapters.
//!
//! `TelegramNotifier` posts plain-text messages through the Bot API.
//! When no bot token is configured the wiring falls back to
//! `NoopNotifier`, which logs the degradation once at construction and
//! then swallows every message.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::types::{ExecutionError, Notifier};

pub struct TelegramNotifier {
    http: Client,
    url: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: &str, chat_id: String, timeout: Duration) -> Result<Self, ExecutionError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            url: format!("https://api.telegram.org/bot{}/sendMessage", bot_token),
            chat_id,
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<(), ExecutionError> {
        self.http
            .post(&self.url)
            .json(&serde_json::json!({
                "chat_id": self.chat_id,
                "text": text,
            }))
            .send()
            .await?
            .error_for_status()?;

        debug!("notification delivered");
        Ok(())
    }
}

/// Fallback when notifications are unconfigured.
pub struct NoopNotifier;

impl NoopNotifier {
    pub fn new() -> Self {
        info!("no notification channel configured, alerts will be dropped");
        Self
    }
}

impl Default for NoopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify(&self, _text: &str) -> Result<(), ExecutionError> {
        Ok(())
    }
}
