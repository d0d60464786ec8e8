//! Common types and small abstraction traits for the output sinks.

use async_trait::async_trait;
use thiserror::Error;

use engine::types::TradeIntent;

/// Errors raised by the notification / execution adapters.
///
/// Delivery failures are logged by the dispatch loop and dropped; no
/// sink error ever aborts a cycle and nothing is retried.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("sink rejected payload: {0}")]
    Rejected(String),
}

/// Abstraction over user-facing notifications (Telegram, CLI, etc.).
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<(), ExecutionError>;
}

/// Abstraction over the trade-execution channel.
#[async_trait]
pub trait TradeChannel: Send + Sync {
    async fn submit(&self, intent: &TradeIntent) -> Result<(), ExecutionError>;
}
