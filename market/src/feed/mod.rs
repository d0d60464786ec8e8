pub mod errors;
pub mod http;

use async_trait::async_trait;

use crate::types::TokenSnapshot;
use errors::FeedError;

/// Capability seam for the market-data collaborator: a periodic pull
/// returning one snapshot per token. Implementations own transport and
/// field-default concerns; the pipeline only sees `TokenSnapshot`s.
#[async_trait]
pub trait MarketFeed: Send + Sync {
    async fn fetch_snapshots(&self) -> Result<Vec<TokenSnapshot>, FeedError>;
}
