pub mod errors;
pub mod http;

use async_trait::async_trait;

use errors::OracleError;

/// Verdict of the trust-scoring oracle. Only the exact positive status
/// admits; everything else is carried for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrustStatus {
    Good,
    Flagged(String),
}

impl TrustStatus {
    pub fn is_good(&self) -> bool {
        matches!(self, TrustStatus::Good)
    }
}

/// Supply-bundling oracle: is most of the supply held by a few
/// controlling wallets?
#[async_trait]
pub trait BundlingOracle: Send + Sync {
    async fn is_bundled(&self, token_address: &str) -> Result<bool, OracleError>;
}

/// Trust-scoring oracle for general token integrity.
#[async_trait]
pub trait IntegrityOracle: Send + Sync {
    async fn trust_status(&self, token_address: &str) -> Result<TrustStatus, OracleError>;
}

/// Volume-authenticity oracle: does the reported 24h volume look
/// manufactured?
#[async_trait]
pub trait ActivityOracle: Send + Sync {
    async fn is_fake_volume(
        &self,
        token_address: &str,
        volume_24h_usd: f64,
    ) -> Result<bool, OracleError>;
}
