//! HTTP clients for the three risk oracles.
//!
//! One shared reqwest client, one base URL per oracle. Verdict bodies
//! are small JSON objects:
//!
//! ```text
//! GET {bundling}/{address}            -> { "bundled": bool }
//! GET {integrity}/{address}           -> { "status": "Good" | ... }
//! GET {activity}/{address}?volume24h= -> { "fake": bool }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::errors::OracleError;
use super::{ActivityOracle, BundlingOracle, IntegrityOracle, TrustStatus};

/// Status string the integrity oracle must return for admission.
const TRUSTED_STATUS: &str = "Good";

#[derive(Debug, Clone, Deserialize)]
struct BundledVerdict {
    bundled: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct StatusVerdict {
    status: String,
}

#[derive(Debug, Clone, Deserialize)]
struct FakeVerdict {
    fake: bool,
}

#[derive(Clone)]
pub struct HttpOracles {
    http: Client,
    bundling_url: String,
    integrity_url: String,
    activity_url: String,
}

impl HttpOracles {
    pub fn new(
        bundling_url: String,
        integrity_url: String,
        activity_url: String,
        timeout: Duration,
    ) -> Result<Self, OracleError> {
        let http = Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            bundling_url,
            integrity_url,
            activity_url,
        })
    }
}

#[async_trait]
impl BundlingOracle for HttpOracles {
    #[instrument(skip(self), level = "debug")]
    async fn is_bundled(&self, token_address: &str) -> Result<bool, OracleError> {
        let url = format!("{}/{}", self.bundling_url, token_address);

        let resp = self.http.get(&url).send().await?.error_for_status()?;
        let verdict: BundledVerdict = resp.json().await?;

        debug!(bundled = verdict.bundled, "bundling verdict fetched");
        Ok(verdict.bundled)
    }
}

#[async_trait]
impl IntegrityOracle for HttpOracles {
    #[instrument(skip(self), level = "debug")]
    async fn trust_status(&self, token_address: &str) -> Result<TrustStatus, OracleError> {
        let url = format!("{}/{}", self.integrity_url, token_address);

        let resp = self.http.get(&url).send().await?.error_for_status()?;
        let verdict: StatusVerdict = resp.json().await?;

        debug!(status = %verdict.status, "trust verdict fetched");

        if verdict.status == TRUSTED_STATUS {
            Ok(TrustStatus::Good)
        } else {
            Ok(TrustStatus::Flagged(verdict.status))
        }
    }
}

#[async_trait]
impl ActivityOracle for HttpOracles {
    #[instrument(skip(self), level = "debug")]
    async fn is_fake_volume(
        &self,
        token_address: &str,
        volume_24h_usd: f64,
    ) -> Result<bool, OracleError> {
        let url = format!("{}/{}", self.activity_url, token_address);

        let resp = self
            .http
            .get(&url)
            .query(&[("volume24h", volume_24h_usd)])
            .send()
            .await?
            .error_for_status()?;
        let verdict: FakeVerdict = resp.json().await?;

        debug!(fake = verdict.fake, "volume authenticity verdict fetched");
        Ok(verdict.fake)
    }
}
