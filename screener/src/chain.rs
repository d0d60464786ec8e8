//! The ordered admission cascade.
//!
//! Checks run strictly in order; the first failing check short-circuits
//! the rest. Only the bundling check mutates shared state (it bans the
//! token and its mapped developer). Error policy per check:
//!
//! - bundling lookup failure   -> treated as not bundled (fail-open)
//! - integrity lookup failure  -> deny (fail-closed)
//! - activity lookup failure   -> treated as not fake (fail-open)
//!
//! The fail-open choices keep the pipeline alive through oracle outages;
//! the fail-closed integrity check is the safety backstop behind them.

use std::sync::Arc;

use tracing::{debug, warn};

use market::types::TokenSnapshot;

use crate::blacklist::{BlacklistSets, DeveloperMap};
use crate::oracles::{ActivityOracle, BundlingOracle, IntegrityOracle};
use crate::types::{Admission, ScreenerConfig};

pub struct RiskFilterChain {
    bundling: Arc<dyn BundlingOracle>,
    integrity: Arc<dyn IntegrityOracle>,
    activity: Arc<dyn ActivityOracle>,
    developers: DeveloperMap,
    cfg: ScreenerConfig,
}

impl RiskFilterChain {
    pub fn new(
        bundling: Arc<dyn BundlingOracle>,
        integrity: Arc<dyn IntegrityOracle>,
        activity: Arc<dyn ActivityOracle>,
        developers: DeveloperMap,
        cfg: ScreenerConfig,
    ) -> Self {
        Self {
            bundling,
            integrity,
            activity,
            developers,
            cfg,
        }
    }

    /// Run the full cascade for one snapshot.
    pub async fn admit(
        &self,
        snapshot: &TokenSnapshot,
        blacklist: &mut BlacklistSets,
    ) -> Admission {
        let address = snapshot.identity.address.as_str();

        // 1. Blacklist + chain allow-list (pure reads)
        if blacklist.is_token_banned(address) {
            return Admission::TokenBlacklisted;
        }

        if let Some(dev) = self.developers.developer_of(address) {
            if blacklist.is_developer_banned(dev) {
                return Admission::DeveloperBlacklisted;
            }
        }

        let chain = snapshot.identity.chain.to_lowercase();
        if !chain.is_empty()
            && !self.cfg.allowed_chains.is_empty()
            && !self.cfg.allowed_chains.iter().any(|c| *c == chain)
        {
            return Admission::ChainNotAllowed;
        }

        // 2. Bundling (the only check with a side effect)
        match self.bundling.is_bundled(address).await {
            Ok(true) => {
                blacklist.ban_token(address);
                if let Some(dev) = self.developers.developer_of(address) {
                    blacklist.ban_developer(dev);
                }
                debug!(token = address, "bundled supply, token and developer banned");
                return Admission::Bundled;
            }
            Ok(false) => {}
            Err(e) => {
                warn!(token = address, error = %e, "bundling oracle unavailable, assuming not bundled");
            }
        }

        // 3. Integrity (fail-closed)
        match self.integrity.trust_status(address).await {
            Ok(status) if status.is_good() => {}
            Ok(status) => {
                debug!(token = address, ?status, "trust oracle rejected token");
                return Admission::Untrusted;
            }
            Err(e) => {
                warn!(token = address, error = %e, "integrity oracle unavailable, denying");
                return Admission::Untrusted;
            }
        }

        // 4. Fake activity (fail-open)
        match self
            .activity
            .is_fake_volume(address, snapshot.observation.volume_24h_usd)
            .await
        {
            Ok(true) => return Admission::FakeVolume,
            Ok(false) => {}
            Err(e) => {
                warn!(token = address, error = %e, "activity oracle unavailable, assuming genuine volume");
            }
        }

        // 5. Liquidity / volume thresholds
        if snapshot.observation.liquidity_usd < self.cfg.min_liquidity_usd {
            return Admission::BelowMinLiquidity;
        }

        if snapshot.observation.volume_24h_usd < self.cfg.min_volume_usd {
            return Admission::BelowMinVolume;
        }

        Admission::Allowed
    }
}
