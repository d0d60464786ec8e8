//! Environment-based configuration.
//!
//! Every option is enumerated, defaulted explicitly, and validated at
//! load time. Missing *required* configuration (the feed and oracle
//! URLs) is the only condition that aborts the process, and only at
//! startup.

use std::time::Duration;

use market::signal::{DEFAULT_PRICE_DROP_THRESHOLD, DEFAULT_PRICE_PUMP_THRESHOLD, SignalConfig};
use market::window::DEFAULT_WINDOW_SIZE;
use screener::types::ScreenerConfig;

#[derive(Clone, Debug)]
pub struct AppConfig {
    // =========================
    // Cycle timing
    // =========================
    /// Delay between poll cycles. A cycle that overruns the interval
    /// makes the loop skip ticks rather than overlap cycles.
    pub poll_interval_ms: u64,

    /// Timeout applied to every outbound HTTP call (feed, oracles,
    /// notifier, trade channel).
    pub http_timeout_ms: u64,

    // =========================
    // Pipeline knobs
    // =========================
    /// Observations retained per token.
    pub window_size: usize,

    /// Rug / pump detection thresholds.
    pub signal: SignalConfig,

    /// Liquidity / volume floors and the chain allow-list.
    pub screener: ScreenerConfig,

    /// USD notional attached to buy intents.
    pub buy_notional_usd: f64,

    // =========================
    // Seed lists
    // =========================
    pub blacklisted_tokens: Vec<String>,
    pub blacklisted_developers: Vec<String>,
    /// `token:developer` pairs for the developer cross-reference.
    pub developer_map: Vec<(String, String)>,

    // =========================
    // Endpoints
    // =========================
    /// Required: market feed URL.
    pub feed_url: String,
    /// Required: oracle base URLs. An unreachable oracle degrades per its
    /// fail policy, but an unconfigured one is a startup error.
    pub bundling_url: String,
    pub integrity_url: String,
    pub activity_url: String,
    /// Empty means watch-only (no trade channel).
    pub trade_url: String,
    /// Empty means no notifications.
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Comma-separated list, trimmed, empties dropped.
fn env_list(key: &str) -> Vec<String> {
    split_list(&env_or(key, ""))
}

pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// `token:developer` pairs; entries without a colon are dropped.
pub(crate) fn split_pairs(raw: &str) -> Vec<(String, String)> {
    split_list(raw)
        .into_iter()
        .filter_map(|entry| {
            let (token, dev) = entry.split_once(':')?;
            if token.is_empty() || dev.is_empty() {
                return None;
            }
            Some((token.to_string(), dev.to_string()))
        })
        .collect()
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let cfg = Self {
            poll_interval_ms: env_parse("POLL_INTERVAL_MS", 3_000),
            http_timeout_ms: env_parse("HTTP_TIMEOUT_MS", 5_000),

            window_size: env_parse("WINDOW_SIZE", DEFAULT_WINDOW_SIZE),
            signal: SignalConfig {
                price_drop_threshold: env_parse(
                    "PRICE_DROP_THRESHOLD",
                    DEFAULT_PRICE_DROP_THRESHOLD,
                ),
                price_pump_threshold: env_parse(
                    "PRICE_PUMP_THRESHOLD",
                    DEFAULT_PRICE_PUMP_THRESHOLD,
                ),
            },
            screener: ScreenerConfig {
                min_liquidity_usd: env_parse("MIN_LIQUIDITY_USD", 0.0),
                min_volume_usd: env_parse("MIN_VOLUME_USD", 0.0),
                allowed_chains: env_list("ALLOWED_CHAINS"),
            },
            buy_notional_usd: env_parse("BUY_NOTIONAL_USD", 50.0),

            blacklisted_tokens: env_list("BLACKLISTED_TOKENS"),
            blacklisted_developers: env_list("BLACKLISTED_DEVELOPERS"),
            developer_map: split_pairs(&env_or("DEVELOPER_MAP", "")),

            feed_url: env_or("FEED_URL", ""),
            bundling_url: env_or("BUNDLING_ORACLE_URL", ""),
            integrity_url: env_or("INTEGRITY_ORACLE_URL", ""),
            activity_url: env_or("ACTIVITY_ORACLE_URL", ""),
            trade_url: env_or("TRADE_URL", ""),
            telegram_bot_token: env_or("TELEGRAM_BOT_TOKEN", ""),
            telegram_chat_id: env_or("TELEGRAM_CHAT_ID", ""),
        };

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_millis(self.http_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub(crate) fn validate(&self) -> anyhow::Result<()> {
        if self.feed_url.is_empty() {
            anyhow::bail!("FEED_URL is required");
        }
        // The oracles are required collaborators: with an empty base URL
        // every integrity lookup fails and the fail-closed policy would
        // silently deny every token forever.
        if self.bundling_url.is_empty() {
            anyhow::bail!("BUNDLING_ORACLE_URL is required");
        }
        if self.integrity_url.is_empty() {
            anyhow::bail!("INTEGRITY_ORACLE_URL is required");
        }
        if self.activity_url.is_empty() {
            anyhow::bail!("ACTIVITY_ORACLE_URL is required");
        }
        if self.window_size < 2 {
            anyhow::bail!("WINDOW_SIZE must be at least 2");
        }
        if self.signal.price_drop_threshold <= 0.0 || self.signal.price_drop_threshold > 1.0 {
            anyhow::bail!("PRICE_DROP_THRESHOLD must be in (0, 1]");
        }
        if self.signal.price_pump_threshold <= 1.0 {
            anyhow::bail!("PRICE_PUMP_THRESHOLD must be greater than 1");
        }
        if self.poll_interval_ms == 0 {
            anyhow::bail!("POLL_INTERVAL_MS must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_cfg() -> AppConfig {
        AppConfig {
            poll_interval_ms: 3_000,
            http_timeout_ms: 5_000,
            window_size: 5,
            signal: SignalConfig::default(),
            screener: ScreenerConfig::default(),
            buy_notional_usd: 50.0,
            blacklisted_tokens: vec![],
            blacklisted_developers: vec![],
            developer_map: vec![],
            feed_url: "http://feed.local/tokens".into(),
            bundling_url: "http://oracle.local/bundled".into(),
            integrity_url: "http://oracle.local/trust".into(),
            activity_url: "http://oracle.local/volume".into(),
            trade_url: String::new(),
            telegram_bot_token: String::new(),
            telegram_chat_id: String::new(),
        }
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(valid_cfg().validate().is_ok());
    }

    #[test]
    fn every_oracle_url_is_required() {
        let strips: [fn(&mut AppConfig); 3] = [
            |c| c.bundling_url.clear(),
            |c| c.integrity_url.clear(),
            |c| c.activity_url.clear(),
        ];

        for strip in strips {
            let mut cfg = valid_cfg();
            strip(&mut cfg);
            assert!(cfg.validate().is_err());
        }
    }

    #[test]
    fn feed_url_is_required() {
        let mut cfg = valid_cfg();
        cfg.feed_url.clear();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        // also guards the CLI override path, which re-validates after
        // merging the flag
        let mut cfg = valid_cfg();
        cfg.poll_interval_ms = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn split_list_trims_and_lowercases() {
        assert_eq!(
            split_list(" Solana, base ,,ETH "),
            vec!["solana", "base", "eth"]
        );
        assert!(split_list("").is_empty());
    }

    #[test]
    fn split_pairs_keeps_well_formed_entries() {
        assert_eq!(
            split_pairs("0xTok:0xDev, broken, :nope, 0xA:0xB"),
            vec![
                ("0xtok".to_string(), "0xdev".to_string()),
                ("0xa".to_string(), "0xb".to_string()),
            ]
        );
    }
}
