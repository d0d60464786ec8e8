//! End-to-end cycle tests: scripted feed + scripted oracles in, collected
//! notifications / intents / summaries out. No network anywhere.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use engine::engine::{CycleEngine, EngineConfig};
use engine::types::{TradeAction, TradeSize};
use market::feed::MarketFeed;
use market::feed::errors::FeedError;
use market::signal::SignalConfig;
use market::types::{Observation, TokenIdentity, TokenSnapshot};
use screener::blacklist::{BlacklistSets, DeveloperMap};
use screener::chain::RiskFilterChain;
use screener::oracles::errors::OracleError;
use screener::oracles::{ActivityOracle, BundlingOracle, IntegrityOracle, TrustStatus};
use watchlist::store::WatchlistStore;

/// Feed that replays pre-scripted batches, then empty ones.
#[derive(Default)]
struct ScriptedFeed {
    batches: Mutex<VecDeque<Vec<TokenSnapshot>>>,
}

impl ScriptedFeed {
    fn new(batches: Vec<Vec<TokenSnapshot>>) -> Self {
        Self {
            batches: Mutex::new(batches.into()),
        }
    }
}

#[async_trait]
impl MarketFeed for ScriptedFeed {
    async fn fetch_snapshots(&self) -> Result<Vec<TokenSnapshot>, FeedError> {
        let mut guard = self.batches.lock().unwrap();
        Ok(guard.pop_front().unwrap_or_default())
    }
}

/// Oracles that wave everything through.
struct CleanOracles;

#[async_trait]
impl BundlingOracle for CleanOracles {
    async fn is_bundled(&self, _token: &str) -> Result<bool, OracleError> {
        Ok(false)
    }
}

#[async_trait]
impl IntegrityOracle for CleanOracles {
    async fn trust_status(&self, _token: &str) -> Result<TrustStatus, OracleError> {
        Ok(TrustStatus::Good)
    }
}

#[async_trait]
impl ActivityOracle for CleanOracles {
    async fn is_fake_volume(&self, _token: &str, _vol: f64) -> Result<bool, OracleError> {
        Ok(false)
    }
}

fn snap(addr: &str, price: f64) -> TokenSnapshot {
    TokenSnapshot {
        identity: TokenIdentity::new(addr, "TKN", "solana"),
        observation: Observation {
            ts_ms: 0,
            price_usd: price,
            liquidity_usd: 10_000.0,
            volume_24h_usd: 5_000.0,
        },
    }
}

/// One-token price series turned into one batch per cycle.
fn series(addr: &str, prices: &[f64]) -> Vec<Vec<TokenSnapshot>> {
    prices.iter().map(|p| vec![snap(addr, *p)]).collect()
}

fn engine_with(feed: ScriptedFeed, blacklist: BlacklistSets) -> CycleEngine {
    let oracles = Arc::new(CleanOracles);
    let chain = RiskFilterChain::new(
        oracles.clone(),
        oracles.clone(),
        oracles,
        DeveloperMap::default(),
        Default::default(),
    );

    CycleEngine::new(
        Arc::new(feed),
        chain,
        WatchlistStore::new(5),
        blacklist,
        EngineConfig {
            signal: SignalConfig::default(),
            buy_notional_usd: 50.0,
        },
    )
}

#[tokio::test]
async fn small_drop_emits_no_event_and_no_intent() {
    // 10 -> 9.5: below the drop threshold, and a falling price with no
    // position matches no transition rule. Exactly nothing happens.
    let feed = ScriptedFeed::new(series("0xaaa", &[10.0, 9.5]));
    let mut engine = engine_with(feed, BlacklistSets::default());

    let first = engine.run_cycle().await.unwrap();
    assert!(first.notifications.is_empty());
    assert!(first.intents.is_empty());

    let second = engine.run_cycle().await.unwrap();
    assert!(second.notifications.is_empty());
    assert!(second.intents.is_empty());
    assert_eq!(second.summary.tracked, 1);
    assert_eq!(second.summary.rugged, 0);
    assert_eq!(second.summary.pumped, 0);
}

#[tokio::test]
async fn uptrend_buys_downtrend_sells_then_token_is_done() {
    let feed = ScriptedFeed::new(series("0xaaa", &[1.0, 2.0, 1.0, 2.0]));
    let mut engine = engine_with(feed, BlacklistSets::default());

    let c1 = engine.run_cycle().await.unwrap();
    assert!(c1.intents.is_empty());

    let c2 = engine.run_cycle().await.unwrap();
    assert_eq!(c2.intents.len(), 1);
    assert_eq!(c2.intents[0].action, TradeAction::Buy);
    assert_eq!(c2.intents[0].size, TradeSize::Usd(50.0));
    assert_eq!(c2.intents[0].address, "0xaaa");

    let c3 = engine.run_cycle().await.unwrap();
    assert_eq!(c3.intents.len(), 1);
    assert_eq!(c3.intents[0].action, TradeAction::Sell);
    assert_eq!(c3.intents[0].size, TradeSize::All);

    // terminal: a new uptrend changes nothing
    let c4 = engine.run_cycle().await.unwrap();
    assert!(c4.intents.is_empty());
}

#[tokio::test]
async fn rug_is_notified_exactly_once() {
    // Second collapse (1 -> 0.05, a 95% drop) re-triggers detection but
    // the event set already contains Rugged.
    let feed = ScriptedFeed::new(series("0xaaa", &[10.0, 1.0, 1.0, 0.05]));
    let mut engine = engine_with(feed, BlacklistSets::default());

    engine.run_cycle().await.unwrap();

    let c2 = engine.run_cycle().await.unwrap();
    assert_eq!(c2.notifications.len(), 1);
    assert!(c2.notifications[0].contains("RUG"));
    assert_eq!(c2.summary.rugged, 1);

    let c3 = engine.run_cycle().await.unwrap();
    assert!(c3.notifications.is_empty());

    let c4 = engine.run_cycle().await.unwrap();
    assert!(c4.notifications.is_empty());
    assert_eq!(c4.summary.rugged, 1);
}

#[tokio::test]
async fn malformed_snapshot_skips_only_that_row() {
    let broken = TokenSnapshot {
        identity: TokenIdentity::new("", "GHOST", "solana"),
        observation: Observation {
            ts_ms: 0,
            price_usd: 1.0,
            liquidity_usd: 10_000.0,
            volume_24h_usd: 5_000.0,
        },
    };

    let feed = ScriptedFeed::new(vec![vec![broken, snap("0xaaa", 1.0)]]);
    let mut engine = engine_with(feed, BlacklistSets::default());

    let out = engine.run_cycle().await.unwrap();
    assert_eq!(out.seen, 2);
    assert_eq!(out.admitted, 1);
    assert_eq!(out.summary.tracked, 1);
    assert!(engine.store().get("0xaaa").is_some());
}

#[tokio::test]
async fn denied_token_never_reaches_the_store() {
    let feed = ScriptedFeed::new(series("0xbad", &[1.0, 2.0]));
    let blacklist = BlacklistSets::seeded(vec!["0xbad".to_string()], vec![]);
    let mut engine = engine_with(feed, blacklist);

    engine.run_cycle().await.unwrap();
    let out = engine.run_cycle().await.unwrap();

    assert_eq!(out.admitted, 0);
    assert_eq!(out.summary.tracked, 0);
    assert!(out.intents.is_empty());
}

#[tokio::test]
async fn summary_counts_distinct_tokens_per_event() {
    let batches = vec![
        vec![snap("0xrug", 10.0), snap("0xpump", 1.0), snap("0xquiet", 5.0)],
        vec![snap("0xrug", 0.5), snap("0xpump", 1.6), snap("0xquiet", 5.0)],
    ];
    let feed = ScriptedFeed::new(batches);
    let mut engine = engine_with(feed, BlacklistSets::default());

    engine.run_cycle().await.unwrap();
    let out = engine.run_cycle().await.unwrap();

    assert_eq!(out.summary.tracked, 3);
    assert_eq!(out.summary.rugged, 1);
    assert_eq!(out.summary.pumped, 1);

    // the pumped token also rode the uptrend rule
    assert_eq!(out.intents.len(), 1);
    assert_eq!(out.intents[0].action, TradeAction::Buy);
    assert_eq!(out.intents[0].address, "0xpump");
}
