//! The cycle orchestrator.
//!
//! One cycle: fetch a snapshot batch, then per snapshot run
//! admit -> record -> detect -> decide, collecting notifications and
//! trade intents along the way. Side effects are *not* dispatched here;
//! the caller receives a [`CycleOutput`] and forwards it to the sinks
//! after the core logic has finished.
//!
//! A failure on one snapshot is logged and skipped; the rest of the
//! batch continues. The engine owns the store and blacklist outright —
//! cycles never overlap (the watch loop awaits each cycle inline), so
//! no locking is involved.

use std::sync::Arc;

use anyhow::{Context, bail};
use tracing::{debug, info, warn};

use market::feed::MarketFeed;
use market::signal::{self, SignalConfig, pump, rug};
use market::types::{TokenEvent, TokenSnapshot};
use screener::blacklist::BlacklistSets;
use screener::chain::RiskFilterChain;
use watchlist::store::{WatchSummary, WatchlistStore};

use crate::decision;
use crate::types::TradeIntent;

/// Knobs owned by the engine itself; screening and window sizing live
/// with their components.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub signal: SignalConfig,
    pub buy_notional_usd: f64,
}

/// Everything one cycle produced, ready for dispatch.
#[derive(Debug, Default)]
pub struct CycleOutput {
    pub notifications: Vec<String>,
    pub intents: Vec<TradeIntent>,
    pub summary: WatchSummary,
    /// Snapshots seen / admitted this cycle, for the cycle log line.
    pub seen: usize,
    pub admitted: usize,
}

pub struct CycleEngine {
    feed: Arc<dyn MarketFeed>,
    chain: RiskFilterChain,
    store: WatchlistStore,
    blacklist: BlacklistSets,
    cfg: EngineConfig,
}

impl CycleEngine {
    pub fn new(
        feed: Arc<dyn MarketFeed>,
        chain: RiskFilterChain,
        store: WatchlistStore,
        blacklist: BlacklistSets,
        cfg: EngineConfig,
    ) -> Self {
        Self {
            feed,
            chain,
            store,
            blacklist,
            cfg,
        }
    }

    /// Run one full poll cycle.
    ///
    /// Returns an error only when the batch fetch itself fails; that
    /// aborts this cycle and nothing else.
    pub async fn run_cycle(&mut self) -> anyhow::Result<CycleOutput> {
        let batch = self
            .feed
            .fetch_snapshots()
            .await
            .context("market feed fetch failed")?;

        let mut out = CycleOutput {
            seen: batch.len(),
            ..Default::default()
        };

        for snapshot in batch {
            let address = snapshot.identity.address.clone();
            if let Err(e) = self.process_snapshot(snapshot, &mut out).await {
                warn!(token = %address, error = %e, "snapshot skipped");
            }
        }

        out.summary = self.store.summary();

        info!(
            seen = out.seen,
            admitted = out.admitted,
            intents = out.intents.len(),
            summary = %out.summary,
            "cycle complete"
        );

        Ok(out)
    }

    async fn process_snapshot(
        &mut self,
        snapshot: TokenSnapshot,
        out: &mut CycleOutput,
    ) -> anyhow::Result<()> {
        if snapshot.identity.address.is_empty() {
            bail!("snapshot without token address");
        }

        let verdict = self.chain.admit(&snapshot, &mut self.blacklist).await;
        if !verdict.is_allowed() {
            debug!(token = %snapshot.identity.address, ?verdict, "snapshot denied");
            return Ok(());
        }
        out.admitted += 1;

        let record = self.store.record(&snapshot.identity, snapshot.observation);

        // Pattern detection on the updated window; only first-time
        // events produce a notification.
        for event in signal::detect(&record.window, &self.cfg.signal) {
            if record.note_event(event) {
                out.notifications.push(describe_event(event, record));
            }
        }

        // Trade decision needs two observations.
        let (Some(prev), Some(last)) = (record.window.previous(), record.window.latest()) else {
            return Ok(());
        };

        if let Some((intent, next_state)) = decision::next_intent(
            record.trade_state,
            prev.price_usd,
            last.price_usd,
            &record.identity,
            self.cfg.buy_notional_usd,
        ) {
            debug!(
                token = %record.identity.address,
                from = %record.trade_state,
                to = %next_state,
                action = ?intent.action,
                "trade transition"
            );
            record.trade_state = next_state;
            out.intents.push(intent);
        }

        Ok(())
    }

    pub fn store(&self) -> &WatchlistStore {
        &self.store
    }

    pub fn blacklist(&self) -> &BlacklistSets {
        &self.blacklist
    }
}

fn describe_event(event: TokenEvent, record: &watchlist::model::TokenRecord) -> String {
    let symbol = &record.identity.symbol;
    let address = &record.identity.address;

    let (Some(prev), Some(last)) = (record.window.previous(), record.window.latest()) else {
        return format!("{event}: {symbol} ({address})");
    };

    match event {
        TokenEvent::Rugged => {
            let pct = rug::drop_ratio(prev.price_usd, last.price_usd) * 100.0;
            format!("🚨 RUG: {symbol} ({address}) price collapsed {pct:.1}% in one tick")
        }
        TokenEvent::Pumped => {
            let mult = pump::pump_ratio(prev.price_usd, last.price_usd);
            format!("🚀 PUMP: {symbol} ({address}) price up {mult:.2}x in one tick")
        }
    }
}
