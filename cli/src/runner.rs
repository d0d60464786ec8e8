//! The watch loop.
//!
//! Cycles fire on a fixed interval with `MissedTickBehavior::Skip` and
//! the cycle is awaited inline, so two cycles can never overlap — a slow
//! batch just skips ticks. Sink delivery happens after each cycle's core
//! logic, one attempt per payload, failures logged and dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval};
use tracing::{Instrument, info, warn};

use common::logger::{TraceId, cycle_span};
use engine::engine::{CycleEngine, CycleOutput};
use executor::types::{Notifier, TradeChannel};

pub struct Runner {
    engine: CycleEngine,
    notifier: Arc<dyn Notifier>,
    trader: Arc<dyn TradeChannel>,
}

impl Runner {
    pub fn new(
        engine: CycleEngine,
        notifier: Arc<dyn Notifier>,
        trader: Arc<dyn TradeChannel>,
    ) -> Self {
        Self {
            engine,
            notifier,
            trader,
        }
    }

    /// Run cycles forever on the given interval.
    pub async fn run(&mut self, poll_every: Duration) {
        let mut ticker = interval(poll_every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(every_ms = poll_every.as_millis() as u64, "watch loop started");

        loop {
            ticker.tick().await;
            self.run_once().await;
        }
    }

    /// One cycle plus dispatch, under its own trace span.
    pub async fn run_once(&mut self) {
        let trace_id = TraceId::default();
        let span = cycle_span(&trace_id);

        async {
            match self.engine.run_cycle().await {
                Ok(output) => self.dispatch(output).await,
                Err(e) => warn!(error = %e, "cycle aborted"),
            }
        }
        .instrument(span)
        .await;
    }

    async fn dispatch(&self, output: CycleOutput) {
        for text in &output.notifications {
            if let Err(e) = self.notifier.notify(text).await {
                warn!(error = %e, "notification dropped");
            }
        }

        for intent in &output.intents {
            if let Err(e) = self.trader.submit(intent).await {
                warn!(token = %intent.address, error = %e, "trade command dropped");
            }
        }
    }
}
