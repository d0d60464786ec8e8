use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use market::types::{Observation, TokenEvent, TokenIdentity};
use market::window::ObservationWindow;

/// Lifecycle of the naive single-entry/single-exit trade policy.
///
/// `Sold` is terminal: once a token has been sold it is never traded
/// again, whatever the price does afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TradeState {
    /// No position has ever been opened.
    #[default]
    Flat,
    Bought,
    Sold,
}

impl fmt::Display for TradeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TradeState::Flat => "Flat",
            TradeState::Bought => "Bought",
            TradeState::Sold => "Sold",
        };
        f.write_str(s)
    }
}

impl FromStr for TradeState {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Flat" => Ok(TradeState::Flat),
            "Bought" => Ok(TradeState::Bought),
            "Sold" => Ok(TradeState::Sold),
            other => Err(anyhow::anyhow!("Invalid TradeState value: {}", other)),
        }
    }
}

/// Everything the pipeline remembers about one token.
///
/// Owned exclusively by the `WatchlistStore`; created on the first
/// admitted snapshot and kept for the life of the process.
#[derive(Debug, Clone)]
pub struct TokenRecord {
    pub identity: TokenIdentity,
    pub window: ObservationWindow,
    pub events: HashSet<TokenEvent>,
    pub trade_state: TradeState,
}

impl TokenRecord {
    pub fn new(identity: TokenIdentity, window_size: usize) -> Self {
        Self {
            identity,
            window: ObservationWindow::new(window_size),
            events: HashSet::new(),
            trade_state: TradeState::Flat,
        }
    }

    pub fn observe(&mut self, obs: Observation) {
        self.window.push(obs);
    }

    /// Record an event on the token. Returns true only the first time a
    /// given event is seen, so re-triggering stays idempotent.
    pub fn note_event(&mut self, event: TokenEvent) -> bool {
        self.events.insert(event)
    }

    pub fn has_event(&self, event: TokenEvent) -> bool {
        self.events.contains(&event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TokenRecord {
        TokenRecord::new(TokenIdentity::new("0xabc", "PEPE", "solana"), 5)
    }

    #[test]
    fn note_event_is_idempotent() {
        let mut r = record();
        assert!(r.note_event(TokenEvent::Rugged));
        assert!(!r.note_event(TokenEvent::Rugged));
        assert_eq!(r.events.len(), 1);
    }

    #[test]
    fn trade_state_round_trips_through_strings() {
        for s in [TradeState::Flat, TradeState::Bought, TradeState::Sold] {
            assert_eq!(s.to_string().parse::<TradeState>().unwrap(), s);
        }
        assert!("Held".parse::<TradeState>().is_err());
    }
}
