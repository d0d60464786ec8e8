//! Price-pattern signals computed from a token's observation window.
//!
//! Each signal looks only at the two most recent observations
//! (`prev`, `last`). Both signals are evaluated independently; a window
//! with fewer than two observations, or a non-positive previous price,
//! yields no signal at all.

pub mod pump;
pub mod rug;

use crate::types::TokenEvent;
use crate::window::ObservationWindow;

pub const DEFAULT_PRICE_DROP_THRESHOLD: f64 = 0.90;
pub const DEFAULT_PRICE_PUMP_THRESHOLD: f64 = 1.50;

/// Thresholds for the rug / pump detectors, expressed as ratios.
#[derive(Debug, Clone, Copy)]
pub struct SignalConfig {
    /// Fractional drop (prev - last) / prev at which a rug is flagged.
    pub price_drop_threshold: f64,
    /// Multiple last / prev at which a pump is flagged.
    pub price_pump_threshold: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            price_drop_threshold: DEFAULT_PRICE_DROP_THRESHOLD,
            price_pump_threshold: DEFAULT_PRICE_PUMP_THRESHOLD,
        }
    }
}

/// Evaluate both detectors against the two most recent observations.
///
/// A previous price of zero would make both ratios undefined, so that
/// pair is skipped entirely.
pub fn detect(window: &ObservationWindow, cfg: &SignalConfig) -> Vec<TokenEvent> {
    let (Some(prev), Some(last)) = (window.previous(), window.latest()) else {
        return Vec::new();
    };

    if prev.price_usd <= 0.0 {
        return Vec::new();
    }

    let mut events = Vec::new();

    if rug::is_rug(prev.price_usd, last.price_usd, cfg.price_drop_threshold) {
        events.push(TokenEvent::Rugged);
    }

    if pump::is_pump(prev.price_usd, last.price_usd, cfg.price_pump_threshold) {
        events.push(TokenEvent::Pumped);
    }

    events
}
