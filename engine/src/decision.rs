//! Per-token trade transition rule.
//
//  This module is deliberately pure: no async, no IO.

use market::types::TokenIdentity;
use watchlist::model::TradeState;

use crate::types::{TradeAction, TradeIntent, TradeSize};

/// Evaluate the transition table for one token, once per cycle.
///
/// With `trend = last_price - prev_price`:
/// - rising price, no position  -> buy the configured notional, `Bought`
/// - falling price, `Bought`    -> sell everything, `Sold`
/// - every other combination (including a flat trend and the terminal
///   `Sold` state) emits nothing and keeps the state.
///
/// `Sold` never re-arms. That single-entry/single-exit asymmetry is the
/// observed behavior of the strategy and is kept as-is pending product
/// sign-off on a re-entrant policy.
pub fn next_intent(
    state: TradeState,
    prev_price: f64,
    last_price: f64,
    identity: &TokenIdentity,
    buy_notional_usd: f64,
) -> Option<(TradeIntent, TradeState)> {
    let trend = last_price - prev_price;

    match state {
        TradeState::Flat if trend > 0.0 => Some((
            TradeIntent {
                action: TradeAction::Buy,
                symbol: identity.symbol.clone(),
                address: identity.address.clone(),
                size: TradeSize::Usd(buy_notional_usd),
            },
            TradeState::Bought,
        )),
        TradeState::Bought if trend < 0.0 => Some((
            TradeIntent {
                action: TradeAction::Sell,
                symbol: identity.symbol.clone(),
                address: identity.address.clone(),
                size: TradeSize::All,
            },
            TradeState::Sold,
        )),
        _ => None,
    }
}
