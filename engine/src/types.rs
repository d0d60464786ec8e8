//! Shared types produced by the decision engine.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
}

/// Notional attached to a trade intent. Buys carry the configured USD
/// notional; sells carry the sell-all marker. Real position sizing is
/// out of scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TradeSize {
    Usd(f64),
    All,
}

impl Serialize for TradeSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TradeSize::Usd(v) => serializer.serialize_f64(*v),
            TradeSize::All => serializer.serialize_str("all"),
        }
    }
}

/// A request for the execution channel: "do this trade for this token".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeIntent {
    pub action: TradeAction,
    pub symbol: String,
    pub address: String,
    #[serde(rename = "amount")]
    pub size: TradeSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_intent_serializes_amount_as_number() {
        let intent = TradeIntent {
            action: TradeAction::Buy,
            symbol: "PEPE".into(),
            address: "0xabc".into(),
            size: TradeSize::Usd(50.0),
        };

        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["action"], "buy");
        assert_eq!(json["amount"], 50.0);
    }

    #[test]
    fn sell_intent_serializes_sell_all_marker() {
        let intent = TradeIntent {
            action: TradeAction::Sell,
            symbol: "PEPE".into(),
            address: "0xabc".into(),
            size: TradeSize::All,
        };

        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["action"], "sell");
        assert_eq!(json["amount"], "all");
    }
}
