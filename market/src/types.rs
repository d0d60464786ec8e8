/// Identity of a tradeable token. The address doubles as the store key,
/// so it is lowercased on construction and never mutated afterwards.
/// Deliberately not deserializable: every identity goes through `new()`
/// so the lowercase invariant cannot be sidestepped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIdentity {
    pub address: String,
    pub symbol: String,
    pub chain: String,
}

impl TokenIdentity {
    pub fn new(
        address: impl Into<String>,
        symbol: impl Into<String>,
        chain: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into().to_lowercase(),
            symbol: symbol.into(),
            chain: chain.into(),
        }
    }
}

/// Single point-in-time market reading for a token. Value object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub ts_ms: u64,
    pub price_usd: f64,
    pub liquidity_usd: f64,
    pub volume_24h_usd: f64,
}

/// One row from the market feed: who plus what we saw.
#[derive(Debug, Clone)]
pub struct TokenSnapshot {
    pub identity: TokenIdentity,
    pub observation: Observation,
}

/// Price patterns flagged on a token's recent history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenEvent {
    Rugged,
    Pumped,
}

impl std::fmt::Display for TokenEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TokenEvent::Rugged => "Rugged",
            TokenEvent::Pumped => "Pumped",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_lowercases_address() {
        let id = TokenIdentity::new("0xAbCdEf", "PEPE", "solana");
        assert_eq!(id.address, "0xabcdef");
        assert_eq!(id.symbol, "PEPE");
    }
}
