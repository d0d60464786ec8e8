//! Shared types for the admission cascade.

/// Verdict of one `admit` call. The first check that fails names the
/// deny reason; the remaining checks never ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Allowed,
    TokenBlacklisted,
    DeveloperBlacklisted,
    ChainNotAllowed,
    Bundled,
    Untrusted,
    FakeVolume,
    BelowMinLiquidity,
    BelowMinVolume,
}

impl Admission {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Admission::Allowed)
    }
}

/// Threshold and allow-list knobs for the pure checks in the cascade.
///
/// Both thresholds default to zero (no-op); an empty chain allow-list
/// admits every chain.
#[derive(Debug, Clone, Default)]
pub struct ScreenerConfig {
    pub min_liquidity_usd: f64,
    pub min_volume_usd: f64,
    /// Lowercase chain identifiers. Empty means no restriction.
    pub allowed_chains: Vec<String>,
}
