//! Rug signal (sudden price collapse).
//!
//! ## Ratio definition
//!
//! ```text
//! drop_ratio = (prev - last) / prev
//! ```
//!
//! `drop_ratio` is 0 for a flat price, approaches 1 as the price goes to
//! zero, and is negative when the price rises. The signal fires when the
//! ratio reaches the configured threshold (default 0.90, i.e. the token
//! lost at least 90% of its price between two consecutive observations).
//!
//! Callers must guarantee `prev > 0`; the shared guard lives in
//! [`super::detect`].

/// Fractional drop between two consecutive prices.
pub fn drop_ratio(prev: f64, last: f64) -> f64 {
    (prev - last) / prev
}

/// True when the drop reaches `threshold`.
pub fn is_rug(prev: f64, last: f64, threshold: f64) -> bool {
    drop_ratio(prev, last) >= threshold
}
