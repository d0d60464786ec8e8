//! Pump signal (sudden price spike).
//!
//! ## Ratio definition
//!
//! ```text
//! pump_ratio = last / prev
//! ```
//!
//! A flat price gives 1.0; the signal fires when the multiple reaches the
//! configured threshold (default 1.50, i.e. the price grew at least 50%
//! between two consecutive observations).
//!
//! Callers must guarantee `prev > 0`; the shared guard lives in
//! [`super::detect`].

/// Price multiple between two consecutive prices.
pub fn pump_ratio(prev: f64, last: f64) -> f64 {
    last / prev
}

/// True when the multiple reaches `threshold`.
pub fn is_pump(prev: f64, last: f64, threshold: f64) -> bool {
    pump_ratio(prev, last) >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifty_percent_spike_is_exactly_threshold() {
        assert!((pump_ratio(1.0, 1.5) - 1.5).abs() < 1e-12);
        assert!(is_pump(1.0, 1.5, 1.5));
    }

    #[test]
    fn spike_just_under_threshold_does_not_fire() {
        assert!(!is_pump(1.0, 1.49, 1.5));
    }

    #[test]
    fn falling_price_never_fires() {
        assert!(!is_pump(1.0, 0.5, 1.5));
    }
}
