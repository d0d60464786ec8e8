use tracing::{Level, Span};

use super::TraceId;

/// Create the root span for one poll cycle
pub fn cycle_span(trace_id: &TraceId) -> Span {
    tracing::span!(
        Level::INFO,
        "cycle",
        trace_id = %trace_id
    )
}
