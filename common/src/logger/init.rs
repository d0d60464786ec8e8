use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Install the global subscriber. Safe to call more than once; only the
/// first call wins. `LOG_JSON=1` switches to line-delimited JSON output.
pub fn init_logger(service_name: &'static str) {
    LOGGER_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let json = std::env::var("LOG_JSON").is_ok_and(|v| v == "1");

        let base = fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_line_number(true);

        if json {
            base.json().init();
        } else {
            base.init();
        }

        tracing::info!(service = service_name, "logger initialized");
    });
}
