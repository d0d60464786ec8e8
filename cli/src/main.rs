pub mod config;
pub mod runner;

use std::sync::Arc;

use clap::Parser;

use common::logger::init_logger;
use config::AppConfig;
use engine::engine::{CycleEngine, EngineConfig};
use executor::notifier::{NoopNotifier, TelegramNotifier};
use executor::trader::{HttpTradeChannel, NoopTradeChannel};
use executor::types::{Notifier, TradeChannel};
use market::feed::http::HttpMarketFeed;
use runner::Runner;
use screener::blacklist::{BlacklistSets, DeveloperMap};
use screener::chain::RiskFilterChain;
use screener::oracles::http::HttpOracles;
use watchlist::store::WatchlistStore;

#[derive(Parser, Debug)]
#[command(about = "Token watch & trade pipeline")]
struct Cli {
    /// Run a single cycle and exit (for smoke testing).
    #[arg(long)]
    once: bool,

    /// Override POLL_INTERVAL_MS.
    #[arg(long)]
    poll_interval_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger("tokenwatch");

    let cli = Cli::parse();

    let mut cfg = AppConfig::from_env()?;
    if let Some(ms) = cli.poll_interval_ms {
        // flag overrides go through the same validation as the env
        cfg.poll_interval_ms = ms;
        cfg.validate()?;
    }

    let mut runner = build_runner(&cfg)?;

    if cli.once {
        runner.run_once().await;
        return Ok(());
    }

    runner.run(cfg.poll_interval()).await;
    Ok(())
}

fn build_runner(cfg: &AppConfig) -> anyhow::Result<Runner> {
    let timeout = cfg.http_timeout();

    let feed = Arc::new(HttpMarketFeed::new(cfg.feed_url.clone(), timeout)?);

    let oracles = Arc::new(HttpOracles::new(
        cfg.bundling_url.clone(),
        cfg.integrity_url.clone(),
        cfg.activity_url.clone(),
        timeout,
    )?);

    let chain = RiskFilterChain::new(
        oracles.clone(),
        oracles.clone(),
        oracles,
        DeveloperMap::from_pairs(cfg.developer_map.clone()),
        cfg.screener.clone(),
    );

    let blacklist = BlacklistSets::seeded(
        cfg.blacklisted_tokens.clone(),
        cfg.blacklisted_developers.clone(),
    );

    let engine = CycleEngine::new(
        feed,
        chain,
        WatchlistStore::new(cfg.window_size),
        blacklist,
        EngineConfig {
            signal: cfg.signal,
            buy_notional_usd: cfg.buy_notional_usd,
        },
    );

    let notifier: Arc<dyn Notifier> = if cfg.telegram_bot_token.is_empty() {
        Arc::new(NoopNotifier::new())
    } else {
        Arc::new(TelegramNotifier::new(
            &cfg.telegram_bot_token,
            cfg.telegram_chat_id.clone(),
            timeout,
        )?)
    };

    let trader: Arc<dyn TradeChannel> = if cfg.trade_url.is_empty() {
        Arc::new(NoopTradeChannel::new())
    } else {
        Arc::new(HttpTradeChannel::new(cfg.trade_url.clone(), timeout)?)
    };

    Ok(Runner::new(engine, notifier, trader))
}
