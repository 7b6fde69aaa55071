//! Market risk push binary
//!
//! Intended to run from a scheduler shortly after US market close; pass
//! `--manual` (or trigger via `workflow_dispatch`) to bypass the gate.
//!
//! # Usage
//!
//! ```bash
//! # Telegram credentials
//! export TG_BOT_TOKEN="123456:ABC..."
//! export TG_CHAT_ID="42"
//!
//! cargo run --bin market-push -p market-watch
//! ```

use clap::{Parser, ValueEnum};
use std::env;
use tracing::info;

use market_watch::api::YahooFinanceClient;
use market_watch::config::WatchConfig;
use market_watch::engine::RiskEngine;
use market_watch::platforms::{
    DeliverySink, FeishuConfig, FeishuSink, TelegramConfig, TelegramSink,
};
use market_watch::report;
use market_watch::schedule::{self, Gate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlatformArg {
    Telegram,
    Feishu,
}

#[derive(Parser, Debug)]
#[command(name = "market-push")]
#[command(about = "Push a US index risk report to a chat channel", long_about = None)]
struct Args {
    /// Delivery platform
    #[arg(long, value_enum, default_value_t = PlatformArg::Telegram)]
    platform: PlatformArg,

    /// Run even though the market has not closed yet
    #[arg(long)]
    manual: bool,

    /// Compose and print the report without delivering it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG").unwrap_or_else(|_| "warn,market_watch=info".to_string()),
        )
        .init();

    let args = Args::parse();

    // GitHub Actions sets this for on-demand workflow runs
    let manual = args.manual
        || env::var("GITHUB_EVENT_NAME").is_ok_and(|v| v == "workflow_dispatch");
    info!(manual, "starting market-push");

    if schedule::decide(chrono::Utc::now(), manual) == Gate::Pending {
        println!("⏳ Market not closed yet, skipping");
        return Ok(());
    }

    let config = WatchConfig::default();
    let engine = RiskEngine::new(YahooFinanceClient::new(), config.clone());

    let market_report = engine.evaluate(manual).await?;
    let text = report::compose(&market_report, &config);
    println!("{text}");

    if args.dry_run {
        info!("dry run, delivery skipped");
        return Ok(());
    }

    let sink: Box<dyn DeliverySink> = match args.platform {
        PlatformArg::Telegram => Box::new(TelegramSink::new(
            TelegramConfig::from_env()?,
            config.request_timeout,
        )?),
        PlatformArg::Feishu => Box::new(FeishuSink::new(
            FeishuConfig::from_env()?,
            config.request_timeout,
        )?),
    };

    sink.deliver(&text).await?;
    println!("✅ Report pushed");

    Ok(())
}
