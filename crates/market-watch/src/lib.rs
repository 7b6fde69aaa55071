//! US stock index risk monitor
//!
//! Fetches daily closing prices for a small set of stock indexes, computes
//! day-over-day change, drawdown from the trailing high and decline
//! streaks, checks three macro indicators for co-occurring risk, and pushes
//! a text report to a chat channel after US market close.
//!
//! The crate is organized around four pieces:
//!
//! - [`api`]: price history providers (Yahoo Finance)
//! - [`engine`]: risk-signal arithmetic and run orchestration
//! - [`report`]: pure composition of the push message
//! - [`platforms`]: delivery sinks (Telegram Bot API, Feishu webhook)
//!
//! plus [`schedule`], which gates scheduled invocations on the US-Eastern
//! market close. Everything is computed fresh per invocation; nothing is
//! persisted between runs.
//!
//! # Example
//!
//! ```rust,ignore
//! use market_watch::api::YahooFinanceClient;
//! use market_watch::config::WatchConfig;
//! use market_watch::engine::RiskEngine;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = WatchConfig::default();
//!     let engine = RiskEngine::new(YahooFinanceClient::new(), config.clone());
//!
//!     let report = engine.evaluate(false).await?;
//!     println!("{}", market_watch::report::compose(&report, &config));
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod platforms;
pub mod report;
pub mod schedule;

// Re-export main types for convenience
pub use config::WatchConfig;
pub use engine::{MarketReport, RiskEngine};
pub use error::{MarketError, Result};
