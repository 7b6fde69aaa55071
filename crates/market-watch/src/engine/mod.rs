//! Risk signal evaluation
//!
//! Per-index arithmetic, macro co-occurrence checks and the orchestration
//! that turns configured symbols into a [`MarketReport`]

pub mod macro_risk;
pub mod result;
pub mod risk_engine;
pub mod signals;

pub use result::{IndexResult, MacroFlag, MarketReport, RiskSignal};
pub use risk_engine::RiskEngine;
