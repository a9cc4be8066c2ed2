//! Bet history, stage tracing, and observability settings for Wagerline.
//!
//! This crate provides:
//! - [`ObservabilityConfig`] - What to record and how much of it
//! - [`BetHistory`] - Reported bet strings with undo and redo
//! - [`TraceBuffer`] - Recent stage outcomes for inspection

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod history;
pub mod trace;

pub use config::ObservabilityConfig;
pub use history::{BetHistory, HistoryEntry};
pub use trace::{TraceBuffer, TraceBufferStats, TraceEvent, TraceRecord};
