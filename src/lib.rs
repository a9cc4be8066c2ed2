//! Wagerline - Staged bet-string pipeline for roulette
//!
//! This crate re-exports all layers of the Wagerline system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: wagerline_runtime    — Session, REPL, CLI, built-in stages
//! Layer 3: wagerline_debug      — Bet history, stage trace buffer
//! Layer 2: wagerline_engine     — Stages, registry, pipeline executor
//! Layer 1: wagerline_grammar    — Wheels, locations, bet-string grammar
//! Layer 0: wagerline_foundation — Error, identifier codec, control messages
//! ```

pub use wagerline_debug as debug;
pub use wagerline_engine as engine;
pub use wagerline_foundation as foundation;
pub use wagerline_grammar as grammar;
pub use wagerline_runtime as runtime;
