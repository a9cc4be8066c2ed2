//! Session, REPL, CLI, and built-in stages for Wagerline.
//!
//! This crate provides:
//! - [`Session`] - Grammar, stages, prior state, and history for one player
//! - [`Repl`] - Interactive read-eval-print loop over a session
//! - [`modules`] - Built-in stages and utilities
//! - CLI argument parsing and execution (the `wagerline` binary)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod highlight;
pub mod modules;
pub mod repl;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Action, Repl};
pub use session::{RegistryBuilder, Reply, Session, SessionConfig};
