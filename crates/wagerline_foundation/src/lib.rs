//! Core error types, identifier codec, and control messages for Wagerline.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`encode_identifier`] / [`decode_identifier`] - Reversible display-name codec
//! - [`ControlMessage`] - The closed set of inter-stage control tokens

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ident;
pub mod message;

pub use error::{Error, ErrorContext, ErrorKind, GrammarFault, Result};
pub use ident::{decode_identifier, encode_identifier};
pub use message::{ControlMessage, is_valid_message};
