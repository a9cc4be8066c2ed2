//! Integration tests for Layer 0: Foundation
//!
//! Tests for the identifier codec, control messages, and errors.

mod codec;
mod errors;
