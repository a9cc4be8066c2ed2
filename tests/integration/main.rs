//! Cross-layer integration tests for Wagerline
//!
//! Tests that drive sessions end to end, from raw input lines to bet strings.

mod batch;
mod money_management;
mod wheels;
