//! Integration tests for Layer 2: Engine
//!
//! Tests for stage assembly, pipeline runs, and rollback across categories.

mod pipeline;
mod registry;
