//! Stage capability, module registry, and pipeline orchestration for Wagerline.
//!
//! This crate provides:
//! - [`Stage`] - The single capability every processing stage exposes
//! - [`Category`] - The fixed pipeline phases
//! - [`StageSequence`] - Ordered stage instances per category
//! - [`ModuleRegistry`] - Available stages and utilities, looked up by label
//! - [`PipelineExecutor`] - One input in, one grammar-valid bet string out
//!
//! # Pipeline
//!
//! ```text
//! raw input ──► number check ──✗──► prior bet string (no run)
//!                    │
//!                    ✓
//!                    ▼
//!   current = ""
//!   Input ─► BetSelection ─► MoneyManagement ─► Output
//!     each stage: candidate = transform(input, current)
//!                 valid?  current = candidate
//!                 else    keep current
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod category;
pub mod pipeline;
pub mod registry;
pub mod sequence;
pub mod stage;

pub use category::Category;
pub use pipeline::{PipelineExecutor, PipelineRun, StageOutcome, StageReport};
pub use registry::{ModuleRegistry, StageSelection};
pub use sequence::{StageEntry, StageSequence};
pub use stage::{Stage, StageId};
