//! Pipeline orchestration.
//!
//! One accepted input is one run. Each run:
//! 1. Checks the raw input against the grammar (invalid input is a no-op)
//! 2. Starts from the empty bet string
//! 3. Offers the current bet string to every stage, category by category
//! 4. Keeps a stage's proposal only if it is grammar-valid, otherwise rolls
//!    back to the last valid bet string and carries on
//!
//! No stage outcome stops a run.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use wagerline_foundation::{Error, Result};
use wagerline_grammar::{BetString, GameGrammar};

use crate::category::Category;
use crate::sequence::{StageEntry, StageSequence};
use crate::stage::StageId;

// =============================================================================
// Stage Report
// =============================================================================

/// What happened to one stage's proposal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageOutcome {
    /// The proposal was valid and became the current bet string.
    Accepted,
    /// The proposal was invalid and was discarded.
    Rejected {
        /// The discarded proposal.
        candidate: String,
        /// Why it was invalid.
        reason: String,
    },
    /// The stage produced no proposal.
    Failed {
        /// Why the stage failed.
        reason: String,
    },
}

impl StageOutcome {
    /// Returns true if the proposal was kept.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for StageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Rejected { candidate, reason } => {
                write!(f, "rejected {candidate:?}: {reason}")
            }
            Self::Failed { reason } => write!(f, "failed: {reason}"),
        }
    }
}

/// One stage's part in a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageReport {
    /// The stage's category.
    pub category: Category,
    /// The stage.
    pub stage: StageId,
    /// What happened to its proposal.
    pub outcome: StageOutcome,
    /// Bet string after this stage.
    pub current: String,
}

impl fmt::Display for StageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} -> {:?}",
            self.category, self.stage, self.outcome, self.current
        )
    }
}

// =============================================================================
// Pipeline Run
// =============================================================================

/// Result of processing one input.
#[derive(Clone, Debug)]
pub struct PipelineRun {
    /// The raw input.
    pub input: String,
    /// The final bet string (or the prior one, if skipped).
    pub bet: BetString,
    /// Per-stage reports in execution order.
    pub reports: Vec<StageReport>,
    /// True if the input was invalid and no stage ran.
    pub skipped: bool,
    /// Run number. A skipped input carries the number of the last real run.
    pub run: u64,
}

impl PipelineRun {
    /// Returns the final bet string.
    #[must_use]
    pub fn bet_string(&self) -> &BetString {
        &self.bet
    }

    /// Number of proposals that were discarded or never produced.
    #[must_use]
    pub fn rollbacks(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| !r.outcome.is_accepted())
            .count()
    }
}

// =============================================================================
// Pipeline Executor
// =============================================================================

/// Runs inputs through a [`StageSequence`].
///
/// Remembers the last reported bet string so that invalid input can return
/// the prior state unchanged.
#[derive(Clone, Debug, Default)]
pub struct PipelineExecutor {
    last: BetString,
    runs: u64,
}

impl PipelineExecutor {
    /// Creates an executor with the empty bet string as prior state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last reported bet string.
    #[must_use]
    pub fn last(&self) -> &BetString {
        &self.last
    }

    /// Number of runs that executed the pipeline.
    #[must_use]
    pub const fn run_count(&self) -> u64 {
        self.runs
    }

    /// Replaces the prior state (for undo/redo).
    pub fn restore(&mut self, bet: BetString) {
        self.last = bet;
    }

    /// Forgets the prior state and the run count.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Processes one raw input.
    pub fn process(
        &mut self,
        input: &str,
        stages: &mut StageSequence,
        grammar: &GameGrammar,
    ) -> PipelineRun {
        if let Err(err) = grammar.check_number(input) {
            tracing::debug!(%err, "input ignored");
            return PipelineRun {
                input: input.to_string(),
                bet: self.last.clone(),
                reports: Vec::new(),
                skipped: true,
                run: self.runs,
            };
        }

        self.runs += 1;
        let mut current = BetString::empty();
        let mut reports = Vec::with_capacity(stages.len());

        for category in Category::PIPELINE {
            let entries = stages.stages_mut(category);
            if entries.is_empty() {
                continue;
            }
            for entry in entries {
                let outcome = match invoke(entry, input, current.as_str()) {
                    Ok(candidate) => match grammar.accept(candidate.as_str()) {
                        Ok(bet) => {
                            current = bet;
                            StageOutcome::Accepted
                        }
                        Err(err) => StageOutcome::Rejected {
                            candidate,
                            reason: err.to_string(),
                        },
                    },
                    Err(err) => StageOutcome::Failed {
                        reason: err.to_string(),
                    },
                };

                match &outcome {
                    StageOutcome::Accepted => {
                        tracing::debug!(%category, stage = %entry.id(), bet = %current, "stage accepted");
                    }
                    StageOutcome::Rejected { candidate, reason } => {
                        tracing::debug!(%category, stage = %entry.id(), %candidate, %reason, "stage output rolled back");
                    }
                    StageOutcome::Failed { reason } => {
                        tracing::warn!(%category, stage = %entry.id(), %reason, "stage failed");
                    }
                }

                reports.push(StageReport {
                    category,
                    stage: entry.id().clone(),
                    outcome,
                    current: current.to_string(),
                });
            }
        }

        self.last = current.clone();
        PipelineRun {
            input: input.to_string(),
            bet: current,
            reports,
            skipped: false,
            run: self.runs,
        }
    }
}

/// Calls a stage, turning a panic into a failure.
fn invoke(entry: &mut StageEntry, input: &str, previous: &str) -> Result<String> {
    let id = entry.id().clone();
    let stage = entry.stage_mut();
    panic::catch_unwind(AssertUnwindSafe(|| stage.transform(input, previous)))
        .unwrap_or_else(|payload| Err(Error::stage_failed(id.label(), panic_message(&*payload))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "stage panicked".to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================
