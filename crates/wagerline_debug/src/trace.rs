//! Ring buffer of pipeline trace records.
//!
//! Each processed input produces either one `Skipped` record or one
//! `Stage` record per stage that ran.

use std::collections::VecDeque;
use std::fmt;

use wagerline_engine::{PipelineRun, StageOutcome, StageReport};

// =============================================================================
// Trace Event
// =============================================================================

/// Something that happened while processing one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// The input was not a valid number; no stage ran.
    Skipped {
        /// The rejected input.
        input: String,
    },
    /// A stage ran.
    Stage(StageReport),
}

impl TraceEvent {
    /// Returns a short event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Skipped { .. } => "skipped",
            Self::Stage(report) => match report.outcome {
                StageOutcome::Accepted => "accepted",
                StageOutcome::Rejected { .. } => "rejected",
                StageOutcome::Failed { .. } => "failed",
            },
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped { input } => write!(f, "input {input:?} ignored"),
            Self::Stage(report) => write!(f, "{report}"),
        }
    }
}

/// A numbered trace event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// Monotonic record id.
    pub id: u64,
    /// Run the event belongs to.
    pub run: u64,
    /// What happened.
    pub event: TraceEvent,
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} run {}: {}", self.id, self.run, self.event)
    }
}

// =============================================================================
// Trace Buffer
// =============================================================================

/// A ring buffer for storing trace records.
///
/// Maintains a fixed maximum size, discarding oldest records when full.
#[derive(Clone, Debug)]
pub struct TraceBuffer {
    records: VecDeque<TraceRecord>,
    max_size: usize,
    next_id: u64,
}

impl TraceBuffer {
    /// Creates a new trace buffer with the given maximum size.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_size.min(1024)),
            max_size,
            next_id: 0,
        }
    }

    /// Pushes a single event. Returns the assigned record id.
    pub fn push(&mut self, run: u64, event: TraceEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push_back(TraceRecord { id, run, event });
        while self.records.len() > self.max_size {
            self.records.pop_front();
        }
        id
    }

    /// Records everything a pipeline run reported.
    pub fn record_run(&mut self, run: &PipelineRun) {
        if run.skipped {
            self.push(
                run.run,
                TraceEvent::Skipped {
                    input: run.input.clone(),
                },
            );
            return;
        }
        for report in &run.reports {
            self.push(run.run, TraceEvent::Stage(report.clone()));
        }
    }

    /// Returns the number of records in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Clears all records. Ids keep increasing.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Returns an iterator over all records.
    pub fn iter(&self) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter()
    }

    /// Returns records for a specific run.
    #[must_use]
    pub fn records_for_run(&self, run: u64) -> Vec<&TraceRecord> {
        self.records.iter().filter(|r| r.run == run).collect()
    }

    /// Returns the most recent N records.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<&TraceRecord> {
        let start = self.records.len().saturating_sub(count);
        self.records.iter().skip(start).collect()
    }

    /// Returns records of a specific event type.
    #[must_use]
    pub fn by_event_type(&self, event_type: &str) -> Vec<&TraceRecord> {
        self.records
            .iter()
            .filter(|r| r.event.event_type() == event_type)
            .collect()
    }

    /// Returns the newest run number in the buffer.
    #[must_use]
    pub fn newest_run(&self) -> Option<u64> {
        self.records.back().map(|r| r.run)
    }

    /// Returns statistics about the buffer.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        let mut stats = TraceBufferStats {
            record_count: self.records.len(),
            max_size: self.max_size,
            ..TraceBufferStats::default()
        };
        for record in &self.records {
            match record.event.event_type() {
                "accepted" => stats.accepted += 1,
                "rejected" => stats.rejected += 1,
                "failed" => stats.failed += 1,
                _ => stats.skipped += 1,
            }
        }
        stats
    }
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::new(1000)
    }
}

// =============================================================================
// Buffer Statistics
// =============================================================================

/// Statistics about a trace buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraceBufferStats {
    /// Number of records currently in buffer.
    pub record_count: usize,
    /// Maximum buffer size.
    pub max_size: usize,
    /// Stage proposals kept.
    pub accepted: usize,
    /// Stage proposals discarded as invalid.
    pub rejected: usize,
    /// Stages that produced nothing.
    pub failed: usize,
    /// Inputs ignored.
    pub skipped: usize,
}

impl fmt::Display for TraceBufferStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} records: {} accepted, {} rejected, {} failed, {} skipped",
            self.record_count, self.max_size, self.accepted, self.rejected, self.failed, self.skipped
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
