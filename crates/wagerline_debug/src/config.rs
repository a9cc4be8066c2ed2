//! Configuration for the observability system.

/// Configuration for the observability system.
///
/// Controls stage tracing and history retention.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Whether stage reports are recorded in the trace buffer.
    pub enabled: bool,

    /// History ring buffer size (number of reported bet strings to retain).
    pub history_size: usize,

    /// Trace ring buffer size (number of records to retain).
    pub trace_size: usize,

    /// Print each run's stage reports as they happen.
    pub echo_reports: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            history_size: 100,
            trace_size: 1000,
            echo_reports: false,
        }
    }
}

impl ObservabilityConfig {
    /// Creates a configuration with tracing enabled.
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Creates a configuration for debugging stages.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            enabled: true,
            history_size: 500,
            trace_size: 10_000,
            echo_reports: true,
        }
    }

    /// Builder method to set enabled state.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builder method to set history size.
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// Builder method to set trace size.
    #[must_use]
    pub fn with_trace_size(mut self, size: usize) -> Self {
        self.trace_size = size;
        self
    }

    /// Builder method to enable/disable report echoing.
    #[must_use]
    pub fn with_echo_reports(mut self, echo: bool) -> Self {
        self.echo_reports = echo;
        self
    }
}
