//! Error types for the Wagerline system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Most of these errors are recovered locally by the component that detects
//! them: a rejected stage output is rolled back, an invalid input number is
//! ignored. They exist so diagnostics (traces, REPL messages, tests) can say
//! exactly *why* something was refused.

use std::fmt;

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Wagerline operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid number error.
    #[must_use]
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidNumber(input.into()))
    }

    /// Creates an invalid bet grammar error for one wager segment.
    #[must_use]
    pub fn invalid_bet_grammar(segment: impl Into<String>, reason: GrammarFault) -> Self {
        Self::new(ErrorKind::InvalidBetGrammar {
            segment: segment.into(),
            reason,
        })
    }

    /// Creates an unknown location error.
    #[must_use]
    pub fn unknown_location(location: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownLocation(location.into()))
    }

    /// Creates an unknown control message error.
    #[must_use]
    pub fn unknown_control_message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownControlMessage(message.into()))
    }

    /// Creates a stage failure error.
    #[must_use]
    pub fn stage_failed(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::StageFailed {
            stage: stage.into(),
            message: message.into(),
        })
    }

    /// Creates an unknown stage error.
    #[must_use]
    pub fn unknown_stage(label: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownStage(label.into()))
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Returns true if this error describes a refused bet string,
    /// including an unknown location.
    #[must_use]
    pub fn is_grammar_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidBetGrammar { .. } | ErrorKind::UnknownLocation(_)
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Raw input is not a legal number for the active wheel.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// A wager segment failed the comma/`@`/stake checks.
    #[error("invalid bet grammar in {segment:?}: {reason}")]
    InvalidBetGrammar {
        /// The offending wager segment.
        segment: String,
        /// Which check failed.
        reason: GrammarFault,
    },

    /// The right-hand side of a wager is not in the location table.
    #[error("unknown location: {0:?}")]
    UnknownLocation(String),

    /// An `_digits_` run could not be turned back into a character.
    #[error("malformed identifier token: {0:?}")]
    MalformedIdentifierToken(String),

    /// A message outside the fixed control-token set.
    #[error("unknown control message: {0:?}")]
    UnknownControlMessage(String),

    /// A stage could not produce output.
    #[error("stage {stage} failed: {message}")]
    StageFailed {
        /// Display label of the stage.
        stage: String,
        /// What went wrong.
        message: String,
    },

    /// No stage is registered under the given label.
    #[error("unknown stage: {0}")]
    UnknownStage(String),

    /// A user-supplied command, name or argument was refused.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Misuse of the registry or sequence APIs, or a terminal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

/// The specific check a wager segment failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarFault {
    /// The segment does not contain exactly one `@`.
    MissingSeparator,
    /// The stake is not an integer.
    NonNumericStake,
}

impl fmt::Display for GrammarFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "expected exactly one '@'"),
            Self::NonNumericStake => write!(f, "stake is not an integer"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Stage label or component name.
    pub source: Option<String>,
    /// Raw input that triggered the error.
    pub input: Option<String>,
    /// Chain of stages/categories leading here.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the raw input.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(input) = &self.input {
                write!(f, " (input {input:?})")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
