//! Internal control messages exchanged between stages.
//!
//! Control messages travel out-of-band from bet strings. The set is closed:
//! anything else is not a control message.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One of the fixed control tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlMessage {
    /// `-U`
    Undo,
    /// `-R`
    Redo,
    /// `-L`
    Loop,
    /// `-Q`, quit gracefully.
    Quit,
    /// `-H`, quit now.
    Halt,
    /// `-N`
    NewSession,
    /// `-K`
    Okay,
    /// `-E`
    Error,
    /// `-S`
    Show,
}

impl ControlMessage {
    /// All control messages, in token order.
    pub const ALL: [Self; 9] = [
        Self::Undo,
        Self::Redo,
        Self::Loop,
        Self::Quit,
        Self::Halt,
        Self::NewSession,
        Self::Okay,
        Self::Error,
        Self::Show,
    ];

    /// Returns the wire token for this message.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Undo => "-U",
            Self::Redo => "-R",
            Self::Loop => "-L",
            Self::Quit => "-Q",
            Self::Halt => "-H",
            Self::NewSession => "-N",
            Self::Okay => "-K",
            Self::Error => "-E",
            Self::Show => "-S",
        }
    }

    /// Looks up a message by its exact token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.token() == token)
    }
}

impl fmt::Display for ControlMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ControlMessage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| Error::unknown_control_message(s))
    }
}

/// Returns true iff `message` is exactly one of the control tokens.
#[must_use]
pub fn is_valid_message(message: &str) -> bool {
    ControlMessage::from_token(message).is_some()
}
