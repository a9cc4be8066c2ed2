//! The stage capability and stage identity.

use std::fmt;

use wagerline_foundation::{ControlMessage, Result, decode_identifier, encode_identifier};

/// A pluggable processing unit.
///
/// A stage sees the raw input and the current bet string and proposes a new
/// bet string. The executor decides whether to keep the proposal; stages
/// never validate their own output.
pub trait Stage {
    /// Proposes a new bet string.
    ///
    /// # Errors
    ///
    /// Returns an error when the stage cannot produce output. The executor
    /// treats this exactly like an invalid proposal.
    fn transform(&mut self, input: &str, previous: &str) -> Result<String>;

    /// Receives an out-of-band control message.
    fn on_message(&mut self, _message: ControlMessage) {}
}

impl<F> Stage for F
where
    F: FnMut(&str, &str) -> Result<String>,
{
    fn transform(&mut self, input: &str, previous: &str) -> Result<String> {
        self(input, previous)
    }
}

/// Stable identity of a stage.
///
/// The token is the storage-safe form used for registry lookup; the label
/// is what people see. They convert into each other through the identifier
/// codec.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StageId {
    token: String,
}

impl StageId {
    /// Creates an identity from a display label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self {
            token: encode_identifier(label),
        }
    }

    /// Creates an identity from an already-encoded token.
    #[must_use]
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Returns the storage-safe token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> String {
        decode_identifier(&self.token)
    }

    /// Returns true if this stage is shown as `label`.
    #[must_use]
    pub fn matches_label(&self, label: &str) -> bool {
        self.token == encode_identifier(label)
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
