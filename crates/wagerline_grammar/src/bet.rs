//! Wagers and bet strings.
//!
//! A [`Wager`] is `stake@location`. A [`BetString`] is a comma-separated
//! list of wagers that has already passed [`GameGrammar`](crate::GameGrammar)
//! validation; the only other way to get one is [`BetString::empty`].

use std::fmt;
use std::str::FromStr;

use wagerline_foundation::{Error, GrammarFault};

use crate::location::Location;

// =============================================================================
// Wager
// =============================================================================

/// A stake on one location.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Wager {
    /// Stake in betting units. Only integer-ness is checked.
    pub stake: i32,
    /// Where the stake is placed.
    pub location: Location,
}

impl Wager {
    /// Creates a wager.
    #[must_use]
    pub fn new(stake: i32, location: impl Into<String>) -> Self {
        Self {
            stake,
            location: Location::new(location),
        }
    }

    /// Serializes wagers as a comma-separated bet string candidate.
    #[must_use]
    pub fn join(wagers: &[Self]) -> String {
        wagers
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Wager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.stake, self.location)
    }
}

/// Parses the syntax of one segment. Location membership is not checked.
impl FromStr for Wager {
    type Err = Error;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        let mut parts = segment.split('@');
        let (Some(stake), Some(location), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::invalid_bet_grammar(
                segment,
                GrammarFault::MissingSeparator,
            ));
        };
        let stake = stake
            .parse::<i32>()
            .map_err(|_| Error::invalid_bet_grammar(segment, GrammarFault::NonNumericStake))?;
        Ok(Self::new(stake, location))
    }
}

// =============================================================================
// Bet String
// =============================================================================

/// A grammar-valid bet string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BetString {
    text: String,
    wagers: Vec<Wager>,
}

impl BetString {
    /// The "no bet" state.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps text whose wagers have already been validated.
    pub(crate) fn validated(text: String, wagers: Vec<Wager>) -> Self {
        Self { text, wagers }
    }

    /// Returns the serialized form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true for the "no bet" state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the wagers in order.
    #[must_use]
    pub fn wagers(&self) -> &[Wager] {
        &self.wagers
    }

    /// Total stake across all wagers.
    #[must_use]
    pub fn total_stake(&self) -> i64 {
        self.wagers.iter().map(|w| i64::from(w.stake)).sum()
    }

    /// Consumes the bet string and returns its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for BetString {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<str> for BetString {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for BetString {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl fmt::Display for BetString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
