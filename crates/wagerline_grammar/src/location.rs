//! Betting locations and the per-wheel location table.
//!
//! The table is derived from a [`WheelConfiguration`] and never stored on its
//! own. It is an `im` ordered map, so clones are O(1) and iteration order is
//! deterministic.

use std::borrow::Borrow;
use std::fmt;

use crate::layout::{InsideBet, OutsideBet};
use crate::wheel::WheelConfiguration;

/// An opaque token naming a betable area.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location(String);

impl Location {
    /// Creates a location token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a location covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocationKind {
    /// A single number.
    Straight(i32),
    /// A named outside bet.
    Outside(OutsideBet),
    /// A multi-number inside combination.
    Inside(InsideBet),
}

impl LocationKind {
    /// Returns true if a spin of `n` wins a bet on this location.
    #[must_use]
    pub fn covers(&self, n: i32) -> bool {
        match self {
            Self::Straight(m) => *m == n,
            Self::Outside(bet) => bet.covers(n),
            Self::Inside(bet) => bet.covers(n),
        }
    }
}

/// The finite set of legal locations for one wheel.
#[derive(Clone, Debug)]
pub struct LocationTable {
    wheel: WheelConfiguration,
    entries: im::OrdMap<Location, LocationKind>,
}

impl LocationTable {
    /// Builds the table for `wheel`.
    ///
    /// Contains the outside bets, the fixed 1-36 inside combinations, the
    /// zero-adjacent splits the wheel has pockets for, and one straight-up
    /// token per legal number.
    #[must_use]
    pub fn build(wheel: WheelConfiguration) -> Self {
        let mut entries = im::OrdMap::new();

        for bet in OutsideBet::ALL {
            entries.insert(Location::new(bet.code()), LocationKind::Outside(bet));
        }

        for bet in InsideBet::grid()
            .into_iter()
            .chain(InsideBet::zero_adjacent(wheel))
        {
            entries.insert(Location::new(bet.token()), LocationKind::Inside(bet));
        }

        for n in wheel.numbers() {
            entries.insert(Location::new(n.to_string()), LocationKind::Straight(n));
        }

        Self { wheel, entries }
    }

    /// Returns the wheel this table was built for.
    #[must_use]
    pub const fn wheel(&self) -> WheelConfiguration {
        self.wheel
    }

    /// Returns true if `token` is a legal location (exact, case-sensitive).
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Returns what `token` covers, if it is a legal location.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&LocationKind> {
        self.entries.get(token)
    }

    /// Returns the number of locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all location tokens in order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.entries.keys()
    }
}
