//! Number and bet-string validation for one wheel.

use wagerline_foundation::{Error, Result};

use crate::bet::{BetString, Wager};
use crate::location::LocationTable;
use crate::wheel::WheelConfiguration;

/// Decides what a legal number and a legal bet string are.
///
/// Holds the active [`WheelConfiguration`] and the location table derived
/// from it. Changing the wheel rebuilds the table.
#[derive(Clone, Debug)]
pub struct GameGrammar {
    table: LocationTable,
}

impl Default for GameGrammar {
    fn default() -> Self {
        Self::new(WheelConfiguration::default())
    }
}

impl GameGrammar {
    /// Creates a grammar for `wheel`.
    #[must_use]
    pub fn new(wheel: WheelConfiguration) -> Self {
        Self {
            table: LocationTable::build(wheel),
        }
    }

    /// Returns the active wheel.
    #[must_use]
    pub const fn wheel(&self) -> WheelConfiguration {
        self.table.wheel()
    }

    /// Switches to another wheel and regenerates the location table.
    pub fn set_wheel(&mut self, wheel: WheelConfiguration) {
        if wheel == self.wheel() {
            return;
        }
        tracing::info!(from = self.wheel().size(), to = wheel.size(), "wheel changed");
        self.table = LocationTable::build(wheel);
    }

    /// Returns the location table.
    #[must_use]
    pub const fn locations(&self) -> &LocationTable {
        &self.table
    }

    // -------------------------------------------------------------------------
    // Numbers
    // -------------------------------------------------------------------------

    /// Returns true if `n` is in the active wheel's range.
    #[must_use]
    pub const fn validate_number(&self, n: i32) -> bool {
        self.wheel().contains(n)
    }

    /// Integer-parses `s` and checks the range. Unparsable input is invalid.
    #[must_use]
    pub fn validate_number_str(&self, s: &str) -> bool {
        self.check_number(s).is_ok()
    }

    /// Parses and range-checks a raw input number.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNumber` if `s` is not an integer or is out of range.
    pub fn check_number(&self, s: &str) -> Result<i32> {
        match s.parse::<i32>() {
            Ok(n) if self.validate_number(n) => Ok(n),
            _ => Err(Error::invalid_number(s)),
        }
    }

    // -------------------------------------------------------------------------
    // Bet strings
    // -------------------------------------------------------------------------

    /// Returns true if `bet` is a legal bet string. The empty string is legal.
    #[must_use]
    pub fn validate_bet_string(&self, bet: &str) -> bool {
        self.check_bet_string(bet).is_ok()
    }

    /// Parses and validates a bet string, stopping at the first bad wager.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBetGrammar` for a segment without exactly one `@` or
    /// with a non-integer stake, and `UnknownLocation` for a location that is
    /// not in the table.
    pub fn check_bet_string(&self, bet: &str) -> Result<Vec<Wager>> {
        if bet.is_empty() {
            return Ok(Vec::new());
        }
        bet.split(',')
            .map(|segment| {
                let wager: Wager = segment.parse()?;
                if self.table.contains(wager.location.as_str()) {
                    Ok(wager)
                } else {
                    Err(Error::unknown_location(wager.location.as_str()))
                }
            })
            .collect()
    }

    /// Validates a candidate and wraps it as a [`BetString`].
    ///
    /// # Errors
    ///
    /// Same as [`check_bet_string`](Self::check_bet_string).
    pub fn accept(&self, candidate: impl Into<String>) -> Result<BetString> {
        let text = candidate.into();
        let wagers = self.check_bet_string(&text)?;
        Ok(BetString::validated(text, wagers))
    }

    // -------------------------------------------------------------------------
    // Settlement
    // -------------------------------------------------------------------------

    /// Returns true if a spin of `number` wins a bet on `location`.
    ///
    /// Unknown locations never win.
    #[must_use]
    pub fn covers(&self, location: &str, number: i32) -> bool {
        self.table
            .get(location)
            .is_some_and(|kind| kind.covers(number))
    }

    /// Sum of stakes on locations that `number` wins.
    #[must_use]
    pub fn winning_stake(&self, bet: &BetString, number: i32) -> i64 {
        bet.wagers()
            .iter()
            .filter(|w| self.covers(w.location.as_str(), number))
            .map(|w| i64::from(w.stake))
            .sum()
    }
}
