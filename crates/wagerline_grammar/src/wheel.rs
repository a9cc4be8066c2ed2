//! Wheel configurations.
//!
//! The configuration is a plain pocket count. Only 36 and 38 get their own
//! number range; every other value is treated as a single-zero wheel
//! (`0..=36`), whatever size it declares.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use wagerline_foundation::Error;

/// Selects the wheel variant and therefore the legal number range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WheelConfiguration(u32);

impl WheelConfiguration {
    /// Numbers 1 through 36, no zero pocket.
    pub const NO_ZERO: Self = Self(36);
    /// European wheel, 0 through 36.
    pub const SINGLE_ZERO: Self = Self(37);
    /// American wheel, 0 through 36 plus double zero (written as 37).
    pub const DOUBLE_ZERO: Self = Self(38);

    /// Creates a configuration from a pocket count.
    #[must_use]
    pub const fn new(size: u32) -> Self {
        Self(size)
    }

    /// Returns the declared pocket count.
    #[must_use]
    pub const fn size(self) -> u32 {
        self.0
    }

    /// Lowest legal number (inclusive).
    #[must_use]
    pub const fn lower_bound(self) -> i32 {
        if self.0 == 36 { 1 } else { 0 }
    }

    /// One past the highest legal number.
    #[must_use]
    pub const fn upper_bound(self) -> i32 {
        match self.0 {
            36 => 37,
            38 => 38,
            _ => 37,
        }
    }

    /// The legal numbers as a half-open range.
    #[must_use]
    pub const fn numbers(self) -> Range<i32> {
        self.lower_bound()..self.upper_bound()
    }

    /// Returns true if `n` is a legal number on this wheel.
    #[must_use]
    pub const fn contains(self, n: i32) -> bool {
        n >= self.lower_bound() && n < self.upper_bound()
    }

    /// Returns true if the wheel has a zero pocket.
    #[must_use]
    pub const fn has_zero(self) -> bool {
        self.lower_bound() == 0
    }

    /// Returns true if the wheel has a double-zero pocket.
    #[must_use]
    pub const fn has_double_zero(self) -> bool {
        self.upper_bound() == 38
    }
}

impl Default for WheelConfiguration {
    fn default() -> Self {
        Self::SINGLE_ZERO
    }
}

impl fmt::Display for WheelConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-pocket wheel ({}..={})",
            self.0,
            self.lower_bound(),
            self.upper_bound() - 1
        )
    }
}

impl FromStr for WheelConfiguration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self).map_err(|e| {
            Error::invalid_argument(format!("invalid wheel configuration {s:?}: {e}"))
        })
    }
}
