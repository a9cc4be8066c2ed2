//! The roulette table layout.
//!
//! Outside bets are named by short codes. Inside combinations are written as
//! `low-high`, where the distance between the two ends identifies the shape
//! on the standard 3x12 grid:
//!
//! | shape     | numbers          | token  |
//! |-----------|------------------|--------|
//! | split     | 1 2              | `1-2`  |
//! | street    | 1 2 3            | `1-3`  |
//! | split     | 1 4              | `1-4`  |
//! | corner    | 1 2 4 5          | `1-5`  |
//! | six line  | 1 2 3 4 5 6      | `1-6`  |
//!
//! Zero-adjacent splits (`0-1`, `0-2`, `0-3`, and `0-37` for double zero)
//! exist only on wheels that have those pockets.

use std::fmt;

use crate::wheel::WheelConfiguration;

/// Red numbers on the standard layout.
pub const RED_NUMBERS: [i32; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// The number used for the double-zero pocket.
pub const DOUBLE_ZERO: i32 = 37;

// =============================================================================
// Color
// =============================================================================

/// Pocket color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red pocket.
    Red,
    /// Black pocket.
    Black,
    /// Zero and double zero.
    Green,
}

impl Color {
    /// Returns the color of a pocket.
    #[must_use]
    pub fn of(n: i32) -> Self {
        if !(1..=36).contains(&n) {
            Self::Green
        } else if RED_NUMBERS.contains(&n) {
            Self::Red
        } else {
            Self::Black
        }
    }
}

// =============================================================================
// Outside Bets
// =============================================================================

/// Outside bets, each with a fixed code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutsideBet {
    /// `B`
    Black,
    /// `R`
    Red,
    /// `L`, 1 through 18.
    Low,
    /// `H`, 19 through 36.
    High,
    /// `E`
    Even,
    /// `O`
    Odd,
    /// `D1`..`D3`
    Dozen(u8),
    /// `C1`..`C3`
    Column(u8),
}

impl OutsideBet {
    /// Every outside bet, named bets first.
    pub const ALL: [Self; 12] = [
        Self::Black,
        Self::Red,
        Self::Low,
        Self::High,
        Self::Even,
        Self::Odd,
        Self::Dozen(1),
        Self::Dozen(2),
        Self::Dozen(3),
        Self::Column(1),
        Self::Column(2),
        Self::Column(3),
    ];

    /// Returns the location code.
    #[must_use]
    pub fn code(self) -> String {
        match self {
            Self::Black => "B".to_string(),
            Self::Red => "R".to_string(),
            Self::Low => "L".to_string(),
            Self::High => "H".to_string(),
            Self::Even => "E".to_string(),
            Self::Odd => "O".to_string(),
            Self::Dozen(d) => format!("D{d}"),
            Self::Column(c) => format!("C{c}"),
        }
    }

    /// Looks up an outside bet by code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bet| bet.code() == code)
    }

    /// Returns the dozen (1-3) containing `n`, if any.
    #[must_use]
    pub fn dozen_of(n: i32) -> Option<u8> {
        match n {
            1..=12 => Some(1),
            13..=24 => Some(2),
            25..=36 => Some(3),
            _ => None,
        }
    }

    /// Returns the column (1-3) containing `n`, if any.
    #[must_use]
    pub fn column_of(n: i32) -> Option<u8> {
        match n {
            1..=36 => Some(match n % 3 {
                1 => 1,
                2 => 2,
                _ => 3,
            }),
            _ => None,
        }
    }

    /// Returns true if a spin of `n` wins this bet.
    #[must_use]
    pub fn covers(self, n: i32) -> bool {
        if !(1..=36).contains(&n) {
            return false;
        }
        match self {
            Self::Black => Color::of(n) == Color::Black,
            Self::Red => Color::of(n) == Color::Red,
            Self::Low => n <= 18,
            Self::High => n >= 19,
            Self::Even => n % 2 == 0,
            Self::Odd => n % 2 == 1,
            Self::Dozen(d) => Self::dozen_of(n) == Some(d),
            Self::Column(c) => Self::column_of(n) == Some(c),
        }
    }
}

impl fmt::Display for OutsideBet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

// =============================================================================
// Inside Bets
// =============================================================================

/// Shape of an inside combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InsideKind {
    /// Two adjacent numbers.
    Split,
    /// Three numbers in a row.
    Street,
    /// Four numbers meeting at a corner.
    Corner,
    /// Two adjacent streets.
    SixLine,
    /// Zero (or double zero) with a neighbour.
    ZeroSplit,
}

/// A multi-number inside combination.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InsideBet {
    kind: InsideKind,
    numbers: Vec<i32>,
}

impl InsideBet {
    fn new(kind: InsideKind, numbers: Vec<i32>) -> Self {
        Self { kind, numbers }
    }

    /// Returns the shape of this combination.
    #[must_use]
    pub const fn kind(&self) -> InsideKind {
        self.kind
    }

    /// Returns the covered numbers, ascending.
    #[must_use]
    pub fn numbers(&self) -> &[i32] {
        &self.numbers
    }

    /// Returns the `low-high` location token.
    #[must_use]
    pub fn token(&self) -> String {
        let low = self.numbers.first().copied().unwrap_or_default();
        let high = self.numbers.last().copied().unwrap_or_default();
        format!("{low}-{high}")
    }

    /// Returns true if a spin of `n` wins this bet.
    #[must_use]
    pub fn covers(&self, n: i32) -> bool {
        self.numbers.contains(&n)
    }

    /// All combinations on the 1-36 grid. Identical for every wheel.
    #[must_use]
    pub fn grid() -> Vec<Self> {
        let mut bets = Vec::new();
        for a in 1..=36 {
            let top = a % 3 == 0;
            let row_start = a % 3 == 1;
            if !top {
                bets.push(Self::new(InsideKind::Split, vec![a, a + 1]));
            }
            if a <= 33 {
                bets.push(Self::new(InsideKind::Split, vec![a, a + 3]));
            }
            if row_start && a <= 34 {
                bets.push(Self::new(InsideKind::Street, vec![a, a + 1, a + 2]));
            }
            if !top && a <= 32 {
                bets.push(Self::new(
                    InsideKind::Corner,
                    vec![a, a + 1, a + 3, a + 4],
                ));
            }
            if row_start && a <= 31 {
                bets.push(Self::new(InsideKind::SixLine, (a..=a + 5).collect()));
            }
        }
        bets
    }

    /// Zero-adjacent splits available on `wheel`.
    #[must_use]
    pub fn zero_adjacent(wheel: WheelConfiguration) -> Vec<Self> {
        let mut bets = Vec::new();
        if wheel.has_zero() {
            for n in 1..=3 {
                bets.push(Self::new(InsideKind::ZeroSplit, vec![0, n]));
            }
        }
        if wheel.has_double_zero() {
            bets.push(Self::new(InsideKind::ZeroSplit, vec![0, DOUBLE_ZERO]));
        }
        bets
    }
}
