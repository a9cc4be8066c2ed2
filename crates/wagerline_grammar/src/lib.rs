//! Wheel configurations, betting locations, and bet-string grammar for Wagerline.
//!
//! This crate provides:
//! - [`WheelConfiguration`] - Wheel variant and its legal number range
//! - [`LocationTable`] - The finite set of betable locations for a wheel
//! - [`Wager`] and [`BetString`] - The `stake@location[,stake@location]*` wire format
//! - [`GameGrammar`] - Number and bet-string validation against a wheel
//!
//! # Bet string format
//!
//! ```text
//! ""                  no bet
//! "5@R"               5 units on red
//! "5@R,10@3,2@1-5"    red, straight-up 3, corner 1-2-4-5
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bet;
pub mod grammar;
pub mod layout;
pub mod location;
pub mod wheel;

pub use bet::{BetString, Wager};
pub use grammar::GameGrammar;
pub use layout::{Color, InsideBet, InsideKind, OutsideBet};
pub use location::{Location, LocationKind, LocationTable};
pub use wheel::WheelConfiguration;
