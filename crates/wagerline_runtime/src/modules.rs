//! Built-in stages and utilities.
//!
//! These make the binary usable on its own. Each is a plain [`Stage`]; the
//! registry only sees factories and labels.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use wagerline_engine::{Category, ModuleRegistry, Stage, StageId, StageSelection};
use wagerline_foundation::{ControlMessage, Error, Result};
use wagerline_grammar::{Color, GameGrammar, OutsideBet, Wager, WheelConfiguration};

/// Input: "Spin Log".
pub const SPIN_LOG: &str = "Spin Log";
/// Bet selection: "Last Color".
pub const LAST_COLOR: &str = "Last Color";
/// Bet selection: "Last Dozen".
pub const LAST_DOZEN: &str = "Last Dozen";
/// Money management: "Flat Stake".
pub const FLAT_STAKE: &str = "Flat Stake";
/// Money management: "Martingale".
pub const MARTINGALE: &str = "Martingale";
/// Output: "Announcer".
pub const ANNOUNCER: &str = "Announcer";
/// Utility: "Spin Generator".
pub const SPIN_GENERATOR: &str = "Spin Generator";
/// Utility: "Label Converter".
pub const LABEL_CONVERTER: &str = "Label Converter";

// =============================================================================
// Registration
// =============================================================================

/// Builds a registry holding every built-in stage and utility.
///
/// # Errors
///
/// Returns an error only if a built-in label is registered twice.
pub fn builtin_registry(wheel: WheelConfiguration, seed: u64) -> Result<ModuleRegistry> {
    let mut registry = ModuleRegistry::new();
    registry.register(Category::Input, SPIN_LOG, || -> Box<dyn Stage> {
        Box::new(SpinLog::default())
    })?;
    registry.register(Category::BetSelection, LAST_COLOR, || -> Box<dyn Stage> {
        Box::new(LastColor)
    })?;
    registry.register(Category::BetSelection, LAST_DOZEN, || -> Box<dyn Stage> {
        Box::new(LastDozen)
    })?;
    registry.register(Category::MoneyManagement, FLAT_STAKE, || -> Box<dyn Stage> {
        Box::new(FlatStake::new(1))
    })?;
    registry.register(Category::MoneyManagement, MARTINGALE, || -> Box<dyn Stage> {
        Box::new(Martingale::default())
    })?;
    registry.register(Category::Output, ANNOUNCER, || -> Box<dyn Stage> {
        Box::new(Announcer)
    })?;

    registry.register_utility(SPIN_GENERATOR, SpinGenerator::new(wheel, seed))?;

    let mut labels = Vec::new();
    for category in Category::PIPELINE {
        labels.extend(registry.available(category));
    }
    labels.push(SPIN_GENERATOR.to_string());
    labels.push(LABEL_CONVERTER.to_string());
    registry.register_utility(LABEL_CONVERTER, LabelConverter::new(labels))?;

    Ok(registry)
}

/// The selection used when none is configured.
#[must_use]
pub fn default_selection() -> StageSelection {
    // One stage per pipeline category, in pipeline order
    let labels = [SPIN_LOG, LAST_COLOR, FLAT_STAKE, ANNOUNCER];
    StageSelection::from_pipeline(labels.map(|label| vec![label.to_string()]))
}

// =============================================================================
// Helpers
// =============================================================================

fn spin(stage: &str, input: &str) -> Result<i32> {
    input
        .parse()
        .map_err(|_| Error::stage_failed(stage, format!("not a spin: {input:?}")))
}

fn wagers(previous: &str) -> Result<Vec<Wager>> {
    if previous.is_empty() {
        return Ok(Vec::new());
    }
    previous.split(',').map(str::parse).collect()
}

fn append(previous: &str, wager: &Wager) -> String {
    if previous.is_empty() {
        wager.to_string()
    } else {
        format!("{previous},{wager}")
    }
}

// =============================================================================
// Input
// =============================================================================

/// Records every spin and passes the bet string through.
#[derive(Debug, Default)]
pub struct SpinLog {
    spins: Vec<i32>,
}

impl SpinLog {
    /// Spins seen this session, oldest first.
    #[must_use]
    pub fn spins(&self) -> &[i32] {
        &self.spins
    }
}

impl Stage for SpinLog {
    fn transform(&mut self, input: &str, previous: &str) -> Result<String> {
        self.spins.push(spin(SPIN_LOG, input)?);
        tracing::debug!(spins = self.spins.len(), "spin logged");
        Ok(previous.to_string())
    }

    fn on_message(&mut self, message: ControlMessage) {
        if message == ControlMessage::NewSession {
            self.spins.clear();
        }
    }
}

// =============================================================================
// Bet Selection
// =============================================================================

/// Bets one unit on the color that just hit. Green adds nothing.
#[derive(Debug, Default)]
pub struct LastColor;

impl Stage for LastColor {
    fn transform(&mut self, input: &str, previous: &str) -> Result<String> {
        let bet = match Color::of(spin(LAST_COLOR, input)?) {
            Color::Red => OutsideBet::Red,
            Color::Black => OutsideBet::Black,
            Color::Green => return Ok(previous.to_string()),
        };
        Ok(append(previous, &Wager::new(1, bet.code())))
    }
}

/// Bets one unit on the dozen that just hit. Zero adds nothing.
#[derive(Debug, Default)]
pub struct LastDozen;

impl Stage for LastDozen {
    fn transform(&mut self, input: &str, previous: &str) -> Result<String> {
        match OutsideBet::dozen_of(spin(LAST_DOZEN, input)?) {
            Some(dozen) => Ok(append(previous, &Wager::new(1, OutsideBet::Dozen(dozen).code()))),
            None => Ok(previous.to_string()),
        }
    }
}

// =============================================================================
// Money Management
// =============================================================================

/// Sets every stake to a fixed unit.
#[derive(Debug)]
pub struct FlatStake {
    unit: i32,
}

impl FlatStake {
    /// Creates the stage with a unit stake.
    #[must_use]
    pub const fn new(unit: i32) -> Self {
        Self { unit }
    }
}

impl Stage for FlatStake {
    fn transform(&mut self, _input: &str, previous: &str) -> Result<String> {
        let mut wagers = wagers(previous)?;
        for wager in &mut wagers {
            wager.stake = self.unit;
        }
        Ok(Wager::join(&wagers))
    }
}

/// Doubles stakes after a losing spin and resets after a winning one.
#[derive(Debug)]
pub struct Martingale {
    /// Every location of every wheel, for settling the last bet.
    layout: GameGrammar,
    multiplier: i32,
    last: Vec<Wager>,
}

impl Martingale {
    /// Multiplier ceiling; the progression restarts past it.
    pub const MAX_MULTIPLIER: i32 = 1024;

    /// Current stake multiplier.
    #[must_use]
    pub const fn multiplier(&self) -> i32 {
        self.multiplier
    }
}

impl Default for Martingale {
    fn default() -> Self {
        Self {
            layout: GameGrammar::new(WheelConfiguration::DOUBLE_ZERO),
            multiplier: 1,
            last: Vec::new(),
        }
    }
}

impl Stage for Martingale {
    fn transform(&mut self, input: &str, previous: &str) -> Result<String> {
        let number = spin(MARTINGALE, input)?;
        if !self.last.is_empty() {
            let won = self
                .last
                .iter()
                .any(|w| self.layout.covers(w.location.as_str(), number));
            self.multiplier = if won || self.multiplier >= Self::MAX_MULTIPLIER {
                1
            } else {
                self.multiplier * 2
            };
        }

        let mut wagers = wagers(previous)?;
        for wager in &mut wagers {
            wager.stake = wager
                .stake
                .checked_mul(self.multiplier)
                .ok_or_else(|| Error::stage_failed(MARTINGALE, "stake overflow"))?;
        }
        tracing::debug!(multiplier = self.multiplier, "martingale progression");
        self.last.clone_from(&wagers);
        Ok(Wager::join(&wagers))
    }

    fn on_message(&mut self, message: ControlMessage) {
        if message == ControlMessage::NewSession {
            self.multiplier = 1;
            self.last.clear();
        }
    }
}

// =============================================================================
// Output
// =============================================================================

/// Announces the final bet through the log and passes it through.
#[derive(Debug, Default)]
pub struct Announcer;

impl Stage for Announcer {
    fn transform(&mut self, input: &str, previous: &str) -> Result<String> {
        if previous.is_empty() {
            tracing::info!(spin = input, "no bet");
        } else {
            tracing::info!(spin = input, bet = previous, "bet placed");
        }
        Ok(previous.to_string())
    }
}

// =============================================================================
// Utilities
// =============================================================================

/// Produces reproducible random spins for the active wheel.
#[derive(Debug)]
pub struct SpinGenerator {
    wheel: WheelConfiguration,
    seed: u64,
    rng: ChaCha8Rng,
}

impl SpinGenerator {
    /// Creates a generator seeded with `seed`.
    #[must_use]
    pub fn new(wheel: WheelConfiguration, seed: u64) -> Self {
        Self {
            wheel,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws the next spin.
    pub fn next_spin(&mut self) -> i32 {
        self.rng.gen_range(self.wheel.numbers())
    }
}

impl Stage for SpinGenerator {
    fn transform(&mut self, _input: &str, _previous: &str) -> Result<String> {
        Ok(self.next_spin().to_string())
    }

    fn on_message(&mut self, message: ControlMessage) {
        if message == ControlMessage::NewSession {
            self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        }
    }
}

/// Lists display labels next to their storage tokens.
#[derive(Debug)]
pub struct LabelConverter {
    ids: Vec<StageId>,
}

impl LabelConverter {
    /// Creates the converter for a set of labels.
    #[must_use]
    pub fn new(labels: impl IntoIterator<Item = String>) -> Self {
        Self {
            ids: labels.into_iter().map(|l| StageId::from_label(&l)).collect(),
        }
    }
}

impl Stage for LabelConverter {
    fn transform(&mut self, input: &str, _previous: &str) -> Result<String> {
        if input != ControlMessage::Show.token() {
            return Ok(StageId::from_label(input).token().to_string());
        }
        Ok(self
            .ids
            .iter()
            .map(|id| format!("{} => {}", id.label(), id.token()))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

// =============================================================================
// Tests
// =============================================================================
