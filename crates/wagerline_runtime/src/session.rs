//! Session state for the REPL.
//!
//! The session owns the grammar, the module registry, the assembled stage
//! sequence, the executor's prior state, and the bet history. Raw inputs and
//! control tokens go in through [`Session::submit`].

use wagerline_debug::{BetHistory, ObservabilityConfig, TraceBuffer};
use wagerline_engine::{
    Category, ModuleRegistry, PipelineExecutor, PipelineRun, StageSelection, StageSequence,
};
use wagerline_foundation::{ControlMessage, Error, Result};
use wagerline_grammar::{BetString, GameGrammar, WheelConfiguration};

use crate::modules;

/// Builds the module registry for a wheel and seed.
///
/// Called again whenever the wheel changes, so stages and utilities that
/// depend on the wheel are rebuilt for it.
pub type RegistryBuilder = Box<dyn Fn(WheelConfiguration, u64) -> Result<ModuleRegistry>>;

// =============================================================================
// Session Config
// =============================================================================

/// Everything needed to start a session.
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    /// Wheel in use.
    pub wheel: WheelConfiguration,
    /// Seed for utilities that draw random numbers.
    pub seed: u64,
    /// Stage labels per category, in order.
    pub selection: StageSelection,
    /// Trace and history settings.
    pub observability: ObservabilityConfig,
}

impl SessionConfig {
    /// Creates a config with the built-in default selection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selection: modules::default_selection(),
            ..Self::default()
        }
    }

    /// Builder method to set the wheel.
    #[must_use]
    pub fn with_wheel(mut self, wheel: WheelConfiguration) -> Self {
        self.wheel = wheel;
        self
    }

    /// Builder method to set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method to set the stage selection.
    #[must_use]
    pub fn with_selection(mut self, selection: StageSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Builder method to set observability.
    #[must_use]
    pub fn with_observability(mut self, observability: ObservabilityConfig) -> Self {
        self.observability = observability;
        self
    }
}

// =============================================================================
// Reply
// =============================================================================

/// What the session did with one submission.
#[derive(Debug)]
pub enum Reply {
    /// A number went through the pipeline (or was ignored).
    Run(PipelineRun),
    /// Undo or redo moved to this bet string. `None` when there was
    /// nothing to move to.
    Restored {
        /// `-U` or `-R`.
        message: ControlMessage,
        /// The bet string now in effect.
        bet: Option<BetString>,
    },
    /// Each utility's output.
    Shown(Vec<(String, Result<String>)>),
    /// History cleared and stages rebuilt.
    NewSession,
    /// A message with no session-level effect.
    Acknowledged(ControlMessage),
    /// Leave, with the farewell.
    Quit,
    /// Leave immediately.
    Halt,
}

// =============================================================================
// Session
// =============================================================================

/// Session state for an interactive or batch run.
pub struct Session {
    config: SessionConfig,
    grammar: GameGrammar,
    builder: RegistryBuilder,
    registry: ModuleRegistry,
    stages: StageSequence,
    executor: PipelineExecutor,
    history: BetHistory,
    trace: TraceBuffer,
    /// Last input that ran the pipeline, for `-L`.
    last_input: Option<String>,
}

impl Session {
    /// Creates a session using the built-in stages.
    ///
    /// # Errors
    ///
    /// Returns `UnknownStage` if the selection names a stage that is not
    /// built in.
    pub fn new(config: SessionConfig) -> Result<Self> {
        Self::with_modules(config, Box::new(modules::builtin_registry))
    }

    /// Creates a session whose registry comes from `builder`.
    ///
    /// # Errors
    ///
    /// Returns the builder's error, or `UnknownStage` for a selected label
    /// the registry does not have.
    pub fn with_modules(config: SessionConfig, builder: RegistryBuilder) -> Result<Self> {
        let registry = builder(config.wheel, config.seed)?;
        let stages = registry.assemble(&config.selection)?;
        tracing::debug!(stages = stages.len(), wheel = config.wheel.size(), "session started");
        Ok(Self {
            grammar: GameGrammar::new(config.wheel),
            history: BetHistory::new(config.observability.history_size),
            trace: TraceBuffer::new(config.observability.trace_size),
            config,
            builder,
            registry,
            stages,
            executor: PipelineExecutor::new(),
            last_input: None,
        })
    }

    /// Returns the session config.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the grammar for the active wheel.
    #[must_use]
    pub const fn grammar(&self) -> &GameGrammar {
        &self.grammar
    }

    /// Returns the module registry.
    #[must_use]
    pub const fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Returns the assembled stages.
    #[must_use]
    pub const fn stages(&self) -> &StageSequence {
        &self.stages
    }

    /// Returns the bet string currently in effect.
    #[must_use]
    pub fn current_bet(&self) -> &BetString {
        self.executor.last()
    }

    /// Returns the bet history.
    #[must_use]
    pub const fn history(&self) -> &BetHistory {
        &self.history
    }

    /// Returns the trace buffer.
    #[must_use]
    pub const fn trace(&self) -> &TraceBuffer {
        &self.trace
    }

    /// Turns stage tracing on or off.
    pub fn set_tracing(&mut self, enabled: bool) {
        self.config.observability.enabled = enabled;
    }

    /// Handles one line: a control token or a raw input.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error for `-L` with nothing to repeat, or if rebuilding
    /// the stages fails.
    pub fn submit(&mut self, line: &str) -> Result<Reply> {
        let line = line.trim();
        match ControlMessage::from_token(line) {
            Some(message) => self.handle(message),
            None => Ok(Reply::Run(self.run(line))),
        }
    }

    /// Runs one raw input through the pipeline.
    pub fn run(&mut self, input: &str) -> PipelineRun {
        let run = self.executor.process(input, &mut self.stages, &self.grammar);
        if self.config.observability.enabled {
            self.trace.record_run(&run);
        }
        if !run.skipped {
            self.history.record(run.run, input, run.bet.clone());
            self.last_input = Some(input.to_string());
        }
        run
    }

    /// Handles a control message.
    ///
    /// Every message is also delivered to the stages and the utilities.
    ///
    /// # Errors
    ///
    /// Returns an error for `-L` with nothing to repeat, or if rebuilding
    /// the stages fails.
    pub fn handle(&mut self, message: ControlMessage) -> Result<Reply> {
        tracing::debug!(%message, "control message");
        self.stages.broadcast(message);
        self.registry.broadcast(message);
        match message {
            ControlMessage::Undo => {
                let bet = self.history.undo().cloned();
                if let Some(bet) = &bet {
                    self.executor.restore(bet.clone());
                }
                Ok(Reply::Restored { message, bet })
            }
            ControlMessage::Redo => {
                let bet = self.history.redo().cloned();
                if let Some(bet) = &bet {
                    self.executor.restore(bet.clone());
                }
                Ok(Reply::Restored { message, bet })
            }
            ControlMessage::Loop => {
                let input = self
                    .last_input
                    .clone()
                    .ok_or_else(|| Error::invalid_argument("no input to repeat"))?;
                Ok(Reply::Run(self.run(&input)))
            }
            ControlMessage::NewSession => {
                self.new_session()?;
                Ok(Reply::NewSession)
            }
            ControlMessage::Show => Ok(Reply::Shown(self.show())),
            ControlMessage::Quit => Ok(Reply::Quit),
            ControlMessage::Halt => Ok(Reply::Halt),
            ControlMessage::Okay | ControlMessage::Error => Ok(Reply::Acknowledged(message)),
        }
    }

    /// Clears history and prior state and rebuilds the stages.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection no longer assembles.
    pub fn new_session(&mut self) -> Result<()> {
        self.stages = self.registry.assemble(&self.config.selection)?;
        self.executor.reset();
        self.history.clear();
        self.trace.clear();
        self.last_input = None;
        tracing::info!("new session");
        Ok(())
    }

    /// Switches the wheel, rebuilding the registry and stages for it.
    ///
    /// Bets from the old wheel may not be legal on the new one, so this
    /// also starts a new session.
    ///
    /// # Errors
    ///
    /// Returns the registry builder's error or `UnknownStage`.
    pub fn set_wheel(&mut self, wheel: WheelConfiguration) -> Result<()> {
        let registry = (self.builder)(wheel, self.config.seed)?;
        self.stages = registry.assemble(&self.config.selection)?;
        self.registry = registry;
        self.grammar.set_wheel(wheel);
        self.config.wheel = wheel;
        tracing::debug!(stages = self.stages.len(), "stages rebuilt for wheel");
        self.executor.reset();
        self.history.clear();
        self.trace.clear();
        self.last_input = None;
        Ok(())
    }

    /// Invokes every utility with the Show message.
    pub fn show(&mut self) -> Vec<(String, Result<String>)> {
        self.registry
            .available(Category::Utilities)
            .into_iter()
            .map(|label| {
                let output = self.registry.invoke_utility(&label);
                (label, output)
            })
            .collect()
    }

    /// Invokes one utility with the Show message.
    ///
    /// # Errors
    ///
    /// Returns `UnknownStage` for an unknown label, or the utility's error.
    pub fn invoke_utility(&mut self, label: &str) -> Result<String> {
        self.registry.invoke_utility(label)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("current", self.executor.last())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
