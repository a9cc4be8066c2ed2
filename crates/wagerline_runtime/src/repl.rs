//! The main REPL implementation.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use wagerline_engine::{Category, PipelineRun};
use wagerline_foundation::{ControlMessage, Error, Result};
use wagerline_grammar::WheelConfiguration;

use crate::editor::{LineEditor, ReadResult, RustylineEditor, default_keywords};
use crate::session::{Reply, Session, SessionConfig};

/// What the caller should do after one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Print this text and keep going.
    Print(String),
    /// Nothing to print.
    Continue,
    /// Stop reading input.
    Exit {
        /// Whether to say goodbye.
        farewell: bool,
    },
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor or the session fails to initialize.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, Session::new(config)?))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor and session.
    pub fn with_editor(editor: E, session: Session) -> Self {
        let mut repl = Self {
            editor,
            session,
            show_banner: true,
            prompt: "spin> ".to_string(),
        };
        repl.refresh_keywords();
        repl
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        let farewell = loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break true,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.eval(&line) {
                Ok(Action::Print(text)) => println!("{text}"),
                Ok(Action::Continue) => {}
                Ok(Action::Exit { farewell }) => break farewell,
                Err(e) => self.print_error(&e),
            }
        };

        if farewell {
            println!("\nGoodbye!");
        }
        Ok(())
    }

    /// Evaluates one line: a meta command, a control token, or a spin.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed meta commands and session failures.
    pub fn eval(&mut self, line: &str) -> Result<Action> {
        let line = line.trim();
        if let Some(command) = line.strip_prefix(':') {
            return self.meta_command(command);
        }

        let reply = self.session.submit(line)?;
        Ok(match reply {
            Reply::Run(run) => Action::Print(self.format_run(&run)),
            Reply::Restored { message, bet } => Action::Print(match bet {
                Some(bet) => format!("{message}: {}", display_bet(bet.as_str())),
                None if message == ControlMessage::Undo => "nothing to undo".to_string(),
                None => "nothing to redo".to_string(),
            }),
            Reply::Shown(outputs) => Action::Print(format_utilities(&outputs)),
            Reply::NewSession => Action::Print("new session".to_string()),
            Reply::Acknowledged(_) => Action::Continue,
            Reply::Quit => Action::Exit { farewell: true },
            Reply::Halt => Action::Exit { farewell: false },
        })
    }

    /// Feeds every line of a file to the session, one token per line.
    ///
    /// Stops early on `-Q` or `-H`. Returns the output lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn eval_file(&mut self, path: &Path) -> Result<Vec<String>> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::invalid_argument(format!("failed to read {}: {e}", path.display()))
        })?;

        let mut output = Vec::new();
        for line in source.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match self.eval(line) {
                Ok(Action::Print(text)) => output.push(text),
                Ok(Action::Continue) => {}
                Ok(Action::Exit { .. }) => break,
                Err(e) => output.push(format!("error: {e}")),
            }
        }
        Ok(output)
    }

    fn meta_command(&mut self, command: &str) -> Result<Action> {
        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };

        match name {
            "help" => Ok(Action::Print(help_text())),
            "stages" => Ok(Action::Print(self.format_stages())),
            "wheel" if argument.is_empty() => {
                Ok(Action::Print(self.session.grammar().wheel().to_string()))
            }
            "wheel" => {
                let wheel: WheelConfiguration = argument.parse()?;
                self.session.set_wheel(wheel)?;
                self.refresh_keywords();
                Ok(Action::Print(format!("wheel set to {wheel}")))
            }
            "trace" => Ok(Action::Print(self.format_trace())),
            "utility" if argument.is_empty() => {
                Err(Error::invalid_argument(":utility requires a label"))
            }
            "utility" => Ok(Action::Print(self.session.invoke_utility(argument)?)),
            other => Err(Error::invalid_argument(format!(
                "unknown command :{other} (try :help)"
            ))),
        }
    }

    /// Offers control tokens, meta commands, and the wheel's locations.
    fn refresh_keywords(&mut self) {
        let mut keywords = default_keywords();
        keywords.extend(
            self.session
                .grammar()
                .locations()
                .locations()
                .map(ToString::to_string),
        );
        self.editor.set_keywords(keywords);
    }

    fn format_run(&self, run: &PipelineRun) -> String {
        if run.skipped {
            return format!(
                "\x1b[2mignored {:?}; bet stays {}\x1b[0m",
                run.input,
                display_bet(run.bet.as_str())
            );
        }
        let mut text = String::new();
        if self.session.config().observability.echo_reports {
            for report in &run.reports {
                text.push_str(&format!("  {report}\n"));
            }
        }
        text.push_str(&format!("\x1b[1m{}\x1b[0m", display_bet(run.bet.as_str())));
        text
    }

    fn format_stages(&self) -> String {
        let registry = self.session.registry();
        let stages = self.session.stages();
        let mut lines = Vec::new();
        for category in Category::PIPELINE {
            let selected: Vec<_> = stages
                .stages(category)
                .iter()
                .map(|e| e.id().label())
                .collect();
            lines.push(format!(
                "{category}: [{}] available: {}",
                selected.join(" > "),
                registry.available(category).join(", ")
            ));
        }
        lines.push(format!(
            "{}: {}",
            Category::Utilities,
            registry.available(Category::Utilities).join(", ")
        ));
        lines.join("\n")
    }

    fn format_trace(&self) -> String {
        let trace = self.session.trace();
        if !self.session.config().observability.enabled {
            return "tracing is off (start with --trace)".to_string();
        }
        let mut lines: Vec<_> = trace.recent(20).iter().map(ToString::to_string).collect();
        lines.push(trace.stats().to_string());
        lines.join("\n")
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("\x1b[1;36mWagerline v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!(
            "{}. Enter spins, control tokens (-U -R -L -N -S -Q), or :help.\n",
            self.session.grammar().wheel()
        );
        let _ = io::stdout().flush();
    }
}

fn display_bet(bet: &str) -> &str {
    if bet.is_empty() { "(no bet)" } else { bet }
}

fn format_utilities(outputs: &[(String, Result<String>)]) -> String {
    outputs
        .iter()
        .map(|(label, output)| match output {
            Ok(text) => format!("[{label}]\n{text}"),
            Err(e) => format!("[{label}] error: {e}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn help_text() -> String {
    "\
Enter a spin (a number on the active wheel) to run the stage pipeline.

CONTROL TOKENS:
    -U    Undo to the previous bet
    -R    Redo
    -L    Repeat the last accepted spin
    -N    New session (clear history, rebuild stages)
    -S    Show every utility's output
    -K    Acknowledge
    -E    Acknowledge an error
    -Q    Quit
    -H    Halt immediately

COMMANDS:
    :help            This text
    :stages          Selected and available stages
    :wheel [N]       Show or change the wheel (36, 37, 38)
    :trace           Recent stage outcomes
    :utility LABEL   Run one utility"
        .to_string()
}
