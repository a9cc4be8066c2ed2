//! Wagerline CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use wagerline_debug::ObservabilityConfig;
use wagerline_engine::{Category, StageSelection};
use wagerline_grammar::WheelConfiguration;
use wagerline_runtime::modules::builtin_registry;
use wagerline_runtime::{Repl, SessionConfig};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    list_stages: bool,
    trace: bool,
    wheel: Option<WheelConfiguration>,
    seed: Option<u64>,
    stages: Vec<(Category, String)>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--list" => config.list_stages = true,
            "--trace" => config.trace = true,
            "--wheel" => {
                i += 1;
                let value = args.get(i).ok_or("--wheel requires a value")?;
                config.wheel = Some(value.parse()?);
            }
            "--seed" => {
                i += 1;
                let value = args.get(i).ok_or("--seed requires a value")?;
                config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {value}"))?,
                );
            }
            "--stage" => {
                i += 1;
                let value = args.get(i).ok_or("--stage requires CATEGORY=LABEL")?;
                let (category, label) = value
                    .split_once('=')
                    .ok_or_else(|| format!("invalid --stage value: {value} (expected CATEGORY=LABEL)"))?;
                config.stages.push((category.parse()?, label.to_string()));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn init_logging(trace: bool) {
    let default = if trace { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("wagerline {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.trace);

    let wheel = config.wheel.unwrap_or_default();
    let seed = config.seed.unwrap_or(0);

    if config.list_stages {
        let registry = builtin_registry(wheel, seed)?;
        for category in Category::PIPELINE.into_iter().chain([Category::Utilities]) {
            println!("\x1b[1m{category}\x1b[0m");
            for label in registry.available(category) {
                println!("    {label}");
            }
        }
        return Ok(());
    }

    let mut session_config = SessionConfig::new().with_wheel(wheel).with_seed(seed);
    if !config.stages.is_empty() {
        let mut selection = StageSelection::new();
        for (category, label) in config.stages {
            selection.push(category, label)?;
        }
        session_config = session_config.with_selection(selection);
    }
    if config.trace {
        session_config = session_config.with_observability(ObservabilityConfig::debug());
    }

    let mut repl = Repl::new(session_config)?;

    for file in &config.files {
        for line in repl.eval_file(file)? {
            println!("{line}");
        }
    }

    if config.batch_mode {
        return Ok(());
    }

    if !config.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mWagerline\x1b[0m - Staged bet-string pipeline for roulette

\x1b[1mUSAGE:\x1b[0m
    wagerline [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Files of spins and control tokens (one per line) to run before the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help                 Print help information
    -V, --version              Print version information
    -b, --batch                Run files and exit (no REPL)
    --wheel N                  Wheel size: 36 (no zero), 37 (single zero), 38 (double zero)
    --seed N                   Seed for the spin generator
    --stage CATEGORY=LABEL     Add a stage (repeatable, in order)
    --list                     List built-in stages and exit

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace            Log stage outcomes and keep a trace (RUST_LOG overrides)

\x1b[1mEXAMPLES:\x1b[0m
    wagerline                                        Start with the default stages
    wagerline --wheel 38                             Use a double-zero wheel
    wagerline -b spins.txt                           Run spins.txt and exit
    wagerline --stage bet=\"Last Dozen\" --stage money=Martingale

\x1b[1mREPL COMMANDS:\x1b[0m
    :help                Control tokens and commands
    :stages              Selected and available stages
    :wheel [N]           Show or change the wheel
    :trace               Recent stage outcomes
    :utility LABEL       Run one utility
    Ctrl+D               Exit REPL"
    );
}
