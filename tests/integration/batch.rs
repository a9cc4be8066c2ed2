//! Batch evaluation integration tests
//!
//! Files of spins and control tokens fed through the REPL evaluator.

use std::fs;
use std::path::PathBuf;

use wagerline_foundation::Result;
use wagerline_runtime::{LineEditor, ReadResult, Repl, Session, SessionConfig};

/// An editor with no input.
struct NoInput;

impl LineEditor for NoInput {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(ReadResult::Eof)
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

fn repl() -> Repl<NoInput> {
    let session = Session::new(SessionConfig::new()).unwrap();
    Repl::with_editor(NoInput, session).without_banner()
}

fn script(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "wagerline-{}-{name}.txt",
        std::process::id()
    ));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn file_runs_line_by_line() {
    let path = script("lines", "1\n\n   2  \n-U\nbogus\n");
    let mut repl = repl();

    let output = repl.eval_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(output.len(), 4);
    assert!(output[0].contains("1@R"));
    assert!(output[1].contains("1@B"));
    assert!(output[2].starts_with("-U: 1@R"));
    assert!(output[3].contains("ignored"));
    assert_eq!(repl.session().history().len(), 2);
}

#[test]
fn quit_stops_the_file() {
    let path = script("quit", "1\n-Q\n2\n3\n");
    let mut repl = repl();

    let output = repl.eval_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(output.len(), 1);
    assert_eq!(repl.session().history().len(), 1);
}

#[test]
fn errors_are_reported_inline() {
    let path = script("errors", "-L\n:wheel nope\n3\n");
    let mut repl = repl();

    let output = repl.eval_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(output.len(), 3);
    assert!(output[0].starts_with("error:"));
    assert!(output[1].starts_with("error:"));
    assert!(output[2].contains("1@R"));
}

#[test]
fn meta_commands_apply_between_spins() {
    let path = script("wheel", "37\n:wheel 38\n37\n:stages\n");
    let mut repl = repl();

    let output = repl.eval_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(output[0].contains("ignored"));
    assert!(output[1].starts_with("wheel set to 38-pocket"));
    // Double zero is green: no color bet
    assert!(output[2].contains("(no bet)"));
    assert!(!output[2].contains("ignored"));
    assert!(output[3].contains("Output: [Announcer]"));
}

#[test]
fn missing_file_is_an_error() {
    let mut repl = repl();
    assert!(repl.eval_file(&std::env::temp_dir().join("wagerline-missing.txt")).is_err());
}
