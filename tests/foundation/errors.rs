//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use wagerline_foundation::{Error, ErrorContext, ErrorKind, GrammarFault};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_number() {
    let err = Error::invalid_number("abc");
    assert!(matches!(err.kind, ErrorKind::InvalidNumber(_)));
    assert!(err.to_string().contains("abc"));
}

#[test]
fn error_invalid_bet_grammar() {
    let err = Error::invalid_bet_grammar("5R", GrammarFault::MissingSeparator);
    if let ErrorKind::InvalidBetGrammar { segment, reason } = &err.kind {
        assert_eq!(segment, "5R");
        assert_eq!(*reason, GrammarFault::MissingSeparator);
    } else {
        panic!("expected InvalidBetGrammar");
    }
    assert!(err.is_grammar_error());
}

#[test]
fn error_unknown_location_is_grammar_error() {
    let err = Error::unknown_location("ZZ");
    assert!(err.is_grammar_error());
    assert!(err.to_string().contains("ZZ"));
}

#[test]
fn error_stage_failed() {
    let err = Error::stage_failed("Martingale", "stake overflow");
    let msg = err.to_string();
    assert!(msg.contains("Martingale"));
    assert!(msg.contains("stake overflow"));
    assert!(!err.is_grammar_error());
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_with_context() {
    let err = Error::unknown_stage("Keyboard").with_context(
        ErrorContext::new()
            .with_source("registry")
            .with_input("Keyboard")
            .with_frame("Input"),
    );
    let context = err.context.as_ref().unwrap();
    assert_eq!(context.source.as_deref(), Some("registry"));
    assert_eq!(context.stack, ["Input"]);
}
