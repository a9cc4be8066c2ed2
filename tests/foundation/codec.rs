//! Integration tests for the identifier codec
//!
//! Tests encoding, decoding, and malformed-run handling.

use proptest::prelude::*;
use wagerline_foundation::{decode_identifier, encode_identifier};

// =============================================================================
// Encoding
// =============================================================================

#[test]
fn letters_pass_through() {
    assert_eq!(encode_identifier("Martingale"), "Martingale");
    assert_eq!(encode_identifier(""), "");
}

#[test]
fn everything_else_is_escaped() {
    assert_eq!(encode_identifier("Last Color"), "Last_32_Color");
    assert_eq!(encode_identifier("D'Alembert 2"), "D_39_Alembert_32__50_");
    assert_eq!(encode_identifier("_"), "_95_");
    assert_eq!(encode_identifier("é"), "_233_");
}

#[test]
fn output_is_storage_safe() {
    let encoded = encode_identifier("Fibonacci (reverse) #3 ★");
    assert!(encoded.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
}

// =============================================================================
// Decoding
// =============================================================================

#[test]
fn decodes_escaped_runs() {
    assert_eq!(decode_identifier("Flat_32_Stake"), "Flat Stake");
    assert_eq!(decode_identifier("_9733_"), "★");
}

#[test]
fn malformed_runs_are_kept() {
    // Surrogate code point
    assert_eq!(decode_identifier("a_55296_b"), "a_55296_b");
    // Past u32
    assert_eq!(decode_identifier("_99999999999_"), "_99999999999_");
    // Not a run at all
    assert_eq!(decode_identifier("a_b"), "a_b");
    assert_eq!(decode_identifier("trailing_"), "trailing_");
    assert_eq!(decode_identifier("_12"), "_12");
}

#[test]
fn adjacent_runs() {
    assert_eq!(decode_identifier("_49__50_"), "12");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn round_trip(display in any::<String>()) {
        prop_assert_eq!(decode_identifier(&encode_identifier(&display)), display);
    }

    #[test]
    fn decode_never_panics(token in "[A-Za-z0-9_]{0,40}") {
        let _ = decode_identifier(&token);
    }
}
