//! Integration tests for number validation

use wagerline_grammar::{GameGrammar, WheelConfiguration};

fn grammar(size: u32) -> GameGrammar {
    GameGrammar::new(WheelConfiguration::new(size))
}

#[test]
fn range_per_wheel() {
    let cases = [(36, 1, 36), (37, 0, 36), (38, 0, 37), (0, 0, 36), (40, 0, 36)];
    for (size, low, high) in cases {
        let g = grammar(size);
        assert!(g.validate_number(low), "{size}: {low} should be legal");
        assert!(g.validate_number(high), "{size}: {high} should be legal");
        assert!(!g.validate_number(low - 1), "{size}: {} should be illegal", low - 1);
        assert!(!g.validate_number(high + 1), "{size}: {} should be illegal", high + 1);
    }
}

#[test]
fn strings_are_integer_parsed() {
    let g = grammar(37);
    assert_eq!(g.check_number("17").unwrap(), 17);
    assert!(g.check_number("+17").is_ok());
    for bad in ["", " 17", "17 ", "0x11", "17.0", "seventeen", "-0.5", "99999999999"] {
        assert!(!g.validate_number_str(bad), "{bad:?} should be invalid");
    }
}

#[test]
fn double_zero_is_thirty_seven() {
    assert!(grammar(38).validate_number_str("37"));
    assert!(!grammar(37).validate_number_str("37"));
}
