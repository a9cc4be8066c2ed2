//! Integration tests for bet strings and settlement

use wagerline_foundation::{ErrorKind, GrammarFault};
use wagerline_grammar::{GameGrammar, Wager, WheelConfiguration};

#[test]
fn empty_means_no_bet() {
    let g = GameGrammar::default();
    assert!(g.validate_bet_string(""));
    let bet = g.accept("").unwrap();
    assert!(bet.is_empty());
    assert_eq!(bet.total_stake(), 0);
}

#[test]
fn stakes_are_only_checked_for_integer_ness() {
    let g = GameGrammar::default();
    assert!(g.validate_bet_string("0@R"));
    assert!(g.validate_bet_string("-5@R"));
    assert!(g.validate_bet_string("2147483647@R"));
    assert!(!g.validate_bet_string("2147483648@R"));
    assert!(!g.validate_bet_string("1.5@R"));
    assert!(!g.validate_bet_string(" 1@R"));
}

#[test]
fn separators() {
    let g = GameGrammar::default();
    assert!(!g.validate_bet_string("1@@R"));
    assert!(!g.validate_bet_string("1@R@B"));
    assert!(!g.validate_bet_string("1@R,,1@B"));
    assert!(!g.validate_bet_string("1@R;1@B"));
    assert!(g.validate_bet_string("1@R,1@R"));
}

#[test]
fn diagnostics_name_the_segment() {
    let g = GameGrammar::default();
    let err = g.check_bet_string("1@R,oops,1@ZZ").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidBetGrammar { ref segment, reason: GrammarFault::MissingSeparator }
            if segment == "oops"
    ));

    let err = g.check_bet_string("1@R,x@B").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidBetGrammar { reason: GrammarFault::NonNumericStake, .. }
    ));

    let err = g.check_bet_string("1@R,1@ZZ").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownLocation(ref l) if l == "ZZ"));
}

#[test]
fn wagers_round_trip_through_join() {
    let g = GameGrammar::new(WheelConfiguration::DOUBLE_ZERO);
    let wagers = vec![Wager::new(5, "R"), Wager::new(1, "0-37"), Wager::new(2, "37")];
    let bet = g.accept(Wager::join(&wagers)).unwrap();
    assert_eq!(bet, "5@R,1@0-37,2@37");
    assert_eq!(bet.wagers(), wagers.as_slice());
}

#[test]
fn settlement() {
    let g = GameGrammar::default();
    let bet = g.accept("5@R,3@D1,1@1-2,2@0").unwrap();
    // 1 is red, first dozen, in the split
    assert_eq!(g.winning_stake(&bet, 1), 9);
    // 0 wins only the straight-up
    assert_eq!(g.winning_stake(&bet, 0), 2);
    // 20 is black, second dozen
    assert_eq!(g.winning_stake(&bet, 20), 0);
    assert!(!g.covers("ZZ", 1));
}
