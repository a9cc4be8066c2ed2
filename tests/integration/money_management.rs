//! Money management integration tests
//!
//! Stages that carry state between runs, driven through a session.

use wagerline_engine::{Category, StageSelection};
use wagerline_runtime::modules::{FLAT_STAKE, LAST_COLOR, LAST_DOZEN, MARTINGALE, SPIN_LOG};
use wagerline_runtime::{Reply, Session, SessionConfig};

fn session(selection: StageSelection) -> Session {
    Session::new(SessionConfig::new().with_selection(selection)).unwrap()
}

fn spin(session: &mut Session, input: &str) -> String {
    match session.submit(input).unwrap() {
        Reply::Run(run) => run.bet.into_string(),
        other => panic!("expected a run, got {other:?}"),
    }
}

fn martingale() -> StageSelection {
    StageSelection::new()
        .with(Category::BetSelection, LAST_COLOR)
        .unwrap()
        .with(Category::MoneyManagement, FLAT_STAKE)
        .unwrap()
        .with(Category::MoneyManagement, MARTINGALE)
        .unwrap()
}

#[test]
fn martingale_doubles_after_a_loss() {
    let mut session = session(martingale());

    assert_eq!(spin(&mut session, "1"), "1@R");
    // 2 is black: the red bet lost
    assert_eq!(spin(&mut session, "2"), "2@B");
    // 4 is black: the black bet won
    assert_eq!(spin(&mut session, "4"), "1@B");
}

#[test]
fn new_session_resets_the_progression() {
    let mut session = session(martingale());
    spin(&mut session, "1");
    assert_eq!(spin(&mut session, "2"), "2@B");

    session.submit("-N").unwrap();
    assert_eq!(spin(&mut session, "2"), "1@B");
}

#[test]
fn several_selectors_share_one_bet() {
    let selection = StageSelection::new()
        .with(Category::Input, SPIN_LOG)
        .unwrap()
        .with(Category::BetSelection, LAST_COLOR)
        .unwrap()
        .with(Category::BetSelection, LAST_DOZEN)
        .unwrap()
        .with(Category::MoneyManagement, FLAT_STAKE)
        .unwrap();
    let mut session = session(selection);

    assert_eq!(spin(&mut session, "14"), "1@R,1@D2");
    assert_eq!(spin(&mut session, "35"), "1@B,1@D3");
    // Zero adds nothing
    assert_eq!(spin(&mut session, "0"), "");
}

#[test]
fn money_management_without_selection_is_no_bet() {
    let selection = StageSelection::new()
        .with(Category::MoneyManagement, MARTINGALE)
        .unwrap();
    let mut session = session(selection);

    assert_eq!(spin(&mut session, "1"), "");
    assert_eq!(spin(&mut session, "2"), "");
}
