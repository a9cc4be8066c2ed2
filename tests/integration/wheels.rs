//! Wheel configuration integration tests

use wagerline_engine::{Category, ModuleRegistry, Stage, StageSelection};
use wagerline_foundation::Result;
use wagerline_grammar::WheelConfiguration;
use wagerline_runtime::modules::builtin_registry;
use wagerline_runtime::{Reply, Session, SessionConfig};

const STRAIGHT_UP: &str = "Straight Up";

/// Built-in stages plus one that bets the spin straight-up.
fn session(wheel: WheelConfiguration) -> Session {
    let selection = StageSelection::new()
        .with(Category::BetSelection, STRAIGHT_UP)
        .unwrap();
    let config = SessionConfig::new()
        .with_wheel(wheel)
        .with_selection(selection);
    Session::with_modules(
        config,
        Box::new(|wheel: WheelConfiguration, seed: u64| -> Result<ModuleRegistry> {
            let mut registry = builtin_registry(wheel, seed)?;
            registry.register(Category::BetSelection, STRAIGHT_UP, || -> Box<dyn Stage> {
                Box::new(|input: &str, _: &str| -> Result<String> { Ok(format!("1@{input}")) })
            })?;
            Ok(registry)
        }),
    )
    .unwrap()
}

fn outcome(session: &mut Session, input: &str) -> Option<String> {
    match session.submit(input).unwrap() {
        Reply::Run(run) if run.skipped => None,
        Reply::Run(run) => Some(run.bet.into_string()),
        other => panic!("expected a run, got {other:?}"),
    }
}

#[test]
fn number_ranges_per_wheel() {
    let mut none = session(WheelConfiguration::NO_ZERO);
    assert_eq!(outcome(&mut none, "0"), None);
    assert_eq!(outcome(&mut none, "36").as_deref(), Some("1@36"));

    let mut single = session(WheelConfiguration::SINGLE_ZERO);
    assert_eq!(outcome(&mut single, "0").as_deref(), Some("1@0"));
    assert_eq!(outcome(&mut single, "37"), None);

    let mut double = session(WheelConfiguration::DOUBLE_ZERO);
    assert_eq!(outcome(&mut double, "37").as_deref(), Some("1@37"));
    assert_eq!(outcome(&mut double, "38"), None);
}

#[test]
fn unrecognized_sizes_behave_like_single_zero() {
    let mut session = session(WheelConfiguration::new(40));
    assert_eq!(outcome(&mut session, "0").as_deref(), Some("1@0"));
    assert_eq!(outcome(&mut session, "37"), None);
}

#[test]
fn changing_the_wheel_rebuilds_stages_and_clears_history() {
    let mut session = session(WheelConfiguration::SINGLE_ZERO);
    outcome(&mut session, "5");
    assert_eq!(outcome(&mut session, "37"), None);

    session.set_wheel(WheelConfiguration::DOUBLE_ZERO).unwrap();
    assert!(session.history().is_empty());
    assert!(session.current_bet().is_empty());
    assert_eq!(outcome(&mut session, "37").as_deref(), Some("1@37"));

    // Back to a wheel without double zero
    session.set_wheel(WheelConfiguration::SINGLE_ZERO).unwrap();
    assert_eq!(outcome(&mut session, "37"), None);
    assert_eq!(session.grammar().wheel(), WheelConfiguration::SINGLE_ZERO);
}
