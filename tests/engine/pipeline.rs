//! Pipeline run integration tests
//!
//! Drives assembled sequences through the executor against real grammars.

use wagerline_engine::{
    Category, ModuleRegistry, PipelineExecutor, Stage, StageOutcome, StageSelection,
    StageSequence,
};
use wagerline_foundation::{ControlMessage, Error, Result};
use wagerline_grammar::{GameGrammar, WheelConfiguration};

/// Bets one unit straight-up on the input number.
fn straight_up(input: &str, previous: &str) -> Result<String> {
    let wager = format!("1@{input}");
    Ok(if previous.is_empty() {
        wager
    } else {
        format!("{previous},{wager}")
    })
}

/// Replaces every stake with 5.
fn five_units(_: &str, previous: &str) -> Result<String> {
    Ok(previous
        .split(',')
        .filter(|s| !s.is_empty())
        .map(|s| match s.split_once('@') {
            Some((_, location)) => format!("5@{location}"),
            None => s.to_string(),
        })
        .collect::<Vec<_>>()
        .join(","))
}

fn sequence() -> StageSequence {
    StageSequence::new()
        .with_stage(Category::Output, "Shout", |_: &str, previous: &str| -> Result<String> {
            Ok(previous.to_uppercase())
        })
        .unwrap()
        .with_stage(Category::MoneyManagement, "Five Units", five_units)
        .unwrap()
        .with_stage(Category::BetSelection, "Straight Up", straight_up)
        .unwrap()
        .with_stage(Category::BetSelection, "Red", |_: &str, previous: &str| -> Result<String> {
            Ok(format!("{previous},1@R"))
        })
        .unwrap()
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn categories_run_in_pipeline_order() {
    let grammar = GameGrammar::default();
    let mut stages = sequence();
    let mut executor = PipelineExecutor::new();

    let run = executor.process("17", &mut stages, &grammar);

    let order: Vec<_> = run.reports.iter().map(|r| r.stage.label()).collect();
    assert_eq!(order, vec!["Straight Up", "Red", "Five Units", "Shout"]);
    assert_eq!(run.bet, "5@17,5@R");
    assert_eq!(run.rollbacks(), 0);
}

#[test]
fn reports_track_the_current_bet() {
    let grammar = GameGrammar::default();
    let mut stages = sequence();
    let mut executor = PipelineExecutor::new();

    let run = executor.process("4", &mut stages, &grammar);

    let currents: Vec<_> = run.reports.iter().map(|r| r.current.as_str()).collect();
    assert_eq!(currents, vec!["1@4", "1@4,1@R", "5@4,5@R", "5@4,5@R"]);
}

// =============================================================================
// Wheels
// =============================================================================

#[test]
fn wheel_decides_what_is_accepted() {
    let mut executor = PipelineExecutor::new();
    let mut stages = StageSequence::new()
        .with_stage(Category::BetSelection, "Straight Up", straight_up)
        .unwrap();

    // 37 is double zero: a legal spin and location only on a 38 wheel
    let single = GameGrammar::new(WheelConfiguration::SINGLE_ZERO);
    let run = executor.process("37", &mut stages, &single);
    assert!(run.skipped);

    let double = GameGrammar::new(WheelConfiguration::DOUBLE_ZERO);
    let run = executor.process("37", &mut stages, &double);
    assert!(!run.skipped);
    assert_eq!(run.bet, "1@37");

    // No zero pocket on a 36 wheel
    let no_zero = GameGrammar::new(WheelConfiguration::NO_ZERO);
    assert!(executor.process("0", &mut stages, &no_zero).skipped);
    assert_eq!(executor.last(), &run.bet);
}

#[test]
fn proposal_naming_unknown_location_rolls_back() {
    let grammar = GameGrammar::default();
    let mut executor = PipelineExecutor::new();
    let mut stages = StageSequence::new()
        .with_stage(Category::BetSelection, "Red", |_: &str, _: &str| -> Result<String> {
            Ok("1@R".to_string())
        })
        .unwrap()
        .with_stage(Category::BetSelection, "Typo", |_: &str, previous: &str| -> Result<String> {
            Ok(format!("{previous},1@RED"))
        })
        .unwrap();

    let run = executor.process("1", &mut stages, &grammar);

    assert_eq!(run.bet, "1@R");
    assert!(matches!(
        run.reports[1].outcome,
        StageOutcome::Rejected { ref candidate, .. } if candidate == "1@R,1@RED"
    ));
}

// =============================================================================
// Registry-Built Pipelines
// =============================================================================

#[test]
fn assembled_stages_keep_state_between_runs() {
    let mut registry = ModuleRegistry::new();
    registry
        .register(Category::BetSelection, "Previous Spin", || -> Box<dyn Stage> {
            let mut last: Option<String> = None;
            Box::new(move |input: &str, _: &str| -> Result<String> {
                let bet = last.as_ref().map(|n| format!("1@{n}")).unwrap_or_default();
                last = Some(input.to_string());
                Ok(bet)
            })
        })
        .unwrap();
    let selection = StageSelection::new()
        .with(Category::BetSelection, "Previous Spin")
        .unwrap();
    let mut stages = registry.assemble(&selection).unwrap();
    let grammar = GameGrammar::default();
    let mut executor = PipelineExecutor::new();

    assert_eq!(executor.process("8", &mut stages, &grammar).bet, "");
    assert_eq!(executor.process("12", &mut stages, &grammar).bet, "1@8");
    // Invalid input does not reach the stage
    executor.process("99", &mut stages, &grammar);
    assert_eq!(executor.process("3", &mut stages, &grammar).bet, "1@12");

    // A fresh assembly starts over
    let mut fresh = registry.assemble(&selection).unwrap();
    assert_eq!(executor.process("5", &mut fresh, &grammar).bet, "");
}

#[test]
fn broadcast_reaches_assembled_stages() {
    struct Counter {
        seen: usize,
    }

    impl Stage for Counter {
        fn transform(&mut self, _: &str, _: &str) -> Result<String> {
            if self.seen == 0 {
                Ok(String::new())
            } else {
                Err(Error::stage_failed("Counter", format!("saw {} messages", self.seen)))
            }
        }

        fn on_message(&mut self, _message: ControlMessage) {
            self.seen += 1;
        }
    }

    let mut stages = StageSequence::new()
        .with_stage(Category::Output, "Counter", Counter { seen: 0 })
        .unwrap();
    let grammar = GameGrammar::default();
    let mut executor = PipelineExecutor::new();

    assert!(executor.process("1", &mut stages, &grammar).reports[0].outcome.is_accepted());

    stages.broadcast(ControlMessage::NewSession);
    let run = executor.process("1", &mut stages, &grammar);
    assert!(matches!(run.reports[0].outcome, StageOutcome::Failed { .. }));
    assert_eq!(run.bet, "");
}
