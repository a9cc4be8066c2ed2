//! Registry assembly integration tests

use wagerline_engine::{Category, ModuleRegistry, Stage, StageSelection};
use wagerline_foundation::{ErrorKind, Result, decode_identifier};

fn constant(bet: &'static str) -> impl Fn() -> Box<dyn Stage> {
    move || -> Box<dyn Stage> {
        Box::new(move |_: &str, _: &str| -> Result<String> { Ok(bet.to_string()) })
    }
}

// =============================================================================
// Labels and Tokens
// =============================================================================

#[test]
fn labels_survive_encoding() {
    let mut registry = ModuleRegistry::new();
    for label in ["Last Color", "Flat-Stake", "1 2_3", "\u{3b1}\u{3b2}"] {
        registry
            .register(Category::BetSelection, label, constant(""))
            .unwrap();
    }

    assert_eq!(
        registry.available(Category::BetSelection),
        vec!["Last Color", "Flat-Stake", "1 2_3", "\u{3b1}\u{3b2}"]
    );
    assert!(registry.contains(Category::BetSelection, "1 2_3"));
    assert!(!registry.contains(Category::BetSelection, "1_2_3"));
}

#[test]
fn same_label_in_different_categories() {
    let mut registry = ModuleRegistry::new();
    registry.register(Category::Input, "Echo", constant("")).unwrap();
    registry.register(Category::Output, "Echo", constant("")).unwrap();

    assert!(registry.contains(Category::Input, "Echo"));
    assert!(registry.contains(Category::Output, "Echo"));
    assert!(!registry.contains(Category::MoneyManagement, "Echo"));
}

#[test]
fn assembled_ids_decode_to_labels() {
    let mut registry = ModuleRegistry::new();
    registry
        .register(Category::MoneyManagement, "Flat Stake", constant(""))
        .unwrap();
    let selection = StageSelection::new()
        .with(Category::MoneyManagement, "Flat Stake")
        .unwrap();

    let sequence = registry.assemble(&selection).unwrap();
    let (category, entry) = sequence.iter().next().unwrap();
    assert_eq!(category, Category::MoneyManagement);
    assert_eq!(decode_identifier(entry.id().token()), "Flat Stake");
    assert_eq!(entry.id().to_string(), "Flat Stake");
}

// =============================================================================
// Assembly Errors
// =============================================================================

#[test]
fn unknown_label_in_wrong_category() {
    let mut registry = ModuleRegistry::new();
    registry
        .register(Category::BetSelection, "Last Color", constant(""))
        .unwrap();
    let selection = StageSelection::new()
        .with(Category::MoneyManagement, "Last Color")
        .unwrap();

    let err = registry.assemble(&selection).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownStage(ref l) if l == "Last Color"));
}

#[test]
fn utilities_stay_out_of_the_pipeline() {
    let mut registry = ModuleRegistry::new();
    registry
        .register_utility("Tool", |_: &str, _: &str| -> Result<String> { Ok("done".to_string()) })
        .unwrap();

    assert!(StageSelection::new().with(Category::Utilities, "Tool").is_err());
    assert_eq!(registry.available(Category::Utilities), vec!["Tool"]);
    assert_eq!(registry.invoke_utility("Tool").unwrap(), "done");
}
