//! Integration tests for calculator configuration, overrides and scoped views

use crate::fixtures::create_nested_fixture;
use dirtally::{Calculator, Error, ScanOptions, StrategyKind, Totals};
use tempfile::TempDir;

#[test]
fn test_init_normalizes_path_and_stores_strategy() {
    let calc = Calculator::new("/root", StrategyKind::Stack).unwrap();
    assert_eq!(calc.path().as_str(), "/root/");
    assert_eq!(calc.strategy(), StrategyKind::Stack);

    let calc = Calculator::new("/root/", 2u8).unwrap();
    assert_eq!(calc.path().as_str(), "/root/");
    assert_eq!(calc.strategy(), StrategyKind::Recursion);
}

#[test]
fn test_default_strategy_is_walk() {
    let calc = Calculator::with_default_strategy("/tmp").unwrap();
    assert_eq!(calc.strategy(), StrategyKind::Walk);
}

#[test]
fn test_construction_rejects_unknown_strategy() {
    let err = Calculator::new("/root/", 5u8).unwrap_err();
    assert!(matches!(err, Error::InvalidStrategy(_)));

    let err = Calculator::new("/root/", "bogus").unwrap_err();
    assert!(matches!(err, Error::InvalidStrategy(_)));
}

#[test]
fn test_construction_rejects_empty_path() {
    let err = Calculator::new("", StrategyKind::Walk).unwrap_err();
    assert!(matches!(err, Error::EmptyPath));
}

#[test]
fn test_set_strategy_accepts_each_valid_value() {
    let mut calc = Calculator::with_default_strategy("/root").unwrap();

    for kind in StrategyKind::ALL {
        calc.set_strategy(kind).unwrap();
        assert_eq!(calc.strategy(), kind);
    }

    for id in 1..=4u8 {
        calc.set_strategy(id).unwrap();
        assert_eq!(calc.strategy().id(), id);
    }
}

#[test]
fn test_set_strategy_rejects_and_keeps_previous_value() {
    let mut calc = Calculator::new("/root", StrategyKind::Recursion).unwrap();

    for bad in [0i64, 5, -1, 42] {
        let err = calc.set_strategy(bad).unwrap_err();
        assert!(matches!(err, Error::InvalidStrategy(_)));
    }
    assert!(matches!(calc.set_strategy("4 "), Ok(())));
    assert_eq!(calc.strategy(), StrategyKind::ExternalProcess);

    let err = calc.set_strategy("walkdir").unwrap_err();
    assert!(matches!(err, Error::InvalidStrategy(_)));
    assert_eq!(calc.strategy(), StrategyKind::ExternalProcess);
}

#[test]
fn test_set_path_revalidates() {
    let mut calc = Calculator::with_default_strategy("/root").unwrap();

    calc.set_path("/var/log//").unwrap();
    assert_eq!(calc.path().as_str(), "/var/log/");

    let err = calc.set_path("").unwrap_err();
    assert!(matches!(err, Error::EmptyPath));
    assert_eq!(calc.path().as_str(), "/var/log/");
}

#[test]
fn test_override_does_not_mutate_stored_strategy() {
    let temp_dir = TempDir::new().unwrap();
    create_nested_fixture(temp_dir.path()).unwrap();

    let calc = Calculator::new(temp_dir.path(), StrategyKind::Walk).unwrap();
    let totals = calc.compute_with(StrategyKind::Stack).unwrap();

    assert_eq!(totals, Totals::new(4, 16));
    assert_eq!(calc.strategy(), StrategyKind::Walk);
}

#[test]
fn test_invalid_override_fails_before_traversal() {
    let calc = Calculator::new("/definitely/does/not/exist/xyz123", StrategyKind::Walk).unwrap();
    let err = calc.compute_with(9u8).unwrap_err();
    assert!(matches!(err, Error::InvalidStrategy(_)));
}

#[test]
fn test_with_strategy_returns_distinct_copy() {
    let calc = Calculator::new("/root", StrategyKind::Walk).unwrap();
    let view = calc.with_strategy(StrategyKind::Recursion).unwrap();

    assert_eq!(view.strategy(), StrategyKind::Recursion);
    assert_eq!(calc.strategy(), StrategyKind::Walk);
    assert_eq!(view.path(), calc.path());
    assert_ne!(view, calc);
    assert!(!std::ptr::eq(&view, &calc));
}

#[test]
fn test_scoped_view_leaves_original_untouched() {
    let temp_dir = TempDir::new().unwrap();
    create_nested_fixture(temp_dir.path()).unwrap();

    let calc = Calculator::new(temp_dir.path(), StrategyKind::Walk).unwrap();

    let (inner_strategy, inner_totals) = calc
        .scoped(StrategyKind::ExternalProcess, |view| {
            assert!(!std::ptr::eq(view, &calc));
            (view.strategy(), view.compute().unwrap())
        })
        .unwrap();

    assert_eq!(inner_strategy, StrategyKind::ExternalProcess);
    assert_eq!(inner_totals, Totals::new(4, 16));
    assert_eq!(calc.strategy(), StrategyKind::Walk);
}

#[test]
fn test_scoped_view_rejects_unknown_strategy() {
    let calc = Calculator::with_default_strategy("/root").unwrap();
    let result = calc.scoped("sideways", |view| view.strategy());
    assert!(matches!(result, Err(Error::InvalidStrategy(_))));
    assert_eq!(calc.strategy(), StrategyKind::Walk);
}

#[test]
fn test_set_options_applies_to_next_compute() {
    let temp_dir = TempDir::new().unwrap();
    create_nested_fixture(temp_dir.path()).unwrap();

    let mut calc = Calculator::new(temp_dir.path(), StrategyKind::ExternalProcess).unwrap();
    assert_eq!(calc.options(), &ScanOptions::default());

    let opts = ScanOptions {
        find_program: "true".into(),
        ..Default::default()
    };
    calc.set_options(opts.clone());

    assert_eq!(calc.options(), &opts);
    assert_eq!(calc.compute().unwrap(), Totals::default());
    assert_eq!(calc.compute_with(StrategyKind::Walk).unwrap(), Totals::new(4, 16));
}
