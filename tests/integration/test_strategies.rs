//! Integration tests for strategy equivalence

use crate::fixtures::{
    MIXED_BYTES, MIXED_FILES, create_mixed_fixture, create_nested_fixture, write_file_sync,
};
use dirtally::services::traverse::{self, StrategyKind};
use dirtally::{Calculator, ScanOptions, SizeBasis, Totals};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_nested_fixture_every_strategy() {
    let temp_dir = TempDir::new().unwrap();
    create_nested_fixture(temp_dir.path()).unwrap();

    for kind in StrategyKind::ALL {
        let calc = Calculator::new(temp_dir.path(), kind).unwrap();
        let totals = calc.compute().unwrap();
        assert_eq!(totals, Totals::new(4, 16), "strategy {kind}");
        assert_eq!(
            calc.summary().unwrap(),
            "Total number of files is 4 and their size is 16 bytes",
            "strategy {kind}"
        );
    }
}

#[test]
fn test_strategies_agree_on_mixed_tree() {
    let temp_dir = TempDir::new().unwrap();
    create_mixed_fixture(temp_dir.path()).unwrap();

    let opts = ScanOptions::default();
    for kind in StrategyKind::ALL {
        let totals = traverse::traverse(kind, temp_dir.path(), &opts).unwrap();
        assert_eq!(
            totals,
            Totals::new(MIXED_FILES, MIXED_BYTES),
            "strategy {kind} disagrees"
        );
    }
}

#[test]
fn test_empty_directory_is_zero() {
    let temp_dir = TempDir::new().unwrap();

    for kind in StrategyKind::ALL {
        let calc = Calculator::new(temp_dir.path(), kind).unwrap();
        assert_eq!(calc.compute().unwrap(), Totals::new(0, 0), "strategy {kind}");
    }
}

#[test]
fn test_only_empty_subdirectories_is_zero() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("a/b/c")).unwrap();
    fs::create_dir_all(temp_dir.path().join("d")).unwrap();

    for kind in StrategyKind::ALL {
        let calc = Calculator::new(temp_dir.path(), kind).unwrap();
        assert_eq!(calc.compute().unwrap(), Totals::default(), "strategy {kind}");
    }
}

#[test]
fn test_repeated_invocation_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    create_mixed_fixture(temp_dir.path()).unwrap();

    for kind in StrategyKind::ALL {
        let calc = Calculator::new(temp_dir.path(), kind).unwrap();
        let first = calc.compute().unwrap();
        let second = calc.compute().unwrap();
        assert_eq!(first, second, "strategy {kind}");
    }
}

#[test]
fn test_recomputes_after_tree_changes() {
    let temp_dir = TempDir::new().unwrap();
    create_nested_fixture(temp_dir.path()).unwrap();

    let calc = Calculator::with_default_strategy(temp_dir.path()).unwrap();
    assert_eq!(calc.compute().unwrap(), Totals::new(4, 16));

    write_file_sync(temp_dir.path().join("folder1/extra"), b"123456").unwrap();
    assert_eq!(calc.compute().unwrap(), Totals::new(5, 22));
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_neither_followed_nor_counted() {
    use std::os::unix::fs::symlink;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    let outside = temp_dir.path().join("outside");
    fs::create_dir_all(&root).unwrap();
    fs::create_dir_all(&outside).unwrap();
    create_nested_fixture(&root).unwrap();
    write_file_sync(outside.join("big"), &[0u8; 4096]).unwrap();

    symlink(outside.join("big"), root.join("link_to_file")).unwrap();
    symlink(&outside, root.join("link_to_dir")).unwrap();
    symlink(root.join("missing"), root.join("dangling")).unwrap();
    // Loop back to the root
    symlink(&root, root.join("folder1/loop")).unwrap();

    for kind in StrategyKind::ALL {
        let calc = Calculator::new(&root, kind).unwrap();
        assert_eq!(calc.compute().unwrap(), Totals::new(4, 16), "strategy {kind}");
    }
}

#[cfg(unix)]
#[test]
fn test_in_process_strategies_agree_on_physical_sizes() {
    let temp_dir = TempDir::new().unwrap();
    create_mixed_fixture(temp_dir.path()).unwrap();

    let opts = ScanOptions {
        basis: SizeBasis::Physical,
        ..Default::default()
    };

    let walk = traverse::traverse(StrategyKind::Walk, temp_dir.path(), &opts).unwrap();
    let recursion = traverse::traverse(StrategyKind::Recursion, temp_dir.path(), &opts).unwrap();
    let stack = traverse::traverse(StrategyKind::Stack, temp_dir.path(), &opts).unwrap();

    assert_eq!(walk.file_count(), MIXED_FILES);
    assert_eq!(walk, recursion);
    assert_eq!(walk, stack);
    assert_eq!(walk.total_bytes() % 512, 0);
}

#[cfg(unix)]
#[test]
fn test_external_strategy_with_silent_program_is_zero() {
    let temp_dir = TempDir::new().unwrap();
    create_nested_fixture(temp_dir.path()).unwrap();

    // `true` ignores its arguments and prints nothing
    let opts = ScanOptions {
        find_program: "true".into(),
        ..Default::default()
    };
    let calc =
        Calculator::with_options(temp_dir.path(), StrategyKind::ExternalProcess, opts).unwrap();
    assert_eq!(calc.compute().unwrap(), Totals::default());
}

#[cfg(unix)]
#[test]
fn test_every_strategy_agrees_on_physical_sizes() {
    let temp_dir = TempDir::new().unwrap();
    write_file_sync(temp_dir.path().join("small"), &[b'S'; 10]).unwrap();
    fs::create_dir_all(temp_dir.path().join("sub")).unwrap();
    write_file_sync(temp_dir.path().join("sub/large"), &[b'L'; 5000]).unwrap();

    let opts = ScanOptions {
        basis: SizeBasis::Physical,
        ..Default::default()
    };

    let walk = traverse::traverse(StrategyKind::Walk, temp_dir.path(), &opts).unwrap();
    assert_eq!(walk.file_count(), 2);

    for kind in StrategyKind::ALL {
        let totals = traverse::traverse(kind, temp_dir.path(), &opts).unwrap();
        assert_eq!(totals, walk, "strategy {kind} disagrees on physical size");
    }
}
