//! Traversal dispatcher and strategy coordination layer.
//!
//! Four strategies compute the same [`Totals`] for a directory tree:
//!
//! - `walk`: pre-order walk driven by the `walkdir` crate.
//! - `recursion`: one call frame per directory over `std::fs::read_dir`.
//! - `stack`: explicit worklist of pending directories.
//! - `external`: delegates listing and sizing to a `find` subprocess.
//!
//! Shared invariants:
//!
//! - Only regular files are counted. Symlinks are neither followed nor counted;
//!   sockets, devices and FIFOs are skipped.
//! - Sizes follow [`ScanOptions::basis`].
//! - A failed run returns an error and never partial totals.

pub mod external;
pub mod listing;
pub mod recursive;
pub mod select;
pub mod stack;
pub mod strategy;
pub mod walk;

use crate::models::Totals;
use crate::{Error, ScanOptions, TraversalError};
use std::path::Path;
use strategy::TraversalStrategy;

/// Enumeration of available traversal strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Library-assisted pre-order walk.
    #[default]
    Walk,
    /// Manual recursion, one frame per directory.
    Recursion,
    /// Explicit worklist of directories.
    Stack,
    /// `find` subprocess.
    ExternalProcess,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Walk,
        StrategyKind::Recursion,
        StrategyKind::Stack,
        StrategyKind::ExternalProcess,
    ];

    /// Stable numeric identifier (1-based).
    #[must_use]
    pub fn id(&self) -> u8 {
        match self {
            StrategyKind::Walk => 1,
            StrategyKind::Recursion => 2,
            StrategyKind::Stack => 3,
            StrategyKind::ExternalProcess => 4,
        }
    }

    #[must_use]
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(StrategyKind::Walk),
            2 => Some(StrategyKind::Recursion),
            3 => Some(StrategyKind::Stack),
            4 => Some(StrategyKind::ExternalProcess),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Walk => "walk",
            StrategyKind::Recursion => "recursion",
            StrategyKind::Stack => "stack",
            StrategyKind::ExternalProcess => "external",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "walk" => Some(StrategyKind::Walk),
            "recursion" | "recursive" => Some(StrategyKind::Recursion),
            "stack" | "queue" => Some(StrategyKind::Stack),
            "external" | "subprocess" | "process" => Some(StrategyKind::ExternalProcess),
            numeric => numeric.parse::<i64>().ok().and_then(Self::from_id),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::from_label(s).ok_or_else(|| Error::InvalidStrategy(format!("'{s}'")))
    }
}

/// The implementation backing `kind`.
#[must_use]
pub fn strategy_for(kind: StrategyKind) -> &'static dyn TraversalStrategy {
    match kind {
        StrategyKind::Walk => &walk::WalkStrategy,
        StrategyKind::Recursion => &recursive::RecursiveStrategy,
        StrategyKind::Stack => &stack::StackStrategy,
        StrategyKind::ExternalProcess => &external::ExternalProcessStrategy,
    }
}

/// Run the strategy selected by `kind` against `root`.
///
/// # Errors
/// Returns the strategy's [`TraversalError`] unchanged.
pub fn traverse(
    kind: StrategyKind,
    root: &Path,
    opts: &ScanOptions,
) -> Result<Totals, TraversalError> {
    let strategy = strategy_for(kind);
    log::debug!(
        "Traversing {} with '{}' strategy ({} sizes)",
        root.display(),
        strategy.kind(),
        opts.basis
    );

    let totals = strategy.traverse(root, opts)?;

    log::debug!(
        "'{}' strategy finished: {} files, {} bytes",
        strategy.kind(),
        totals.file_count(),
        totals.total_bytes()
    );
    Ok(totals)
}
