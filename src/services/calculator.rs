//! Calculator tying a validated root path to a traversal strategy.

use super::path::PathConfig;
use super::traverse::{self, StrategyKind, select::IntoStrategy};
use crate::models::Totals;
use crate::{Result, ScanOptions};
use std::path::Path;

/// Computes file count and total size beneath a directory.
///
/// Path and strategy are validated when assigned, so a constructed
/// `Calculator` always holds a normalized path and a known strategy. Nothing
/// is cached: every [`compute`](Self::compute) walks the filesystem again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    path: PathConfig,
    strategy: StrategyKind,
    options: ScanOptions,
}

impl Calculator {
    /// # Errors
    /// Path errors from [`PathConfig::new`] and `Error::InvalidStrategy`.
    pub fn new<P: AsRef<Path>, S: IntoStrategy>(path: P, strategy: S) -> Result<Self> {
        Self::with_options(path, strategy, ScanOptions::default())
    }

    /// Construct with the default `walk` strategy.
    ///
    /// # Errors
    /// Path errors from [`PathConfig::new`].
    pub fn with_default_strategy<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(path, StrategyKind::default())
    }

    /// # Errors
    /// Path errors from [`PathConfig::new`] and `Error::InvalidStrategy`.
    pub fn with_options<P: AsRef<Path>, S: IntoStrategy>(
        path: P,
        strategy: S,
        options: ScanOptions,
    ) -> Result<Self> {
        Ok(Self {
            path: PathConfig::new(path)?,
            strategy: strategy.into_strategy()?,
            options,
        })
    }

    #[must_use]
    pub fn path(&self) -> &PathConfig {
        &self.path
    }

    #[must_use]
    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    #[must_use]
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Replace the root path. On error the previous path is kept.
    ///
    /// # Errors
    /// Path errors from [`PathConfig::new`].
    pub fn set_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.path = PathConfig::new(path)?;
        Ok(())
    }

    /// Replace the stored strategy. On error the previous strategy is kept.
    ///
    /// # Errors
    /// `Error::InvalidStrategy` for an unknown identifier.
    pub fn set_strategy<S: IntoStrategy>(&mut self, strategy: S) -> Result<()> {
        self.strategy = strategy.into_strategy()?;
        Ok(())
    }

    /// Replace the scan options used by later computations.
    pub fn set_options(&mut self, options: ScanOptions) {
        self.options = options;
    }

    /// Run the stored strategy.
    ///
    /// # Errors
    /// `Error::Traversal` when the strategy fails.
    pub fn compute(&self) -> Result<Totals> {
        self.run(self.strategy)
    }

    /// Run `strategy` for this call only; the stored strategy is untouched.
    ///
    /// # Errors
    /// `Error::InvalidStrategy` for an unknown identifier, `Error::Traversal`
    /// when the strategy fails.
    pub fn compute_with<S: IntoStrategy>(&self, strategy: S) -> Result<Totals> {
        self.run(strategy.into_strategy()?)
    }

    /// "Total number of files is {n} and their size is {s} bytes"
    ///
    /// # Errors
    /// Same as [`compute`](Self::compute).
    pub fn summary(&self) -> Result<String> {
        Ok(self.compute()?.to_string())
    }

    /// A distinct copy of this calculator using `strategy`.
    ///
    /// # Errors
    /// `Error::InvalidStrategy` for an unknown identifier.
    pub fn with_strategy<S: IntoStrategy>(&self, strategy: S) -> Result<Self> {
        let mut view = self.clone();
        view.set_strategy(strategy)?;
        Ok(view)
    }

    /// Hand a transient copy using `strategy` to `f`. The copy is dropped when
    /// `f` returns; `self` cannot be modified meanwhile.
    ///
    /// # Errors
    /// `Error::InvalidStrategy` for an unknown identifier.
    pub fn scoped<S, F, T>(&self, strategy: S, f: F) -> Result<T>
    where
        S: IntoStrategy,
        F: FnOnce(&Calculator) -> T,
    {
        let view = self.with_strategy(strategy)?;
        Ok(f(&view))
    }

    fn run(&self, strategy: StrategyKind) -> Result<Totals> {
        Ok(traverse::traverse(
            strategy,
            self.path.as_path(),
            &self.options,
        )?)
    }
}
