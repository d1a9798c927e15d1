//! Strategy trait implemented by every traversal backend.

use super::StrategyKind;
use crate::models::Totals;
use crate::{ScanOptions, TraversalError};
use std::path::Path;

/// Common interface implemented by the traversal strategies.
pub trait TraversalStrategy {
    /// Identify the strategy for logging and diagnostics.
    fn kind(&self) -> StrategyKind;

    /// Count regular files beneath `root` and sum their sizes.
    ///
    /// `root` must name an existing directory.
    fn traverse(&self, root: &Path, opts: &ScanOptions) -> Result<Totals, TraversalError>;
}
