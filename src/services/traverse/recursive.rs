//! Recursive traversal using standard library primitives.
//! Recursion depth equals tree depth.

use super::StrategyKind;
use super::strategy::TraversalStrategy;
use crate::models::Totals;
use crate::services::size;
use crate::{ScanOptions, TraversalError};
use std::fs;
use std::path::Path;

/// One call frame per directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecursiveStrategy;

impl TraversalStrategy for RecursiveStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Recursion
    }

    fn traverse(&self, root: &Path, opts: &ScanOptions) -> Result<Totals, TraversalError> {
        traverse_recursive(root, opts)
    }
}

fn traverse_recursive(current: &Path, opts: &ScanOptions) -> Result<Totals, TraversalError> {
    let entries = fs::read_dir(current).map_err(|e| TraversalError::io(current, e))?;
    let mut totals = Totals::default();

    for entry in entries {
        let entry = entry.map_err(|e| TraversalError::io(current, e))?;
        let entry_path = entry.path();

        // DirEntry::file_type does not follow symlinks.
        let file_type = entry
            .file_type()
            .map_err(|e| TraversalError::io(&entry_path, e))?;

        if file_type.is_dir() {
            totals = totals + traverse_recursive(&entry_path, opts)?;
        } else if file_type.is_file() {
            let metadata = entry
                .metadata()
                .map_err(|e| TraversalError::io(&entry_path, e))?;
            let file_size = size::size_for_basis(&metadata, opts.basis);
            log::trace!("File {}: {file_size} bytes", entry_path.display());
            totals = totals.with_file(file_size);
        } else {
            log::trace!("Skipping non-regular entry {}", entry_path.display());
        }
    }

    log::debug!(
        "Directory {}: {} files, {} bytes (including subdirectories)",
        current.display(),
        totals.file_count(),
        totals.total_bytes()
    );

    Ok(totals)
}
