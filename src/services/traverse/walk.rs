//! Walk strategy built on the `walkdir` crate.
//!
//! The walk is pre-order and does not follow symlinks. Regular files are
//! grouped under their parent directory as they are emitted, and the
//! per-directory totals are summed once the walk completes.

use super::StrategyKind;
use super::strategy::TraversalStrategy;
use crate::models::Totals;
use crate::services::size;
use crate::{ScanOptions, TraversalError};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Library-assisted traversal.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkStrategy;

impl TraversalStrategy for WalkStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Walk
    }

    fn traverse(&self, root: &Path, opts: &ScanOptions) -> Result<Totals, TraversalError> {
        let mut per_directory: BTreeMap<PathBuf, Totals> = BTreeMap::new();

        for entry in WalkDir::new(root).follow_links(false) {
            let entry = entry.map_err(|err| walk_error(root, err))?;
            let file_type = entry.file_type();

            if file_type.is_dir() {
                per_directory.entry(entry.path().to_path_buf()).or_default();
                continue;
            }

            if !file_type.is_file() {
                log::trace!("Skipping non-regular entry {}", entry.path().display());
                continue;
            }

            let metadata = entry
                .metadata()
                .map_err(|err| walk_error(entry.path(), err))?;
            let file_size = size::size_for_basis(&metadata, opts.basis);
            log::trace!("File {}: {file_size} bytes", entry.path().display());

            let parent = entry.path().parent().unwrap_or(root).to_path_buf();
            let slot = per_directory.entry(parent).or_default();
            *slot = slot.with_file(file_size);
        }

        for (dir, totals) in &per_directory {
            log::debug!(
                "Directory {}: {} files, {} bytes",
                dir.display(),
                totals.file_count(),
                totals.total_bytes()
            );
        }

        Ok(per_directory.into_values().sum())
    }
}

fn walk_error(fallback: &Path, err: walkdir::Error) -> TraversalError {
    let path = err.path().unwrap_or(fallback).to_path_buf();
    TraversalError::io(path, io::Error::from(err))
}
