//! Worklist traversal strategy.
//!
//! Pending directories live on an explicit stack instead of the call stack.
//! On Unix each directory is opened with `openat` and its entries are
//! inspected with `statat` relative to that descriptor; other platforms use
//! `std::fs`.

use super::StrategyKind;
use super::strategy::TraversalStrategy;
use crate::models::Totals;
use crate::{ScanOptions, TraversalError};
use std::path::{Path, PathBuf};

#[cfg(unix)]
use crate::SizeBasis;
#[cfg(unix)]
use crate::services::size::STAT_BLOCK_SIZE;
#[cfg(unix)]
use rustix::fs::{self as rfs, AtFlags, Dir, FileType, Mode, OFlags};
#[cfg(unix)]
use std::ffi::OsStr;
#[cfg(unix)]
use std::os::unix::ffi::OsStrExt;

/// Explicit-stack traversal.
#[derive(Debug, Default, Clone, Copy)]
pub struct StackStrategy;

impl TraversalStrategy for StackStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Stack
    }

    fn traverse(&self, root: &Path, opts: &ScanOptions) -> Result<Totals, TraversalError> {
        let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];
        let mut totals = Totals::default();
        let mut visited_dirs = 0u64;

        while let Some(dir) = pending.pop() {
            totals = totals + scan_directory(&dir, opts, &mut pending)?;
            visited_dirs += 1;
        }

        log::debug!(
            "Stack traversal of {} visited {visited_dirs} directories",
            root.display()
        );
        Ok(totals)
    }
}

/// Count files directly inside `dir` and push its subdirectories.
#[cfg(unix)]
fn scan_directory(
    dir: &Path,
    opts: &ScanOptions,
    pending: &mut Vec<PathBuf>,
) -> Result<Totals, TraversalError> {
    let io_err = |path: &Path, err: rustix::io::Errno| {
        TraversalError::io(path, std::io::Error::from(err))
    };

    let dir_fd = rfs::openat(
        rfs::CWD,
        dir,
        OFlags::RDONLY | OFlags::DIRECTORY | OFlags::CLOEXEC,
        Mode::empty(),
    )
    .map_err(|e| io_err(dir, e))?;

    let entries = Dir::read_from(&dir_fd).map_err(|e| io_err(dir, e))?;
    let mut totals = Totals::default();

    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let name = entry.file_name();
        let name_bytes = name.to_bytes();
        if name_bytes == b"." || name_bytes == b".." {
            continue;
        }

        let child_path = dir.join(OsStr::from_bytes(name_bytes));
        let stat = rfs::statat(&dir_fd, name, AtFlags::SYMLINK_NOFOLLOW)
            .map_err(|e| io_err(child_path.as_path(), e))?;

        #[allow(clippy::unnecessary_cast)]
        let file_type = FileType::from_raw_mode(stat.st_mode as rfs::RawMode);

        match file_type {
            FileType::Directory => pending.push(child_path),
            FileType::RegularFile => {
                let file_size = match opts.basis {
                    SizeBasis::Logical => u64::try_from(stat.st_size).unwrap_or(0),
                    SizeBasis::Physical => u64::try_from(stat.st_blocks)
                        .unwrap_or(0)
                        .saturating_mul(STAT_BLOCK_SIZE),
                };
                log::trace!("File {}: {file_size} bytes", child_path.display());
                totals = totals.with_file(file_size);
            }
            _ => log::trace!("Skipping non-regular entry {}", child_path.display()),
        }
    }

    Ok(totals)
}

#[cfg(not(unix))]
fn scan_directory(
    dir: &Path,
    opts: &ScanOptions,
    pending: &mut Vec<PathBuf>,
) -> Result<Totals, TraversalError> {
    use crate::services::size;

    let entries = std::fs::read_dir(dir).map_err(|e| TraversalError::io(dir, e))?;
    let mut totals = Totals::default();

    for entry in entries {
        let entry = entry.map_err(|e| TraversalError::io(dir, e))?;
        let child_path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| TraversalError::io(&child_path, e))?;

        if file_type.is_dir() {
            pending.push(child_path);
        } else if file_type.is_file() {
            let metadata = entry
                .metadata()
                .map_err(|e| TraversalError::io(&child_path, e))?;
            totals = totals.with_file(size::size_for_basis(&metadata, opts.basis));
        }
    }

    Ok(totals)
}
