//! External-process strategy delegating to `find`.
//!
//! Two invocations are made: `find <root> -type f -ls` for sizes and
//! `find <root> -type f` for the file count. `Command::output` drains both
//! pipes and reaps the child before returning, on success and on error.

use super::StrategyKind;
use super::listing::{count_listed_paths, parse_sized_listing};
use super::strategy::TraversalStrategy;
use crate::models::Totals;
use crate::{ScanOptions, TraversalError};
use std::path::Path;
use std::process::{Command, Stdio};

/// Counting delegated to an external listing program.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExternalProcessStrategy;

impl TraversalStrategy for ExternalProcessStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ExternalProcess
    }

    fn traverse(&self, root: &Path, opts: &ScanOptions) -> Result<Totals, TraversalError> {
        let sized_output = run_find(root, opts, &["-type", "f", "-ls"])?;
        let sized = parse_sized_listing(&sized_output, opts.basis)?;

        let count_output = run_find(root, opts, &["-type", "f"])?;
        let counted = count_listed_paths(&count_output);

        if sized.files != counted {
            return Err(TraversalError::ListingMismatch {
                sized: sized.files,
                counted,
            });
        }

        Ok(Totals::new(counted, sized.bytes))
    }
}

/// Run the configured `find` program against `root` and return its stdout.
fn run_find(root: &Path, opts: &ScanOptions, args: &[&str]) -> Result<String, TraversalError> {
    let program = &opts.find_program;
    log::debug!("Running {} {} {}", program.display(), root.display(), args.join(" "));

    let output = find_command(program, root, args)
        .output()
        .map_err(|source| TraversalError::Spawn {
            program: program.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(TraversalError::ExitStatus {
            program: program.clone(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// `program root args..` with the environment pinned so `-ls` columns keep
/// their layout and the block column stays in 1 KiB units.
fn find_command(program: &Path, root: &Path, args: &[&str]) -> Command {
    let mut command = Command::new(program);
    command
        .arg(root)
        .args(args)
        .env("LC_ALL", "C")
        // GNU find reports -ls blocks in 512-byte units under POSIXLY_CORRECT.
        .env_remove("POSIXLY_CORRECT")
        .stdin(Stdio::null());
    command
}
