//! Directory Tally Library
//!
//! Counts the regular files beneath a directory and sums their sizes using one
//! of four interchangeable traversal strategies (walk, recursion, explicit
//! stack, external `find` process). Every strategy produces the same
//! [`Totals`] for the same tree.

pub mod cli;
pub mod models;
pub mod services;

pub use models::Totals;
pub use services::calculator::Calculator;
pub use services::path::PathConfig;
pub use services::traverse::StrategyKind;
pub use services::traverse::select::IntoStrategy;

use std::path::PathBuf;
use std::process::ExitStatus;
use std::result;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    /// The path cannot be represented as a string.
    InvalidPath(String),
    /// The path is empty or missing.
    EmptyPath,
    /// The strategy identifier is not one of the four known strategies.
    InvalidStrategy(String),
    InvalidInput(String),
    Traversal(TraversalError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPath(path) => write!(f, "Invalid path: {path} is not valid UTF-8"),
            Error::EmptyPath => f.write_str("Invalid path: path must not be empty"),
            Error::InvalidStrategy(raw) => write!(f, "Invalid strategy: {raw} doesn't exist"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Error::Traversal(e) => write!(f, "Traversal error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Traversal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TraversalError> for Error {
    fn from(err: TraversalError) -> Self {
        Error::Traversal(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Failure of a single strategy run. Totals gathered before the failure are
/// discarded.
#[derive(Debug)]
pub enum TraversalError {
    /// A filesystem call failed for `path`.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The external listing program could not be started.
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },
    /// The external listing program exited unsuccessfully.
    ExitStatus {
        program: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
    /// A line of external listing output did not match the expected columns.
    MalformedOutput {
        line_number: usize,
        line: String,
        reason: String,
    },
    /// The sized listing and the counting listing disagree on the file count.
    ListingMismatch { sized: u64, counted: u64 },
}

impl std::fmt::Display for TraversalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraversalError::Io { path, source } => {
                write!(f, "I/O error at {}: {source}", path.display())
            }
            TraversalError::Spawn { program, source } => {
                write!(f, "failed to run {}: {source}", program.display())
            }
            TraversalError::ExitStatus {
                program,
                status,
                stderr,
            } => {
                write!(f, "{} exited with {status}", program.display())?;
                if !stderr.is_empty() {
                    write!(f, ": {stderr}")?;
                }
                Ok(())
            }
            TraversalError::MalformedOutput {
                line_number,
                line,
                reason,
            } => write!(f, "unexpected listing output on line {line_number} ({reason}): {line:?}"),
            TraversalError::ListingMismatch { sized, counted } => write!(
                f,
                "listings disagree: {sized} files sized but {counted} files counted"
            ),
        }
    }
}

impl std::error::Error for TraversalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TraversalError::Io { source, .. } | TraversalError::Spawn { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

impl TraversalError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TraversalError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Options shared by every traversal strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub basis: SizeBasis,
    /// Program used by the external-process strategy.
    pub find_program: PathBuf,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            basis: SizeBasis::Logical,
            find_program: PathBuf::from("find"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeBasis {
    /// Apparent length as reported by `st_size`.
    #[default]
    Logical,
    /// Allocated blocks on disk.
    Physical,
}

impl SizeBasis {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeBasis::Logical => "logical",
            SizeBasis::Physical => "physical",
        }
    }
}

impl std::fmt::Display for SizeBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SizeBasis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "logical" | "apparent" => Ok(SizeBasis::Logical),
            "physical" | "disk" => Ok(SizeBasis::Physical),
            _ => Err(Error::InvalidInput(format!(
                "unknown size basis '{s}'. Use 'logical' or 'physical'"
            ))),
        }
    }
}
