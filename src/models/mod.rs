//! Data models for traversal results and reports

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// File count and combined byte size beneath a directory.
///
/// Produced whole by a strategy and never modified afterwards; combining two
/// totals yields a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    file_count: u64,
    total_bytes: u64,
}

impl Totals {
    #[must_use]
    pub const fn new(file_count: u64, total_bytes: u64) -> Self {
        Self {
            file_count,
            total_bytes,
        }
    }

    #[must_use]
    pub const fn file_count(&self) -> u64 {
        self.file_count
    }

    #[must_use]
    pub const fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Totals with one more file of `size_bytes`.
    #[must_use]
    pub const fn with_file(self, size_bytes: u64) -> Self {
        Self {
            file_count: self.file_count.saturating_add(1),
            total_bytes: self.total_bytes.saturating_add(size_bytes),
        }
    }
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, rhs: Totals) -> Totals {
        Totals {
            file_count: self.file_count.saturating_add(rhs.file_count),
            total_bytes: self.total_bytes.saturating_add(rhs.total_bytes),
        }
    }
}

impl Sum for Totals {
    fn sum<I: Iterator<Item = Totals>>(iter: I) -> Totals {
        iter.fold(Totals::default(), Add::add)
    }
}

impl std::fmt::Display for Totals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Total number of files is {} and their size is {} bytes",
            self.file_count, self.total_bytes
        )
    }
}

/// Machine-readable report emitted by the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TallyReport {
    pub root: String,
    pub strategy: String,
    pub basis: String,
    pub file_count: u64,
    pub total_bytes: u64,
}
