//! Strict parsers for `find` output.
//!
//! `find <root> -type f -ls` prints one line per file:
//!
//! ```text
//! inode blocks perms links owner group size month day time-or-year name
//! ```
//!
//! `find <root> -type f` prints one path per line. Both parsers fail closed:
//! a line that does not fit the expected shape is an error, never skipped.

use crate::SizeBasis;
use crate::TraversalError;
use crate::services::size::LISTING_BLOCK_SIZE;

/// Minimum number of whitespace-separated columns in a `-ls` line.
pub const LS_MIN_COLUMNS: usize = 11;
/// Column holding the allocated size in 1 KiB blocks.
pub const LS_BLOCKS_COLUMN: usize = 1;
/// Column holding the size in bytes.
pub const LS_SIZE_COLUMN: usize = 6;

/// Sum of one `-ls` listing: number of lines parsed and the byte total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizedListing {
    pub files: u64,
    pub bytes: u64,
}

/// Parse `find -ls` output. Blank output is an empty listing.
///
/// # Errors
/// `TraversalError::MalformedOutput` for a line with too few columns or a
/// non-numeric size column.
pub fn parse_sized_listing(output: &str, basis: SizeBasis) -> Result<SizedListing, TraversalError> {
    let mut listing = SizedListing::default();

    for (index, line) in output.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let columns: Vec<&str> = line.split_whitespace().collect();
        if columns.len() < LS_MIN_COLUMNS {
            return Err(malformed(
                index,
                line,
                format!(
                    "expected at least {LS_MIN_COLUMNS} columns, found {}",
                    columns.len()
                ),
            ));
        }

        let size = match basis {
            SizeBasis::Logical => parse_column(columns[LS_SIZE_COLUMN], index, line, "size")?,
            SizeBasis::Physical => {
                parse_column(columns[LS_BLOCKS_COLUMN], index, line, "blocks")?
                    .saturating_mul(LISTING_BLOCK_SIZE)
            }
        };

        listing.files = listing.files.saturating_add(1);
        listing.bytes = listing.bytes.saturating_add(size);
    }

    Ok(listing)
}

/// Count paths in plain `find` output, one per non-empty line.
///
/// A name containing a newline counts once per line it spans.
#[must_use]
pub fn count_listed_paths(output: &str) -> u64 {
    let count = output.lines().filter(|line| !line.is_empty()).count();
    u64::try_from(count).unwrap_or(u64::MAX)
}

fn parse_column(
    value: &str,
    index: usize,
    line: &str,
    column: &str,
) -> Result<u64, TraversalError> {
    value
        .parse::<u64>()
        .map_err(|_| malformed(index, line, format!("{column} column {value:?} is not a number")))
}

fn malformed(index: usize, line: &str, reason: String) -> TraversalError {
    TraversalError::MalformedOutput {
        line_number: index + 1,
        line: line.to_string(),
        reason,
    }
}
