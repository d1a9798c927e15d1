//! Size computation (logical and physical) with platform-specific implementations

use crate::SizeBasis;
use std::fs::Metadata;

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

/// Bytes per block reported by `st_blocks`.
pub const STAT_BLOCK_SIZE: u64 = 512;

/// Bytes per block in the `find -ls` block column.
pub const LISTING_BLOCK_SIZE: u64 = 1024;

/// Compute logical size from metadata
#[must_use]
pub fn logical_size(metadata: &Metadata) -> u64 {
    metadata.len()
}

/// Compute physical size from metadata (Unix platform)
#[cfg(unix)]
#[must_use]
pub fn physical_size_from_metadata(metadata: &Metadata) -> u64 {
    metadata.blocks().saturating_mul(STAT_BLOCK_SIZE)
}

/// Compute physical size (non-Unix fallback)
#[cfg(not(unix))]
#[must_use]
pub fn physical_size_from_metadata(metadata: &Metadata) -> u64 {
    logical_size(metadata)
}

/// Size of a file under the requested basis
#[must_use]
pub fn size_for_basis(metadata: &Metadata, basis: SizeBasis) -> u64 {
    match basis {
        SizeBasis::Logical => logical_size(metadata),
        SizeBasis::Physical => physical_size_from_metadata(metadata),
    }
}
