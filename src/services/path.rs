//! Root path validation and normalization

use crate::{Error, Result};
use std::ffi::OsString;
use std::path::Path;

const SEPARATOR: char = '/';

/// A validated root directory path that always ends with exactly one `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathConfig {
    normalized: String,
}

impl PathConfig {
    /// Validate and normalize `raw`.
    ///
    /// # Errors
    /// `Error::InvalidPath` if the path is not valid UTF-8 and
    /// `Error::EmptyPath` if it is empty.
    pub fn new<P: AsRef<Path>>(raw: P) -> Result<Self> {
        let raw = raw.as_ref();
        let Some(text) = raw.to_str() else {
            return Err(Error::InvalidPath(raw.to_string_lossy().into_owned()));
        };

        if text.is_empty() {
            return Err(Error::EmptyPath);
        }

        Ok(Self {
            normalized: normalize(text),
        })
    }

    /// Same as [`PathConfig::new`] for an argument that may be absent.
    ///
    /// # Errors
    /// `Error::EmptyPath` when `raw` is `None`, otherwise as [`PathConfig::new`].
    pub fn from_arg(raw: Option<OsString>) -> Result<Self> {
        match raw {
            Some(raw) => Self::new(raw),
            None => Err(Error::EmptyPath),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.normalized)
    }
}

impl AsRef<Path> for PathConfig {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl std::fmt::Display for PathConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.normalized)
    }
}

/// Collapse trailing separators into exactly one.
fn normalize(text: &str) -> String {
    let trimmed = text.trim_end_matches(SEPARATOR);
    let mut normalized = String::with_capacity(trimmed.len() + 1);
    normalized.push_str(trimmed);
    normalized.push(SEPARATOR);
    normalized
}
