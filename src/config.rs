//! File naming rules for code tables and compressed files.

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended to a source path when its code table is written.
pub const TABLE_SUFFIX: &str = ".hi";

/// Suffix appended to a source path when it is compressed.
pub const COMPRESSED_SUFFIX: &str = ".hc";

/// Naming configuration used by a [`Session`](crate::Session).
///
/// Decompression derives its output name by dropping as many trailing
/// characters from the input path as the compressed suffix has, whether or not
/// the input actually ends with that suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    table_suffix: String,
    compressed_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            table_suffix: TABLE_SUFFIX.to_string(),
            compressed_suffix: COMPRESSED_SUFFIX.to_string(),
        }
    }
}

impl Config {
    /// Creates the default configuration (`.hi` tables, `.hc` compressed files)
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the code table suffix
    pub fn with_table_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.table_suffix = suffix.into();
        self
    }

    /// Replaces the compressed file suffix
    pub fn with_compressed_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.compressed_suffix = suffix.into();
        self
    }

    pub fn table_suffix(&self) -> &str {
        &self.table_suffix
    }

    pub fn compressed_suffix(&self) -> &str {
        &self.compressed_suffix
    }

    /// Path of the code table written for `source`.
    pub fn table_path(&self, source: &Path) -> PathBuf {
        append_suffix(source, &self.table_suffix)
    }

    /// Path of the compressed file written for `source`.
    pub fn compressed_path(&self, source: &Path) -> PathBuf {
        append_suffix(source, &self.compressed_suffix)
    }

    /// Path of the file recovered from `compressed`.
    ///
    /// Fails with [`Error::InvalidPath`] when the path is not valid UTF-8, would
    /// be left empty, or would be left unchanged by an empty suffix.
    pub fn decompressed_path(&self, compressed: &Path) -> Result<PathBuf> {
        let name = compressed
            .to_str()
            .ok_or_else(|| Error::InvalidPath(compressed.to_path_buf()))?;
        let cut = self.compressed_suffix.chars().count();
        let keep = name
            .chars()
            .count()
            .checked_sub(cut)
            .filter(|&n| n > 0)
            .ok_or_else(|| Error::InvalidPath(compressed.to_path_buf()))?;
        let target = PathBuf::from(name.chars().take(keep).collect::<String>());
        separate_from(compressed, target)
    }
}

/// Returns `target`, or [`Error::InvalidPath`] when writing it would replace
/// `source`.
pub(crate) fn separate_from(source: &Path, target: PathBuf) -> Result<PathBuf> {
    if target == source {
        return Err(Error::InvalidPath(target));
    }
    Ok(target)
}

fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
