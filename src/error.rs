//! Error types shared by every stage of the codec.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building, loading, or applying a code table.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be opened or created in the required mode.
    #[error("could not open {} for {mode}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        mode: &'static str,
        #[source]
        source: io::Error,
    },

    /// A stored code contains something other than '0' or '1'.
    #[error("invalid character {found:?} at position {position} in the code for byte {symbol}")]
    InvalidCodeCharacter {
        symbol: u8,
        found: char,
        position: usize,
    },

    /// Compression or decompression was requested with no table loaded.
    #[error("no code table is loaded; build or load a .hi file first")]
    MissingTree,

    /// A line of a `.hi` file could not be parsed.
    #[error("malformed code table at line {line}: {reason}")]
    MalformedTable { line: usize, reason: String },

    /// A source byte has no code in the current table.
    #[error("byte {byte} at offset {offset} has no code in the current table")]
    UnencodableByte { byte: u8, offset: u64 },

    /// A compressed bit leads to a node the tree does not have.
    #[error("bit {bit_offset} of the compressed stream does not follow any code")]
    InvalidBitPath { bit_offset: u64 },

    /// The compressed stream ends partway through a code.
    #[error("compressed stream ends inside a code after {bits} bits")]
    TruncatedCode { bits: u64 },

    /// No usable output name can be derived from the given path.
    #[error("cannot derive an output file name from {}", .0.display())]
    InvalidPath(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn open_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileOpen {
            path: path.into(),
            mode: "reading",
            source,
        }
    }

    pub(crate) fn open_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileOpen {
            path: path.into(),
            mode: "writing",
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_open_message_names_path_and_mode() {
        let err = Error::open_read(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("reading"));
    }

    #[test]
    fn test_io_error_converts() {
        let err: Error = io::Error::new(io::ErrorKind::UnexpectedEof, "eof").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
