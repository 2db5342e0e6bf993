use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong when using a [`Tree`](crate::Tree) or one of its cursors.
#[derive(Error, Debug)]
pub enum Error {
    /// A cursor was asked about its node but doesn't point at one.
    #[error("cursor does not point at a node")]
    InvalidPosition,

    /// The file backing a serialized tree couldn't be opened, read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// What the OS reported.
        #[source]
        source: io::Error,
    },

    /// A value's text contains a line break, so it can't be written as a single record.
    #[error("value {text:?} can't be serialized: it contains a line break")]
    UnencodableValue {
        /// The value's text.
        text: String,
    },

    /// Reading or writing the serialized stream itself failed.
    #[error("failed to read serialized tree: {0}")]
    Stream(#[from] io::Error),

    /// A record started with something other than the present (`0`) or absent (`1`) flag.
    #[error("line {line}: unknown record flag {flag:?}")]
    UnknownFlag {
        /// 1-based line number of the record.
        line: usize,
        /// The flag that was found.
        flag: String,
    },

    /// A present record's value couldn't be parsed.
    #[error("line {line}: invalid value {text:?}: {reason}")]
    InvalidValue {
        /// 1-based line number of the record.
        line: usize,
        /// The text that failed to parse.
        text: String,
        /// The parser's explanation.
        reason: String,
    },

    /// The stream ended while a record was still expected.
    #[error("serialized tree ended before line {line}")]
    UnexpectedEof {
        /// 1-based line number of the missing record.
        line: usize,
    },
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
