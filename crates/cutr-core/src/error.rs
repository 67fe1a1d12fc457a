//! Error types and handling for cutr-core operations.
//!
//! Every fallible operation in the crate returns [`Result<T>`]. Errors fall into
//! a small number of categories:
//!
//! - **Parse Errors**: malformed range-list tokens (`"1-a"`, `"-"`, `"0"`)
//! - **Configuration Errors**: invalid option combinations
//! - **Unsupported Mode**: an addressing mode tag that is not `byte`/`char`/`field`
//! - **Source Errors**: an input source that cannot be opened
//! - **I/O Errors**: read failures while streaming records
//! - **Output Errors**: the selected records could not be written
//!
//! Nothing here is retried: all operations are local and deterministic, so a
//! failure is reported once and the caller decides whether the run continues.
//!
//! ```rust
//! use cutr_core::{Error, parse_range_list};
//!
//! match parse_range_list("1-a") {
//!     Err(Error::Parse(msg)) => assert!(msg.contains("1-a")),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for cutr-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A range-list expression could not be parsed.
    ///
    /// Raised before any record is processed, so a bad list never produces
    /// partial output.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Options were combined in a way that has no meaning.
    ///
    /// ## Common Causes
    ///
    /// - No byte, character or field list given
    /// - An input delimiter given in byte or character mode
    /// - Only-delimited requested outside field mode
    #[error("Configuration error: {0}")]
    Config(String),

    /// An addressing mode tag was not recognised.
    #[error("Invalid data type '{0}'. Must be 'char', 'byte', or 'field'.")]
    UnsupportedMode(String),

    /// A named input source could not be opened.
    ///
    /// Reported per source; remaining sources are still processed.
    #[error("{}: {source}", path.display())]
    SourceOpen {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// I/O operation failed while reading records.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing selected records to the output failed.
    ///
    /// Kept apart from [`Error::Io`] so a failing output is never blamed on
    /// the source being read.
    #[error("write error: {0}")]
    Output(#[source] std::io::Error),
}

impl Error {
    /// Get the error category as a string identifier.
    ///
    /// Useful for structured logging and for mapping errors to exit codes.
    ///
    /// ```rust
    /// use cutr_core::Error;
    ///
    /// assert_eq!(Error::Parse("bad".into()).category(), "parse");
    /// assert_eq!(Error::UnsupportedMode("word".into()).category(), "unsupported_mode");
    /// ```
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse",
            Self::Config(_) => "config",
            Self::UnsupportedMode(_) => "unsupported_mode",
            Self::SourceOpen { .. } => "source_open",
            Self::Io(_) => "io",
            Self::Output(_) => "output",
        }
    }

    /// Whether the error stems from how the tool was invoked rather than
    /// from the data it was asked to read.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::Parse(_) | Self::Config(_) | Self::UnsupportedMode(_)
        )
    }

    /// Whether the output could not be written.
    #[must_use]
    pub const fn is_output(&self) -> bool {
        matches!(self, Self::Output(_))
    }

    /// Whether the error is a broken pipe on the output side.
    ///
    /// `cutr ... | head` closes the pipe early; callers treat this as a clean end.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output(e) | Self::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
