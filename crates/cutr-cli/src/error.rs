//! CLI error handling with semantic exit codes.
//!
//! Errors are categorized so that the process exit status says what kind of
//! failure happened, which keeps `cutr` usable from shell scripts.
//!
//! # Exit Code Categories
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | All sources processed |
//! | 1 | `Internal` | Unexpected/internal error |
//! | 2 | `Usage` | Invalid flag combination or malformed LIST |
//! | 3 | `NotFound` | One or more input files could not be opened |
//! | 4 | `Io` | Reading an input or writing the output failed |
//!
//! # Usage
//!
//! ```bash
//! cutr -f 2 -d , data.csv missing.csv
//! case $? in
//!     0) echo "ok" ;;
//!     3) echo "some inputs were missing" ;;
//!     *) echo "other error" ;;
//! esac
//! ```

use std::fmt;
use std::process::ExitCode;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    Internal = 1,

    /// Invalid arguments or range list (exit code 2).
    ///
    /// Matches the status clap uses for its own argument errors.
    Usage = 2,

    /// An input source could not be opened (exit code 3).
    NotFound = 3,

    /// Read or write failure while streaming records (exit code 4).
    Io = 4,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Create an `ExitCode` from this category.
    #[must_use]
    pub fn as_exit_code(self) -> ExitCode {
        ExitCode::from(self.exit_code())
    }

    /// Get a short description of this error category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Internal => "internal error",
            Self::Usage => "usage error",
            Self::NotFound => "not found",
            Self::Io => "i/o error",
        }
    }

    /// Category for an error raised by the core library.
    #[must_use]
    pub const fn from_core(err: &cutr_core::Error) -> Self {
        match err {
            cutr_core::Error::Parse(_)
            | cutr_core::Error::Config(_)
            | cutr_core::Error::UnsupportedMode(_) => Self::Usage,
            cutr_core::Error::SourceOpen { .. } => Self::NotFound,
            cutr_core::Error::Io(_) | cutr_core::Error::Output(_) => Self::Io,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A CLI error with a semantic category for exit code mapping.
///
/// Wraps an `anyhow::Error` so context chains are preserved.
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Create a usage error.
    pub fn usage(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Usage, source)
    }

    /// Create an internal error.
    pub fn internal(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Internal, source)
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }
}

impl From<cutr_core::Error> for CliError {
    fn from(err: cutr_core::Error) -> Self {
        Self::new(ErrorCategory::from_core(&err), err)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Determine the exit code from an `anyhow::Error`.
///
/// A `CliError` carries its own category; a bare core error is mapped by
/// kind; anything else is internal.
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if let Some(core_err) = err.downcast_ref::<cutr_core::Error>() {
        return ErrorCategory::from_core(core_err).exit_code();
    }
    ErrorCategory::Internal.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_exit_codes_are_stable() {
        assert_eq!(ErrorCategory::Internal.exit_code(), 1);
        assert_eq!(ErrorCategory::Usage.exit_code(), 2);
        assert_eq!(ErrorCategory::NotFound.exit_code(), 3);
        assert_eq!(ErrorCategory::Io.exit_code(), 4);
    }

    #[test]
    fn test_core_errors_map_to_categories() {
        let parse = cutr_core::Error::Parse("bad".into());
        let config = cutr_core::Error::Config("bad".into());
        let io = cutr_core::Error::Io(std::io::Error::other("disk"));
        let output = cutr_core::Error::Output(std::io::Error::other("disk full"));

        assert_eq!(ErrorCategory::from_core(&parse), ErrorCategory::Usage);
        assert_eq!(ErrorCategory::from_core(&config), ErrorCategory::Usage);
        assert_eq!(ErrorCategory::from_core(&io), ErrorCategory::Io);
        assert_eq!(ErrorCategory::from_core(&output), ErrorCategory::Io);
    }

    #[test]
    fn test_cli_error_display_is_source_message() {
        let err = CliError::usage(anyhow!("only one type of list may be specified"));
        assert_eq!(err.to_string(), "only one type of list may be specified");
        assert_eq!(err.exit_code(), 2);
    }

    mod exit_code_from_error {
        use super::*;

        #[test]
        fn uses_cli_error_category() {
            let err: anyhow::Error = CliError::internal(anyhow!("boom")).into();
            assert_eq!(exit_code_from_error(&err), 1);
        }

        #[test]
        fn maps_bare_core_error() {
            let err: anyhow::Error = cutr_core::Error::Parse("1-a".into()).into();
            assert_eq!(exit_code_from_error(&err), 2);
        }

        #[test]
        fn defaults_to_internal() {
            let err = anyhow!("something odd");
            assert_eq!(exit_code_from_error(&err), 1);
        }
    }
}
