//! Verbosity level configuration for diagnostic output.
//!
//! Maps the `-q` and repeatable `-v` flags onto a single ordered level,
//! which in turn selects the tracing filter. Selected output on stdout is
//! never affected; only stderr diagnostics change.
//!
//! | Flags | Level | Logs shown |
//! |-------|-------|------------|
//! | `-q` | `Quiet` | errors |
//! | (none) | `Normal` | warnings and errors |
//! | `-v` | `Verbose` | info |
//! | `-vv` | `Debug` | parsed ranges, resolved configuration |
//! | `-vvv` | `Trace` | every record |
//!
//! # Examples
//!
//! ```
//! use cutr_cli::args::Verbosity;
//!
//! assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
//! assert_eq!(Verbosity::from_flags(false, 2), Verbosity::Debug);
//! ```

use tracing::Level;

/// Verbosity level for diagnostics.
///
/// Levels are ordered from quietest to most verbose:
/// `Quiet < Normal < Verbose < Debug < Trace`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors (default).
    #[default]
    Normal,
    /// Informational messages such as per-source summaries.
    Verbose,
    /// Parsed range lists and resolved configuration.
    Debug,
    /// One event per record.
    Trace,
}

impl Verbosity {
    /// Create a Verbosity from the quiet flag and the `-v` count.
    ///
    /// Any `-v` takes precedence over `-q`.
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        match verbose {
            0 if quiet => Self::Quiet,
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Maximum tracing level to emit at this verbosity.
    #[must_use]
    pub const fn as_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}
