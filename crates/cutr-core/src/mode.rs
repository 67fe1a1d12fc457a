//! Addressing modes: what an interval's positions refer to.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Default input delimiter for field mode.
pub const DEFAULT_DELIMITER: &str = "\t";

/// The unit an interval indexes into, without any mode-specific settings.
///
/// Parses from the tags used on the command line and in diagnostics:
///
/// ```rust
/// use cutr_core::Unit;
///
/// assert_eq!("byte".parse::<Unit>()?, Unit::Byte);
/// assert_eq!("characters".parse::<Unit>()?, Unit::Char);
/// assert!("word".parse::<Unit>().is_err());
/// # Ok::<(), cutr_core::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Raw byte offsets.
    Byte,
    /// Unicode codepoint offsets.
    Char,
    /// Delimiter-separated field indices.
    Field,
}

impl Unit {
    /// Canonical tag for this unit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Field => "field",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "byte" | "bytes" => Ok(Self::Byte),
            "char" | "chars" | "character" | "characters" => Ok(Self::Char),
            "field" | "fields" => Ok(Self::Field),
            _ => Err(Error::UnsupportedMode(s.to_string())),
        }
    }
}

/// How a record is addressed, with exactly the settings each mode needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Select raw bytes. Cuts may fall inside a multi-byte sequence.
    Bytes,
    /// Select Unicode codepoints. Grapheme clusters are not kept together.
    Chars,
    /// Select fields split on a literal delimiter.
    Fields {
        /// Input field separator, matched literally.
        delimiter: Vec<u8>,
        /// Drop records that contain no delimiter at all.
        only_delimited: bool,
    },
}

impl Mode {
    /// Field mode with the given delimiter.
    #[must_use]
    pub fn fields(delimiter: impl Into<Vec<u8>>, only_delimited: bool) -> Self {
        Self::Fields {
            delimiter: delimiter.into(),
            only_delimited,
        }
    }

    /// The unit this mode addresses.
    #[must_use]
    pub const fn unit(&self) -> Unit {
        match self {
            Self::Bytes => Unit::Byte,
            Self::Chars => Unit::Char,
            Self::Fields { .. } => Unit::Field,
        }
    }
}
