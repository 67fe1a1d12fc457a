//! Immutable run configuration.
//!
//! A [`CutConfig`] is built once per invocation from validated options and
//! then shared, read-only, by every record of every input source. It bundles
//! the addressing mode, the canonical (optionally complemented) interval list,
//! the output delimiter and the record terminator.
//!
//! ## Defaults
//!
//! | Setting | Default |
//! |---------|---------|
//! | input delimiter | TAB (field mode only) |
//! | output delimiter | input delimiter in field mode, empty otherwise |
//! | complement bound | [`UNBOUNDED`] |
//! | record terminator | `\n` |
//!
//! ## Example
//!
//! ```rust
//! use cutr_core::{CutConfig, Interval, Unit};
//!
//! let config = CutConfig::builder()
//!     .unit(Unit::Field, "2-3")
//!     .delimiter(",")
//!     .build()?;
//!
//! assert_eq!(config.intervals(), &[Interval::new(2, 3)]);
//! assert_eq!(config.output_delimiter(), b",");
//! # Ok::<(), cutr_core::Error>(())
//! ```

use tracing::debug;

use crate::interval::{Interval, UNBOUNDED, format_list};
use crate::mode::{DEFAULT_DELIMITER, Mode, Unit};
use crate::range::{complement, parse_range_list};
use crate::record::RecordTerminator;
use crate::{Error, Result};

/// Everything needed to cut records, fixed for the whole run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CutConfig {
    mode: Mode,
    intervals: Vec<Interval>,
    output_delimiter: Vec<u8>,
    terminator: RecordTerminator,
}

impl CutConfig {
    /// Create a configuration from already-resolved parts.
    ///
    /// The interval list is used as given; prefer [`CutConfig::builder`]
    /// when starting from a range-list expression.
    #[must_use]
    pub fn new(
        mode: Mode,
        intervals: Vec<Interval>,
        output_delimiter: impl Into<Vec<u8>>,
        terminator: RecordTerminator,
    ) -> Self {
        Self {
            mode,
            intervals,
            output_delimiter: output_delimiter.into(),
            terminator,
        }
    }

    /// Start building a configuration from raw options.
    #[must_use]
    pub fn builder() -> CutConfigBuilder {
        CutConfigBuilder::default()
    }

    /// Addressing mode.
    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Canonical interval list applied to each record.
    #[must_use]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Separator written between selected pieces.
    #[must_use]
    pub fn output_delimiter(&self) -> &[u8] {
        &self.output_delimiter
    }

    /// Record terminator for input and output.
    #[must_use]
    pub const fn terminator(&self) -> RecordTerminator {
        self.terminator
    }
}

/// Builder collecting raw options and validating them into a [`CutConfig`].
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct CutConfigBuilder {
    selection: Option<(Unit, String)>,
    delimiter: Option<String>,
    output_delimiter: Option<String>,
    complement: bool,
    complement_bound: Option<usize>,
    only_delimited: bool,
    zero_terminated: bool,
}

impl CutConfigBuilder {
    /// Unit to address and the range-list expression to select.
    pub fn unit(mut self, unit: Unit, list: impl Into<String>) -> Self {
        self.selection = Some((unit, list.into()));
        self
    }

    /// Input field delimiter. Only valid in field mode.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Output delimiter placed between selected pieces.
    pub fn output_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.output_delimiter = Some(delimiter.into());
        self
    }

    /// Select everything *except* the listed positions.
    pub const fn complement(mut self, complement: bool) -> Self {
        self.complement = complement;
        self
    }

    /// Upper bound for the complement; defaults to [`UNBOUNDED`].
    pub const fn complement_bound(mut self, max: usize) -> Self {
        self.complement_bound = Some(max);
        self
    }

    /// Suppress records that contain no delimiter. Only valid in field mode.
    pub const fn only_delimited(mut self, only_delimited: bool) -> Self {
        self.only_delimited = only_delimited;
        self
    }

    /// Split and terminate records on NUL instead of newline.
    pub const fn zero_terminated(mut self, zero_terminated: bool) -> Self {
        self.zero_terminated = zero_terminated;
        self
    }

    /// Validate the options and produce the run configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] for missing or conflicting options
    /// - [`Error::Parse`] for a malformed range list
    pub fn build(self) -> Result<CutConfig> {
        let Some((unit, list)) = self.selection else {
            return Err(Error::Config(
                "you must specify a list of bytes, characters or fields".to_string(),
            ));
        };

        let mode = match unit {
            Unit::Byte | Unit::Char => {
                if self.delimiter.is_some() {
                    return Err(Error::Config(
                        "an input delimiter may be specified only when operating on fields"
                            .to_string(),
                    ));
                }
                if self.only_delimited {
                    return Err(Error::Config(
                        "suppressing non-delimited lines makes sense only when operating on fields"
                            .to_string(),
                    ));
                }
                if unit == Unit::Byte { Mode::Bytes } else { Mode::Chars }
            },
            Unit::Field => {
                let delimiter = self
                    .delimiter
                    .as_deref()
                    .unwrap_or(DEFAULT_DELIMITER);
                if delimiter.is_empty() {
                    return Err(Error::Config("the delimiter must not be empty".to_string()));
                }
                Mode::fields(delimiter, self.only_delimited)
            },
        };

        let output_delimiter = match (self.output_delimiter, &mode) {
            (Some(explicit), _) => explicit.into_bytes(),
            (None, Mode::Fields { delimiter, .. }) => delimiter.clone(),
            (None, Mode::Bytes | Mode::Chars) => Vec::new(),
        };

        let mut intervals = parse_range_list(&list)?;
        if self.complement {
            intervals = complement(&intervals, self.complement_bound.unwrap_or(UNBOUNDED));
        }

        debug!(
            unit = %unit,
            list = %list,
            intervals = %format_list(&intervals),
            complement = self.complement,
            zero_terminated = self.zero_terminated,
            "resolved cut configuration"
        );

        Ok(CutConfig {
            mode,
            intervals,
            output_delimiter,
            terminator: RecordTerminator::from_zero_terminated(self.zero_terminated),
        })
    }
}
