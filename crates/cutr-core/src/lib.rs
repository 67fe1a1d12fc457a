//! # cutr-core
//!
//! Core functionality for cutr - selecting bytes, characters or fields from
//! each record of a text stream.
//!
//! ## Architecture
//!
//! Two layers, the first feeding the second:
//!
//! - **Range engine** ([`range`]): parses a range list such as `"1-3,5,8-"`
//!   into a canonical, sorted, overlap-merged list of [`Interval`]s, and can
//!   complement that list against an upper bound.
//! - **Record selector** ([`select`](mod@select)): applies an interval list to one record
//!   in one [`Mode`] (bytes, codepoints or delimiter-separated fields) and
//!   rejoins the pieces with an output delimiter.
//!
//! Around them sit the [`CutConfig`] built once per run, and [`process`],
//! which splits a reader into newline- or NUL-terminated records and streams
//! the selected output to a writer.
//!
//! ## Quick Start
//!
//! ```rust
//! use cutr_core::{CutConfig, Unit, process};
//!
//! let config = CutConfig::builder()
//!     .unit(Unit::Field, "1,3")
//!     .delimiter(",")
//!     .build()?;
//!
//! let mut out = Vec::new();
//! process(&b"name,age,city\nada,36,london\n"[..], &mut out, &config)?;
//! assert_eq!(out, b"name,city\nada,london\n");
//! # Ok::<(), cutr_core::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`]. A malformed range list
//! fails before any record is read; see [`error`] for the categories.

/// Immutable run configuration
pub mod config;
/// Error types and result aliases
pub mod error;
/// Closed integer intervals
pub mod interval;
/// Addressing modes
pub mod mode;
/// Range-list parsing, merging and complement
pub mod range;
/// Record splitting and stream processing
pub mod record;
/// Per-record selection
pub mod select;

pub use config::{CutConfig, CutConfigBuilder};
pub use error::{Error, Result};
pub use interval::{Interval, UNBOUNDED};
pub use mode::{DEFAULT_DELIMITER, Mode, Unit};
pub use range::{complement, merge, parse_range_list};
pub use record::{ProcessStats, RecordTerminator, Records, process};
pub use select::select;
