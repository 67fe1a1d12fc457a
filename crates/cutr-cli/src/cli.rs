//! # CLI Structure and Argument Parsing
//!
//! Defines the `cutr` command line with clap derive macros and turns the
//! parsed flags into the immutable [`CutConfig`] the core works from.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Fields 1 and 3 of a CSV file
//! cutr -f 1,3 -d , data.csv
//!
//! # First five characters of every line on stdin
//! printf 'Hello,World\n' | cutr -c 1-5
//!
//! # Everything except bytes 2 to 5, NUL-separated records
//! cutr -b 2-5 --complement -z records.bin
//! ```

use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};
use cutr_core::{CutConfig, Unit};

use crate::args::Verbosity;
use crate::input::Source;

const LIST_HELP: &str = "\
Use one, and only one of -b, -c or -f. Each LIST is made up of one range, or
many ranges separated by commas. Each range is one of:

  N     N'th byte, character or field, counted from 1
  N-    from N'th byte, character or field, to end of line
  N-M   from N'th to M'th (included) byte, character or field
  -M    from first to M'th (included) byte, character or field

With no FILE, or when FILE is -, read standard input.";

/// Main CLI structure for the `cutr` command.
#[derive(Parser, Clone, Debug)]
#[command(name = "cutr")]
#[command(version)]
#[command(about = "Print selected parts of lines from each FILE to standard output", long_about = None)]
#[command(override_usage = "cutr OPTION... [FILE]...")]
#[command(after_help = LIST_HELP)]
#[command(group(ArgGroup::new("list").args(["bytes", "characters", "fields"]).multiple(false)))]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Select only these bytes
    #[arg(short = 'b', long, value_name = "LIST", allow_hyphen_values = true)]
    pub bytes: Option<String>,

    /// Select only these characters (Unicode codepoints)
    #[arg(short = 'c', long, value_name = "LIST", allow_hyphen_values = true)]
    pub characters: Option<String>,

    /// Select only these fields; lines without a delimiter are printed unless -s is given
    #[arg(short = 'f', long, value_name = "LIST", allow_hyphen_values = true)]
    pub fields: Option<String>,

    /// Use DELIM instead of TAB for field delimiter
    #[arg(short = 'd', long, value_name = "DELIM", allow_hyphen_values = true)]
    pub delimiter: Option<String>,

    /// Use STRING as the output delimiter (default: the input delimiter)
    #[arg(long = "output-delimiter", value_name = "STRING", allow_hyphen_values = true)]
    pub output_delimiter: Option<String>,

    /// Complement the set of selected bytes, characters or fields
    #[arg(short = 'n', long)]
    pub complement: bool,

    /// Do not print lines not containing delimiters
    #[arg(short = 's', long = "only-delimited")]
    pub only_delimited: bool,

    /// Line delimiter is NUL, not newline
    #[arg(short = 'z', long = "zero-terminated")]
    pub zero_terminated: bool,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors on stderr
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored diagnostics (also respects `NO_COLOR` env)
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Input files; `-` reads standard input
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// The selected unit and its range list, if one was given.
    #[must_use]
    pub fn selection(&self) -> Option<(Unit, &str)> {
        [
            (Unit::Byte, self.bytes.as_deref()),
            (Unit::Char, self.characters.as_deref()),
            (Unit::Field, self.fields.as_deref()),
        ]
        .into_iter()
        .find_map(|(unit, list)| list.map(|list| (unit, list)))
    }

    /// Verbosity resolved from `-q` and `-v`.
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// Validate the flags into the run configuration.
    ///
    /// # Errors
    ///
    /// Returns the core configuration or parse error for missing lists,
    /// misplaced delimiters and malformed ranges.
    pub fn to_config(&self) -> cutr_core::Result<CutConfig> {
        let mut builder = CutConfig::builder()
            .complement(self.complement)
            .only_delimited(self.only_delimited)
            .zero_terminated(self.zero_terminated);

        if let Some((unit, list)) = self.selection() {
            builder = builder.unit(unit, list);
        }
        if let Some(delimiter) = &self.delimiter {
            builder = builder.delimiter(delimiter.as_str());
        }
        if let Some(output) = &self.output_delimiter {
            builder = builder.output_delimiter(output.as_str());
        }
        builder.build()
    }

    /// Input sources in command-line order; standard input when none given.
    #[must_use]
    pub fn sources(&self) -> Vec<Source> {
        if self.files.is_empty() {
            return vec![Source::Stdin];
        }
        self.files.iter().map(|path| Source::from_arg(path)).collect()
    }
}
