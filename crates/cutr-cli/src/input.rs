//! Input sources and per-source processing.
//!
//! Every source is handled on its own: a file that cannot be opened, or that
//! fails halfway through, is reported and the remaining sources still run.
//! Only a failure to write the output stops the whole batch.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use cutr_core::{CutConfig, Error, ProcessStats, process};
use tracing::{debug, info};

/// Where records are read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Standard input.
    Stdin,
    /// A named file.
    File(PathBuf),
}

impl Source {
    /// Interpret a command-line operand; `-` means standard input.
    #[must_use]
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Open the source for buffered reading.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceOpen`] if a file cannot be opened.
    pub fn open(&self) -> cutr_core::Result<Box<dyn BufRead>> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(path).map_err(|source| Error::SourceOpen {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            },
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("-"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Outcome of processing a batch of sources.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Record counters summed over every source that was read.
    pub stats: ProcessStats,
    /// Sources that could not be opened.
    pub failed_opens: Vec<String>,
    /// Sources that failed while being read.
    pub failed_reads: Vec<String>,
}

impl BatchReport {
    /// Whether every source was opened and read to the end.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed_opens.is_empty() && self.failed_reads.is_empty()
    }
}

/// Process each source in order, writing selected records to `out`.
///
/// Per-source failures are written to `diagnostics` as `cutr: <source>: <reason>`
/// and collected in the returned report.
///
/// # Errors
///
/// Returns [`Error::Output`] as soon as writing to `out` fails, including a
/// closed pipe; the caller decides how to treat that.
pub fn process_sources<W: Write, D: Write>(
    sources: &[Source],
    config: &CutConfig,
    out: &mut W,
    diagnostics: &mut D,
) -> cutr_core::Result<BatchReport> {
    process_with(sources, config, out, diagnostics, Source::open)
}

/// [`process_sources`] with a custom opener, so tests can stand in readers.
pub(crate) fn process_with<W, D, O>(
    sources: &[Source],
    config: &CutConfig,
    out: &mut W,
    diagnostics: &mut D,
    mut open: O,
) -> cutr_core::Result<BatchReport>
where
    W: Write,
    D: Write,
    O: FnMut(&Source) -> cutr_core::Result<Box<dyn BufRead>>,
{
    let mut report = BatchReport::default();

    for source in sources {
        let reader = match open(source) {
            Ok(reader) => reader,
            Err(err) => {
                info!(source = %source, error = %err, "skipping input that could not be opened");
                report_failure(diagnostics, &err)?;
                report.failed_opens.push(source.to_string());
                continue;
            },
        };

        match process(reader, &mut *out, config) {
            Ok(stats) => {
                debug!(source = %source, ?stats, "processed input");
                report.stats.absorb(stats);
            },
            Err(err) if err.is_output() => return Err(err),
            Err(err) => {
                info!(source = %source, error = %err, "input failed while reading");
                out.flush().map_err(Error::Output)?;
                report_failure(diagnostics, &format!("{source}: {err}"))?;
                report.failed_reads.push(source.to_string());
            },
        }
    }

    Ok(report)
}

fn report_failure<D: Write>(diagnostics: &mut D, message: &dyn fmt::Display) -> io::Result<()> {
    writeln!(diagnostics, "{} {message}", "cutr:".red().bold())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cutr_core::Unit;
    use std::io::Read;

    fn field_config() -> CutConfig {
        CutConfig::builder()
            .unit(Unit::Field, "2")
            .delimiter(",")
            .build()
            .unwrap()
    }

    /// Reader that yields some data then fails.
    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::other("device went away"));
            }
            self.served = true;
            let data = b"a,b\n";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    /// Writer whose first write fails with `kind`, later writes succeed.
    struct FlakyOutput {
        kind: io::ErrorKind,
        failed: bool,
        written: Vec<u8>,
    }

    impl FlakyOutput {
        fn new(kind: io::ErrorKind) -> Self {
            Self {
                kind,
                failed: false,
                written: Vec::new(),
            }
        }
    }

    impl Write for FlakyOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if !self.failed {
                self.failed = true;
                return Err(io::Error::new(self.kind, "disk full"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn open_two(source: &Source) -> cutr_core::Result<Box<dyn BufRead>> {
        match source.to_string().as_str() {
            "one" => Ok(Box::new(&b"a,1\n"[..]) as Box<dyn BufRead>),
            _ => Ok(Box::new(&b"b,2\n"[..]) as Box<dyn BufRead>),
        }
    }

    #[test]
    fn test_from_arg_dash_is_stdin() {
        assert_eq!(Source::from_arg(Path::new("-")), Source::Stdin);
        assert_eq!(
            Source::from_arg(Path::new("x.csv")),
            Source::File(PathBuf::from("x.csv"))
        );
    }

    #[test]
    fn test_missing_file_is_reported_and_batch_continues() {
        colored::control::set_override(false);
        let sources = vec![
            Source::File(PathBuf::from("definitely/not/here.csv")),
            Source::File(PathBuf::from("also/missing.csv")),
        ];
        let mut out = Vec::new();
        let mut diagnostics = Vec::new();

        let report = process_sources(&sources, &field_config(), &mut out, &mut diagnostics).unwrap();

        assert!(out.is_empty());
        assert_eq!(report.failed_opens.len(), 2);
        assert!(!report.is_clean());
        let text = String::from_utf8(diagnostics).unwrap();
        assert!(text.contains("cutr: definitely/not/here.csv:"));
        assert!(text.contains("cutr: also/missing.csv:"));
    }

    #[test]
    fn test_sources_processed_in_order() {
        let sources = vec![
            Source::File(PathBuf::from("one")),
            Source::File(PathBuf::from("missing")),
            Source::File(PathBuf::from("two")),
        ];
        let mut out = Vec::new();
        let mut diagnostics = Vec::new();

        let report = process_with(&sources, &field_config(), &mut out, &mut diagnostics, |source| {
            match source.to_string().as_str() {
                "one" => Ok(Box::new(&b"a,1\nb,2\n"[..]) as Box<dyn BufRead>),
                "two" => Ok(Box::new(&b"c,3\n"[..]) as Box<dyn BufRead>),
                other => Err(Error::SourceOpen {
                    path: PathBuf::from(other),
                    source: io::Error::new(io::ErrorKind::NotFound, "not found"),
                }),
            }
        })
        .unwrap();

        assert_eq!(out, b"1\n2\n3\n");
        assert_eq!(report.failed_opens, vec!["missing".to_string()]);
        assert_eq!(report.stats.records_written, 3);
    }

    #[test]
    fn test_read_failure_moves_to_next_source() {
        colored::control::set_override(false);
        let sources = vec![Source::File(PathBuf::from("flaky")), Source::Stdin];
        let mut out = Vec::new();
        let mut diagnostics = Vec::new();

        let report = process_with(&sources, &field_config(), &mut out, &mut diagnostics, |source| {
            match source {
                Source::File(_) => Ok(Box::new(BufReader::new(FailingReader { served: false }))
                    as Box<dyn BufRead>),
                Source::Stdin => Ok(Box::new(&b"x,y\n"[..]) as Box<dyn BufRead>),
            }
        })
        .unwrap();

        assert_eq!(out, b"b\ny\n");
        assert_eq!(report.failed_reads, vec!["flaky".to_string()]);
        let text = String::from_utf8(diagnostics).unwrap();
        assert!(text.contains("cutr: flaky: IO error: device went away"));
    }

    #[test]
    fn test_write_failure_stops_the_batch() {
        let sources = vec![
            Source::File(PathBuf::from("one")),
            Source::File(PathBuf::from("two")),
        ];
        let mut out = FlakyOutput::new(io::ErrorKind::Other);
        let mut diagnostics = Vec::new();

        let err = process_with(&sources, &field_config(), &mut out, &mut diagnostics, open_two)
            .unwrap_err();

        assert!(err.is_output(), "unexpected error: {err:?}");
        assert!(out.written.is_empty(), "later sources must not run");
        assert!(diagnostics.is_empty(), "the source must not be blamed");
    }

    #[test]
    fn test_broken_pipe_propagates() {
        let sources = vec![Source::File(PathBuf::from("one"))];
        let mut out = FlakyOutput::new(io::ErrorKind::BrokenPipe);
        let mut diagnostics = Vec::new();

        let err = process_with(&sources, &field_config(), &mut out, &mut diagnostics, open_two)
            .unwrap_err();

        assert!(err.is_broken_pipe());
        assert!(diagnostics.is_empty());
    }
}
