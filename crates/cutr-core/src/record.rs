//! Record splitting and stream processing.
//!
//! Input is split into records on line feeds, or on NUL bytes in
//! zero-terminated mode. Each record is passed through [`select`] and written
//! back followed by the same terminator.

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::config::CutConfig;
use crate::select::select;
use crate::{Error, Result};

/// Byte that ends each input and output record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RecordTerminator {
    /// `\n`
    #[default]
    Newline,
    /// `\0`
    Nul,
}

impl RecordTerminator {
    /// Terminator for the given zero-terminated setting.
    #[must_use]
    pub const fn from_zero_terminated(zero_terminated: bool) -> Self {
        if zero_terminated { Self::Nul } else { Self::Newline }
    }

    /// The terminator byte.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Newline => b'\n',
            Self::Nul => b'\0',
        }
    }
}

/// Iterator over the records of a buffered reader.
///
/// Records are yielded without their terminator. A final record that lacks a
/// terminator is still yielded; an empty input yields nothing.
///
/// ```rust
/// use cutr_core::{RecordTerminator, Records};
///
/// let input: &[u8] = b"ab\0cd";
/// let records: Vec<Vec<u8>> = Records::new(input, RecordTerminator::Nul)
///     .collect::<Result<_, _>>()?;
/// assert_eq!(records, vec![b"ab".to_vec(), b"cd".to_vec()]);
/// # Ok::<(), cutr_core::Error>(())
/// ```
#[derive(Debug)]
pub struct Records<R> {
    reader: R,
    terminator: u8,
    buf: Vec<u8>,
}

impl<R: BufRead> Records<R> {
    /// Split `reader` on `terminator`.
    pub fn new(reader: R, terminator: RecordTerminator) -> Self {
        Self {
            reader,
            terminator: terminator.as_byte(),
            buf: Vec::new(),
        }
    }

    /// Read the next record into the internal buffer.
    ///
    /// Returns `Ok(None)` at end of input. Borrowing the buffer avoids an
    /// allocation per record on the streaming path.
    pub fn next_record(&mut self) -> Result<Option<&[u8]>> {
        self.buf.clear();
        let read = self.reader.read_until(self.terminator, &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&self.terminator) {
            self.buf.pop();
        }
        Ok(Some(&self.buf))
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
            .map(|record| record.map(<[u8]>::to_vec))
            .transpose()
    }
}

/// Counters describing one processed source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProcessStats {
    /// Records read from the input.
    pub records_read: usize,
    /// Records written to the output.
    pub records_written: usize,
    /// Records dropped by only-delimited suppression.
    pub records_suppressed: usize,
}

impl ProcessStats {
    /// Add another source's counters to these.
    pub fn absorb(&mut self, other: Self) {
        self.records_read += other.records_read;
        self.records_written += other.records_written;
        self.records_suppressed += other.records_suppressed;
    }
}

/// Cut every record of `reader` according to `config`, writing to `writer`.
///
/// Suppressed records produce no output at all, not even a terminator.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if reading the input fails and
/// [`crate::Error::Output`] if writing fails. Output already written for
/// earlier records is kept.
///
/// # Examples
///
/// ```rust
/// use cutr_core::{CutConfig, Unit, process};
///
/// let config = CutConfig::builder()
///     .unit(Unit::Field, "1,3")
///     .delimiter(":")
///     .zero_terminated(true)
///     .build()?;
///
/// let mut out = Vec::new();
/// process(&b"a1:A1:YayOne\0b1:B1:BeOne\0"[..], &mut out, &config)?;
/// assert_eq!(out, b"a1:YayOne\0b1:BeOne\0");
/// # Ok::<(), cutr_core::Error>(())
/// ```
pub fn process<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    config: &CutConfig,
) -> Result<ProcessStats> {
    let terminator = config.terminator().as_byte();
    let mut records = Records::new(reader, config.terminator());
    let mut stats = ProcessStats::default();

    while let Some(record) = records.next_record()? {
        stats.records_read += 1;
        trace!(record = stats.records_read, len = record.len(), "processing record");

        match select(
            record,
            config.mode(),
            config.intervals(),
            config.output_delimiter(),
        ) {
            Some(selected) => {
                writer
                    .write_all(&selected)
                    .and_then(|()| writer.write_all(&[terminator]))
                    .map_err(Error::Output)?;
                stats.records_written += 1;
            },
            None => stats.records_suppressed += 1,
        }
    }

    writer.flush().map_err(Error::Output)?;
    debug!(?stats, "finished input");
    Ok(stats)
}
