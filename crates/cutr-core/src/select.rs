//! # Record selection
//!
//! Applies a canonical interval list to one record in one addressing mode and
//! rejoins the selected pieces with the output delimiter.
//!
//! ## Shared Rules
//!
//! - Intervals are applied in the order given.
//! - An interval starting past the end of the record contributes nothing.
//! - An interval's end is clamped to the record length.
//! - The output delimiter goes *between* pieces that were actually emitted,
//!   never before the first or after the last.
//!
//! ## Per-mode Rules
//!
//! | Mode | Unit | Joined with the output delimiter |
//! |------|------|----------------------------------|
//! | bytes | byte offset | between intervals |
//! | chars | codepoint offset | between intervals |
//! | fields | field index | between every selected field |
//!
//! In field mode a record without any delimiter is a single field; with
//! only-delimited set such a record is suppressed entirely.

use std::ops::Range;

use memchr::memmem;
use tracing::trace;

use crate::interval::Interval;
use crate::mode::Mode;

/// Select the parts of `line` covered by `intervals`.
///
/// Returns `None` when the record must be suppressed (field mode with
/// only-delimited set and no delimiter present), otherwise the selected
/// bytes without a record terminator.
///
/// # Examples
///
/// ```rust
/// use cutr_core::{Interval, Mode, select};
///
/// let chars = select(b"Hello,World", &Mode::Chars, &[Interval::point(1), Interval::new(2, 5)], b"|");
/// assert_eq!(chars.as_deref(), Some(&b"H|ello"[..]));
///
/// let fields = select(
///     b"Hello,World,How,Are,You,Today",
///     &Mode::fields(",", false),
///     &[Interval::new(1, 2), Interval::new(4, 9999)],
///     b",",
/// );
/// assert_eq!(fields.as_deref(), Some(&b"Hello,World,Are,You,Today"[..]));
/// ```
#[must_use]
pub fn select(
    line: &[u8],
    mode: &Mode,
    intervals: &[Interval],
    output_delimiter: &[u8],
) -> Option<Vec<u8>> {
    match mode {
        Mode::Bytes => Some(select_bytes(line, intervals, output_delimiter)),
        Mode::Chars => Some(select_chars(line, intervals, output_delimiter)),
        Mode::Fields {
            delimiter,
            only_delimited,
        } => select_fields(
            line,
            delimiter,
            *only_delimited,
            intervals,
            output_delimiter,
        ),
    }
}

/// Collects pieces, placing the delimiter only between pieces actually pushed.
struct Joiner<'a> {
    out: Vec<u8>,
    delimiter: &'a [u8],
    pieces: usize,
}

impl<'a> Joiner<'a> {
    fn new(capacity: usize, delimiter: &'a [u8]) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
            delimiter,
            pieces: 0,
        }
    }

    fn push(&mut self, piece: &[u8]) {
        if self.pieces > 0 {
            self.out.extend_from_slice(self.delimiter);
        }
        self.out.extend_from_slice(piece);
        self.pieces += 1;
    }

    fn finish(self) -> Vec<u8> {
        self.out
    }
}

fn select_bytes(line: &[u8], intervals: &[Interval], output_delimiter: &[u8]) -> Vec<u8> {
    let mut joiner = Joiner::new(line.len(), output_delimiter);
    for fitted in intervals.iter().filter_map(|i| i.clamp_to(line.len())) {
        trace!(interval = %fitted, "byte slice");
        joiner.push(&line[fitted.as_slice_range()]);
    }
    joiner.finish()
}

fn select_chars(line: &[u8], intervals: &[Interval], output_delimiter: &[u8]) -> Vec<u8> {
    let text = String::from_utf8_lossy(line);
    // Byte offset of every codepoint start, plus the end of the text
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = bounds.len() - 1;

    let mut joiner = Joiner::new(text.len(), output_delimiter);
    for fitted in intervals.iter().filter_map(|i| i.clamp_to(char_count)) {
        trace!(interval = %fitted, char_count, "char slice");
        let span = bounds[fitted.start - 1]..bounds[fitted.end];
        joiner.push(&text.as_bytes()[span]);
    }
    joiner.finish()
}

fn select_fields(
    line: &[u8],
    delimiter: &[u8],
    only_delimited: bool,
    intervals: &[Interval],
    output_delimiter: &[u8],
) -> Option<Vec<u8>> {
    let fields = split_fields(line, delimiter);
    if fields.len() == 1 && only_delimited {
        trace!("suppressing undelimited record");
        return None;
    }

    let mut joiner = Joiner::new(line.len(), output_delimiter);
    for fitted in intervals.iter().filter_map(|i| i.clamp_to(fields.len())) {
        trace!(interval = %fitted, field_count = fields.len(), "field slice");
        for span in &fields[fitted.as_slice_range()] {
            joiner.push(&line[span.clone()]);
        }
    }
    Some(joiner.finish())
}

/// Byte ranges of each field in `line`. Always at least one field.
fn split_fields(line: &[u8], delimiter: &[u8]) -> Vec<Range<usize>> {
    if delimiter.is_empty() {
        return vec![0..line.len()];
    }

    let mut fields = Vec::new();
    let mut start = 0;
    for found in memmem::find_iter(line, delimiter) {
        fields.push(start..found);
        start = found + delimiter.len();
    }
    fields.push(start..line.len());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::UNBOUNDED;

    fn run(line: &str, mode: &Mode, intervals: &[Interval], output_delimiter: &str) -> Option<String> {
        select(line.as_bytes(), mode, intervals, output_delimiter.as_bytes())
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    fn span(start: usize, end: usize) -> Interval {
        Interval::new(start, end)
    }

    #[test]
    fn test_bytes_single_range() {
        assert_eq!(
            run("Hello,World", &Mode::Bytes, &[span(1, 5)], ""),
            Some("Hello".to_string())
        );
    }

    #[test]
    fn test_bytes_join_and_skip() {
        // Given: a second interval that starts past the end of the line
        let intervals = [span(1, 3), span(5, 6), span(20, 30)];

        // When: selecting bytes with a visible output delimiter
        let out = run("abcdefgh", &Mode::Bytes, &intervals, "|");

        // Then: no trailing delimiter is left for the skipped interval
        assert_eq!(out, Some("abc|ef".to_string()));
    }

    #[test]
    fn test_bytes_can_split_codepoints() {
        // "く" is three bytes; cutting at byte 4 keeps a lone lead byte of "Ṟ"
        let line = "くṞ".as_bytes();
        let out = select(line, &Mode::Bytes, &[span(1, 4)], b"").unwrap_or_default();
        assert_eq!(out, [&"く".as_bytes()[..], &[0xe1][..]].concat());
    }

    #[test]
    fn test_bytes_multi_byte_ranges() {
        let out = run("கற்க கற்க", &Mode::Bytes, &[span(1, 12), span(14, 22)], "%");
        assert_eq!(out, Some("கற்க%கற்".to_string()));

        let ascii = run("Hello,World", &Mode::Bytes, &[span(1, 12), span(14, 22)], "%");
        assert_eq!(ascii, Some("Hello,World".to_string()));
    }

    #[test]
    fn test_chars_multi_interval_join() {
        assert_eq!(
            run("Hello,World", &Mode::Chars, &[span(1, 1), span(2, 5)], "|"),
            Some("H|ello".to_string())
        );
    }

    #[test]
    fn test_chars_count_codepoints_not_bytes() {
        assert_eq!(
            run("Ծﺀ⇥០៸꒺", &Mode::Chars, &[span(1, 3), span(5, 7)], "%"),
            Some("Ծﺀ⇥%៸꒺".to_string())
        );
        assert_eq!(
            run("நிற்க அதற்குத்", &Mode::Chars, &[span(1, 3), span(5, 7)], "%"),
            Some("நிற%க அ".to_string())
        );
    }

    #[test]
    fn test_chars_split_grapheme_clusters() {
        // facepalm + skin tone + ZWJ + male sign + VS16: five codepoints
        let out = run("🤦🏼‍♂️", &Mode::Chars, &[span(1, 1)], "");
        assert_eq!(out, Some("🤦".to_string()));
    }

    #[test]
    fn test_chars_decode_invalid_utf8_lossily() {
        let out = select(b"a\xffbc", &Mode::Chars, &[span(2, 3)], b"");
        assert_eq!(out.as_deref(), Some("\u{FFFD}b".as_bytes()));
    }

    #[test]
    fn test_malformed_intervals_select_nothing() {
        // Given: a zero start and a reversed interval next to a valid one
        let intervals = [span(0, 3), span(5, 3), span(2, 2)];

        // Then: every mode skips the malformed ones
        assert_eq!(run("abcdef", &Mode::Bytes, &intervals, "|"), Some("b".to_string()));
        assert_eq!(run("abcdef", &Mode::Chars, &intervals, "|"), Some("b".to_string()));
        assert_eq!(
            run("a,b,c,d,e", &Mode::fields(",", false), &intervals, ","),
            Some("b".to_string())
        );
    }

    #[test]
    fn test_chars_empty_line() {
        assert_eq!(run("", &Mode::Chars, &[span(1, 5)], "|"), Some(String::new()));
    }

    #[test]
    fn test_fields_skip_and_clamp() {
        let mode = Mode::fields(",", false);
        let out = run(
            "Hello,World,How,Are,You,Today",
            &mode,
            &[span(1, 2), span(4, 9999)],
            ",",
        );
        assert_eq!(out, Some("Hello,World,Are,You,Today".to_string()));
    }

    #[test]
    fn test_fields_output_delimiter_used_within_and_across_groups() {
        let mode = Mode::fields(",", false);
        let out = run(
            "f1,f2,f3,f4,f5,f6",
            &mode,
            &[span(1, 2), span(5, UNBOUNDED)],
            "|",
        );
        assert_eq!(out, Some("f1|f2|f5|f6".to_string()));
    }

    #[test]
    fn test_fields_only_delimited_suppresses() {
        let mode = Mode::fields(",", true);
        assert_eq!(run("no delimiter here", &mode, &[span(1, 1)], ","), None);
        assert_eq!(run("", &mode, &[span(1, 1)], ","), None);
        assert_eq!(run("a,b", &mode, &[span(2, 2)], ","), Some("b".to_string()));
    }

    #[test]
    fn test_fields_undelimited_line_without_flag() {
        let mode = Mode::fields(",", false);
        assert_eq!(run("plain", &mode, &[span(1, 1)], ","), Some("plain".to_string()));
        assert_eq!(run("plain", &mode, &[span(2, 3)], ","), Some(String::new()));
    }

    #[test]
    fn test_fields_keep_empty_fields() {
        let mode = Mode::fields(":", false);
        assert_eq!(
            run("a1:", &mode, &[span(1, UNBOUNDED)], ":"),
            Some("a1:".to_string())
        );
        assert_eq!(run("a::b", &mode, &[span(2, 3)], "-"), Some("-b".to_string()));
    }

    #[test]
    fn test_fields_multi_byte_delimiter() {
        let mode = Mode::fields("::", false);
        assert_eq!(
            run("a::b:c::d", &mode, &[span(2, 3)], "|"),
            Some("b:c|d".to_string())
        );
    }

    #[test]
    fn test_intervals_applied_in_given_order() {
        let out = run("abcdef", &Mode::Bytes, &[span(4, 5), span(1, 2)], "-");
        assert_eq!(out, Some("de-ab".to_string()));
    }

    #[test]
    fn test_split_fields() {
        assert_eq!(split_fields(b"a,b,,c", b","), vec![0..1, 2..3, 4..4, 5..6]);
        assert_eq!(split_fields(b"abc", b""), vec![0..3]);
        assert_eq!(split_fields(b"", b","), vec![0..0]);
    }
}
