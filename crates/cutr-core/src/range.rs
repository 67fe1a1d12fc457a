//! # Range-list parsing
//!
//! Turns a human-written list such as `"1-3,5,8-"` into a canonical interval
//! list: sorted by start, with overlapping ranges merged. The canonical list
//! is computed once per run and then applied to every record.
//!
//! ## Supported Tokens
//!
//! | Token | Interval |
//! |-------|----------|
//! | `N`   | `[N, N]` |
//! | `N-M` | `[N, M]` |
//! | `-M`  | `[1, M]` |
//! | `N-`  | `[N, UNBOUNDED]` |
//!
//! Tokens are separated by commas; whitespace around a token is ignored.
//!
//! ## Merge Rule
//!
//! Only ranges that overlap are fused (`next.start <= current.end`).
//! Ranges that merely touch, like `1-3,4-6`, stay separate, so an output
//! delimiter is still placed between them in byte and character mode.

use tracing::debug;

use crate::interval::{Interval, UNBOUNDED};
use crate::{Error, Result};

/// Parse a range-list expression into a canonical interval list.
///
/// # Errors
///
/// Returns [`Error::Parse`] if:
/// - a bound is not a non-negative integer (`"1-a"`, `"x"`)
/// - a token is `"-"` with neither bound present
/// - a token is empty (`""`, `"1,,3"`)
/// - a position is `0` (positions are numbered from 1)
/// - a range is decreasing (`"5-3"`)
///
/// # Examples
///
/// ```rust
/// use cutr_core::{Interval, UNBOUNDED, parse_range_list};
///
/// assert_eq!(parse_range_list("1-3,2-4")?, vec![Interval::new(1, 4)]);
/// assert_eq!(parse_range_list("-3")?, vec![Interval::new(1, 3)]);
/// assert_eq!(parse_range_list("1-")?, vec![Interval::new(1, UNBOUNDED)]);
/// assert!(parse_range_list("-").is_err());
/// # Ok::<(), cutr_core::Error>(())
/// ```
pub fn parse_range_list(expression: &str) -> Result<Vec<Interval>> {
    let parsed = expression
        .split(',')
        .map(parse_token)
        .collect::<Result<Vec<_>>>()?;
    debug!(expression, ?parsed, "parsed range list");

    let merged = merge(parsed);
    debug!(?merged, "merged range list");
    Ok(merged)
}

fn parse_token(token: &str) -> Result<Interval> {
    let token = token.trim();
    if token.is_empty() {
        return Err(Error::Parse("empty range in list".to_string()));
    }

    let Some((left, right)) = token.split_once('-') else {
        let position = parse_position(token, token)?;
        return Ok(Interval::point(position));
    };

    let (left, right) = (left.trim(), right.trim());
    if left.is_empty() && right.is_empty() {
        return Err(Error::Parse(format!(
            "invalid range with no endpoint: {token}"
        )));
    }

    let start = if left.is_empty() {
        1
    } else {
        parse_position(left, token)?
    };
    let end = if right.is_empty() {
        UNBOUNDED
    } else {
        parse_position(right, token)?
    };

    if start > end {
        return Err(Error::Parse(format!("invalid decreasing range: {token}")));
    }
    Ok(Interval::new(start, end))
}

fn parse_position(text: &str, token: &str) -> Result<usize> {
    let position: usize = text
        .parse()
        .map_err(|e| Error::Parse(format!("invalid position '{text}' in '{token}': {e}")))?;

    if position == 0 {
        return Err(Error::Parse(format!(
            "positions are numbered from 1: {token}"
        )));
    }
    Ok(position)
}

/// Sort intervals by start and fuse the ones that overlap.
///
/// Applying `merge` to an already canonical list returns it unchanged.
///
/// ```rust
/// use cutr_core::{Interval, merge};
///
/// let merged = merge(vec![Interval::new(5, 7), Interval::new(1, 3), Interval::new(2, 4)]);
/// assert_eq!(merged, vec![Interval::new(1, 4), Interval::new(5, 7)]);
///
/// // touching ranges are kept apart
/// let touching = merge(vec![Interval::new(1, 3), Interval::new(4, 6)]);
/// assert_eq!(touching.len(), 2);
/// ```
#[must_use]
pub fn merge(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort_unstable_by_key(|interval| interval.start);

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(current) if interval.start <= current.end => {
                current.end = current.end.max(interval.end);
            },
            _ => merged.push(interval),
        }
    }
    merged
}

/// Compute the gaps around `intervals` within `[1, max]`.
///
/// The input is sorted defensively, so any interval list is accepted. When
/// the intervals already cover `[1, max]` the result is empty.
///
/// ```rust
/// use cutr_core::{Interval, complement};
///
/// let selected = [Interval::new(2, 5)];
/// assert_eq!(
///     complement(&selected, 6),
///     vec![Interval::point(1), Interval::point(6)],
/// );
/// assert!(complement(&[Interval::new(1, 6)], 6).is_empty());
/// ```
#[must_use]
pub fn complement(intervals: &[Interval], max: usize) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_unstable_by_key(|interval| interval.start);

    let mut gaps = Vec::with_capacity(sorted.len() + 1);
    // `None` once a range has reached the largest representable position
    let mut cursor = Some(1usize);

    for interval in &sorted {
        let Some(next) = cursor else {
            break;
        };
        if interval.start > next {
            gaps.push(Interval::new(next, (interval.start - 1).min(max)));
        }
        if interval.end >= next {
            cursor = interval.end.checked_add(1);
        }
    }

    if let Some(next) = cursor {
        if next <= max {
            gaps.push(Interval::new(next, max));
        }
    }

    gaps.retain(|gap| gap.start <= max);
    debug!(?sorted, max, ?gaps, "complemented range list");
    gaps
}
