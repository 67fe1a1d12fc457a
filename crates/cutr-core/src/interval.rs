//! Closed, 1-based integer intervals shared by every addressing mode.
//!
//! An [`Interval`] says nothing about *what* it indexes; the same value
//! selects bytes, codepoints or fields depending on the [`Mode`](crate::Mode)
//! it is applied with.

use std::fmt;

/// Sentinel end position for an open-ended range such as `"3-"`.
pub const UNBOUNDED: usize = usize::MAX;

/// A closed interval `[start, end]`, 1-based, inclusive on both ends.
///
/// # Examples
///
/// ```rust
/// use cutr_core::{Interval, UNBOUNDED};
///
/// let fields = Interval::new(2, 4);
/// assert!(fields.contains(3));
/// assert_eq!(fields.len(), 3);
///
/// let rest = Interval::new(5, UNBOUNDED);
/// assert_eq!(rest.to_string(), "5-");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    /// First selected position (1-based).
    pub start: usize,
    /// Last selected position (inclusive).
    pub end: usize,
}

impl Interval {
    /// Create an interval covering `start..=end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create an interval covering exactly one position.
    #[must_use]
    pub const fn point(position: usize) -> Self {
        Self::new(position, position)
    }

    /// Number of positions covered.
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // a well-formed interval is never empty
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start).saturating_add(1)
    }

    /// Whether `position` lies inside the interval.
    #[must_use]
    pub const fn contains(&self, position: usize) -> bool {
        self.start <= position && position <= self.end
    }

    /// Whether the interval runs to the end of every record.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.end == UNBOUNDED
    }

    /// Fit the interval to a record of `len` addressable units.
    ///
    /// Returns `None` when the interval starts past the end of the record or
    /// is malformed (a zero start, or a start after the end), otherwise a new interval whose `end` is at most `len`. The receiver is
    /// left untouched so one canonical list can serve every record.
    ///
    /// ```rust
    /// use cutr_core::Interval;
    ///
    /// assert_eq!(Interval::new(4, 9999).clamp_to(6), Some(Interval::new(4, 6)));
    /// assert_eq!(Interval::new(7, 9).clamp_to(6), None);
    /// assert_eq!(Interval::new(5, 3).clamp_to(6), None);
    /// ```
    #[must_use]
    pub const fn clamp_to(&self, len: usize) -> Option<Self> {
        if self.start == 0 || self.start > self.end || self.start > len {
            return None;
        }
        let end = if self.end < len { self.end } else { len };
        Some(Self::new(self.start, end))
    }

    /// Zero-based, half-open index range for slicing.
    ///
    /// Only meaningful for an interval already fitted with [`Self::clamp_to`].
    #[must_use]
    pub(crate) const fn as_slice_range(&self) -> std::ops::Range<usize> {
        (self.start - 1)..self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            write!(f, "{}-", self.start)
        } else if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Render a list of intervals back into range-list syntax.
///
/// ```rust
/// use cutr_core::{Interval, UNBOUNDED, interval::format_list};
///
/// let list = [Interval::new(1, 3), Interval::point(5), Interval::new(8, UNBOUNDED)];
/// assert_eq!(format_list(&list), "1-3,5,8-");
/// ```
#[must_use]
pub fn format_list(intervals: &[Interval]) -> String {
    intervals
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
