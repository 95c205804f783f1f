use std::fmt::Display;
use std::ops::Range;

use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::PosType;
use crate::error::{
    Error,
    Result,
};

/// Contiguous half-open interval `[start, end)` on a record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Span {
    start: PosType,
    end:   PosType,
}

impl Span {
    /// Creates a new `Span`.
    pub fn new(
        start: PosType,
        end: PosType,
    ) -> Self {
        assert!(
            start <= end,
            "Start position must be less than or equal to end position"
        );
        Self { start, end }
    }

    /// Creates a new `Span`, rejecting `start > end`.
    pub fn try_new(
        start: PosType,
        end: PosType,
    ) -> Result<Self> {
        if start > end {
            return Err(Error::MalformedLocation {
                start,
                end,
                length: end,
            });
        }
        Ok(Self { start, end })
    }

    /// Returns the start position.
    pub fn start(&self) -> PosType { self.start }

    /// Returns the end position.
    pub fn end(&self) -> PosType { self.end }

    /// Returns the length of the span.
    pub fn length(&self) -> PosType { self.end - self.start }

    pub fn is_empty(&self) -> bool { self.start == self.end }

    /// Checks if `pos` falls inside the span.
    pub fn contains_pos(
        &self,
        pos: PosType,
    ) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Checks if this span is fully contained within another span.
    pub fn is_in(
        &self,
        other: &Self,
    ) -> bool {
        self.start >= other.start && self.end <= other.end
    }

    /// Checks if the two spans share at least one base.
    pub fn overlaps(
        &self,
        other: &Self,
    ) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns the shared part of two spans, if any.
    pub fn intersect(
        &self,
        other: &Self,
    ) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(Self { start, end })
    }

    /// Index range into a sequence.
    pub fn as_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl From<Span> for Range<PosType> {
    fn from(value: Span) -> Self { value.start..value.end }
}

impl TryFrom<Range<PosType>> for Span {
    type Error = Error;

    fn try_from(value: Range<PosType>) -> Result<Self> {
        Span::try_new(value.start, value.end)
    }
}

impl Display for Span {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
