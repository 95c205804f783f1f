//! Interval index over the feature parts of a record.
//!
//! [`IntervalIndex`] holds one entry per `(location part, feature)` and can
//! be reduced to a non-overlapping partition of the covered range with
//! [`IntervalIndex::split_overlaps`] and [`IntervalIndex::merge_same_range`].
//! Every entry is tagged with the [`Owners`] of its range.

use itertools::Itertools;
use log::trace;
use rust_lapper::{
    Interval,
    Lapper,
};

use crate::data_structs::coords::Span;
use crate::data_structs::typedef::PosType;
use crate::data_structs::{
    Feature,
    FeatureKind,
    GenomicRecord,
};


/// Position of a feature in the feature table of its record.
pub type FeatureId = usize;

/// Features owning an index entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Owners {
    /// Range belongs to a single feature.
    One(FeatureId),
    /// Range is shared by several distinct features, ids sorted.
    Many(Vec<FeatureId>),
}

impl Owners {
    /// Builds the tag for a set of ids, collapsing duplicates. `None` when
    /// `ids` is empty.
    pub fn from_ids<I: IntoIterator<Item = FeatureId>>(ids: I) -> Option<Self> {
        let mut ids = ids.into_iter().sorted_unstable().dedup().collect_vec();
        match ids.len() {
            0 => None,
            1 => Some(Owners::One(ids.remove(0))),
            _ => Some(Owners::Many(ids)),
        }
    }

    /// The owning feature when the range is not shared.
    pub fn sole_owner(&self) -> Option<FeatureId> {
        match self {
            Owners::One(id) => Some(*id),
            Owners::Many(_) => None,
        }
    }

    pub fn ids(&self) -> &[FeatureId] {
        match self {
            Owners::One(id) => std::slice::from_ref(id),
            Owners::Many(ids) => ids.as_slice(),
        }
    }

    pub fn is_shared(&self) -> bool { matches!(self, Owners::Many(_)) }
}

/// One interval of the index and the features owning it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalEntry {
    span:   Span,
    owners: Owners,
}

impl IntervalEntry {
    pub fn new(
        span: Span,
        owners: Owners,
    ) -> Self {
        Self { span, owners }
    }

    pub fn span(&self) -> Span { self.span }

    pub fn owners(&self) -> &Owners { &self.owners }

    pub fn sole_owner(&self) -> Option<FeatureId> { self.owners.sole_owner() }

    /// Bounds of the entry clipped to `span`, `None` if they do not overlap.
    pub fn clipped(
        &self,
        span: &Span,
    ) -> Option<Span> {
        self.span.intersect(span)
    }
}

impl From<&Interval<PosType, Owners>> for IntervalEntry {
    fn from(value: &Interval<PosType, Owners>) -> Self {
        Self {
            span:   Span::new(value.start, value.stop),
            owners: value.val.clone(),
        }
    }
}

impl From<IntervalEntry> for Interval<PosType, Owners> {
    fn from(value: IntervalEntry) -> Self {
        Interval {
            start: value.span.start(),
            stop:  value.span.end(),
            val:   value.owners,
        }
    }
}

/// Queryable set of feature intervals of one record.
#[derive(Debug, Clone)]
pub struct IntervalIndex {
    lapper: Lapper<PosType, Owners>,
}

impl IntervalIndex {
    /// Index over all features except `source`.
    pub fn from_record(record: &GenomicRecord) -> Self {
        Self::from_record_filtered(record, |feature| {
            feature.kind() != &FeatureKind::Source
        })
    }

    /// Index over the features accepted by `predicate`. Zero-width parts are
    /// not indexed.
    pub fn from_record_filtered<F>(
        record: &GenomicRecord,
        predicate: F,
    ) -> Self
    where
        F: Fn(&Feature) -> bool, {
        let intervals = record
            .features()
            .iter()
            .enumerate()
            .filter(|(_, feature)| predicate(feature))
            .flat_map(|(id, feature)| {
                feature
                    .location()
                    .parts()
                    .iter()
                    .filter(|part| !part.is_empty())
                    .map(move |part| {
                        Interval {
                            start: part.start(),
                            stop:  part.end(),
                            val:   Owners::One(id),
                        }
                    })
                    .collect_vec()
            })
            .collect_vec();
        trace!(
            "Indexed {} intervals of record '{}'",
            intervals.len(),
            record.id()
        );
        Self::from_intervals(intervals)
    }

    fn from_intervals(intervals: Vec<Interval<PosType, Owners>>) -> Self {
        Self {
            lapper: Lapper::new(intervals),
        }
    }

    /// Cuts every entry at every entry boundary lying strictly inside it.
    /// Pieces keep the owners of the entry they were cut from.
    pub fn split_overlaps(&self) -> Self {
        let boundaries = self
            .lapper
            .iter()
            .flat_map(|iv| [iv.start, iv.stop])
            .sorted_unstable()
            .dedup()
            .collect_vec();

        let mut pieces = Vec::with_capacity(self.lapper.len());
        for iv in self.lapper.iter().filter(|iv| iv.start < iv.stop) {
            let first = boundaries.partition_point(|b| *b <= iv.start);
            let last = boundaries.partition_point(|b| *b < iv.stop);
            let cuts = boundaries[first..last].iter().copied();

            let mut start = iv.start;
            for cut in cuts.chain(std::iter::once(iv.stop)) {
                if cut > start {
                    pieces.push(Interval {
                        start,
                        stop: cut,
                        val: iv.val.clone(),
                    });
                }
                start = cut;
            }
        }
        Self::from_intervals(pieces)
    }

    /// Collapses entries with identical bounds into one entry owned by the
    /// union of their owners.
    pub fn merge_same_range(&self) -> Self {
        let merged = self
            .lapper
            .iter()
            .map(|iv| ((iv.start, iv.stop), iv.val.ids()))
            .into_group_map()
            .into_iter()
            .filter_map(|((start, stop), owner_lists)| {
                Owners::from_ids(owner_lists.into_iter().flatten().copied())
                    .map(|val| Interval { start, stop, val })
            })
            .collect_vec();
        Self::from_intervals(merged)
    }

    /// Non-overlapping partition of the covered range, ordered by position.
    pub fn partition(&self) -> Self { self.split_overlaps().merge_same_range() }

    /// Entries overlapping `span`, with their own (unclipped) bounds.
    pub fn query(
        &self,
        span: &Span,
    ) -> Vec<IntervalEntry> {
        if span.is_empty() {
            return Vec::new();
        }
        self.lapper
            .find(span.start(), span.end())
            .map(IntervalEntry::from)
            .sorted_by_key(|entry| entry.span())
            .collect()
    }

    /// Entries covering the position `pos`.
    pub fn query_point(
        &self,
        pos: PosType,
    ) -> Vec<IntervalEntry> {
        match pos.checked_add(1) {
            Some(next) => self.query(&Span::new(pos, next)),
            None => Vec::new(),
        }
    }

    /// Entries ordered by start, then end.
    pub fn iter(&self) -> impl Iterator<Item = IntervalEntry> + '_ {
        self.lapper.iter().map(IntervalEntry::from)
    }

    pub fn len(&self) -> usize { self.lapper.len() }

    pub fn is_empty(&self) -> bool { self.lapper.is_empty() }
}

impl FromIterator<IntervalEntry> for IntervalIndex {
    fn from_iter<T: IntoIterator<Item = IntervalEntry>>(iter: T) -> Self {
        Self::from_intervals(iter.into_iter().map(Interval::from).collect_vec())
    }
}
