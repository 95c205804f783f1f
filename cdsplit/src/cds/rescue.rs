//! Reconstruction of coding regions cut by the origin of a circular record.
//!
//! The linear coordinates of a circular record split a feature running
//! through the origin into a part ending at `length` and a part starting at
//! `0`. Such features are compound and never emitted by the partition walk;
//! they are recovered here from the two partition cells touching the origin.

use log::{
    debug,
    warn,
};

use super::trim::round_up_to_codon;
use super::validate::is_regular;
use crate::data_structs::coords::{
    Location,
    Span,
};
use crate::data_structs::typedef::{
    PosType,
    CODON_LENGTH,
};
use crate::data_structs::{
    CdsRegion,
    Feature,
    GenomicRecord,
    Strand,
};
use crate::error::{
    OriginSide,
    RescueConflict,
    Result,
};
use crate::index::{
    FeatureId,
    IntervalEntry,
    IntervalIndex,
};

/// Sole owners of the partition cells on both sides of the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryOwners {
    /// One feature owns both the end cell and the start cell.
    Both(FeatureId),
    /// Only the end cell has a sole owner.
    EndOnly(FeatureId),
    /// Only the start cell has a sole owner.
    StartOnly(FeatureId),
    /// Neither cell has a sole owner.
    Neither,
}

impl BoundaryOwners {
    /// Classifies the owners of the end cell and the start cell. Two
    /// different sole owners are rejected.
    pub fn classify(
        end_cell: &IntervalEntry,
        start_cell: &IntervalEntry,
        record: &GenomicRecord,
        locus_key: &str,
    ) -> Result<Self> {
        let owners = match (end_cell.sole_owner(), start_cell.sole_owner()) {
            (Some(end), Some(start)) if end == start => BoundaryOwners::Both(end),
            (Some(end), Some(start)) => {
                return Err(RescueConflict::DistinctFeatures {
                    end_locus:   label(record, end, locus_key),
                    start_locus: label(record, start, locus_key),
                }
                .into())
            },
            (Some(end), None) => BoundaryOwners::EndOnly(end),
            (None, Some(start)) => BoundaryOwners::StartOnly(start),
            (None, None) => BoundaryOwners::Neither,
        };
        Ok(owners)
    }

    pub fn owner(&self) -> Option<FeatureId> {
        match self {
            BoundaryOwners::Both(id)
            | BoundaryOwners::EndOnly(id)
            | BoundaryOwners::StartOnly(id) => Some(*id),
            BoundaryOwners::Neither => None,
        }
    }
}

/// Locus tag of a feature, or its position when it has none.
fn label(
    record: &GenomicRecord,
    id: FeatureId,
    locus_key: &str,
) -> String {
    record
        .feature(id)
        .and_then(|feature| feature.qualifiers().first(locus_key))
        .map(str::to_string)
        .unwrap_or_else(|| format!("feature #{}", id))
}

/// The single partition cell covering `pos`.
fn boundary_cell(
    partition: &IntervalIndex,
    pos: PosType,
    side: OriginSide,
) -> Result<Option<IntervalEntry>> {
    let mut cells = partition.query_point(pos);
    match cells.len() {
        0 => Ok(None),
        1 => Ok(cells.pop()),
        n => Err(RescueConflict::AmbiguousBoundary { side, cells: n }.into()),
    }
}

/// Regions recovered around the origin of a circular `record` from its
/// non-overlapping `partition`.
///
/// Nothing is recovered from linear records, or when either position
/// `length - 1` or `0` lies outside of the partition.
pub fn rescue_origin(
    record: &GenomicRecord,
    partition: &IntervalIndex,
    locus_key: &str,
) -> Result<Vec<CdsRegion>> {
    if !record.is_circular() {
        return Ok(Vec::new());
    }
    let length = record.len();
    let end_cell = boundary_cell(partition, length - 1, OriginSide::End)?;
    let start_cell = boundary_cell(partition, 0, OriginSide::Start)?;
    let (Some(end_cell), Some(start_cell)) = (end_cell, start_cell)
    else {
        return Ok(Vec::new());
    };

    if end_cell.span().end() != length {
        return Err(RescueConflict::MisplacedBoundary {
            side:  OriginSide::End,
            start: end_cell.span().start(),
            end:   end_cell.span().end(),
        }
        .into());
    }
    if start_cell.span().start() != 0 {
        return Err(RescueConflict::MisplacedBoundary {
            side:  OriginSide::Start,
            start: start_cell.span().start(),
            end:   start_cell.span().end(),
        }
        .into());
    }

    let owners = BoundaryOwners::classify(&end_cell, &start_cell, record, locus_key)?;
    let Some(id) = owners.owner()
    else {
        return Ok(Vec::new());
    };
    let Some(feature) = record.feature(id)
    else {
        return Ok(Vec::new());
    };
    if !is_regular(feature, record) {
        return Ok(Vec::new());
    }

    let origin = Origin {
        feature,
        label: label(record, id, locus_key),
        end_cell: end_cell.span(),
        start_cell: start_cell.span(),
    };
    let rescued = match owners {
        BoundaryOwners::Both(_) => origin.rejoin()?,
        BoundaryOwners::EndOnly(_) => origin.extend_end()?,
        BoundaryOwners::StartOnly(_) => origin.extend_start()?,
        BoundaryOwners::Neither => None,
    };

    let Some(location) = rescued
    else {
        return Ok(Vec::new());
    };
    let Some(locus_tag) = feature.qualifiers().first(locus_key)
    else {
        warn!(
            "Rescued region {} of record '{}' has no '{}' qualifier, skipped",
            location,
            record.id(),
            locus_key
        );
        return Ok(Vec::new());
    };
    debug!(
        "Rescued {} {} across the origin of '{}'",
        locus_tag,
        location,
        record.id()
    );
    Ok(vec![CdsRegion::new(locus_tag, location)])
}

/// Origin-spanning owner together with the two boundary cells.
struct Origin<'a> {
    feature:    &'a Feature,
    label:      String,
    end_cell:   Span,
    start_cell: Span,
}

impl Origin<'_> {
    fn strand(&self) -> Strand { self.feature.strand() }

    /// Owner parts as `(end-side, start-side)`.
    fn parts(&self) -> Result<(Span, Span)> {
        match self.feature.location().parts_in_strand_order().as_slice() {
            [end_side, start_side] => Ok((*end_side, *start_side)),
            other => {
                Err(RescueConflict::NotOriginSpanning {
                    locus: self.label.clone(),
                    parts: other.len(),
                }
                .into())
            },
        }
    }

    fn span(
        &self,
        start: Option<PosType>,
        end: Option<PosType>,
    ) -> Result<Span> {
        match (start, end) {
            (Some(start), Some(end)) if start <= end => Ok(Span::new(start, end)),
            _ => {
                Err(RescueConflict::DegenerateReconstruction {
                    locus: self.label.clone(),
                    start: start.unwrap_or_default(),
                    end:   end.unwrap_or_default(),
                }
                .into())
            },
        }
    }

    /// Aligns the end cell's start to the owner's frame.
    fn frame_start(
        &self,
        end_side: &Span,
    ) -> Option<PosType> {
        let offset = self.end_cell.start().checked_sub(end_side.start())?;
        end_side.start().checked_add(round_up_to_codon(offset))
    }

    /// Aligns the start cell's end to the owner's frame.
    fn frame_end(
        &self,
        start_side: &Span,
    ) -> Option<PosType> {
        let offset = start_side.end().checked_sub(self.start_cell.end())?;
        start_side.end().checked_sub(round_up_to_codon(offset))
    }

    /// Builds the location from non-empty `parts` and checks its frame.
    fn finish(
        &self,
        parts: Vec<Span>,
    ) -> Result<Option<Location>> {
        let parts: Vec<Span> = parts.into_iter().filter(|p| !p.is_empty()).collect();
        if parts.is_empty() {
            return Ok(None);
        }
        let location = Location::from_parts(parts, self.strand())?;
        if location.len() % CODON_LENGTH != 0 {
            return Err(RescueConflict::FrameMismatch {
                locus:  self.label.clone(),
                length: location.len(),
            }
            .into());
        }
        Ok(Some(location))
    }

    /// Owner covers both boundary cells: keep both parts, trimmed to the
    /// cells, as one compound location.
    fn rejoin(&self) -> Result<Option<Location>> {
        let (end_side, start_side) = self.parts()?;
        let head = self.span(self.frame_start(&end_side), Some(end_side.end()))?;
        let tail = self.span(Some(start_side.start()), self.frame_end(&start_side))?;
        let parts = match self.strand() {
            Strand::Forward => vec![head, tail],
            Strand::Reverse => vec![tail, head],
        };
        self.finish(parts)
    }

    /// Owner covers only the end cell: the region runs from the end cell up
    /// to the last codon boundary the start cell allows, folded back below
    /// `length`.
    fn extend_end(&self) -> Result<Option<Location>> {
        let (end_side, _) = self.parts()?;
        let reach = self.start_cell.end();
        let end = end_side
            .end()
            .checked_add(reach)
            .and_then(|e| e.checked_sub(round_up_to_codon(reach)));
        let span = self.span(self.frame_start(&end_side), end)?;
        self.finish(vec![span])
    }

    /// Owner covers only the start cell: the region begins after the bases
    /// the end cell would have contributed to a partial codon.
    fn extend_start(&self) -> Result<Option<Location>> {
        let (_, start_side) = self.parts()?;
        let carried = self.end_cell.length();
        let start = start_side
            .start()
            .checked_add(round_up_to_codon(carried))
            .and_then(|s| s.checked_sub(carried));
        let span = self.span(start, self.frame_end(&start_side))?;
        self.finish(vec![span])
    }
}
