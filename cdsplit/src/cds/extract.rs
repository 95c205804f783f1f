use log::{
    debug,
    warn,
};

use super::config::ExtractConfig;
use super::rescue::rescue_origin;
use super::trim::trim_to_frame;
use super::validate::is_regular;
use crate::data_structs::coords::Location;
use crate::data_structs::{
    CdsRegion,
    GenomicRecord,
};
use crate::error::Result;
use crate::index::{
    IntervalEntry,
    IntervalIndex,
};

/// Non-overlapping, codon-aligned coding regions of one record.
///
/// The record is partitioned and the origin rescue runs when the value is
/// built, so every error is reported by [`NonOverlappingRegions::try_new`].
/// Regions of the partition cells are produced on demand by
/// [`NonOverlappingRegions::iter`] in coordinate order, followed by the
/// regions rescued across the origin.
#[derive(Debug, Clone)]
pub struct NonOverlappingRegions<'a> {
    record:    &'a GenomicRecord,
    locus_key: String,
    cells:     Vec<IntervalEntry>,
    rescued:   Vec<CdsRegion>,
}

impl<'a> NonOverlappingRegions<'a> {
    pub fn try_new(
        record: &'a GenomicRecord,
        config: &ExtractConfig,
    ) -> Result<Self> {
        let partition = IntervalIndex::from_record_filtered(record, |feature| {
            feature.kind() == &config.feature_kind
        })
        .partition();
        debug!(
            "Record '{}' partitioned into {} cells",
            record.id(),
            partition.len()
        );

        let rescued = if config.rescue_origin {
            rescue_origin(record, &partition, &config.locus_key)?
        }
        else {
            Vec::new()
        };

        Ok(Self {
            record,
            locus_key: config.locus_key.clone(),
            cells: partition.iter().collect(),
            rescued,
        })
    }

    pub fn record(&self) -> &GenomicRecord { self.record }

    /// Cells of the partition, ordered by position.
    pub fn cells(&self) -> &[IntervalEntry] { &self.cells }

    /// Regions reconstructed across the origin.
    pub fn rescued(&self) -> &[CdsRegion] { &self.rescued }

    pub fn iter(&self) -> RegionIter<'_, 'a> {
        RegionIter {
            regions: self,
            cell:    0,
            rescued: 0,
        }
    }

    /// Region emitted for one partition cell, if its owner qualifies.
    fn cell_region(
        &self,
        cell: &IntervalEntry,
    ) -> Option<CdsRegion> {
        let feature = self.record.feature(cell.sole_owner()?)?;
        let frame = feature.location().as_simple()?;
        if !is_regular(feature, self.record) {
            return None;
        }
        let Some(locus_tag) = feature.qualifiers().first(&self.locus_key)
        else {
            warn!(
                "Feature {} of record '{}' has no '{}' qualifier, skipped",
                feature.location(),
                self.record.id(),
                self.locus_key
            );
            return None;
        };

        let trimmed = trim_to_frame(frame, &cell.span())?;
        Some(CdsRegion::new(
            locus_tag,
            Location::simple(trimmed, feature.strand()),
        ))
    }
}

/// Iterator over the regions of [`NonOverlappingRegions`].
pub struct RegionIter<'r, 'a> {
    regions: &'r NonOverlappingRegions<'a>,
    cell:    usize,
    rescued: usize,
}

impl Iterator for RegionIter<'_, '_> {
    type Item = CdsRegion;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(cell) = self.regions.cells.get(self.cell) {
            self.cell += 1;
            if let Some(region) = self.regions.cell_region(cell) {
                return Some(region);
            }
        }
        let region = self.regions.rescued.get(self.rescued).cloned();
        if region.is_some() {
            self.rescued += 1;
        }
        region
    }
}

impl<'r, 'a> IntoIterator for &'r NonOverlappingRegions<'a> {
    type IntoIter = RegionIter<'r, 'a>;
    type Item = CdsRegion;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Collects the non-overlapping coding regions of `record`.
pub fn extract_nonoverlapping_cds(
    record: &GenomicRecord,
    config: &ExtractConfig,
) -> Result<Vec<CdsRegion>> {
    Ok(NonOverlappingRegions::try_new(record, config)?
        .iter()
        .collect())
}
