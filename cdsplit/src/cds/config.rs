use serde::{
    Deserialize,
    Serialize,
};

use super::NonOverlappingRegions;
use crate::data_structs::typedef::LOCUS_TAG_KEY;
use crate::data_structs::{
    FeatureKind,
    GenomicRecord,
};
use crate::error::Result;
use crate::with_field_fn;

/// Parameters of coding region extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Kind of the features to partition.
    pub feature_kind:  FeatureKind,
    /// Qualifier naming the locus of an emitted region.
    pub locus_key:     String,
    /// Reconstruct regions split by the origin of circular records.
    pub rescue_origin: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            feature_kind:  FeatureKind::Cds,
            locus_key:     LOCUS_TAG_KEY.to_string(),
            rescue_origin: true,
        }
    }
}

impl ExtractConfig {
    with_field_fn!(feature_kind, FeatureKind);

    with_field_fn!(locus_key, String);

    with_field_fn!(rescue_origin, bool);

    /// Partitions `record` and prepares its regions.
    pub fn try_finish<'a>(
        &self,
        record: &'a GenomicRecord,
    ) -> Result<NonOverlappingRegions<'a>> {
        NonOverlappingRegions::try_new(record, self)
    }
}
