pub use crate::cds::{
    extract_nonoverlapping_cds,
    is_regular,
    BoundaryOwners,
    ExtractConfig,
    NonOverlappingRegions,
};
pub use crate::data_structs::coords::{
    Location,
    Span,
};
pub use crate::data_structs::typedef::PosType;
pub use crate::data_structs::{
    CdsRegion,
    Feature,
    FeatureKind,
    GenomicRecord,
    Qualifiers,
    Strand,
    Topology,
};
pub use crate::error::{
    Error,
    Result,
};
pub use crate::index::{
    FeatureId,
    IntervalEntry,
    IntervalIndex,
    Owners,
};
pub use crate::utils::{
    sliding,
    translate_bacterial,
};
