//! Extraction of non-overlapping coding regions.
//!
//! The coding features of a record are partitioned with an
//! [`IntervalIndex`](crate::index::IntervalIndex). Every cell owned by a
//! single regular feature is trimmed to the codon boundaries of that feature
//! ([`trim_to_frame`]) and emitted as a [`CdsRegion`](crate::CdsRegion).
//! Features cut by the origin of a circular record are recovered by
//! [`rescue_origin`].
//!
//! ```
//! use cdsplit::prelude::*;
//!
//! let mut sequence = b"ATGAAATAA".to_vec();
//! sequence.extend_from_slice(b"CCC");
//! let feature = Feature::new(
//!     FeatureKind::Cds,
//!     Location::simple(Span::new(0, 9), Strand::Forward),
//!     Qualifiers::new(),
//! )
//! .with_qualifier("locus_tag", Some("tag_1"));
//! let record =
//!     GenomicRecord::try_new("demo", sequence, Topology::Linear, vec![feature])?;
//!
//! let regions = extract_nonoverlapping_cds(&record, &ExtractConfig::default())?;
//! assert_eq!(regions.len(), 1);
//! assert_eq!(regions[0].locus_tag(), "tag_1");
//! # Ok::<(), cdsplit::Error>(())
//! ```

mod config;
mod extract;
mod rescue;
mod trim;
mod validate;


pub use config::ExtractConfig;
pub use extract::{
    extract_nonoverlapping_cds,
    NonOverlappingRegions,
    RegionIter,
};
pub use rescue::{
    rescue_origin,
    BoundaryOwners,
};
pub use trim::{
    round_up_to_codon,
    trim_to_frame,
};
pub use validate::{
    is_regular,
    is_start_codon,
    is_stop_codon,
    regularity,
    Irregularity,
    STOP_CODONS,
};
