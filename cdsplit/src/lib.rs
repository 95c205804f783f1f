//! # cdsplit
//!
//! `cdsplit` reduces the coding-sequence (CDS) annotation of a DNA record to
//! a set of **non-overlapping coding regions**. Each region belongs to exactly
//! one annotated feature and is trimmed so both of its ends fall on codon
//! boundaries of that feature's own reading frame. Features running through
//! the origin of a circular chromosome are reconstructed from their two
//! halves.
//!
//! The typical consumer is codon-level analysis that must not count a base
//! twice, such as codon usage tables or synonymous site counts over a
//! bacterial genome.
//!
//! ## Pipeline
//!
//! 1. The coding features of a [`GenomicRecord`] are indexed by
//!    [`IntervalIndex`], one entry per location part.
//! 2. Entries are split at every boundary and merged into a partition whose
//!    cells are owned either by one feature or shared by several.
//! 3. Each cell with a single, regular ([`is_regular`]) owner is trimmed to
//!    codon boundaries ([`trim_to_frame`]) and emitted as a [`CdsRegion`].
//! 4. On circular records the two cells touching the origin are handed to
//!    [`rescue_origin`], which restores regions the linear coordinates cut
//!    in two.
//!
//! [`ExtractConfig`] selects the feature kind, the locus qualifier and
//! whether the origin rescue runs. [`NonOverlappingRegions`] iterates the
//! result lazily; [`extract_nonoverlapping_cds`] collects it.
//!
//! ## Structure
//!
//! * [`data_structs`]: records, features, qualifiers and coordinates.
//! * [`index`]: the interval index and its partition.
//! * [`cds`]: validation, trimming, extraction and the origin rescue.
//! * [`utils`]: sliding windows and bacterial translation.
//! * [`error`]: the crate [`Error`] type.
//!
//! Positions are 0-based and half-open throughout.
//!
//! ```
//! use cdsplit::prelude::*;
//!
//! let record = GenomicRecord::try_new(
//!     "demo",
//!     b"ccATGAAATAAgg".to_vec(),
//!     Topology::Linear,
//!     vec![Feature::new(
//!         FeatureKind::Cds,
//!         Location::simple(Span::new(2, 11), Strand::Forward),
//!         Qualifiers::new(),
//!     )
//!     .with_qualifier("locus_tag", Some("demo_0001"))],
//! )?;
//!
//! for region in &ExtractConfig::default().try_finish(&record)? {
//!     assert_eq!(region.location().len() % 3, 0);
//!     println!("{}", region);
//! }
//! # Ok::<(), cdsplit::Error>(())
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod cds;
pub mod data_structs;
pub mod error;
pub mod index;
pub mod prelude;
pub mod utils;

pub use cds::{
    extract_nonoverlapping_cds,
    is_regular,
    rescue_origin,
    trim_to_frame,
    ExtractConfig,
    NonOverlappingRegions,
};
pub use data_structs::{
    CdsRegion,
    GenomicRecord,
};
pub use error::{
    Error,
    Result,
};
pub use index::IntervalIndex;
