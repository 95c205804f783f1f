//! This module contains the core data structures used throughout the
//! `cdsplit` crate for representing annotated sequence records.
//!
//! Key components of this module include:
//!
//! - [`coords`]: coordinates on a record, [`Span`](coords::Span) for a
//!   contiguous interval and [`Location`](coords::Location) for the (possibly
//!   multi-part) location of a feature.
//! - [`record`]: the annotated record itself, [`GenomicRecord`], its
//!   [`Feature`]s and their [`Qualifiers`].
//! - Common enumerations, [`Strand`], [`Topology`] and [`FeatureKind`].
//! - [`CdsRegion`], the `(locus tag, location)` pair produced by region
//!   extraction.
//! - [`typedef`]: type aliases and constants for positions, sequences and
//!   well-known qualifier keys.


pub mod coords;
mod enums;
pub mod record;
mod region;
pub mod typedef;

#[cfg(test)]
mod tests;

pub use enums::{
    FeatureKind,
    Strand,
    Topology,
};
pub use record::{
    Feature,
    GenomicRecord,
    Qualifiers,
};
pub use region::CdsRegion;
