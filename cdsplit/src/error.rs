//! Error types for region extraction.

use std::fmt;

use thiserror::Error;

use crate::data_structs::typedef::PosType;

/// Result type alias for cdsplit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cdsplit operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Record without any bases
    #[error("Record '{id}' has an empty sequence")]
    EmptyRecord {
        /// Identifier of the record
        id: String,
    },

    /// Record longer than the coordinate type can address
    #[error("Record '{id}' has {length} bases, more than coordinates can address")]
    RecordTooLong { id: String, length: usize },

    /// Location part which is inverted or runs past the record end
    #[error("Malformed location part {start}..{end} (record length {length})")]
    MalformedLocation {
        start:  PosType,
        end:    PosType,
        /// Length of the owning record, or the end itself when unknown
        length: PosType,
    },

    /// Compound location built from fewer than two parts
    #[error("Compound location needs at least 2 parts, got {parts}")]
    CompoundTooShort { parts: usize },

    #[error("Unknown strand '{0}'")]
    UnknownStrand(String),

    /// Circular origin rescue met a configuration it refuses to guess about
    #[error(
        "Unexpected cases in rescuing CDSs across boundaries on circular DNA \
         records: {0}"
    )]
    BoundaryRescue(#[from] RescueConflict),
}

/// Side of the origin on a circular record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginSide {
    /// Cell covering the last base, `length - 1`.
    End,
    /// Cell covering the first base, `0`.
    Start,
}

impl fmt::Display for OriginSide {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            OriginSide::End => write!(f, "end"),
            OriginSide::Start => write!(f, "start"),
        }
    }
}

/// Reason a circular origin rescue was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RescueConflict {
    /// More than one partition cell covers a boundary position
    #[error("{cells} cells cover the {side} boundary")]
    AmbiguousBoundary { side: OriginSide, cells: usize },
    /// Boundary cell does not touch the origin
    #[error("{side} boundary cell {start}..{end} does not touch the origin")]
    MisplacedBoundary {
        side:  OriginSide,
        start: PosType,
        end:   PosType,
    },
    /// Both boundaries are owned, by two different features
    #[error("end boundary owned by '{end_locus}' but start boundary owned by '{start_locus}'")]
    DistinctFeatures { end_locus: String, start_locus: String },
    /// Boundary owner is not a two-part origin-spanning location
    #[error("'{locus}' has {parts} location part(s), expected 2 around the origin")]
    NotOriginSpanning { locus: String, parts: usize },
    /// Reconstructed part with start past end
    #[error("'{locus}' reconstructs to inverted part {start}..{end}")]
    DegenerateReconstruction {
        locus: String,
        start: PosType,
        end:   PosType,
    },
    /// Reconstructed location is not a whole number of codons
    #[error("'{locus}' reconstructs to length {length}, not a multiple of 3")]
    FrameMismatch { locus: String, length: PosType },
}
