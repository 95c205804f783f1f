use log::debug;
use thiserror::Error;

use crate::data_structs::coords::Location;
use crate::data_structs::typedef::{
    PosType,
    CODON_LENGTH,
};
use crate::data_structs::{
    Feature,
    GenomicRecord,
    Strand,
};

/// Stop codons of the bacterial code.
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

/// Shortest sequence that can hold a start and a stop codon.
const MIN_CODING_LENGTH: usize = 2 * CODON_LENGTH as usize;

/// Any codon matching `NTG` or `ATN`.
pub fn is_start_codon(codon: &[u8]) -> bool {
    match codon {
        [first, b'T', b'G'] => is_base(*first),
        [b'A', b'T', last] => is_base(*last),
        _ => false,
    }
}

pub fn is_stop_codon(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| codon == &stop[..])
}

fn is_base(base: u8) -> bool { matches!(base, b'A' | b'C' | b'G' | b'T') }

/// First check a coding feature fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Irregularity {
    /// Carries a `pseudo` or `pseudogene` qualifier.
    #[error("annotated as pseudo")]
    Pseudo,
    /// Length is not a whole number of codons.
    #[error("length {0} is not a multiple of 3")]
    Length(PosType),
    /// Parts do not form a simple or an origin-spanning location.
    #[error("{parts} parts do not span the origin")]
    Shape { parts: usize },
    /// Extracted sequence lacks a start codon.
    #[error("no start codon")]
    NoStartCodon,
    /// Extracted sequence lacks a final stop codon.
    #[error("no stop codon")]
    NoStopCodon,
    /// Location could not be extracted from the record.
    #[error("location outside of the sequence")]
    Unreadable,
}

/// Two parts joined across the origin of a circular record.
fn spans_origin(
    location: &Location,
    record: &GenomicRecord,
) -> bool {
    let (head, tail) = match location.parts() {
        [first, second] => (first, second),
        _ => return false,
    };
    record.is_circular()
        && match location.strand() {
            Strand::Forward => head.end() == record.len() && tail.start() == 0,
            Strand::Reverse => tail.end() == record.len() && head.start() == 0,
        }
}

/// Reason why `feature` is not a regular coding feature, if any.
pub fn regularity(
    feature: &Feature,
    record: &GenomicRecord,
) -> Option<Irregularity> {
    if feature.is_pseudo() {
        return Some(Irregularity::Pseudo);
    }
    let location = feature.location();
    if location.len() % CODON_LENGTH != 0 {
        return Some(Irregularity::Length(location.len()));
    }
    if location.is_compound() && !spans_origin(location, record) {
        return Some(Irregularity::Shape {
            parts: location.parts().len(),
        });
    }

    let Ok(bases) = location.extract(record.sequence())
    else {
        return Some(Irregularity::Unreadable);
    };
    if bases.len() < MIN_CODING_LENGTH || !is_start_codon(&bases[..3]) {
        return Some(Irregularity::NoStartCodon);
    }
    if !is_stop_codon(&bases[bases.len() - 3..]) {
        return Some(Irregularity::NoStopCodon);
    }
    None
}

/// Checks that `feature` is a well-formed coding feature of `record`: not a
/// pseudogene, a whole number of codons, a single part (or two parts joined
/// across the origin of a circular record), and framed by a start and a stop
/// codon.
pub fn is_regular(
    feature: &Feature,
    record: &GenomicRecord,
) -> bool {
    match regularity(feature, record) {
        None => true,
        Some(reason) => {
            debug!(
                "Feature {} {} is not regular: {}",
                feature.locus_tag().unwrap_or("<untagged>"),
                feature.location(),
                reason
            );
            false
        },
    }
}
