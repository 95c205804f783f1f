use std::fmt::Display;

use bio::alphabets::dna::revcomp;
use itertools::Itertools;
use serde::{
    Deserialize,
    Serialize,
};

use super::Span;
use crate::data_structs::enums::Strand;
use crate::data_structs::typedef::PosType;
use crate::error::{
    Error,
    Result,
};

/// Location of a feature: one span, or several disjoint parts of one
/// feature listed in 5'->3' order (descending coordinates on the reverse
/// strand).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Location {
    Simple { span: Span, strand: Strand },
    Compound { parts: Vec<Span>, strand: Strand },
}

impl Location {
    pub fn simple(
        span: Span,
        strand: Strand,
    ) -> Self {
        Location::Simple { span, strand }
    }

    /// Creates a compound location. At least two parts are required.
    pub fn compound(
        parts: Vec<Span>,
        strand: Strand,
    ) -> Result<Self> {
        if parts.len() < 2 {
            return Err(Error::CompoundTooShort { parts: parts.len() });
        }
        Ok(Location::Compound { parts, strand })
    }

    /// Simple location for a single part, compound otherwise.
    pub fn from_parts(
        mut parts: Vec<Span>,
        strand: Strand,
    ) -> Result<Self> {
        match parts.len() {
            0 => Err(Error::CompoundTooShort { parts: 0 }),
            1 => Ok(Location::simple(parts.remove(0), strand)),
            _ => Location::compound(parts, strand),
        }
    }

    pub fn parts(&self) -> &[Span] {
        match self {
            Location::Simple { span, .. } => std::slice::from_ref(span),
            Location::Compound { parts, .. } => parts.as_slice(),
        }
    }

    pub fn strand(&self) -> Strand {
        match self {
            Location::Simple { strand, .. } | Location::Compound { strand, .. } => {
                *strand
            },
        }
    }

    pub fn is_compound(&self) -> bool { matches!(self, Location::Compound { .. }) }

    /// Total number of bases over all parts.
    pub fn len(&self) -> PosType { self.parts().iter().map(Span::length).sum() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Leftmost coordinate covered by the location.
    pub fn start(&self) -> PosType {
        self.parts()
            .iter()
            .map(Span::start)
            .min()
            .unwrap_or_default()
    }

    /// Rightmost coordinate covered by the location.
    pub fn end(&self) -> PosType {
        self.parts()
            .iter()
            .map(Span::end)
            .max()
            .unwrap_or_default()
    }

    /// The single span of a simple location.
    pub fn as_simple(&self) -> Option<&Span> {
        match self {
            Location::Simple { span, .. } => Some(span),
            Location::Compound { .. } => None,
        }
    }

    /// Parts in forward-strand reading order: the listed order on the
    /// forward strand, the reversed list on the reverse strand. For a
    /// location wrapping the origin the part ending at the record end comes
    /// first.
    pub fn parts_in_strand_order(&self) -> Vec<Span> {
        match self.strand() {
            Strand::Forward => self.parts().to_vec(),
            Strand::Reverse => self.parts().iter().rev().copied().collect(),
        }
    }

    /// Extracts the bases of the location from `sequence`, part by part in
    /// listed order, each part reverse complemented on the reverse strand.
    pub fn extract(
        &self,
        sequence: &[u8],
    ) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.len() as usize);
        for part in self.parts() {
            let bases =
                sequence
                    .get(part.as_range())
                    .ok_or(Error::MalformedLocation {
                        start:  part.start(),
                        end:    part.end(),
                        length: sequence.len() as PosType,
                    })?;
            match self.strand() {
                Strand::Forward => out.extend_from_slice(bases),
                Strand::Reverse => out.extend(revcomp(bases)),
            }
        }
        Ok(out)
    }
}

impl Display for Location {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Location::Simple { span, strand } => write!(f, "[{}]({})", span, strand),
            Location::Compound { parts, strand } => {
                write!(
                    f,
                    "join{{{}}}({})",
                    parts.iter().map(|p| format!("[{}]", p)).join(", "),
                    strand
                )
            },
        }
    }
}
