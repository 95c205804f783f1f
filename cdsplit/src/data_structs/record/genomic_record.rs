use log::trace;
use serde::{
    Deserialize,
    Serialize,
};

use super::Feature;
use crate::data_structs::enums::Topology;
use crate::data_structs::typedef::{
    PosType,
    SeqType,
};
use crate::error::{
    Error,
    Result,
};

/// Read-only view of one annotated sequence record.
///
/// Bases are stored upper-cased. Every feature location is checked to lie
/// within the sequence when the record is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenomicRecord {
    id:       String,
    sequence: SeqType,
    topology: Topology,
    features: Vec<Feature>,
}

impl GenomicRecord {
    pub fn try_new<S: Into<String>>(
        id: S,
        mut sequence: SeqType,
        topology: Topology,
        features: Vec<Feature>,
    ) -> Result<Self> {
        let id = id.into();
        if sequence.is_empty() {
            return Err(Error::EmptyRecord { id });
        }
        let length =
            PosType::try_from(sequence.len()).map_err(|_| Error::RecordTooLong {
                id:     id.clone(),
                length: sequence.len(),
            })?;

        for feature in features.iter() {
            for part in feature.location().parts() {
                if part.start() > part.end() || part.end() > length {
                    return Err(Error::MalformedLocation {
                        start: part.start(),
                        end: part.end(),
                        length,
                    });
                }
            }
        }
        trace!(
            "Record '{}': {} bases, {}, {} features",
            id,
            length,
            topology,
            features.len()
        );

        sequence.make_ascii_uppercase();
        Ok(Self {
            id,
            sequence,
            topology,
            features,
        })
    }

    pub fn id(&self) -> &str { &self.id }

    pub fn sequence(&self) -> &[u8] { &self.sequence }

    /// Number of bases in the record.
    pub fn len(&self) -> PosType { self.sequence.len() as PosType }

    pub fn is_empty(&self) -> bool { self.sequence.is_empty() }

    pub fn topology(&self) -> Topology { self.topology }

    pub fn is_circular(&self) -> bool { self.topology.is_circular() }

    pub fn features(&self) -> &[Feature] { &self.features }

    /// Feature at position `idx` in the feature table.
    pub fn feature(
        &self,
        idx: usize,
    ) -> Option<&Feature> {
        self.features.get(idx)
    }
}
