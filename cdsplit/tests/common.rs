#![allow(dead_code)]

use cdsplit::prelude::*;
use rand::{
    Rng,
    SeedableRng,
};
use rand_chacha::ChaCha8Rng;

pub fn generate_sequence<R: Rng>(
    rng: &mut R,
    length: usize,
) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    (0..length)
        .map(|_| bases[rng.gen_range(0..bases.len())])
        .collect()
}

/// Builds records whose coding features carry a start and a stop codon at
/// their ends, over a random background.
pub struct RecordBuilder {
    length:   usize,
    topology: Topology,
    seed:     u64,
    codons:   Vec<(usize, &'static [u8])>,
    features: Vec<Feature>,
}

impl RecordBuilder {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            topology: Topology::Linear,
            seed: 42,
            codons: Vec::new(),
            features: Vec::new(),
        }
    }

    pub fn circular(mut self) -> Self {
        self.topology = Topology::Circular;
        self
    }

    pub fn with_seed(
        mut self,
        seed: u64,
    ) -> Self {
        self.seed = seed;
        self
    }

    /// Adds a feature as is, without writing codons.
    pub fn feature(
        mut self,
        feature: Feature,
    ) -> Self {
        self.features.push(feature);
        self
    }

    /// Adds a coding feature with `parts` listed 5'->3' and writes its start
    /// and stop codons.
    pub fn cds(
        self,
        tag: &str,
        parts: &[(PosType, PosType)],
        strand: Strand,
    ) -> Self {
        self.coding(cds_feature(tag, parts, strand))
    }

    /// Adds `feature` and writes start and stop codons at its ends.
    pub fn coding(
        mut self,
        feature: Feature,
    ) -> Self {
        let parts = feature.location().parts();
        let (first, last) = (parts[0], parts[parts.len() - 1]);
        match feature.strand() {
            Strand::Forward => {
                self.codons.push((first.start() as usize, b"ATG"));
                self.codons.push((last.end() as usize - 3, b"TAA"));
            },
            Strand::Reverse => {
                self.codons.push((first.end() as usize - 3, b"CAT"));
                self.codons.push((last.start() as usize, b"TTA"));
            },
        }
        self.features.push(feature);
        self
    }

    pub fn build(self) -> GenomicRecord {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut sequence = generate_sequence(&mut rng, self.length);
        for (pos, codon) in self.codons {
            sequence[pos..pos + codon.len()].copy_from_slice(codon);
        }
        GenomicRecord::try_new("test_record", sequence, self.topology, self.features)
            .expect("Failed to build record")
    }
}

pub fn cds_feature(
    tag: &str,
    parts: &[(PosType, PosType)],
    strand: Strand,
) -> Feature {
    let parts = parts
        .iter()
        .map(|(start, end)| Span::new(*start, *end))
        .collect();
    Feature::new(
        FeatureKind::Cds,
        Location::from_parts(parts, strand).expect("Invalid parts"),
        Qualifiers::new(),
    )
    .with_qualifier("locus_tag", Some(tag))
}

pub fn simple(
    tag: &str,
    start: PosType,
    end: PosType,
    strand: Strand,
) -> CdsRegion {
    CdsRegion::new(tag, Location::simple(Span::new(start, end), strand))
}

/// Random record with `n_features` regular-looking coding features. On
/// circular records some features wrap around the origin.
pub fn random_record(
    seed: u64,
    length: PosType,
    n_features: usize,
    topology: Topology,
) -> GenomicRecord {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut builder = RecordBuilder::new(length as usize).with_seed(seed);
    if topology.is_circular() {
        builder = builder.circular();
    }

    for idx in 0..n_features {
        let tag = format!("f{}", idx);
        let strand = Strand::from(rng.gen_bool(0.5));
        let codons: PosType = rng.gen_range(2..200);
        let feature_len = codons * 3;

        let wraps = topology.is_circular() && rng.gen_bool(0.1);
        let parts = if wraps {
            let head = rng.gen_range(3..feature_len - 2);
            let tail = feature_len - head;
            vec![(length - head, length), (0, tail)]
        }
        else {
            let start = rng.gen_range(0..length - feature_len);
            vec![(start, start + feature_len)]
        };
        let parts = match (wraps, strand) {
            (true, Strand::Reverse) => parts.into_iter().rev().collect(),
            _ => parts,
        };

        let mut feature = cds_feature(&tag, &parts, strand);
        if rng.gen_bool(0.1) {
            feature = feature.with_qualifier("pseudo", None);
        }
        builder = builder.coding(feature);
    }
    builder.build()
}
