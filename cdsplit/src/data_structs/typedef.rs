/// Genomic coordinate type. Coordinates are 0-based, end-exclusive.
pub type PosType = u32;

/// Sequence bases, one ASCII byte per base.
pub type SeqType = Vec<u8>;

/// Length of a codon in bases.
pub const CODON_LENGTH: PosType = 3;

/// Qualifier holding the locus identifier of a feature.
pub const LOCUS_TAG_KEY: &str = "locus_tag";

/// Qualifiers which mark a feature as a pseudogene.
pub const PSEUDO_KEYS: [&str; 2] = ["pseudo", "pseudogene"];
