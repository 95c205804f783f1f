//! Translation with the Bacterial, Archaeal and Plant Plastid code (NCBI
//! table 11).
//!
//! Table 11 shares its amino acid assignments with the standard code and
//! differs only in its set of alternative start codons, so translation of an
//! open frame uses the standard assignments below.

use crate::data_structs::typedef::CODON_LENGTH;

/// Amino acids for all 64 codons, bases ordered T, C, A, G.
const AMINO_ACIDS: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

fn base_index(base: u8) -> Option<usize> {
    match base.to_ascii_uppercase() {
        b'T' | b'U' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

/// Translates one codon. Codons containing anything other than an
/// unambiguous base translate to `X`.
pub fn translate_codon(codon: &[u8]) -> u8 {
    match codon {
        [a, b, c] => {
            match (base_index(*a), base_index(*b), base_index(*c)) {
                (Some(a), Some(b), Some(c)) => AMINO_ACIDS[a * 16 + b * 4 + c],
                _ => b'X',
            }
        },
        _ => b'X',
    }
}

/// Translates `seq` codon by codon, stops included as `*`. A trailing
/// partial codon is ignored.
pub fn translate_bacterial(seq: &[u8]) -> String {
    let codon_length = CODON_LENGTH as usize;
    super::sliding(seq, codon_length, codon_length)
        .map(|codon| translate_codon(codon) as char)
        .collect()
}
