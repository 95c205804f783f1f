use crate::data_structs::coords::Span;
use crate::data_structs::typedef::{
    PosType,
    CODON_LENGTH,
};

/// Smallest multiple of the codon length not less than `n`.
pub fn round_up_to_codon(n: PosType) -> PosType { n.div_ceil(CODON_LENGTH) * CODON_LENGTH }

/// Shrinks `clipped` inwards to the codon boundaries of `frame`.
///
/// Both ends of `frame` are codon boundaries. The result starts at the first
/// codon boundary at or after `clipped.start` and ends at the last one at or
/// before `clipped.end`. Returns `None` when `clipped` is not inside `frame`
/// or holds no whole codon.
pub fn trim_to_frame(
    frame: &Span,
    clipped: &Span,
) -> Option<Span> {
    if !clipped.is_in(frame) {
        return None;
    }
    let start = frame.start() + round_up_to_codon(clipped.start() - frame.start());
    let end = frame
        .end()
        .checked_sub(round_up_to_codon(frame.end() - clipped.end()))?;
    (start < end).then(|| Span::new(start, end))
}
