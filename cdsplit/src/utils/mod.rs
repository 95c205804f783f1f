mod translate;

pub use translate::{
    translate_bacterial,
    translate_codon,
};

#[macro_export]
macro_rules! with_field_fn {
    ($field_name: ident, $field_type: ty) => {
        paste::paste! {
            #[cfg_attr(coverage_nightly, coverage(off))]
            pub fn [<with_$field_name>](mut self, value: $field_type) -> Self {
                self.$field_name = value;
                self
            }
        }
    };
}
pub use with_field_fn;

/// Yields windows of `window` items starting every `step` items. Trailing
/// items that do not fill a whole window are not yielded.
///
/// # Panics
///
/// Panics if `step` is zero.
pub fn sliding<T>(
    seq: &[T],
    window: usize,
    step: usize,
) -> impl Iterator<Item = &[T]> {
    assert!(step > 0, "Step must be positive");
    let count = if window == 0 || window > seq.len() {
        0
    }
    else {
        (seq.len() - window) / step + 1
    };
    (0..count).map(move |i| &seq[i * step..i * step + window])
}
