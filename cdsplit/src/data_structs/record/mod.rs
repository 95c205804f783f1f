mod feature;
mod genomic_record;
mod qualifiers;

pub use feature::Feature;
pub use genomic_record::GenomicRecord;
pub use qualifiers::Qualifiers;

#[cfg(test)]
mod tests;
