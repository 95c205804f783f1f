use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

use super::coords::Location;

/// Codon-aligned coding region emitted for a feature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CdsRegion {
    locus_tag: String,
    location:  Location,
}

impl CdsRegion {
    pub fn new<S: Into<String>>(
        locus_tag: S,
        location: Location,
    ) -> Self {
        Self {
            locus_tag: locus_tag.into(),
            location,
        }
    }

    pub fn locus_tag(&self) -> &str { &self.locus_tag }

    pub fn location(&self) -> &Location { &self.location }

    pub fn into_parts(self) -> (String, Location) { (self.locus_tag, self.location) }
}

impl Display for CdsRegion {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{} {}", self.locus_tag, self.location)
    }
}
