use serde::{
    Deserialize,
    Serialize,
};

use super::Qualifiers;
use crate::data_structs::coords::Location;
use crate::data_structs::enums::{
    FeatureKind,
    Strand,
};
use crate::data_structs::typedef::{
    LOCUS_TAG_KEY,
    PSEUDO_KEYS,
};

/// Annotated feature of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    kind:       FeatureKind,
    location:   Location,
    qualifiers: Qualifiers,
}

impl Feature {
    pub fn new(
        kind: FeatureKind,
        location: Location,
        qualifiers: Qualifiers,
    ) -> Self {
        Self {
            kind,
            location,
            qualifiers,
        }
    }

    /// Adds a qualifier value, builder-style.
    pub fn with_qualifier(
        mut self,
        key: &str,
        value: Option<&str>,
    ) -> Self {
        self.qualifiers.insert(key, value);
        self
    }

    pub fn kind(&self) -> &FeatureKind { &self.kind }

    pub fn location(&self) -> &Location { &self.location }

    pub fn qualifiers(&self) -> &Qualifiers { &self.qualifiers }

    pub fn strand(&self) -> Strand { self.location.strand() }

    /// Checks for a `pseudo` or `pseudogene` qualifier.
    pub fn is_pseudo(&self) -> bool {
        PSEUDO_KEYS
            .iter()
            .any(|key| self.qualifiers.contains(key))
    }

    /// First value of the `locus_tag` qualifier.
    pub fn locus_tag(&self) -> Option<&str> { self.qualifiers.first(LOCUS_TAG_KEY) }
}
