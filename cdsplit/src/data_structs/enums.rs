use std::convert::Infallible;
use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};

use crate::error::Error;

#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord)]
pub enum Strand {
    /// Forward strand.
    Forward,
    /// Reverse strand.
    Reverse,
}

impl Strand {
    /// `+1` for the forward strand, `-1` for the reverse strand.
    pub fn sign(&self) -> i8 {
        match self {
            Strand::Forward => 1,
            Strand::Reverse => -1,
        }
    }

    pub fn is_reverse(&self) -> bool { matches!(self, Strand::Reverse) }
}

impl FromStr for Strand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" | "1" | "+1" => Ok(Strand::Forward),
            "-" | "-1" => Ok(Strand::Reverse),
            other => Err(Error::UnknownStrand(other.to_string())),
        }
    }
}

impl From<Strand> for bool {
    fn from(value: Strand) -> bool {
        match value {
            Strand::Forward => true,
            Strand::Reverse => false,
        }
    }
}

impl From<bool> for Strand {
    fn from(value: bool) -> Self {
        match value {
            true => Strand::Forward,
            false => Strand::Reverse,
        }
    }
}

impl From<Strand> for char {
    fn from(value: Strand) -> Self {
        match value {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

impl Display for Strand {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

impl Serialize for Strand {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Strand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>, {
        let s = String::deserialize(deserializer)?;
        std::str::FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Declared shape of a record's coordinate space.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, Default)]
pub enum Topology {
    #[default]
    Linear,
    Circular,
}

impl Topology {
    pub fn is_circular(&self) -> bool { matches!(self, Topology::Circular) }
}

impl FromStr for Topology {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circular" => Ok(Topology::Circular),
            _ => Ok(Topology::Linear),
        }
    }
}

impl Display for Topology {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Topology::Linear => write!(f, "linear"),
            Topology::Circular => write!(f, "circular"),
        }
    }
}

impl Serialize for Topology {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Topology {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>, {
        let s = String::deserialize(deserializer)?;
        std::str::FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Annotation kind of a feature, as given in the feature table.
#[derive(Eq, Hash, PartialEq, Clone, Debug)]
pub enum FeatureKind {
    /// Coding sequence.
    Cds,
    Gene,
    /// Feature spanning the whole record.
    Source,
    Other(String),
}

impl FromStr for FeatureKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CDS" => Ok(FeatureKind::Cds),
            "gene" => Ok(FeatureKind::Gene),
            "source" => Ok(FeatureKind::Source),
            other => Ok(FeatureKind::Other(other.to_string())),
        }
    }
}

impl From<&str> for FeatureKind {
    fn from(value: &str) -> Self {
        match FeatureKind::from_str(value) {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl Display for FeatureKind {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            FeatureKind::Cds => write!(f, "CDS"),
            FeatureKind::Gene => write!(f, "gene"),
            FeatureKind::Source => write!(f, "source"),
            FeatureKind::Other(name) => write!(f, "{}", name),
        }
    }
}

impl Serialize for FeatureKind {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FeatureKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>, {
        let s = String::deserialize(deserializer)?;
        Ok(FeatureKind::from(s.as_str()))
    }
}
