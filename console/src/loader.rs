//! Conversion of GenBank records parsed by `gb-io` into [`GenomicRecord`]s.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use cdsplit::data_structs::coords::{
    Location,
    Span,
};
use cdsplit::data_structs::typedef::PosType;
use cdsplit::data_structs::{
    Feature,
    FeatureKind,
    GenomicRecord,
    Qualifiers,
    Strand,
    Topology,
};
use gb_io::reader::SeqReader;
use gb_io::seq::{
    Location as GbLocation,
    Seq,
    Topology as GbTopology,
};
use log::{
    debug,
    warn,
};
use thiserror::Error;

use crate::utils::open_input;

/// Location shape the adapter does not translate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Unsupported {
    #[error("{0} locations are not supported")]
    Shape(&'static str),
    #[error("coordinate {0} is out of range")]
    Coordinate(i64),
    #[error("parts lie on both strands")]
    MixedStrands,
    #[error("location has no parts")]
    Empty,
}

fn position(value: i64) -> Result<PosType, Unsupported> {
    PosType::try_from(value).map_err(|_| Unsupported::Coordinate(value))
}

/// Collects the parts of `location` in biological order, each with its
/// reverse flag.
fn collect_parts(
    location: &GbLocation,
    reverse: bool,
    parts: &mut Vec<(Span, bool)>,
) -> Result<(), Unsupported> {
    match location {
        GbLocation::Range((from, _), (to, _)) => {
            let (start, end) = (position(*from)?, position(*to)?);
            let span =
                Span::try_new(start, end).map_err(|_| Unsupported::Coordinate(*to))?;
            parts.push((span, reverse));
        },
        GbLocation::Complement(inner) => {
            let mut inner_parts = Vec::new();
            collect_parts(inner, !reverse, &mut inner_parts)?;
            parts.extend(inner_parts.into_iter().rev());
        },
        GbLocation::Join(locations) | GbLocation::Order(locations) => {
            for location in locations {
                collect_parts(location, reverse, parts)?;
            }
        },
        GbLocation::Between(_, _) => return Err(Unsupported::Shape("between")),
        GbLocation::Bond(_) => return Err(Unsupported::Shape("bond")),
        GbLocation::OneOf(_) => return Err(Unsupported::Shape("one-of")),
        GbLocation::External(_, _) => return Err(Unsupported::Shape("external")),
        GbLocation::Gap(_) => return Err(Unsupported::Shape("gap")),
    }
    Ok(())
}

/// Translates a `gb-io` location into a single-strand [`Location`].
pub(crate) fn convert_location(location: &GbLocation) -> Result<Location, Unsupported> {
    let mut parts = Vec::new();
    collect_parts(location, false, &mut parts)?;

    let Some((_, reverse)) = parts.first().copied()
    else {
        return Err(Unsupported::Empty);
    };
    if parts.iter().any(|(_, r)| *r != reverse) {
        return Err(Unsupported::MixedStrands);
    }
    let spans = parts.into_iter().map(|(span, _)| span).collect();
    Location::from_parts(spans, Strand::from(!reverse)).map_err(|_| Unsupported::Empty)
}

fn convert_feature(feature: &gb_io::seq::Feature) -> Result<Feature, Unsupported> {
    let location = convert_location(&feature.location)?;
    let qualifiers: Qualifiers = feature
        .qualifiers
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();
    Ok(Feature::new(
        FeatureKind::from(&*feature.kind),
        location,
        qualifiers,
    ))
}

/// Name of a parsed record, falling back to its accession or its position
/// in the file.
fn record_name(
    seq: &Seq,
    idx: usize,
) -> String {
    seq.name
        .clone()
        .or_else(|| seq.accession.clone())
        .unwrap_or_else(|| format!("record_{}", idx))
}

/// Builds a [`GenomicRecord`] from a parsed GenBank record. Features with
/// unsupported locations are dropped.
pub(crate) fn convert_seq(
    seq: Seq,
    idx: usize,
) -> anyhow::Result<GenomicRecord> {
    let id = record_name(&seq, idx);
    let topology = match seq.topology {
        GbTopology::Circular => Topology::Circular,
        GbTopology::Linear => Topology::Linear,
    };

    let mut features = Vec::with_capacity(seq.features.len());
    for feature in seq.features.iter() {
        match convert_feature(feature) {
            Ok(converted) => features.push(converted),
            Err(reason) => {
                warn!(
                    "Skipping {} feature {} of record '{}': {}",
                    feature.kind, feature.location, id, reason
                )
            },
        }
    }
    debug!("Converted record '{}' with {} features", id, features.len());

    GenomicRecord::try_new(id.clone(), seq.seq, topology, features)
        .with_context(|| format!("Invalid record '{}'", id))
}

/// Reads every record of a (possibly gzipped) GenBank file.
pub(crate) fn read_records(
    path: &Path
) -> anyhow::Result<impl Iterator<Item = anyhow::Result<GenomicRecord>>> {
    let reader: Box<dyn Read> = open_input(path)?;
    let display = path.display().to_string();
    Ok(SeqReader::new(reader)
        .enumerate()
        .map(move |(idx, parsed)| {
            let seq = parsed
                .with_context(|| format!("Failed to parse record {} of {}", idx, display))?;
            convert_seq(seq, idx)
        }))
}
