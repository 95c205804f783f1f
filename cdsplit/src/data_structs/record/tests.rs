use rstest::{
    fixture,
    rstest,
};

use super::*;
use crate::data_structs::coords::{
    Location,
    Span,
};
use crate::data_structs::{
    FeatureKind,
    Strand,
    Topology,
};
use crate::error::Error;

#[fixture]
fn cds() -> Feature {
    Feature::new(
        FeatureKind::Cds,
        Location::simple(Span::new(2, 11), Strand::Forward),
        Qualifiers::new(),
    )
    .with_qualifier("locus_tag", Some("tag_1"))
    .with_qualifier("product", Some("hypothetical protein"))
}

#[test]
fn test_qualifiers_insert_and_lookup() {
    let mut qualifiers = Qualifiers::new();
    qualifiers.insert("db_xref", Some("GeneID:1"));
    qualifiers.insert("db_xref", Some("UniProt:P1"));
    qualifiers.insert("pseudo", None::<&str>);

    assert_eq!(qualifiers.get("db_xref").unwrap().len(), 2);
    assert_eq!(qualifiers.first("db_xref"), Some("GeneID:1"));
    assert!(qualifiers.contains("pseudo"));
    assert_eq!(qualifiers.first("pseudo"), None);
    assert_eq!(qualifiers.get("note"), None);
    assert_eq!(qualifiers.len(), 2);
}

#[test]
fn test_qualifiers_display_sorted() {
    let qualifiers: Qualifiers = vec![
        ("locus_tag", Some("tag_1")),
        ("gene", Some("thrL")),
        ("pseudo", None),
    ]
    .into_iter()
    .collect();
    assert_eq!(qualifiers.to_string(), "gene=thrL;locus_tag=tag_1;pseudo");
}

#[rstest]
fn test_feature_accessors(cds: Feature) {
    assert_eq!(cds.kind(), &FeatureKind::Cds);
    assert_eq!(cds.strand(), Strand::Forward);
    assert_eq!(cds.locus_tag(), Some("tag_1"));
    assert!(!cds.is_pseudo());
}

#[rstest]
#[case("pseudo")]
#[case("pseudogene")]
fn test_feature_is_pseudo(
    cds: Feature,
    #[case] key: &str,
) {
    let feature = cds.with_qualifier(key, None);
    assert!(feature.is_pseudo());
}

#[rstest]
fn test_record_uppercases_sequence(cds: Feature) {
    let record = GenomicRecord::try_new(
        "NC_000913.3",
        b"aaatgccctaagg".to_vec(),
        Topology::Circular,
        vec![cds],
    )
    .unwrap();
    assert_eq!(record.sequence(), b"AAATGCCCTAAGG");
    assert_eq!(record.len(), 13);
    assert!(record.is_circular());
    assert_eq!(record.features().len(), 1);
    assert!(record.feature(1).is_none());
}

#[test]
fn test_record_empty_sequence() {
    let res = GenomicRecord::try_new("empty", vec![], Topology::Linear, vec![]);
    assert_eq!(res, Err(Error::EmptyRecord {
        id: "empty".to_string(),
    }));
}

#[rstest]
fn test_record_rejects_part_past_end(cds: Feature) {
    let res = GenomicRecord::try_new("short", b"ATGCC".to_vec(), Topology::Linear, vec![
        cds,
    ]);
    assert_eq!(res, Err(Error::MalformedLocation {
        start:  2,
        end:    11,
        length: 5,
    }));
}
