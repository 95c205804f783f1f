mod common;

use cdsplit::error::RescueConflict;
use cdsplit::prelude::*;
use common::*;
use itertools::Itertools;
use rstest::rstest;

fn extract(record: &GenomicRecord) -> Result<Vec<CdsRegion>> {
    extract_nonoverlapping_cds(record, &ExtractConfig::default())
}

#[test]
fn single_regular_feature() -> anyhow::Result<()> {
    let record = RecordBuilder::new(9000)
        .cds("A", &[(100, 400)], Strand::Forward)
        .build();

    let regions = extract(&record)?;
    assert_eq!(regions, vec![simple("A", 100, 400, Strand::Forward)]);
    Ok(())
}

#[test]
fn overlapping_features_are_trimmed_apart() -> anyhow::Result<()> {
    let record = RecordBuilder::new(9000)
        .cds("A", &[(100, 400)], Strand::Forward)
        .cds("B", &[(352, 700)], Strand::Forward)
        .build();

    let regions = extract(&record)?;
    assert_eq!(regions, vec![
        simple("A", 100, 352, Strand::Forward),
        simple("B", 400, 700, Strand::Forward),
    ]);
    Ok(())
}

#[test]
fn reverse_strand_overlap() -> anyhow::Result<()> {
    let record = RecordBuilder::new(3000)
        .cds("R", &[(1000, 1300)], Strand::Reverse)
        .cds("F", &[(1249, 1600)], Strand::Forward)
        .build();

    let regions = extract(&record)?;
    assert_eq!(regions, vec![
        simple("R", 1000, 1249, Strand::Reverse),
        simple("F", 1300, 1600, Strand::Forward),
    ]);
    Ok(())
}

#[test]
fn feature_across_the_origin() -> anyhow::Result<()> {
    let record = RecordBuilder::new(5000)
        .circular()
        .cds("C", &[(4900, 5000), (0, 149)], Strand::Forward)
        .build();

    let regions = extract(&record)?;
    let expected = Location::compound(
        vec![Span::new(4900, 5000), Span::new(0, 149)],
        Strand::Forward,
    )?;
    assert_eq!(regions, vec![CdsRegion::new("C", expected)]);
    Ok(())
}

#[test]
fn origin_join_on_linear_record_is_dropped() -> anyhow::Result<()> {
    let record = RecordBuilder::new(5000)
        .cds("C", &[(4900, 5000), (0, 149)], Strand::Forward)
        .build();

    assert!(extract(&record)?.is_empty());
    Ok(())
}

#[test]
fn pseudogene_is_dropped() -> anyhow::Result<()> {
    let record = RecordBuilder::new(9000)
        .coding(cds_feature("D", &[(100, 400)], Strand::Forward).with_qualifier("pseudo", None))
        .build();

    assert!(extract(&record)?.is_empty());
    Ok(())
}

#[test]
fn origin_cell_shared_at_start() -> anyhow::Result<()> {
    let record = RecordBuilder::new(3000)
        .circular()
        .cds("X", &[(2900, 3000), (0, 50)], Strand::Forward)
        .cds("Y", &[(0, 300)], Strand::Forward)
        .build();

    let regions = extract(&record)?;
    assert_eq!(regions, vec![
        simple("Y", 51, 300, Strand::Forward),
        simple("X", 2900, 2999, Strand::Forward),
    ]);
    Ok(())
}

#[test]
fn distinct_origin_owners_are_rejected() {
    let record = RecordBuilder::new(3000)
        .circular()
        .cds("P", &[(2700, 3000)], Strand::Forward)
        .cds("Q", &[(0, 300)], Strand::Forward)
        .build();

    let error = extract(&record).unwrap_err();
    assert_eq!(
        error,
        Error::BoundaryRescue(RescueConflict::DistinctFeatures {
            end_locus:   "P".to_string(),
            start_locus: "Q".to_string(),
        })
    );

    let regions = extract_nonoverlapping_cds(
        &record,
        &ExtractConfig::default().with_rescue_origin(false),
    )
    .unwrap();
    assert_eq!(regions, vec![
        simple("Q", 0, 300, Strand::Forward),
        simple("P", 2700, 3000, Strand::Forward),
    ]);
}

#[test]
fn non_coding_features_are_ignored() -> anyhow::Result<()> {
    let gene = Feature::new(
        FeatureKind::Gene,
        Location::simple(Span::new(50, 800), Strand::Forward),
        Qualifiers::new(),
    )
    .with_qualifier("locus_tag", Some("G"));
    let record = RecordBuilder::new(9000)
        .feature(gene)
        .cds("A", &[(100, 400)], Strand::Forward)
        .build();

    assert_eq!(extract(&record)?, vec![simple("A", 100, 400, Strand::Forward)]);
    Ok(())
}

#[test]
fn extraction_is_deterministic() -> anyhow::Result<()> {
    let record = random_record(7, 4000, 40, Topology::Linear);
    let config = ExtractConfig::default();
    let regions = config.try_finish(&record)?;

    let first = regions.iter().collect_vec();
    let second = regions.iter().collect_vec();
    assert_eq!(first, second);
    assert_eq!(first, extract_nonoverlapping_cds(&record, &config)?);
    Ok(())
}

#[rstest]
#[case::linear(Topology::Linear)]
#[case::circular(Topology::Circular)]
fn random_records_yield_disjoint_codon_regions(#[case] topology: Topology) {
    let mut checked = 0;
    for seed in 0..25 {
        let record = random_record(seed, 3000, 30, topology);
        let regions = match extract(&record) {
            Ok(regions) => regions,
            Err(Error::BoundaryRescue(_)) => continue,
            Err(error) => panic!("Unexpected error for seed {}: {}", seed, error),
        };
        checked += 1;

        let parts = regions
            .iter()
            .flat_map(|region| region.location().parts().iter().copied())
            .sorted_by_key(|part| (part.start(), part.end()))
            .collect_vec();
        for (left, right) in parts.iter().tuple_windows() {
            assert!(
                left.end() <= right.start(),
                "Seed {}: {} overlaps {}",
                seed,
                left,
                right
            );
        }

        for region in regions.iter() {
            assert!(!region.location().is_empty());
            assert_eq!(region.location().len() % 3, 0, "Seed {}: {}", seed, region);

            let feature = record
                .features()
                .iter()
                .find(|feature| feature.locus_tag() == Some(region.locus_tag()))
                .expect("Region without a feature");
            assert!(is_regular(feature, &record));
            for part in region.location().parts() {
                assert!(
                    feature
                        .location()
                        .parts()
                        .iter()
                        .any(|outer| part.is_in(outer)),
                    "Seed {}: {} leaves {}",
                    seed,
                    region,
                    feature.location()
                );
            }

            if let (Some(inner), Some(outer)) = (
                region.location().as_simple(),
                feature.location().as_simple(),
            ) {
                assert_eq!((inner.start() - outer.start()) % 3, 0);
                assert_eq!((outer.end() - inner.end()) % 3, 0);
            }
        }
    }
    assert!(checked > 0);
}
