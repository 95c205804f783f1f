mod enums_tests {
    use std::str::FromStr;

    use crate::data_structs::enums::*;
    use crate::error::Error;

    // --- Strand Tests ---

    #[test]
    fn test_strand_from_str() {
        assert_eq!(Strand::from_str("+").unwrap(), Strand::Forward);
        assert_eq!(Strand::from_str("-").unwrap(), Strand::Reverse);
        assert_eq!(Strand::from_str("1").unwrap(), Strand::Forward);
        assert_eq!(Strand::from_str("-1").unwrap(), Strand::Reverse);
        assert_eq!(
            Strand::from_str("."),
            Err(Error::UnknownStrand(".".to_string()))
        );
    }

    #[test]
    fn test_strand_sign_and_bool() {
        assert_eq!(Strand::Forward.sign(), 1);
        assert_eq!(Strand::Reverse.sign(), -1);
        assert!(bool::from(Strand::Forward));
        assert_eq!(Strand::from(false), Strand::Reverse);
        assert!(Strand::Reverse.is_reverse());
    }

    #[test]
    fn test_strand_display() {
        assert_eq!(Strand::Forward.to_string(), "+");
        assert_eq!(Strand::Reverse.to_string(), "-");
    }

    // --- Topology Tests ---

    #[test]
    fn test_topology_from_str() {
        assert_eq!(Topology::from_str("circular").unwrap(), Topology::Circular);
        assert_eq!(Topology::from_str("Circular ").unwrap(), Topology::Circular);
        assert_eq!(Topology::from_str("linear").unwrap(), Topology::Linear);
        assert_eq!(Topology::from_str("").unwrap(), Topology::Linear); // Defaults to Linear
        assert!(Topology::Circular.is_circular());
    }

    // --- FeatureKind Tests ---

    #[test]
    fn test_feature_kind_from_str() {
        assert_eq!(FeatureKind::from("CDS"), FeatureKind::Cds);
        assert_eq!(FeatureKind::from("source"), FeatureKind::Source);
        assert_eq!(FeatureKind::from("gene"), FeatureKind::Gene);
        assert_eq!(
            FeatureKind::from("tRNA"),
            FeatureKind::Other("tRNA".to_string())
        );
    }

    #[test]
    fn test_feature_kind_display_roundtrips_name() {
        for name in ["CDS", "source", "gene", "rRNA"] {
            assert_eq!(FeatureKind::from(name).to_string(), name);
        }
    }
}

mod region_tests {
    use crate::data_structs::coords::{
        Location,
        Span,
    };
    use crate::data_structs::{
        CdsRegion,
        Strand,
    };

    #[test]
    fn test_cds_region_json() {
        let region = CdsRegion::new(
            "b0001",
            Location::simple(Span::new(189, 255), Strand::Forward),
        );
        let json = serde_json::to_value(&region).unwrap();
        assert_eq!(json["locus_tag"], "b0001");
        assert_eq!(json["location"]["span"]["start"], 189);
        assert_eq!(json["location"]["strand"], "+");
    }

    #[test]
    fn test_cds_region_display() {
        let region = CdsRegion::new(
            "b0001",
            Location::simple(Span::new(189, 255), Strand::Forward),
        );
        assert_eq!(region.to_string(), "b0001 [189..255](+)");
    }
}
