use georef_core::prelude::*;

type B = DefaultBackend;

#[test]
fn thailand_round_trips_every_attribute() {
    let th = Country::<B>::new(764, "TH", 66, "Thailand", "ไทย", 69_950_850).unwrap();
    assert_eq!(th.id(), 764);
    assert_eq!(th.iso(), "TH");
    assert_eq!(th.calling_code(), 66);
    assert_eq!(th.name(), "Thailand");
    assert_eq!(th.native(), "ไทย");
    assert_eq!(th.population(), 69_950_850);
    assert!(!th.is_transient());
}

#[test]
fn name_boundary_is_one_hundred_characters() {
    let exactly = "a".repeat(100);
    let over = "a".repeat(101);

    assert!(Country::<B>::new(764, "TH", 66, &exactly, "ไทย", 0).is_ok());

    let err = Country::<B>::new(764, "TH", 66, &over, "ไทย", 0).unwrap_err();
    assert_eq!(
        err,
        GeoRefError::TooLong {
            field: "country.name",
            max: 100,
            len: 101
        }
    );
}

#[test]
fn length_limits_count_characters_not_bytes() {
    // 100 Thai characters are 300 UTF-8 bytes but still within the limit.
    let native = "ก".repeat(100);
    assert!(Country::<B>::new(764, "TH", 66, "Thailand", &native, 0).is_ok());

    let over = "ก".repeat(101);
    assert!(matches!(
        Country::<B>::new(764, "TH", 66, "Thailand", &over, 0),
        Err(GeoRefError::TooLong {
            field: "country.native",
            ..
        })
    ));
}

#[test]
fn required_text_fields_reject_empty() {
    assert_eq!(
        Country::<B>::new(764, "TH", 66, "", "ไทย", 0).unwrap_err(),
        GeoRefError::MissingField {
            field: "country.name"
        }
    );
    assert_eq!(
        Urban::<B>::new(1, 1, UrbanKind::City, "", "Munich", "München").unwrap_err(),
        GeoRefError::MissingField { field: "urban.iso" }
    );
}

#[test]
fn country_iso_must_be_two_letters() {
    for bad in ["THA", "T", "", "T1"] {
        assert!(matches!(
            Country::<B>::new(764, bad, 66, "Thailand", "ไทย", 0),
            Err(GeoRefError::InvalidIso {
                field: "country.iso",
                ..
            })
        ));
    }
}

#[test]
fn division_and_urban_codes_allow_up_to_five_characters() {
    assert!(Division::<B>::new(1, 764, DivisionKind::Province, "BKK", "Bangkok", "กรุงเทพมหานคร", 0)
        .is_ok());
    assert!(
        Urban::<B>::new(1, 1, UrbanKind::Amphor, "10400", "Phaya Thai", "พญาไท").is_ok()
    );

    let err = Urban::<B>::new(1, 1, UrbanKind::City, "TOOBIG", "Munich", "München").unwrap_err();
    assert_eq!(
        err,
        GeoRefError::TooLong {
            field: "urban.iso",
            max: 5,
            len: 6
        }
    );
}

#[test]
fn dangling_parent_references_are_not_checked_here() {
    // Referential integrity belongs to the external store: a division whose
    // country_id resolves to nothing still constructs fine.
    let orphan =
        Division::<B>::new(1, 999_999, DivisionKind::Province, "XX", "Nowhere", "Nowhere", 0);
    assert!(orphan.is_ok());

    let urban = Urban::<B>::new(1, 999_999, UrbanKind::Hamlet, "NW", "Nowhere", "Nowhere");
    assert!(urban.is_ok());
}

#[test]
fn division_serializes_its_kind_discriminator() {
    let bkk = Division::<B>::new(
        1,
        764,
        DivisionKind::Province,
        "BKK",
        "Bangkok",
        "กรุงเทพมหานคร",
        5_455_000,
    )
    .unwrap();

    let value = serde_json::to_value(&bkk).unwrap();
    assert_eq!(value["kind"], "province");
    assert_eq!(value["country_id"], 764);
    assert_eq!(value["native"], "กรุงเทพมหานคร");

    let back: Division<B> = serde_json::from_value(value).unwrap();
    assert_eq!(back.name(), bkk.name());
    assert_eq!(back.division_kind(), DivisionKind::Province);
    assert!(back.identity_eq(&bkk));
}

#[test]
fn urban_serializes_its_kind_discriminator() {
    let sapporo = Urban::<B>::new(6, 5, UrbanKind::City, "SPK", "Sapporo", "札幌市").unwrap();
    let value = serde_json::to_value(&sapporo).unwrap();
    assert_eq!(value["kind"], "city");
    assert_eq!(value["division_id"], 5);
}
