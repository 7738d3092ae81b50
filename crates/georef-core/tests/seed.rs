use std::thread;

use georef_core::prelude::*;

#[test]
fn country_dataset_is_ordered_and_contains_thailand() {
    let db = SeedDb::get().unwrap();
    let countries = db.countries();

    assert!(!countries.is_empty());
    // Authored order is preserved: Thailand is the first entry.
    assert_eq!(countries[0].iso(), "TH");

    let th = db.find_country_by_iso("TH").unwrap();
    assert_eq!(th.id(), 764);
    assert_eq!(th.native(), "ไทย");
    assert_eq!(th.population(), 69_950_850);
}

#[test]
fn province_dataset_links_bangkok_to_thailand() {
    let db = SeedDb::get().unwrap();

    let bkk = db
        .divisions_of(DivisionKind::Province)
        .find(|d| d.iso() == "BKK")
        .unwrap();
    let th = db.find_country_by_iso("TH").unwrap();

    assert_eq!(bkk.country_id(), th.id());
    assert_eq!(bkk.name(), "Bangkok");
}

#[test]
fn every_seeded_row_is_assigned() {
    let db = SeedDb::get().unwrap();
    assert!(db.countries().iter().all(|c| !c.is_transient()));
    assert!(db.divisions().iter().all(|d| !d.is_transient()));
    assert!(db.urbans().iter().all(|u| !u.is_transient()));
}

#[test]
fn identifiers_are_unique_within_each_family() {
    let db = SeedDb::get().unwrap();

    let mut country_ids: Vec<_> = db.countries().iter().map(|c| c.id()).collect();
    country_ids.sort_unstable();
    country_ids.dedup();
    assert_eq!(country_ids.len(), db.countries().len());

    let mut division_ids: Vec<_> = db.divisions().iter().map(|d| d.id()).collect();
    division_ids.sort_unstable();
    division_ids.dedup();
    assert_eq!(division_ids.len(), db.divisions().len());

    let mut urban_ids: Vec<_> = db.urbans().iter().map(|u| u.id()).collect();
    urban_ids.sort_unstable();
    urban_ids.dedup();
    assert_eq!(urban_ids.len(), db.urbans().len());
}

#[test]
fn seeded_references_resolve_within_the_seed_corpus() {
    // Authored consistency, not an API guarantee: the crate itself never
    // verifies these links.
    let db = SeedDb::get().unwrap();

    for division in db.divisions() {
        assert!(
            db.countries().iter().any(|c| c.id() == division.country_id()),
            "division {} points at missing country {}",
            division.name(),
            division.country_id()
        );
    }
    for urban in db.urbans() {
        assert!(
            db.divisions().iter().any(|d| d.id() == urban.division_id()),
            "urban {} points at missing division {}",
            urban.name(),
            urban.division_id()
        );
    }
}

#[test]
fn stats_reflect_dataset_sizes() {
    let db = SeedDb::get().unwrap();
    let stats = db.stats();
    assert_eq!(stats.countries, db.countries().len());
    assert_eq!(stats.divisions, db.divisions().len());
    assert_eq!(stats.urbans, db.urbans().len());
}

#[test]
fn variant_accessors_filter_by_classification() {
    let db = SeedDb::get().unwrap();

    assert!(db.divisions_of(DivisionKind::Province).count() >= 2);
    assert_eq!(db.divisions_of(DivisionKind::Oblast).count(), 1);
    assert_eq!(db.divisions_of(DivisionKind::Banat).count(), 0);

    assert!(db.urbans_of(UrbanKind::City).count() >= 4);
    assert_eq!(db.urbans_of(UrbanKind::Amphor).count(), 1);
}

#[test]
fn hierarchy_traversal_follows_identifier_links() {
    let db = SeedDb::get().unwrap();

    let de = db.find_country_by_iso("DE").unwrap();
    let divisions = db.divisions_for_country(de);
    assert_eq!(divisions.len(), 1);
    assert_eq!(divisions[0].native(), "Bayern");

    let urbans = db.urbans_for_division(divisions[0]);
    assert_eq!(urbans.len(), 2);
    assert!(urbans.iter().any(|u| u.native() == "München"));
}

#[test]
fn lookups_fold_case_and_diacritics() {
    let db = SeedDb::get().unwrap();

    assert!(db.find_country_by_iso("th").is_some());
    assert!(db.find_division_by_iso("bkk").is_some());

    // Endonym matching through Unicode folding.
    let hits = db.find_countries_by_substring("deutsch");
    assert!(hits.iter().any(|c| c.iso() == "DE"));

    let hits = db.find_divisions_by_substring("bayern");
    assert!(hits.iter().any(|(d, _)| d.iso() == "BY"));
    let (_, owner) = hits.iter().find(|(d, _)| d.iso() == "BY").unwrap();
    assert_eq!(owner.unwrap().iso(), "DE");
}

#[test]
fn concurrent_readers_observe_identical_contents() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let db = SeedDb::get().unwrap();
                let stats = db.stats();
                let th_population = db.find_country_by_iso("TH").unwrap().population();
                (db as *const _ as usize, stats, th_population)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let (first_ptr, first_stats, first_population) = results[0];
    for (ptr, stats, population) in &results {
        // Every thread sees the same instance with the same contents.
        assert_eq!(*ptr, first_ptr);
        assert_eq!(stats.countries, first_stats.countries);
        assert_eq!(stats.divisions, first_stats.divisions);
        assert_eq!(stats.urbans, first_stats.urbans);
        assert_eq!(*population, first_population);
    }
}
