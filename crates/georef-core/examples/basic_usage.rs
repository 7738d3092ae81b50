//! Basic usage example for georef-core
//!
//! This example demonstrates how to:
//! - Load the seed datasets
//! - Walk the country → division → urban hierarchy
//! - Filter by classification
//! - Compare records by identity

use georef_core::prelude::*;

fn main() -> Result<()> {
    println!("=== georef-core Basic Usage Example ===\n");

    // Load the seed database
    let db = SeedDb::get()?;
    let stats = db.stats();
    println!(
        "Seed data: {} countries, {} divisions, {} urban areas\n",
        stats.countries, stats.divisions, stats.urbans
    );

    // Example 1: List all countries
    println!("--- Example 1: List all countries ---");
    for country in db.countries() {
        println!(
            "- {} ({}) native: {} population: {}",
            country.name(),
            country.iso(),
            country.native(),
            country.population()
        );
    }
    println!();

    // Example 2: Find a country and walk its hierarchy
    println!("--- Example 2: Walk the hierarchy for Thailand ---");
    if let Some(th) = db.find_country_by_iso("TH") {
        println!("Country: {} (+{})", th.name(), th.calling_code());
        for division in db.divisions_for_country(th) {
            println!(
                "  {} {} ({})",
                division.division_kind(),
                division.name(),
                division.iso()
            );
            for urban in db.urbans_for_division(division) {
                println!("    {} {} — {}", urban.urban_kind(), urban.name(), urban.native());
            }
        }
    }
    println!();

    // Example 3: Filter divisions by classification
    println!("--- Example 3: Only provinces ---");
    for province in db.divisions_of(DivisionKind::Province) {
        println!("- {} ({})", province.name(), province.iso());
    }
    println!();

    // Example 4: Accent-insensitive lookup
    println!("--- Example 4: Folded name search ---");
    for (division, country) in db.find_divisions_by_substring("bayern") {
        match country {
            Some(c) => println!("- {} in {}", division.name(), c.name()),
            None => println!("- {}", division.name()),
        }
    }
    println!();

    // Example 5: Identity comparison
    println!("--- Example 5: Record identity ---");
    let persisted: Country<DefaultBackend> =
        Country::new(764, "TH", 66, "Thailand", "ไทย", 69_950_850)?;
    let draft: Country<DefaultBackend> = Country::transient("TH", 66, "Thailand", "ไทย", 0)?;
    println!(
        "persisted.identity_eq(seeded TH): {}",
        db.find_country_by_iso("TH")
            .map(|c| c.identity_eq(&persisted))
            .unwrap_or(false)
    );
    println!("draft.is_transient(): {}", draft.is_transient());

    Ok(())
}
