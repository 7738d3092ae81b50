// crates/georef-core/src/seed.rs

//! Hand-authored reference datasets.
//!
//! Each dataset is a fixed, ordered sequence of fully-constructed records
//! for one family. The database is built once on first access and never
//! mutated afterwards, so it is safe for unrestricted concurrent reads.
//!
//! The datasets are authored to be referentially consistent with each other
//! (every seeded `country_id`/`division_id` points at a seeded parent), but
//! nothing here verifies that — loading them into a store with integrity
//! constraints is the loader's job.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::common::DbStats;
use crate::error::Result;
use crate::model::{Country, Division, DivisionKind, Urban, UrbanKind};
use crate::text::fold_key;
use crate::traits::{DefaultBackend, GeoBackend};

static SEED_DB_CACHE: OnceCell<SeedDb<DefaultBackend>> = OnceCell::new();

/// The in-memory seed database.
///
/// Flat layout: one master vector per family, rows referencing parents by
/// identifier. Country identifiers are the ISO 3166-1 numeric codes;
/// division and urban identifiers are small sequential values in their own
/// unique spaces.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeedDb<B: GeoBackend> {
    countries: Vec<Country<B>>,
    divisions: Vec<Division<B>>,
    urbans: Vec<Urban<B>>,
}

/// Convenient alias for the default backend.
pub type DefaultSeedDb = SeedDb<DefaultBackend>;

impl SeedDb<DefaultBackend> {
    /// Returns the process-wide seed database, building it on first access.
    ///
    /// Subsequent calls return the same immutable instance.
    ///
    /// # Examples
    /// ```rust
    /// use georef_core::SeedDb;
    ///
    /// fn main() -> georef_core::Result<()> {
    ///     let db = SeedDb::get()?;
    ///     assert!(db.find_country_by_iso("TH").is_some());
    ///     Ok(())
    /// }
    /// ```
    pub fn get() -> Result<&'static Self> {
        SEED_DB_CACHE.get_or_try_init(Self::build)
    }

    fn build() -> Result<Self> {
        // Country ids are ISO 3166-1 numeric.
        let countries = vec![
            Country::new(764, "TH", 66, "Thailand", "ไทย", 69_950_850)?,
            Country::new(276, "DE", 49, "Germany", "Deutschland", 83_240_525)?,
            Country::new(840, "US", 1, "United States", "United States", 331_893_745)?,
            Country::new(392, "JP", 81, "Japan", "日本", 125_681_593)?,
            Country::new(616, "PL", 48, "Poland", "Polska", 37_950_802)?,
            Country::new(804, "UA", 380, "Ukraine", "Україна", 41_167_336)?,
        ];

        let divisions = vec![
            Division::new(1, 764, DivisionKind::Province, "BKK", "Bangkok", "กรุงเทพมหานคร", 5_455_000)?,
            Division::new(2, 764, DivisionKind::Province, "CMI", "Chiang Mai", "เชียงใหม่", 1_779_254)?,
            Division::new(3, 276, DivisionKind::State, "BY", "Bavaria", "Bayern", 13_124_737)?,
            Division::new(4, 840, DivisionKind::State, "CA", "California", "California", 39_538_223)?,
            Division::new(5, 392, DivisionKind::Prefecture, "01", "Hokkaido", "北海道", 5_224_614)?,
            Division::new(6, 616, DivisionKind::Voivodeship, "MZ", "Masovia", "Mazowieckie", 5_411_446)?,
            Division::new(7, 804, DivisionKind::Oblast, "32", "Kyiv Oblast", "Київська область", 1_795_079)?,
        ];

        let urbans = vec![
            Urban::new(1, 1, UrbanKind::Amphor, "14", "Phaya Thai", "พญาไท")?,
            Urban::new(2, 2, UrbanKind::City, "CNX", "Chiang Mai", "เชียงใหม่")?,
            Urban::new(3, 3, UrbanKind::City, "M", "Munich", "München")?,
            Urban::new(4, 3, UrbanKind::Village, "GRA", "Grainau", "Grainau")?,
            Urban::new(5, 4, UrbanKind::City, "LA", "Los Angeles", "Los Angeles")?,
            Urban::new(6, 5, UrbanKind::City, "SPK", "Sapporo", "札幌市")?,
            Urban::new(7, 6, UrbanKind::City, "WAW", "Warsaw", "Warszawa")?,
            Urban::new(8, 7, UrbanKind::Town, "IRP", "Irpin", "Ірпінь")?,
        ];

        Ok(SeedDb {
            countries,
            divisions,
            urbans,
        })
    }
}

impl<B: GeoBackend> SeedDb<B> {
    /// All seeded countries, in authored order.
    #[inline]
    pub fn countries(&self) -> &[Country<B>] {
        &self.countries
    }

    /// All seeded divisions, in authored order.
    #[inline]
    pub fn divisions(&self) -> &[Division<B>] {
        &self.divisions
    }

    /// All seeded urban areas, in authored order.
    #[inline]
    pub fn urbans(&self) -> &[Urban<B>] {
        &self.urbans
    }

    /// Seeded divisions of one classification, in authored order.
    pub fn divisions_of(&self, kind: DivisionKind) -> impl Iterator<Item = &Division<B>> {
        self.divisions
            .iter()
            .filter(move |d| d.division_kind() == kind)
    }

    /// Seeded urban areas of one classification, in authored order.
    pub fn urbans_of(&self, kind: UrbanKind) -> impl Iterator<Item = &Urban<B>> {
        self.urbans.iter().filter(move |u| u.urban_kind() == kind)
    }

    /// Divisions belonging to a given country.
    pub fn divisions_for_country<'a>(&'a self, country: &Country<B>) -> Vec<&'a Division<B>> {
        self.divisions
            .iter()
            .filter(|d| d.country_id() == country.id())
            .collect()
    }

    /// Urban areas belonging to a given division.
    pub fn urbans_for_division<'a>(&'a self, division: &Division<B>) -> Vec<&'a Urban<B>> {
        self.urbans
            .iter()
            .filter(|u| u.division_id() == division.id())
            .collect()
    }

    /// Find a country by ISO2 code, case-insensitive (e.g. "TH", "de").
    pub fn find_country_by_iso(&self, iso: &str) -> Option<&Country<B>> {
        self.countries
            .iter()
            .find(|c| c.iso().eq_ignore_ascii_case(iso))
    }

    /// Find a division by its short code, case-insensitive (e.g. "BKK").
    pub fn find_division_by_iso(&self, iso: &str) -> Option<&Division<B>> {
        self.divisions
            .iter()
            .find(|d| d.iso().eq_ignore_ascii_case(iso))
    }

    /// Find all countries whose name or endonym *loosely matches* the given
    /// substring.
    ///
    /// The search is case-insensitive and accent/diacritic-insensitive via
    /// [`fold_key`], so `"deutsch"` matches `Deutschland`.
    pub fn find_countries_by_substring(&self, substr: &str) -> Vec<&Country<B>> {
        let q = fold_key(substr);
        if q.is_empty() {
            return Vec::new();
        }
        self.countries
            .iter()
            .filter(|c| fold_key(c.name()).contains(&q) || fold_key(c.native()).contains(&q))
            .collect()
    }

    /// Find all divisions whose name or endonym loosely matches the given
    /// substring, returned with their owning country when seeded.
    pub fn find_divisions_by_substring(&self, substr: &str) -> Vec<(&Division<B>, Option<&Country<B>>)> {
        let q = fold_key(substr);
        if q.is_empty() {
            return Vec::new();
        }
        self.divisions
            .iter()
            .filter(|d| fold_key(d.name()).contains(&q) || fold_key(d.native()).contains(&q))
            .map(|d| {
                let country = self.countries.iter().find(|c| c.id() == d.country_id());
                (d, country)
            })
            .collect()
    }

    /// Aggregate statistics for the seed database.
    pub fn stats(&self) -> DbStats {
        DbStats {
            countries: self.countries.len(),
            divisions: self.divisions.len(),
            urbans: self.urbans.len(),
        }
    }
}
