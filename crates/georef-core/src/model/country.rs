// crates/georef-core/src/model/country.rs
use serde::{Deserialize, Serialize};

use super::{country_iso, required_text, MAX_NAME_LEN};
use crate::error::Result;
use crate::identity::{EntityKind, GeoEntity};
use crate::traits::{GeoBackend, NameMatch};

/// A country entry: the root of the geographic hierarchy.
///
/// Countries are closed records — there is no classification tag and no
/// subtype. Divisions reference their country through
/// [`Division::country_id`](super::Division::country_id); the country itself
/// holds no child collection.
///
/// # Examples
/// ```rust
/// use georef_core::{Country, DefaultBackend};
///
/// fn main() -> georef_core::Result<()> {
///     let th: Country<DefaultBackend> =
///         Country::new(764, "TH", 66, "Thailand", "ไทย", 69_950_850)?;
///     assert_eq!(th.iso(), "TH");
///     assert_eq!(th.native(), "ไทย");
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Country<B: GeoBackend> {
    id: B::Id,
    iso: B::Str,
    calling_code: u16,
    name: B::Str,
    native: B::Str,
    population: u64,
}

impl<B: GeoBackend> Country<B> {
    /// Builds a fully-populated country, validating every field.
    ///
    /// Fails fast on the first violation; never truncates or coerces.
    pub fn new(
        id: B::Id,
        iso: &str,
        calling_code: u16,
        name: &str,
        native: &str,
        population: u64,
    ) -> Result<Self> {
        country_iso("country.iso", iso)?;
        required_text("country.name", name, MAX_NAME_LEN)?;
        required_text("country.native", native, MAX_NAME_LEN)?;
        Ok(Country {
            id,
            iso: B::str_from(iso),
            calling_code,
            name: B::str_from(name),
            native: B::str_from(native),
            population,
        })
    }

    /// Builds a country without a durable identifier.
    ///
    /// The identifier stays at its default value until the persistence layer
    /// assigns one; see [`GeoEntity::is_transient`].
    pub fn transient(
        iso: &str,
        calling_code: u16,
        name: &str,
        native: &str,
        population: u64,
    ) -> Result<Self> {
        Self::new(B::Id::default(), iso, calling_code, name, native, population)
    }

    /// Record identifier.
    #[inline]
    pub fn id(&self) -> B::Id {
        self.id
    }

    /// ISO 3166-1 alpha-2 code (e.g. "TH", "DE").
    #[inline]
    pub fn iso(&self) -> &str {
        self.iso.as_ref()
    }

    /// International calling code without the leading `+` (e.g. 66).
    #[inline]
    pub fn calling_code(&self) -> u16 {
        self.calling_code
    }

    /// Country display name. Always non-empty.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Endonym in the country's own script (e.g. "ไทย").
    #[inline]
    pub fn native(&self) -> &str {
        self.native.as_ref()
    }

    /// Country population.
    #[inline]
    pub fn population(&self) -> u64 {
        self.population
    }
}

impl<B: GeoBackend> GeoEntity for Country<B> {
    type Id = B::Id;

    #[inline]
    fn id(&self) -> B::Id {
        self.id
    }

    #[inline]
    fn kind(&self) -> EntityKind {
        EntityKind::Country
    }
}

impl<B: GeoBackend> NameMatch for Country<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}
