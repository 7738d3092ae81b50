// crates/georef-core/src/model/division.rs
use serde::{Deserialize, Serialize};

use super::{required_text, short_code, DivisionKind, MAX_NAME_LEN};
use crate::error::Result;
use crate::identity::{EntityKind, GeoEntity};
use crate::traits::{GeoBackend, NameMatch};

/// An administrative division within a country.
///
/// One struct covers the whole family; the [`DivisionKind`] tag says which
/// classification a row represents (province, oblast, voivodeship, …). The
/// tag is part of the record's identity: a Province and a State with the
/// same identifier are different entities.
///
/// `country_id` is a plain reference — whether it resolves to a live country
/// is the external store's concern, not this crate's.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Division<B: GeoBackend> {
    id: B::Id,
    country_id: B::Id,
    kind: DivisionKind,
    iso: B::Str,
    name: B::Str,
    native: B::Str,
    population: u64,
}

impl<B: GeoBackend> Division<B> {
    /// Builds a fully-populated division, validating every field.
    ///
    /// Fails fast on the first violation; never truncates or coerces.
    pub fn new(
        id: B::Id,
        country_id: B::Id,
        kind: DivisionKind,
        iso: &str,
        name: &str,
        native: &str,
        population: u64,
    ) -> Result<Self> {
        short_code("division.iso", iso)?;
        required_text("division.name", name, MAX_NAME_LEN)?;
        required_text("division.native", native, MAX_NAME_LEN)?;
        Ok(Division {
            id,
            country_id,
            kind,
            iso: B::str_from(iso),
            name: B::str_from(name),
            native: B::str_from(native),
            population,
        })
    }

    /// Builds a division without a durable identifier.
    pub fn transient(
        country_id: B::Id,
        kind: DivisionKind,
        iso: &str,
        name: &str,
        native: &str,
        population: u64,
    ) -> Result<Self> {
        Self::new(B::Id::default(), country_id, kind, iso, name, native, population)
    }

    /// Record identifier.
    #[inline]
    pub fn id(&self) -> B::Id {
        self.id
    }

    /// Identifier of the owning country.
    #[inline]
    pub fn country_id(&self) -> B::Id {
        self.country_id
    }

    /// Classification label of this division.
    #[inline]
    pub fn division_kind(&self) -> DivisionKind {
        self.kind
    }

    /// Short subdivision code (e.g. "BKK", "BY").
    #[inline]
    pub fn iso(&self) -> &str {
        self.iso.as_ref()
    }

    /// Division display name. Always non-empty.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Endonym in the local script (e.g. "กรุงเทพมหานคร").
    #[inline]
    pub fn native(&self) -> &str {
        self.native.as_ref()
    }

    /// Division population.
    #[inline]
    pub fn population(&self) -> u64 {
        self.population
    }
}

impl<B: GeoBackend> GeoEntity for Division<B> {
    type Id = B::Id;

    #[inline]
    fn id(&self) -> B::Id {
        self.id
    }

    #[inline]
    fn kind(&self) -> EntityKind {
        EntityKind::Division(self.kind)
    }
}

impl<B: GeoBackend> NameMatch for Division<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}
