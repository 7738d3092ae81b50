// crates/georef-core/src/map.rs

//! Two-phase construction for the persistence boundary.
//!
//! Row mappers and ORMs often allocate first and populate fields
//! afterwards. The draft types here keep that pattern away from the record
//! types themselves: a draft starts empty, accepts fields in any order, and
//! [`finish`](CountryDraft::finish) funnels through the same validating
//! constructors as direct construction. A record that exists is therefore
//! always valid; only a draft can be half-populated.
//!
//! # Examples
//! ```rust
//! use georef_core::map::CountryDraft;
//! use georef_core::DefaultBackend;
//!
//! fn main() -> georef_core::Result<()> {
//!     let th = CountryDraft::<DefaultBackend>::new()
//!         .id(764)
//!         .iso("TH")
//!         .calling_code(66)
//!         .name("Thailand")
//!         .native("ไทย")
//!         .population(69_950_850)
//!         .finish()?;
//!     assert_eq!(th.iso(), "TH");
//!     Ok(())
//! }
//! ```

use crate::error::{GeoRefError, Result};
use crate::model::{Country, Division, DivisionKind, Urban, UrbanKind};
use crate::traits::GeoBackend;

/// Accumulates country fields before validation.
pub struct CountryDraft<B: GeoBackend> {
    id: B::Id,
    iso: Option<String>,
    calling_code: u16,
    name: Option<String>,
    native: Option<String>,
    population: u64,
}

impl<B: GeoBackend> Default for CountryDraft<B> {
    fn default() -> Self {
        CountryDraft {
            id: B::Id::default(),
            iso: None,
            calling_code: 0,
            name: None,
            native: None,
            population: 0,
        }
    }
}

impl<B: GeoBackend> CountryDraft<B> {
    /// Starts an empty draft; the identifier defaults to transient.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: B::Id) -> Self {
        self.id = id;
        self
    }

    pub fn iso(mut self, iso: &str) -> Self {
        self.iso = Some(iso.to_owned());
        self
    }

    pub fn calling_code(mut self, calling_code: u16) -> Self {
        self.calling_code = calling_code;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    pub fn native(mut self, native: &str) -> Self {
        self.native = Some(native.to_owned());
        self
    }

    pub fn population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }

    /// Validates and produces the record. Unset text fields fail as missing.
    pub fn finish(self) -> Result<Country<B>> {
        Country::new(
            self.id,
            self.iso.as_deref().unwrap_or(""),
            self.calling_code,
            self.name.as_deref().unwrap_or(""),
            self.native.as_deref().unwrap_or(""),
            self.population,
        )
    }
}

/// Accumulates division fields before validation.
pub struct DivisionDraft<B: GeoBackend> {
    id: B::Id,
    country_id: B::Id,
    kind: Option<DivisionKind>,
    iso: Option<String>,
    name: Option<String>,
    native: Option<String>,
    population: u64,
}

impl<B: GeoBackend> Default for DivisionDraft<B> {
    fn default() -> Self {
        DivisionDraft {
            id: B::Id::default(),
            country_id: B::Id::default(),
            kind: None,
            iso: None,
            name: None,
            native: None,
            population: 0,
        }
    }
}

impl<B: GeoBackend> DivisionDraft<B> {
    /// Starts an empty draft; identifiers default to transient.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: B::Id) -> Self {
        self.id = id;
        self
    }

    pub fn country_id(mut self, country_id: B::Id) -> Self {
        self.country_id = country_id;
        self
    }

    pub fn kind(mut self, kind: DivisionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn iso(mut self, iso: &str) -> Self {
        self.iso = Some(iso.to_owned());
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    pub fn native(mut self, native: &str) -> Self {
        self.native = Some(native.to_owned());
        self
    }

    pub fn population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }

    /// Validates and produces the record.
    ///
    /// The classification tag has no usable default, so leaving it unset is
    /// an error like any other missing required field.
    pub fn finish(self) -> Result<Division<B>> {
        let kind = self.kind.ok_or(GeoRefError::MissingField {
            field: "division.kind",
        })?;
        Division::new(
            self.id,
            self.country_id,
            kind,
            self.iso.as_deref().unwrap_or(""),
            self.name.as_deref().unwrap_or(""),
            self.native.as_deref().unwrap_or(""),
            self.population,
        )
    }
}

/// Accumulates urban-area fields before validation.
pub struct UrbanDraft<B: GeoBackend> {
    id: B::Id,
    division_id: B::Id,
    kind: Option<UrbanKind>,
    iso: Option<String>,
    name: Option<String>,
    native: Option<String>,
}

impl<B: GeoBackend> Default for UrbanDraft<B> {
    fn default() -> Self {
        UrbanDraft {
            id: B::Id::default(),
            division_id: B::Id::default(),
            kind: None,
            iso: None,
            name: None,
            native: None,
        }
    }
}

impl<B: GeoBackend> UrbanDraft<B> {
    /// Starts an empty draft; identifiers default to transient.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: B::Id) -> Self {
        self.id = id;
        self
    }

    pub fn division_id(mut self, division_id: B::Id) -> Self {
        self.division_id = division_id;
        self
    }

    pub fn kind(mut self, kind: UrbanKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn iso(mut self, iso: &str) -> Self {
        self.iso = Some(iso.to_owned());
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    pub fn native(mut self, native: &str) -> Self {
        self.native = Some(native.to_owned());
        self
    }

    /// Validates and produces the record.
    pub fn finish(self) -> Result<Urban<B>> {
        let kind = self.kind.ok_or(GeoRefError::MissingField {
            field: "urban.kind",
        })?;
        Urban::new(
            self.id,
            self.division_id,
            kind,
            self.iso.as_deref().unwrap_or(""),
            self.name.as_deref().unwrap_or(""),
            self.native.as_deref().unwrap_or(""),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoRefError;
    use crate::traits::DefaultBackend;

    #[test]
    fn draft_enforces_the_same_validation_as_new() {
        let err = CountryDraft::<DefaultBackend>::new()
            .iso("TH")
            .native("ไทย")
            .finish()
            .unwrap_err();
        assert_eq!(
            err,
            GeoRefError::MissingField {
                field: "country.name"
            }
        );
    }

    #[test]
    fn division_draft_requires_a_kind() {
        let err = DivisionDraft::<DefaultBackend>::new()
            .country_id(764)
            .iso("BKK")
            .name("Bangkok")
            .native("กรุงเทพมหานคร")
            .finish()
            .unwrap_err();
        assert_eq!(
            err,
            GeoRefError::MissingField {
                field: "division.kind"
            }
        );
    }

    #[test]
    fn populated_draft_matches_direct_construction() {
        let via_draft = UrbanDraft::<DefaultBackend>::new()
            .id(3)
            .division_id(3)
            .kind(UrbanKind::City)
            .iso("M")
            .name("Munich")
            .native("München")
            .finish()
            .unwrap();
        let direct =
            Urban::<DefaultBackend>::new(3, 3, UrbanKind::City, "M", "Munich", "München").unwrap();
        assert_eq!(via_draft.name(), direct.name());
        assert_eq!(via_draft.native(), direct.native());
        assert_eq!(via_draft.division_id(), direct.division_id());
    }
}
