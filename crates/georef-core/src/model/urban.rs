// crates/georef-core/src/model/urban.rs
use serde::{Deserialize, Serialize};

use super::{required_text, short_code, UrbanKind, MAX_NAME_LEN};
use crate::error::Result;
use crate::identity::{EntityKind, GeoEntity};
use crate::traits::{GeoBackend, NameMatch};

/// An urban area within a division.
///
/// Like [`Division`](super::Division), one struct covers the family and the
/// [`UrbanKind`] tag carries the classification (city, town, amphor, …).
/// Urban records are the leaves of the hierarchy and carry no population
/// figure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Urban<B: GeoBackend> {
    id: B::Id,
    division_id: B::Id,
    kind: UrbanKind,
    iso: B::Str,
    name: B::Str,
    native: B::Str,
}

impl<B: GeoBackend> Urban<B> {
    /// Builds a fully-populated urban area, validating every field.
    ///
    /// Fails fast on the first violation; never truncates or coerces.
    pub fn new(
        id: B::Id,
        division_id: B::Id,
        kind: UrbanKind,
        iso: &str,
        name: &str,
        native: &str,
    ) -> Result<Self> {
        short_code("urban.iso", iso)?;
        required_text("urban.name", name, MAX_NAME_LEN)?;
        required_text("urban.native", native, MAX_NAME_LEN)?;
        Ok(Urban {
            id,
            division_id,
            kind,
            iso: B::str_from(iso),
            name: B::str_from(name),
            native: B::str_from(native),
        })
    }

    /// Builds an urban area without a durable identifier.
    pub fn transient(
        division_id: B::Id,
        kind: UrbanKind,
        iso: &str,
        name: &str,
        native: &str,
    ) -> Result<Self> {
        Self::new(B::Id::default(), division_id, kind, iso, name, native)
    }

    /// Record identifier.
    #[inline]
    pub fn id(&self) -> B::Id {
        self.id
    }

    /// Identifier of the owning division.
    #[inline]
    pub fn division_id(&self) -> B::Id {
        self.division_id
    }

    /// Classification label of this urban area.
    #[inline]
    pub fn urban_kind(&self) -> UrbanKind {
        self.kind
    }

    /// Short code (e.g. "WAW", "M").
    #[inline]
    pub fn iso(&self) -> &str {
        self.iso.as_ref()
    }

    /// Urban display name. Always non-empty.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Endonym in the local script (e.g. "München").
    #[inline]
    pub fn native(&self) -> &str {
        self.native.as_ref()
    }
}

impl<B: GeoBackend> GeoEntity for Urban<B> {
    type Id = B::Id;

    #[inline]
    fn id(&self) -> B::Id {
        self.id
    }

    #[inline]
    fn kind(&self) -> EntityKind {
        EntityKind::Urban(self.kind)
    }
}

impl<B: GeoBackend> NameMatch for Urban<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}
