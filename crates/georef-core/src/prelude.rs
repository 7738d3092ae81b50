// crates/georef-core/src/prelude.rs

//! georef-core prelude: bring common types and traits into scope for
//! examples and downstream users.

#![allow(unused_imports)]

pub use crate::common::DbStats;
pub use crate::error::{GeoRefError, Result};
pub use crate::identity::{ByIdentity, EntityKind, GeoEntity, Identity};
pub use crate::map::{CountryDraft, DivisionDraft, UrbanDraft};
pub use crate::model::{Country, Division, DivisionKind, Urban, UrbanKind};
pub use crate::seed::{DefaultSeedDb, SeedDb};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{DefaultBackend, GeoBackend, NameMatch, StandardBackend};
