// crates/georef-core/src/lib.rs

//! # georef-core
//!
//! Reference geographic seed data for bootstrapping application databases.
//!
//! The crate models a strict three-level hierarchy — [`Country`] owns
//! [`Division`]s, a division owns [`Urban`]s — and ships hand-authored,
//! read-only datasets for all three families (see [`SeedDb`]). Division and
//! urban records carry a classification tag ([`DivisionKind`],
//! [`UrbanKind`]) instead of a subtype hierarchy; the tag is part of each
//! record's identity, so a Province and a State never compare equal even if
//! their identifiers collide.
//!
//! The crate performs no I/O. Persistence, referential integrity and
//! uniqueness enforcement belong to whatever storage layer consumes the
//! records; the contract toward it is "fully-formed, validated values in,
//! nothing else out".

pub mod common;
pub mod error;
pub mod identity;
pub mod map;
pub mod model;
pub mod prelude;
pub mod seed;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::error::{GeoRefError, Result};
// Export the Model Types
pub use crate::model::{Country, Division, DivisionKind, Urban, UrbanKind};
pub use crate::common::DbStats;
// Export the Identity Core
pub use crate::identity::{ByIdentity, EntityKind, GeoEntity, Identity};
// Export the Seed Datasets
pub use crate::seed::{DefaultSeedDb, SeedDb};
// Export the Backend seam and Text Utils
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{DefaultBackend, GeoBackend, NameMatch, StandardBackend};
