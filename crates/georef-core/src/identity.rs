// crates/georef-core/src/identity.rs

//! Record identity and equality.
//!
//! Every record family shares one identity contract: a record is identified
//! by its concrete variant (classification tag included) plus its
//! identifier. A default identifier means the record is *transient* — not
//! yet assigned a durable identity by the persistence layer — and transient
//! records never compare identity-equal, even to another transient record
//! with the same default id.

use std::hash::{Hash, Hasher};
use std::ptr;

use serde::{Deserialize, Serialize};

use crate::model::{DivisionKind, UrbanKind};

/// Discriminates the concrete record variant an identity belongs to.
///
/// The division/urban classification tag is part of the discriminator, so a
/// Province and a State that happen to share an identifier are still two
/// different real-world entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Country,
    Division(DivisionKind),
    Urban(UrbanKind),
}

impl EntityKind {
    /// Stable string tag suitable for a persisted discriminator column.
    pub const fn discriminator(self) -> &'static str {
        match self {
            EntityKind::Country => "country",
            EntityKind::Division(kind) => kind.as_str(),
            EntityKind::Urban(kind) => kind.as_str(),
        }
    }
}

/// Durable identity of a persisted record: concrete variant plus identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity<Id> {
    pub kind: EntityKind,
    pub id: Id,
}

/// Identity contract shared by every record family.
///
/// Implementors expose their identifier and variant tag; everything else is
/// provided. No ordering, serialization or persistence behavior lives here —
/// those are external concerns.
///
/// # Examples
/// ```rust
/// use georef_core::{Country, DefaultBackend, GeoEntity};
///
/// fn main() -> georef_core::Result<()> {
///     let a: Country<DefaultBackend> = Country::new(764, "TH", 66, "Thailand", "ไทย", 69_950_850)?;
///     let b: Country<DefaultBackend> = Country::new(764, "TH", 66, "Thailand", "ไทย", 69_950_850)?;
///     assert!(a.identity_eq(&b));
///
///     let draft: Country<DefaultBackend> = Country::transient("TH", 66, "Thailand", "ไทย", 0)?;
///     assert!(draft.is_transient());
///     assert!(!draft.identity_eq(&a));
///     Ok(())
/// }
/// ```
pub trait GeoEntity {
    /// Identifier type. The `Default` value marks a record as transient.
    type Id: Copy + Eq + Hash + Default;

    /// Returns the record identifier.
    fn id(&self) -> Self::Id;

    /// Returns the concrete variant tag of this record.
    fn kind(&self) -> EntityKind;

    /// True iff the record has not yet been assigned a durable identifier.
    #[inline]
    fn is_transient(&self) -> bool {
        self.id() == Self::Id::default()
    }

    /// The durable identity key, or `None` while transient.
    #[inline]
    fn identity(&self) -> Option<Identity<Self::Id>> {
        if self.is_transient() {
            None
        } else {
            Some(Identity {
                kind: self.kind(),
                id: self.id(),
            })
        }
    }

    /// Identity comparison across any two records sharing an identifier type.
    ///
    /// True iff both sides are non-transient, are the exact same concrete
    /// variant (classification tag included) and carry equal identifiers.
    /// A default identifier signals "no identity yet", not "identity zero":
    /// two transient records never compare equal.
    #[inline]
    fn identity_eq<O>(&self, other: &O) -> bool
    where
        O: GeoEntity<Id = Self::Id> + ?Sized,
    {
        match (self.identity(), other.identity()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Borrowed adapter that keys hash containers by record identity.
///
/// Assigned records hash and compare by their [`Identity`]. Transient
/// records fall back to the allocation address, so distinct transient values
/// stay distinguishable in a `HashSet`/`HashMap` despite sharing the default
/// id, while any value still equals itself (keeping `Eq` reflexive).
///
/// # Examples
/// ```rust
/// use std::collections::HashSet;
/// use georef_core::{ByIdentity, Country, DefaultBackend};
///
/// fn main() -> georef_core::Result<()> {
///     let a: Country<DefaultBackend> = Country::new(764, "TH", 66, "Thailand", "ไทย", 69_950_850)?;
///     let b = a.clone();
///     let t1: Country<DefaultBackend> = Country::transient("DE", 49, "Germany", "Deutschland", 0)?;
///     let t2 = t1.clone();
///
///     let set: HashSet<_> = [&a, &b, &t1, &t2].into_iter().map(ByIdentity).collect();
///     // a and b collapse to one identity; the two transients stay apart.
///     assert_eq!(set.len(), 3);
///     Ok(())
/// }
/// ```
pub struct ByIdentity<'a, E: GeoEntity>(pub &'a E);

impl<'a, E: GeoEntity> Clone for ByIdentity<'a, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E: GeoEntity> Copy for ByIdentity<'a, E> {}

impl<'a, E: GeoEntity> PartialEq for ByIdentity<'a, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self.0.identity(), other.0.identity()) {
            (Some(a), Some(b)) => a == b,
            // Transient on either side: only the exact same allocation matches.
            _ => ptr::eq(self.0, other.0),
        }
    }
}

impl<'a, E: GeoEntity> Eq for ByIdentity<'a, E> {}

impl<'a, E: GeoEntity> Hash for ByIdentity<'a, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.0.identity() {
            Some(identity) => identity.hash(state),
            None => ptr::hash(self.0, state),
        }
    }
}
