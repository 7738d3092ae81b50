// crates/georef-core/src/traits.rs
use serde::{Deserialize, Serialize};

use crate::text::fold_key;

/// Storage backend for strings and identifiers used by the record types.
///
/// This abstraction allows the crate to swap how textual data and
/// identifiers are stored internally (for example to use more compact string
/// types, or a wider identifier) without changing the public API of
/// accessors that return `&str` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and ensure the
/// associated types can be serialized/deserialized so records can cross the
/// persistence boundary via serde.
pub trait GeoBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;

    /// Record identifier type. Must be ordered and hashable; the `Default`
    /// value is reserved as the "no identity yet" marker for transient
    /// records.
    type Id: Copy
        + Eq
        + Ord
        + std::hash::Hash
        + Default
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>;

    /// Convert an `&str` into the backend string representation.
    fn str_from(s: &str) -> Self::Str;

    /// Convert backend string to owned Rust `String`.
    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }

    /// True if `id` is the default value marking a record as transient.
    #[inline]
    fn id_is_transient(id: Self::Id) -> bool {
        id == Self::Id::default()
    }
}

/// Default backend: plain `String` + `u32`.
///
/// This backend is used by the convenient aliases [`StandardBackend`] and
/// [`DefaultSeedDb`](crate::seed::DefaultSeedDb). It provides the best
/// ergonomics and is suitable for most applications.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

/// Convenient alias used in examples.
pub type StandardBackend = DefaultBackend;

impl GeoBackend for DefaultBackend {
    type Str = String;
    type Id = u32;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }
}

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes Unicode‑aware, accent-insensitive and
/// case-insensitive comparisons based on [`fold_key`]. Implementors provide a
/// `&str` view of their canonical name via [`NameMatch::name_str`], and get
/// convenient helpers:
/// - [`NameMatch::is_named`] — equality on folded form
/// - [`NameMatch::name_contains`] — substring match on folded form
///
/// # Examples
/// ```rust
/// use georef_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Łódź").is_named("lodz"));
/// assert!(Place("Zürich").name_contains("zuri"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    ///
    /// Returns `true` if `q` equals the canonical name after normalization
    /// with [`fold_key`].
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Accent-insensitive + case-insensitive substring match.
    ///
    /// Returns `true` if the folded canonical name contains the folded `q`.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}
