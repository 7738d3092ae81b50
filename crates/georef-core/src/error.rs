// crates/georef-core/src/error.rs
use thiserror::Error;

/// Errors raised while constructing record values.
///
/// Every variant is a deterministic construction-time validation failure.
/// The crate performs no I/O, so there are no transient or retryable error
/// states; a failed construction will fail the same way every time.
/// Referential-integrity and uniqueness violations are deliberately not
/// represented here — those belong to the external persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoRefError {
    /// A required text field was empty or never set.
    #[error("{field} is required and must not be empty")]
    MissingField { field: &'static str },

    /// A text field exceeded its maximum length in characters.
    #[error("{field} must be at most {max} characters, got {len}")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    /// A country code was not a two-letter ISO 3166-1 alpha-2 value.
    #[error("invalid ISO code `{value}` for {field}")]
    InvalidIso { field: &'static str, value: String },

    /// A classification label did not name a known kind.
    #[error("unknown {family} classification `{value}`")]
    UnknownKind { family: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, GeoRefError>;
