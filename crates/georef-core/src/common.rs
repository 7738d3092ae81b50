// crates/georef-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the seed database.
///
/// Returned by [`SeedDb::stats`](crate::seed::SeedDb::stats); the counts
/// reflect the materialized in-memory datasets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    pub divisions: usize,
    pub urbans: usize,
}
