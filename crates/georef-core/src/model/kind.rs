// crates/georef-core/src/model/kind.rs

//! Classification taxonomies for divisions and urban areas.
//!
//! Kinds are pure labels: no variant carries behavior or extra fields. The
//! tag exists so consumers can filter one classification ("only provinces")
//! and so a discriminator value can be persisted alongside the row. Adding a
//! label is an O(1) change: extend the enum and its `ALL`/`as_str` tables,
//! nothing else moves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeoRefError;

/// Classification label for an administrative division.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionKind {
    Province,
    State,
    Region,
    County,
    Canton,
    District,
    Municipality,
    Territory,
    Prefecture,
    Department,
    Area,
    Community,
    Parish,
    Oblast,
    Voivodeship,
    Banner,
    Barangay,
    Kampong,
    Barony,
    Hundred,
    Kingdom,
    Principality,
    Regency,
    Republic,
    Riding,
    Theme,
    Banat,
}

impl DivisionKind {
    /// Every division classification, in declaration order.
    pub const ALL: [DivisionKind; 27] = [
        DivisionKind::Province,
        DivisionKind::State,
        DivisionKind::Region,
        DivisionKind::County,
        DivisionKind::Canton,
        DivisionKind::District,
        DivisionKind::Municipality,
        DivisionKind::Territory,
        DivisionKind::Prefecture,
        DivisionKind::Department,
        DivisionKind::Area,
        DivisionKind::Community,
        DivisionKind::Parish,
        DivisionKind::Oblast,
        DivisionKind::Voivodeship,
        DivisionKind::Banner,
        DivisionKind::Barangay,
        DivisionKind::Kampong,
        DivisionKind::Barony,
        DivisionKind::Hundred,
        DivisionKind::Kingdom,
        DivisionKind::Principality,
        DivisionKind::Regency,
        DivisionKind::Republic,
        DivisionKind::Riding,
        DivisionKind::Theme,
        DivisionKind::Banat,
    ];

    /// Stable lowercase discriminator, as stored next to persisted rows.
    pub const fn as_str(self) -> &'static str {
        match self {
            DivisionKind::Province => "province",
            DivisionKind::State => "state",
            DivisionKind::Region => "region",
            DivisionKind::County => "county",
            DivisionKind::Canton => "canton",
            DivisionKind::District => "district",
            DivisionKind::Municipality => "municipality",
            DivisionKind::Territory => "territory",
            DivisionKind::Prefecture => "prefecture",
            DivisionKind::Department => "department",
            DivisionKind::Area => "area",
            DivisionKind::Community => "community",
            DivisionKind::Parish => "parish",
            DivisionKind::Oblast => "oblast",
            DivisionKind::Voivodeship => "voivodeship",
            DivisionKind::Banner => "banner",
            DivisionKind::Barangay => "barangay",
            DivisionKind::Kampong => "kampong",
            DivisionKind::Barony => "barony",
            DivisionKind::Hundred => "hundred",
            DivisionKind::Kingdom => "kingdom",
            DivisionKind::Principality => "principality",
            DivisionKind::Regency => "regency",
            DivisionKind::Republic => "republic",
            DivisionKind::Riding => "riding",
            DivisionKind::Theme => "theme",
            DivisionKind::Banat => "banat",
        }
    }
}

impl fmt::Display for DivisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DivisionKind {
    type Err = GeoRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GeoRefError::UnknownKind {
                family: "division",
                value: s.to_string(),
            })
    }
}

/// Classification label for an urban area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrbanKind {
    City,
    Town,
    Ward,
    Shire,
    Amphor,
    Village,
    Hamlet,
}

impl UrbanKind {
    /// Every urban classification, in declaration order.
    pub const ALL: [UrbanKind; 7] = [
        UrbanKind::City,
        UrbanKind::Town,
        UrbanKind::Ward,
        UrbanKind::Shire,
        UrbanKind::Amphor,
        UrbanKind::Village,
        UrbanKind::Hamlet,
    ];

    /// Stable lowercase discriminator, as stored next to persisted rows.
    pub const fn as_str(self) -> &'static str {
        match self {
            UrbanKind::City => "city",
            UrbanKind::Town => "town",
            UrbanKind::Ward => "ward",
            UrbanKind::Shire => "shire",
            UrbanKind::Amphor => "amphor",
            UrbanKind::Village => "village",
            UrbanKind::Hamlet => "hamlet",
        }
    }
}

impl fmt::Display for UrbanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrbanKind {
    type Err = GeoRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GeoRefError::UnknownKind {
                family: "urban",
                value: s.to_string(),
            })
    }
}
