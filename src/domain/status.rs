use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// Vehicle tax status as reported by DVLA (`taxStatus`).
pub enum TaxStatus {
    #[serde(rename = "Not Taxed for on Road Use")]
    NotTaxedForOnRoadUse,
    #[serde(rename = "SORN")]
    Sorn,
    Taxed,
    Untaxed,
}

impl TaxStatus {
    /// JSON field name used by DVLA (`taxStatus`).
    pub const FIELD: &'static str = "taxStatus";

    /// Every tax status DVLA can report.
    pub const ALL: [Self; 4] = [
        Self::NotTaxedForOnRoadUse,
        Self::Sorn,
        Self::Taxed,
        Self::Untaxed,
    ];

    /// The exact wire string for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotTaxedForOnRoadUse => "Not Taxed for on Road Use",
            Self::Sorn => "SORN",
            Self::Taxed => "Taxed",
            Self::Untaxed => "Untaxed",
        }
    }
}

impl FromStr for TaxStatus {
    type Err = ValidationError;

    /// Parse a wire string. Matching is exact; DVLA values are case-sensitive.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| ValidationError::InvalidEnumValue {
                field: Self::FIELD,
                value: value.to_owned(),
            })
    }
}

impl fmt::Display for TaxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// MOT status as reported by DVLA (`motStatus`).
pub enum MotStatus {
    #[serde(rename = "No details held by DVLA")]
    NoDetailsHeldByDvla,
    #[serde(rename = "No results returned")]
    NoResultsReturned,
    #[serde(rename = "Not valid")]
    NotValid,
    Valid,
}

impl MotStatus {
    /// JSON field name used by DVLA (`motStatus`).
    pub const FIELD: &'static str = "motStatus";

    /// Every MOT status DVLA can report.
    pub const ALL: [Self; 4] = [
        Self::NoDetailsHeldByDvla,
        Self::NoResultsReturned,
        Self::NotValid,
        Self::Valid,
    ];

    /// The exact wire string for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoDetailsHeldByDvla => "No details held by DVLA",
            Self::NoResultsReturned => "No results returned",
            Self::NotValid => "Not valid",
            Self::Valid => "Valid",
        }
    }
}

impl FromStr for MotStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| ValidationError::InvalidEnumValue {
                field: Self::FIELD,
                value: value.to_owned(),
            })
    }
}

impl fmt::Display for MotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
