//! The closed set of dimension kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DimensionError;

/// One of the six energy dimensions modelled by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DimensionKind {
    AccountClass,
    AccountStatus,
    Commodity,
    PlanType,
    RateType,
    UnitOfMeasure,
}

impl DimensionKind {
    /// Every kind, in documentation order.
    pub const ALL: [DimensionKind; 6] = [
        DimensionKind::AccountClass,
        DimensionKind::AccountStatus,
        DimensionKind::Commodity,
        DimensionKind::PlanType,
        DimensionKind::RateType,
        DimensionKind::UnitOfMeasure,
    ];

    /// Returns the kebab-case identifier used on command lines and in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionKind::AccountClass => "account-class",
            DimensionKind::AccountStatus => "account-status",
            DimensionKind::Commodity => "commodity",
            DimensionKind::PlanType => "plan-type",
            DimensionKind::RateType => "rate-type",
            DimensionKind::UnitOfMeasure => "unit-of-measure",
        }
    }

    /// Returns the title used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            DimensionKind::AccountClass => "Account Class",
            DimensionKind::AccountStatus => "Account Status",
            DimensionKind::Commodity => "Commodity",
            DimensionKind::PlanType => "Plan Type",
            DimensionKind::RateType => "Rate Type",
            DimensionKind::UnitOfMeasure => "Unit of Measure",
        }
    }
}

impl fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DimensionKind {
    type Err = DimensionError;

    /// Accepts the kebab-case identifier as well as spaced, snake_case or
    /// camel-case spellings ("Account Class", "unit_of_measure", "PlanType").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|ch| ch.to_ascii_uppercase())
            .collect();

        match normalized.as_str() {
            "ACCOUNTCLASS" => Ok(DimensionKind::AccountClass),
            "ACCOUNTSTATUS" => Ok(DimensionKind::AccountStatus),
            "COMMODITY" => Ok(DimensionKind::Commodity),
            "PLANTYPE" => Ok(DimensionKind::PlanType),
            "RATETYPE" => Ok(DimensionKind::RateType),
            "UNITOFMEASURE" | "UOM" => Ok(DimensionKind::UnitOfMeasure),
            _ => Err(DimensionError::UnknownKind(s.to_string())),
        }
    }
}
