//! Commercial context in which a rate was offered.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::dimension::{EnergyDimension, impl_dimension_traits};
use crate::kind::DimensionKind;
use crate::table::{CanonicalDef, DimensionTable};

/// Rate type: how the customer came to be on the rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum RateType {
    /// Input that matched no known spelling (id 0).
    #[default]
    Unrecognized,
    /// Rate for a new enrollment.
    Enrollment,
    /// Rate for a customer switching suppliers.
    Switch,
    /// Rate offered at renewal.
    Renewal,
    /// Introductory rate.
    Intro,
    /// Rate offered to win back a former customer.
    Winback,
}

static TABLE: LazyLock<DimensionTable<RateType>> = LazyLock::new(|| {
    DimensionTable::new(DimensionKind::RateType, RateType::Unrecognized)
        .with_value(
            RateType::Enrollment,
            CanonicalDef::new(1, "Enrollment").with_code("ENR"),
            &["E", "ENR", "ENROLL", "ENROLLMENT"],
        )
        .with_value(
            RateType::Switch,
            CanonicalDef::new(2, "Switch").with_code("SWI"),
            &["S", "SWI", "SWITCH"],
        )
        .with_value(
            RateType::Renewal,
            CanonicalDef::new(3, "Renewal").with_code("REN"),
            &["R", "REN", "RENEW", "RENEWAL"],
        )
        .with_value(
            RateType::Intro,
            CanonicalDef::new(4, "Intro").with_code("INT"),
            &["I", "INT", "INTRO", "INTRODUCTION", "INTRODUCTORY"],
        )
        .with_value(
            RateType::Winback,
            CanonicalDef::new(5, "Winback").with_code("WIN"),
            &["W", "WIN", "WINBACK"],
        )
});

impl EnergyDimension for RateType {
    const KIND: DimensionKind = DimensionKind::RateType;
    const UNRECOGNIZED: Self = RateType::Unrecognized;

    fn table() -> &'static DimensionTable<Self> {
        &TABLE
    }
}

impl_dimension_traits!(RateType);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_back_with_separator() {
        assert_eq!(RateType::parse("win back"), RateType::Winback);
        assert_eq!(RateType::parse("Win-Back"), RateType::Unrecognized);
    }
}
