//! Pricing structure of a supply plan.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::dimension::{EnergyDimension, impl_dimension_traits};
use crate::kind::DimensionKind;
use crate::table::{CanonicalDef, DimensionTable};

/// Plan pricing: fixed, variable, or indexed to a market price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum PlanType {
    /// Input that matched no known spelling (id 0).
    #[default]
    Unrecognized,
    /// Fixed price for the term.
    Fixed,
    /// Price may change month to month.
    Variable,
    /// Price follows a market index.
    Indexed,
}

static TABLE: LazyLock<DimensionTable<PlanType>> = LazyLock::new(|| {
    DimensionTable::new(DimensionKind::PlanType, PlanType::Unrecognized)
        .with_value(
            PlanType::Fixed,
            CanonicalDef::new(1, "Fixed").with_code("FIX"),
            &["F", "FIX", "FIXED"],
        )
        .with_value(
            PlanType::Variable,
            CanonicalDef::new(2, "Variable").with_code("VAR"),
            &["V", "VAR", "VARIABLE"],
        )
        .with_value(
            PlanType::Indexed,
            CanonicalDef::new(3, "Indexed").with_code("IDX"),
            &["I", "IDX", "IND", "INDEX", "INDEXED"],
        )
});

impl EnergyDimension for PlanType {
    const KIND: DimensionKind = DimensionKind::PlanType;
    const UNRECOGNIZED: Self = PlanType::Unrecognized;

    fn table() -> &'static DimensionTable<Self> {
        &TABLE
    }
}

impl_dimension_traits!(PlanType);
