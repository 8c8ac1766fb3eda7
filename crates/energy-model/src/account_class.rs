//! Classification of an energy account.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::dimension::{EnergyDimension, impl_dimension_traits};
use crate::kind::DimensionKind;
use crate::table::{CanonicalDef, DimensionTable};

/// Account classification (residential or commercial size band).
///
/// | Value | Id | Code |
/// |---|---|---|
/// | Residential | 1 | R |
/// | Small Commercial | 2 | SC |
/// | Large Commercial | 3 | LC |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum AccountClass {
    /// Input that matched no known spelling (id 0).
    #[default]
    Unrecognized,
    /// Household account.
    Residential,
    /// Commercial account in the small size band.
    SmallCommercial,
    /// Commercial account in the large size band.
    LargeCommercial,
}

static TABLE: LazyLock<DimensionTable<AccountClass>> = LazyLock::new(|| {
    DimensionTable::new(DimensionKind::AccountClass, AccountClass::Unrecognized)
        .with_value(
            AccountClass::Residential,
            CanonicalDef::new(1, "Residential"),
            &["R", "RES", "RESI", "RESIDENCE", "RESIDENTIAL"],
        )
        .with_value(
            AccountClass::SmallCommercial,
            CanonicalDef::new(2, "Small Commercial").with_code("SC"),
            &["SC", "SCOM", "SCOMM", "SMALLCOM", "SMALLCOMM", "SMALLCOMMERCIAL"],
        )
        .with_value(
            AccountClass::LargeCommercial,
            CanonicalDef::new(3, "Large Commercial").with_code("LC"),
            &["LC", "LCOM", "LCOMM", "LARGECOM", "LARGECOMM", "LARGECOMMERCIAL"],
        )
});

impl EnergyDimension for AccountClass {
    const KIND: DimensionKind = DimensionKind::AccountClass;
    const UNRECOGNIZED: Self = AccountClass::Unrecognized;

    fn table() -> &'static DimensionTable<Self> {
        &TABLE
    }
}

impl_dimension_traits!(AccountClass);
