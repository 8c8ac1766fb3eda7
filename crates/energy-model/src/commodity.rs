//! Energy commodity supplied to an account.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::dimension::{EnergyDimension, impl_dimension_traits};
use crate::kind::DimensionKind;
use crate::table::{CanonicalDef, DimensionTable};

/// Commodity an account is supplied with.
///
/// | Value | Id | Code |
/// |---|---|---|
/// | Electric | 1 | E |
/// | Gas | 2 | G |
/// | Solar | 3 | S |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Commodity {
    /// Input that matched no known spelling (id 0).
    #[default]
    Unrecognized,
    /// Grid electricity.
    Electric,
    /// Natural gas.
    Gas,
    /// Solar generation.
    Solar,
}

static TABLE: LazyLock<DimensionTable<Commodity>> = LazyLock::new(|| {
    DimensionTable::new(DimensionKind::Commodity, Commodity::Unrecognized)
        .with_value(
            Commodity::Electric,
            CanonicalDef::new(1, "Electric"),
            &["E", "EL", "ELE", "ELEC", "ELECTRIC", "ELECTRICITY"],
        )
        .with_value(
            Commodity::Gas,
            CanonicalDef::new(2, "Gas"),
            &["G", "GA", "GAS"],
        )
        .with_value(
            Commodity::Solar,
            CanonicalDef::new(3, "Solar"),
            &["S", "SO", "SOL", "SOLAR"],
        )
});

impl EnergyDimension for Commodity {
    const KIND: DimensionKind = DimensionKind::Commodity;
    const UNRECOGNIZED: Self = Commodity::Unrecognized;

    fn table() -> &'static DimensionTable<Self> {
        &TABLE
    }
}

impl_dimension_traits!(Commodity);
