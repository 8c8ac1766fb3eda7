//! Units in which energy usage is metered or billed.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::dimension::{EnergyDimension, impl_dimension_traits};
use crate::kind::DimensionKind;
use crate::table::{CanonicalDef, DimensionTable};

/// Unit of measure for electricity and gas volumes.
///
/// Besides the common fields each unit has an [`abbreviation`], the usual
/// unit symbol. Codes are the upper-cased abbreviation unless assigned
/// explicitly (Therm uses `THR`).
///
/// | Value | Id | Code | Abbreviation |
/// |---|---|---|---|
/// | Kilowatt-hour | 1 | KWH | kWh |
/// | Megawatt-hour | 2 | MWH | MWh |
/// | Gigawatt-hour | 3 | GWH | GWh |
/// | Therm | 4 | THR | Therm |
/// | Decatherm | 5 | DTH | Dth |
/// | Centum cubic feet | 6 | CCF | Ccf |
/// | 1,000 cubic feet | 7 | MCF | Mcf |
///
/// Digits and punctuation are stripped before lookup, so the canonical name
/// "1,000 cubic feet" is matched through the token `CUBICFEET`. A bare
/// "cubic feet" (a single cubic foot) therefore also parses as [`Mcf`],
/// 1,000 times the stated unit. Feeds that bill in single cubic feet must be
/// converted before parsing.
///
/// [`Mcf`]: UnitOfMeasure::Mcf
/// [`abbreviation`]: UnitOfMeasure::abbreviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum UnitOfMeasure {
    /// Input that matched no known spelling (id 0).
    #[default]
    Unrecognized,
    /// kWh.
    KilowattHour,
    /// MWh, 1,000 kWh.
    MegawattHour,
    /// GWh, 1,000 MWh.
    GigawattHour,
    /// 100,000 BTU.
    Therm,
    /// 10 therms.
    Decatherm,
    /// 100 cubic feet.
    Ccf,
    /// 1,000 cubic feet.
    Mcf,
}

static TABLE: LazyLock<DimensionTable<UnitOfMeasure>> = LazyLock::new(|| {
    DimensionTable::with_abbreviations(DimensionKind::UnitOfMeasure, UnitOfMeasure::Unrecognized)
        .with_value(
            UnitOfMeasure::KilowattHour,
            CanonicalDef::new(1, "Kilowatt-hour").with_abbreviation("kWh"),
            &[
                "KW",
                "KWH",
                "KILOWATT",
                "KILOWATTS",
                "KILOWATTHOUR",
                "KILOWATTHOURS",
                "KILOWATT-HOUR",
                "KILOWATT-HOURS",
            ],
        )
        .with_value(
            UnitOfMeasure::MegawattHour,
            CanonicalDef::new(2, "Megawatt-hour").with_abbreviation("MWh"),
            &[
                "MW",
                "MWH",
                "MEGAWATT",
                "MEGAWATTS",
                "MEGAWATTHOUR",
                "MEGAWATTHOURS",
                "MEGAWATT-HOUR",
                "MEGAWATT-HOURS",
            ],
        )
        .with_value(
            UnitOfMeasure::GigawattHour,
            CanonicalDef::new(3, "Gigawatt-hour").with_abbreviation("GWh"),
            &[
                "GW",
                "GWH",
                "GIGAWATT",
                "GIGAWATTS",
                "GIGAWATTHOUR",
                "GIGAWATTHOURS",
                "GIGAWATT-HOUR",
                "GIGAWATT-HOURS",
            ],
        )
        .with_value(
            UnitOfMeasure::Therm,
            CanonicalDef::new(4, "Therm")
                .with_abbreviation("Therm")
                .with_code("THR"),
            &["T", "TH", "THER", "THERM", "THERMS"],
        )
        .with_value(
            UnitOfMeasure::Decatherm,
            CanonicalDef::new(5, "Decatherm").with_abbreviation("Dth"),
            &["DEC", "DTH", "DECA", "DECATHERM", "DECATHERMS"],
        )
        .with_value(
            UnitOfMeasure::Ccf,
            CanonicalDef::new(6, "Centum cubic feet").with_abbreviation("Ccf"),
            &[
                "CCF",
                "CENTUM",
                "CENTUMS",
                "CENTUMCUBIC",
                "CENTUMCUBICS",
                "CENTUMCUBICFEET",
            ],
        )
        // "1,000 cubic feet" scrubs to CUBICFEET.
        .with_value(
            UnitOfMeasure::Mcf,
            CanonicalDef::new(7, "1,000 cubic feet").with_abbreviation("Mcf"),
            &["MCF", "CUBICFEET", "THOUSANDCUBICFEET"],
        )
});

impl UnitOfMeasure {
    /// Unit symbol, e.g. `kWh`. Unrecognized abbreviates to `U`.
    pub fn abbreviation(&self) -> &'static str {
        self.canonical().abbreviation().unwrap_or_default()
    }
}

impl EnergyDimension for UnitOfMeasure {
    const KIND: DimensionKind = DimensionKind::UnitOfMeasure;
    const UNRECOGNIZED: Self = UnitOfMeasure::Unrecognized;

    fn table() -> &'static DimensionTable<Self> {
        &TABLE
    }
}

impl_dimension_traits!(UnitOfMeasure);
