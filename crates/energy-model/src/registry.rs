//! Listing and kind-erased access to the canonical values.
//!
//! The typed `list_all_*` functions return the recognized values of one
//! dimension in declaration order. Hosts that only know a [`DimensionKind`]
//! at runtime (command lines, lookup endpoints) use [`describe_kind`] and
//! [`resolve`], which return serializable rows instead of typed values.

use serde::Serialize;

use crate::account_class::AccountClass;
use crate::account_status::AccountStatus;
use crate::commodity::Commodity;
use crate::dimension::EnergyDimension;
use crate::kind::DimensionKind;
use crate::normalize;
use crate::plan_type::PlanType;
use crate::rate_type::RateType;
use crate::unit_of_measure::UnitOfMeasure;

/// Recognized values of `D`, in declaration order, as a fresh vector.
pub fn list_all<D: EnergyDimension>() -> Vec<D> {
    D::all()
}

pub fn list_all_account_classes() -> Vec<AccountClass> {
    list_all()
}

pub fn list_all_account_statuses() -> Vec<AccountStatus> {
    list_all()
}

pub fn list_all_commodities() -> Vec<Commodity> {
    list_all()
}

pub fn list_all_plan_types() -> Vec<PlanType> {
    list_all()
}

pub fn list_all_rate_types() -> Vec<RateType> {
    list_all()
}

pub fn list_all_units_of_measure() -> Vec<UnitOfMeasure> {
    list_all()
}

/// Lookup service over the dimension lists.
///
/// Applications that inject their reference data depend on this trait;
/// [`StaticDimensionRegistry`] serves the compiled-in tables.
pub trait DimensionRegistry {
    fn account_classes(&self) -> Vec<AccountClass>;
    fn account_statuses(&self) -> Vec<AccountStatus>;
    fn commodities(&self) -> Vec<Commodity>;
    fn plan_types(&self) -> Vec<PlanType>;
    fn rate_types(&self) -> Vec<RateType>;
    fn units_of_measure(&self) -> Vec<UnitOfMeasure>;
}

/// Registry backed by the static dimension tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDimensionRegistry;

impl DimensionRegistry for StaticDimensionRegistry {
    fn account_classes(&self) -> Vec<AccountClass> {
        list_all_account_classes()
    }

    fn account_statuses(&self) -> Vec<AccountStatus> {
        list_all_account_statuses()
    }

    fn commodities(&self) -> Vec<Commodity> {
        list_all_commodities()
    }

    fn plan_types(&self) -> Vec<PlanType> {
        list_all_plan_types()
    }

    fn rate_types(&self) -> Vec<RateType> {
        list_all_rate_types()
    }

    fn units_of_measure(&self) -> Vec<UnitOfMeasure> {
        list_all_units_of_measure()
    }
}

/// Canonical fields of one value, independent of its Rust type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionSummary {
    pub kind: DimensionKind,
    pub id: u32,
    pub name: &'static str,
    pub code: &'static str,
    pub display_name: &'static str,
    /// Only set for units of measure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<&'static str>,
}

impl DimensionSummary {
    pub fn of<D: EnergyDimension>(value: D) -> Self {
        let canonical = value.canonical();
        Self {
            kind: D::KIND,
            id: canonical.id(),
            name: canonical.name(),
            code: canonical.code(),
            display_name: canonical.display_name(),
            abbreviation: canonical.abbreviation(),
        }
    }
}

/// Outcome of parsing one input against a kind chosen at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub input: String,
    /// Normalized lookup key derived from the input.
    pub token: String,
    pub recognized: bool,
    pub value: DimensionSummary,
}

/// Rows for every recognized value of `kind`.
pub fn describe_kind(kind: DimensionKind) -> Vec<DimensionSummary> {
    match kind {
        DimensionKind::AccountClass => describe::<AccountClass>(),
        DimensionKind::AccountStatus => describe::<AccountStatus>(),
        DimensionKind::Commodity => describe::<Commodity>(),
        DimensionKind::PlanType => describe::<PlanType>(),
        DimensionKind::RateType => describe::<RateType>(),
        DimensionKind::UnitOfMeasure => describe::<UnitOfMeasure>(),
    }
}

/// Parses `input` as a value of `kind`.
pub fn resolve(kind: DimensionKind, input: &str) -> Resolution {
    match kind {
        DimensionKind::AccountClass => resolve_as::<AccountClass>(input),
        DimensionKind::AccountStatus => resolve_as::<AccountStatus>(input),
        DimensionKind::Commodity => resolve_as::<Commodity>(input),
        DimensionKind::PlanType => resolve_as::<PlanType>(input),
        DimensionKind::RateType => resolve_as::<RateType>(input),
        DimensionKind::UnitOfMeasure => resolve_as::<UnitOfMeasure>(input),
    }
}

fn describe<D: EnergyDimension>() -> Vec<DimensionSummary> {
    D::all().into_iter().map(DimensionSummary::of).collect()
}

fn resolve_as<D: EnergyDimension>(input: &str) -> Resolution {
    let value = D::parse(input);
    Resolution {
        input: input.to_string(),
        token: normalize::token(input),
        recognized: value.is_recognized(),
        value: DimensionSummary::of(value),
    }
}
