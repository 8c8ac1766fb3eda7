//! Energy industry dimension types.
//!
//! Vendor feeds describe accounts, plans and usage with free-form strings.
//! This crate parses those strings into six closed dimension types
//! ([`AccountClass`], [`AccountStatus`], [`Commodity`], [`PlanType`],
//! [`RateType`], [`UnitOfMeasure`]), each exposing standardized fields
//! (id, name, code, display name).
//!
//! Parsing never fails: input that does not match any known spelling after
//! [normalization](normalize) becomes the kind's `Unrecognized` value (id 0).
//!
//! ```
//! use energy_model::{AccountClass, EnergyDimension, UnitOfMeasure};
//!
//! let class = AccountClass::parse("resi.");
//! assert_eq!(class, AccountClass::Residential);
//! assert_eq!(class.code(), "R");
//! assert!(AccountClass::SmallCommercial == "Small Commercial");
//!
//! assert_eq!(UnitOfMeasure::parse("kilowatthours").abbreviation(), "kWh");
//! assert_eq!(AccountClass::parse("12345"), AccountClass::Unrecognized);
//! ```

pub mod account_class;
pub mod account_status;
pub mod commodity;
pub mod dimension;
pub mod error;
pub mod kind;
pub mod normalize;
pub mod plan_type;
pub mod rate_type;
pub mod registry;
pub mod table;
pub mod unit_of_measure;

pub use account_class::AccountClass;
pub use account_status::AccountStatus;
pub use commodity::Commodity;
pub use dimension::EnergyDimension;
pub use error::{DimensionError, Result};
pub use kind::DimensionKind;
pub use plan_type::PlanType;
pub use rate_type::RateType;
pub use registry::{
    DimensionRegistry, DimensionSummary, Resolution, StaticDimensionRegistry, describe_kind,
    list_all, list_all_account_classes, list_all_account_statuses, list_all_commodities,
    list_all_plan_types, list_all_rate_types, list_all_units_of_measure, resolve,
};
pub use table::{CanonicalDef, CanonicalValue, DimensionTable};
pub use unit_of_measure::UnitOfMeasure;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AccountClass>();
        assert_send_sync::<UnitOfMeasure>();
        assert_send_sync::<DimensionTable<Commodity>>();
    }

    #[test]
    fn strict_parse_error_names_the_kind() {
        let error = "tiered".parse::<PlanType>().unwrap_err();
        assert_eq!(
            error,
            DimensionError::Unrecognized {
                kind: DimensionKind::PlanType,
                input: "tiered".to_string(),
            }
        );
        assert_eq!(error.to_string(), "unrecognized plan-type value: \"tiered\"");
    }
}
