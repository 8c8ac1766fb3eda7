//! Tests for the dimension registry and kind-erased helpers.

use energy_model::{
    AccountClass, AccountStatus, Commodity, DimensionKind, DimensionRegistry, EnergyDimension,
    PlanType, RateType, StaticDimensionRegistry, UnitOfMeasure, describe_kind, list_all,
    list_all_account_classes, list_all_account_statuses, list_all_commodities,
    list_all_plan_types, list_all_rate_types, list_all_units_of_measure, resolve,
};

fn assert_ascending_ids<D: EnergyDimension>(values: &[D]) {
    let ids: Vec<u32> = values.iter().map(EnergyDimension::id).collect();
    let expected: Vec<u32> = (1..=values.len() as u32).collect();
    assert_eq!(ids, expected);
}

#[test]
fn account_classes_in_declaration_order() {
    assert_eq!(
        list_all_account_classes(),
        vec![
            AccountClass::Residential,
            AccountClass::SmallCommercial,
            AccountClass::LargeCommercial,
        ]
    );
}

#[test]
fn every_list_is_complete_and_ordered() {
    assert_eq!(list_all_account_statuses().len(), 11);
    assert_eq!(list_all_commodities(), vec![Commodity::Electric, Commodity::Gas, Commodity::Solar]);
    assert_eq!(
        list_all_plan_types(),
        vec![PlanType::Fixed, PlanType::Variable, PlanType::Indexed]
    );
    assert_eq!(
        list_all_rate_types(),
        vec![
            RateType::Enrollment,
            RateType::Switch,
            RateType::Renewal,
            RateType::Intro,
            RateType::Winback,
        ]
    );
    assert_eq!(
        list_all_units_of_measure(),
        vec![
            UnitOfMeasure::KilowattHour,
            UnitOfMeasure::MegawattHour,
            UnitOfMeasure::GigawattHour,
            UnitOfMeasure::Therm,
            UnitOfMeasure::Decatherm,
            UnitOfMeasure::Ccf,
            UnitOfMeasure::Mcf,
        ]
    );

    assert_ascending_ids(&list_all_account_classes());
    assert_ascending_ids(&list_all_account_statuses());
    assert_ascending_ids(&list_all_commodities());
    assert_ascending_ids(&list_all_plan_types());
    assert_ascending_ids(&list_all_rate_types());
    assert_ascending_ids(&list_all_units_of_measure());
}

#[test]
fn lists_never_contain_unrecognized() {
    assert!(!list_all::<AccountClass>().contains(&AccountClass::Unrecognized));
    assert!(!list_all::<AccountStatus>().contains(&AccountStatus::Unrecognized));
    assert!(!list_all::<Commodity>().contains(&Commodity::Unrecognized));
    assert!(!list_all::<PlanType>().contains(&PlanType::Unrecognized));
    assert!(!list_all::<RateType>().contains(&RateType::Unrecognized));
    assert!(!list_all::<UnitOfMeasure>().contains(&UnitOfMeasure::Unrecognized));
}

#[test]
fn lists_are_fresh_copies() {
    let mut first = list_all_plan_types();
    first.clear();
    first.push(PlanType::Unrecognized);
    assert_eq!(list_all_plan_types().len(), 3);
}

#[test]
fn static_registry_serves_the_same_lists() {
    let registry = StaticDimensionRegistry;
    assert_eq!(registry.account_classes(), list_all_account_classes());
    assert_eq!(registry.account_statuses(), list_all_account_statuses());
    assert_eq!(registry.commodities(), list_all_commodities());
    assert_eq!(registry.plan_types(), list_all_plan_types());
    assert_eq!(registry.rate_types(), list_all_rate_types());
    assert_eq!(registry.units_of_measure(), list_all_units_of_measure());
}

#[test]
fn registry_can_be_injected() {
    fn count_classes(registry: &dyn DimensionRegistry) -> usize {
        registry.account_classes().len()
    }
    assert_eq!(count_classes(&StaticDimensionRegistry), 3);
}

#[test]
fn describe_kind_matches_typed_lists() {
    let names: Vec<&str> = describe_kind(DimensionKind::AccountStatus)
        .iter()
        .map(|row| row.name)
        .collect();
    let expected: Vec<&str> = list_all_account_statuses()
        .iter()
        .map(EnergyDimension::name)
        .collect();
    assert_eq!(names, expected);

    let units = describe_kind(DimensionKind::UnitOfMeasure);
    assert_eq!(units[0].abbreviation, Some("kWh"));
    assert_eq!(units[0].code, "KWH");
}

#[test]
fn resolve_through_runtime_kind() {
    let resolution = resolve(DimensionKind::AccountClass, "Small_Comm.");
    assert_eq!(resolution.input, "Small_Comm.");
    assert_eq!(resolution.token, "SMALLCOMM");
    assert!(resolution.recognized);
    assert_eq!(resolution.value.code, "SC");
    assert_eq!(resolution.value.id, 2);
}
