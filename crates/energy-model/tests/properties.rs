//! Property tests for normalization and parsing.

use energy_model::normalize::{scrub, token};
use energy_model::{
    AccountClass, AccountStatus, Commodity, EnergyDimension, PlanType, RateType, UnitOfMeasure,
};
use proptest::prelude::*;

/// Vendor-looking strings: printable ASCII plus a few aliases with noise.
fn vendor_input() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~]{0,24}",
        (
            prop::sample::select(vec!["resi", "SC", "elec", "kWh", "Drop Pending", "idx", "win"]),
            "[ .,_#0-9-]{0,4}",
        )
            .prop_map(|(alias, noise)| format!("{noise}{alias}{noise}")),
    ]
}

fn case_insensitive<D: EnergyDimension>(input: &str) -> bool {
    let parsed = D::parse(input);
    parsed == D::parse(&input.to_ascii_uppercase())
        && parsed == D::parse(&input.to_ascii_lowercase())
}

fn symmetric<D>(input: &str) -> bool
where
    D: EnergyDimension + PartialEq<str>,
    str: PartialEq<D>,
{
    D::all()
        .into_iter()
        .chain([D::UNRECOGNIZED])
        .all(|value| {
            let with_string = value == *input;
            with_string == (*input == value) && with_string == (value == D::parse(input))
        })
}

proptest! {
    #[test]
    fn scrub_is_idempotent(input in any::<String>()) {
        let once = scrub(&input);
        prop_assert_eq!(scrub(&once), once);
    }

    #[test]
    fn token_only_holds_letters_and_hyphens(input in any::<String>()) {
        let key = token(&input);
        prop_assert!(key.chars().all(|ch| ch.is_ascii_uppercase() || ch == '-'));
    }

    #[test]
    fn parsing_ignores_case(input in vendor_input()) {
        prop_assert!(case_insensitive::<AccountClass>(&input));
        prop_assert!(case_insensitive::<AccountStatus>(&input));
        prop_assert!(case_insensitive::<Commodity>(&input));
        prop_assert!(case_insensitive::<PlanType>(&input));
        prop_assert!(case_insensitive::<RateType>(&input));
        prop_assert!(case_insensitive::<UnitOfMeasure>(&input));
    }

    #[test]
    fn string_comparison_is_symmetric(input in vendor_input()) {
        prop_assert!(symmetric::<AccountClass>(&input));
        prop_assert!(symmetric::<AccountStatus>(&input));
        prop_assert!(symmetric::<Commodity>(&input));
        prop_assert!(symmetric::<PlanType>(&input));
        prop_assert!(symmetric::<RateType>(&input));
        prop_assert!(symmetric::<UnitOfMeasure>(&input));
    }

    #[test]
    fn inputs_without_letters_are_unrecognized(input in "[0-9 .,;:!?()/_#-]{0,16}") {
        prop_assert_eq!(AccountClass::parse(&input), AccountClass::Unrecognized);
        prop_assert_eq!(AccountStatus::parse(&input), AccountStatus::Unrecognized);
        prop_assert_eq!(Commodity::parse(&input), Commodity::Unrecognized);
        prop_assert_eq!(PlanType::parse(&input), PlanType::Unrecognized);
        prop_assert_eq!(RateType::parse(&input), RateType::Unrecognized);
        prop_assert_eq!(UnitOfMeasure::parse(&input), UnitOfMeasure::Unrecognized);
    }

    #[test]
    fn try_parse_agrees_with_parse(input in vendor_input()) {
        let parsed = UnitOfMeasure::parse(&input);
        prop_assert_eq!(
            UnitOfMeasure::try_parse(&input),
            parsed.is_recognized().then_some(parsed)
        );
    }
}
