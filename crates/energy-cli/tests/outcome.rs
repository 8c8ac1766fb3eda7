//! Exit status of the `parse` command.

use energy_cli::outcome::ParseOutcome;
use energy_model::{DimensionKind, Resolution, resolve};

fn account_classes(inputs: &[&str]) -> Vec<Resolution> {
    inputs
        .iter()
        .map(|input| resolve(DimensionKind::AccountClass, input))
        .collect()
}

#[test]
fn all_recognized_exits_zero() {
    let outcome = ParseOutcome::from_resolutions(&account_classes(&["SC", "residential"]));
    assert_eq!((outcome.total, outcome.unrecognized), (2, 0));
    assert_eq!(outcome.exit_code(true), 0);
    assert_eq!(outcome.exit_code(false), 0);
}

#[test]
fn unrecognized_with_flag_exits_one() {
    let outcome = ParseOutcome::from_resolutions(&account_classes(&["SC", "bogus"]));
    assert_eq!((outcome.total, outcome.unrecognized), (2, 1));
    assert_eq!(outcome.exit_code(true), 1);
    assert_eq!(outcome.failure_message(), "1 of 2 values unrecognized");
}

#[test]
fn unrecognized_without_flag_exits_zero() {
    let outcome = ParseOutcome::from_resolutions(&account_classes(&["SC", "bogus"]));
    assert_eq!(outcome.exit_code(false), 0);
}

#[test]
fn no_values_exit_zero() {
    let outcome = ParseOutcome::from_resolutions(&[]);
    assert_eq!((outcome.total, outcome.unrecognized), (0, 0));
    assert_eq!(outcome.exit_code(true), 0);
}
