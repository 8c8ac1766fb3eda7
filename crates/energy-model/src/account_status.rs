//! Lifecycle status of an energy account.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::dimension::{EnergyDimension, impl_dimension_traits};
use crate::kind::DimensionKind;
use crate::table::{CanonicalDef, DimensionTable};

/// Status of an account with its supplier.
///
/// Every status is reachable through its three-letter code and its name
/// with spaces removed; "Pending" additionally accepts `PEND`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum AccountStatus {
    /// Input that matched no known spelling (id 0).
    #[default]
    Unrecognized,
    /// Enrollment canceled before service started.
    Canceled,
    /// Service ended.
    Closed,
    /// Drop from the supplier requested, not yet effective.
    DropPending,
    /// Duplicate of another enrollment.
    Duplicate,
    /// Not currently receiving supply.
    OffFlow,
    /// Receiving supply.
    OnFlow,
    /// Awaiting processing.
    Pending,
    /// Waiting to be submitted.
    Queued,
    /// Rejected by the utility.
    Rejected,
    /// Accepted with a future start date.
    Scheduled,
    /// Sent to the utility.
    Submitted,
}

static TABLE: LazyLock<DimensionTable<AccountStatus>> = LazyLock::new(|| {
    DimensionTable::new(DimensionKind::AccountStatus, AccountStatus::Unrecognized)
        .with_value(
            AccountStatus::Canceled,
            CanonicalDef::new(1, "Canceled").with_code("CAN"),
            &["CAN", "CANCELED"],
        )
        .with_value(
            AccountStatus::Closed,
            CanonicalDef::new(2, "Closed").with_code("CLO"),
            &["CLO", "CLOSED"],
        )
        .with_value(
            AccountStatus::DropPending,
            CanonicalDef::new(3, "Drop Pending").with_code("DPE"),
            &["DPE", "DROPPENDING"],
        )
        .with_value(
            AccountStatus::Duplicate,
            CanonicalDef::new(4, "Duplicate").with_code("DUP"),
            &["DUP", "DUPLICATE"],
        )
        .with_value(
            AccountStatus::OffFlow,
            CanonicalDef::new(5, "Off Flow").with_code("OFF"),
            &["OFF", "OFFFLOW"],
        )
        .with_value(
            AccountStatus::OnFlow,
            CanonicalDef::new(6, "On Flow").with_code("ONF"),
            &["ONF", "ONFLOW"],
        )
        .with_value(
            AccountStatus::Pending,
            CanonicalDef::new(7, "Pending").with_code("PEN"),
            &["PEN", "PEND", "PENDING"],
        )
        .with_value(
            AccountStatus::Queued,
            CanonicalDef::new(8, "Queued").with_code("QUE"),
            &["QUE", "QUEUED"],
        )
        .with_value(
            AccountStatus::Rejected,
            CanonicalDef::new(9, "Rejected").with_code("REJ"),
            &["REJ", "REJECTED"],
        )
        .with_value(
            AccountStatus::Scheduled,
            CanonicalDef::new(10, "Scheduled").with_code("SCH"),
            &["SCH", "SCHEDULED"],
        )
        .with_value(
            AccountStatus::Submitted,
            CanonicalDef::new(11, "Submitted").with_code("SUB"),
            &["SUB", "SUBMITTED"],
        )
});

impl EnergyDimension for AccountStatus {
    const KIND: DimensionKind = DimensionKind::AccountStatus;
    const UNRECOGNIZED: Self = AccountStatus::Unrecognized;

    fn table() -> &'static DimensionTable<Self> {
        &TABLE
    }
}

impl_dimension_traits!(AccountStatus);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_word_statuses() {
        assert_eq!(AccountStatus::parse("drop pending"), AccountStatus::DropPending);
        assert_eq!(AccountStatus::parse("On-Flow"), AccountStatus::Unrecognized);
        assert_eq!(AccountStatus::parse("on flow"), AccountStatus::OnFlow);
        assert_eq!(AccountStatus::parse("OFF"), AccountStatus::OffFlow);
    }

    #[test]
    fn codes_are_three_letters() {
        for status in AccountStatus::all() {
            assert_eq!(status.code().len(), 3, "{status}");
            assert_eq!(AccountStatus::parse(status.code()), status);
        }
    }
}
