//! Exit status of the `parse` command.

use energy_model::Resolution;

/// Counts reported by `parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOutcome {
    pub total: usize,
    pub unrecognized: usize,
}

impl ParseOutcome {
    pub fn from_resolutions(resolutions: &[Resolution]) -> Self {
        Self {
            total: resolutions.len(),
            unrecognized: resolutions
                .iter()
                .filter(|resolution| !resolution.recognized)
                .count(),
        }
    }

    /// Process exit code: 1 when `fail_on_unrecognized` is set and any
    /// value did not resolve, otherwise 0.
    pub fn exit_code(&self, fail_on_unrecognized: bool) -> i32 {
        i32::from(fail_on_unrecognized && self.unrecognized > 0)
    }

    /// Message printed to stderr alongside a failing exit code.
    pub fn failure_message(&self) -> String {
        format!(
            "{} of {} values unrecognized",
            self.unrecognized, self.total
        )
    }
}
