//! Execution outcomes for a single test case.

use crate::failure::{AssertionFailure, ExecutionFault};

/// Outcome of executing a test case.
///
/// Exactly one of three things is true after an execution: every assertion
/// held, an assertion did not hold, or execution itself malfunctioned before
/// a verdict could be reached.
#[derive(Clone, Debug)]
pub enum Outcome {
    /// Every assertion held.
    Pass,
    /// An assertion did not hold.
    Fail(AssertionFailure),
    /// Execution malfunctioned (panic, missing capability, ...).
    Error(ExecutionFault),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    /// Short status label for reports and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Pass => "PASS",
            Outcome::Fail(_) => "FAIL",
            Outcome::Error(_) => "ERROR",
        }
    }

    /// Describing message for non-pass outcomes.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Pass => None,
            Outcome::Fail(failure) => Some(failure.to_string()),
            Outcome::Error(fault) => Some(fault.to_string()),
        }
    }
}
