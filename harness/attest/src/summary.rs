//! Results of a test run.

use std::time::Duration;

use attest_core::{AssertionFailure, ExecutionFault, Outcome};

/// Outcome of a single case, with its name and wall-clock duration.
#[derive(Clone, Debug)]
pub struct CaseRecord {
    pub name: String,
    pub outcome: Outcome,
    pub duration: Duration,
}

impl CaseRecord {
    /// Record a passing case.
    pub fn passed(name: impl Into<String>, duration: Duration) -> Self {
        CaseRecord {
            name: name.into(),
            outcome: Outcome::Pass,
            duration,
        }
    }

    /// Record a case that failed an assertion.
    #[cold]
    pub fn failed(name: impl Into<String>, failure: AssertionFailure, duration: Duration) -> Self {
        CaseRecord {
            name: name.into(),
            outcome: Outcome::Fail(failure),
            duration,
        }
    }

    /// Record a case that hit an execution fault.
    #[cold]
    pub fn errored(name: impl Into<String>, fault: ExecutionFault, duration: Duration) -> Self {
        CaseRecord {
            name: name.into(),
            outcome: Outcome::Error(fault),
            duration,
        }
    }
}

/// Aggregated results of running a suite.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    /// Per-case records in execution order.
    pub records: Vec<CaseRecord>,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
    /// Wall-clock duration of the whole run.
    pub duration: Duration,
}

impl RunSummary {
    /// Create an empty summary.
    pub fn new() -> Self {
        RunSummary::default()
    }

    /// Add a record, updating the counters and total duration.
    pub fn add_record(&mut self, record: CaseRecord) {
        match record.outcome {
            Outcome::Pass => self.passed += 1,
            Outcome::Fail(_) => self.failed += 1,
            Outcome::Error(_) => self.errored += 1,
        }
        self.duration += record.duration;
        self.records.push(record);
    }

    /// Total number of cases run.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errored
    }

    /// Whether any case failed or errored.
    pub fn has_failures(&self) -> bool {
        self.failed > 0 || self.errored > 0
    }

    /// Process exit code: 0 for success, 1 for failures, 2 for an empty run.
    pub fn exit_code(&self) -> i32 {
        if self.total() == 0 {
            2
        } else {
            i32::from(self.has_failures())
        }
    }
}
