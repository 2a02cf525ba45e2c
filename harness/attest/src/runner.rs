//! Suite execution.
//!
//! The runner walks the selected cases of a [`Suite`] and runs each body
//! behind its capture boundary, folding the per-case records into a
//! [`RunSummary`]. Cases run on a rayon pool by default; record order always
//! matches registration order either way.

use std::time::Instant;

use rayon::prelude::*;

use attest_core::TestCase;

use crate::config::RunnerConfig;
use crate::suite::Suite;
use crate::summary::{CaseRecord, RunSummary};

/// Executes suites under a [`RunnerConfig`].
#[derive(Debug)]
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Runner with the default configuration.
    pub fn new() -> Self {
        Runner {
            config: RunnerConfig::default(),
        }
    }

    /// Runner with an explicit configuration.
    pub fn with_config(config: RunnerConfig) -> Self {
        Runner { config }
    }

    /// Run every selected case in `suite` and collect the results.
    pub fn run(&self, suite: &Suite) -> RunSummary {
        let selected: Vec<&TestCase> = suite.selected(self.config.filter.as_deref()).collect();
        tracing::debug!("running {} of {} cases", selected.len(), suite.len());

        if self.config.parallel {
            Self::run_parallel(&selected)
        } else {
            Self::run_sequential(&selected)
        }
    }

    fn run_sequential(cases: &[&TestCase]) -> RunSummary {
        let start = Instant::now();
        let mut summary = RunSummary::new();
        for case in cases {
            summary.add_record(Self::run_case(case));
        }
        summary.duration = start.elapsed();
        summary
    }

    fn run_parallel(cases: &[&TestCase]) -> RunSummary {
        let start = Instant::now();
        let records = rayon::ThreadPoolBuilder::new()
            .build_scoped(rayon::ThreadBuilder::run, |pool| {
                pool.install(|| {
                    cases
                        .par_iter()
                        .copied()
                        .map(Self::run_case)
                        .collect::<Vec<_>>()
                })
            })
            .unwrap_or_else(|e| {
                tracing::warn!("failed to create thread pool ({e}), running sequentially");
                cases.iter().copied().map(Self::run_case).collect()
            });

        let mut summary = RunSummary::new();
        for record in records {
            summary.add_record(record);
        }
        // Wall clock for the run, not the sum of per-case times.
        summary.duration = start.elapsed();
        summary
    }

    fn run_case(case: &TestCase) -> CaseRecord {
        let start = Instant::now();
        let outcome = case.run();
        tracing::debug!("case '{}' finished: {}", case.name(), outcome.label());
        CaseRecord {
            name: case.name().to_string(),
            outcome,
            duration: start.elapsed(),
        }
    }
}

impl Default for Runner {
    fn default() -> Self {
        Runner::new()
    }
}

/// Run `suite` with the default configuration.
pub fn run_suite(suite: &Suite) -> RunSummary {
    Runner::new().run(suite)
}
