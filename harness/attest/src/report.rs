//! Plain-text run reports.

use attest_core::Outcome;

use crate::sink::ReportSink;
use crate::summary::RunSummary;

/// Renders a [`RunSummary`] as text lines into a [`ReportSink`].
///
/// Failing and erroring cases are always listed; passing cases only in
/// verbose mode. The report ends with a single status word so the overall
/// verdict is readable at a glance.
#[derive(Debug)]
pub struct Reporter {
    sink: ReportSink,
    verbose: bool,
}

impl Reporter {
    /// Reporter that lists only failures.
    pub fn new(sink: ReportSink) -> Self {
        Reporter {
            sink,
            verbose: false,
        }
    }

    /// Reporter with explicit verbosity.
    pub fn with_verbose(sink: ReportSink, verbose: bool) -> Self {
        Reporter { sink, verbose }
    }

    /// The sink this reporter writes to.
    pub fn sink(&self) -> &ReportSink {
        &self.sink
    }

    /// Write the full report for a run.
    pub fn report(&self, summary: &RunSummary) {
        for record in &summary.records {
            match &record.outcome {
                Outcome::Pass => {
                    if self.verbose {
                        self.sink
                            .line(&format!("  PASS: {} ({:.2?})", record.name, record.duration));
                    }
                }
                Outcome::Fail(failure) => {
                    self.sink.line(&format!("  FAIL: {} - {failure}", record.name));
                }
                Outcome::Error(fault) => {
                    self.sink.line(&format!("  ERROR: {} - {fault}", record.name));
                }
            }
        }

        self.sink.line("");
        self.sink.line("Test Summary:");
        self.sink.line(&format!(
            "  {} passed, {} failed, {} errored ({} total)",
            summary.passed,
            summary.failed,
            summary.errored,
            summary.total()
        ));
        self.sink.line(&format!("  Completed in {:.2?}", summary.duration));
        self.sink.line("");

        if summary.has_failures() {
            self.sink.line("FAILED");
        } else if summary.total() == 0 {
            self.sink.line("NO TESTS FOUND");
        } else {
            self.sink.line("OK");
        }
    }
}
