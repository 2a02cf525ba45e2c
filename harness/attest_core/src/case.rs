//! Test cases: a name plus zero-argument callables.
//!
//! A [`TestCase`] is a concrete record, not a base class: it holds a name, a
//! required body, and optional setup/teardown hooks composed alongside it.
//! [`TestCase::run`] executes the segments behind a panic-capture boundary
//! and maps the result to an [`Outcome`]; it never unwinds into the caller.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::failure::{CheckError, CheckResult, ExecutionFault};
use crate::outcome::Outcome;

/// Zero-argument callable used for the body and hooks.
///
/// `Send + Sync` so a runner may distribute distinct cases across worker
/// threads.
pub type CheckFn = Box<dyn Fn() -> CheckResult + Send + Sync>;

/// A single named, independently executable check.
pub struct TestCase {
    name: String,
    setup: Option<CheckFn>,
    body: CheckFn,
    teardown: Option<CheckFn>,
}

impl TestCase {
    /// Create a case from a name and a body.
    ///
    /// Names are validated where registration has an error channel; the
    /// constructor itself is infallible.
    pub fn new(
        name: impl Into<String>,
        body: impl Fn() -> CheckResult + Send + Sync + 'static,
    ) -> Self {
        TestCase {
            name: name.into(),
            setup: None,
            body: Box::new(body),
            teardown: None,
        }
    }

    /// Attach a setup hook that runs before the body.
    ///
    /// A setup that does not pass skips both body and teardown.
    #[must_use]
    pub fn with_setup(mut self, setup: impl Fn() -> CheckResult + Send + Sync + 'static) -> Self {
        self.setup = Some(Box::new(setup));
        self
    }

    /// Attach a teardown hook that runs after the body.
    ///
    /// Teardown runs whenever the body ran; its outcome is surfaced only
    /// when the body itself passed.
    #[must_use]
    pub fn with_teardown(
        mut self,
        teardown: impl Fn() -> CheckResult + Send + Sync + 'static,
    ) -> Self {
        self.teardown = Some(Box::new(teardown));
        self
    }

    /// Name of the case.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Execute the case and produce a fresh outcome.
    ///
    /// Segments run in setup, body, teardown order, each behind the capture
    /// boundary. Nothing is memoized and nothing is written back to the
    /// case, so repeated executions are independent. Faults are never
    /// retried and never swallowed: any unwind inside a segment surfaces as
    /// [`Outcome::Error`], and `run` itself never unwinds into the caller.
    pub fn run(&self) -> Outcome {
        tracing::debug!("running case '{}'", self.name);

        if let Some(setup) = &self.setup {
            let setup_outcome = Self::run_segment(setup);
            if !setup_outcome.is_pass() {
                tracing::debug!("setup for '{}' did not pass, skipping body", self.name);
                return setup_outcome;
            }
        }

        let body_outcome = Self::run_segment(&self.body);

        if let Some(teardown) = &self.teardown {
            let teardown_outcome = Self::run_segment(teardown);
            // The body's verdict wins; teardown trouble only surfaces after
            // a passing body.
            if body_outcome.is_pass() && !teardown_outcome.is_pass() {
                return teardown_outcome;
            }
        }

        body_outcome
    }

    /// Run one segment behind the capture boundary.
    ///
    /// `AssertUnwindSafe` is sound here: segments are `Fn` closures and the
    /// case shares no mutable state with its caller during a run.
    fn run_segment(segment: &(dyn Fn() -> CheckResult + Send + Sync)) -> Outcome {
        match catch_unwind(AssertUnwindSafe(segment)) {
            Ok(Ok(())) => Outcome::Pass,
            Ok(Err(CheckError::Assertion(failure))) => Outcome::Fail(failure),
            Ok(Err(CheckError::Fault(fault))) => Outcome::Error(fault),
            Err(payload) => Outcome::Error(ExecutionFault::from_panic_payload(payload.as_ref())),
        }
    }
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("has_setup", &self.setup.is_some())
            .field("has_teardown", &self.teardown.is_some())
            .finish_non_exhaustive()
    }
}
