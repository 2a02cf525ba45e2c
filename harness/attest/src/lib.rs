//! attest - a minimal test harness with explicit registration.
//!
//! Cases are plain records (a name plus zero-argument callables) registered
//! explicitly into a [`Suite`]; there is no reflection and no discovery
//! machinery. The reference [`Runner`] executes registered cases with
//! isolation and collects one record per execution; a [`Reporter`] renders
//! the counts as text.
//!
//! # Architecture
//!
//! ```text
//! TestCase ──register──► Suite ──run──► RunSummary ──report──► text
//!    │                              ▲
//!    └── run() → Outcome ───────────┘   (one CaseRecord per executed case)
//! ```
//!
//! An embedding test binary drives the pipeline end to end:
//!
//! ```
//! use attest::{assert_true, Reporter, ReportSink, Runner, Suite, TestCase};
//!
//! let mut suite = Suite::new();
//! suite
//!     .register(TestCase::new("flag_holds", || {
//!         assert_true("flag holds", true)?;
//!         Ok(())
//!     }))
//!     .unwrap();
//!
//! let summary = Runner::new().run(&suite);
//! Reporter::new(ReportSink::buffer()).report(&summary);
//! assert_eq!(summary.exit_code(), 0);
//! ```

pub mod config;
pub mod report;
pub mod runner;
pub mod sink;
pub mod suite;
pub mod summary;

// Re-exports for convenience
pub use attest_core::{
    assert_eq, assert_ne, assert_true, fail, AssertionFailure, CheckError, CheckFn, CheckResult,
    ExecutionFault, FaultKind, Outcome, TestCase,
};
pub use config::{ConfigError, RunnerConfig};
pub use report::Reporter;
pub use runner::{run_suite, Runner};
pub use sink::ReportSink;
pub use suite::{Suite, SuiteError};
pub use summary::{CaseRecord, RunSummary};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=attest=debug` or `RUST_LOG=attest=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
