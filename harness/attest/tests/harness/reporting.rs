//! Reports, exit codes, and configuration end to end.

use attest::{fail, ExecutionFault, Reporter, ReportSink, Runner, RunnerConfig, Suite, TestCase};
use pretty_assertions::assert_eq;

fn named_suite() -> Suite {
    let mut suite = Suite::new();
    for name in ["alpha_one", "alpha_two", "beta_one"] {
        suite.register(TestCase::new(name, || Ok(()))).unwrap();
    }
    suite
}

#[test]
fn full_pipeline_renders_failures_and_verdict() {
    let mut suite = Suite::new();
    suite.register(TestCase::new("greets", || Ok(()))).unwrap();
    suite
        .register(TestCase::new("mismatches", || {
            fail("wrong greeting")?;
            Ok(())
        }))
        .unwrap();

    let summary = Runner::new().run(&suite);
    let reporter = Reporter::new(ReportSink::buffer());
    reporter.report(&summary);

    let text = reporter.sink().captured();
    assert!(text.contains("  FAIL: mismatches - assertion failed: wrong greeting"));
    assert!(text.contains("  1 passed, 1 failed, 0 errored (2 total)"));
    assert_eq!(text.lines().last(), Some("FAILED"));
    assert_eq!(summary.exit_code(), 1);
}

#[test]
fn clean_run_reports_ok_and_exits_zero() {
    let summary = Runner::new().run(&named_suite());
    let reporter = Reporter::new(ReportSink::buffer());
    reporter.report(&summary);
    assert_eq!(reporter.sink().captured().lines().last(), Some("OK"));
    assert_eq!(summary.exit_code(), 0);
}

#[test]
fn empty_run_reports_no_tests_found_and_exits_two() {
    let summary = Runner::new().run(&Suite::new());
    let reporter = Reporter::new(ReportSink::buffer());
    reporter.report(&summary);
    assert_eq!(
        reporter.sink().captured().lines().last(),
        Some("NO TESTS FOUND")
    );
    assert_eq!(summary.exit_code(), 2);
}

#[test]
fn error_faults_render_their_cause() {
    let mut suite = Suite::new();
    suite
        .register(TestCase::new("reads_the_gauge", || {
            Err(ExecutionFault::missing_capability("Gauge.read").into())
        }))
        .unwrap();

    let summary = Runner::new().run(&suite);
    let reporter = Reporter::new(ReportSink::buffer());
    reporter.report(&summary);
    assert!(reporter
        .sink()
        .captured()
        .contains("  ERROR: reads_the_gauge - missing capability: Gauge.read"));
}

#[test]
fn verbose_mode_lists_passing_cases() {
    let config = RunnerConfig::from_args(["-v"]).unwrap();
    let reporter = Reporter::with_verbose(ReportSink::buffer(), config.verbose);
    let summary = Runner::with_config(config).run(&named_suite());
    reporter.report(&summary);

    let text = reporter.sink().captured();
    assert!(text.contains("  PASS: alpha_one ("));
    assert!(text.contains("  PASS: beta_one ("));
}

#[test]
fn combined_flags_drive_filter_and_verbosity() {
    let config = RunnerConfig::from_args(["--filter=alpha", "-v", "--no-parallel"]).unwrap();
    assert_eq!(config.filter.as_deref(), Some("alpha"));

    let reporter = Reporter::with_verbose(ReportSink::buffer(), config.verbose);
    let summary = Runner::with_config(config).run(&named_suite());
    reporter.report(&summary);

    let text = reporter.sink().captured();
    assert!(text.contains("  PASS: alpha_one ("));
    assert!(text.contains("  PASS: alpha_two ("));
    assert!(!text.contains("beta_one"));
    assert!(text.contains("  2 passed, 0 failed, 0 errored (2 total)"));
    assert_eq!(text.lines().last(), Some("OK"));
}
