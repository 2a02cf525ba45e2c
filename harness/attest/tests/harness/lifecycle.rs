//! Setup and teardown hooks observed through full runs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use attest::{assert_true, fail, Outcome, Runner, Suite, TestCase};

fn run_single(case: TestCase) -> attest::RunSummary {
    let mut suite = Suite::new();
    suite.register(case).unwrap();
    Runner::new().run(&suite)
}

#[test]
fn hooks_run_in_declared_order() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let setup_events = Arc::clone(&events);
    let body_events = Arc::clone(&events);
    let teardown_events = Arc::clone(&events);

    let case = TestCase::new("orders_its_segments", move || {
        body_events.lock().unwrap().push("body");
        Ok(())
    })
    .with_setup(move || {
        setup_events.lock().unwrap().push("setup");
        Ok(())
    })
    .with_teardown(move || {
        teardown_events.lock().unwrap().push("teardown");
        Ok(())
    });

    let summary = run_single(case);
    assert_eq!(summary.passed, 1);
    assert_eq!(*events.lock().unwrap(), vec!["setup", "body", "teardown"]);
}

#[test]
fn failing_setup_skips_body_and_teardown() {
    let touched = Arc::new(AtomicUsize::new(0));
    let body_touch = Arc::clone(&touched);
    let teardown_touch = Arc::clone(&touched);

    let case = TestCase::new("never_reaches_the_body", move || {
        body_touch.fetch_add(1, Ordering::SeqCst);
        Ok(())
    })
    .with_setup(|| {
        fail("fixture could not be prepared")?;
        Ok(())
    })
    .with_teardown(move || {
        teardown_touch.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    let summary = run_single(case);
    assert_eq!(summary.failed, 1);
    assert_eq!(touched.load(Ordering::SeqCst), 0);
    match &summary.records[0].outcome {
        Outcome::Fail(failure) => assert_eq!(failure.message, "fixture could not be prepared"),
        other => panic!("expected Fail, got {other:?}"),
    }
}

#[test]
fn teardown_runs_after_a_failing_body() {
    let cleaned = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&cleaned);

    let case = TestCase::new("fails_but_cleans_up", || {
        assert_true("flag holds", false)?;
        Ok(())
    })
    .with_teardown(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    let summary = run_single(case);
    assert_eq!(summary.failed, 1);
    assert_eq!(cleaned.load(Ordering::SeqCst), 1);
}

#[test]
fn teardown_trouble_surfaces_after_a_passing_body() {
    let case = TestCase::new("passes_then_fumbles_cleanup", || Ok(())).with_teardown(|| {
        fail("leaked a fixture")?;
        Ok(())
    });

    let summary = run_single(case);
    assert_eq!(summary.failed, 1);
    match &summary.records[0].outcome {
        Outcome::Fail(failure) => assert_eq!(failure.message, "leaked a fixture"),
        other => panic!("expected Fail, got {other:?}"),
    }
}

#[test]
fn body_verdict_wins_over_teardown_trouble() {
    let case = TestCase::new("fails_and_fumbles_cleanup", || {
        assert_true("flag holds", false)?;
        Ok(())
    })
    .with_teardown(|| {
        fail("leaked a fixture")?;
        Ok(())
    });

    let summary = run_single(case);
    assert_eq!(summary.failed, 1);
    match &summary.records[0].outcome {
        Outcome::Fail(failure) => assert_eq!(failure.message, "flag holds"),
        other => panic!("expected Fail, got {other:?}"),
    }
}

#[test]
fn panicking_teardown_is_captured_as_an_error() {
    let case =
        TestCase::new("cleanup_detonates", || Ok(())).with_teardown(|| panic!("cleanup went sideways"));

    let summary = run_single(case);
    assert_eq!(summary.errored, 1);
    let message = summary.records[0].outcome.message().unwrap();
    assert_eq!(message, "panic: cleanup went sideways");
}
