//! Integration tests for querying and rendering saga failures.

use std::io;

use saga_core::{Saga, SagaError, SagaFailure};

fn failing_saga() -> Saga<'static, io::Error> {
    let mut saga = Saga::new();
    saga.run(|| Ok(()));
    saga.add_compensation(|| Err(io::Error::other("cancel outbound flight")));
    saga.run(|| Ok(()));
    saga.add_compensation(|| Err(io::Error::other("cancel inbound flight")));
    saga.run(|| Err(io::Error::other("hotel fully booked")));
    saga.compensate();
    saga
}

#[test]
fn queries_have_no_side_effects() {
    let saga = failing_saga();

    for _ in 0..3 {
        assert!(saga.has_error());
        assert_eq!(saga.errors().len(), 3);
        assert_eq!(saga.error().map(SagaError::len), Some(3));
    }
    assert_eq!(saga.audit_log().records().len(), 5);
}

#[test]
fn rendered_error_shows_original_failure_then_compensation_failures() {
    let saga = failing_saga();

    let rendered = saga.error().expect("saga has failed").to_string();

    assert_eq!(
        rendered,
        "3 errors occurred:\n\
         \t* hotel fully booked\n\
         \t* compensating transaction [1] failed: cancel inbound flight\n\
         \t* compensating transaction [0] failed: cancel outbound flight"
    );
}

#[test]
fn into_result_hands_over_every_failure() {
    let saga = failing_saga();

    let error = saga.into_result().expect_err("saga has failed");
    let failures = error.into_failures();

    assert!(matches!(failures[0], SagaFailure::Step(ref e) if e.to_string() == "hotel fully booked"));
    assert!(matches!(failures[1], SagaFailure::Compensation { index: 1, .. }));
    assert!(matches!(failures[2], SagaFailure::Compensation { index: 0, .. }));
}

#[test]
fn aggregated_error_works_with_anyhow() {
    fn book() -> anyhow::Result<()> {
        failing_saga().into_result()?;
        Ok(())
    }

    let error = book().expect_err("booking fails");

    assert!(error.to_string().starts_with("3 errors occurred:"));
}

#[test]
fn successful_saga_reports_no_error() -> anyhow::Result<()> {
    let mut saga: Saga<'_, io::Error> = Saga::new();
    saga.run(|| Ok(()));
    saga.compensate();

    assert!(saga.error().is_none());
    saga.into_result()?;
    Ok(())
}
