//! Assertion primitives for test bodies.
//!
//! Each primitive returns `Result<(), AssertionFailure>` so bodies chain
//! them with `?`; the case boundary maps a propagated failure to
//! `Outcome::Fail`. Comparisons render both sides with `Debug` so reports
//! show the expected and actual values.

use std::fmt::Debug;

use crate::failure::AssertionFailure;

/// Assert that a condition holds.
pub fn assert_true(message: &str, condition: bool) -> Result<(), AssertionFailure> {
    if condition {
        Ok(())
    } else {
        Err(AssertionFailure::new(message))
    }
}

/// Assert that two values are equal.
#[expect(
    clippy::needless_pass_by_value,
    reason = "call sites pass literals and computed values; references would add borrow noise"
)]
pub fn assert_eq<T>(message: &str, expected: T, actual: T) -> Result<(), AssertionFailure>
where
    T: PartialEq + Debug,
{
    if expected == actual {
        Ok(())
    } else {
        Err(AssertionFailure::comparison(
            message,
            format!("{expected:?}"),
            format!("{actual:?}"),
        ))
    }
}

/// Assert that two values differ.
#[expect(
    clippy::needless_pass_by_value,
    reason = "call sites pass literals and computed values; references would add borrow noise"
)]
pub fn assert_ne<T>(message: &str, left: T, right: T) -> Result<(), AssertionFailure>
where
    T: PartialEq + Debug,
{
    if left == right {
        Err(AssertionFailure::comparison(
            message,
            format!("not {left:?}"),
            format!("{right:?}"),
        ))
    } else {
        Ok(())
    }
}

/// Fail unconditionally.
pub fn fail(message: &str) -> Result<(), AssertionFailure> {
    Err(AssertionFailure::new(message))
}
