//! Core case model for the attest test harness.
//!
//! A test case is a plain record: a name plus zero-argument callables. There
//! is no discovery machinery and no base class to inherit from; embedding
//! code constructs cases explicitly and executes them on demand.
//!
//! # Architecture
//!
//! ```text
//! body: Fn() -> CheckResult
//!     │
//!     ▼
//! TestCase::run() ── capture boundary ──► Outcome
//!                                          ├─ Pass
//!                                          ├─ Fail(AssertionFailure)
//!                                          └─ Error(ExecutionFault)
//! ```
//!
//! A body signals an assertion failure or an execution fault through its
//! explicit [`CheckResult`] return value; anything that unwinds instead
//! (arithmetic faults, indexing faults, explicit panics) is captured at the
//! boundary and mapped to [`Outcome::Error`]. `run` never unwinds into the
//! caller and never caches: every execution produces a fresh outcome.

pub mod assert;
pub mod case;
pub mod failure;
pub mod outcome;

// Re-exports for convenience
pub use assert::{assert_eq, assert_ne, assert_true, fail};
pub use case::{CheckFn, TestCase};
pub use failure::{AssertionFailure, CheckError, CheckResult, ExecutionFault, FaultKind};
pub use outcome::Outcome;
