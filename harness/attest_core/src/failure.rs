//! Failure and fault types for test execution.
//!
//! Two species of trouble can surface inside a test body:
//!
//! - [`AssertionFailure`]: an assertion deliberately raised by test logic
//!   because a checked condition did not hold. Maps to `Outcome::Fail`.
//! - [`ExecutionFault`]: the body itself malfunctioned, by panicking or by
//!   relying on a collaborator capability that is not implemented. Maps to
//!   `Outcome::Error`.
//!
//! # Structured Fault Categories
//!
//! `FaultKind` provides typed fault categories. Factory functions (e.g.
//! `missing_capability()`) remain the public API: they populate both `kind`
//! and `message`, and the `Display` impl on the kind produces the same
//! message strings.

use std::any::Any;
use std::error::Error;
use std::fmt;

/// Result type a test body returns.
pub type CheckResult = Result<(), CheckError>;

/// An assertion that did not hold.
///
/// Carries the caller-supplied message, plus both rendered values when the
/// assertion compared something.
#[derive(Clone, Debug)]
pub struct AssertionFailure {
    /// Caller-supplied assertion message.
    pub message: String,
    /// Rendered expected value, when the assertion compared values.
    pub expected: Option<String>,
    /// Rendered actual value, when the assertion compared values.
    pub actual: Option<String>,
}

impl AssertionFailure {
    /// Failure with just a message (boolean and unconditional failures).
    pub fn new(message: impl Into<String>) -> Self {
        AssertionFailure {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Failure from a value comparison, carrying both rendered values.
    pub fn comparison(
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        AssertionFailure {
            message: message.into(),
            expected: Some(expected.into()),
            actual: Some(actual.into()),
        }
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.expected, &self.actual) {
            (Some(expected), Some(actual)) => write!(
                f,
                "assertion failed: {} (expected {expected}, got {actual})",
                self.message
            ),
            _ => write!(f, "assertion failed: {}", self.message),
        }
    }
}

impl Error for AssertionFailure {}

/// Typed category of an execution fault.
///
/// Factory functions on [`ExecutionFault`] populate both `kind` and
/// `message`; the `Display` impl here produces the message strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FaultKind {
    /// A segment unwound with a panic; carries the payload text.
    Panic { message: String },
    /// A collaborator capability the body relies on is not implemented.
    MissingCapability { capability: String },
    /// Catch-all for faults not categorized into structured kinds.
    Other { message: String },
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panic { message } => write!(f, "panic: {message}"),
            Self::MissingCapability { capability } => {
                write!(f, "missing capability: {capability}")
            }
            Self::Other { message } => write!(f, "{message}"),
        }
    }
}

/// An unintended malfunction during test execution, unrelated to assertion
/// logic.
#[derive(Clone, Debug)]
pub struct ExecutionFault {
    /// Structured fault category.
    pub kind: FaultKind,
    /// Human-readable fault description.
    ///
    /// For factory-created faults, this equals `kind.to_string()`.
    pub message: String,
}

impl ExecutionFault {
    /// Create a fault with just a message.
    ///
    /// Uses `Other` kind. Prefer the specific factories when a structured
    /// kind is available.
    pub fn new(message: impl Into<String>) -> Self {
        let msg = message.into();
        ExecutionFault {
            kind: FaultKind::Other {
                message: msg.clone(),
            },
            message: msg,
        }
    }

    /// Create a fault from a structured kind.
    ///
    /// The message is computed from the kind's `Display` impl.
    fn from_kind(kind: FaultKind) -> Self {
        let message = kind.to_string();
        ExecutionFault { kind, message }
    }

    /// Fault for a collaborator capability that is not implemented.
    #[cold]
    pub fn missing_capability(capability: impl Into<String>) -> Self {
        Self::from_kind(FaultKind::MissingCapability {
            capability: capability.into(),
        })
    }

    /// Fault for a panic with known payload text.
    #[cold]
    pub fn panic(message: impl Into<String>) -> Self {
        Self::from_kind(FaultKind::Panic {
            message: message.into(),
        })
    }

    /// Fault from a captured panic payload.
    ///
    /// Preserves `String` and `&str` payload text; any other payload type
    /// gets a generic description.
    #[cold]
    pub fn from_panic_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else {
            "panicked with a non-string payload".to_string()
        };
        Self::from_kind(FaultKind::Panic { message })
    }
}

impl fmt::Display for ExecutionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ExecutionFault {}

/// Error a test body propagates with `?`.
///
/// Unifies the two failure species so a body can chain assertion primitives
/// and fallible collaborator calls in one `Result` pipeline. The case
/// boundary maps `Assertion` to `Outcome::Fail` and `Fault` to
/// `Outcome::Error`.
#[derive(Clone, Debug)]
pub enum CheckError {
    /// An assertion did not hold.
    Assertion(AssertionFailure),
    /// Execution malfunctioned.
    Fault(ExecutionFault),
}

impl From<AssertionFailure> for CheckError {
    fn from(failure: AssertionFailure) -> Self {
        CheckError::Assertion(failure)
    }
}

impl From<ExecutionFault> for CheckError {
    fn from(fault: ExecutionFault) -> Self {
        CheckError::Fault(fault)
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assertion(failure) => failure.fmt(f),
            Self::Fault(fault) => fault.fmt(f),
        }
    }
}

impl Error for CheckError {}
