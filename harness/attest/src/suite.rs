//! Explicit case registration.
//!
//! A [`Suite`] is the crate's replacement for discovery machinery: a
//! validated mapping from case name to case, built by explicit `register`
//! calls at setup time. Registration order is preserved and is the
//! execution and report order.

use std::fmt;

use rustc_hash::FxHashMap;

use attest_core::TestCase;

/// Error from registering a case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SuiteError {
    /// Case name was empty.
    EmptyName,
    /// A case with this name is already registered.
    DuplicateName { name: String },
}

impl fmt::Display for SuiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "case name must not be empty"),
            Self::DuplicateName { name } => write!(f, "duplicate case name: {name}"),
        }
    }
}

impl std::error::Error for SuiteError {}

/// Ordered, name-unique registry of test cases.
#[derive(Debug, Default)]
pub struct Suite {
    /// Cases in registration order.
    cases: Vec<TestCase>,
    /// Name to index into `cases`.
    index: FxHashMap<String, usize>,
}

impl Suite {
    /// Create an empty suite.
    pub fn new() -> Self {
        Suite::default()
    }

    /// Build a suite from an iterator of cases.
    pub fn with_cases(cases: impl IntoIterator<Item = TestCase>) -> Result<Self, SuiteError> {
        let mut suite = Suite::new();
        for case in cases {
            suite.register(case)?;
        }
        Ok(suite)
    }

    /// Register a case under its name.
    ///
    /// Rejects empty and duplicate names; the suite is unchanged on error.
    pub fn register(&mut self, case: TestCase) -> Result<(), SuiteError> {
        if case.name().is_empty() {
            return Err(SuiteError::EmptyName);
        }
        if self.index.contains_key(case.name()) {
            return Err(SuiteError::DuplicateName {
                name: case.name().to_string(),
            });
        }
        self.index.insert(case.name().to_string(), self.cases.len());
        self.cases.push(case);
        Ok(())
    }

    /// Look up a case by name.
    pub fn get(&self, name: &str) -> Option<&TestCase> {
        self.index.get(name).map(|&i| &self.cases[i])
    }

    /// Iterate over cases in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, TestCase> {
        self.cases.iter()
    }

    /// Iterate over case names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(TestCase::name)
    }

    /// Cases whose name contains `filter`, in registration order.
    ///
    /// `None` selects every case. The reference runner applies its
    /// configured filter through this; embedding runners can layer their own
    /// selection policies on top.
    pub fn selected<'a>(
        &'a self,
        filter: Option<&'a str>,
    ) -> impl Iterator<Item = &'a TestCase> + 'a {
        self.cases.iter().filter(move |case| {
            if let Some(pattern) = filter {
                case.name().contains(pattern)
            } else {
                true
            }
        })
    }

    /// Number of registered cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the suite has no cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl<'a> IntoIterator for &'a Suite {
    type Item = &'a TestCase;
    type IntoIter = std::slice::Iter<'a, TestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}
