//! # Check Errors
//!
//! The two-kind error taxonomy for caller misuse. A `Type` error means an
//! argument's runtime kind did not match what the check documents; a `Range`
//! error means a value fell outside its valid domain (unknown status code,
//! non-positive time limit, inverted min/max bounds).
//!
//! These errors are raised *instead of* registering an outcome: a check
//! either returns one [`Outcome`](crate::checks::Outcome) or one
//! `CheckError`, never both. Assertion failures against the system under
//! test are never errors; they are failing outcomes.

use thiserror::Error;

/// A precondition violation in a check invocation.
///
/// Every variant names the public function whose precondition failed and a
/// human-readable statement of what was expected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// An argument's runtime kind mismatched the documented expectation.
    #[error("{function}: expected {expected}")]
    Type {
        function: &'static str,
        expected: &'static str,
    },

    /// A value fell outside its valid domain.
    #[error("{function}: {expected}")]
    Range {
        function: &'static str,
        expected: String,
    },
}

impl CheckError {
    pub fn type_mismatch(function: &'static str, expected: &'static str) -> Self {
        Self::Type { function, expected }
    }

    pub fn out_of_range(function: &'static str, expected: impl Into<String>) -> Self {
        Self::Range {
            function,
            expected: expected.into(),
        }
    }

    /// Name of the function whose precondition failed.
    pub fn function(&self) -> &'static str {
        match self {
            Self::Type { function, .. } | Self::Range { function, .. } => function,
        }
    }

    pub fn is_type(&self) -> bool {
        matches!(self, Self::Type { .. })
    }

    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }
}
