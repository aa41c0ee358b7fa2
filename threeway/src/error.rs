//! Errors raised while constructing ordered values.

use std::error::Error;
use std::fmt::{self, Display};

/// A value was constructed with a field outside its valid range.
///
/// Raised when a domain value is built, directly or by converting a foreign representation
/// ahead of a heterogeneous comparison. Comparisons themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvalidValue {
    field: &'static str,
    reason: String,
}

impl InvalidValue {
    /// Creates an error for `field`, explained by `reason`.
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        InvalidValue { field, reason: reason.into() }
    }

    /// The name of the offending field.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Why the value was rejected.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.reason)
    }
}

impl Error for InvalidValue {}
