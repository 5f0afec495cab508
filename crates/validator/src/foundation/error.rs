//! Error types for pattern validation
//!
//! Two kinds of errors live here:
//!
//! - [`ValidationError`]: a structured diagnostic returned by
//!   [`Validate::validate`](crate::foundation::Validate::validate). It names the
//!   pattern and, for multi-value validation, every argument that failed.
//! - [`PatternError`]: the payload-free failure kind returned by guarded calls.
//!   Callers match on the variant to tell numeric, alpha, alphanumeric and
//!   generic failures apart.
//!
//! All `ValidationError` string fields use `Cow<'static, str>` so static codes
//! and messages do not allocate.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error with optional field path and nested errors.
///
/// # Examples
///
/// ```rust
/// use mpatterns::foundation::ValidationError;
///
/// let error = ValidationError::new("pattern_mismatch", "Value does not match")
///     .with_field("option")
///     .with_param("pattern", "[0-9]*$");
///
/// assert_eq!(error.param("pattern"), Some("[0-9]*$"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "pattern_mismatch", "arguments_mismatch"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Which argument failed: a keyword name or a positional index like `#0`.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters (typically 1-3).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Per-argument errors collected by multi-value validation.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Creates a "pattern_mismatch" error for a single value.
    pub fn pattern_mismatch(pattern: &str) -> Self {
        Self::new(
            "pattern_mismatch",
            format!("Value must match pattern '{pattern}'"),
        )
        .with_param("pattern", pattern.to_owned())
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns the field paths of all nested errors, in order.
    #[must_use]
    pub fn failed_fields(&self) -> Vec<&str> {
        self.nested
            .iter()
            .filter_map(|e| e.field.as_deref())
            .collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.nested.is_empty() {
            write!(f, "\n  Nested errors:")?;
            for (i, error) in self.nested.iter().enumerate() {
                write!(f, "\n    {}. {}", i + 1, error)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// GUARD FAILURE KINDS
// ============================================================================

/// The failure kind returned by a guarded call whose arguments were rejected.
///
/// Carries no data: the offending value, the pattern and the argument position
/// are not reported. Each preset has its own kind; `Default` is meant for guards
/// built around ad-hoc patterns.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PatternError {
    /// Generic failure for ad-hoc patterns.
    #[default]
    #[error("arguments failed pattern validation")]
    Default,
    /// An argument was not made of digits only.
    #[error("arguments failed numeric validation")]
    Numeric,
    /// An argument was not made of letters and underscores only.
    #[error("arguments failed alpha validation")]
    Alpha,
    /// An argument was not an identifier.
    #[error("arguments failed alphanumeric validation")]
    AlphaNumeric,
}

impl PatternError {
    /// Returns the stable snake_case code of this kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Numeric => "numeric",
            Self::Alpha => "alpha",
            Self::AlphaNumeric => "alpha_numeric",
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert!(error.field.is_none());
    }

    #[test]
    fn test_pattern_mismatch_carries_pattern() {
        let error = ValidationError::pattern_mismatch("[0-9]*$");
        assert_eq!(error.code, "pattern_mismatch");
        assert_eq!(error.param("pattern"), Some("[0-9]*$"));
    }

    #[test]
    fn test_failed_fields() {
        let error = ValidationError::new("arguments_mismatch", "failed")
            .with_nested_error(ValidationError::new("a", "a").with_field("#1"))
            .with_nested_error(ValidationError::new("b", "b").with_field("option"));

        assert_eq!(error.failed_fields(), vec!["#1", "option"]);
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("pattern_mismatch", "Value must match");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_display_with_field() {
        let error = ValidationError::new("pattern_mismatch", "bad").with_field("option");
        assert_eq!(error.to_string(), "[option] pattern_mismatch: bad");
    }

    #[rstest]
    #[case(PatternError::Default, "default")]
    #[case(PatternError::Numeric, "numeric")]
    #[case(PatternError::Alpha, "alpha")]
    #[case(PatternError::AlphaNumeric, "alpha_numeric")]
    fn test_pattern_error_code(#[case] kind: PatternError, #[case] code: &str) {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(kind.code(), code);
        assert_eq!(json, format!("\"{code}\""));
    }

    #[test]
    fn test_pattern_error_default_kind() {
        assert_eq!(PatternError::default(), PatternError::Default);
    }
}
