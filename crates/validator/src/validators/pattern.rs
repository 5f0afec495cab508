//! Regex pattern validators
//!
//! [`Validator`] checks one text against a regular expression. The match is
//! anchored at the start of the text only: `[0-9]*` accepts `"12a"` while
//! `[0-9]*$` does not. [`PatternValidator`] applies the same check to every
//! positional and keyword argument of a call.

use crate::foundation::{ToPatternText, Validate, ValidationError};
use crate::validators::Arguments;

// ============================================================================
// SINGLE VALUE
// ============================================================================

/// Validates a single text against a regular expression, anchored at the start.
///
/// # Examples
///
/// ```rust
/// use mpatterns::foundation::Validate;
/// use mpatterns::validators::Validator;
///
/// let v = Validator::new(r"[0-5]*$").unwrap();
/// assert!(v.is_valid("01"));
/// assert!(!v.is_valid("016"));
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    regex: regex::Regex,
}

impl Validator {
    /// Compiles `pattern`. Fails if it is not a valid regular expression.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: regex::Regex::new(pattern)?,
        })
    }

    /// Returns the source pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    fn matches_from_start(&self, text: &str) -> bool {
        // Leftmost match starts at 0 iff some match starts at 0.
        self.regex.find(text).is_some_and(|m| m.start() == 0)
    }
}

impl From<regex::Regex> for Validator {
    fn from(regex: regex::Regex) -> Self {
        Self { regex }
    }
}

impl Validate for Validator {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.matches_from_start(input) {
            Ok(())
        } else {
            Err(ValidationError::pattern_mismatch(self.pattern()))
        }
    }

    fn is_valid(&self, input: &Self::Input) -> bool {
        self.matches_from_start(input)
    }
}

/// Compiles a single-value validator.
pub fn matches_pattern(pattern: &str) -> Result<Validator, regex::Error> {
    Validator::new(pattern)
}

// ============================================================================
// MULTIPLE VALUES
// ============================================================================

/// Validates every positional and keyword argument against one pattern.
///
/// The result is a conjunction over all arguments; an empty argument list is
/// valid. Every argument is checked, and the returned error lists each one
/// that failed.
///
/// # Examples
///
/// ```rust
/// use mpatterns::args;
/// use mpatterns::foundation::Validate;
/// use mpatterns::validators::PatternValidator;
///
/// let pv = PatternValidator::new(r"[a-zA-Z_]*$").unwrap();
/// assert!(pv.is_valid(&args!("le", "reg", "__okei"; option = "zeke")));
/// assert!(!pv.is_valid(&args!("le", "reg", "__okei"; option = "982092878")));
/// ```
#[derive(Debug, Clone)]
pub struct PatternValidator {
    validator: Validator,
}

impl PatternValidator {
    /// Compiles `pattern`. Fails if it is not a valid regular expression.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Validator::new(pattern).map(Self::from)
    }

    /// Returns the source pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.validator.pattern()
    }

    /// Returns the single-value validator this one is built on.
    #[must_use]
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Checks a single value after converting it to text.
    pub fn is_valid_value<T: ToPatternText + ?Sized>(&self, value: &T) -> bool {
        self.validator.is_valid(&value.to_pattern_text())
    }
}

impl From<Validator> for PatternValidator {
    fn from(validator: Validator) -> Self {
        Self { validator }
    }
}

impl Validate for PatternValidator {
    type Input = Arguments;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        // Field names are only built for failing arguments.
        let mut errors = Vec::new();
        for (index, text) in input.positional().enumerate() {
            if let Err(e) = self.validator.validate(text) {
                errors.push(e.with_field(format!("#{index}")));
            }
        }
        for (name, text) in input.named() {
            if let Err(e) = self.validator.validate(text) {
                errors.push(e.with_field(name.to_owned()));
            }
        }

        if errors.is_empty() {
            return Ok(());
        }

        let failed = errors.len();
        let mut error = ValidationError::new(
            "arguments_mismatch",
            format!(
                "{failed} of {} arguments do not match pattern '{}'",
                input.len(),
                self.pattern()
            ),
        )
        .with_param("pattern", self.pattern().to_owned())
        .with_param("failed_count", failed.to_string())
        .with_param("total_count", input.len().to_string());

        for e in errors {
            error = error.with_nested_error(e);
        }

        Err(error)
    }

    fn is_valid(&self, input: &Self::Input) -> bool {
        input.positional().all(|text| self.validator.is_valid(text))
            && input.named().all(|(_, text)| self.validator.is_valid(text))
    }
}

// ============================================================================
// TESTS
// ============================================================================
