//! Core traits for the validation system
//!
//! This module defines the trait every validator in the crate implements.

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// `validate` returns a structured [`ValidationError`] describing what failed;
/// `is_valid` collapses that into the plain yes/no answer.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust
/// use mpatterns::foundation::{Validate, ValidationError};
///
/// struct NotBlank;
///
/// impl Validate for NotBlank {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.trim().is_empty() {
///             Err(ValidationError::new("not_blank", "must not be blank"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NotBlank.is_valid("x"));
/// assert!(!NotBlank.is_valid("  "));
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` if the input passes validation.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::new("always_fails", "Always fails"))
        }
    }

    #[test]
    fn test_is_valid_follows_validate() {
        assert!(AlwaysValid.is_valid("test"));
        assert!(!AlwaysFails.is_valid("test"));
    }

    #[test]
    fn test_reference_delegates() {
        let validator = &AlwaysFails;
        assert!(validator.validate("test").is_err());
    }

    #[test]
    fn test_trait_object() {
        let validators: [&dyn Validate<Input = str>; 2] = [&AlwaysValid, &AlwaysFails];
        let results: Vec<bool> = validators.iter().map(|v| v.is_valid("x")).collect();
        assert_eq!(results, vec![true, false]);
    }
}
