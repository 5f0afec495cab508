//! Ready-made validators with fixed patterns
//!
//! | Validator | Pattern | Failure kind |
//! |---|---|---|
//! | [`NumericValidator`] | `[0-9]*$` | [`PatternError::Numeric`] |
//! | [`AlphaValidator`] | `[a-zA-Z_]*$` | [`PatternError::Alpha`] |
//! | [`AlphaNumericValidator`] | `^[a-zA-Z_][a-zA-Z0-9_\$]*$` | [`PatternError::AlphaNumeric`] |
//!
//! The numeric and alpha patterns accept the empty string; the identifier
//! pattern does not.

use std::sync::LazyLock;

use crate::foundation::{PatternError, Validate, ValidationError};
use crate::validators::{Arguments, PatternValidator, Validator};

/// Identifier: a letter or underscore, then letters, digits, `_` or `$`.
pub const ALPHANUMERIC_PATTERN: &str = r"^[a-zA-Z_][a-zA-Z0-9_\$]*$";
/// Digits only.
pub const NUMERIC_PATTERN: &str = r"[0-9]*$";
/// Letters and underscores only.
pub const ALPHA_PATTERN: &str = r"[a-zA-Z_]*$";

static ALPHANUMERIC: LazyLock<Validator> =
    LazyLock::new(|| Validator::new(ALPHANUMERIC_PATTERN).expect("alphanumeric pattern compiles"));

static NUMERIC: LazyLock<Validator> =
    LazyLock::new(|| Validator::new(NUMERIC_PATTERN).expect("numeric pattern compiles"));

static ALPHA: LazyLock<Validator> =
    LazyLock::new(|| Validator::new(ALPHA_PATTERN).expect("alpha pattern compiles"));

// ============================================================================
// PRESET TRAIT
// ============================================================================

/// A multi-value validator that is built without arguments.
///
/// Each preset is tied to one fixed pattern and to the failure kind its guard
/// reports by default.
pub trait PresetPattern: Validate<Input = Arguments> + Default {
    /// The fixed pattern.
    const PATTERN: &'static str;

    /// The failure kind reported when a guard built on this preset rejects a call.
    const FAILURE: PatternError;

    /// Returns the underlying multi-value validator.
    fn as_validator(&self) -> &PatternValidator;

    /// Unwraps into the underlying multi-value validator.
    fn into_validator(self) -> PatternValidator;

    /// Builds a fresh preset and validates `args` with it.
    ///
    /// ```rust
    /// use mpatterns::args;
    /// use mpatterns::validators::{NumericValidator, PresetPattern};
    ///
    /// assert!(NumericValidator::check(&args!(1, 2, "30")));
    /// assert!(!NumericValidator::check(&args!("ab")));
    /// ```
    fn check(args: &Arguments) -> bool {
        Self::default().is_valid(args)
    }
}

macro_rules! preset_validator {
    (
        $(#[$meta:meta])*
        $name:ident($compiled:ident, $pattern:ident, $failure:ident);
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name(PatternValidator);

        impl Default for $name {
            fn default() -> Self {
                Self(PatternValidator::from($compiled.clone()))
            }
        }

        impl Validate for $name {
            type Input = Arguments;

            fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
                self.0.validate(input)
            }

            fn is_valid(&self, input: &Self::Input) -> bool {
                self.0.is_valid(input)
            }
        }

        impl PresetPattern for $name {
            const PATTERN: &'static str = $pattern;
            const FAILURE: PatternError = PatternError::$failure;

            fn as_validator(&self) -> &PatternValidator {
                &self.0
            }

            fn into_validator(self) -> PatternValidator {
                self.0
            }
        }

        impl From<$name> for PatternValidator {
            fn from(preset: $name) -> Self {
                preset.0
            }
        }

        #[must_use]
        pub fn $factory() -> $name {
            $name::default()
        }
    };
}

preset_validator! {
    /// Validates that every argument is made of ASCII digits (or is empty).
    NumericValidator(NUMERIC, NUMERIC_PATTERN, Numeric);
    fn numeric();
}

preset_validator! {
    /// Validates that every argument is made of ASCII letters and `_` (or is empty).
    AlphaValidator(ALPHA, ALPHA_PATTERN, Alpha);
    fn alpha();
}

preset_validator! {
    /// Validates that every argument is an identifier.
    AlphaNumericValidator(ALPHANUMERIC, ALPHANUMERIC_PATTERN, AlphaNumeric);
    fn alphanumeric();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use rstest::rstest;

    fn single(preset: &impl PresetPattern, text: &str) -> bool {
        preset.as_validator().validator().is_valid(text)
    }

    #[rstest]
    #[case("123", true)]
    #[case("", true)]
    #[case("0007", true)]
    #[case("12a", false)]
    #[case("-1", false)]
    #[case("1.5", false)]
    #[case(" 1", false)]
    fn test_numeric(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(single(&numeric(), input), expected);
    }

    #[rstest]
    #[case("abc_", true)]
    #[case("", true)]
    #[case("__", true)]
    #[case("ABCxyz", true)]
    #[case("abc1", false)]
    #[case("a-b", false)]
    #[case("é", false)]
    fn test_alpha(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(single(&alpha(), input), expected);
    }

    #[rstest]
    #[case("_a9$", true)]
    #[case("name", true)]
    #[case("A", true)]
    #[case("$x", false)]
    #[case("9abc", false)]
    #[case("", false)]
    #[case("a b", false)]
    fn test_alphanumeric(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(single(&alphanumeric(), input), expected);
    }

    #[test]
    fn test_preset_metadata() {
        assert_eq!(NumericValidator::PATTERN, NUMERIC_PATTERN);
        assert_eq!(NumericValidator::FAILURE, PatternError::Numeric);
        assert_eq!(AlphaValidator::FAILURE, PatternError::Alpha);
        assert_eq!(AlphaNumericValidator::FAILURE, PatternError::AlphaNumeric);
        assert_eq!(
            alphanumeric().as_validator().pattern(),
            ALPHANUMERIC_PATTERN
        );
    }

    #[test]
    fn test_check_builds_fresh_preset() {
        let letters = args!("le", "reg", "__okei"; option = "zeke");
        let digits = args!("le"; option = "982092878");

        assert!(AlphaValidator::check(&letters));
        assert!(!AlphaValidator::check(&digits));
        assert!(AlphaNumericValidator::check(&args!()));
    }

    #[test]
    fn test_into_validator() {
        let pv: PatternValidator = numeric().into();
        assert_eq!(pv.pattern(), NUMERIC_PATTERN);
        assert_eq!(alpha().into_validator().pattern(), ALPHA_PATTERN);
    }
}
