//! Pre-call argument guards
//!
//! A [`Guard`] bundles a [`PatternValidator`], a flag saying whether the
//! wrapped function's return value is handed back, and the [`PatternError`]
//! returned on rejection. Wrapping a function yields a new callable that
//! validates every argument first and only then calls the wrapped function.
//!
//! # Examples
//!
//! ```rust
//! use mpatterns::guard::numeric_guard;
//!
//! let add = numeric_guard(true).decorate(|(a, b): (u32, u32)| a + b);
//!
//! assert_eq!(add((1, 2)), Ok(Some(3)));
//! ```
//!
//! Rejected calls never reach the wrapped function:
//!
//! ```rust
//! use mpatterns::guard::numeric_guard;
//! use mpatterns::foundation::PatternError;
//!
//! let concat = numeric_guard(true).wrap(|(a, b): (&str, &str)| format!("{a}{b}"));
//!
//! assert_eq!(concat.call(("12", "34")), Ok(Some("1234".to_string())));
//! assert_eq!(concat.call(("ab", "cd")), Err(PatternError::Numeric));
//! ```

use std::fmt;

use crate::foundation::{PatternError, Validate};
use crate::validators::{
    AlphaNumericValidator, AlphaValidator, ArgumentList, NumericValidator, PatternValidator,
    PresetPattern,
};

// ============================================================================
// GUARD
// ============================================================================

/// Validation policy applied before every call of a wrapped function.
///
/// Immutable once built; the same policy applies to every invocation.
#[derive(Debug, Clone)]
pub struct Guard {
    validator: PatternValidator,
    propagate: bool,
    error: PatternError,
}

impl Guard {
    /// Creates a guard around any multi-value validator.
    ///
    /// ```rust
    /// use mpatterns::foundation::PatternError;
    /// use mpatterns::guard::Guard;
    /// use mpatterns::validators::PatternValidator;
    ///
    /// let hex = PatternValidator::new(r"[0-9a-f]+$").unwrap();
    /// let parse = Guard::with_validator(hex, true, PatternError::Default)
    ///     .wrap(|(s,): (&str,)| u32::from_str_radix(s, 16).ok());
    ///
    /// assert_eq!(parse.call(("ff",)), Ok(Some(Some(255))));
    /// assert_eq!(parse.call(("zz",)), Err(PatternError::Default));
    /// ```
    pub fn with_validator(
        validator: PatternValidator,
        propagate: bool,
        error: PatternError,
    ) -> Self {
        Self {
            validator,
            propagate,
            error,
        }
    }

    /// Returns the validator applied to every call.
    pub fn validator(&self) -> &PatternValidator {
        &self.validator
    }

    /// Returns true if the wrapped function's result is handed back.
    pub fn propagates(&self) -> bool {
        self.propagate
    }

    /// Returns the failure kind reported on rejection.
    pub fn error(&self) -> PatternError {
        self.error
    }

    /// Wraps `func`, producing a [`Guarded`] callable.
    pub fn wrap<F>(self, func: F) -> Guarded<F> {
        Guarded { guard: self, func }
    }

    /// Wraps `func` into a plain closure with the same behavior as
    /// [`Guarded::call`].
    pub fn decorate<A, R, F>(self, func: F) -> impl Fn(A) -> Result<Option<R>, PatternError>
    where
        A: ArgumentList,
        F: Fn(A) -> R,
    {
        let guarded = self.wrap(func);
        move |args| guarded.call(args)
    }

    /// Validates `args`, returning the configured failure kind on rejection.
    pub fn check<A: ArgumentList + ?Sized>(&self, args: &A) -> Result<(), PatternError> {
        let arguments = args.arguments();
        if self.validator.is_valid(&arguments) {
            return Ok(());
        }

        // Diagnostics are only collected for rejected calls.
        let failed = self
            .validator
            .validate(&arguments)
            .err()
            .map_or(0, |error| error.nested.len());
        tracing::debug!(
            kind = %self.error.code(),
            pattern = self.validator.pattern(),
            failed,
            "guarded call rejected"
        );
        Err(self.error)
    }
}

/// Builds a guard from a preset validator type.
///
/// ```rust
/// use mpatterns::foundation::PatternError;
/// use mpatterns::guard::make_guard;
/// use mpatterns::validators::AlphaValidator;
///
/// let shout = make_guard::<AlphaValidator>(true, PatternError::Default)
///     .wrap(|(s,): (&str,)| s.to_uppercase());
///
/// assert_eq!(shout.call(("hey",)), Ok(Some("HEY".to_string())));
/// assert_eq!(shout.call(("h3y",)), Err(PatternError::Default));
/// ```
pub fn make_guard<V: PresetPattern>(propagate: bool, error: PatternError) -> Guard {
    Guard::with_validator(V::default().into_validator(), propagate, error)
}

/// Guard accepting digits-only arguments, failing with [`PatternError::Numeric`].
pub fn numeric_guard(propagate: bool) -> Guard {
    make_guard::<NumericValidator>(propagate, NumericValidator::FAILURE)
}

/// Guard accepting letter/underscore arguments, failing with [`PatternError::Alpha`].
pub fn alpha_guard(propagate: bool) -> Guard {
    make_guard::<AlphaValidator>(propagate, AlphaValidator::FAILURE)
}

/// Guard accepting identifier arguments, failing with [`PatternError::AlphaNumeric`].
pub fn alphanumeric_guard(propagate: bool) -> Guard {
    make_guard::<AlphaNumericValidator>(propagate, AlphaNumericValidator::FAILURE)
}

// ============================================================================
// GUARDED CALLABLE
// ============================================================================

/// A function wrapped by a [`Guard`].
#[derive(Clone)]
pub struct Guarded<F> {
    guard: Guard,
    func: F,
}

impl<F> Guarded<F> {
    /// Validates `args` and, if every argument passes, calls the wrapped
    /// function with them.
    ///
    /// * `Ok(Some(result))` when the guard propagates results
    /// * `Ok(None)` when it does not (the function still ran)
    /// * `Err(kind)` when an argument was rejected (the function did not run)
    pub fn call<A, R>(&self, args: A) -> Result<Option<R>, PatternError>
    where
        A: ArgumentList,
        F: Fn(A) -> R,
    {
        self.guard.check(&args)?;
        tracing::trace!(
            pattern = self.guard.validator.pattern(),
            "guarded call forwarded"
        );

        let result = (self.func)(args);
        Ok(self.guard.propagate.then_some(result))
    }

    /// Returns the guard applied to every call.
    pub fn guard(&self) -> &Guard {
        &self.guard
    }

    /// Unwraps into the wrapped function.
    pub fn into_inner(self) -> F {
        self.func
    }
}

impl<F> fmt::Debug for Guarded<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guarded")
            .field("guard", &self.guard)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
