//! Prelude module for convenient imports.
//!
//! Provides a single `use mpatterns::prelude::*;` import that brings in the
//! traits, validators, guards and error kinds needed for common scenarios.
//!
//! # Examples
//!
//! ```rust
//! use mpatterns::args;
//! use mpatterns::prelude::*;
//!
//! assert!(numeric().is_valid(&args!("123", 456)));
//!
//! let guarded = alpha_guard(true).wrap(|(s,): (&str,)| s.len());
//! assert_eq!(guarded.call(("abc",)), Ok(Some(3)));
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{PatternError, ToPatternText, Validate, ValidationError};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::{
    AlphaNumericValidator, AlphaValidator, ArgumentList, Arguments, Named, NumericValidator,
    PatternValidator, PresetPattern, Validator, alpha, alphanumeric, matches_pattern, named,
    numeric,
};

// ============================================================================
// GUARDS
// ============================================================================

pub use crate::config::{ConfigError, GuardConfig, PatternKind};
pub use crate::guard::{Guard, Guarded, alpha_guard, alphanumeric_guard, make_guard, numeric_guard};
