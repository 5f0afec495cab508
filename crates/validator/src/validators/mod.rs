//! Built-in validators
//!
//! - [`Validator`]: one text against one regular expression
//! - [`PatternValidator`]: every positional and keyword argument against one
//!   regular expression
//! - Presets with fixed patterns: [`NumericValidator`], [`AlphaValidator`],
//!   [`AlphaNumericValidator`]
//!
//! # Examples
//!
//! ```rust
//! use mpatterns::args;
//! use mpatterns::prelude::*;
//!
//! let identifiers = alphanumeric();
//! assert!(identifiers.is_valid(&args!("user_id", "tmp$9")));
//! assert!(!identifiers.is_valid(&args!("9lives")));
//! ```

pub mod arguments;
pub mod pattern;
pub mod presets;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use arguments::{ArgumentList, ArgumentValue, Arguments, Named, named};

pub use pattern::{PatternValidator, Validator, matches_pattern};

pub use presets::{
    ALPHA_PATTERN, ALPHANUMERIC_PATTERN, AlphaNumericValidator, AlphaValidator, NUMERIC_PATTERN,
    NumericValidator, PresetPattern, alpha, alphanumeric, numeric,
};
