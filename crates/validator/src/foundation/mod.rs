//! Core validation types and traits
//!
//! This module contains the building blocks every validator in the crate uses:
//!
//! - **Traits**: [`Validate`], [`ToPatternText`]
//! - **Errors**: [`ValidationError`], [`PatternError`]
//!
//! # Examples
//!
//! ```rust
//! use mpatterns::foundation::Validate;
//! use mpatterns::validators::Validator;
//!
//! let validator = Validator::new(r"[0-5]*$").unwrap();
//! assert!(validator.is_valid("01"));
//! assert!(validator.validate("016").is_err());
//! ```

pub mod error;
pub mod text;
pub mod traits;

pub use error::{PatternError, ValidationError};
pub use text::ToPatternText;
pub use traits::Validate;

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
