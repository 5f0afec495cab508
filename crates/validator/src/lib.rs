//! # mpatterns
//!
//! Fast and minimal regex-based validation of values and function arguments.
//!
//! ## Quick Start
//!
//! ```rust
//! use mpatterns::args;
//! use mpatterns::prelude::*;
//!
//! // Check a set of positional and keyword arguments against one pattern
//! let pv = PatternValidator::new(r"[a-zA-Z_]*$").unwrap();
//! assert!(pv.is_valid(&args!("le", "reg", "__okei"; option = "zeke")));
//!
//! // Guard a function so it only runs on digit-only arguments
//! let add = numeric_guard(true).wrap(|(a, b): (u32, u32)| a + b);
//! assert_eq!(add.call((1, 2)), Ok(Some(3)));
//! ```
//!
//! ## Matching
//!
//! Patterns use the [`regex`] dialect and are matched from the start of the
//! text only. A pattern that must cover the whole text ends with `$`, as all
//! the presets do.
//!
//! ## Built-in Validators
//!
//! - **Single value**: [`Validator`](validators::Validator)
//! - **Arguments**: [`PatternValidator`](validators::PatternValidator)
//! - **Presets**: [`NumericValidator`](validators::NumericValidator),
//!   [`AlphaValidator`](validators::AlphaValidator),
//!   [`AlphaNumericValidator`](validators::AlphaNumericValidator)
//!
//! ## Guards
//!
//! [`numeric_guard`](guard::numeric_guard), [`alpha_guard`](guard::alpha_guard),
//! [`alphanumeric_guard`](guard::alphanumeric_guard) and
//! [`make_guard`](guard::make_guard) produce a [`Guard`](guard::Guard) that
//! wraps functions. Rejected calls return a
//! [`PatternError`](foundation::PatternError) naming the failure kind.

pub mod config;
pub mod foundation;
pub mod guard;
mod macros;
pub mod prelude;
pub mod validators;
