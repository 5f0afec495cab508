//! Macros for building argument lists with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`args!`] — Build an [`Arguments`](crate::validators::Arguments) from
//!   positional values and `name = value` keyword pairs

// ============================================================================
// ARGS MACRO
// ============================================================================

/// Builds an [`Arguments`](crate::validators::Arguments) list.
///
/// Positional values come first, separated by commas. Keyword arguments follow
/// a `;` as `name = value` pairs. Every value must implement
/// [`ToPatternText`](crate::foundation::ToPatternText).
///
/// ```rust
/// use mpatterns::args;
///
/// let empty = args!();
/// let positional = args!("ab", 12);
/// let mixed = args!("ab", "cd"; option = "ef", depth = 3);
/// let keywords_only = args!(; option = "ef");
///
/// assert!(empty.is_empty());
/// assert_eq!(positional.len(), 2);
/// assert_eq!(mixed.len(), 4);
/// assert_eq!(keywords_only.named().count(), 1);
/// ```
#[macro_export]
macro_rules! args {
    (
        $($value:expr),* $(,)?
        $(; $($name:ident = $named:expr),* $(,)?)?
    ) => {{
        #[allow(unused_mut)]
        let mut args = $crate::validators::Arguments::new();
        $( args.push(&$value); )*
        $($( args.push_named(stringify!($name), &$named); )*)?
        args
    }};
}
