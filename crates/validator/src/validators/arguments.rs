//! Positional and keyword argument lists
//!
//! [`Arguments`] is the input of [`PatternValidator`](super::PatternValidator):
//! an ordered list of positional texts plus an ordered list of `(name, text)`
//! keyword pairs. Guarded functions accept any [`ArgumentList`], which knows how
//! to render itself into `Arguments`.

use smallvec::SmallVec;

use crate::foundation::ToPatternText;

// ============================================================================
// ARGUMENTS
// ============================================================================

/// Text forms of a call's positional and keyword arguments.
///
/// Most calls carry a handful of arguments, so both lists are stored inline.
///
/// # Examples
///
/// ```rust
/// use mpatterns::validators::Arguments;
///
/// let args = Arguments::new()
///     .with_positional("ab")
///     .with_positional(&42)
///     .with_named("option", "ef");
///
/// assert_eq!(args.len(), 3);
/// assert_eq!(args.positional().collect::<Vec<_>>(), vec!["ab", "42"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    positional: SmallVec<[String; 4]>,
    named: SmallVec<[(String, String); 4]>,
}

impl Arguments {
    /// Creates an empty argument list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn push<T: ToPatternText + ?Sized>(&mut self, value: &T) {
        self.positional.push(value.to_pattern_text().into_owned());
    }

    /// Appends a keyword argument.
    pub fn push_named<T: ToPatternText + ?Sized>(&mut self, name: impl Into<String>, value: &T) {
        self.named
            .push((name.into(), value.to_pattern_text().into_owned()));
    }

    /// Appends a positional argument.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_positional<T: ToPatternText + ?Sized>(mut self, value: &T) -> Self {
        self.push(value);
        self
    }

    /// Appends a keyword argument.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_named<T: ToPatternText + ?Sized>(
        mut self,
        name: impl Into<String>,
        value: &T,
    ) -> Self {
        self.push_named(name, value);
        self
    }

    /// Iterates positional texts in call order.
    pub fn positional(&self) -> impl Iterator<Item = &str> {
        self.positional.iter().map(String::as_str)
    }

    /// Iterates keyword `(name, text)` pairs in call order.
    pub fn named(&self) -> impl Iterator<Item = (&str, &str)> {
        self.named.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Total number of arguments, positional and keyword.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    /// Returns true if there are no arguments at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

// ============================================================================
// KEYWORD MARKER
// ============================================================================

/// Marks a value as a keyword argument inside a tuple argument list.
///
/// ```rust
/// use mpatterns::validators::{ArgumentList, named};
///
/// let args = ("ab", named("option", "ef")).arguments();
/// assert_eq!(args.named().collect::<Vec<_>>(), vec![("option", "ef")]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Named<T> {
    /// Keyword name.
    pub name: &'static str,
    /// Argument value.
    pub value: T,
}

/// Creates a keyword argument.
pub fn named<T>(name: &'static str, value: T) -> Named<T> {
    Named { name, value }
}

/// A single element of a tuple argument list.
pub trait ArgumentValue {
    /// Appends this value to `args` as positional or keyword argument.
    fn push_into(&self, args: &mut Arguments);
}

impl<T: ToPatternText + ?Sized> ArgumentValue for T {
    fn push_into(&self, args: &mut Arguments) {
        args.push(self);
    }
}

impl<T: ToPatternText> ArgumentValue for Named<T> {
    fn push_into(&self, args: &mut Arguments) {
        args.push_named(self.name, &self.value);
    }
}

// ============================================================================
// ARGUMENT LISTS
// ============================================================================

/// Anything a guarded function can be called with.
///
/// Implemented for [`Arguments`], tuples of up to eight [`ArgumentValue`]s,
/// `Vec`s and arrays. Implement it for a struct to expose its fields as
/// keyword arguments.
pub trait ArgumentList {
    /// Renders the call's arguments to text.
    fn arguments(&self) -> Arguments;
}

impl ArgumentList for Arguments {
    fn arguments(&self) -> Arguments {
        self.clone()
    }
}

impl<T: ArgumentValue> ArgumentList for Vec<T> {
    fn arguments(&self) -> Arguments {
        self.as_slice().arguments()
    }
}

impl<T: ArgumentValue> ArgumentList for [T] {
    fn arguments(&self) -> Arguments {
        let mut args = Arguments::new();
        for value in self {
            value.push_into(&mut args);
        }
        args
    }
}

impl<T: ArgumentValue, const N: usize> ArgumentList for [T; N] {
    fn arguments(&self) -> Arguments {
        self.as_slice().arguments()
    }
}

macro_rules! impl_argument_list_for_tuple {
    ($($name:ident),*) => {
        impl<$($name: ArgumentValue),*> ArgumentList for ($($name,)*) {
            #[allow(non_snake_case, unused_mut)]
            fn arguments(&self) -> Arguments {
                let ($($name,)*) = self;
                let mut args = Arguments::new();
                $($name.push_into(&mut args);)*
                args
            }
        }
    };
}

impl_argument_list_for_tuple!();
impl_argument_list_for_tuple!(A);
impl_argument_list_for_tuple!(A, B);
impl_argument_list_for_tuple!(A, B, C);
impl_argument_list_for_tuple!(A, B, C, D);
impl_argument_list_for_tuple!(A, B, C, D, E);
impl_argument_list_for_tuple!(A, B, C, D, E, F);
impl_argument_list_for_tuple!(A, B, C, D, E, F, G);
impl_argument_list_for_tuple!(A, B, C, D, E, F, G, H);

// ============================================================================
// TESTS
// ============================================================================
