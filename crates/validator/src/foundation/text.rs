//! Text conversion for pattern validation
//!
//! Patterns only ever see text. [`ToPatternText`] is the explicit, closed set
//! of value types that have a single unambiguous text form: string types,
//! `char`, `bool` and the integer primitives. Floating-point numbers are left
//! out on purpose since their text form depends on formatting choices; convert
//! them to a string at the call site instead.
//!
//! `bool` renders lowercase (`"true"`/`"false"`), never capitalized.

use std::borrow::Cow;

/// Types that can be rendered to the text a pattern is matched against.
pub trait ToPatternText {
    /// Returns the text form of this value, borrowed when possible.
    fn to_pattern_text(&self) -> Cow<'_, str>;
}

// ============================================================================
// STRING TYPES
// ============================================================================

impl ToPatternText for str {
    #[inline]
    fn to_pattern_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl ToPatternText for String {
    #[inline]
    fn to_pattern_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl ToPatternText for Box<str> {
    #[inline]
    fn to_pattern_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl ToPatternText for Cow<'_, str> {
    #[inline]
    fn to_pattern_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl<T: ToPatternText + ?Sized> ToPatternText for &T {
    #[inline]
    fn to_pattern_text(&self) -> Cow<'_, str> {
        (**self).to_pattern_text()
    }
}

// ============================================================================
// SCALARS
// ============================================================================

impl ToPatternText for char {
    fn to_pattern_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl ToPatternText for bool {
    fn to_pattern_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

macro_rules! impl_integer_text {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ToPatternText for $ty {
                fn to_pattern_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )+
    };
}

impl_integer_text!(i8, i16, i32, i64, i128, isize);
impl_integer_text!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_borrow() {
        let owned = String::from("abc");
        assert!(matches!(owned.to_pattern_text(), Cow::Borrowed("abc")));
        assert!(matches!("abc".to_pattern_text(), Cow::Borrowed("abc")));
    }

    #[test]
    fn test_integers_render_decimal() {
        assert_eq!(42u8.to_pattern_text(), "42");
        assert_eq!((-7i64).to_pattern_text(), "-7");
        assert_eq!(usize::MAX.to_pattern_text(), usize::MAX.to_string());
    }

    #[test]
    fn test_scalars() {
        assert_eq!('x'.to_pattern_text(), "x");
        assert_eq!(true.to_pattern_text(), "true");
    }

    #[test]
    fn test_nested_references() {
        let value = &&"nested";
        assert_eq!(value.to_pattern_text(), "nested");
    }
}
