//! End-to-end tests for guarded calls.

use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use mpatterns::args;
use mpatterns::prelude::*;

// ============================================================================
// NUMERIC GUARD
// ============================================================================

#[test]
fn numeric_guard_adds_integers() {
    let add = numeric_guard(true).wrap(|(a, b): (i32, i32)| a + b);
    assert_eq!(add.call((1, 2)), Ok(Some(3)));
}

#[test]
fn numeric_guard_rejects_letters_without_calling() {
    let calls = Cell::new(0);
    let add = numeric_guard(true).wrap(|(a, b): (&str, &str)| {
        calls.set(calls.get() + 1);
        format!("{a}{b}")
    });

    assert_eq!(add.call(("ab", "cd")), Err(PatternError::Numeric));
    assert_eq!(calls.get(), 0);

    assert_eq!(add.call(("1", "2")), Ok(Some("12".to_string())));
    assert_eq!(calls.get(), 1);
}

#[test]
fn numeric_guard_matches_text_form_of_numbers() {
    let negate = numeric_guard(true).wrap(|(n,): (i64,)| -n);

    assert_eq!(negate.call((42,)), Ok(Some(-42)));
    // "-5" contains a non-digit
    assert_eq!(negate.call((-5,)), Err(PatternError::Numeric));
}

// ============================================================================
// PROPAGATION
// ============================================================================

#[test]
fn non_propagating_guard_runs_function_and_returns_nothing() {
    let counter = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&counter);
    let add_step = move |(step,): (usize,)| seen.fetch_add(step, Ordering::SeqCst);
    let bump = numeric_guard(false).decorate(add_step);

    assert_eq!(bump((5,)), Ok(None));
    assert_eq!(bump((2,)), Ok(None));
    assert_eq!(counter.load(Ordering::SeqCst), 7);
}

#[test]
fn non_propagating_guard_still_rejects() {
    let calls = Cell::new(0);
    let touch = alpha_guard(false).wrap(|(_name,): (&str,)| calls.set(calls.get() + 1));

    assert_eq!(touch.call(("x1",)), Err(PatternError::Alpha));
    assert_eq!(calls.get(), 0);
}

// ============================================================================
// KEYWORD ARGUMENTS
// ============================================================================

#[test]
fn keyword_arguments_are_validated_too() {
    let greet = alpha_guard(true)
        .wrap(|(first, last): (&str, Named<&str>)| format!("{first} {}", last.value));

    assert_eq!(
        greet.call(("ada", named("last", "lovelace"))),
        Ok(Some("ada lovelace".to_string()))
    );
    assert_eq!(
        greet.call(("ada", named("last", "l0velace"))),
        Err(PatternError::Alpha)
    );
}

#[test]
fn argument_structs_expose_their_fields() {
    struct Login<'a> {
        user: &'a str,
        role: &'a str,
    }

    impl ArgumentList for Login<'_> {
        fn arguments(&self) -> Arguments {
            args!(; user = self.user, role = self.role)
        }
    }

    let login = alphanumeric_guard(true)
        .wrap(|login: Login<'_>| format!("{}@{}", login.user, login.role));
    let valid = Login {
        user: "ada_9",
        role: "admin",
    };
    let invalid = Login {
        user: "ada",
        role: "9admin",
    };

    assert_eq!(login.call(valid), Ok(Some("ada_9@admin".to_string())));
    assert_eq!(login.call(invalid), Err(PatternError::AlphaNumeric));
}

// ============================================================================
// ERROR KINDS
// ============================================================================

#[test]
fn each_guard_reports_its_own_kind() {
    let numeric = numeric_guard(true).wrap(|(s,): (&str,)| s.len());
    let alpha = alpha_guard(true).wrap(|(s,): (&str,)| s.len());
    let ident = alphanumeric_guard(true).wrap(|(s,): (&str,)| s.len());

    let kinds: Vec<PatternError> = [numeric.call(("x",)), alpha.call(("1",)), ident.call(("",))]
        .into_iter()
        .filter_map(Result::err)
        .collect();

    assert_eq!(
        kinds,
        vec![
            PatternError::Numeric,
            PatternError::Alpha,
            PatternError::AlphaNumeric
        ]
    );
}

#[test]
fn ad_hoc_guard_with_default_error() {
    let hex = PatternValidator::new(r"[0-9a-f]+$").unwrap();
    let parse = Guard::with_validator(hex, true, PatternError::Default)
        .wrap(|(s,): (&str,)| u64::from_str_radix(s, 16));

    assert!(matches!(parse.call(("ff",)), Ok(Some(Ok(255)))));
    assert_eq!(parse.call(("fg",)).unwrap_err(), PatternError::Default);
}

#[test]
fn rejected_call_is_a_std_error() {
    fn run() -> Result<u32, Box<dyn std::error::Error>> {
        let add = numeric_guard(true).wrap(|(a, b): (&str, &str)| a.len() + b.len());
        let sum = add.call(("1", "x"))?.unwrap_or_default();
        Ok(u32::try_from(sum)?)
    }

    let error = run().unwrap_err();
    assert_eq!(error.to_string(), "arguments failed numeric validation");
}
