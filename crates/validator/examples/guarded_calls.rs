//! Guarding functions with preset and configured patterns.

use mpatterns::args;
use mpatterns::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Direct validation
    let identifiers = alphanumeric();
    println!(
        "identifiers valid: {}",
        identifiers.is_valid(&args!("user_id", "tmp$1"; alias = "_root"))
    );

    if let Err(error) = identifiers.validate(&args!("ok", "9lives")) {
        println!("{error}");
    }

    // Preset guard
    let add = numeric_guard(true).wrap(|(a, b): (u32, u32)| a + b);
    println!("1 + 2 = {:?}", add.call((1, 2))?);

    let concat = numeric_guard(true).wrap(|(a, b): (&str, &str)| format!("{a}{b}"));
    match concat.call(("ab", "cd")) {
        Ok(value) => println!("unexpected: {value:?}"),
        Err(PatternError::Numeric) => println!("rejected: not numeric"),
        Err(other) => println!("rejected: {other}"),
    }

    // Guard loaded from configuration
    let guard = GuardConfig::from_json(r#"{ "pattern": { "custom": "[0-9a-f]+$" } }"#)?.build()?;
    let parse = guard.wrap(|(s,): (&str,)| u64::from_str_radix(s, 16));
    println!("0xff = {:?}", parse.call(("ff",))?);

    Ok(())
}
