//! Combinators over built patterns.
//!
//! Each combinator feeds a synthetic template back into the compositor, so
//! none of them does any parsing of its own. The single-operand combinators
//! close their template with `/flags` to keep the operand's flags; `or` only
//! carries unicode mode over from its operands.

use crate::compose::{Piece, compose_unicode_with, compose_with};
use crate::{Error, Pattern};
use std::iter;

/// `(?:P)?`, keeping the flags of `P`.
pub fn maybe(pattern: &Pattern) -> Result<Pattern, Error> {
    wrap("(?:", pattern, ")?")
}

/// `(?:P)*`, keeping the flags of `P`.
pub fn many0(pattern: &Pattern) -> Result<Pattern, Error> {
    wrap("(?:", pattern, ")*")
}

/// `(?:P)+`, keeping the flags of `P`.
pub fn many1(pattern: &Pattern) -> Result<Pattern, Error> {
    wrap("(?:", pattern, ")+")
}

/// `(?<name>P)`; `name` joins the operand's group names.
///
/// The flags of `P` are kept.
///
/// ```
/// use regcomp::{named_capture, pattern};
///
/// let year = named_capture("year", &pattern!(r"\d{4}").unwrap()).unwrap();
/// let caps = year.captures("in 2024").unwrap();
/// assert_eq!(caps.get("year"), Some("2024"));
/// ```
pub fn named_capture(name: &str, pattern: &Pattern) -> Result<Pattern, Error> {
    let close = format!(")/{}", pattern.flags());
    let captured =
        compose_with(&["/(?<", ">", close.as_str()], &[Piece::from(name), Piece::from(pattern)], pattern.options())?;
    Ok(captured.with_group_name(name))
}

/// `(?:P₁|P₂|…|Pₙ)`
///
/// The result is in unicode mode when any operand is; every other operand
/// flag is dropped. Group names are the union of the operands'.
pub fn or<'a>(patterns: impl IntoIterator<Item = &'a Pattern>) -> Result<Pattern, Error> {
    let values: Vec<Piece<'a>> = patterns.into_iter().map(Piece::from).collect();
    let Some(Piece::Pattern(first)) = values.first() else {
        return Err(Error::EmptyAlternation);
    };
    let options = *first.options();

    let fragments: Vec<&str> =
        iter::once("(?:").chain(iter::repeat_n("|", values.len() - 1)).chain(iter::once(")")).collect();

    let unicode = values.iter().any(|v| matches!(v, Piece::Pattern(p) if p.is_unicode()));
    if unicode {
        compose_unicode_with(&fragments, &values, &options)
    } else {
        compose_with(&fragments, &values, &options)
    }
}

fn wrap(open: &str, pattern: &Pattern, close: &str) -> Result<Pattern, Error> {
    let open = format!("/{open}");
    let close = format!("{close}/{}", pattern.flags());
    compose_with(&[open.as_str(), close.as_str()], &[Piece::from(pattern)], pattern.options())
}
