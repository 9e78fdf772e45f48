//! Template compositor.
//!
//! A template is a sequence of literal fragments interleaved with values:
//!
//! ```text
//! fragment₀  value₀  fragment₁  value₁  …  fragmentₙ
//! ```
//!
//! Composition is the single point where text gets concatenated and flags get
//! resolved:
//!
//! ```text
//! (first, last) ── is_wrapped_form ──┬─ yes: outer flags = extract_trailing_flags(last)
//!                                    │       strip "/" from first, "/flags" from last
//!                                    └─ no:  outer flags = "", fragments verbatim
//!
//! fragment ─▶ push text
//! value    ─▶ Pattern: push source, union its group names (flags dropped)
//!             Text:    push text
//! ```
//!
//! The assembled text is then normalised (an unescaped delimiter outside a
//! character class becomes `\/`, an empty body becomes `(?:)`) and compiled
//! by the host engine.

use crate::engine::{DEBUG, Options};
use crate::lexer::{self, DELIMITER};
use crate::pattern::EMPTY_SOURCE;
use crate::{Error, Flags, Pattern};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// A value substituted between two literal fragments.
#[derive(Debug, Clone)]
pub enum Piece<'a> {
    /// Raw text, spliced in verbatim.
    Text(Cow<'a, str>),
    /// A built pattern; only its source is spliced in.
    Pattern(&'a Pattern),
}

impl Piece<'_> {
    /// Coerce any displayable value to raw text.
    pub fn display(value: impl std::fmt::Display) -> Self {
        Piece::Text(Cow::Owned(value.to_string()))
    }
}

impl<'a> From<&'a Pattern> for Piece<'a> {
    fn from(pattern: &'a Pattern) -> Self {
        Piece::Pattern(pattern)
    }
}

impl<'a> From<&'a str> for Piece<'a> {
    fn from(text: &'a str) -> Self {
        Piece::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Piece<'a> {
    fn from(text: &'a String) -> Self {
        Piece::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Piece<'_> {
    fn from(text: String) -> Self {
        Piece::Text(Cow::Owned(text))
    }
}

macro_rules! piece_from_display {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Piece<'_> {
            fn from(value: $ty) -> Self {
                Piece::display(value)
            }
        })*
    };
}

piece_from_display!(char, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Build a pattern from literal `fragments` interleaved with `values`.
///
/// `fragments` must hold exactly one more element than `values`, unless both
/// are empty (which yields the empty pattern).
///
/// ```
/// use regcomp::{compose, Piece};
///
/// let digit = compose(&[r"\d"], &[]).unwrap();
/// let hex = compose(&["/[", "a-f]+/i"], &[Piece::from(&digit)]).unwrap();
/// assert_eq!(hex.source(), r"[\da-f]+");
/// assert_eq!(hex.flags().to_string(), "i");
/// ```
pub fn compose(fragments: &[&str], values: &[Piece<'_>]) -> Result<Pattern, Error> {
    compose_with(fragments, values, &Options::default())
}

/// [`compose`] with explicit engine limits.
pub fn compose_with(fragments: &[&str], values: &[Piece<'_>], options: &Options) -> Result<Pattern, Error> {
    let Assembled { source, flags, groups } = assemble(fragments, values)?;

    if *DEBUG {
        eprintln!(
            "[compose] fragments={} values={} source=\"{}\" flags=\"{}\" groups={:?}",
            fragments.len(),
            values.len(),
            source,
            flags,
            groups
        );
    }

    Pattern::build(source, flags, groups, options)
}

/// Like [`compose`], but the result always carries unicode mode.
pub fn compose_unicode(fragments: &[&str], values: &[Piece<'_>]) -> Result<Pattern, Error> {
    compose_unicode_with(fragments, values, &Options::default())
}

/// [`compose_unicode`] with explicit engine limits.
pub fn compose_unicode_with(fragments: &[&str], values: &[Piece<'_>], options: &Options) -> Result<Pattern, Error> {
    let pattern = compose_with(fragments, values, options)?;
    if pattern.is_unicode() {
        return Ok(pattern);
    }
    pattern.with_flags(pattern.flags() | Flags::UNICODE)
}

struct Assembled {
    source: String,
    flags: Flags,
    groups: BTreeSet<String>,
}

fn assemble(fragments: &[&str], values: &[Piece<'_>]) -> Result<Assembled, Error> {
    let mut groups = BTreeSet::new();

    let (Some(first), Some(last)) = (fragments.first(), fragments.last()) else {
        if !values.is_empty() {
            return Err(Error::TemplateShape { fragments: 0, values: values.len() });
        }
        return Ok(Assembled { source: EMPTY_SOURCE.to_string(), flags: Flags::empty(), groups });
    };

    if fragments.len() != values.len() + 1 {
        return Err(Error::TemplateShape { fragments: fragments.len(), values: values.len() });
    }

    let wrapped = lexer::is_wrapped_form(first, last);
    let flags = if wrapped { Flags::parse(lexer::extract_trailing_flags(last))? } else { Flags::empty() };

    let last_idx = fragments.len() - 1;
    let mut source = String::new();
    for (idx, fragment) in fragments.iter().enumerate() {
        let mut text: &str = fragment;
        if wrapped && idx == 0 {
            text = &text[DELIMITER.len_utf8()..];
        }
        if wrapped && idx == last_idx {
            text = lexer::strip_wrapped_suffix(text);
        }
        source.push_str(text);

        match values.get(idx) {
            Some(Piece::Pattern(pattern)) => {
                source.push_str(pattern.source());
                groups.extend(pattern.group_names().iter().cloned());
            }
            Some(Piece::Text(value)) => source.push_str(value),
            None => {}
        }
    }

    Ok(Assembled { source: normalize_source(source), flags, groups })
}

/// Escape bare delimiters and give an empty body its no-op spelling.
///
/// A delimiter inside a character class is left alone, as is anything
/// already escaped.
fn normalize_source(source: String) -> String {
    if source.is_empty() {
        return EMPTY_SOURCE.to_string();
    }
    if !source.contains(DELIMITER) {
        return source;
    }

    let mut out = String::with_capacity(source.len() + 4);
    let mut chars = source.chars().peekable();
    // Nesting depth of character classes; `[a[b]]` is valid for the engine.
    let mut class_depth = 0usize;
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push(c);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '[' => {
                out.push(c);
                class_depth += 1;
                // A `]` right after `[` or `[^` is a literal member.
                if chars.peek() == Some(&'^') {
                    out.push('^');
                    chars.next();
                }
                if chars.peek() == Some(&']') {
                    out.push(']');
                    chars.next();
                }
            }
            ']' if class_depth > 0 => {
                out.push(c);
                class_depth -= 1;
            }
            DELIMITER if class_depth == 0 => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Builder for templates, standing in for tagged-template syntax.
///
/// Fragments and values alternate by construction, so a `Template` always has
/// the shape [`compose`] expects.
///
/// ```
/// use regcomp::Template;
///
/// let word = Template::new(r"\w+").build().unwrap();
/// let pair = Template::new("^").push(&word, "=").push(&word, "$").build().unwrap();
/// assert_eq!(pair.source(), r"^\w+=\w+$");
/// ```
#[derive(Debug, Clone)]
pub struct Template<'a> {
    fragments: Vec<&'a str>,
    values: Vec<Piece<'a>>,
}

impl<'a> Template<'a> {
    pub fn new(fragment: &'a str) -> Self {
        Template { fragments: vec![fragment], values: Vec::new() }
    }

    /// Append a value followed by the next literal fragment.
    pub fn push(mut self, value: impl Into<Piece<'a>>, fragment: &'a str) -> Self {
        self.values.push(value.into());
        self.fragments.push(fragment);
        self
    }

    pub fn build(&self) -> Result<Pattern, Error> {
        compose(&self.fragments, &self.values)
    }

    pub fn build_with(&self, options: &Options) -> Result<Pattern, Error> {
        compose_with(&self.fragments, &self.values, options)
    }

    pub fn build_unicode(&self) -> Result<Pattern, Error> {
        compose_unicode(&self.fragments, &self.values)
    }

    pub fn build_unicode_with(&self, options: &Options) -> Result<Pattern, Error> {
        compose_unicode_with(&self.fragments, &self.values, options)
    }
}
