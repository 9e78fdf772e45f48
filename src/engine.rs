//! Host engine adapter.
//!
//! Everything that touches the `regex` crate directly lives here: the
//! construction primitive used by composition, the single-flag probe that
//! discovers the flag universe, and the engine limits callers can tune.
//!
//! ```text
//! (source, Flags) ── construct ──▶ "(?flags)source" ── RegexBuilder ──▶ Regex
//!                                                   └─▶ Error::InvalidPatternSyntax
//! ```
//!
//! Flags are handed to the engine as an inline group prefix rather than as
//! builder toggles. That is the only way the `regex` crate accepts a flag by
//! its letter, and it keeps the probe and real construction on one path.
//!
//! ## Debugging
//!
//! Set `REGCOMP_DEBUG=1` to print composition and construction traces.

use crate::flags::flag_universe;
use crate::{Error, Flags};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

pub(crate) static DEBUG: Lazy<bool> = Lazy::new(|| std::env::var_os("REGCOMP_DEBUG").is_some());

/// Engine limits applied when a built pattern is compiled.
///
/// Composed patterns grow quickly (every combinator wraps its operand), so the
/// defaults are more generous than the `regex` crate's own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Approximate size limit, in bytes, of the compiled program.
    pub size_limit: usize,
    /// Approximate size limit, in bytes, of the lazy DFA cache.
    pub dfa_size_limit: usize,
    /// Maximum nesting depth of the pattern's syntax tree.
    pub nest_limit: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self { size_limit: 64 * (1 << 20), dfa_size_limit: 8 * (1 << 20), nest_limit: 500 }
    }
}

/// Compile `source` with `flags`.
///
/// Flags outside the universe fail with [`Error::InvalidFlag`] before the
/// engine is consulted; anything the engine rejects afterwards is reported as
/// [`Error::InvalidPatternSyntax`].
pub(crate) fn construct(source: &str, flags: Flags, options: &Options) -> Result<Regex, Error> {
    let flag_text = flags.to_string();
    let unknown = flag_text.chars().find(|&c| !flag_universe().contains(c));
    if let Some(flag) = unknown {
        return Err(Error::InvalidFlag { flags: flag_text, flag });
    }

    let regex = build(source, &flag_text, options)
        .map_err(|err| Error::InvalidPatternSyntax { pattern: source.to_string(), message: err.to_string() })?;

    if *DEBUG {
        eprintln!("[construct] source=\"{}\" flags=\"{}\" groups={}", source, flag_text, regex.captures_len() - 1);
    }

    Ok(regex)
}

/// Returns true when the engine accepts `flag` on an empty-bodied pattern.
pub(crate) fn accepts_flag(flag: char) -> bool {
    build("", flag.encode_utf8(&mut [0; 4]), &Options::default()).is_ok()
}

fn build(source: &str, flag_text: &str, options: &Options) -> Result<Regex, regex::Error> {
    let text = if flag_text.is_empty() { source.to_string() } else { format!("(?{flag_text}){source}") };
    RegexBuilder::new(&text)
        .size_limit(options.size_limit)
        .dfa_size_limit(options.dfa_size_limit)
        .nest_limit(options.nest_limit)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_applies_flags_inline() {
        let re = construct("abc", Flags::IGNORE_CASE, &Options::default()).unwrap();
        assert!(re.is_match("xABCx"));
        assert_eq!(re.as_str(), "(?i)abc");
    }

    #[test]
    fn construct_without_flags_keeps_source() {
        let re = construct("a|b", Flags::empty(), &Options::default()).unwrap();
        assert_eq!(re.as_str(), "a|b");
    }

    #[test]
    fn construct_rejects_letters_outside_universe() {
        let global = Flags::from_letter('g').unwrap();
        let err = construct("abc", global | Flags::IGNORE_CASE, &Options::default()).unwrap_err();
        assert_eq!(err, Error::InvalidFlag { flags: "gi".to_string(), flag: 'g' });
    }

    #[test]
    fn construct_reports_syntax_errors() {
        let err = construct("(abc", Flags::empty(), &Options::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidPatternSyntax { ref pattern, .. } if pattern == "(abc"));
    }

    #[test]
    fn nest_limit_is_enforced() {
        let options = Options { nest_limit: 2, ..Options::default() };
        let deep = "(?:(?:(?:(?:a))))";
        assert!(construct(deep, Flags::empty(), &options).is_err());
        assert!(construct(deep, Flags::empty(), &Options::default()).is_ok());
    }
}
