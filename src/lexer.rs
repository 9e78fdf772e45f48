//! Slash/flag lexer.
//!
//! Recognises the `/body/flags` surface syntax on the outer fragments of a
//! template. Both checks are anchored at the end of the string and built from
//! the flag universe, so a character the engine does not accept never counts
//! as a flag.

use crate::flags::flag_universe;
use once_cell::sync::Lazy;
use regex::Regex;

/// Delimiter wrapping a pattern body in `/body/flags` notation.
pub const DELIMITER: char = '/';

static WRAPPED_SUFFIX: Lazy<Regex> = Lazy::new(|| suffix_regex("*"));
static TRAILING_FLAGS: Lazy<Regex> = Lazy::new(|| suffix_regex("+"));

fn suffix_regex(repeat: &str) -> Regex {
    let class = if flag_universe().is_empty() { r"[^\s\S]".to_string() } else { format!("[{}]", flag_universe()) };
    Regex::new(&format!("/(?<flags>{class}{repeat})$")).unwrap()
}

/// Returns true when `first` opens and `last` closes a `/body/flags` template.
///
/// `first` must start with the delimiter; `last` must end with the delimiter
/// followed only by flag characters (possibly none).
///
/// ```
/// use regcomp::is_wrapped_form;
///
/// assert!(is_wrapped_form("/a", "z/imu"));
/// assert!(!is_wrapped_form("/", "z/i "));
/// ```
pub fn is_wrapped_form(first: &str, last: &str) -> bool {
    first.starts_with(DELIMITER) && WRAPPED_SUFFIX.is_match(last)
}

/// The flag characters after a trailing delimiter, or `""` when there are none.
pub fn extract_trailing_flags(s: &str) -> &str {
    TRAILING_FLAGS.captures(s).and_then(|caps| caps.name("flags")).map_or("", |m| m.as_str())
}

/// Drop the trailing `/flags` of a closing fragment.
pub(crate) fn strip_wrapped_suffix(s: &str) -> &str {
    match WRAPPED_SUFFIX.find(s) {
        Some(m) => &s[..m.start()],
        None => s,
    }
}
