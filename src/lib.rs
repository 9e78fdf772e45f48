//! Compose large regular expressions out of small, named, reusable pieces.
//!
//! ```
//! use regcomp::{many1, named_capture, or, pattern};
//!
//! let digits = many1(&pattern!("[0-9]").unwrap()).unwrap();
//! let word = pattern!(r"/[a-z]+/i").unwrap();
//! let key = named_capture("key", &word).unwrap();
//! let value = named_capture("value", &or([&digits, &word]).unwrap()).unwrap();
//! let pair = pattern!("^" {&key} "=" {&value} "$").unwrap();
//!
//! let caps = pair.captures("port=8080").unwrap();
//! assert_eq!(caps.get("key"), Some("port"));
//! assert_eq!(caps.get("value"), Some("8080"));
//! ```
//!
//! A template is written as literal fragments interleaved with values. When
//! the first fragment opens with `/` and the last one closes with `/flags`,
//! the template is in wrapped form and those flags apply to the result.
//! Flags of substituted patterns are never inherited (see [`compose`]).

#[macro_use]
mod macros;
mod combinators;
mod compose;
mod engine;
mod error;
mod flags;
mod lexer;
mod pattern;

#[cfg(test)]
mod tests;

pub use combinators::{many0, many1, maybe, named_capture, or};
pub use compose::{Piece, Template, compose, compose_unicode, compose_unicode_with, compose_with};
pub use engine::Options;
pub use error::Error;
pub use flags::{Flags, flag_universe};
pub use lexer::{DELIMITER, extract_trailing_flags, is_wrapped_form};
pub use pattern::{Captures, Pattern};
