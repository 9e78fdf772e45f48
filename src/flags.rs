//! Flag universe and flag sets.
//!
//! The universe is whatever the host engine accepts, discovered by probing
//! every lowercase letter once per process. A [`Flags`] value reserves one
//! bit per letter `a..=z`, so letters the engine later starts (or stops)
//! accepting need no change here.

use crate::{Error, engine};
use once_cell::sync::Lazy;
use std::fmt;

static FLAG_UNIVERSE: Lazy<String> = Lazy::new(|| {
    let universe: String = ('a'..='z').filter(|&c| engine::accepts_flag(c)).collect();
    if *engine::DEBUG {
        eprintln!("[flag_universe] \"{}\"", universe);
    }
    universe
});

/// Flags the host engine accepts, in alphabetical order.
///
/// With the `regex` crate this is `"imsux"`.
pub fn flag_universe() -> &'static str {
    &FLAG_UNIVERSE
}

bitflags::bitflags! {
    /// An unordered set of single-letter matching-mode flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u32 {
        const IGNORE_CASE          = 1 << (b'i' - b'a');
        const MULTI_LINE           = 1 << (b'm' - b'a');
        const DOT_MATCHES_NEW_LINE = 1 << (b's' - b'a');
        const UNICODE              = 1 << (b'u' - b'a');
        const IGNORE_WHITESPACE    = 1 << (b'x' - b'a');

        // Any letter may be carried; the universe decides what is valid.
        const _ = (1 << 26) - 1;
    }
}

impl Flags {
    /// The bit for a lowercase ASCII letter, whether or not the engine accepts it.
    pub fn from_letter(letter: char) -> Option<Flags> {
        letter.is_ascii_lowercase().then(|| Flags::from_bits_retain(1 << (letter as u8 - b'a')))
    }

    /// Parse a flag string such as `"imu"`.
    ///
    /// Every character must belong to the flag universe and appear at most
    /// once; otherwise this fails with [`Error::InvalidFlag`].
    pub fn parse(text: &str) -> Result<Flags, Error> {
        let invalid = |flag| Error::InvalidFlag { flags: text.to_string(), flag };
        let mut flags = Flags::empty();
        for c in text.chars() {
            if !flag_universe().contains(c) {
                return Err(invalid(c));
            }
            let bit = Flags::from_letter(c).ok_or_else(|| invalid(c))?;
            if flags.contains(bit) {
                return Err(invalid(c));
            }
            flags |= bit;
        }
        Ok(flags)
    }

    /// Letters in this set, alphabetically.
    pub fn letters(self) -> impl Iterator<Item = char> {
        ('a'..='z').filter(move |&c| Flags::from_letter(c).is_some_and(|bit| self.contains(bit)))
    }

    pub fn is_unicode(self) -> bool {
        self.contains(Flags::UNICODE)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters().try_for_each(|c| fmt::Write::write_char(f, c))
    }
}
