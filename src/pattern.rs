use crate::engine::{self, Options};
use crate::{Error, Flags};
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;

/// Source of the pattern that matches the empty sequence.
pub(crate) const EMPTY_SOURCE: &str = "(?:)";

/// An immutable, compiled pattern produced by a composition call.
///
/// Besides the assembled `source` and its `flags`, a pattern carries the
/// manifest of named capture groups reachable from the sub-patterns it was
/// built from. [`Pattern::captures`] exposes exactly those names.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    flags: Flags,
    groups: BTreeSet<String>,
    options: Options,
    regex: Regex,
}

impl Pattern {
    pub(crate) fn build(
        source: String,
        flags: Flags,
        groups: BTreeSet<String>,
        options: &Options,
    ) -> Result<Self, Error> {
        let regex = engine::construct(&source, flags, options)?;
        Ok(Pattern { source, flags, groups, options: *options, regex })
    }

    /// Same source and manifest, different flags.
    pub(crate) fn with_flags(&self, flags: Flags) -> Result<Self, Error> {
        Pattern::build(self.source.clone(), flags, self.groups.clone(), &self.options)
    }

    /// Add `name` to the manifest of a freshly built pattern.
    pub(crate) fn with_group_name(mut self, name: &str) -> Self {
        self.groups.insert(name.to_string());
        self
    }

    /// Assembled pattern text, without delimiters.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn is_unicode(&self) -> bool {
        self.flags.is_unicode()
    }

    /// Names of the capture groups a successful match exposes.
    pub fn group_names(&self) -> &BTreeSet<String> {
        &self.groups
    }

    /// Engine limits this pattern was compiled with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The compiled host regex, flags applied.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// Match `haystack`, exposing the groups named in the manifest.
    pub fn captures<'p, 'h>(&'p self, haystack: &'h str) -> Option<Captures<'p, 'h>> {
        let inner = self.regex.captures(haystack)?;
        Some(Captures { groups: &self.groups, inner })
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags && self.groups == other.groups
    }
}

impl Eq for Pattern {}

/// Renders the conventional `/source/flags` form.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

/// A successful match of a [`Pattern`].
///
/// Only groups from the pattern's manifest are visible; a group that did not
/// participate in the match reads as `None`.
#[derive(Debug)]
pub struct Captures<'p, 'h> {
    groups: &'p BTreeSet<String>,
    inner: regex::Captures<'h>,
}

impl<'p, 'h> Captures<'p, 'h> {
    /// Text of the whole match.
    pub fn as_str(&self) -> &'h str {
        self.inner.get(0).map_or("", |m| m.as_str())
    }

    /// Text captured by the group `name`.
    pub fn get(&self, name: &str) -> Option<&'h str> {
        if !self.groups.contains(name) {
            return None;
        }
        self.inner.name(name).map(|m| m.as_str())
    }

    /// True when `name` is one of the exposed group names.
    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'p str> {
        self.groups.iter().map(String::as_str)
    }

    /// Every exposed group with its captured text, alphabetically by name.
    pub fn iter(&self) -> impl Iterator<Item = (&'p str, Option<&'h str>)> + '_ {
        self.groups.iter().map(|name| (name.as_str(), self.inner.name(name).map(|m| m.as_str())))
    }
}
