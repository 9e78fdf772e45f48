use thiserror::Error;

/// Errors surfaced by a composition call.
///
/// Composition is plain text assembly, so none of these are recovered
/// locally: they describe a template the caller wrote wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The flag string holds a character the host engine does not accept,
    /// or repeats one.
    #[error("invalid flag {flag:?} in flags \"{flags}\"")]
    InvalidFlag { flags: String, flag: char },

    /// The assembled source was rejected by the host engine.
    #[error("invalid pattern /{pattern}/: {message}")]
    InvalidPatternSyntax { pattern: String, message: String },

    /// Fragments and values do not interleave as `f, v, f, .., v, f`.
    #[error("template has {fragments} fragments for {values} values (expected values + 1)")]
    TemplateShape { fragments: usize, values: usize },

    /// `or` was called without operands.
    #[error("alternation needs at least one operand")]
    EmptyAlternation,
}
