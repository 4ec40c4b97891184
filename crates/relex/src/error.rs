//! Error types for pattern compilation and NFA construction.

use thiserror::Error;

/// Errors raised while compiling a pattern into postfix form.
///
/// Any of these aborts the compilation attempt; no partial automaton is
/// produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A `(` was never closed before the end of the pattern.
    #[error("unmatched '(' in pattern")]
    UnbalancedOpen,
    /// A `)` had no matching `(`.
    #[error("unmatched ')' in pattern")]
    UnbalancedClose,
    /// The pattern ended immediately after an escape marker.
    #[error("dangling escape at end of pattern")]
    DanglingEscape,
    /// A `[` character class was never closed.
    #[error("unterminated character class in pattern")]
    UnterminatedClass,
}

/// Error raised by `NfaBuilder::char_range` when the bounds are inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid character range '{lo}'-'{hi}'")]
pub struct RangeError {
    pub lo: char,
    pub hi: char,
}
