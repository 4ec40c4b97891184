//! Prioritized classification of strings against named DFAs.

use crate::automaton::dfa::Dfa;

/// Category label returned when no DFA accepts the input.
pub const UNKNOWN: &str = "UNKNOWN";

/// A named token category with its recognizer.
pub struct TokenClass {
    pub name: String,
    pub dfa: Dfa,
}

impl TokenClass {
    pub fn new(name: impl Into<String>, dfa: Dfa) -> Self {
        Self {
            name: name.into(),
            dfa,
        }
    }
}

/// Classify `input` against `classes` in the given priority order.
///
/// Returns the name of the first class whose DFA accepts the full input,
/// or [`UNKNOWN`] if none does. Priority matters because token languages
/// overlap (a keyword DFA and an identifier DFA may both accept the same
/// string); the caller supplies the order, it is never inferred.
pub fn classify<'a>(input: &str, classes: &'a [TokenClass]) -> &'a str {
    classes
        .iter()
        .find(|class| class.dfa.accepts(input))
        .map_or(UNKNOWN, |class| class.name.as_str())
}
