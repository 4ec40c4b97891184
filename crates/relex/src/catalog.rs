//! Token-category DFA catalog.
//!
//! Builds one recognizer per token category, each from its own builder so
//! no state identifiers are shared between automatons, and returns them
//! in classification priority order.

use crate::automaton::dfa::Dfa;
use crate::automaton::nfa::{Fragment, NfaBuilder};
use crate::automaton::subset_construction::subset_construction;
use crate::classify::TokenClass;

/// Build the token-category recognizers in classification priority order.
///
/// BOOLEAN outranks IDENTIFIER so that keyword-shaped words classify as
/// keywords even though the identifier language contains them.
pub fn token_classes() -> Vec<TokenClass> {
    vec![
        TokenClass::new("BOOLEAN", boolean_dfa()),
        TokenClass::new("INTEGER", integer_dfa()),
        TokenClass::new("DECIMAL", decimal_dfa()),
        TokenClass::new("OPERATOR", operator_dfa()),
        TokenClass::new("ASSIGNMENT", assignment_dfa()),
        TokenClass::new("DELIMITER", delimiter_dfa()),
        TokenClass::new("IDENTIFIER", identifier_dfa()),
    ]
}

fn digits(builder: &mut NfaBuilder) -> Fragment {
    builder
        .char_range('0', '9')
        .expect("digit range is ordered")
}

/// One or more digits.
pub fn integer_dfa() -> Dfa {
    let mut builder = NfaBuilder::new();
    let d = digits(&mut builder);
    let fragment = builder.plus(d);
    subset_construction(&builder.finish(fragment))
}

/// Integer part, dot, fractional part. The five-digit fractional cap is
/// a source-checker concern, not a language restriction.
pub fn decimal_dfa() -> Dfa {
    let mut builder = NfaBuilder::new();
    let d = digits(&mut builder);
    let integer_part = builder.plus(d);
    let dot = builder.literal('.');
    let d = digits(&mut builder);
    let fractional_part = builder.plus(d);
    let tail = builder.concatenate(dot, fractional_part);
    let fragment = builder.concatenate(integer_part, tail);
    subset_construction(&builder.finish(fragment))
}

/// One or more lowercase letters.
pub fn identifier_dfa() -> Dfa {
    let mut builder = NfaBuilder::new();
    let letters = builder
        .char_range('a', 'z')
        .expect("letter range is ordered");
    let fragment = builder.plus(letters);
    subset_construction(&builder.finish(fragment))
}

/// Exactly "true" or "false".
pub fn boolean_dfa() -> Dfa {
    let mut builder = NfaBuilder::new();
    let true_word = builder.string_literal("true");
    let false_word = builder.string_literal("false");
    let fragment = builder.union(true_word, false_word);
    subset_construction(&builder.finish(fragment))
}

/// A single arithmetic operator.
pub fn operator_dfa() -> Dfa {
    one_of_dfa(&['+', '-', '*', '/', '%', '^'])
}

/// The assignment operator.
pub fn assignment_dfa() -> Dfa {
    let mut builder = NfaBuilder::new();
    let fragment = builder.literal('=');
    subset_construction(&builder.finish(fragment))
}

/// A single delimiter character.
pub fn delimiter_dfa() -> Dfa {
    one_of_dfa(&[';', ',', '(', ')', '{', '}', '[', ']'])
}

fn one_of_dfa(chars: &[char]) -> Dfa {
    let mut builder = NfaBuilder::new();
    let mut chars = chars.iter();
    let first = *chars.next().expect("at least one alternative");
    let mut fragment = builder.literal(first);
    for &c in chars {
        let lit = builder.literal(c);
        fragment = builder.union(fragment, lit);
    }
    subset_construction(&builder.finish(fragment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{UNKNOWN, classify};

    #[test]
    fn test_integer() {
        let dfa = integer_dfa();
        assert!(dfa.accepts("0"));
        assert!(dfa.accepts("42"));
        assert!(dfa.accepts("007"));
        assert!(!dfa.accepts(""));
        assert!(!dfa.accepts("4.2"));
        assert!(!dfa.accepts("4a"));
    }

    #[test]
    fn test_decimal() {
        let dfa = decimal_dfa();
        assert!(dfa.accepts("3.14"));
        assert!(dfa.accepts("0.1"));
        assert!(!dfa.accepts("3."));
        assert!(!dfa.accepts(".5"));
        assert!(!dfa.accepts("3"));
    }

    #[test]
    fn test_boolean() {
        let dfa = boolean_dfa();
        assert!(dfa.accepts("true"));
        assert!(dfa.accepts("false"));
        assert!(!dfa.accepts("truee"));
        assert!(!dfa.accepts("tru"));
    }

    #[test]
    fn test_identifier() {
        let dfa = identifier_dfa();
        assert!(dfa.accepts("x"));
        assert!(dfa.accepts("count"));
        assert!(!dfa.accepts("Count"));
        assert!(!dfa.accepts("x1"));
    }

    #[test]
    fn test_single_char_categories() {
        assert!(operator_dfa().accepts("%"));
        assert!(!operator_dfa().accepts("%%"));
        assert!(assignment_dfa().accepts("="));
        assert!(delimiter_dfa().accepts(";"));
        assert!(delimiter_dfa().accepts("["));
        assert!(!delimiter_dfa().accepts("a"));
    }

    #[test]
    fn test_priority_order() {
        let classes = token_classes();
        let names: Vec<&str> = classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "BOOLEAN",
                "INTEGER",
                "DECIMAL",
                "OPERATOR",
                "ASSIGNMENT",
                "DELIMITER",
                "IDENTIFIER"
            ]
        );

        // "true" is also a valid identifier; priority decides.
        assert_eq!(classify("true", &classes), "BOOLEAN");
        assert_eq!(classify("truth", &classes), "IDENTIFIER");
        assert_eq!(classify("3.14", &classes), "DECIMAL");
        assert_eq!(classify("3a", &classes), UNKNOWN);
    }
}
