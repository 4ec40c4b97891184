//! Algebraic laws of the automaton operators, checked on random inputs
//! with the `regex` crate as an oracle where one applies.

use proptest::prelude::*;
use regex::Regex;
use relex::compile_dfa;

/// Full-match oracle for patterns that mean the same thing in both
/// dialects (no escapes or classes).
fn oracle(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{pattern})$")).unwrap()
}

proptest! {
    #[test]
    fn matches_oracle_on_shared_dialect(s in "[abc]{0,8}") {
        for pattern in ["a(b|c)*", "(a|b)+c?", "a?b?c?", "(ab|ba)*", "a+b+", "(a|b)(b|c)"] {
            let dfa = compile_dfa(pattern).unwrap();
            let re = oracle(pattern);
            prop_assert_eq!(dfa.accepts(&s), re.is_match(&s), "pattern {}", pattern);
        }
    }

    #[test]
    fn union_law(s in "[ab]{0,6}") {
        let left = compile_dfa("aa").unwrap();
        let right = compile_dfa("ab*").unwrap();
        let union = compile_dfa("aa|ab*").unwrap();
        prop_assert_eq!(
            union.accepts(&s),
            left.accepts(&s) || right.accepts(&s)
        );
    }

    #[test]
    fn concatenation_law(s in "[ab]{0,8}") {
        let head = compile_dfa("a+").unwrap();
        let tail = compile_dfa("ba*").unwrap();
        let combined = compile_dfa("a+(ba*)").unwrap();
        let split_exists =
            (0..=s.len()).any(|i| head.accepts(&s[..i]) && tail.accepts(&s[i..]));
        prop_assert_eq!(combined.accepts(&s), split_exists);
    }

    #[test]
    fn star_law(s in "[ab]{0,8}") {
        let starred = compile_dfa("(ab)*").unwrap();
        // s is accepted exactly when it is zero or more copies of "ab".
        let expected = s.len() % 2 == 0 && s.as_bytes().chunks(2).all(|c| c == b"ab");
        prop_assert_eq!(starred.accepts(&s), expected);
    }

    #[test]
    fn plus_law(s in "[ab]{0,8}") {
        let starred = compile_dfa("(ab)*").unwrap();
        let plussed = compile_dfa("(ab)+").unwrap();
        // Plus agrees with star everywhere except the empty string.
        let expected = !s.is_empty() && starred.accepts(&s);
        prop_assert_eq!(plussed.accepts(&s), expected);
    }

    #[test]
    fn determinization_is_idempotent(s in "[abc]{0,8}") {
        let first = compile_dfa("a(b|c)*").unwrap();
        let second = compile_dfa("a(b|c)*").unwrap();
        prop_assert_eq!(first.num_states(), second.num_states());
        prop_assert_eq!(first.accepts(&s), second.accepts(&s));
    }
}

#[test]
fn star_accepts_empty_and_plus_does_not() {
    assert!(compile_dfa("(ab)*").unwrap().accepts(""));
    assert!(!compile_dfa("(ab)+").unwrap().accepts(""));
}
