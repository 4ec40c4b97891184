//! Subset construction algorithm for converting an NFA to a DFA.

use crate::automaton::dfa::Dfa;
use crate::automaton::nfa::Nfa;
use crate::automaton::state::{StateId, StateSet};
use indexmap::IndexMap;
use std::collections::VecDeque;

/// Convert an NFA to an equivalent DFA using the powerset construction.
///
/// Each DFA state corresponds to a set of NFA states, interned by its
/// canonical sorted handle sequence so that independently computed
/// closures over the same set collide to one state. Termination is
/// guaranteed: at most 2^n distinct subsets exist and each is processed
/// once. Alphabet enumeration is sorted, which fixes id assignment and
/// diagnostic ordering but never the accepted language.
pub fn subset_construction(nfa: &Nfa) -> Dfa {
    let mut state_mapping: IndexMap<Vec<StateId>, StateId> = IndexMap::new();
    let mut dfa = Dfa::new(nfa.alphabet().clone());
    let alphabet: Vec<char> = nfa.alphabet().iter().copied().collect();

    // Queue of DFA states to process (as NFA state sets).
    let mut worklist: VecDeque<StateSet> = VecDeque::new();

    // The initial DFA state is the epsilon closure of the NFA start state.
    let initial = nfa.epsilon_closure(&StateSet::singleton(nfa.start(), nfa.num_states()));
    let initial_key = initial.to_vec();
    let initial_id = dfa.add_state(initial_key.clone());
    dfa.set_start(initial_id);
    if initial.contains(nfa.accept()) {
        dfa.add_final_state(initial_id);
    }
    state_mapping.insert(initial_key, initial_id);
    worklist.push_back(initial);

    while let Some(current) = worklist.pop_front() {
        let current_id = state_mapping[&current.to_vec()];

        for &symbol in &alphabet {
            // All NFA states reachable on this symbol, epsilon-closed.
            let next = nfa.move_on_symbol(&current, symbol);

            if next.is_empty() {
                // No transition on this symbol: implicit reject.
                continue;
            }

            let key = next.to_vec();
            let next_id = if let Some(&existing) = state_mapping.get(&key) {
                existing
            } else {
                let id = dfa.add_state(key.clone());
                if next.contains(nfa.accept()) {
                    dfa.add_final_state(id);
                }
                state_mapping.insert(key, id);
                worklist.push_back(next);
                id
            };

            dfa.add_transition(current_id, symbol, next_id);
        }
    }

    dfa
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::nfa::{NfaBuilder, build_nfa};
    use crate::pattern::compile;

    #[test]
    fn test_subset_construction_basic() {
        let mut builder = NfaBuilder::new();
        let a = builder.literal('a');
        let b = builder.literal('b');
        let fragment = builder.concatenate(a, b);
        let nfa = builder.finish(fragment);

        let dfa = subset_construction(&nfa);
        assert!(dfa.start().is_some());
        assert!(!dfa.final_states().is_empty());
        assert!(dfa.accepts("ab"));
        assert!(!dfa.accepts("a"));
        assert!(!dfa.accepts("ba"));
    }

    #[test]
    fn test_subset_construction_with_epsilon() {
        // a? reaches the accept state both with and without input.
        let mut builder = NfaBuilder::new();
        let a = builder.literal('a');
        let fragment = builder.optional(a);
        let nfa = builder.finish(fragment);

        let dfa = subset_construction(&nfa);
        assert!(dfa.accepts(""));
        assert!(dfa.accepts("a"));
        assert!(!dfa.accepts("aa"));
    }

    #[test]
    fn test_overlapping_closures_intern_to_one_state() {
        // (a|ab)* revisits the same subset along different paths; the
        // canonical key must collapse them rather than duplicate states.
        let dfa = subset_construction(&build_nfa(&compile("(a|ab)*").unwrap()));
        assert!(dfa.accepts(""));
        assert!(dfa.accepts("a"));
        assert!(dfa.accepts("ab"));
        assert!(dfa.accepts("aab"));
        assert!(!dfa.accepts("b"));
        assert!(dfa.num_states() <= 8);
    }

    #[test]
    fn test_determinization_is_stable() {
        let nfa = build_nfa(&compile("a(b|c)*").unwrap());
        let first = subset_construction(&nfa);
        let second = subset_construction(&nfa);

        assert_eq!(first.num_states(), second.num_states());
        assert_eq!(first.final_states().len(), second.final_states().len());
        for input in ["", "a", "abc", "abcbcb", "b", "ab c"] {
            assert_eq!(first.accepts(input), second.accepts(input));
        }
    }

    #[test]
    fn test_dead_symbol_has_no_transition() {
        // "ab" from the start state has no 'b' entry; the table is partial.
        let dfa = subset_construction(&build_nfa(&compile("ab").unwrap()));
        let start = dfa.start().unwrap();
        assert_eq!(dfa.transition(start, 'b'), None);
        assert!(dfa.transition(start, 'a').is_some());
    }
}
