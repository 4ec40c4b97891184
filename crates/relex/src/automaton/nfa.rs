//! Thompson construction: NFA fragments, the builder arena, and the
//! completed automaton.
//!
//! All states live in one arena owned by an [`NfaBuilder`]; fragments
//! reference states by handle. Combinators consume their operand
//! fragments by value, so a spliced fragment cannot be reused.

use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::{EPSILON, Label, is_epsilon};
use crate::error::RangeError;
use crate::pattern::PostfixToken;
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// An outgoing edge: a label and the target state handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub label: Label,
    pub to: StateId,
}

/// Which closure operator to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosureKind {
    Star,
    Plus,
    Optional,
}

/// A Thompson fragment inside a builder's arena.
///
/// Every member state is reachable from `start`, and `end` has no
/// outgoing transitions until the fragment is spliced into a larger one.
#[derive(Debug)]
pub struct Fragment {
    start: StateId,
    end: StateId,
    states: StateSet,
}

impl Fragment {
    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn end(&self) -> StateId {
        self.end
    }

    pub fn states(&self) -> &StateSet {
        &self.states
    }
}

/// Arena-backed constructor for Thompson fragments.
///
/// One builder corresponds to one compilation run: state identifiers are
/// assigned monotonically from its arena and are never shared with other
/// builders, so independently compiled automatons can never collide.
#[derive(Debug, Default)]
pub struct NfaBuilder {
    /// Outgoing transitions per state; the index is the state id.
    transitions: Vec<Vec<Transition>>,
}

impl NfaBuilder {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    fn add_state(&mut self) -> StateId {
        let id = self.transitions.len() as StateId;
        self.transitions.push(Vec::new());
        id
    }

    fn add_transition(&mut self, from: StateId, label: Label, to: StateId) {
        self.transitions[from as usize].push(Transition { label, to });
    }

    /// Two-state fragment recognizing exactly the character `c`.
    pub fn literal(&mut self, c: char) -> Fragment {
        let start = self.add_state();
        let end = self.add_state();
        self.add_transition(start, Some(c), end);
        let mut states = StateSet::with_capacity(self.transitions.len());
        states.insert(start);
        states.insert(end);
        Fragment { start, end, states }
    }

    /// Fragment recognizing any single character in `[lo, hi]`, built as
    /// the union of the individual literals.
    pub fn char_range(&mut self, lo: char, hi: char) -> Result<Fragment, RangeError> {
        if lo > hi {
            return Err(RangeError { lo, hi });
        }
        let mut result: Option<Fragment> = None;
        for c in lo..=hi {
            let lit = self.literal(c);
            result = Some(match result {
                Some(acc) => self.union(acc, lit),
                None => lit,
            });
        }
        Ok(result.expect("range is non-empty"))
    }

    /// Fragment recognizing exactly the string `s`.
    ///
    /// The empty string yields a single-state fragment whose start is its
    /// end, accepting immediately.
    pub fn string_literal(&mut self, s: &str) -> Fragment {
        let mut chars = s.chars();
        let Some(first) = chars.next() else {
            let only = self.add_state();
            return Fragment {
                start: only,
                end: only,
                states: StateSet::singleton(only, self.transitions.len()),
            };
        };
        let mut result = self.literal(first);
        for c in chars {
            let next = self.literal(c);
            result = self.concatenate(result, next);
        }
        result
    }

    /// Fragment recognizing either operand's language.
    pub fn union(&mut self, a: Fragment, b: Fragment) -> Fragment {
        let start = self.add_state();
        let end = self.add_state();
        self.add_transition(start, EPSILON, a.start);
        self.add_transition(start, EPSILON, b.start);
        self.add_transition(a.end, EPSILON, end);
        self.add_transition(b.end, EPSILON, end);
        let mut states = a.states;
        states.union_with(&b.states);
        states.insert(start);
        states.insert(end);
        Fragment { start, end, states }
    }

    /// Fragment recognizing `a`'s language followed by `b`'s.
    pub fn concatenate(&mut self, a: Fragment, b: Fragment) -> Fragment {
        self.add_transition(a.end, EPSILON, b.start);
        let mut states = a.states;
        states.union_with(&b.states);
        Fragment {
            start: a.start,
            end: b.end,
            states,
        }
    }

    /// Wrap a fragment in a closure operator.
    ///
    /// The new start always reaches `inner.start` by epsilon. `Star` and
    /// `Optional` additionally permit zero occurrences (start → end);
    /// `Star` and `Plus` additionally permit repetition (inner.end →
    /// inner.start).
    pub fn closure(&mut self, inner: Fragment, kind: ClosureKind) -> Fragment {
        let start = self.add_state();
        let end = self.add_state();
        self.add_transition(start, EPSILON, inner.start);
        if matches!(kind, ClosureKind::Star | ClosureKind::Optional) {
            self.add_transition(start, EPSILON, end);
        }
        self.add_transition(inner.end, EPSILON, end);
        if matches!(kind, ClosureKind::Star | ClosureKind::Plus) {
            self.add_transition(inner.end, EPSILON, inner.start);
        }
        let mut states = inner.states;
        states.insert(start);
        states.insert(end);
        Fragment { start, end, states }
    }

    /// Zero or more occurrences.
    pub fn star(&mut self, inner: Fragment) -> Fragment {
        self.closure(inner, ClosureKind::Star)
    }

    /// One or more occurrences.
    pub fn plus(&mut self, inner: Fragment) -> Fragment {
        self.closure(inner, ClosureKind::Plus)
    }

    /// Zero or one occurrence.
    pub fn optional(&mut self, inner: Fragment) -> Fragment {
        self.closure(inner, ClosureKind::Optional)
    }

    /// Seal the arena into a completed automaton rooted at `fragment`.
    pub fn finish(self, fragment: Fragment) -> Nfa {
        let mut alphabet = BTreeSet::new();
        for state in fragment.states.iter() {
            for transition in &self.transitions[state as usize] {
                if let Some(c) = transition.label {
                    alphabet.insert(c);
                }
            }
        }
        Nfa {
            transitions: self.transitions,
            start: fragment.start,
            accept: fragment.end,
            states: fragment.states,
            alphabet,
        }
    }
}

/// A completed nondeterministic finite automaton.
///
/// Immutable once built. The member state set exists for bookkeeping and
/// printing; traversal follows transitions only.
#[derive(Debug, Clone)]
pub struct Nfa {
    transitions: Vec<Vec<Transition>>,
    start: StateId,
    accept: StateId,
    states: StateSet,
    alphabet: BTreeSet<char>,
}

impl Nfa {
    /// Get the start state.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Get the accepting state.
    pub fn accept(&self) -> StateId {
        self.accept
    }

    /// Get the member state set.
    pub fn states(&self) -> &StateSet {
        &self.states
    }

    /// Get the number of member states.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Get the alphabet: every concrete symbol on a transition, sorted.
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// Compute the epsilon closure of a set of states using DFS.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = StateSet::with_capacity(self.transitions.len());
        let mut stack: Vec<StateId> = states.iter().collect();

        while let Some(s) = stack.pop() {
            if closure.contains(s) {
                continue;
            }
            closure.insert(s);

            for transition in &self.transitions[s as usize] {
                if is_epsilon(transition.label) && !closure.contains(transition.to) {
                    stack.push(transition.to);
                }
            }
        }

        closure
    }

    /// Get the states reachable from a set of states on a given symbol.
    /// Returns the epsilon closure of the reached states.
    pub fn move_on_symbol(&self, states: &StateSet, symbol: char) -> StateSet {
        let mut reached = StateSet::with_capacity(self.transitions.len());

        for s in states.iter() {
            for transition in &self.transitions[s as usize] {
                if transition.label == Some(symbol) {
                    reached.insert(transition.to);
                }
            }
        }

        self.epsilon_closure(&reached)
    }

    /// Get all transitions as an iterator, in state order then insertion
    /// order.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Label, StateId)> + '_ {
        self.states.iter().flat_map(move |s| {
            self.transitions[s as usize]
                .iter()
                .map(move |t| (s, t.label, t.to))
        })
    }

    /// Convert to a map representation for table rendering.
    pub fn to_transition_map(&self) -> IndexMap<StateId, Vec<(Label, StateId)>> {
        let mut map: IndexMap<StateId, Vec<(Label, StateId)>> = IndexMap::new();

        for (from, label, to) in self.transitions() {
            map.entry(from).or_default().push((label, to));
        }

        map
    }
}

/// Assemble an NFA from a postfix operator sequence.
///
/// Each literal pushes a fragment; each operator pops its operands and
/// pushes the combined fragment. An operator finding too few operands is
/// a contract violation by the producer of the sequence and panics. The
/// empty sequence is the empty concatenation: it yields the automaton
/// accepting exactly the empty string.
pub fn build_nfa(postfix: &[PostfixToken]) -> Nfa {
    let mut builder = NfaBuilder::new();

    if postfix.is_empty() {
        let empty = builder.string_literal("");
        return builder.finish(empty);
    }

    let mut stack: Vec<Fragment> = Vec::new();
    for &token in postfix {
        let fragment = match token {
            PostfixToken::Literal(c) => builder.literal(c),
            PostfixToken::Union => {
                let right = stack.pop().expect("union requires two operands");
                let left = stack.pop().expect("union requires two operands");
                builder.union(left, right)
            }
            PostfixToken::Concat => {
                let right = stack.pop().expect("concatenation requires two operands");
                let left = stack.pop().expect("concatenation requires two operands");
                builder.concatenate(left, right)
            }
            PostfixToken::Star => {
                let inner = stack.pop().expect("star requires an operand");
                builder.closure(inner, ClosureKind::Star)
            }
            PostfixToken::Plus => {
                let inner = stack.pop().expect("plus requires an operand");
                builder.closure(inner, ClosureKind::Plus)
            }
            PostfixToken::Optional => {
                let inner = stack.pop().expect("optional requires an operand");
                builder.closure(inner, ClosureKind::Optional)
            }
        };
        stack.push(fragment);
    }

    let fragment = stack.pop().expect("postfix sequence left no operand");
    assert!(
        stack.is_empty(),
        "postfix sequence left {} unconsumed operands",
        stack.len()
    );
    builder.finish(fragment)
}
