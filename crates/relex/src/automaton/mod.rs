//! Finite-automaton core: Thompson NFA construction, subset-construction
//! determinization, and DFA matching.

pub mod dfa;
pub mod nfa;
pub mod state;
pub mod subset_construction;
pub mod symbol;

pub use dfa::Dfa;
pub use nfa::{ClosureKind, Fragment, Nfa, NfaBuilder, Transition, build_nfa};
pub use state::{StateId, StateSet};
pub use subset_construction::subset_construction;
pub use symbol::{EPSILON, Label, is_epsilon};
