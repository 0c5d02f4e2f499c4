//! Finite automaton recognition and NFA-ε to DFA conversion.
//!
//! An [`Automaton`] describes nodes, a start node, goal nodes and
//! transitions, with [`EPSILON`] marking transitions taken without reading
//! input. It can be compiled into a [`DeterministicRecognizer`] (for DFAs)
//! or an [`EpsilonNfa`] (for anything well-formed), or converted into an
//! equivalent DFA with [`convert_nfa_epsilon_to_dfa`].
//!
//! ```
//! use fsa::{Automaton, DeterministicRecognizer, EpsilonNfa, Recognizer, from_char};
//!
//! // a* | b
//! let mut nfa = Automaton::new(0);
//! nfa.add_epsilon_transition(0, 1);
//! nfa.add_transition(1, from_char('a'), 1);
//! nfa.add_transition(0, from_char('b'), 2);
//! nfa.add_goal_node(1);
//! nfa.add_goal_node(2);
//!
//! let dfa = fsa::convert_nfa_epsilon_to_dfa(&nfa)?;
//! let nfa = EpsilonNfa::new(&nfa)?;
//! let dfa = DeterministicRecognizer::new(&dfa)?;
//! for input in ["", "aaa", "b"] {
//!     assert!(nfa.recognize_str(input) && dfa.recognize_str(input));
//! }
//! assert!(!nfa.recognize_str("ab") && !dfa.recognize_str("ab"));
//! # Ok::<(), fsa::AutomatonError>(())
//! ```

pub mod automaton;
pub mod config;
pub mod error;
pub mod formlang;

pub use automaton::{
    Automaton, EPSILON, StateId, StateSet, SymbolId, Transition, from_char, is_epsilon, symbols,
};
pub use config::ConversionConfig;
pub use error::{AutomatonError, Result};
pub use formlang::{
    Conversion, DeterministicRecognizer, EpsilonNfa, convert_nfa_epsilon_to_dfa,
    subset_construction,
};

/// Answers acceptance queries against a compiled automaton.
///
/// Compiled tables are read-only after construction, so one recognizer can
/// serve any number of queries, from any number of threads.
pub trait Recognizer {
    /// Whether the automaton accepts the whole input sequence.
    fn recognize(&self, input: &[SymbolId]) -> bool;

    /// [`Recognizer::recognize`] over the characters of `input`.
    fn recognize_str(&self, input: &str) -> bool {
        self.recognize(&symbols(input))
    }
}
