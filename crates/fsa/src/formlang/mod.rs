//! Formal language automata: recognition and NFA-ε to DFA conversion.
//!
//! - Deterministic recognition by table lookup
//! - Non-deterministic recognition over a frontier of active states, closed
//!   under epsilon transitions after every symbol
//! - Subset construction (NFA-ε to DFA conversion)

mod dfa;
mod epsilon_nfa;
mod subset_construction;

pub use dfa::DeterministicRecognizer;
pub use epsilon_nfa::EpsilonNfa;
pub use subset_construction::{Conversion, convert_nfa_epsilon_to_dfa, subset_construction};
