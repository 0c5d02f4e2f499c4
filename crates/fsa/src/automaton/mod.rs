//! The automaton model: symbols, states, transitions and descriptions.

mod machine;
mod state;
mod symbol;
mod validate;

pub use machine::{Automaton, Transition};
pub use state::{StateId, StateSet};
pub use symbol::{EPSILON, SymbolId, from_char, is_epsilon, symbols};
