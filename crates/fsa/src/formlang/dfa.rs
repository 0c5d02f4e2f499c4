//! Deterministic recognition by table lookup.

use crate::Recognizer;
use crate::automaton::{Automaton, StateId, StateSet, SymbolId};
use crate::error::Result;
use std::collections::HashMap;
use tracing::debug;

/// A compiled deterministic finite automaton.
///
/// Nodes are renumbered densely at construction; the transition table maps
/// (state, symbol) to the single destination state. A missing entry means
/// the input can no longer be accepted.
#[derive(Debug, Clone)]
pub struct DeterministicRecognizer {
    /// Start state (dense index)
    start_state: StateId,
    /// Goal (accepting) states (dense indices)
    goal_states: StateSet,
    /// Transitions: (source, symbol) -> destination
    transitions: HashMap<(StateId, SymbolId), StateId>,
}

impl DeterministicRecognizer {
    /// Compile a DFA. Fails if the automaton is malformed, contains an
    /// epsilon transition, or has two destinations for a (state, symbol) pair.
    pub fn new(dfa: &Automaton) -> Result<Self> {
        dfa.validate_deterministic()?;

        let index: HashMap<StateId, StateId> = dfa
            .nodes()
            .iter()
            .enumerate()
            .map(|(idx, &node)| (node, idx as StateId))
            .collect();
        let num_states = index.len();

        let goal_states = dfa
            .goal_nodes()
            .iter()
            .fold(StateSet::with_capacity(num_states), |mut set, node| {
                set.insert(index[node]);
                set
            });
        let transitions: HashMap<(StateId, SymbolId), StateId> = dfa
            .transitions()
            .iter()
            .map(|t| ((index[&t.source], t.symbol), index[&t.destination]))
            .collect();

        debug!(
            states = num_states,
            transitions = transitions.len(),
            "compiled deterministic recognizer"
        );

        Ok(Self {
            start_state: index[&dfa.start_node()],
            goal_states,
            transitions,
        })
    }

    /// Get the transition from a state on a symbol.
    fn transition(&self, source: StateId, symbol: SymbolId) -> Option<StateId> {
        self.transitions.get(&(source, symbol)).copied()
    }

    /// Run the input from the start state. `None` is the dead state: no
    /// transition was defined somewhere along the way.
    fn run(&self, input: &[SymbolId]) -> Option<StateId> {
        input.iter().try_fold(self.start_state, |current, &symbol| {
            self.transition(current, symbol)
        })
    }
}

impl Recognizer for DeterministicRecognizer {
    fn recognize(&self, input: &[SymbolId]) -> bool {
        self.run(input)
            .is_some_and(|state| self.goal_states.contains(state))
    }
}
