//! Non-deterministic recognition with epsilon transitions.

use crate::Recognizer;
use crate::automaton::{Automaton, EPSILON, StateId, StateSet, SymbolId, is_epsilon};
use crate::error::Result;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// A compiled epsilon-NFA.
///
/// Nodes are renumbered densely at construction, and every state set this
/// type hands out or accepts is expressed in those dense indices. Use
/// [`EpsilonNfa::node_ids`] to translate back to the description's ids.
#[derive(Debug, Clone)]
pub struct EpsilonNfa {
    /// Dense index -> node id of the source automaton
    nodes: Vec<StateId>,
    /// Start state (dense index)
    start_state: StateId,
    /// Goal (accepting) states
    goal_states: StateSet,
    /// Transitions: (source, symbol) -> set of destination states
    /// For epsilon transitions, symbol == EPSILON
    transitions: HashMap<(StateId, SymbolId), StateSet>,
    /// Non-epsilon symbols leaving each state
    outgoing_symbols: Vec<BTreeSet<SymbolId>>,
    /// Epsilon closure of each single state
    epsilon_closures: Vec<StateSet>,
}

impl EpsilonNfa {
    /// Compile an automaton that may be non-deterministic and may contain
    /// epsilon transitions. Fails only if the automaton is malformed.
    pub fn new(nfa: &Automaton) -> Result<Self> {
        nfa.validate()?;

        let nodes: Vec<StateId> = nfa.nodes().iter().copied().collect();
        let index: HashMap<StateId, StateId> = nodes
            .iter()
            .enumerate()
            .map(|(idx, &node)| (node, idx as StateId))
            .collect();
        let num_states = nodes.len();

        let mut goal_states = StateSet::with_capacity(num_states);
        for node in nfa.goal_nodes() {
            goal_states.insert(index[node]);
        }

        let mut transitions: HashMap<(StateId, SymbolId), StateSet> = HashMap::new();
        let mut outgoing_symbols = vec![BTreeSet::new(); num_states];
        for transition in nfa.transitions() {
            let source = index[&transition.source];
            transitions
                .entry((source, transition.symbol))
                .or_insert_with(|| StateSet::with_capacity(num_states))
                .insert(index[&transition.destination]);
            if !transition.is_epsilon() {
                outgoing_symbols[source as usize].insert(transition.symbol);
            }
        }

        let epsilon_closures = (0..num_states as StateId)
            .map(|state| Self::closure_of(&transitions, state, num_states))
            .collect();

        debug!(
            states = num_states,
            transitions = nfa.transitions().len(),
            "compiled epsilon-NFA recognizer"
        );

        Ok(Self {
            nodes,
            start_state: index[&nfa.start_node()],
            goal_states,
            transitions,
            outgoing_symbols,
            epsilon_closures,
        })
    }

    /// Expand `{state}` until no epsilon transition leads to a new state.
    fn closure_of(
        transitions: &HashMap<(StateId, SymbolId), StateSet>,
        state: StateId,
        num_states: usize,
    ) -> StateSet {
        let mut closure = StateSet::singleton(state, num_states);
        let mut pending = vec![state];

        while let Some(s) = pending.pop() {
            if let Some(destinations) = transitions.get(&(s, EPSILON)) {
                for dest in destinations.iter() {
                    if closure.insert(dest) {
                        pending.push(dest);
                    }
                }
            }
        }

        closure
    }

    /// Get the number of states.
    pub fn num_states(&self) -> usize {
        self.nodes.len()
    }

    /// Node ids of the source automaton for a set of dense states, ascending
    /// by dense index.
    pub fn node_ids(&self, states: &StateSet) -> Vec<StateId> {
        states.iter().map(|state| self.nodes[state as usize]).collect()
    }

    /// Epsilon closure of the start state.
    pub fn start_closure(&self) -> StateSet {
        self.epsilon_closures[self.start_state as usize].clone()
    }

    /// Get the epsilon closure of a set of states.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = StateSet::with_capacity(self.num_states());
        for state in states.iter() {
            if let Some(cached) = self.epsilon_closures.get(state as usize) {
                closure.union_with(cached);
            }
        }
        closure
    }

    /// Get the states reachable from a set of states on a given symbol,
    /// followed by the epsilon closure of the reached states.
    ///
    /// Epsilon is not an input symbol: moving on it reaches nothing.
    pub fn move_on_symbol(&self, states: &StateSet, symbol: SymbolId) -> StateSet {
        let mut reached = StateSet::with_capacity(self.num_states());
        if is_epsilon(symbol) {
            return reached;
        }

        for state in states.iter() {
            if let Some(destinations) = self.transitions.get(&(state, symbol)) {
                reached.union_with(destinations);
            }
        }

        self.epsilon_closure(&reached)
    }

    /// Non-epsilon symbols with at least one transition out of `states`.
    pub fn next_symbols(&self, states: &StateSet) -> BTreeSet<SymbolId> {
        states
            .iter()
            .filter_map(|state| self.outgoing_symbols.get(state as usize))
            .flatten()
            .copied()
            .collect()
    }

    /// Whether any state of the set is a goal state.
    pub fn is_accepting(&self, states: &StateSet) -> bool {
        states.intersects(&self.goal_states)
    }
}

impl Recognizer for EpsilonNfa {
    fn recognize(&self, input: &[SymbolId]) -> bool {
        let mut frontier = self.start_closure();
        for &symbol in input {
            if frontier.is_empty() {
                return false;
            }
            frontier = self.move_on_symbol(&frontier, symbol);
        }
        self.is_accepting(&frontier)
    }
}
