//! The automaton description shared by the recognizers and the converter.

use crate::automaton::state::StateId;
use crate::automaton::symbol::{EPSILON, SymbolId, is_epsilon};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// A single labeled edge of an automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Transition {
    pub source: StateId,
    pub symbol: SymbolId,
    pub destination: StateId,
}

impl Transition {
    /// Create a transition on `symbol`.
    pub fn new(source: StateId, symbol: SymbolId, destination: StateId) -> Self {
        Self {
            source,
            symbol,
            destination,
        }
    }

    /// Create an epsilon transition.
    pub fn epsilon(source: StateId, destination: StateId) -> Self {
        Self::new(source, EPSILON, destination)
    }

    /// Check if this is an epsilon transition.
    #[inline]
    pub fn is_epsilon(&self) -> bool {
        is_epsilon(self.symbol)
    }
}

/// A finite automaton: nodes, one start node, goal nodes and transitions.
///
/// The same type describes both DFAs and NFA-ε automata; which invariants
/// hold is checked by [`Automaton::validate`] and
/// [`Automaton::validate_deterministic`]. Recognizers and the converter only
/// read an automaton, they never modify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Automaton {
    nodes: BTreeSet<StateId>,
    start_node: StateId,
    goal_nodes: BTreeSet<StateId>,
    transitions: Vec<Transition>,
}

impl Automaton {
    /// Create an automaton holding only its start node.
    pub fn new(start_node: StateId) -> Self {
        Self {
            nodes: BTreeSet::from([start_node]),
            start_node,
            goal_nodes: BTreeSet::new(),
            transitions: Vec::new(),
        }
    }

    /// Build an automaton from its four components as given, without
    /// adding implied nodes. Use [`Automaton::validate`] to check the result.
    pub fn from_parts(
        nodes: impl IntoIterator<Item = StateId>,
        start_node: StateId,
        goal_nodes: impl IntoIterator<Item = StateId>,
        transitions: impl IntoIterator<Item = Transition>,
    ) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
            start_node,
            goal_nodes: goal_nodes.into_iter().collect(),
            transitions: transitions.into_iter().collect(),
        }
    }

    /// Add a node.
    pub fn add_node(&mut self, node: StateId) {
        self.nodes.insert(node);
    }

    /// Add a goal (accepting) node, adding it to the node set as well.
    pub fn add_goal_node(&mut self, node: StateId) {
        self.nodes.insert(node);
        self.goal_nodes.insert(node);
    }

    /// Add a transition, adding both endpoints to the node set.
    pub fn add_transition(&mut self, source: StateId, symbol: SymbolId, destination: StateId) {
        self.nodes.insert(source);
        self.nodes.insert(destination);
        self.transitions
            .push(Transition::new(source, symbol, destination));
    }

    /// Add an epsilon transition from source to destination.
    pub fn add_epsilon_transition(&mut self, source: StateId, destination: StateId) {
        self.add_transition(source, EPSILON, destination);
    }

    /// Get the nodes.
    pub fn nodes(&self) -> &BTreeSet<StateId> {
        &self.nodes
    }

    /// Get the start node.
    pub fn start_node(&self) -> StateId {
        self.start_node
    }

    /// Get the goal (accepting) nodes.
    pub fn goal_nodes(&self) -> &BTreeSet<StateId> {
        &self.goal_nodes
    }

    /// Get all transitions, in insertion order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Check if a node is a goal node.
    pub fn is_goal_node(&self, node: StateId) -> bool {
        self.goal_nodes.contains(&node)
    }

    /// All symbols used by transitions, excluding epsilon.
    pub fn alphabet(&self) -> BTreeSet<SymbolId> {
        self.transitions
            .iter()
            .filter(|t| !t.is_epsilon())
            .map(|t| t.symbol)
            .collect()
    }

    /// Whether the transitions satisfy the DFA invariants: no epsilon
    /// transitions, and at most one destination per (state, symbol) pair.
    pub fn is_deterministic(&self) -> bool {
        self.find_conflict().is_none()
    }

    /// First transition that breaks the DFA invariants, together with the
    /// earlier destination it conflicts with (`None` for epsilon edges).
    pub(crate) fn find_conflict(&self) -> Option<(Transition, Option<StateId>)> {
        let mut seen: HashMap<(StateId, SymbolId), StateId> = HashMap::new();
        for transition in &self.transitions {
            if transition.is_epsilon() {
                return Some((*transition, None));
            }
            let previous = *seen
                .entry((transition.source, transition.symbol))
                .or_insert(transition.destination);
            if previous != transition.destination {
                return Some((*transition, Some(previous)));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::symbol::from_char;

    #[test]
    fn test_builder_collects_nodes() {
        let mut automaton = Automaton::new(0);
        automaton.add_transition(0, from_char('a'), 1);
        automaton.add_epsilon_transition(1, 2);
        automaton.add_goal_node(3);

        assert_eq!(automaton.start_node(), 0);
        assert_eq!(automaton.nodes().iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert!(automaton.is_goal_node(3));
        assert!(!automaton.is_goal_node(2));
        assert_eq!(automaton.transitions().len(), 2);
        assert!(automaton.transitions()[1].is_epsilon());
    }

    #[test]
    fn test_alphabet_excludes_epsilon() {
        let mut automaton = Automaton::new(0);
        automaton.add_transition(0, 7, 1);
        automaton.add_transition(1, 3, 1);
        automaton.add_transition(1, 7, 0);
        automaton.add_epsilon_transition(0, 1);

        assert_eq!(automaton.alphabet().into_iter().collect::<Vec<_>>(), vec![3, 7]);
    }

    #[test]
    fn test_is_deterministic() {
        let mut automaton = Automaton::new(0);
        automaton.add_transition(0, 1, 1);
        automaton.add_transition(0, 2, 0);
        // An exact duplicate does not break determinism.
        automaton.add_transition(0, 1, 1);
        assert!(automaton.is_deterministic());

        let mut conflicting = automaton.clone();
        conflicting.add_transition(0, 1, 2);
        assert!(!conflicting.is_deterministic());

        let mut with_epsilon = automaton;
        with_epsilon.add_epsilon_transition(1, 0);
        assert!(!with_epsilon.is_deterministic());
    }
}
