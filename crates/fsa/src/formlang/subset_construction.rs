//! Subset construction algorithm for converting ε-NFA to DFA.

use crate::automaton::{Automaton, StateId, StateSet, SymbolId};
use crate::config::ConversionConfig;
use crate::error::{AutomatonError, Result};
use crate::formlang::epsilon_nfa::EpsilonNfa;
use indexmap::IndexMap;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// The result of a subset construction: the DFA, and for each DFA node the
/// set of NFA nodes it stands for.
#[derive(Debug, Clone)]
pub struct Conversion {
    dfa: Automaton,
    subsets: IndexMap<StateId, Vec<StateId>>,
}

impl Conversion {
    /// Get the converted DFA.
    pub fn dfa(&self) -> &Automaton {
        &self.dfa
    }

    /// Take the converted DFA, dropping the subset mapping.
    pub fn into_dfa(self) -> Automaton {
        self.dfa
    }

    /// NFA node ids represented by a DFA node, ascending.
    pub fn subset_of(&self, dfa_node: StateId) -> Option<&[StateId]> {
        self.subsets.get(&dfa_node).map(Vec::as_slice)
    }

    /// (DFA node, NFA nodes) pairs in discovery order.
    pub fn subsets(&self) -> impl Iterator<Item = (StateId, &[StateId])> + '_ {
        self.subsets
            .iter()
            .map(|(&node, nfa_nodes)| (node, nfa_nodes.as_slice()))
    }
}

/// Bookkeeping for one conversion: every discovered subset with its DFA id
/// (in discovery order), the subsets still to expand, and the DFA so far.
struct ConversionContext<'a> {
    nfa: &'a EpsilonNfa,
    config: &'a ConversionConfig,
    discovered: IndexMap<StateSet, StateId>,
    pending: VecDeque<StateSet>,
    dfa: Automaton,
}

impl<'a> ConversionContext<'a> {
    fn new(nfa: &'a EpsilonNfa, config: &'a ConversionConfig) -> Self {
        let start = nfa.start_closure();
        let mut context = Self {
            nfa,
            config,
            discovered: IndexMap::new(),
            pending: VecDeque::new(),
            dfa: Automaton::new(config.first_node_id),
        };
        context.discovered.insert(start.clone(), config.first_node_id);
        context.pending.push_back(start);
        context
    }

    /// DFA id of `subset`, minting one and queueing the subset if it is new.
    fn node_for(&mut self, subset: StateSet) -> Result<StateId> {
        if let Some(&existing) = self.discovered.get(&subset) {
            return Ok(existing);
        }

        let count = self.discovered.len();
        if let Some(max) = self.config.max_dfa_states {
            if count >= max {
                return Err(AutomatonError::StateLimitExceeded { max });
            }
        }

        let id = StateId::try_from(count)
            .ok()
            .and_then(|offset| self.config.first_node_id.checked_add(offset))
            .ok_or(AutomatonError::NodeIdOverflow {
                first: self.config.first_node_id,
                count,
            })?;
        trace!(dfa_node = id, nfa_nodes = ?self.nfa.node_ids(&subset), "discovered subset");
        self.dfa.add_node(id);
        self.discovered.insert(subset.clone(), id);
        self.pending.push_back(subset);
        Ok(id)
    }

    /// Emit the DFA transitions leaving `current`.
    fn expand(&mut self, current: StateSet) -> Result<()> {
        let source = self.discovered[&current];
        let symbols: Vec<SymbolId> = self.nfa.next_symbols(&current).into_iter().collect();

        for symbol in symbols {
            let next = self.nfa.move_on_symbol(&current, symbol);
            let destination = self.node_for(next)?;
            self.dfa.add_transition(source, symbol, destination);
        }
        Ok(())
    }

    fn finish(mut self) -> Conversion {
        let mut subsets = IndexMap::with_capacity(self.discovered.len());
        for (subset, id) in self.discovered {
            if self.nfa.is_accepting(&subset) {
                self.dfa.add_goal_node(id);
            }
            subsets.insert(id, self.nfa.node_ids(&subset));
        }
        Conversion {
            dfa: self.dfa,
            subsets,
        }
    }
}

/// Convert an epsilon-NFA to a DFA using the powerset construction algorithm.
///
/// Each reachable set of NFA states becomes one DFA node. Symbols with no
/// transition out of a set produce no DFA edge, so the result is partial.
pub fn subset_construction(nfa: &Automaton, config: &ConversionConfig) -> Result<Conversion> {
    let compiled = EpsilonNfa::new(nfa)?;
    if config.max_dfa_states == Some(0) {
        return Err(AutomatonError::StateLimitExceeded { max: 0 });
    }

    let mut context = ConversionContext::new(&compiled, config);
    while let Some(current) = context.pending.pop_front() {
        context.expand(current)?;
    }

    let conversion = context.finish();
    debug!(
        nfa_states = compiled.num_states(),
        dfa_states = conversion.dfa.nodes().len(),
        dfa_transitions = conversion.dfa.transitions().len(),
        "subset construction finished"
    );
    Ok(conversion)
}

/// Convert an epsilon-NFA to an equivalent DFA with default settings.
pub fn convert_nfa_epsilon_to_dfa(nfa: &Automaton) -> Result<Automaton> {
    subset_construction(nfa, &ConversionConfig::default()).map(Conversion::into_dfa)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Recognizer;
    use crate::formlang::dfa::DeterministicRecognizer;

    #[test]
    fn test_subset_construction_basic() {
        // NFA: 0 -a-> 1, 0 -a-> 2, 1 -b-> 3(goal), 2 -b-> 3(goal)
        let mut nfa = Automaton::new(0);
        nfa.add_transition(0, 0, 1); // 'a' = 0
        nfa.add_transition(0, 0, 2);
        nfa.add_transition(1, 1, 3); // 'b' = 1
        nfa.add_transition(2, 1, 3);
        nfa.add_goal_node(3);

        let conversion = subset_construction(&nfa, &ConversionConfig::default()).unwrap();
        let dfa = conversion.dfa();

        assert_eq!(dfa.start_node(), 0);
        assert_eq!(dfa.nodes().len(), 3);
        assert_eq!(dfa.transitions().len(), 2);
        assert!(dfa.is_deterministic());
        assert_eq!(conversion.subset_of(0), Some(&[0][..]));
        assert_eq!(conversion.subset_of(1), Some(&[1, 2][..]));
        assert_eq!(conversion.subset_of(2), Some(&[3][..]));
        assert_eq!(dfa.goal_nodes().iter().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_subset_construction_with_epsilon() {
        // NFA: 0 -ε-> 1 -a-> 2(goal)
        let mut nfa = Automaton::new(0);
        nfa.add_epsilon_transition(0, 1);
        nfa.add_transition(1, 0, 2); // 'a' = 0
        nfa.add_goal_node(2);

        let conversion = subset_construction(&nfa, &ConversionConfig::default()).unwrap();

        // Start node is the epsilon closure {0, 1}.
        assert_eq!(conversion.subset_of(0), Some(&[0, 1][..]));
        let recognizer = DeterministicRecognizer::new(conversion.dfa()).unwrap();
        assert!(recognizer.recognize(&[0]));
        assert!(!recognizer.recognize(&[]));
        assert!(!recognizer.recognize(&[0, 0]));
    }

    #[test]
    fn test_shared_subset_gets_one_node() {
        // Both symbols from 0 reach {1}, which must be minted once.
        let mut nfa = Automaton::new(0);
        nfa.add_transition(0, 1, 1);
        nfa.add_transition(0, 2, 1);
        nfa.add_transition(1, 1, 0);

        let dfa = convert_nfa_epsilon_to_dfa(&nfa).unwrap();
        assert_eq!(dfa.nodes().len(), 2);
        assert_eq!(dfa.transitions().len(), 3);
        assert!(dfa.goal_nodes().is_empty());
    }

    #[test]
    fn test_first_node_id() {
        let mut nfa = Automaton::new(0);
        nfa.add_transition(0, 1, 1);
        nfa.add_goal_node(1);

        let config = ConversionConfig::default().with_first_node_id(1);
        let conversion = subset_construction(&nfa, &config).unwrap();
        let dfa = conversion.dfa();
        assert_eq!(dfa.start_node(), 1);
        assert_eq!(dfa.nodes().iter().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(
            conversion.subsets().map(|(id, _)| id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_first_node_id_overflow() {
        let mut nfa = Automaton::new(0);
        nfa.add_transition(0, 1, 1);
        nfa.add_goal_node(1);

        let config = ConversionConfig::default().with_first_node_id(StateId::MAX);
        assert_eq!(
            subset_construction(&nfa, &config).unwrap_err(),
            AutomatonError::NodeIdOverflow {
                first: StateId::MAX,
                count: 1,
            }
        );

        // A single-node DFA still fits at the top of the id space.
        let mut single = Automaton::new(0);
        single.add_goal_node(0);
        let dfa = convert_with(&single, &config);
        assert_eq!(dfa.start_node(), StateId::MAX);
        assert!(dfa.is_goal_node(StateId::MAX));
    }

    fn convert_with(nfa: &Automaton, config: &ConversionConfig) -> Automaton {
        subset_construction(nfa, config).unwrap().into_dfa()
    }

    #[test]
    fn test_state_limit() {
        let mut nfa = Automaton::new(0);
        nfa.add_transition(0, 1, 1);
        nfa.add_transition(1, 1, 2);
        nfa.add_goal_node(2);

        let config = ConversionConfig::default().with_max_dfa_states(2);
        assert_eq!(
            subset_construction(&nfa, &config).unwrap_err(),
            AutomatonError::StateLimitExceeded { max: 2 }
        );

        let config = ConversionConfig::default().with_max_dfa_states(3);
        assert!(subset_construction(&nfa, &config).is_ok());
    }

    #[test]
    fn test_input_is_untouched() {
        let mut nfa = Automaton::new(0);
        nfa.add_epsilon_transition(0, 1);
        nfa.add_transition(1, 3, 0);
        nfa.add_goal_node(1);
        let before = nfa.clone();

        let _ = convert_nfa_epsilon_to_dfa(&nfa).unwrap();
        assert_eq!(nfa, before);
    }

    #[test]
    fn test_malformed_input() {
        let malformed = Automaton::from_parts([0], 0, [1], []);
        assert_eq!(
            convert_nfa_epsilon_to_dfa(&malformed).unwrap_err(),
            AutomatonError::UnknownGoalNode(1)
        );
    }
}
