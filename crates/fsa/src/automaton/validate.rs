//! Well-formedness checks run before an automaton is compiled or converted.

use crate::automaton::machine::Automaton;
use crate::error::{AutomatonError, Result};

impl Automaton {
    /// Check that the start node, every goal node and every transition
    /// endpoint belong to the node set.
    pub fn validate(&self) -> Result<()> {
        if !self.nodes().contains(&self.start_node()) {
            return Err(AutomatonError::UnknownStartNode(self.start_node()));
        }
        if let Some(&goal) = self.goal_nodes().difference(self.nodes()).next() {
            return Err(AutomatonError::UnknownGoalNode(goal));
        }
        for transition in self.transitions() {
            for node in [transition.source, transition.destination] {
                if !self.nodes().contains(&node) {
                    return Err(AutomatonError::UnknownTransitionNode {
                        from: transition.source,
                        symbol: transition.symbol,
                        to: transition.destination,
                        node,
                    });
                }
            }
        }
        Ok(())
    }

    /// [`Automaton::validate`], plus the DFA invariants: no epsilon
    /// transitions and no two destinations for one (state, symbol) pair.
    pub fn validate_deterministic(&self) -> Result<()> {
        self.validate()?;
        match self.find_conflict() {
            None => Ok(()),
            Some((transition, None)) => Err(AutomatonError::EpsilonInDeterministic {
                from: transition.source,
                to: transition.destination,
            }),
            Some((transition, Some(first))) => Err(AutomatonError::NonDeterministic {
                state: transition.source,
                symbol: transition.symbol,
                first,
                second: transition.destination,
            }),
        }
    }
}
