use crate::automaton::{StateId, SymbolId};
use thiserror::Error;

/// Errors raised while compiling or converting an automaton.
///
/// Recognition itself never fails: an input without a path to a goal node
/// is simply rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    #[error("start node {0} is not a member of the node set")]
    UnknownStartNode(StateId),
    #[error("goal node {0} is not a member of the node set")]
    UnknownGoalNode(StateId),
    #[error("transition {from} --{symbol}--> {to} references node {node} outside the node set")]
    UnknownTransitionNode {
        from: StateId,
        symbol: SymbolId,
        to: StateId,
        node: StateId,
    },
    #[error("epsilon transition {from} --> {to} in a deterministic automaton")]
    EpsilonInDeterministic { from: StateId, to: StateId },
    #[error("state {state} has transitions to both {first} and {second} on symbol {symbol}")]
    NonDeterministic {
        state: StateId,
        symbol: SymbolId,
        first: StateId,
        second: StateId,
    },
    #[error("subset construction exceeded {max} DFA states")]
    StateLimitExceeded { max: usize },
    #[error("DFA node ids starting at {first} cannot number {count} more nodes")]
    NodeIdOverflow { first: StateId, count: usize },
}

pub type Result<T, E = AutomatonError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AutomatonError::NonDeterministic {
            state: 1,
            symbol: 97,
            first: 2,
            second: 3,
        };
        assert_eq!(
            err.to_string(),
            "state 1 has transitions to both 2 and 3 on symbol 97"
        );
        assert_eq!(
            AutomatonError::StateLimitExceeded { max: 8 }.to_string(),
            "subset construction exceeded 8 DFA states"
        );
        assert_eq!(
            AutomatonError::NodeIdOverflow {
                first: u32::MAX,
                count: 1,
            }
            .to_string(),
            "DFA node ids starting at 4294967295 cannot number 1 more nodes"
        );
    }
}
