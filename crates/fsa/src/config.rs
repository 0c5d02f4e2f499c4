use crate::automaton::StateId;

/// Settings for subset construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Identifier given to the DFA start node; later nodes count up from it
    /// in discovery order.
    pub first_node_id: StateId,

    /// Maximum number of DFA nodes to create (`None` = unlimited).
    pub max_dfa_states: Option<usize>,
}

impl ConversionConfig {
    /// Set the id of the DFA start node.
    pub fn with_first_node_id(mut self, first_node_id: StateId) -> Self {
        self.first_node_id = first_node_id;
        self
    }

    /// Cap the number of DFA nodes a conversion may create.
    pub fn with_max_dfa_states(mut self, max_dfa_states: usize) -> Self {
        self.max_dfa_states = Some(max_dfa_states);
        self
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            first_node_id: 0,
            max_dfa_states: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ConversionConfig::default();
        assert_eq!(config.first_node_id, 0);
        assert_eq!(config.max_dfa_states, None);

        let config = config.with_first_node_id(1).with_max_dfa_states(16);
        assert_eq!(config.first_node_id, 1);
        assert_eq!(config.max_dfa_states, Some(16));
    }
}
