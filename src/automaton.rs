use crate::{StateLabel, TransitionTable, TransitionTarget};

/// The query surface shared by all automaton kinds.
pub trait Automaton {
    /// The type of the state labels.
    type State: StateLabel;

    /// The shape of a transition target, a single state or a set of states.
    type Target: TransitionTarget<Self::State>;

    /// Get the underlying transition table.
    fn table(&self) -> &TransitionTable<Self::State, Self::Target>;

    /// Check if the automaton accepts the given input.
    /// Every `char` of the input is one symbol.
    fn accepts(&self, input: &str) -> bool;

    /// Get the start state.
    fn start_state(&self) -> &Self::State {
        self.table().start_state()
    }

    /// Check if the given state is an accepting state.
    fn is_accepting(&self, state: &Self::State) -> bool {
        self.table().is_accepting(state)
    }

    /// Get the number of states.
    fn state_count(&self) -> usize {
        self.table().states().len()
    }
}
