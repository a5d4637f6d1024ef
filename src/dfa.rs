//! This module contains the DFA (Deterministic Finite Automaton) implementation.
//! The transition relation of a DFA is a partial function, a missing transition means that the
//! input is rejected.

use std::collections::BTreeSet;

use crate::{internal::Minimizer, Automaton, StateLabel, TransitionTable, Transitions};

/// A deterministic finite automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa<T> {
    table: TransitionTable<T, T>,
}

impl<T: StateLabel> Dfa<T> {
    /// Create a DFA from its five parts.
    /// The parts are not checked for consistency, see [TransitionTable::validate].
    pub fn new(
        states: BTreeSet<T>,
        alphabet: BTreeSet<char>,
        transitions: Transitions<T, T>,
        start_state: T,
        accepting_states: BTreeSet<T>,
    ) -> Self {
        Self {
            table: TransitionTable::new(
                states,
                alphabet,
                transitions,
                start_state,
                accepting_states,
            ),
        }
    }

    /// Get the transition table of the DFA.
    #[inline]
    pub fn table(&self) -> &TransitionTable<T, T> {
        &self.table
    }

    /// Check if the DFA accepts the given input.
    /// The first symbol without a transition rejects the input.
    pub fn accepts(&self, input: &str) -> bool {
        let mut current_state = &self.table.start_state;
        for c in input.chars() {
            match self.table.target(current_state, c) {
                Some(next_state) => current_state = next_state,
                None => return false,
            }
        }
        self.table.is_accepting(current_state)
    }

    /// Minimize the DFA in place.
    /// Indistinguishable states are merged into the smallest state of their kind, so the start
    /// state of the minimized DFA can change only towards a smaller label.
    pub fn minimize(&mut self) {
        Minimizer::minimize(&mut self.table);
    }

    /// Get the number of states.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.table.states.len()
    }

    /// Render the DFA to a graphviz dot format.
    #[cfg(feature = "dot_writer")]
    pub fn render_dot<W: std::io::Write>(&self, label: &str, output: &mut W)
    where
        T: std::fmt::Display,
    {
        crate::internal::dot::render(&self.table, label, output);
    }
}

impl<T: StateLabel> From<TransitionTable<T, T>> for Dfa<T> {
    fn from(table: TransitionTable<T, T>) -> Self {
        Self { table }
    }
}

impl<T: StateLabel> Automaton for Dfa<T> {
    type State = T;
    type Target = T;

    fn table(&self) -> &TransitionTable<T, T> {
        &self.table
    }

    fn accepts(&self, input: &str) -> bool {
        Dfa::accepts(self, input)
    }
}

impl<T> std::fmt::Display for Dfa<T>
where
    T: StateLabel + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.table.dump("DFA", f)
    }
}
