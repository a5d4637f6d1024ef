//! This module contains the NFA with epsilon transitions.
//! Epsilon transitions are ordinary transitions on the reserved symbol [EPSILON].
//! The epsilon closures of all states are calculated once when the automaton is created.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    internal::calculate_epsilon_closures, Automaton, StateLabel, TransitionTable, Transitions,
    EPSILON,
};

/// A non-deterministic finite automaton with epsilon transitions.
///
/// The transition table is only accessible read-only, the precomputed closures would get stale
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpsilonNfa<T> {
    table: TransitionTable<T, BTreeSet<T>>,
    // The epsilon closure of every state, including the state itself.
    closures: BTreeMap<T, BTreeSet<T>>,
}

impl<T: StateLabel> EpsilonNfa<T> {
    /// Create an epsilon-NFA from its five parts.
    /// The epsilon symbol is added to the alphabet.
    /// The parts are not checked for consistency, see [TransitionTable::validate].
    pub fn new(
        states: BTreeSet<T>,
        alphabet: BTreeSet<char>,
        transitions: Transitions<T, BTreeSet<T>>,
        start_state: T,
        accepting_states: BTreeSet<T>,
    ) -> Self {
        TransitionTable::new(
            states,
            alphabet,
            transitions,
            start_state,
            accepting_states,
        )
        .into()
    }

    /// Get the transition table of the epsilon-NFA.
    #[inline]
    pub fn table(&self) -> &TransitionTable<T, BTreeSet<T>> {
        &self.table
    }

    /// Get the epsilon closure of the given state.
    /// Returns `None` if the state is not part of the automaton.
    #[inline]
    pub fn epsilon_closure(&self, state: &T) -> Option<&BTreeSet<T>> {
        self.closures.get(state)
    }

    /// Get the epsilon closures of all states.
    #[inline]
    pub fn epsilon_closures(&self) -> &BTreeMap<T, BTreeSet<T>> {
        &self.closures
    }

    /// Add the given state and its epsilon closure to the set of states.
    fn insert_with_closure(&self, state: &T, states: &mut BTreeSet<T>) {
        states.insert(state.clone());
        if let Some(closure) = self.closures.get(state) {
            states.extend(closure.iter().cloned());
        }
    }

    /// Check if the epsilon-NFA accepts the given input.
    /// Active states without a transition on the current symbol simply drop out.
    pub fn accepts(&self, input: &str) -> bool {
        let mut current_states = BTreeSet::new();
        self.insert_with_closure(&self.table.start_state, &mut current_states);
        for c in input.chars() {
            let mut next_states = BTreeSet::new();
            for state in &current_states {
                if let Some(targets) = self.table.target(state, c) {
                    for target in targets {
                        self.insert_with_closure(target, &mut next_states);
                    }
                }
            }
            current_states = next_states;
        }
        self.table.any_accepting(&current_states)
    }

    /// Get the number of states.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.table.states.len()
    }

    /// Render the epsilon-NFA to a graphviz dot format.
    #[cfg(feature = "dot_writer")]
    pub fn render_dot<W: std::io::Write>(&self, label: &str, output: &mut W)
    where
        T: std::fmt::Display,
    {
        crate::internal::dot::render(&self.table, label, output);
    }
}

impl<T: StateLabel> From<TransitionTable<T, BTreeSet<T>>> for EpsilonNfa<T> {
    fn from(mut table: TransitionTable<T, BTreeSet<T>>) -> Self {
        table.alphabet.insert(EPSILON);
        let closures = calculate_epsilon_closures(&table);
        Self { table, closures }
    }
}

impl<T: StateLabel> Automaton for EpsilonNfa<T> {
    type State = T;
    type Target = BTreeSet<T>;

    fn table(&self) -> &TransitionTable<T, BTreeSet<T>> {
        &self.table
    }

    fn accepts(&self, input: &str) -> bool {
        EpsilonNfa::accepts(self, input)
    }
}

impl<T> std::fmt::Display for EpsilonNfa<T>
where
    T: StateLabel + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.table.dump("eNFA", f)
    }
}
