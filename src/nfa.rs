//! This module contains the NFA (Non-deterministic Finite Automaton) implementation.
//! The NFA is simulated by tracking the set of all states it can be in.

use std::collections::BTreeSet;

use crate::{Automaton, StateLabel, TransitionTable, Transitions};

/// Determines what happens when one of the active states of an NFA has no transition on the
/// current input symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissingTransitionPolicy {
    /// The input is rejected immediately, even if other active states could continue.
    #[default]
    Reject,
    /// The state without a transition drops out, the other active states continue.
    /// This is the usual subset semantics.
    Ignore,
}

/// A non-deterministic finite automaton without epsilon transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa<T> {
    table: TransitionTable<T, BTreeSet<T>>,
    missing_transition_policy: MissingTransitionPolicy,
}

impl<T: StateLabel> Nfa<T> {
    /// Create an NFA from its five parts.
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

    /// Set the policy for active states without a transition on the current symbol.
    pub fn with_missing_transition_policy(mut self, policy: MissingTransitionPolicy) -> Self {
        self.missing_transition_policy = policy;
        self
    }

    /// Get the policy for active states without a transition on the current symbol.
    #[inline]
    pub fn missing_transition_policy(&self) -> MissingTransitionPolicy {
        self.missing_transition_policy
    }

    /// Get the transition table of the NFA.
    #[inline]
    pub fn table(&self) -> &TransitionTable<T, BTreeSet<T>> {
        &self.table
    }

    /// Check if the NFA accepts the given input.
    ///
    /// With [MissingTransitionPolicy::Reject] the input is rejected as soon as any active
    /// state has no transition on the current symbol.
    pub fn accepts(&self, input: &str) -> bool {
        let mut current_states = BTreeSet::from([self.table.start_state.clone()]);
        for c in input.chars() {
            let mut next_states = BTreeSet::new();
            for state in &current_states {
                match self.table.target(state, c) {
                    Some(targets) => next_states.extend(targets.iter().cloned()),
                    None => match self.missing_transition_policy {
                        MissingTransitionPolicy::Reject => return false,
                        MissingTransitionPolicy::Ignore => {}
                    },
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

    /// Render the NFA to a graphviz dot format.
    #[cfg(feature = "dot_writer")]
    pub fn render_dot<W: std::io::Write>(&self, label: &str, output: &mut W)
    where
        T: std::fmt::Display,
    {
        crate::internal::dot::render(&self.table, label, output);
    }
}

impl<T: StateLabel> From<TransitionTable<T, BTreeSet<T>>> for Nfa<T> {
    fn from(table: TransitionTable<T, BTreeSet<T>>) -> Self {
        Self {
            table,
            missing_transition_policy: MissingTransitionPolicy::default(),
        }
    }
}

impl<T: StateLabel> Automaton for Nfa<T> {
    type State = T;
    type Target = BTreeSet<T>;

    fn table(&self) -> &TransitionTable<T, BTreeSet<T>> {
        &self.table
    }

    fn accepts(&self, input: &str) -> bool {
        Nfa::accepts(self, input)
    }
}

impl<T> std::fmt::Display for Nfa<T>
where
    T: StateLabel + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.table.dump("NFA", f)
    }
}
