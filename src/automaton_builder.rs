use std::collections::BTreeSet;

use crate::{
    Dfa, EpsilonNfa, FsaError, FsaErrorKind, Nfa, Result, StateLabel, TransitionTable,
    Transitions, EPSILON,
};

/// A builder for creating automata from single transitions.
///
/// States and symbols used in transitions are registered automatically.
/// The same builder data can be turned into a DFA, an NFA or an epsilon-NFA.
#[derive(Debug, Clone)]
pub struct AutomatonBuilder<T> {
    states: BTreeSet<T>,
    alphabet: BTreeSet<char>,
    transitions: Vec<(T, char, T)>,
    start_state: Option<T>,
    accepting_states: BTreeSet<T>,
}

impl<T: StateLabel> Default for AutomatonBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StateLabel> AutomatonBuilder<T> {
    /// Creates a new automaton builder.
    pub fn new() -> Self {
        Self {
            states: BTreeSet::new(),
            alphabet: BTreeSet::new(),
            transitions: Vec::new(),
            start_state: None,
            accepting_states: BTreeSet::new(),
        }
    }

    /// Adds a state.
    pub fn add_state(mut self, state: T) -> Self {
        self.states.insert(state);
        self
    }

    /// Adds multiple states.
    pub fn add_states<I: IntoIterator<Item = T>>(mut self, states: I) -> Self {
        self.states.extend(states);
        self
    }

    /// Adds a symbol to the alphabet, even if no transition uses it.
    /// The reserved [EPSILON] is never part of the alphabet and is ignored here.
    pub fn add_symbol(mut self, symbol: char) -> Self {
        if symbol != EPSILON {
            self.alphabet.insert(symbol);
        }
        self
    }

    /// Sets the start state. The state is added to the states.
    pub fn start_state(mut self, state: T) -> Self {
        self.states.insert(state.clone());
        self.start_state = Some(state);
        self
    }

    /// Adds an accepting state. The state is added to the states.
    pub fn accepting_state(mut self, state: T) -> Self {
        self.states.insert(state.clone());
        self.accepting_states.insert(state);
        self
    }

    /// Adds multiple accepting states.
    pub fn accepting_states<I: IntoIterator<Item = T>>(self, states: I) -> Self {
        states
            .into_iter()
            .fold(self, |builder, state| builder.accepting_state(state))
    }

    /// Adds a transition. Both states and the symbol are registered.
    pub fn add_transition(mut self, from: T, symbol: char, to: T) -> Self {
        self.states.insert(from.clone());
        self.states.insert(to.clone());
        if symbol != EPSILON {
            self.alphabet.insert(symbol);
        }
        self.transitions.push((from, symbol, to));
        self
    }

    /// Adds an epsilon transition. Only an epsilon-NFA can be built from the builder then.
    pub fn add_epsilon_transition(self, from: T, to: T) -> Self {
        self.add_transition(from, EPSILON, to)
    }

    /// Builds a DFA.
    /// Fails if no start state was given, if an epsilon transition was added or if a state has
    /// more than one target for the same symbol.
    pub fn build_dfa(self) -> Result<Dfa<T>> {
        let start_state = self.require_start_state()?;
        let mut transitions = Transitions::new();
        for (from, symbol, to) in self.transitions {
            let transition = format!("({:?}, {:?})", from, symbol);
            if symbol == EPSILON {
                return Err(FsaError::new(FsaErrorKind::ReservedSymbol(transition)));
            }
            match transitions.insert((from, symbol), to.clone()) {
                Some(previous) if previous != to => {
                    return Err(FsaError::new(FsaErrorKind::NondeterministicTransition(
                        transition,
                        format!("{:?}", previous),
                        format!("{:?}", to),
                    )));
                }
                _ => {}
            }
        }
        let table = TransitionTable::new(
            self.states,
            self.alphabet,
            transitions,
            start_state,
            self.accepting_states,
        );
        table.validate()?;
        Ok(table.into())
    }

    /// Builds an NFA.
    /// Fails if no start state was given or if an epsilon transition was added.
    pub fn build_nfa(self) -> Result<Nfa<T>> {
        if let Some((from, symbol, _)) = self.transitions.iter().find(|(_, s, _)| *s == EPSILON)
        {
            return Err(FsaError::new(FsaErrorKind::ReservedSymbol(format!(
                "({:?}, {:?})",
                from, symbol
            ))));
        }
        let table = self.into_set_table()?;
        table.validate()?;
        Ok(table.into())
    }

    /// Builds an epsilon-NFA.
    /// Fails if no start state was given.
    pub fn build_epsilon_nfa(self) -> Result<EpsilonNfa<T>> {
        let table = self.into_set_table()?;
        table.validate()?;
        Ok(table.into())
    }

    fn require_start_state(&self) -> Result<T> {
        self.start_state
            .clone()
            .ok_or_else(|| FsaError::new(FsaErrorKind::MissingStartState))
    }

    fn into_set_table(self) -> Result<TransitionTable<T, BTreeSet<T>>> {
        let start_state = self.require_start_state()?;
        let mut transitions = Transitions::<T, BTreeSet<T>>::new();
        for (from, symbol, to) in self.transitions {
            transitions.entry((from, symbol)).or_default().insert(to);
        }
        Ok(TransitionTable::new(
            self.states,
            self.alphabet,
            transitions,
            start_state,
            self.accepting_states,
        ))
    }
}
