//! This module contains the transition table that is shared by all automaton kinds.
//! The table is generic over the state label `T` and over the shape `V` of a transition target:
//! a DFA uses `V = T`, an NFA or epsilon-NFA uses `V = BTreeSet<T>`.

use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{FsaError, FsaErrorKind, Result, StateLabel, TransitionTarget, EPSILON};

/// The transition relation of an automaton.
pub type Transitions<T, V> = BTreeMap<(T, char), V>;

/// The five-tuple that makes up a finite automaton.
///
/// The table does not check the consistency of its parts on construction.
/// Use [TransitionTable::validate] to do that explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: Serialize, V: Serialize",
        deserialize = "T: Deserialize<'de> + Ord, V: Deserialize<'de>"
    ))
)]
pub struct TransitionTable<T, V> {
    pub(crate) states: BTreeSet<T>,
    pub(crate) alphabet: BTreeSet<char>,
    #[cfg_attr(feature = "serde", serde(with = "transitions_as_list"))]
    pub(crate) transitions: Transitions<T, V>,
    pub(crate) start_state: T,
    pub(crate) accepting_states: BTreeSet<T>,
}

impl<T, V> TransitionTable<T, V>
where
    T: StateLabel,
    V: TransitionTarget<T>,
{
    /// Create a new transition table from its five parts.
    pub fn new(
        states: BTreeSet<T>,
        alphabet: BTreeSet<char>,
        transitions: Transitions<T, V>,
        start_state: T,
        accepting_states: BTreeSet<T>,
    ) -> Self {
        Self {
            states,
            alphabet,
            transitions,
            start_state,
            accepting_states,
        }
    }

    /// Get the states.
    #[inline]
    pub fn states(&self) -> &BTreeSet<T> {
        &self.states
    }

    /// Get the input alphabet.
    #[inline]
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// Get the transition relation.
    #[inline]
    pub fn transitions(&self) -> &Transitions<T, V> {
        &self.transitions
    }

    /// Get the start state.
    #[inline]
    pub fn start_state(&self) -> &T {
        &self.start_state
    }

    /// Get the accepting states.
    #[inline]
    pub fn accepting_states(&self) -> &BTreeSet<T> {
        &self.accepting_states
    }

    /// Check if the given state is an accepting state.
    #[inline]
    pub fn is_accepting(&self, state: &T) -> bool {
        self.accepting_states.contains(state)
    }

    /// Check if any of the given states is an accepting state.
    pub fn any_accepting<'a, I>(&self, states: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        states.into_iter().any(|state| self.is_accepting(state))
    }

    /// Look up the transition target of the given state on the given symbol.
    #[inline]
    pub fn target(&self, state: &T, symbol: char) -> Option<&V> {
        self.transitions.get(&(state.clone(), symbol))
    }

    /// Check the invariants of the table.
    ///
    /// * the start state is a member of the state set,
    /// * all accepting states are members of the state set,
    /// * every source and target of a transition is a member of the state set,
    /// * every transition symbol is part of the alphabet.
    ///
    /// The epsilon symbol is accepted without being part of the alphabet.
    pub fn validate(&self) -> Result<()> {
        if !self.states.contains(&self.start_state) {
            return Err(FsaError::new(FsaErrorKind::UnknownStartState(format!(
                "{:?}",
                self.start_state
            ))));
        }
        if let Some(state) = self
            .accepting_states
            .iter()
            .find(|s| !self.states.contains(*s))
        {
            return Err(FsaError::new(FsaErrorKind::UnknownAcceptingState(format!(
                "{:?}",
                state
            ))));
        }
        for ((source, symbol), target) in &self.transitions {
            let transition = format!("({:?}, {:?})", source, symbol);
            if !self.states.contains(source) {
                return Err(FsaError::new(FsaErrorKind::UnknownTransitionState(
                    transition,
                    format!("{:?}", source),
                )));
            }
            if let Some(state) = target.targets().find(|s| !self.states.contains(*s)) {
                return Err(FsaError::new(FsaErrorKind::UnknownTransitionState(
                    transition,
                    format!("{:?}", state),
                )));
            }
            if *symbol != EPSILON && !self.alphabet.contains(symbol) {
                return Err(FsaError::new(FsaErrorKind::UnknownSymbol(
                    transition, *symbol,
                )));
            }
        }
        Ok(())
    }

    /// Write the diagnostic dump with the given headline.
    pub(crate) fn dump(&self, headline: &str, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    where
        T: std::fmt::Display,
    {
        writeln!(f, "--- {} ---", headline)?;
        write!(f, "STATES:")?;
        for state in &self.states {
            write!(f, " {}", state)?;
        }
        writeln!(f)?;
        writeln!(f, "INITIAL STATE: {}", self.start_state)?;
        write!(f, "FINAL STATES:")?;
        for state in &self.accepting_states {
            write!(f, " {}", state)?;
        }
        writeln!(f)?;
        writeln!(f, "TRANSITIONS:")?;
        for ((source, symbol), target) in &self.transitions {
            if *symbol == EPSILON {
                write!(f, "{{{}, ε}} --> ", source)?;
            } else {
                write!(f, "{{{}, {}}} --> ", source, symbol)?;
            }
            target.fmt_target(f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<T, V> TransitionTable<T, V>
where
    T: StateLabel + Serialize + for<'de> Deserialize<'de>,
    V: TransitionTarget<T> + Serialize + for<'de> Deserialize<'de>,
{
    /// Read a transition table from JSON.
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Write the transition table as JSON.
    pub fn to_json_writer<W: std::io::Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

impl<T, V> std::fmt::Display for TransitionTable<T, V>
where
    T: StateLabel + std::fmt::Display,
    V: TransitionTarget<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.dump("Transition Table", f)
    }
}

// The transition relation has tuple keys which can't be used as JSON object keys.
// It is therefore written as a list of `[source, symbol, target]` triples.
#[cfg(feature = "serde")]
mod transitions_as_list {
    use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

    use super::Transitions;

    pub(super) fn serialize<S, T, V>(
        transitions: &Transitions<T, V>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
        V: Serialize,
    {
        serializer.collect_seq(
            transitions
                .iter()
                .map(|((source, symbol), target)| (source, symbol, target)),
        )
    }

    pub(super) fn deserialize<'de, D, T, V>(
        deserializer: D,
    ) -> std::result::Result<Transitions<T, V>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Ord,
        V: Deserialize<'de>,
    {
        let triples = Vec::<(T, char, V)>::deserialize(deserializer)?;
        let mut transitions = Transitions::new();
        for (index, (source, symbol, target)) in triples.into_iter().enumerate() {
            if transitions.insert((source, symbol), target).is_some() {
                return Err(D::Error::custom(format!(
                    "transition #{} repeats the source state and symbol {:?} of an earlier one",
                    index, symbol
                )));
            }
        }
        Ok(transitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TransitionTable<usize, BTreeSet<usize>> {
        TransitionTable::new(
            [0, 1, 2].into_iter().collect(),
            ['a', 'b'].into_iter().collect(),
            [
                ((0, 'a'), [0, 1].into_iter().collect()),
                ((1, 'b'), [2].into_iter().collect()),
                ((1, EPSILON), [2].into_iter().collect()),
            ]
            .into_iter()
            .collect(),
            0,
            [2].into_iter().collect(),
        )
    }

    #[test]
    fn test_accessors() {
        let table = table();
        assert_eq!(table.states().len(), 3);
        assert_eq!(*table.start_state(), 0);
        assert!(table.is_accepting(&2));
        assert!(!table.is_accepting(&0));
        assert!(table.any_accepting(&[0, 2]));
        assert!(!table.any_accepting(&[0, 1]));
        assert_eq!(table.target(&0, 'a').map(|t| t.len()), Some(2));
        assert!(table.target(&0, 'b').is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(table().validate().is_ok());
    }

    #[test]
    fn test_validate_unknown_start_state() {
        let mut table = table();
        table.start_state = 7;
        let err = table.validate().unwrap_err();
        assert!(matches!(err.kind(), FsaErrorKind::UnknownStartState(s) if s == "7"));
    }

    #[test]
    fn test_validate_unknown_accepting_state() {
        let mut table = table();
        table.accepting_states.insert(9);
        let err = table.validate().unwrap_err();
        assert!(matches!(err.kind(), FsaErrorKind::UnknownAcceptingState(s) if s == "9"));
    }

    #[test]
    fn test_validate_unknown_target() {
        let mut table = table();
        table
            .transitions
            .insert((2, 'a'), [0, 5].into_iter().collect());
        let err = table.validate().unwrap_err();
        assert!(matches!(
            err.kind(),
            FsaErrorKind::UnknownTransitionState(_, s) if s == "5"
        ));
    }

    #[test]
    fn test_validate_unknown_symbol() {
        let mut table = table();
        table.transitions.insert((2, 'z'), [0].into_iter().collect());
        let err = table.validate().unwrap_err();
        assert!(matches!(err.kind(), FsaErrorKind::UnknownSymbol(_, 'z')));
    }

    #[test]
    fn test_dump() {
        let dump = table().to_string();
        assert_eq!(
            dump,
            "--- Transition Table ---\n\
             STATES: 0 1 2\n\
             INITIAL STATE: 0\n\
             FINAL STATES: 2\n\
             TRANSITIONS:\n\
             {0, a} --> { 0 1 }\n\
             {1, ε} --> { 2 }\n\
             {1, b} --> { 2 }\n"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let table = table();
        let mut buffer = Vec::new();
        table.to_json_writer(&mut buffer).unwrap();
        let read_back: TransitionTable<usize, BTreeSet<usize>> =
            TransitionTable::from_json_reader(buffer.as_slice()).unwrap();
        assert_eq!(table, read_back);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_triples() {
        let json = r#"{
            "states": [0, 1],
            "alphabet": ["a"],
            "transitions": [[0, "a", 1], [1, "a", 1]],
            "start_state": 0,
            "accepting_states": [1]
        }"#;
        let table: TransitionTable<u32, u32> = serde_json::from_str(json).unwrap();
        assert_eq!(table.target(&0, 'a'), Some(&1));
        assert!(table.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_repeated_set_transition_is_rejected() {
        let json = r#"{
            "states": [0, 1, 2],
            "alphabet": ["a"],
            "transitions": [[0, "a", [1]], [0, "a", [2]]],
            "start_state": 0,
            "accepting_states": [1]
        }"#;
        let result = TransitionTable::<u32, BTreeSet<u32>>::from_json_reader(json.as_bytes());
        let err = result.unwrap_err();
        assert!(matches!(err.kind(), FsaErrorKind::JsonError(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_repeated_single_transition_is_rejected() {
        let json = r#"{
            "states": [0, 1, 2],
            "alphabet": ["a"],
            "transitions": [[0, "a", 1], [0, "a", 2]],
            "start_state": 0,
            "accepting_states": [1]
        }"#;
        let result = serde_json::from_str::<TransitionTable<u32, u32>>(json);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("repeats the source state and symbol 'a'"));
    }
}
