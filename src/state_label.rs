use std::{collections::BTreeSet, fmt::Debug};

/// The symbol that denotes an epsilon (empty-string) transition.
/// It is reserved by the epsilon-NFA and must not be used as an ordinary input symbol.
pub const EPSILON: char = '\0';

/// The requirements for the type used to label automaton states.
///
/// The total order is essential: the minimization canonicalizes pairs of states with it and
/// uses it to decide which of two equivalent states survives a merge.
/// Labels are cloned freely, every set and map of an automaton holds its own copies.
pub trait StateLabel: Ord + Clone + Debug {}

impl<T> StateLabel for T where T: Ord + Clone + Debug {}

/// Order two distinct states so that the smaller one comes first.
///
/// # Panics
/// In debug builds, if `p` and `q` are equal.
#[inline]
pub fn canonical_pair<T: StateLabel>(p: T, q: T) -> (T, T) {
    debug_assert!(p != q, "a canonical pair consists of two distinct states");
    if p < q {
        (p, q)
    } else {
        (q, p)
    }
}

/// The right-hand side of a transition.
///
/// A DFA maps `(state, symbol)` to exactly one state, an NFA maps it to a set of states.
/// This trait abstracts over both shapes so that the [crate::TransitionTable] can be shared.
pub trait TransitionTarget<T: StateLabel> {
    /// Iterate over all states this target refers to.
    fn targets<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;

    /// Replace every occurrence of `from` with `to`.
    fn rename_state(&mut self, from: &T, to: &T);

    /// Write the target in the notation of the diagnostic dump.
    fn fmt_target(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    where
        T: std::fmt::Display;
}

impl<T: StateLabel> TransitionTarget<T> for T {
    fn targets<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        std::iter::once(self)
    }

    fn rename_state(&mut self, from: &T, to: &T) {
        if self == from {
            *self = to.clone();
        }
    }

    fn fmt_target(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    where
        T: std::fmt::Display,
    {
        write!(f, "{}", self)
    }
}

impl<T: StateLabel> TransitionTarget<T> for BTreeSet<T> {
    fn targets<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }

    fn rename_state(&mut self, from: &T, to: &T) {
        if self.remove(from) {
            self.insert(to.clone());
        }
    }

    fn fmt_target(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    where
        T: std::fmt::Display,
    {
        write!(f, "{{")?;
        for state in self {
            write!(f, " {}", state)?;
        }
        write!(f, " }}")
    }
}
