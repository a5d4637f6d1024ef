use std::collections::BTreeMap;

use log::{debug, trace};

use crate::{canonical_pair, StateLabel, TransitionTable, Transitions};

// The type definitions for the table-filling algorithm.

// A pair of distinct states, the smaller one first.
type StatePair<T> = (T, T);
// Maps every pair of distinct states to the flag that tells if the pair is distinguishable.
type DistinguishabilityTable<T> = BTreeMap<StatePair<T>, bool>;

// The minimizer is a struct that is used to minimize the number of states in a DFA.
#[derive(Debug)]
pub(crate) struct Minimizer;

impl Minimizer {
    /// Minimize the DFA given by its transition table in place.
    /// The minimization uses the table-filling algorithm:
    /// 1. Pairs of an accepting and a non-accepting state are marked as distinguishable.
    /// 2. A pair is marked if some symbol leads both states to a marked pair. This is repeated
    ///    until no pair changes anymore.
    /// 3. The states of each unmarked pair are merged.
    pub(crate) fn minimize<T: StateLabel>(table: &mut TransitionTable<T, T>) {
        trace!("Minimize DFA ----------------------------");
        trace!("Initial DFA:\n{:?}", table);

        let mut pairs = Self::calculate_initial_table(table);
        Self::trace_table("initial", &pairs);

        let mut passes = 0;
        while Self::propagate(table, &mut pairs) {
            passes += 1;
            Self::trace_table("propagated", &pairs);
        }
        debug!(
            "Distinguishability table of {} pairs stable after {} changing passes",
            pairs.len(),
            passes
        );

        let before = table.states.len();
        Self::merge_indistinguishable(table, &pairs);
        debug!(
            "Minimized DFA from {} to {} states",
            before,
            table.states.len()
        );
        trace!("Minimized DFA:\n{:?}", table);
    }

    /// Every pair of distinct states where exactly one state is accepting is distinguishable
    /// by the empty string.
    fn calculate_initial_table<T: StateLabel>(
        table: &TransitionTable<T, T>,
    ) -> DistinguishabilityTable<T> {
        let mut pairs = DistinguishabilityTable::new();
        for (index, p) in table.states.iter().enumerate() {
            for q in table.states.iter().skip(index + 1) {
                let marked = table.is_accepting(p) != table.is_accepting(q);
                pairs.insert((p.clone(), q.clone()), marked);
            }
        }
        pairs
    }

    /// Run one pass over all unmarked pairs.
    /// A pair is marked if for some symbol both states have a transition and the pair of the
    /// targets is already marked. Marks take effect immediately within the pass.
    /// Returns true if any pair was marked.
    fn propagate<T: StateLabel>(
        table: &TransitionTable<T, T>,
        pairs: &mut DistinguishabilityTable<T>,
    ) -> bool {
        let unmarked = pairs
            .iter()
            .filter_map(|(pair, marked)| if *marked { None } else { Some(pair.clone()) })
            .collect::<Vec<_>>();
        let mut changed = false;
        for pair in unmarked {
            if Self::is_distinguished_by_successors(table, pairs, &pair) {
                trace!("Mark pair {:?}", pair);
                pairs.insert(pair, true);
                changed = true;
            }
        }
        changed
    }

    fn is_distinguished_by_successors<T: StateLabel>(
        table: &TransitionTable<T, T>,
        pairs: &DistinguishabilityTable<T>,
        (p, q): &StatePair<T>,
    ) -> bool {
        table.alphabet.iter().any(|symbol| {
            match (table.target(p, *symbol), table.target(q, *symbol)) {
                // Equal targets never distinguish.
                (Some(p_next), Some(q_next)) if p_next != q_next => pairs
                    .get(&canonical_pair(p_next.clone(), q_next.clone()))
                    .copied()
                    .unwrap_or(false),
                // A symbol on which a state has no transition gives no evidence.
                _ => false,
            }
        })
    }

    /// Merge the states of every unmarked pair, the greater state into the smaller one.
    /// The pairs are processed in ascending order in a single pass. A pair with a state that
    /// was already merged away is skipped.
    fn merge_indistinguishable<T: StateLabel>(
        table: &mut TransitionTable<T, T>,
        pairs: &DistinguishabilityTable<T>,
    ) {
        for ((a, b), _) in pairs.iter().filter(|(_, marked)| !**marked) {
            if !table.states.contains(a) || !table.states.contains(b) {
                trace!("Skip pair ({:?}, {:?}), already merged", a, b);
                continue;
            }
            trace!("Merge state {:?} into {:?}", b, a);
            Self::merge_states(table, a, b);
        }
    }

    /// Collapse the state `b` into the state `a`.
    fn merge_states<T: StateLabel>(table: &mut TransitionTable<T, T>, a: &T, b: &T) {
        table.states.remove(b);
        if table.start_state == *b {
            table.start_state = a.clone();
        }
        if table.accepting_states.remove(b) {
            table.accepting_states.insert(a.clone());
        }
        let transitions = std::mem::take(&mut table.transitions);
        table.transitions = transitions
            .into_iter()
            .map(|((source, symbol), target)| {
                let source = if source == *b { a.clone() } else { source };
                let target = if target == *b { a.clone() } else { target };
                ((source, symbol), target)
            })
            .collect::<Transitions<T, T>>();
    }

    /// Trace out the distinguishability table.
    #[allow(dead_code)]
    fn trace_table<T: StateLabel>(context: &str, pairs: &DistinguishabilityTable<T>) {
        trace!("Distinguishability table {}:", context);
        for ((p, q), marked) in pairs {
            trace!("  ({:?}, {:?}) -> {}", p, q, marked);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn table(
        states: &[usize],
        transitions: &[(usize, char, usize)],
        start_state: usize,
        accepting_states: &[usize],
    ) -> TransitionTable<usize, usize> {
        TransitionTable::new(
            states.iter().copied().collect(),
            transitions.iter().map(|(_, c, _)| *c).collect(),
            transitions
                .iter()
                .map(|(from, c, to)| ((*from, *c), *to))
                .collect(),
            start_state,
            accepting_states.iter().copied().collect(),
        )
    }

    fn six_states() -> TransitionTable<usize, usize> {
        table(
            &[0, 1, 2, 3, 4, 5],
            &[
                (0, 'a', 1),
                (0, 'b', 4),
                (1, 'a', 2),
                (1, 'b', 3),
                (2, 'a', 2),
                (2, 'b', 2),
                (3, 'a', 2),
                (3, 'b', 3),
                (4, 'a', 5),
                (4, 'b', 4),
                (5, 'a', 5),
                (5, 'b', 4),
            ],
            0,
            &[2, 3],
        )
    }

    #[test]
    fn test_calculate_initial_table() {
        let table = six_states();
        let pairs = Minimizer::calculate_initial_table(&table);
        // 6 states give 15 pairs
        assert_eq!(pairs.len(), 15);
        // 2 accepting states times 4 non-accepting states
        assert_eq!(pairs.values().filter(|m| **m).count(), 8);
        assert_eq!(pairs.get(&(2, 3)), Some(&false));
        assert_eq!(pairs.get(&(0, 2)), Some(&true));
        assert!(!pairs.contains_key(&(3, 2)));
    }

    #[test]
    fn test_propagate_to_fixpoint() {
        init();
        let table = six_states();
        let mut pairs = Minimizer::calculate_initial_table(&table);
        while Minimizer::propagate(&table, &mut pairs) {}
        let unmarked = pairs
            .iter()
            .filter_map(|(pair, marked)| if *marked { None } else { Some(*pair) })
            .collect::<Vec<_>>();
        assert_eq!(unmarked, vec![(2, 3), (4, 5)]);
    }

    #[test]
    fn test_minimize_six_states() {
        init();
        let mut table = six_states();
        Minimizer::minimize(&mut table);
        assert_eq!(table.states, [0, 1, 2, 4].into_iter().collect());
        assert_eq!(table.accepting_states, [2].into_iter().collect());
        assert_eq!(table.start_state, 0);
        assert_eq!(table.target(&1, 'b'), Some(&2));
        assert_eq!(table.target(&4, 'a'), Some(&4));
        assert!(table.target(&3, 'a').is_none());
        assert!(table.target(&5, 'b').is_none());
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_merge_moves_start_state() {
        init();
        // States 0 and 1 are equivalent, the start state 1 is merged into 0.
        let mut table = table(
            &[0, 1, 2],
            &[(0, 'a', 2), (1, 'a', 2), (2, 'a', 2)],
            1,
            &[2],
        );
        Minimizer::minimize(&mut table);
        assert_eq!(table.states, [0, 2].into_iter().collect());
        assert_eq!(table.start_state, 0);
    }

    #[test]
    fn test_merge_three_equivalent_states() {
        init();
        // 1, 2 and 3 are all accepting sinks.
        let mut table = table(
            &[0, 1, 2, 3],
            &[
                (0, 'a', 1),
                (0, 'b', 2),
                (1, 'a', 3),
                (2, 'a', 2),
                (3, 'a', 1),
            ],
            0,
            &[1, 2, 3],
        );
        Minimizer::minimize(&mut table);
        assert_eq!(table.states, [0, 1].into_iter().collect());
        assert_eq!(table.accepting_states, [1].into_iter().collect());
        assert_eq!(table.target(&0, 'b'), Some(&1));
        assert_eq!(table.target(&1, 'a'), Some(&1));
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_missing_transition_gives_no_evidence() {
        init();
        // State 1 has a transition on 'a', state 2 has none. Both are non-accepting and
        // the only evidence would come from the missing transition.
        let mut table = table(&[0, 1, 2], &[(0, 'a', 1), (0, 'b', 2), (1, 'a', 0)], 0, &[0]);
        Minimizer::minimize(&mut table);
        assert_eq!(table.states, [0, 1].into_iter().collect::<BTreeSet<_>>());
        assert_eq!(table.target(&0, 'b'), Some(&1));
    }

    #[test]
    fn test_minimal_dfa_is_unchanged() {
        init();
        let mut table = table(&[0, 1], &[(0, 'a', 1), (1, 'a', 0)], 0, &[0]);
        let before = table.clone();
        Minimizer::minimize(&mut table);
        assert_eq!(table, before);
    }
}
