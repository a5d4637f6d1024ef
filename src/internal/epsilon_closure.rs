use std::collections::{BTreeMap, BTreeSet};

use log::trace;

use crate::{StateLabel, TransitionTable, EPSILON};

/// Calculate the epsilon closure of every state of the table.
pub(crate) fn calculate_epsilon_closures<T: StateLabel>(
    table: &TransitionTable<T, BTreeSet<T>>,
) -> BTreeMap<T, BTreeSet<T>> {
    table
        .states()
        .iter()
        .map(|state| {
            let closure = epsilon_closure(table, state);
            trace!("ε-closure of {:?}: {:?}", state, closure);
            (state.clone(), closure)
        })
        .collect()
}

/// Calculate the epsilon closure of a state.
/// The states are visited breadth first, following epsilon transitions only.
fn epsilon_closure<T: StateLabel>(
    table: &TransitionTable<T, BTreeSet<T>>,
    state: &T,
) -> BTreeSet<T> {
    // The state itself is always part of the ε-closure
    let mut queue = vec![state.clone()];
    let mut closure = BTreeSet::from([state.clone()]);
    let mut i = 0;
    while i < queue.len() {
        if let Some(targets) = table.target(&queue[i], EPSILON) {
            for target in targets {
                if closure.insert(target.clone()) {
                    queue.push(target.clone());
                }
            }
        }
        i += 1;
    }
    closure
}
