//! The `dot` module contains the conversion from an automaton to a graphviz dot format.
//! The functions in this module are used for debugging purposes.

use std::{collections::BTreeMap, fmt::Display, io::Write};

use dot_writer::{Attributes, DotWriter, NodeId, RankDirection};

use crate::{StateLabel, TransitionTable, TransitionTarget, EPSILON};

/// Render the transition table of an automaton to a graphviz dot format.
/// The start state is drawn blue, accepting states are drawn red.
pub(crate) fn render<T, V, W>(table: &TransitionTable<T, V>, label: &str, output: &mut W)
where
    T: StateLabel + Display,
    V: TransitionTarget<T>,
    W: Write,
{
    let mut writer = DotWriter::from(output);
    writer.set_pretty_print(true);
    let mut digraph = writer.digraph();
    digraph
        .set_label(label)
        .set_rank_direction(RankDirection::LeftRight);

    // Render the states
    let mut node_ids: BTreeMap<&T, NodeId> = BTreeMap::new();
    for state in table.states() {
        let mut node = digraph.node_auto();
        node.set_label(&state.to_string());
        if state == table.start_state() {
            node.set_shape(dot_writer::Shape::Circle)
                .set_color(dot_writer::Color::Blue)
                .set_pen_width(3.0);
        }
        if table.is_accepting(state) {
            node.set_color(dot_writer::Color::Red).set_pen_width(3.0);
        }
        node_ids.insert(state, node.id());
    }

    // Render the transitions, edges from or to unknown states are left out
    for ((source, symbol), target) in table.transitions() {
        let Some(source_id) = node_ids.get(source) else {
            continue;
        };
        let edge_label = if *symbol == EPSILON {
            "ε".to_string()
        } else {
            symbol.escape_default().to_string()
        };
        for target_state in target.targets() {
            if let Some(target_id) = node_ids.get(target_state) {
                digraph
                    .edge(source_id.clone(), target_id.clone())
                    .attributes()
                    .set_label(&edge_label);
            }
        }
    }
}
