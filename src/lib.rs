#![forbid(missing_docs)]
//! # `fsakit`
//! The `fsakit` crate is a small toolkit for finite automata.
//! It provides deterministic finite automata ([Dfa]), non-deterministic finite automata ([Nfa])
//! and non-deterministic finite automata with epsilon transitions ([EpsilonNfa]).
//! All of them answer the question whether they accept a given input string.
//! A DFA can additionally be minimized in place with the table-filling algorithm.
//!
//! The automata are generic over the type of their state labels. Any type that is totally
//! ordered, cloneable and debug-printable can be used, see [StateLabel].
//! Input symbols are single `char`s. The character `'\0'` is reserved as [EPSILON].
//!
//! # Example
//! ```rust
//! use fsakit::AutomatonBuilder;
//!
//! // A DFA that accepts strings over {a, b} where all a's precede all b's.
//! let mut dfa = AutomatonBuilder::new()
//!     .start_state(0)
//!     .accepting_states([0, 1])
//!     .add_transition(0, 'a', 0)
//!     .add_transition(0, 'b', 1)
//!     .add_transition(1, 'a', 2)
//!     .add_transition(1, 'b', 1)
//!     .add_transition(2, 'a', 2)
//!     .add_transition(2, 'b', 2)
//!     .build_dfa()
//!     .expect("AutomatonBuilder error");
//!
//! assert!(dfa.accepts("aabbb"));
//! assert!(!dfa.accepts("ba"));
//!
//! dfa.minimize();
//! assert_eq!(dfa.state_count(), 3);
//! println!("{}", dfa);
//! ```
//! The output of the example is:
//! ```text
//! --- DFA ---
//! STATES: 0 1 2
//! INITIAL STATE: 0
//! FINAL STATES: 0 1
//! TRANSITIONS:
//! {0, a} --> 0
//! {0, b} --> 1
//! {1, a} --> 2
//! {1, b} --> 1
//! {2, a} --> 2
//! {2, b} --> 2
//! ```
//!
//! # Crate features
//! - `dot_writer`: Enabled by default. Adds `render_dot` to the automata which writes them in
//!   graphviz dot format.
//! - `serde`: Enabled by default. Makes the [TransitionTable] serializable and adds JSON helpers.

/// Module with the trait that is common to all automata
mod automaton;
pub use automaton::Automaton;

/// The module with the automaton builder.
mod automaton_builder;
pub use automaton_builder::AutomatonBuilder;

/// Module that provides the DFA
mod dfa;
pub use dfa::Dfa;

/// Module that provides the NFA with epsilon transitions
mod epsilon_nfa;
pub use epsilon_nfa::EpsilonNfa;

/// Module with error definitions
mod errors;
pub use errors::{FsaError, FsaErrorKind, Result};

/// The module with internal implementation details.
mod internal;

/// Module that provides the NFA
mod nfa;
pub use nfa::{MissingTransitionPolicy, Nfa};

/// Module with the requirements for state labels
mod state_label;
pub use state_label::{canonical_pair, StateLabel, TransitionTarget, EPSILON};

/// Module that provides the transition table shared by all automata
mod transition_table;
pub use transition_table::{TransitionTable, Transitions};
