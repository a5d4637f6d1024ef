/// Module with conversion to graphviz dot format
#[cfg(feature = "dot_writer")]
pub(crate) mod dot;

/// Module that provides the closure computation of epsilon transitions.
mod epsilon_closure;
pub(crate) use epsilon_closure::calculate_epsilon_closures;

/// Module that provides the DFA minimization.
mod minimizer;
pub(crate) use minimizer::Minimizer;
