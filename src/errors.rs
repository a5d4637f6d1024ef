use thiserror::Error;

/// The result type for the `fsakit` crate.
pub type Result<T> = std::result::Result<T, FsaError>;

/// The error type for the `fsakit` crate.
#[derive(Error, Debug)]
pub struct FsaError {
    /// The source of the error.
    pub source: Box<FsaErrorKind>,
}

impl FsaError {
    /// Create a new `FsaError`.
    pub fn new(kind: FsaErrorKind) -> Self {
        FsaError {
            source: Box::new(kind),
        }
    }

    /// Get the kind of the error.
    pub fn kind(&self) -> &FsaErrorKind {
        &self.source
    }
}

impl std::fmt::Display for FsaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
/// State labels are generic, so they are reported with their `Debug` rendering.
#[derive(Error, Debug)]
pub enum FsaErrorKind {
    /// The start state is not a member of the state set.
    #[error("Start state {0} is not in the state set")]
    UnknownStartState(String),

    /// An accepting state is not a member of the state set.
    #[error("Accepting state {0} is not in the state set")]
    UnknownAcceptingState(String),

    /// A transition refers to a state that is not a member of the state set.
    #[error("Transition {0} refers to state {1} which is not in the state set")]
    UnknownTransitionState(String, String),

    /// A transition uses a symbol that is not part of the alphabet.
    #[error("Transition {0} uses symbol {1:?} which is not in the alphabet")]
    UnknownSymbol(String, char),

    /// The reserved epsilon symbol was used in an automaton that has no epsilon transitions.
    #[error("Transition {0} uses the reserved epsilon symbol")]
    ReservedSymbol(String),

    /// A deterministic automaton got two different targets for the same state and symbol.
    #[error("Transition {0} has more than one target: {1} and {2}")]
    NondeterministicTransition(String, String, String),

    /// The builder was asked to build an automaton without a start state.
    #[error("No start state was given")]
    MissingStartState,

    /// A (de)serialization error occurred.
    #[cfg(feature = "serde")]
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

impl From<FsaErrorKind> for FsaError {
    fn from(kind: FsaErrorKind) -> Self {
        FsaError::new(kind)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for FsaError {
    fn from(error: serde_json::Error) -> Self {
        FsaError::new(FsaErrorKind::JsonError(error))
    }
}
