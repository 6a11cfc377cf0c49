//! Error types for reference games and RSA queries.

use rsa_prob::ProbError;
use thiserror::Error;

/// Errors that can occur when building a reference game or querying
/// the RSA stages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RsaError {
    /// Utterance not in the registered vocabulary.
    #[error("unknown utterance: '{utterance}'")]
    UnknownUtterance { utterance: String },

    /// State label not in the registered world.
    #[error("unknown world state: '{state}'")]
    UnknownState { state: String },

    /// Row label not present in a probability table.
    #[error("unknown table row: '{label}'")]
    UnknownLabel { label: String },

    /// An utterance that is literally true of no registered state.
    #[error("utterance '{utterance}' is true of no world state")]
    VacuousUtterance { utterance: String },

    /// Two states share a display label.
    #[error("duplicate state label: '{label}'")]
    DuplicateState { label: String },

    /// The same utterance registered twice.
    #[error("duplicate utterance: '{utterance}'")]
    DuplicateUtterance { utterance: String },

    /// A reference game needs at least one state.
    #[error("reference game has no world states")]
    EmptyStates,

    /// A reference game needs at least one utterance.
    #[error("reference game has no utterances")]
    EmptyUtterances,

    /// The optimality parameter must be a finite real.
    #[error("alpha must be finite, got {alpha}")]
    NonFiniteAlpha { alpha: f64 },

    /// The speaker epsilon guards `ln(0)` and must be positive; the
    /// listener epsilon must be non-negative.
    #[error("invalid stabilization epsilon: {epsilon}")]
    InvalidEpsilon { epsilon: f64 },

    /// A state prior with the wrong number of entries.
    #[error("state prior has {got} entries, expected {expected}")]
    PriorSize { expected: usize, got: usize },

    /// An utterance cost vector with the wrong number of entries.
    #[error("utterance costs have {got} entries, expected {expected}")]
    CostSize { expected: usize, got: usize },

    /// A cost entry that is NaN or infinite.
    #[error("utterance cost for '{utterance}' is not finite")]
    NonFiniteCost { utterance: String },

    /// Numeric failure surfaced by the probability substrate.
    #[error(transparent)]
    Prob(#[from] ProbError),
}
