//! The reference-game world: states, utterances, and literal meaning.
//!
//! A reference game is configuration data: a fixed finite list of
//! candidate referents ([`WorldState`]) and a fixed finite vocabulary
//! of utterances, linked by a truth-conditional meaning relation.
//! It is constructed once, validated once, and never mutated; every
//! RSA stage takes it by shared reference.
//!
//! # Example
//!
//! ```rust
//! use rsa_game::{RefGame, WorldState};
//!
//! let game = RefGame::new(
//!     vec![
//!         WorldState::new("blue-square", &[("color", "blue"), ("shape", "square")]),
//!         WorldState::new("green-square", &[("color", "green"), ("shape", "square")]),
//!     ],
//!     &["blue", "green", "square"],
//! ).unwrap();
//!
//! assert!(game.meaning("blue-square", "blue").unwrap());
//! assert!(!game.meaning("green-square", "blue").unwrap());
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::RsaError;

/// A candidate referent: a display label plus an attribute mapping.
///
/// Identity is the attribute mapping; the label is only the output
/// key used in distributions and tables. States are immutable once
/// defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldState {
    label: String,
    attributes: BTreeMap<String, String>,
}

impl WorldState {
    /// Create a state from a display label and (attribute, value) pairs.
    pub fn new(label: impl Into<String>, attributes: &[(&str, &str)]) -> Self {
        Self {
            label: label.into(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// The display label used as an output key.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Look up a single attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// The literal meaning relation: true iff the utterance equals
    /// one of this state's attribute values (e.g. its color or its
    /// shape). Pure in both arguments.
    pub fn describes(&self, utterance: &str) -> bool {
        self.attributes.values().any(|v| v == utterance)
    }
}

/// An immutable reference game: ordered states, ordered utterances,
/// and the meaning relation between them.
///
/// Validation happens at construction:
/// - both lists are non-empty,
/// - state labels and utterances are unique,
/// - every utterance is literally true of at least one state (a
///   vacuous utterance would make its literal-listener row an
///   unnormalizable all-zero row, so it is rejected here rather than
///   surfacing as NaN downstream).
///
/// A state that no utterance describes is permitted: the speaker
/// stage stabilizes its row with an epsilon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefGame {
    states: Vec<WorldState>,
    utterances: Vec<String>,
}

impl RefGame {
    /// Build and validate a reference game.
    pub fn new(states: Vec<WorldState>, utterances: &[&str]) -> Result<Self, RsaError> {
        if states.is_empty() {
            return Err(RsaError::EmptyStates);
        }
        if utterances.is_empty() {
            return Err(RsaError::EmptyUtterances);
        }

        for (i, s) in states.iter().enumerate() {
            if states[..i].iter().any(|t| t.label == s.label) {
                return Err(RsaError::DuplicateState {
                    label: s.label.clone(),
                });
            }
        }
        for (i, u) in utterances.iter().enumerate() {
            if utterances[..i].contains(u) {
                return Err(RsaError::DuplicateUtterance {
                    utterance: u.to_string(),
                });
            }
        }

        for u in utterances {
            if !states.iter().any(|s| s.describes(u)) {
                return Err(RsaError::VacuousUtterance {
                    utterance: u.to_string(),
                });
            }
        }

        Ok(Self {
            states,
            utterances: utterances.iter().map(|u| u.to_string()).collect(),
        })
    }

    /// The canonical three-object scene used throughout the RSA
    /// literature: a blue square, a blue circle, and a green square,
    /// with the one-word utterances "blue", "green", "square",
    /// "circle".
    ///
    /// "blue" and "square" are each ambiguous at the literal level;
    /// pragmatic inference disambiguates them.
    pub fn basic_scene() -> Self {
        Self::new(
            vec![
                WorldState::new("blue-square", &[("color", "blue"), ("shape", "square")]),
                WorldState::new("blue-circle", &[("color", "blue"), ("shape", "circle")]),
                WorldState::new("green-square", &[("color", "green"), ("shape", "square")]),
            ],
            &["blue", "green", "square", "circle"],
        )
        .expect("canonical scene is valid")
    }

    /// The ordered list of world states.
    pub fn states(&self) -> &[WorldState] {
        &self.states
    }

    /// The ordered vocabulary.
    pub fn utterances(&self) -> &[String] {
        &self.utterances
    }

    /// State display labels, in registration order.
    pub fn state_labels(&self) -> Vec<String> {
        self.states.iter().map(|s| s.label.clone()).collect()
    }

    /// Index of a state by display label. Fails fast on unknown keys.
    pub fn state_index(&self, label: &str) -> Result<usize, RsaError> {
        self.states
            .iter()
            .position(|s| s.label == label)
            .ok_or_else(|| RsaError::UnknownState {
                state: label.to_string(),
            })
    }

    /// Index of an utterance. Fails fast on unknown keys.
    pub fn utterance_index(&self, utterance: &str) -> Result<usize, RsaError> {
        self.utterances
            .iter()
            .position(|u| u == utterance)
            .ok_or_else(|| RsaError::UnknownUtterance {
                utterance: utterance.to_string(),
            })
    }

    /// The meaning relation by key, checking membership of both
    /// arguments. Calling with unregistered values is a usage error.
    pub fn meaning(&self, state: &str, utterance: &str) -> Result<bool, RsaError> {
        let s = self.state_index(state)?;
        self.utterance_index(utterance)?;
        Ok(self.states[s].describes(utterance))
    }

    /// The |utterances| × |states| truth matrix: 1.0 where the
    /// utterance is literally true of the state, else 0.0. This is
    /// the sole input to the base of the RSA recursion.
    pub fn truth_matrix(&self) -> Vec<Vec<f64>> {
        self.utterances
            .iter()
            .map(|u| {
                self.states
                    .iter()
                    .map(|s| if s.describes(u) { 1.0 } else { 0.0 })
                    .collect()
            })
            .collect()
    }
}
