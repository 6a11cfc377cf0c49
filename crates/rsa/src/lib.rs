//! # rsa-game — Rational Speech Acts over Reference Games
//!
//! An exact-enumeration implementation of the Rational Speech Acts
//! (RSA) model of pragmatic language understanding. Three nested
//! probabilistic agents reason about a small fixed world of objects
//! and one-word utterances:
//!
//! - **Literal listener (L0)**: interprets an utterance by literal
//!   truth alone — `P(s | u) ∝ ⟦u⟧(s)`.
//! - **Pragmatic speaker (S1)**: chooses utterances by how well L0
//!   would recover the intended state —
//!   `P(u | s) ∝ exp(α · ln P_L0(s | u))`.
//! - **Pragmatic listener (L1)**: inverts the speaker by Bayes'
//!   rule — `P(s | u) ∝ P_S1(u | s) · P(s)`.
//!
//! Each stage is a pure function of the game configuration: build a
//! weight matrix, normalize each row. There is no sampling and no
//! inference engine; every distribution is computed in closed form
//! over the finite domain.
//!
//! ## Example
//!
//! ```rust
//! use rsa_game::{literal_listener, pragmatic_listener, RefGame};
//!
//! let game = RefGame::basic_scene();
//!
//! // Literally, "blue" is split between the two blue objects.
//! let l0 = literal_listener(&game, "blue").unwrap();
//! assert!((l0.row.prob("blue-square").unwrap() - 0.5).abs() < 1e-9);
//!
//! // Pragmatically, the blue square is favored: a speaker seeing the
//! // blue circle would rather have said "circle".
//! let l1 = pragmatic_listener(&game, "blue").unwrap();
//! assert!(l1.row.prob("blue-square").unwrap() > l1.row.prob("blue-circle").unwrap());
//! ```
//!
//! ## Swappable world
//!
//! The three stage algorithms never mention colors or shapes; any
//! [`RefGame`] (states with attributes + vocabulary) can be
//! substituted. [`RsaConfig`] exposes the formal model's optional
//! knobs (alpha, state prior, utterance costs, stabilization
//! epsilons) with the reference computation's implicit values as
//! defaults, and [`RsaEngine`] adds optional table caching without
//! changing any output.

mod config;
mod engine;
mod error;
mod listener;
mod literal;
mod output;
mod speaker;
mod world;

pub use config::{RsaConfig, LISTENER_EPSILON, SPEAKER_EPSILON};
pub use engine::RsaEngine;
pub use error::RsaError;
pub use listener::{listener_table, pragmatic_listener, pragmatic_listener_with};
pub use literal::{literal_listener, literal_listener_with, literal_table};
pub use output::{Distribution, ProbTable, StageOutput};
pub use speaker::{pragmatic_speaker, pragmatic_speaker_with, speaker_table};
pub use world::{RefGame, WorldState};

pub use rsa_prob::{Dist, ProbError, Table, PROB_TOLERANCE};
