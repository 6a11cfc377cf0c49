//! The pragmatic speaker (S1): soft-max rational utterance choice.
//!
//! S1 chooses an utterance for a state by reasoning about how the
//! literal listener would interpret it:
//!
//! ```text
//! P_S1(u | s) ∝ exp(α · (ln P_L0(s | u) - C(u)))
//! ```
//!
//! With zero cost this is `P_L0(s | u)^α`. Raw zeros from L0 would
//! make the logarithm a floating-point domain error, so a small
//! positive epsilon is added to the probability first; a false
//! utterance keeps a vanishingly small weight instead of exact zero.
//! With α = 1 the output is insensitive to the exact epsilon at
//! displayed precision.

use log::debug;

use rsa_prob::Table;

use crate::config::RsaConfig;
use crate::error::RsaError;
use crate::literal::literal_table;
use crate::output::{ProbTable, StageOutput};
use crate::world::RefGame;

/// Build the full |states| × |utterances| pragmatic-speaker table.
///
/// Recomputes the literal-listener table from scratch on every call,
/// like the reference pipeline.
pub fn speaker_table(game: &RefGame, config: &RsaConfig) -> Result<ProbTable, RsaError> {
    let l0 = literal_table(game, config)?;

    let n_states = game.states().len();
    let n_utterances = game.utterances().len();

    let mut weights = vec![vec![0.0; n_utterances]; n_states];
    for (s, row) in weights.iter_mut().enumerate() {
        for (u, w) in row.iter_mut().enumerate() {
            let p = l0.table().value(u, s)?;
            let utility = (p + config.speaker_epsilon).ln() - config.cost(u);
            *w = (config.alpha * utility).exp();
        }
    }

    let table = Table::from_weights(weights)?;

    debug!(
        "pragmatic speaker table (alpha = {}): {} states x {} utterances",
        config.alpha,
        table.n_rows(),
        table.n_cols()
    );

    Ok(ProbTable::new(
        game.state_labels(),
        game.utterances().to_vec(),
        table,
    ))
}

/// The pragmatic speaker for one state, with reference defaults
/// except alpha.
///
/// Returns the full table plus the distribution over utterances for
/// the given state.
///
/// # Example
///
/// ```rust
/// use rsa_game::{pragmatic_speaker, RefGame};
///
/// let game = RefGame::basic_scene();
/// let out = pragmatic_speaker(&game, "blue-square", 1.0).unwrap();
/// // "blue" and "square" are equally good; "green" and "circle" are
/// // false of the state and keep only the epsilon residual.
/// assert!((out.row.prob("blue").unwrap() - 0.5).abs() < 1e-6);
/// assert!(out.row.prob("green").unwrap() < 1e-6);
/// ```
pub fn pragmatic_speaker(game: &RefGame, state: &str, alpha: f64) -> Result<StageOutput, RsaError> {
    pragmatic_speaker_with(game, state, &RsaConfig::with_alpha(alpha))
}

/// The pragmatic speaker under an explicit configuration.
pub fn pragmatic_speaker_with(
    game: &RefGame,
    state: &str,
    config: &RsaConfig,
) -> Result<StageOutput, RsaError> {
    game.state_index(state)?;
    let table = speaker_table(game, config)?;
    let row = table.row(state)?;
    Ok(StageOutput { table, row })
}
