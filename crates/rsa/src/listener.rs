//! The pragmatic listener (L1): Bayesian inversion of the speaker.
//!
//! L1 infers the intended state from an utterance by asking which
//! states would have led the pragmatic speaker to produce it:
//!
//! ```text
//! P_L1(s | u) ∝ P_S1(u | s) · P(s)
//! ```
//!
//! The prior is structurally uniform unless configured. Every entry
//! of the assembled matrix gets the listener epsilon added before
//! normalization; it is larger than the speaker's because the
//! speaker's outputs can already be epsilon-scale.
//!
//! This is where pragmatic disambiguation happens: "blue" is split
//! 50/50 by the literal listener, but L1 favors the blue square,
//! because a speaker seeing the blue circle had the unambiguous
//! "circle" available and a speaker seeing the blue square had no
//! better alternative.

use log::debug;

use rsa_prob::Table;

use crate::config::RsaConfig;
use crate::error::RsaError;
use crate::output::{ProbTable, StageOutput};
use crate::speaker::speaker_table;
use crate::world::RefGame;

/// Build the full |utterances| × |states| pragmatic-listener table.
///
/// Recomputes the speaker table (and through it the literal listener)
/// from scratch on every call, like the reference pipeline.
pub fn listener_table(game: &RefGame, config: &RsaConfig) -> Result<ProbTable, RsaError> {
    let s1 = speaker_table(game, config)?;

    let n_states = game.states().len();
    let n_utterances = game.utterances().len();

    let mut weights = vec![vec![0.0; n_states]; n_utterances];
    for (u, row) in weights.iter_mut().enumerate() {
        for (s, w) in row.iter_mut().enumerate() {
            *w = s1.table().value(s, u)? * config.prior_factor(s) + config.listener_epsilon;
        }
    }

    let table = Table::from_weights(weights)?;

    debug!(
        "pragmatic listener table (alpha = {}): {} utterances x {} states",
        config.alpha,
        table.n_rows(),
        table.n_cols()
    );

    Ok(ProbTable::new(
        game.utterances().to_vec(),
        game.state_labels(),
        table,
    ))
}

/// The pragmatic listener with the reference defaults.
///
/// Returns the full table plus the distribution over states for the
/// given utterance.
///
/// # Example
///
/// ```rust
/// use rsa_game::{pragmatic_listener, RefGame};
///
/// let game = RefGame::basic_scene();
/// let out = pragmatic_listener(&game, "blue").unwrap();
/// // Literal 50/50 becomes 60/40 in favor of the blue square.
/// assert!(out.row.prob("blue-square").unwrap() > out.row.prob("blue-circle").unwrap());
/// ```
pub fn pragmatic_listener(game: &RefGame, utterance: &str) -> Result<StageOutput, RsaError> {
    pragmatic_listener_with(game, utterance, &RsaConfig::default())
}

/// The pragmatic listener under an explicit configuration.
pub fn pragmatic_listener_with(
    game: &RefGame,
    utterance: &str,
    config: &RsaConfig,
) -> Result<StageOutput, RsaError> {
    game.utterance_index(utterance)?;
    let table = listener_table(game, config)?;
    let row = table.row(utterance)?;
    Ok(StageOutput { table, row })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa_prob::PROB_TOLERANCE;

    #[test]
    fn test_blue_disambiguates_toward_blue_square() {
        let game = RefGame::basic_scene();
        let out = pragmatic_listener(&game, "blue").unwrap();

        let square = out.row.prob("blue-square").unwrap();
        let circle = out.row.prob("blue-circle").unwrap();
        let green = out.row.prob("green-square").unwrap();

        // S1(blue | blue-square) = 1/2, S1(blue | blue-circle) = 1/3,
        // so inversion gives 0.6 / 0.4 up to epsilon residue.
        assert!((square - 0.6).abs() < 1e-3);
        assert!((circle - 0.4).abs() < 1e-3);
        assert!(square > circle);
        assert!(circle > green);
    }

    #[test]
    fn test_square_disambiguates_toward_blue_square() {
        let game = RefGame::basic_scene();
        let out = pragmatic_listener(&game, "square").unwrap();
        // Symmetric to "blue": the green square's speaker had the
        // unambiguous "green" available, so "square" points at the
        // blue square.
        assert!(out.row.prob("blue-square").unwrap() > out.row.prob("green-square").unwrap());
    }

    #[test]
    fn test_rows_sum_to_one() {
        let game = RefGame::basic_scene();
        let table = listener_table(&game, &RsaConfig::default()).unwrap();
        for u in game.utterances() {
            let sum: f64 = table.row(u).unwrap().probs().iter().sum();
            assert!((sum - 1.0).abs() < PROB_TOLERANCE);
        }
    }

    #[test]
    fn test_unknown_utterance_fails_fast() {
        let game = RefGame::basic_scene();
        assert!(matches!(
            pragmatic_listener(&game, "red"),
            Err(RsaError::UnknownUtterance { .. })
        ));
    }

    #[test]
    fn test_default_inversion_weights_are_speaker_plus_epsilon() {
        // With no configured prior, the inversion weight for each
        // state is exactly S1(u | s) + listener_epsilon; the uniform
        // default must not rescale the epsilon by the state count.
        let game = RefGame::basic_scene();
        let config = RsaConfig::default();
        let s1 = speaker_table(&game, &config).unwrap();
        let l1 = listener_table(&game, &config).unwrap();

        for u in 0..game.utterances().len() {
            let weights: Vec<f64> = (0..game.states().len())
                .map(|s| s1.table().value(s, u).unwrap() + config.listener_epsilon)
                .collect();
            let total: f64 = weights.iter().sum();
            for (s, w) in weights.iter().enumerate() {
                let got = l1.table().value(u, s).unwrap();
                assert!(
                    (got - w / total).abs() < 1e-12,
                    "L1 weight mismatch at u={u}, s={s}: {got}"
                );
            }
        }
    }

    #[test]
    fn test_prior_enters_inversion() {
        let game = RefGame::basic_scene();
        // A strong prior on the blue circle overrides the speaker's
        // preference for calling the blue square "blue".
        let config = RsaConfig {
            state_prior: Some(vec![0.1, 0.8, 0.1]),
            ..RsaConfig::default()
        };
        let out = pragmatic_listener_with(&game, "blue", &config).unwrap();
        assert!(out.row.prob("blue-circle").unwrap() > out.row.prob("blue-square").unwrap());
    }

    #[test]
    fn test_failed_query_leaves_game_usable() {
        let game = RefGame::basic_scene();
        let before = pragmatic_listener(&game, "blue").unwrap();
        let _ = pragmatic_listener(&game, "red").unwrap_err();
        let after = pragmatic_listener(&game, "blue").unwrap();
        assert_eq!(before, after);
    }
}
