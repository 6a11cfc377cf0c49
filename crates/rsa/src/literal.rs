//! The literal listener (L0): base case of the RSA recursion.
//!
//! L0 interprets an utterance by literal truth alone:
//!
//! ```text
//! P_L0(s | u) ∝ ⟦u⟧(s) · P(s)
//! ```
//!
//! where `⟦u⟧(s)` is the 0/1 meaning relation. By default no prior
//! term enters the arithmetic (uniformity is structural), so the
//! table is exactly the row-normalized truth matrix.

use log::debug;

use rsa_prob::{ProbError, Table};

use crate::config::RsaConfig;
use crate::error::RsaError;
use crate::output::{ProbTable, StageOutput};
use crate::world::RefGame;

/// Build the full |utterances| × |states| literal-listener table.
///
/// Each row is the truth row for one utterance, weighted by the state
/// prior when one is configured, and normalized to sum to 1. An all-zero row (possible only
/// when a caller-supplied prior puts zero mass on every state an
/// utterance is true of; vacuous utterances are already rejected at
/// game construction) is a [`RsaError::VacuousUtterance`], never a
/// NaN row.
pub fn literal_table(game: &RefGame, config: &RsaConfig) -> Result<ProbTable, RsaError> {
    config.validate(game)?;

    let weights: Vec<Vec<f64>> = game
        .truth_matrix()
        .into_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(s, t)| t * config.prior_factor(s))
                .collect()
        })
        .collect();

    let table = Table::from_weights(weights).map_err(|e| match e {
        ProbError::ZeroRow { row } => RsaError::VacuousUtterance {
            utterance: game.utterances()[row].clone(),
        },
        other => other.into(),
    })?;

    debug!(
        "literal listener table: {} utterances x {} states",
        table.n_rows(),
        table.n_cols()
    );

    Ok(ProbTable::new(
        game.utterances().to_vec(),
        game.state_labels(),
        table,
    ))
}

/// The literal listener with the reference defaults.
///
/// Returns the full table plus the distribution over states for the
/// given utterance.
///
/// # Example
///
/// ```rust
/// use rsa_game::{literal_listener, RefGame};
///
/// let game = RefGame::basic_scene();
/// let out = literal_listener(&game, "square").unwrap();
/// assert!((out.row.prob("blue-square").unwrap() - 0.5).abs() < 1e-9);
/// assert_eq!(out.row.prob("blue-circle").unwrap(), 0.0);
/// ```
pub fn literal_listener(game: &RefGame, utterance: &str) -> Result<StageOutput, RsaError> {
    literal_listener_with(game, utterance, &RsaConfig::default())
}

/// The literal listener under an explicit configuration.
pub fn literal_listener_with(
    game: &RefGame,
    utterance: &str,
    config: &RsaConfig,
) -> Result<StageOutput, RsaError> {
    // Fail fast on unknown keys before any table work.
    game.utterance_index(utterance)?;
    let table = literal_table(game, config)?;
    let row = table.row(utterance)?;
    Ok(StageOutput { table, row })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa_prob::PROB_TOLERANCE;

    #[test]
    fn test_square_is_split_between_squares() {
        let game = RefGame::basic_scene();
        let out = literal_listener(&game, "square").unwrap();
        assert!((out.row.prob("blue-square").unwrap() - 0.5).abs() < PROB_TOLERANCE);
        assert!((out.row.prob("blue-circle").unwrap()).abs() < PROB_TOLERANCE);
        assert!((out.row.prob("green-square").unwrap() - 0.5).abs() < PROB_TOLERANCE);
    }

    #[test]
    fn test_blue_is_split_between_blues() {
        let game = RefGame::basic_scene();
        let out = literal_listener(&game, "blue").unwrap();
        assert!((out.row.prob("blue-square").unwrap() - 0.5).abs() < PROB_TOLERANCE);
        assert!((out.row.prob("blue-circle").unwrap() - 0.5).abs() < PROB_TOLERANCE);
        assert!((out.row.prob("green-square").unwrap()).abs() < PROB_TOLERANCE);
    }

    #[test]
    fn test_unambiguous_utterance_is_certain() {
        let game = RefGame::basic_scene();
        let out = literal_listener(&game, "circle").unwrap();
        assert!((out.row.prob("blue-circle").unwrap() - 1.0).abs() < PROB_TOLERANCE);
    }

    #[test]
    fn test_rows_sum_to_one() {
        let game = RefGame::basic_scene();
        let table = literal_table(&game, &RsaConfig::default()).unwrap();
        for u in game.utterances() {
            let sum: f64 = table.row(u).unwrap().probs().iter().sum();
            assert!((sum - 1.0).abs() < PROB_TOLERANCE);
        }
    }

    #[test]
    fn test_unknown_utterance_fails_fast() {
        let game = RefGame::basic_scene();
        assert!(matches!(
            literal_listener(&game, "red"),
            Err(RsaError::UnknownUtterance { .. })
        ));
    }

    #[test]
    fn test_prior_shifts_interpretation() {
        let game = RefGame::basic_scene();
        let config = RsaConfig {
            state_prior: Some(vec![0.8, 0.1, 0.1]),
            ..RsaConfig::default()
        };
        let out = literal_listener_with(&game, "blue", &config).unwrap();
        // P(blue-square | blue) = 0.8 / (0.8 + 0.1)
        assert!((out.row.prob("blue-square").unwrap() - 8.0 / 9.0).abs() < PROB_TOLERANCE);
    }

    #[test]
    fn test_zero_mass_prior_row_is_rejected() {
        let game = RefGame::basic_scene();
        // All of "circle"'s truth mass (blue-circle) gets prior zero.
        let config = RsaConfig {
            state_prior: Some(vec![0.5, 0.0, 0.5]),
            ..RsaConfig::default()
        };
        let result = literal_listener_with(&game, "blue", &config);
        assert_eq!(
            result,
            Err(RsaError::VacuousUtterance {
                utterance: "circle".to_string()
            })
        );
    }
}
