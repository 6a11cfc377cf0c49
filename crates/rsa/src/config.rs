//! Stage configuration: alpha, priors, costs, and stabilization.

use serde::Serialize;

use rsa_prob::Dist;

use crate::error::RsaError;
use crate::world::RefGame;

/// Stabilization constant added to literal-listener probabilities
/// before the speaker takes their logarithm. Guards `ln(0)`; a
/// zero-probability utterance keeps a vanishingly small weight
/// instead of raising a domain error.
pub const SPEAKER_EPSILON: f64 = 1e-9;

/// Stabilization constant added to every entry of the pragmatic
/// listener's inversion matrix before normalization. Larger than the
/// speaker's, matching the reference computation.
pub const LISTENER_EPSILON: f64 = 1e-7;

/// Knobs of the formal RSA model, defaulting to the reference
/// computation's implicit values.
///
/// - `alpha = 1`: speaker optimality (softmax sharpness),
/// - `state_prior = None`: structural uniform prior over states,
/// - `utterance_cost = None`: zero cost for every utterance,
/// - per-stage epsilons as named constants.
///
/// With the defaults, all three stages reproduce the reference
/// pipeline exactly.
///
/// # Example
///
/// ```rust
/// use rsa_game::RsaConfig;
///
/// let sharp = RsaConfig::with_alpha(4.0);
/// assert_eq!(sharp.state_prior, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RsaConfig {
    /// Speaker optimality. Higher values sharpen the speaker toward
    /// the utterances that maximize literal-listener likelihood.
    pub alpha: f64,
    /// Optional prior P(s) over states, in state registration order.
    /// `None` means uniform, applied structurally (never computed).
    pub state_prior: Option<Vec<f64>>,
    /// Optional cost C(u) per utterance, in vocabulary order.
    /// `None` means cost zero everywhere.
    pub utterance_cost: Option<Vec<f64>>,
    /// Epsilon added inside the speaker's `ln`.
    pub speaker_epsilon: f64,
    /// Epsilon added to the listener's inversion matrix.
    pub listener_epsilon: f64,
}

impl Default for RsaConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            state_prior: None,
            utterance_cost: None,
            speaker_epsilon: SPEAKER_EPSILON,
            listener_epsilon: LISTENER_EPSILON,
        }
    }
}

impl RsaConfig {
    /// The default configuration with a different alpha.
    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            alpha,
            ..Self::default()
        }
    }

    /// Check this configuration against a game's dimensions.
    pub fn validate(&self, game: &RefGame) -> Result<(), RsaError> {
        if !self.alpha.is_finite() {
            return Err(RsaError::NonFiniteAlpha { alpha: self.alpha });
        }
        if !self.speaker_epsilon.is_finite() || self.speaker_epsilon <= 0.0 {
            return Err(RsaError::InvalidEpsilon {
                epsilon: self.speaker_epsilon,
            });
        }
        if !self.listener_epsilon.is_finite() || self.listener_epsilon < 0.0 {
            return Err(RsaError::InvalidEpsilon {
                epsilon: self.listener_epsilon,
            });
        }

        if let Some(prior) = &self.state_prior {
            if prior.len() != game.states().len() {
                return Err(RsaError::PriorSize {
                    expected: game.states().len(),
                    got: prior.len(),
                });
            }
            // Must be a valid distribution over states.
            Dist::new(prior.clone())?;
        }

        if let Some(costs) = &self.utterance_cost {
            if costs.len() != game.utterances().len() {
                return Err(RsaError::CostSize {
                    expected: game.utterances().len(),
                    got: costs.len(),
                });
            }
            for (u, c) in game.utterances().iter().zip(costs) {
                if !c.is_finite() {
                    return Err(RsaError::NonFiniteCost {
                        utterance: u.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Prior weight of the s-th state as a multiplicative factor.
    ///
    /// 1.0 when no prior is configured: the uniform default is
    /// structural and never enters the arithmetic, so the listener
    /// epsilon keeps its configured scale.
    pub(crate) fn prior_factor(&self, s: usize) -> f64 {
        self.state_prior.as_ref().map_or(1.0, |p| p[s])
    }

    /// Cost of the u-th utterance. Zero when unset.
    pub(crate) fn cost(&self, u: usize) -> f64 {
        self.utterance_cost.as_ref().map_or(0.0, |c| c[u])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference() {
        let config = RsaConfig::default();
        assert_eq!(config.alpha, 1.0);
        assert_eq!(config.state_prior, None);
        assert_eq!(config.utterance_cost, None);
        assert_eq!(config.speaker_epsilon, SPEAKER_EPSILON);
        assert_eq!(config.listener_epsilon, LISTENER_EPSILON);
    }

    #[test]
    fn test_validate_default() {
        let game = RefGame::basic_scene();
        assert!(RsaConfig::default().validate(&game).is_ok());
    }

    #[test]
    fn test_validate_rejects_non_finite_alpha() {
        let game = RefGame::basic_scene();
        let config = RsaConfig::with_alpha(f64::NAN);
        assert!(matches!(
            config.validate(&game),
            Err(RsaError::NonFiniteAlpha { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_speaker_epsilon() {
        let game = RefGame::basic_scene();
        let config = RsaConfig {
            speaker_epsilon: 0.0,
            ..RsaConfig::default()
        };
        assert!(matches!(
            config.validate(&game),
            Err(RsaError::InvalidEpsilon { .. })
        ));
    }

    #[test]
    fn test_validate_prior_size_and_mass() {
        let game = RefGame::basic_scene();

        let wrong_len = RsaConfig {
            state_prior: Some(vec![0.5, 0.5]),
            ..RsaConfig::default()
        };
        assert!(matches!(
            wrong_len.validate(&game),
            Err(RsaError::PriorSize {
                expected: 3,
                got: 2
            })
        ));

        let not_normalized = RsaConfig {
            state_prior: Some(vec![0.5, 0.5, 0.5]),
            ..RsaConfig::default()
        };
        assert!(matches!(
            not_normalized.validate(&game),
            Err(RsaError::Prob(_))
        ));
    }

    #[test]
    fn test_validate_cost_vector() {
        let game = RefGame::basic_scene();

        let wrong_len = RsaConfig {
            utterance_cost: Some(vec![0.0; 3]),
            ..RsaConfig::default()
        };
        assert!(matches!(
            wrong_len.validate(&game),
            Err(RsaError::CostSize {
                expected: 4,
                got: 3
            })
        ));

        let bad_entry = RsaConfig {
            utterance_cost: Some(vec![0.0, 0.0, f64::INFINITY, 0.0]),
            ..RsaConfig::default()
        };
        assert!(matches!(
            bad_entry.validate(&game),
            Err(RsaError::NonFiniteCost { .. })
        ));
    }

    #[test]
    fn test_prior_factor() {
        // Unset prior is a structural no-op factor.
        let config = RsaConfig::default();
        assert_eq!(config.prior_factor(0), 1.0);
        assert_eq!(config.prior_factor(2), 1.0);

        let with_prior = RsaConfig {
            state_prior: Some(vec![0.2, 0.3, 0.5]),
            ..RsaConfig::default()
        };
        assert_eq!(with_prior.prior_factor(0), 0.2);
        assert_eq!(with_prior.prior_factor(2), 0.5);
    }
}
