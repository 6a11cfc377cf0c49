//! Probability distributions over finite sets.

use serde::Serialize;

use crate::error::ProbError;
use crate::PROB_TOLERANCE;

/// A probability distribution over a finite set {0, 1, ..., n-1}.
///
/// Invariants:
/// - All probabilities are non-negative
/// - Probabilities sum to 1 (within tolerance)
///
/// # Example
///
/// ```rust
/// use rsa_prob::Dist;
///
/// // Fair coin
/// let coin = Dist::uniform(2);
/// assert!((coin.p[0] - 0.5).abs() < 1e-12);
///
/// // From unnormalized weights
/// let d = Dist::from_weights(&[1.0, 3.0]).unwrap();
/// assert!((d.p[1] - 0.75).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dist {
    /// Probability vector (sums to 1).
    pub p: Vec<f64>,
}

impl Dist {
    /// Create a new distribution from a probability vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the vector is empty, any probability is
    /// negative or non-finite, or the probabilities don't sum to 1
    /// (within tolerance).
    pub fn new(p: Vec<f64>) -> Result<Self, ProbError> {
        if p.is_empty() {
            return Err(ProbError::EmptyDistribution);
        }
        if p.iter().any(|x| !x.is_finite()) {
            return Err(ProbError::NonFiniteProbability);
        }
        if p.iter().any(|&x| x < -PROB_TOLERANCE) {
            return Err(ProbError::NegativeProbability);
        }

        let sum: f64 = p.iter().sum();
        if (sum - 1.0).abs() > PROB_TOLERANCE {
            return Err(ProbError::NotNormalized { sum });
        }

        Ok(Self { p })
    }

    /// The uniform distribution over n outcomes. Panics if n is 0.
    pub fn uniform(n: usize) -> Self {
        assert!(n > 0, "uniform distribution needs at least one outcome");
        Self {
            p: vec![1.0 / n as f64; n],
        }
    }

    /// Create a distribution by normalizing non-negative weights.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is empty, any weight is negative
    /// or non-finite, or all weights are zero.
    pub fn from_weights(weights: &[f64]) -> Result<Self, ProbError> {
        if weights.is_empty() {
            return Err(ProbError::EmptyDistribution);
        }
        if weights.iter().any(|x| !x.is_finite()) {
            return Err(ProbError::NonFiniteProbability);
        }
        if weights.iter().any(|&x| x < 0.0) {
            return Err(ProbError::NegativeProbability);
        }

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Err(ProbError::ZeroWeights);
        }

        Ok(Self {
            p: weights.iter().map(|w| w / total).collect(),
        })
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.p.len()
    }

    /// Whether the distribution has no outcomes.
    pub fn is_empty(&self) -> bool {
        self.p.is_empty()
    }

    /// Index of the most probable outcome (first one on ties).
    pub fn argmax(&self) -> usize {
        let mut best = 0;
        let mut best_p = f64::NEG_INFINITY;
        for (i, &p) in self.p.iter().enumerate() {
            if p > best_p {
                best_p = p;
                best = i;
            }
        }
        best
    }

    /// Probability of the most probable outcome.
    pub fn max_prob(&self) -> f64 {
        self.p[self.argmax()]
    }
}
