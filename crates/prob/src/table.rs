//! Conditional probability tables over finite sets.

use serde::Serialize;

use crate::dist::Dist;
use crate::error::ProbError;
use crate::PROB_TOLERANCE;

/// A row-stochastic conditional probability table.
///
/// `rows[i][j]` = P(outcome = j | condition = i), and every row sums
/// to 1. The only ways to build a `Table` are [`Table::from_rows`]
/// (validates an already-normalized matrix) and [`Table::from_weights`]
/// (normalizes each row of non-negative weights), so the invariant
/// holds for every constructed value.
///
/// # Example
///
/// ```rust
/// use rsa_prob::Table;
///
/// // Normalize a 0/1 truth matrix row by row.
/// let t = Table::from_weights(vec![
///     vec![1.0, 1.0, 0.0],
///     vec![0.0, 0.0, 1.0],
/// ]).unwrap();
///
/// assert!((t.value(0, 0).unwrap() - 0.5).abs() < 1e-12);
/// assert!((t.value(1, 2).unwrap() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    rows: Vec<Vec<f64>>,
    n_rows: usize,
    n_cols: usize,
}

impl Table {
    /// Create a table from an already row-stochastic matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is empty or ragged, contains a
    /// negative or non-finite entry, or any row doesn't sum to 1
    /// (within tolerance).
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ProbError> {
        let (n_rows, n_cols) = Self::check_shape(&rows)?;

        for (i, row) in rows.iter().enumerate() {
            let sum: f64 = row.iter().sum();
            if (sum - 1.0).abs() > PROB_TOLERANCE {
                return Err(ProbError::RowNotNormalized { row: i, sum });
            }
        }

        Ok(Self {
            rows,
            n_rows,
            n_cols,
        })
    }

    /// Create a table by normalizing each row of non-negative weights.
    ///
    /// This is the workhorse for conditional distributions defined up
    /// to proportionality: fill in unnormalized weights, divide each
    /// row by its total.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is empty or ragged, a weight is
    /// negative or non-finite, or a row sums to zero
    /// ([`ProbError::ZeroRow`] names the offending row).
    pub fn from_weights(weights: Vec<Vec<f64>>) -> Result<Self, ProbError> {
        let (n_rows, n_cols) = Self::check_shape(&weights)?;

        let mut rows = Vec::with_capacity(n_rows);
        for (i, row) in weights.into_iter().enumerate() {
            let total: f64 = row.iter().sum();
            if total <= 0.0 {
                return Err(ProbError::ZeroRow { row: i });
            }
            rows.push(row.into_iter().map(|w| w / total).collect());
        }

        Ok(Self {
            rows,
            n_rows,
            n_cols,
        })
    }

    fn check_shape(rows: &[Vec<f64>]) -> Result<(usize, usize), ProbError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(ProbError::EmptyTable);
        }

        let n_cols = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(ProbError::RaggedRows);
            }
            if row.iter().any(|x| !x.is_finite()) {
                return Err(ProbError::NonFiniteWeight { row: i });
            }
            if row.iter().any(|&x| x < 0.0) {
                return Err(ProbError::NegativeProbability);
            }
        }

        Ok((rows.len(), n_cols))
    }

    /// Number of conditioning values (rows).
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of outcomes (columns).
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// The i-th conditional distribution.
    pub fn row(&self, i: usize) -> Result<Dist, ProbError> {
        if i >= self.n_rows {
            return Err(ProbError::IndexOutOfBounds {
                index: i,
                size: self.n_rows,
            });
        }
        Ok(Dist {
            p: self.rows[i].clone(),
        })
    }

    /// A single conditional probability P(outcome = j | condition = i).
    pub fn value(&self, i: usize, j: usize) -> Result<f64, ProbError> {
        if i >= self.n_rows {
            return Err(ProbError::IndexOutOfBounds {
                index: i,
                size: self.n_rows,
            });
        }
        if j >= self.n_cols {
            return Err(ProbError::IndexOutOfBounds {
                index: j,
                size: self.n_cols,
            });
        }
        Ok(self.rows[i][j])
    }

    /// Borrow the underlying matrix.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_valid() {
        let t = Table::from_rows(vec![vec![0.3, 0.7], vec![0.5, 0.5]]).unwrap();
        assert_eq!(t.n_rows(), 2);
        assert_eq!(t.n_cols(), 2);
    }

    #[test]
    fn test_from_rows_not_normalized() {
        let result = Table::from_rows(vec![vec![0.3, 0.6]]);
        assert!(matches!(result, Err(ProbError::RowNotNormalized { .. })));
    }

    #[test]
    fn test_from_weights_normalizes() {
        let t = Table::from_weights(vec![vec![1.0, 1.0], vec![3.0, 1.0]]).unwrap();
        assert!((t.value(0, 0).unwrap() - 0.5).abs() < PROB_TOLERANCE);
        assert!((t.value(1, 0).unwrap() - 0.75).abs() < PROB_TOLERANCE);
    }

    #[test]
    fn test_from_weights_rows_sum_to_one() {
        let t = Table::from_weights(vec![vec![0.2, 5.0, 1.3], vec![1e-9, 1.0, 1e-9]]).unwrap();
        for i in 0..t.n_rows() {
            let sum: f64 = t.row(i).unwrap().p.iter().sum();
            assert!((sum - 1.0).abs() < PROB_TOLERANCE);
        }
    }

    #[test]
    fn test_from_weights_zero_row() {
        let result = Table::from_weights(vec![vec![1.0, 1.0], vec![0.0, 0.0]]);
        assert!(matches!(result, Err(ProbError::ZeroRow { row: 1 })));
    }

    #[test]
    fn test_from_weights_ragged() {
        let result = Table::from_weights(vec![vec![1.0, 1.0], vec![1.0]]);
        assert!(matches!(result, Err(ProbError::RaggedRows)));
    }

    #[test]
    fn test_from_weights_non_finite() {
        let result = Table::from_weights(vec![vec![1.0, f64::NAN]]);
        assert!(matches!(result, Err(ProbError::NonFiniteWeight { row: 0 })));
    }

    #[test]
    fn test_row_out_of_bounds() {
        let t = Table::from_weights(vec![vec![1.0, 1.0]]).unwrap();
        assert!(matches!(
            t.row(3),
            Err(ProbError::IndexOutOfBounds { index: 3, size: 1 })
        ));
    }
}
