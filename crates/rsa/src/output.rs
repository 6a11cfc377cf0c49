//! Labeled query results: distributions and full tables.
//!
//! Every stage answers with a [`StageOutput`]: the full conditional
//! table (all conditioning values × all outcomes) for inspection,
//! plus the single row that was asked for, keyed by display label.

use std::fmt;

use serde::Serialize;

use rsa_prob::{Dist, Table};

use crate::error::RsaError;

/// An ordered mapping from outcome label to probability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    labels: Vec<String>,
    dist: Dist,
}

impl Distribution {
    pub(crate) fn new(labels: Vec<String>, dist: Dist) -> Self {
        debug_assert_eq!(labels.len(), dist.len());
        Self { labels, dist }
    }

    /// Probability of a labeled outcome, `None` for unknown labels.
    pub fn prob(&self, label: &str) -> Option<f64> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.dist.p[i])
    }

    /// Iterate (label, probability) pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.dist.p.iter().copied())
    }

    /// Outcome labels in order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Probabilities in label order.
    pub fn probs(&self) -> &[f64] {
        &self.dist.p
    }

    /// The most probable outcome and its mass (first on ties).
    pub fn best(&self) -> (&str, f64) {
        let i = self.dist.argmax();
        (&self.labels[i], self.dist.p[i])
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        write!(f, "{{")?;
        for (label, p) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{label}: {p:.4}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

/// A full conditional probability table with row and column labels.
///
/// Rows are conditioning values (utterances for the listeners, states
/// for the speaker); columns are outcomes. The `Display` rendering is
/// the system's in-memory tabular output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbTable {
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    table: Table,
}

impl ProbTable {
    pub(crate) fn new(row_labels: Vec<String>, col_labels: Vec<String>, table: Table) -> Self {
        debug_assert_eq!(row_labels.len(), table.n_rows());
        debug_assert_eq!(col_labels.len(), table.n_cols());
        Self {
            row_labels,
            col_labels,
            table,
        }
    }

    /// The conditional distribution for a labeled row.
    pub fn row(&self, label: &str) -> Result<Distribution, RsaError> {
        let i = self
            .row_labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| RsaError::UnknownLabel {
                label: label.to_string(),
            })?;
        Ok(Distribution::new(self.col_labels.clone(), self.table.row(i)?))
    }

    /// Row labels (conditioning values), in order.
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Column labels (outcomes), in order.
    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// The underlying row-stochastic table.
    pub fn table(&self) -> &Table {
        &self.table
    }
}

impl fmt::Display for ProbTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .row_labels
            .iter()
            .chain(self.col_labels.iter())
            .map(String::len)
            .max()
            .unwrap_or(0)
            .max(6);

        write!(f, "{:>width$} |", "")?;
        for c in &self.col_labels {
            write!(f, " {c:>width$}")?;
        }
        writeln!(f)?;

        for (i, r) in self.row_labels.iter().enumerate() {
            write!(f, "{r:>width$} |")?;
            for j in 0..self.col_labels.len() {
                let v = self.table.rows()[i][j];
                write!(f, " {v:>width$.4}")?;
            }
            if i + 1 < self.row_labels.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// What every stage returns: the full table plus the queried row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageOutput {
    /// The full normalized table over all conditioning values.
    pub table: ProbTable,
    /// The row for the requested utterance or state.
    pub row: Distribution,
}
