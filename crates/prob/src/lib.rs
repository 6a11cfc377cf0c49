//! # rsa-prob — Finite Probability Substrate
//!
//! Distributions and conditional probability tables over small finite
//! sets, built for exact enumeration: no sampling, no approximate
//! inference, just weights and normalization.
//!
//! ## Core Concepts
//!
//! - **A distribution is a normalized weight vector**: [`Dist`] holds
//!   non-negative entries summing to 1 within [`PROB_TOLERANCE`].
//! - **A conditional distribution is a row of a table**: [`Table`] is
//!   a row-stochastic matrix where `rows[i][j]` = P(j | i).
//! - **Normalization is construction**: [`Table::from_weights`] turns
//!   any matrix of non-negative weights into a valid table, and an
//!   all-zero row is a typed error, never a NaN row.
//!
//! ## Example
//!
//! ```rust
//! use rsa_prob::{Dist, Table};
//!
//! // A truth matrix: which of 3 objects each of 2 words applies to.
//! let listener = Table::from_weights(vec![
//!     vec![1.0, 1.0, 0.0],  // word 0 is true of objects 0 and 1
//!     vec![0.0, 0.0, 1.0],  // word 1 is true of object 2 only
//! ]).unwrap();
//!
//! let row: Dist = listener.row(0).unwrap();
//! assert!((row.p[0] - 0.5).abs() < 1e-12);
//! ```

mod dist;
mod error;
mod table;

pub use dist::Dist;
pub use error::ProbError;
pub use table::Table;

/// Tolerance for probability comparisons.
pub const PROB_TOLERANCE: f64 = 1e-9;
