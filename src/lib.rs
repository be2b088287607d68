//! # nwdist
//!
//! Needleman-Wunsch global-alignment (edit) distance between genetic
//! sequences, tolerant of non-base characters embedded in the input
//! (FASTA headers, line breaks, ...).
//!
//! Three engines evaluate the same recurrence and agree bit-exactly on
//! every input:
//! - [`Memo`]: top-down with memoization; visits only reachable cells.
//! - [`Tabulation`]: bottom-up row-major fill of the full table.
//! - [`Blocked`]: the same fill swept in square tiles for cache locality.
//!
//! ```
//! use nwdist::{Aligner, CostModel, Dna, Tabulation};
//!
//! let engine = Tabulation::new(CostModel::default(), Dna::new());
//! assert_eq!(engine.cost(b"ACGT", b"AC>r1\nGT"), 0);
//! ```

mod base;
mod cost_model;
mod engines;

#[cfg(feature = "cli")]
pub mod cli;

pub use base::{BaseClassifier, Dna};
pub use cost_model::{Cost, CostModel};
pub use engines::{Aligner, Blocked, Memo, Seq, Sequence, Tabulation};
