//! Bottom-up row-major evaluation of the recurrence.

use super::{fill_boundary, fill_cell, oriented, Aligner, Seq, Table};
use crate::base::BaseClassifier;
use crate::cost_model::{Cost, CostModel};

/// The iterative tabulation engine.
///
/// Uses the prefix formulation: cell `(i, j)` holds the distance between
/// `x[..i]` and `y[..j]`, and the answer is the far corner. The boundary
/// row and column are running indel sums; every interior cell is computed
/// exactly once, in row-major order, from its three neighbors. No sentinel
/// is needed.
pub struct Tabulation<B> {
    pub cm: CostModel,
    pub bases: B,
}

impl<B: BaseClassifier> Tabulation<B> {
    pub fn new(cm: CostModel, bases: B) -> Self {
        Tabulation { cm, bases }
    }
}

impl<B: BaseClassifier> Aligner for Tabulation<B> {
    fn cost(&self, a: Seq, b: Seq) -> Cost {
        let (x, y) = oriented(a, b);
        let (m, n) = (x.len(), y.len());
        let mut table = Table::filled(m + 1, n + 1, 0);
        fill_boundary(&self.cm, &self.bases, x, y, &mut table);
        for i in 1..=m {
            for j in 1..=n {
                fill_cell(&self.cm, &self.bases, x, y, &mut table, i, j);
            }
        }
        table[(m, n)]
    }
}
