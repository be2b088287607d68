//! Tile-order evaluation of the recurrence, for cache locality.

use super::{fill_boundary, fill_cell, oriented, Aligner, Seq, Table};
use crate::base::BaseClassifier;
use crate::cost_model::{Cost, CostModel};

/// The cache-blocked tabulation engine.
///
/// Identical recurrence and table as [`super::Tabulation`]; only the
/// traversal order differs. The interior of the table is partitioned into
/// `block_size`-sided square tiles, swept row-major over tiles and
/// row-major within each tile. A cell's three dependencies lie either
/// earlier in its own tile or in the already-completed tile above or to
/// the left, so this is a valid topological order and the output matches
/// [`super::Tabulation`] for every `block_size >= 1`. Tiles at the right
/// and bottom edges are simply clipped; `block_size` never affects the
/// result, only the memory access pattern.
pub struct Blocked<B> {
    pub cm: CostModel,
    pub bases: B,
    pub block_size: usize,
}

impl<B: BaseClassifier> Blocked<B> {
    pub fn new(cm: CostModel, bases: B, block_size: usize) -> Self {
        assert!(block_size >= 1, "block_size must be positive");
        Blocked {
            cm,
            bases,
            block_size,
        }
    }
}

impl<B: BaseClassifier> Aligner for Blocked<B> {
    fn cost(&self, a: Seq, b: Seq) -> Cost {
        assert!(self.block_size >= 1, "block_size must be positive");
        let (x, y) = oriented(a, b);
        let (m, n) = (x.len(), y.len());
        let mut table = Table::filled(m + 1, n + 1, 0);
        fill_boundary(&self.cm, &self.bases, x, y, &mut table);
        for bi in (1..=m).step_by(self.block_size) {
            for bj in (1..=n).step_by(self.block_size) {
                let i_end = (bi + self.block_size - 1).min(m);
                let j_end = (bj + self.block_size - 1).min(n);
                for i in bi..=i_end {
                    for j in bj..=j_end {
                        fill_cell(&self.cm, &self.bases, x, y, &mut table, i, j);
                    }
                }
            }
        }
        table[(m, n)]
    }
}
