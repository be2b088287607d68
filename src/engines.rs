//! The three distance engines and what they share.
//!
//! Each engine realizes the same recurrence over a `(M+1) x (N+1)` table,
//! where `M >= N` are the lengths of the longer and shorter input. They
//! differ only in evaluation order:
//! - [`Memo`] evaluates top-down and touches only reachable cells;
//! - [`Tabulation`] fills the whole table bottom-up, row by row;
//! - [`Blocked`] fills the same table in square tiles for cache locality.

use crate::base::BaseClassifier;
use crate::cost_model::{Cost, CostModel};
use std::cmp::min;
use std::ops::{Index, IndexMut};

mod blocked;
mod memo;
mod tabulation;

#[cfg(test)]
mod tests;

pub use blocked::Blocked;
pub use memo::Memo;
pub use tabulation::Tabulation;

/// An owned sequence.
pub type Sequence = Vec<u8>;
/// A sequence slice.
pub type Seq<'a> = &'a [u8];

/// A type that computes the alignment distance between two sequences.
///
/// Implementations never fail on malformed input: non-base characters are
/// skipped at zero cost, and ambiguous bases are priced by the cost model.
pub trait Aligner {
    /// The distance between `a` and `b`.
    fn cost(&self, a: Seq, b: Seq) -> Cost;
}

/// Orient a pair of sequences so the first is the longer one.
///
/// The recurrence is symmetric, so this does not change the answer, but it
/// bounds the table at `O(M * N)` with the smaller dimension as the number
/// of columns, and makes `cost(a, b) == cost(b, a)` exact by construction
/// when lengths differ.
fn oriented<'a>(a: Seq<'a>, b: Seq<'a>) -> (Seq<'a>, Seq<'a>) {
    if a.len() >= b.len() {
        (a, b)
    } else {
        (b, a)
    }
}

/// A dense DP table: one flat allocation, addressed as `row * cols + col`.
pub(crate) struct Table {
    cols: usize,
    cells: Vec<Cost>,
}

impl Table {
    /// Allocate a `rows x cols` table with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: Cost) -> Table {
        Table {
            cols,
            cells: vec![value; rows * cols],
        }
    }
}

impl Index<(usize, usize)> for Table {
    type Output = Cost;
    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Cost {
        &self.cells[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Table {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Cost {
        &mut self.cells[i * self.cols + j]
    }
}

/// Fill row 0 and column 0 of the prefix-formulation table: running sums of
/// the indel cost over recognized bases, skipping everything else.
fn fill_boundary<B: BaseClassifier>(
    cm: &CostModel,
    bases: &B,
    x: Seq,
    y: Seq,
    table: &mut Table,
) {
    table[(0, 0)] = 0;
    for (i, &c) in x.iter().enumerate() {
        table[(i + 1, 0)] = table[(i, 0)] + cm.indel_or_skip(bases, c);
    }
    for (j, &c) in y.iter().enumerate() {
        table[(0, j + 1)] = table[(0, j)] + cm.indel_or_skip(bases, c);
    }
}

/// Compute one interior cell (`i, j >= 1`) of the prefix-formulation table
/// from its three already-filled neighbors.
///
/// Shared by [`Tabulation`] and [`Blocked`] so the two can only differ in
/// traversal order, never in the value of a cell.
#[inline]
fn fill_cell<B: BaseClassifier>(
    cm: &CostModel,
    bases: &B,
    x: Seq,
    y: Seq,
    table: &mut Table,
    i: usize,
    j: usize,
) {
    let cx = x[i - 1];
    let cy = y[j - 1];
    table[(i, j)] = if !bases.is_base(cx) {
        table[(i - 1, j)]
    } else if !bases.is_base(cy) {
        table[(i, j - 1)]
    } else {
        let align = table[(i - 1, j - 1)] + cm.sub_cost(bases, cx, cy);
        let delete = table[(i - 1, j)] + cm.indel;
        let insert = table[(i, j - 1)] + cm.indel;
        min(align, min(delete, insert))
    };
}
