//! Top-down memoized evaluation of the recurrence.

use super::{oriented, Aligner, Seq, Table};
use crate::base::BaseClassifier;
use crate::cost_model::{Cost, CostModel};
use std::cmp::min;

/// Marks a cell as not yet computed. Outside the valid range, since
/// distances are never negative.
const NOT_YET_COMPUTED: Cost = -1;

/// The memoized top-down engine.
///
/// Uses the suffix formulation: cell `(i, j)` holds the distance between
/// `x[i..]` and `y[j..]`, and the answer is cell `(0, 0)`. Only cells
/// reachable from `(0, 0)` are evaluated, each exactly once.
///
/// The descent is driven by an explicit worklist instead of the call stack:
/// a cell stays on the stack until all its dependencies are memoized, so
/// stack usage is bounded even for sequence lengths where recursion of
/// depth `M + N` would overflow.
pub struct Memo<B> {
    pub cm: CostModel,
    pub bases: B,
}

impl<B: BaseClassifier> Memo<B> {
    pub fn new(cm: CostModel, bases: B) -> Self {
        Memo { cm, bases }
    }

    /// Try to compute cell `(i, j)` from the memo table.
    ///
    /// Returns the cell's value when every dependency is memoized, or the
    /// first missing dependency otherwise.
    fn evaluate(
        &self,
        x: Seq,
        y: Seq,
        memo: &Table,
        i: usize,
        j: usize,
    ) -> Result<Cost, (usize, usize)> {
        let (m, n) = (x.len(), y.len());
        let get = |i: usize, j: usize| {
            let v = memo[(i, j)];
            if v == NOT_YET_COMPUTED {
                Err((i, j))
            } else {
                Ok(v)
            }
        };

        if i == m {
            // The long sequence is exhausted; the rest of the short one is
            // inserted (or skipped).
            return if j == n {
                Ok(0)
            } else {
                Ok(self.cm.indel_or_skip(&self.bases, y[j]) + get(i, j + 1)?)
            };
        }
        if j == n {
            return Ok(self.cm.indel_or_skip(&self.bases, x[i]) + get(i + 1, j)?);
        }

        let cx = x[i];
        let cy = y[j];
        if !self.bases.is_base(cx) {
            return get(i + 1, j);
        }
        if !self.bases.is_base(cy) {
            return get(i, j + 1);
        }

        let align = self.cm.sub_cost(&self.bases, cx, cy) + get(i + 1, j + 1)?;
        let delete = self.cm.indel + get(i + 1, j)?;
        let insert = self.cm.indel + get(i, j + 1)?;
        Ok(min(align, min(delete, insert)))
    }
}

impl<B: BaseClassifier> Aligner for Memo<B> {
    fn cost(&self, a: Seq, b: Seq) -> Cost {
        let (x, y) = oriented(a, b);
        let (m, n) = (x.len(), y.len());
        let mut memo = Table::filled(m + 1, n + 1, NOT_YET_COMPUTED);

        // Evaluate (0, 0). Every dependency strictly increases `i`, `j`, or
        // both, so each cell is pushed a bounded number of times and the
        // worklist terminates.
        let mut stack = vec![(0, 0)];
        while let Some(&(i, j)) = stack.last() {
            if memo[(i, j)] != NOT_YET_COMPUTED {
                stack.pop();
                continue;
            }
            match self.evaluate(x, y, &memo, i, j) {
                Ok(v) => {
                    memo[(i, j)] = v;
                    stack.pop();
                }
                Err(dep) => stack.push(dep),
            }
        }
        memo[(0, 0)]
    }
}
