//! The cost model shared by all engines.

use crate::base::BaseClassifier;
use serde::{Deserialize, Serialize};

/// Type for storing costs and distances. Signed so that `-1` is available as
/// the memoization sentinel; distances themselves are never negative.
pub type Cost = i32;

/// The three configurable weights of the recurrence.
///
/// Skipping a non-base character always costs 0 and is not configurable.
/// One instance is shared by all engines, so the memoized, tabulated, and
/// blocked variants price every edit identically.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, clap::Args)]
pub struct CostModel {
    /// Cost of aligning two differing unambiguous bases.
    #[clap(long, default_value_t = 1, help_heading = "Costs")]
    pub sub: Cost,

    /// Cost of aligning a pair with an ambiguous base on either side.
    #[clap(long, default_value_t = 1, help_heading = "Costs")]
    pub sub_unknown: Cost,

    /// Cost of inserting or deleting one base.
    #[clap(long, default_value_t = 2, help_heading = "Costs")]
    pub indel: Cost,
}

impl Default for CostModel {
    fn default() -> Self {
        CostModel {
            sub: 1,
            sub_unknown: 1,
            indel: 2,
        }
    }
}

impl CostModel {
    pub fn new(sub: Cost, sub_unknown: Cost, indel: Cost) -> Self {
        assert!(sub >= 0 && sub_unknown >= 0 && indel >= 0);
        CostModel {
            sub,
            sub_unknown,
            indel,
        }
    }

    /// Cost of aligning bases `x` and `y`. Both must be recognized bases.
    ///
    /// An ambiguous base on either side prices as `sub_unknown`; otherwise
    /// same bases are free and differing bases cost `sub`.
    pub fn sub_cost(&self, bases: &impl BaseClassifier, x: u8, y: u8) -> Cost {
        if bases.is_unknown_base(x) || bases.is_unknown_base(y) {
            self.sub_unknown
        } else if bases.is_same_base(x, y) {
            0
        } else {
            self.sub
        }
    }

    /// Cost of consuming `c` on one side only: an indel for a base, a free
    /// skip for anything else.
    pub fn indel_or_skip(&self, bases: &impl BaseClassifier, c: u8) -> Cost {
        if bases.is_base(c) {
            self.indel
        } else {
            0
        }
    }
}
