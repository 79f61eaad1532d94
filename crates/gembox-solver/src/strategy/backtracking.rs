//! The exhaustive backtracking tier.

use gembox_core::Item;
use tinyvec::TinyVec;

use super::{BoxedStrategy, Strategy, StrategyError};
use crate::{PoolInfo, Witness};

const NAME: &str = "backtracking";

/// Default budget on visited search nodes.
///
/// The window is small enough that real instances finish far below this;
/// the budget exists so adversarial inputs degrade to a clean tier failure
/// instead of blocking the caller.
const DEFAULT_NODE_LIMIT: usize = 1_000_000;

/// The exhaustive, pruned depth-first tier.
///
/// Candidates are the union of every category's eligible list, flattened in
/// category order with ascending weight within each category. The search
/// includes a candidate, recurses over strictly later indices (combination
/// semantics, so no selection is visited twice), and backtracks on failure.
/// Branches are pruned as soon as the running total exceeds the target or a
/// category reaches its selection ceiling.
///
/// This is the only tier guaranteed **complete**: within the eligible
/// candidates and ceilings, it finds a witness if and only if one exists.
/// Worst-case cost is exponential in candidate count, which the bounded
/// visible window keeps acceptable.
///
/// # Examples
///
/// ```
/// use gembox_solver::{Backtracking, Strategy};
///
/// let strategy = Backtracking::new();
/// assert_eq!(strategy.name(), "backtracking");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Backtracking {
    node_limit: usize,
}

impl Default for Backtracking {
    fn default() -> Self {
        Self::new()
    }
}

impl Backtracking {
    /// Creates the backtracking tier with the default node budget.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            node_limit: DEFAULT_NODE_LIMIT,
        }
    }

    /// Overrides the visited-node budget (default 1,000,000).
    #[must_use]
    pub const fn with_node_limit(mut self, node_limit: usize) -> Self {
        self.node_limit = node_limit;
        self
    }
}

struct Search<'a> {
    candidates: Vec<&'a Item>,
    ceilings: &'a [usize],
    target: u32,
    node_limit: usize,
    visited: usize,
    counts: TinyVec<[usize; 8]>,
    selection: Vec<Item>,
}

impl Search<'_> {
    /// Depth-first search over candidates at indices `start..`.
    ///
    /// Invariant: `total <= target` on entry. Returns `Ok(true)` with the
    /// found selection left in `self.selection`.
    fn run(&mut self, start: usize, total: u32) -> Result<bool, StrategyError> {
        self.visited += 1;
        if self.visited > self.node_limit {
            return Err(StrategyError::NodeLimitExceeded(self.node_limit));
        }

        if total == self.target {
            // Weights are positive, so no extension can rescue a selection
            // that hit the target without covering every category.
            return Ok(self.counts.iter().all(|&count| count >= 1));
        }

        for index in start..self.candidates.len() {
            let item = self.candidates[index];
            let category_index = item.category().index();
            if self.counts[category_index] >= self.ceilings[category_index] {
                continue;
            }
            // An overflowing total is necessarily past the target.
            let Some(next_total) = total.checked_add(item.weight()) else {
                continue;
            };
            if next_total > self.target {
                continue;
            }

            self.counts[category_index] += 1;
            self.selection.push(item.clone());
            if self.run(index + 1, next_total)? {
                return Ok(true);
            }
            self.selection.pop();
            self.counts[category_index] -= 1;
        }

        Ok(false)
    }
}

impl Strategy for Backtracking {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn attempt(&self, pool_info: &PoolInfo) -> Result<Option<Witness>, StrategyError> {
        let candidates: Vec<&Item> = pool_info
            .categories()
            .iter()
            .flat_map(|category| category.eligible())
            .collect();
        let ceilings: Vec<usize> = pool_info
            .categories()
            .iter()
            .map(crate::CategoryPool::max_selectable)
            .collect();

        let mut counts: TinyVec<[usize; 8]> = TinyVec::new();
        counts.resize(pool_info.category_count(), 0);

        let mut search = Search {
            candidates,
            ceilings: &ceilings,
            target: pool_info.target_sum(),
            node_limit: self.node_limit,
            visited: 0,
            counts,
            selection: Vec::new(),
        };

        if search.run(0, 0)? {
            Ok(Some(Witness::new(search.selection)))
        } else {
            Ok(None)
        }
    }
}
