//! The parameterized greedy tiers.

use gembox_core::Item;

use super::{BoxedStrategy, Strategy, StrategyError};
use crate::{PoolInfo, Witness};

const NAME_ASCENDING: &str = "greedy ascending";
const NAME_DESCENDING: &str = "greedy descending";

/// Default ceiling on fill-loop iterations.
///
/// An empirical safety valve, not a derived constant; hitting it is reported
/// as an internal fault of this tier.
const DEFAULT_FILL_LIMIT: usize = 100;

/// A greedy hint-search tier, parameterized by ordering preference.
///
/// Both greedy tiers share this implementation; they differ only in whether
/// they prefer small or large gems. The attempt runs in two phases:
///
/// - **Baseline**: one extreme gem (smallest or largest eligible) per
///   category, in category order. A category with no eligible gems fails the
///   attempt immediately, and a baseline already above the target fails too.
/// - **Fill loop**: while below the target, categories compete to contribute
///   one more gem. The categories with the largest remaining candidate
///   lists are considered together; an exact-gap gem wins outright,
///   otherwise the preferred (smallest/largest) gem that still fits.
///   Categories with nothing that fits sit out until the next successful
///   pick resets the competition.
///
/// The greedy tiers are heuristics: a clean failure here says nothing about
/// the instance, only that this ordering found no witness.
///
/// # Examples
///
/// ```
/// use gembox_solver::{Greedy, Strategy};
///
/// let ascending = Greedy::ascending();
/// assert_eq!(ascending.name(), "greedy ascending");
///
/// let descending = Greedy::descending();
/// assert_eq!(descending.name(), "greedy descending");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Greedy {
    prefer_small: bool,
    fill_limit: usize,
}

/// Private working copy of one category's candidates for a single attempt.
#[derive(Debug)]
struct WorkingCategory {
    items: Vec<Item>,
    remaining: usize,
}

impl Greedy {
    /// Creates the ascending tier: prefers the smallest gem that fits.
    #[must_use]
    pub const fn ascending() -> Self {
        Self {
            prefer_small: true,
            fill_limit: DEFAULT_FILL_LIMIT,
        }
    }

    /// Creates the descending tier: prefers the largest gem that fits.
    #[must_use]
    pub const fn descending() -> Self {
        Self {
            prefer_small: false,
            fill_limit: DEFAULT_FILL_LIMIT,
        }
    }

    /// Overrides the fill-loop iteration ceiling (default 100).
    #[must_use]
    pub const fn with_fill_limit(mut self, fill_limit: usize) -> Self {
        self.fill_limit = fill_limit;
        self
    }

    /// Picks the baseline gem for one category per the ordering preference.
    ///
    /// Candidate lists are sorted ascending, so the extreme is at either
    /// end. Returns `None` when the category has no eligible gems.
    fn take_baseline(&self, category: &mut WorkingCategory) -> Option<Item> {
        if category.items.is_empty() {
            return None;
        }
        let item = if self.prefer_small {
            category.items.remove(0)
        } else {
            category.items.pop()?
        };
        debug_assert!(category.remaining > 0);
        category.remaining -= 1;
        Some(item)
    }

    /// Finds the best pick among the tied categories' working lists.
    ///
    /// An exact-gap match wins over everything; otherwise the preferred
    /// (smallest or largest) gem with weight at most `gap`. Ties keep the
    /// earliest category/list position, which keeps attempts deterministic.
    fn pick_candidate(
        &self,
        working: &[WorkingCategory],
        tied: &[usize],
        gap: u32,
    ) -> Option<(usize, usize)> {
        let mut exact: Option<(usize, usize)> = None;
        let mut fits: Option<(usize, usize, u32)> = None;

        for &category_index in tied {
            for (item_index, item) in working[category_index].items.iter().enumerate() {
                let weight = item.weight();
                if weight > gap {
                    continue;
                }
                if weight == gap && exact.is_none() {
                    exact = Some((category_index, item_index));
                }
                let better = match fits {
                    None => true,
                    Some((_, _, best)) => {
                        if self.prefer_small {
                            weight < best
                        } else {
                            weight > best
                        }
                    }
                };
                if better {
                    fits = Some((category_index, item_index, weight));
                }
            }
        }

        exact.or(fits.map(|(category_index, item_index, _)| (category_index, item_index)))
    }
}

impl Strategy for Greedy {
    fn name(&self) -> &'static str {
        if self.prefer_small {
            NAME_ASCENDING
        } else {
            NAME_DESCENDING
        }
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn attempt(&self, pool_info: &PoolInfo) -> Result<Option<Witness>, StrategyError> {
        let target = pool_info.target_sum();
        let mut working: Vec<_> = pool_info
            .categories()
            .iter()
            .map(|category| WorkingCategory {
                items: category.eligible().to_vec(),
                remaining: category.max_selectable(),
            })
            .collect();

        // Baseline: one extreme gem per category, in category order.
        let mut selection = Vec::with_capacity(working.len());
        let mut total: u32 = 0;
        for category in &mut working {
            let Some(item) = self.take_baseline(category) else {
                return Ok(None);
            };
            // A baseline past u32::MAX is necessarily past the target.
            let Some(next) = total.checked_add(item.weight()) else {
                return Ok(None);
            };
            total = next;
            selection.push(item);
        }
        if total > target {
            return Ok(None);
        }

        // Fill loop: categories with the deepest remaining lists compete to
        // contribute the next gem.
        let mut exhausted = vec![false; working.len()];
        let mut iterations = 0;
        while total < target {
            iterations += 1;
            if iterations > self.fill_limit {
                return Err(StrategyError::FillLimitExceeded(self.fill_limit));
            }

            let qualifying: Vec<usize> = (0..working.len())
                .filter(|&i| {
                    working[i].remaining > 0 && !working[i].items.is_empty() && !exhausted[i]
                })
                .collect();
            if qualifying.is_empty() {
                return Ok(None);
            }

            let max_len = qualifying
                .iter()
                .map(|&i| working[i].items.len())
                .max()
                .unwrap_or(0);
            let tied: Vec<usize> = qualifying
                .into_iter()
                .filter(|&i| working[i].items.len() == max_len)
                .collect();

            let gap = target - total;
            match self.pick_candidate(&working, &tied, gap) {
                Some((category_index, item_index)) => {
                    let item = working[category_index].items.remove(item_index);
                    working[category_index].remaining -= 1;
                    total += item.weight();
                    selection.push(item);
                    // A successful pick restarts the competition.
                    exhausted.fill(false);
                }
                None => {
                    for &category_index in &tied {
                        exhausted[category_index] = true;
                    }
                }
            }
        }

        Ok(Some(Witness::new(selection)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StrategyError, testing::SolverTester};

    #[test]
    fn test_baseline_hits_target_exactly() {
        // K = 3, target 3: the three weight-1 baselines already sum to 3
        SolverTester::new(3, 3, 1)
            .visible(0, [1, 2])
            .visible(1, [1, 3])
            .visible(2, [1])
            .assert_strategy_weights(&Greedy::ascending(), [1, 1, 1]);
    }

    #[test]
    fn test_baseline_overshoot_fails() {
        // Descending baseline picks 3 + 4 = 7 > 5
        SolverTester::new(2, 5, 1)
            .visible(0, [1, 3])
            .visible(1, [2, 4])
            .assert_strategy_fails(&Greedy::descending());
    }

    #[test]
    fn test_fill_loop_no_fitting_item_fails() {
        // Ascending baseline is 1 + 2 = 3; the remaining gems {3, 4} both
        // exceed the gap of 2, so every tied category sits out and the
        // attempt fails.
        SolverTester::new(2, 5, 1)
            .visible(0, [1, 3])
            .visible(1, [2, 4])
            .assert_strategy_fails(&Greedy::ascending());
    }

    #[test]
    fn test_fill_prefers_exact_gap_match() {
        // Ascending baseline is 1 + 1 = 2, gap 3. Category 0's list {2, 3}
        // is the deepest; 3 matches the gap exactly and wins over 2.
        SolverTester::new(2, 5, 1)
            .visible(0, [1, 2, 3])
            .visible(1, [1])
            .assert_strategy_weights(&Greedy::ascending(), [1, 1, 3]);
    }

    #[test]
    fn test_fill_prefers_small_when_ascending() {
        // Baseline 1 + 1 = 2, gap 5: no exact match in {2, 3}, the smaller
        // fitting gem is taken first, then the gap-3 exact match
        SolverTester::new(2, 7, 1)
            .visible(0, [1, 2, 3])
            .visible(1, [1])
            .assert_strategy_weights(&Greedy::ascending(), [1, 1, 2, 3]);
    }

    #[test]
    fn test_fill_prefers_large_when_descending() {
        // Descending baseline is 4 + 1 = 5, gap 3; category 0's remaining
        // list {1, 2, 3} is deepest and the largest fitting gem is 3.
        SolverTester::new(2, 8, 1)
            .visible(0, [1, 2, 3, 4])
            .visible(1, [1])
            .assert_strategy_weights(&Greedy::descending(), [4, 1, 3]);
    }

    #[test]
    fn test_empty_category_fails_immediately() {
        SolverTester::new(2, 5, 1)
            .visible(0, [1, 3])
            .hidden(1, [2])
            .assert_strategy_fails(&Greedy::ascending());
    }

    #[test]
    fn test_selection_ceiling_respected() {
        // Category 0 has 3 pool gems but 3 rounds remain, so only one may
        // be taken this round; the fill loop cannot take a second gem from
        // it and the target 4 is unreachable.
        SolverTester::new(2, 4, 3)
            .visible(0, [1, 2])
            .hidden(0, [1])
            .visible(1, [1])
            .hidden(1, [1, 1])
            .assert_strategy_fails(&Greedy::ascending());
    }

    #[test]
    fn test_merged_tie_competition() {
        // Baseline 1 + 1 = 2, gap 2. Both categories have one gem left, so
        // their lists merge; category 1's gem 2 is the exact match.
        SolverTester::new(2, 4, 1)
            .visible(0, [1, 3])
            .visible(1, [1, 2])
            .assert_strategy_weights(&Greedy::ascending(), [1, 1, 2]);
    }

    #[test]
    fn test_huge_baseline_overflow_fails_cleanly() {
        // The baseline 3e9 + 2e9 exceeds u32::MAX; the attempt must fail
        // instead of wrapping past the 4e9 target
        SolverTester::new(2, 4_000_000_000, 1)
            .visible(0, [3_000_000_000])
            .visible(1, [2_000_000_000])
            .assert_strategy_fails(&Greedy::ascending())
            .assert_strategy_fails(&Greedy::descending());
    }

    #[test]
    fn test_huge_target_still_solvable() {
        SolverTester::new(2, 4_000_000_000, 1)
            .visible(0, [2_000_000_000])
            .visible(1, [2_000_000_000])
            .assert_strategy_weights(&Greedy::ascending(), [2_000_000_000, 2_000_000_000]);
    }

    #[test]
    fn test_fill_limit_is_internal_fault() {
        let tester = SolverTester::new(2, 5, 1).visible(0, [1, 3]).visible(1, [2, 4]);
        // A zero-iteration ceiling trips on the first fill pass
        let result = tester.attempt(&Greedy::ascending().with_fill_limit(0));
        assert_eq!(result, Err(StrategyError::FillLimitExceeded(0)));
    }
}
