//! Candidate pool derivation.
//!
//! Before the strategies run, the raw pool and window are distilled into
//! per-category candidate lists and selection ceilings. Every strategy
//! consumes this derived view instead of the raw pool, so the derivation
//! happens exactly once per solver invocation.

use gembox_core::{Category, GlobalPool, Item, RoundRequirement, VisibleWindow};

/// The derived candidate view of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPool {
    category: Category,
    eligible: Vec<Item>,
    max_selectable: usize,
}

impl CategoryPool {
    /// Returns the category this view describes.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the eligible visible gems, sorted ascending by weight.
    ///
    /// Gems of equal weight keep a stable id order, so downstream
    /// tie-breaking is deterministic. The list may be empty; an empty
    /// category is retained rather than dropped, because a witness must
    /// cover every category and the strategies report the resulting
    /// impossibility themselves.
    #[must_use]
    pub fn eligible(&self) -> &[Item] {
        &self.eligible
    }

    /// Returns the most gems this round may take from the category.
    ///
    /// This is the pool surplus beyond what future rounds need, plus one for
    /// the current round's own consumption. Always at least 1 when the pool
    /// build succeeds.
    #[must_use]
    pub const fn max_selectable(&self) -> usize {
        self.max_selectable
    }
}

/// The derived candidate pools for all categories of one solver invocation.
///
/// Built once by [`PoolInfo::build`]; strategies operate on private working
/// copies of the data in here and never touch the caller's pool.
///
/// # Examples
///
/// ```
/// use gembox_core::{Category, GlobalPool, Item, ItemId, RoundRequirement, VisibleWindow};
/// use gembox_solver::PoolInfo;
///
/// let pool = GlobalPool::from_items([
///     Item::new(ItemId::new(0), Category::new(0), 3),
///     Item::new(ItemId::new(1), Category::new(1), 2),
/// ])?;
/// let mut window = VisibleWindow::new(12);
/// for item in pool.iter() {
///     window.place_first_empty(item.clone())?;
/// }
/// let requirement = RoundRequirement::new(5, 1)?;
///
/// let info = PoolInfo::build(&pool, &window, &requirement, 2).unwrap();
/// assert_eq!(info.category_count(), 2);
/// assert_eq!(info.categories()[0].eligible().len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolInfo {
    categories: Vec<CategoryPool>,
    target_sum: u32,
}

impl PoolInfo {
    /// Derives the candidate pools for one solver invocation.
    ///
    /// For each category the window is filtered to gems whose weight fits
    /// under `target_sum - (K - 1)` (every other category still needs at
    /// least weight 1), and the selection ceiling is computed from the
    /// global pool count and the remaining-round count.
    ///
    /// Returns `None` when some category's pool count cannot cover the
    /// remaining rounds. The feasibility pre-check already rejects such
    /// instances, but the condition is re-validated here because a negative
    /// surplus would make the ceilings meaningless.
    #[must_use]
    pub fn build(
        pool: &GlobalPool,
        window: &VisibleWindow,
        requirement: &RoundRequirement,
        category_count: usize,
    ) -> Option<Self> {
        let rounds = requirement.remaining_rounds() as usize;
        let reserve = u32::try_from(category_count.checked_sub(1)?).ok()?;
        // target_sum < K leaves no room for any single gem; the eligible
        // lists all end up empty and the strategies report infeasibility.
        let max_single_weight = requirement.target_sum().checked_sub(reserve);

        let mut categories = Vec::with_capacity(category_count);
        for category in Category::all(category_count) {
            let count = pool.category_count(category);
            if count < rounds {
                return None;
            }
            let max_selectable = count - rounds + 1;

            let mut eligible: Vec<Item> = window
                .items()
                .filter(|item| {
                    item.category() == category
                        && max_single_weight.is_some_and(|max| item.weight() <= max)
                })
                .cloned()
                .collect();
            eligible.sort_by_key(|item| (item.weight(), item.id()));

            categories.push(CategoryPool {
                category,
                eligible,
                max_selectable,
            });
        }

        Some(Self {
            categories,
            target_sum: requirement.target_sum(),
        })
    }

    /// Returns the per-category candidate pools, in category order.
    #[must_use]
    pub fn categories(&self) -> &[CategoryPool] {
        &self.categories
    }

    /// Returns the number of categories.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Returns the exact sum a witness must reach.
    #[must_use]
    pub const fn target_sum(&self) -> u32 {
        self.target_sum
    }
}

#[cfg(test)]
mod tests {
    use gembox_core::ItemId;

    use super::*;

    fn item(id: u32, category: u8, weight: u32) -> Item {
        Item::new(ItemId::new(id), Category::new(category), weight)
    }

    fn window_of(items: &[Item]) -> VisibleWindow {
        let mut window = VisibleWindow::new(items.len().max(1));
        for item in items {
            window.place_first_empty(item.clone()).unwrap();
        }
        window
    }

    #[test]
    fn test_eligible_sorted_ascending() {
        let items = [item(0, 0, 5), item(1, 0, 2), item(2, 0, 4)];
        let pool = GlobalPool::from_items(items.clone()).unwrap();
        let window = window_of(&items);
        let requirement = RoundRequirement::new(10, 1).unwrap();

        let info = PoolInfo::build(&pool, &window, &requirement, 1).unwrap();
        let weights: Vec<_> = info.categories()[0]
            .eligible()
            .iter()
            .map(Item::weight)
            .collect();
        assert_eq!(weights, [2, 4, 5]);
    }

    #[test]
    fn test_equal_weights_sorted_by_id() {
        let items = [item(5, 0, 3), item(2, 0, 3), item(9, 0, 3)];
        let pool = GlobalPool::from_items(items.clone()).unwrap();
        let window = window_of(&items);
        let requirement = RoundRequirement::new(10, 1).unwrap();

        let info = PoolInfo::build(&pool, &window, &requirement, 1).unwrap();
        let ids: Vec<_> = info.categories()[0]
            .eligible()
            .iter()
            .map(|item| item.id().value())
            .collect();
        assert_eq!(ids, [2, 5, 9]);
    }

    #[test]
    fn test_max_single_weight_filters_heavy_items() {
        // K = 3, target = 5: a single gem may weigh at most 5 - 2 = 3
        let items = [
            item(0, 0, 3),
            item(1, 0, 4),
            item(2, 1, 1),
            item(3, 2, 1),
        ];
        let pool = GlobalPool::from_items(items.clone()).unwrap();
        let window = window_of(&items);
        let requirement = RoundRequirement::new(5, 1).unwrap();

        let info = PoolInfo::build(&pool, &window, &requirement, 3).unwrap();
        let weights: Vec<_> = info.categories()[0]
            .eligible()
            .iter()
            .map(Item::weight)
            .collect();
        assert_eq!(weights, [3]);
    }

    #[test]
    fn test_max_selectable_reserves_future_rounds() {
        // Category 0 has 4 gems in the pool; 3 rounds remain, so this round
        // may take at most 4 - 3 + 1 = 2 of them.
        let pool_items = [
            item(0, 0, 1),
            item(1, 0, 1),
            item(2, 0, 1),
            item(3, 0, 1),
        ];
        let pool = GlobalPool::from_items(pool_items.clone()).unwrap();
        let window = window_of(&pool_items[..2]);
        let requirement = RoundRequirement::new(2, 3).unwrap();

        let info = PoolInfo::build(&pool, &window, &requirement, 1).unwrap();
        assert_eq!(info.categories()[0].max_selectable(), 2);
    }

    #[test]
    fn test_negative_surplus_fails() {
        let items = [item(0, 0, 1)];
        let pool = GlobalPool::from_items(items.clone()).unwrap();
        let window = window_of(&items);
        let requirement = RoundRequirement::new(2, 2).unwrap();

        assert!(PoolInfo::build(&pool, &window, &requirement, 1).is_none());
    }

    #[test]
    fn test_empty_category_retained() {
        // Category 1 has a pool gem but nothing visible; its (empty)
        // candidate list must still be present.
        let visible = [item(0, 0, 2)];
        let hidden = item(1, 1, 2);
        let pool = GlobalPool::from_items([visible[0].clone(), hidden]).unwrap();
        let window = window_of(&visible);
        let requirement = RoundRequirement::new(4, 1).unwrap();

        let info = PoolInfo::build(&pool, &window, &requirement, 2).unwrap();
        assert_eq!(info.category_count(), 2);
        assert!(info.categories()[1].eligible().is_empty());
    }

    #[test]
    fn test_target_below_category_count() {
        // target = 2 with K = 3 cannot fit any gem; all lists are empty
        let items = [item(0, 0, 1), item(1, 1, 1), item(2, 2, 1)];
        let pool = GlobalPool::from_items(items.clone()).unwrap();
        let window = window_of(&items);
        let requirement = RoundRequirement::new(2, 1).unwrap();

        let info = PoolInfo::build(&pool, &window, &requirement, 3).unwrap();
        assert!(
            info.categories()
                .iter()
                .all(|category| category.eligible().is_empty())
        );
    }
}
