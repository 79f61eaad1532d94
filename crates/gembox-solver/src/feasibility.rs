//! Global feasibility pre-check.
//!
//! A cheap necessary-condition test run before any search: if some category
//! does not have enough gems left in the global pool to feed every remaining
//! round, no strategy can help and the solver answers infeasible
//! immediately.

use gembox_core::{Category, GlobalPool, RoundRequirement};

/// Returns `true` if every category has enough gems in the global pool for
/// all remaining rounds.
///
/// Each remaining round (including the current one) must consume at least
/// one gem of every category, so a category whose pool count is strictly
/// below the remaining-round count makes the whole instance globally
/// infeasible. Passing this check does not guarantee the *current* round is
/// solvable; it only rules out instances that are already lost.
///
/// # Examples
///
/// ```
/// use gembox_core::{Category, GlobalPool, Item, ItemId, RoundRequirement};
/// use gembox_solver::feasibility;
///
/// let pool = GlobalPool::from_items([
///     Item::new(ItemId::new(0), Category::new(0), 1),
///     Item::new(ItemId::new(1), Category::new(0), 2),
///     Item::new(ItemId::new(2), Category::new(1), 1),
/// ])?;
///
/// // One round left: both categories have at least one gem.
/// let requirement = RoundRequirement::new(4, 1)?;
/// assert!(feasibility::is_globally_feasible(&pool, &requirement, 2));
///
/// // Two rounds left: category 1 has only one gem.
/// let requirement = RoundRequirement::new(4, 2)?;
/// assert!(!feasibility::is_globally_feasible(&pool, &requirement, 2));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn is_globally_feasible(
    pool: &GlobalPool,
    requirement: &RoundRequirement,
    category_count: usize,
) -> bool {
    let rounds = requirement.remaining_rounds() as usize;
    Category::all(category_count).all(|category| pool.category_count(category) >= rounds)
}

#[cfg(test)]
mod tests {
    use gembox_core::{Item, ItemId};

    use super::*;

    fn pool(counts: &[usize]) -> GlobalPool {
        let mut id = 0;
        let mut items = Vec::new();
        for (category, &count) in counts.iter().enumerate() {
            for _ in 0..count {
                #[expect(clippy::cast_possible_truncation)]
                items.push(Item::new(ItemId::new(id), Category::new(category as u8), 1));
                id += 1;
            }
        }
        GlobalPool::from_items(items).unwrap()
    }

    #[test]
    fn test_feasible_when_every_category_covers_rounds() {
        let pool = pool(&[3, 2]);
        let requirement = RoundRequirement::new(10, 2).unwrap();
        assert!(is_globally_feasible(&pool, &requirement, 2));
    }

    #[test]
    fn test_infeasible_when_one_category_short() {
        // Category 1 has 2 gems but 3 rounds remain
        let pool = pool(&[5, 2]);
        let requirement = RoundRequirement::new(10, 3).unwrap();
        assert!(!is_globally_feasible(&pool, &requirement, 2));
    }

    #[test]
    fn test_exact_count_is_feasible() {
        let pool = pool(&[2, 2]);
        let requirement = RoundRequirement::new(10, 2).unwrap();
        assert!(is_globally_feasible(&pool, &requirement, 2));
    }

    #[test]
    fn test_missing_category_is_infeasible() {
        // Category 2 has no gems at all
        let pool = pool(&[3, 3]);
        let requirement = RoundRequirement::new(10, 1).unwrap();
        assert!(!is_globally_feasible(&pool, &requirement, 3));
    }
}
