//! Witness selections returned by the hint engine.

use gembox_core::{Category, Item, ItemId, VisibleWindow};

use crate::PoolInfo;

/// A soundness violation detected by [`Witness::verify`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SoundnessViolation {
    /// The witness does not sum to the target.
    #[display("witness sums to {actual}, target is {expected}")]
    WrongSum {
        /// The required target sum.
        expected: u32,
        /// The witness's actual total weight.
        actual: u32,
    },
    /// The same gem appears twice.
    #[display("item {_0} selected twice")]
    DuplicateItem(#[error(not(source))] ItemId),
    /// A selected gem is not in the visible window.
    #[display("item {_0} is not visible")]
    NotVisible(#[error(not(source))] ItemId),
    /// Some category has no representative.
    #[display("{_0} has no representative")]
    MissingCategory(#[error(not(source))] Category),
    /// A category exceeds its selection ceiling.
    #[display("{category} selected {selected} times, ceiling is {max_selectable}")]
    CeilingExceeded {
        /// The over-selected category.
        category: Category,
        /// How many gems of the category the witness holds.
        selected: usize,
        /// The category's selection ceiling.
        max_selectable: usize,
    },
}

/// A valid selection of gems: the hint the engine hands back to the host.
///
/// The selection order is the order the winning strategy picked the gems in.
/// Ownership transfers to the caller; the engine never feeds a witness back
/// into itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness {
    items: Vec<Item>,
}

impl Witness {
    pub(crate) fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Returns the selected gems in selection order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the selected gem ids in selection order.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().map(Item::id)
    }

    /// Returns the number of selected gems.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no gems are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the total weight of the selection.
    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.items.iter().map(Item::weight).sum()
    }

    /// Checks every soundness invariant of this witness against the
    /// candidate pools it was produced from.
    ///
    /// Verified invariants: exact target sum, no repeated gem, every gem
    /// visible in the window, every category represented at least once, and
    /// no category over its selection ceiling.
    ///
    /// # Errors
    ///
    /// Returns the first [`SoundnessViolation`] found.
    pub fn verify(
        &self,
        pool_info: &PoolInfo,
        window: &VisibleWindow,
    ) -> Result<(), SoundnessViolation> {
        let actual = self.total_weight();
        let expected = pool_info.target_sum();
        if actual != expected {
            return Err(SoundnessViolation::WrongSum { expected, actual });
        }

        for (i, item) in self.items.iter().enumerate() {
            if self.items[..i].iter().any(|other| other.id() == item.id()) {
                return Err(SoundnessViolation::DuplicateItem(item.id()));
            }
            if !window.contains(item.id()) {
                return Err(SoundnessViolation::NotVisible(item.id()));
            }
        }

        for category_pool in pool_info.categories() {
            let category = category_pool.category();
            let selected = self
                .items
                .iter()
                .filter(|item| item.category() == category)
                .count();
            if selected == 0 {
                return Err(SoundnessViolation::MissingCategory(category));
            }
            if selected > category_pool.max_selectable() {
                return Err(SoundnessViolation::CeilingExceeded {
                    category,
                    selected,
                    max_selectable: category_pool.max_selectable(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use gembox_core::{GlobalPool, RoundRequirement};

    use super::*;

    fn item(id: u32, category: u8, weight: u32) -> Item {
        Item::new(ItemId::new(id), Category::new(category), weight)
    }

    fn fixture() -> (PoolInfo, VisibleWindow) {
        let items = [
            item(0, 0, 1),
            item(1, 0, 3),
            item(2, 1, 2),
            item(3, 1, 4),
            item(4, 0, 4),
        ];
        let pool = GlobalPool::from_items(items.clone()).unwrap();
        let mut window = VisibleWindow::new(12);
        for item in &items {
            window.place_first_empty(item.clone()).unwrap();
        }
        let requirement = RoundRequirement::new(5, 1).unwrap();
        let info = PoolInfo::build(&pool, &window, &requirement, 2).unwrap();
        (info, window)
    }

    #[test]
    fn test_sound_witness_verifies() {
        let (info, window) = fixture();
        let witness = Witness::new(vec![item(0, 0, 1), item(3, 1, 4)]);
        assert_eq!(witness.total_weight(), 5);
        assert_eq!(witness.len(), 2);
        witness.verify(&info, &window).unwrap();
    }

    #[test]
    fn test_wrong_sum_detected() {
        let (info, window) = fixture();
        let witness = Witness::new(vec![item(0, 0, 1), item(2, 1, 2)]);
        assert_eq!(
            witness.verify(&info, &window),
            Err(SoundnessViolation::WrongSum {
                expected: 5,
                actual: 3
            })
        );
    }

    #[test]
    fn test_duplicate_item_detected() {
        let (info, window) = fixture();
        // Two copies of gem 0 plus gem 1 sum to 5
        let witness = Witness::new(vec![item(0, 0, 1), item(0, 0, 1), item(1, 0, 3)]);
        assert_eq!(
            witness.verify(&info, &window),
            Err(SoundnessViolation::DuplicateItem(ItemId::new(0)))
        );
    }

    #[test]
    fn test_invisible_item_detected() {
        let (info, window) = fixture();
        let witness = Witness::new(vec![item(9, 0, 1), item(3, 1, 4)]);
        assert_eq!(
            witness.verify(&info, &window),
            Err(SoundnessViolation::NotVisible(ItemId::new(9)))
        );
    }

    #[test]
    fn test_missing_category_detected() {
        let (info, window) = fixture();
        // Sums to 5 with visible gems, but everything is category 0
        let witness = Witness::new(vec![item(0, 0, 1), item(4, 0, 4)]);
        assert_eq!(
            witness.verify(&info, &window),
            Err(SoundnessViolation::MissingCategory(Category::new(1)))
        );
    }

    #[test]
    fn test_ceiling_detected() {
        let items = [item(0, 0, 2), item(1, 0, 2), item(2, 1, 1)];
        let pool = GlobalPool::from_items([
            item(0, 0, 2),
            item(1, 0, 2),
            item(2, 1, 1),
            item(3, 1, 1),
        ])
        .unwrap();
        let mut window = VisibleWindow::new(12);
        for item in &items {
            window.place_first_empty(item.clone()).unwrap();
        }
        // Two rounds remain: category 0 has 2 pool gems, ceiling 1
        let requirement = RoundRequirement::new(5, 2).unwrap();
        let info = PoolInfo::build(&pool, &window, &requirement, 2).unwrap();

        let witness = Witness::new(vec![item(0, 0, 2), item(1, 0, 2), item(2, 1, 1)]);
        assert_eq!(
            witness.verify(&info, &window),
            Err(SoundnessViolation::CeilingExceeded {
                category: Category::new(0),
                selected: 2,
                max_selectable: 1,
            })
        );
    }

    #[test]
    fn test_ids_in_selection_order() {
        let witness = Witness::new(vec![item(3, 1, 4), item(0, 0, 1)]);
        let ids: Vec<_> = witness.ids().map(ItemId::value).collect();
        assert_eq!(ids, [3, 0]);
    }
}
