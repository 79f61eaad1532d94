//! The global pool of not-yet-consumed gems.

use crate::{Category, Item, ItemId};

/// An error raised by [`GlobalPool`] operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PoolError {
    /// An item with the same id already exists in the pool.
    #[display("duplicate item id {_0}")]
    DuplicateItem(#[error(not(source))] ItemId),
}

/// The full multiset of gems not yet consumed by any completed round.
///
/// The pool is shared with, and mutated by, the surrounding game logic;
/// additions and removals happen between solver invocations, never during
/// one. The hint engine only reads it.
///
/// # Examples
///
/// ```
/// use gembox_core::{Category, GlobalPool, Item, ItemId};
///
/// let mut pool = GlobalPool::new();
/// pool.add(Item::new(ItemId::new(0), Category::new(0), 2))?;
/// pool.add(Item::new(ItemId::new(1), Category::new(0), 3))?;
/// pool.add(Item::new(ItemId::new(2), Category::new(1), 1))?;
///
/// assert_eq!(pool.len(), 3);
/// assert_eq!(pool.category_count(Category::new(0)), 2);
/// assert_eq!(pool.category_count(Category::new(1)), 1);
/// # Ok::<(), gembox_core::PoolError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalPool {
    items: Vec<Item>,
}

impl GlobalPool {
    /// Creates an empty pool.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a pool from a sequence of items.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::DuplicateItem`] if two items share an id.
    pub fn from_items<I>(items: I) -> Result<Self, PoolError>
    where
        I: IntoIterator<Item = Item>,
    {
        let mut pool = Self::new();
        for item in items {
            pool.add(item)?;
        }
        Ok(pool)
    }

    /// Adds an item to the pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::DuplicateItem`] if the pool already contains an
    /// item with the same id.
    pub fn add(&mut self, item: Item) -> Result<(), PoolError> {
        if self.contains(item.id()) {
            return Err(PoolError::DuplicateItem(item.id()));
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the item with the given id, if present.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Returns the item with the given id, if present.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Returns `true` if the pool contains an item with the given id.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of items in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the pool has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of pool items belonging to `category`.
    ///
    /// This is the count the feasibility pre-check compares against the
    /// remaining-round count.
    #[must_use]
    pub fn category_count(&self, category: Category) -> usize {
        self.items
            .iter()
            .filter(|item| item.category() == category)
            .count()
    }

    /// Returns an iterator over all items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a GlobalPool {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn item(id: u32, category: u8, weight: u32) -> Item {
        Item::new(ItemId::new(id), Category::new(category), weight)
    }

    #[test]
    fn test_add_and_query() {
        let mut pool = GlobalPool::new();
        assert!(pool.is_empty());

        pool.add(item(0, 0, 2)).unwrap();
        pool.add(item(1, 1, 3)).unwrap();

        assert_eq!(pool.len(), 2);
        assert!(pool.contains(ItemId::new(0)));
        assert!(!pool.contains(ItemId::new(9)));
        assert_eq!(pool.get(ItemId::new(1)).unwrap().weight(), 3);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut pool = GlobalPool::new();
        pool.add(item(0, 0, 2)).unwrap();

        let err = pool.add(item(0, 1, 5)).unwrap_err();
        assert_eq!(err, PoolError::DuplicateItem(ItemId::new(0)));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut pool =
            GlobalPool::from_items([item(0, 0, 2), item(1, 0, 3), item(2, 1, 1)]).unwrap();

        let removed = pool.remove(ItemId::new(1)).unwrap();
        assert_eq!(removed.weight(), 3);
        assert_eq!(pool.len(), 2);
        assert!(pool.remove(ItemId::new(1)).is_none());
    }

    #[test]
    fn test_category_count() {
        let pool = GlobalPool::from_items([
            item(0, 0, 2),
            item(1, 0, 3),
            item(2, 1, 1),
            item(3, 0, 1),
        ])
        .unwrap();

        assert_eq!(pool.category_count(Category::new(0)), 3);
        assert_eq!(pool.category_count(Category::new(1)), 1);
        assert_eq!(pool.category_count(Category::new(2)), 0);
    }

    #[test]
    fn test_from_items_detects_duplicates() {
        let err = GlobalPool::from_items([item(0, 0, 1), item(0, 1, 2)]).unwrap_err();
        assert_eq!(err, PoolError::DuplicateItem(ItemId::new(0)));
    }

    proptest! {
        /// Per-category counts partition the pool: they always sum to `len`.
        #[test]
        fn category_counts_sum_to_len(counts in prop::collection::vec(0_usize..5, 1..5)) {
            let mut items = Vec::new();
            let mut id = 0_u32;
            for (category, &count) in counts.iter().enumerate() {
                for _ in 0..count {
                    #[expect(clippy::cast_possible_truncation)]
                    let category = category as u8;
                    items.push(item(id, category, 1));
                    id += 1;
                }
            }
            let pool = GlobalPool::from_items(items).unwrap();

            let total: usize = Category::all(counts.len())
                .map(|category| pool.category_count(category))
                .sum();
            prop_assert_eq!(total, pool.len());
        }
    }
}
