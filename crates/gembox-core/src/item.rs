//! Gem items: weighted, categorized units of selection.

use std::fmt::{self, Display};

use crate::Category;

/// The unique identity of an [`Item`].
///
/// Identity is assigned by whatever generates the pool and is never reused
/// within one game; pools and windows track items by id.
///
/// # Examples
///
/// ```
/// use gembox_core::ItemId;
///
/// let id = ItemId::new(7);
/// assert_eq!(id.value(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u32);

impl ItemId {
    /// Creates an item id from a raw value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A weighted, categorized gem.
///
/// Items are immutable once created. They are owned by the global pool until
/// consumed by a completed round, after which they move to the session's
/// history record.
///
/// # Examples
///
/// ```
/// use gembox_core::{Category, Item, ItemId};
///
/// let item = Item::new(ItemId::new(0), Category::new(1), 3);
/// assert_eq!(item.weight(), 3);
/// assert_eq!(item.category(), Category::new(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    category: Category,
    weight: u32,
}

impl Item {
    /// Creates a new item.
    ///
    /// # Panics
    ///
    /// Panics if `weight` is zero; item weights are strictly positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use gembox_core::{Category, Item, ItemId};
    ///
    /// let item = Item::new(ItemId::new(3), Category::new(0), 1);
    /// assert_eq!(item.id(), ItemId::new(3));
    /// ```
    ///
    /// ```should_panic
    /// use gembox_core::{Category, Item, ItemId};
    ///
    /// // This will panic
    /// let _ = Item::new(ItemId::new(0), Category::new(0), 0);
    /// ```
    #[must_use]
    pub fn new(id: ItemId, category: Category, weight: u32) -> Self {
        assert!(weight > 0, "item weight must be positive");
        Self {
            id,
            category,
            weight,
        }
    }

    /// Returns the unique identity of this item.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the category of this item.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the weight of this item (always positive).
    #[must_use]
    pub const fn weight(&self) -> u32 {
        self.weight
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, weight {})", self.id, self.category, self.weight)
    }
}
