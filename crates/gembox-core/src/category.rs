//! Gem category representation.

use std::fmt::{self, Display};

/// A gem category within a level's closed category set.
///
/// Each level fixes a category count `K` at configuration time; categories
/// are the indices `0..K`. The set is closed: code iterates it with
/// [`Category::all`] rather than dispatching over an open-ended tag.
///
/// # Examples
///
/// ```
/// use gembox_core::Category;
///
/// let category = Category::new(2);
/// assert_eq!(category.index(), 2);
///
/// // Iterate over all categories of a 3-category level
/// let all: Vec<_> = Category::all(3).collect();
/// assert_eq!(all.len(), 3);
/// assert_eq!(all[0], Category::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category(u8);

impl Category {
    /// Creates a category from its index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Returns the index of this category within the level's category set.
    ///
    /// # Examples
    ///
    /// ```
    /// use gembox_core::Category;
    ///
    /// assert_eq!(Category::new(0).index(), 0);
    /// assert_eq!(Category::new(4).index(), 4);
    /// ```
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns an iterator over all categories of a level with `count`
    /// categories.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds 256, the maximum representable category
    /// count.
    ///
    /// # Examples
    ///
    /// ```
    /// use gembox_core::Category;
    ///
    /// let categories: Vec<_> = Category::all(2).collect();
    /// assert_eq!(categories, [Category::new(0), Category::new(1)]);
    /// ```
    pub fn all(count: usize) -> impl Iterator<Item = Self> {
        assert!(count <= 256, "category count {count} exceeds 256");
        (0..count).map(|index| {
            #[expect(clippy::cast_possible_truncation)]
            let index = index as u8;
            Self(index)
        })
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "category {}", self.0)
    }
}
