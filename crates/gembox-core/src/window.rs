//! The visible window of gems eligible for selection.

use crate::{Item, ItemId};

/// An error raised by [`VisibleWindow`] operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WindowError {
    /// The slot index is outside the window.
    #[display("slot index {_0} is out of range")]
    IndexOutOfRange(#[error(not(source))] usize),
    /// The target slot already holds an item.
    #[display("slot {_0} is already occupied")]
    SlotOccupied(#[error(not(source))] usize),
    /// Every slot in the window is occupied.
    #[display("window is full")]
    WindowFull,
}

/// One slot of the visible window.
///
/// Absence is an explicit variant rather than a sentinel item, so empty
/// slots are checked by the type system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Slot {
    /// The slot holds no gem.
    #[default]
    Empty,
    /// The slot holds a gem.
    Occupied(Item),
}

impl Slot {
    /// Returns the occupying item, if any.
    #[must_use]
    pub const fn item(&self) -> Option<&Item> {
        match self {
            Self::Empty => None,
            Self::Occupied(item) => Some(item),
        }
    }

    /// Returns `true` if the slot holds no gem.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// The bounded subset of the global pool that gems may actually be selected
/// from.
///
/// The hint engine only picks candidates out of this window, even though its
/// feasibility accounting considers the whole global pool. Slot order is
/// significant: it is the order the pool builder scans candidates in, which
/// keeps the engine deterministic.
///
/// # Examples
///
/// ```
/// use gembox_core::{Category, Item, ItemId, VisibleWindow};
///
/// let mut window = VisibleWindow::new(3);
/// window.place_first_empty(Item::new(ItemId::new(0), Category::new(0), 2))?;
/// window.place_first_empty(Item::new(ItemId::new(1), Category::new(1), 4))?;
///
/// assert_eq!(window.capacity(), 3);
/// assert_eq!(window.occupied_count(), 2);
/// assert!(window.contains(ItemId::new(1)));
/// # Ok::<(), gembox_core::WindowError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleWindow {
    slots: Vec<Slot>,
}

impl VisibleWindow {
    /// Creates a window of `capacity` empty slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Slot::Empty; capacity],
        }
    }

    /// Creates a window directly from a sequence of slots.
    #[must_use]
    pub fn from_slots<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Slot>,
    {
        Self {
            slots: slots.into_iter().collect(),
        }
    }

    /// Returns the total number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Returns the slot at `index`, if it exists.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Returns an iterator over all slots in window order.
    pub fn slots(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    /// Returns an iterator over the occupied items in window order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.slots.iter().filter_map(Slot::item)
    }

    /// Returns `true` if an occupied slot holds the item with the given id.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items().any(|item| item.id() == id)
    }

    /// Places an item into the slot at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::IndexOutOfRange`] if `index` is outside the
    /// window, or [`WindowError::SlotOccupied`] if the slot already holds an
    /// item.
    pub fn place(&mut self, index: usize, item: Item) -> Result<(), WindowError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(WindowError::IndexOutOfRange(index))?;
        if !slot.is_empty() {
            return Err(WindowError::SlotOccupied(index));
        }
        *slot = Slot::Occupied(item);
        Ok(())
    }

    /// Places an item into the first empty slot.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::WindowFull`] if every slot is occupied.
    pub fn place_first_empty(&mut self, item: Item) -> Result<usize, WindowError> {
        let index = self
            .slots
            .iter()
            .position(Slot::is_empty)
            .ok_or(WindowError::WindowFull)?;
        self.slots[index] = Slot::Occupied(item);
        Ok(index)
    }

    /// Removes the item with the given id, leaving its slot empty.
    ///
    /// Returns the removed item, or `None` if no occupied slot holds it.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self
            .slots
            .iter()
            .position(|slot| slot.item().is_some_and(|item| item.id() == id))?;
        match std::mem::take(&mut self.slots[index]) {
            Slot::Occupied(item) => Some(item),
            Slot::Empty => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Category;

    use super::*;

    fn item(id: u32, category: u8, weight: u32) -> Item {
        Item::new(ItemId::new(id), Category::new(category), weight)
    }

    #[test]
    fn test_new_window_is_empty() {
        let window = VisibleWindow::new(4);
        assert_eq!(window.capacity(), 4);
        assert_eq!(window.occupied_count(), 0);
        assert!(window.slots().all(Slot::is_empty));
    }

    #[test]
    fn test_place_and_contains() {
        let mut window = VisibleWindow::new(3);
        window.place(1, item(7, 0, 2)).unwrap();

        assert!(window.contains(ItemId::new(7)));
        assert!(window.slot(0).unwrap().is_empty());
        assert_eq!(window.slot(1).unwrap().item().unwrap().weight(), 2);
        assert_eq!(window.occupied_count(), 1);
    }

    #[test]
    fn test_place_rejects_occupied_slot() {
        let mut window = VisibleWindow::new(2);
        window.place(0, item(0, 0, 1)).unwrap();

        let err = window.place(0, item(1, 0, 1)).unwrap_err();
        assert_eq!(err, WindowError::SlotOccupied(0));

        let err = window.place(5, item(1, 0, 1)).unwrap_err();
        assert_eq!(err, WindowError::IndexOutOfRange(5));
    }

    #[test]
    fn test_place_first_empty_fills_in_order() {
        let mut window = VisibleWindow::new(2);
        assert_eq!(window.place_first_empty(item(0, 0, 1)).unwrap(), 0);
        assert_eq!(window.place_first_empty(item(1, 0, 1)).unwrap(), 1);
        assert_eq!(
            window.place_first_empty(item(2, 0, 1)).unwrap_err(),
            WindowError::WindowFull
        );
    }

    #[test]
    fn test_remove_leaves_slot_empty() {
        let mut window = VisibleWindow::new(2);
        window.place(0, item(0, 0, 1)).unwrap();
        window.place(1, item(1, 1, 2)).unwrap();

        let removed = window.remove(ItemId::new(0)).unwrap();
        assert_eq!(removed.id(), ItemId::new(0));
        assert!(window.slot(0).unwrap().is_empty());
        assert_eq!(window.occupied_count(), 1);
        assert!(window.remove(ItemId::new(0)).is_none());
    }

    #[test]
    fn test_items_iterates_occupied_in_window_order() {
        let mut window = VisibleWindow::new(4);
        window.place(3, item(0, 0, 1)).unwrap();
        window.place(1, item(1, 1, 2)).unwrap();

        let ids: Vec<_> = window.items().map(Item::id).collect();
        assert_eq!(ids, [ItemId::new(1), ItemId::new(0)]);
    }
}
