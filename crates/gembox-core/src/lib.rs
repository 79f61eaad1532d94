//! Core data structures for gembox applications.
//!
//! This crate provides the domain model shared by the hint engine and the
//! game session layer: categorized, weighted gems and the pools they live in.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Identity and classification**
//!    - [`category`]: the closed, per-level set of gem categories
//!    - [`item`]: a weighted gem with a unique identity
//!
//! 2. **Pools**
//!    - [`pool`]: the global multiset of not-yet-consumed gems
//!    - [`window`]: the bounded visible window gems may be selected from,
//!      with explicit empty slots instead of sentinel values
//!
//! 3. **Round parameters**
//!    - [`round`]: the target sum and remaining-round count for one box
//!
//! # Examples
//!
//! ```
//! use gembox_core::{Category, GlobalPool, Item, ItemId, RoundRequirement, VisibleWindow};
//!
//! let mut pool = GlobalPool::new();
//! pool.add(Item::new(ItemId::new(0), Category::new(0), 3))?;
//! pool.add(Item::new(ItemId::new(1), Category::new(1), 2))?;
//!
//! let mut window = VisibleWindow::new(12);
//! for item in pool.iter() {
//!     window.place_first_empty(item.clone())?;
//! }
//!
//! let requirement = RoundRequirement::new(5, 1)?;
//! assert_eq!(requirement.target_sum(), 5);
//! assert_eq!(window.occupied_count(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod category;
pub mod item;
pub mod pool;
pub mod round;
pub mod window;

// Re-export commonly used types
pub use self::{
    category::Category,
    item::{Item, ItemId},
    pool::{GlobalPool, PoolError},
    round::{RoundError, RoundRequirement},
    window::{Slot, VisibleWindow, WindowError},
};
