//! The gembox hint engine.
//!
//! Given a global pool of weighted, categorized gems, a bounded visible
//! window, and a round requirement, this crate finds — or proves the
//! nonexistence of — a selection of visible gems that sums exactly to the
//! round's target while covering every category at least once, under
//! per-category quantity ceilings.
//!
//! # Overview
//!
//! Solving is a three-tier fallback, ordered cheapest to strongest:
//!
//! 1. **Greedy ascending** — baseline of one smallest gem per category, then
//!    a fill loop preferring small gems ([`Greedy::ascending`]).
//! 2. **Greedy descending** — the same heuristic preferring large gems
//!    ([`Greedy::descending`]).
//! 3. **Backtracking** — exhaustive, pruned depth-first search; the only
//!    tier guaranteed complete ([`Backtracking`]).
//!
//! Before any tier runs, a [feasibility pre-check](feasibility) rejects
//! instances that cannot feed the remaining rounds, and the
//! [candidate pool builder](PoolInfo::build) derives each category's
//! eligible gems and selection ceiling. The [`HintSolver`] orchestrates all
//! of this and returns the first witness found, or
//! [`HintOutcome::Infeasible`] as a definitive "no selection exists".
//!
//! # Examples
//!
//! ```
//! use gembox_core::{Category, GlobalPool, Item, ItemId, RoundRequirement, VisibleWindow};
//! use gembox_solver::{HintOutcome, HintSolver};
//!
//! let pool = GlobalPool::from_items([
//!     Item::new(ItemId::new(0), Category::new(0), 1),
//!     Item::new(ItemId::new(1), Category::new(0), 3),
//!     Item::new(ItemId::new(2), Category::new(1), 2),
//!     Item::new(ItemId::new(3), Category::new(1), 4),
//! ])?;
//! let mut window = VisibleWindow::new(12);
//! for item in pool.iter() {
//!     window.place_first_empty(item.clone())?;
//! }
//! let requirement = RoundRequirement::new(5, 1)?;
//!
//! let solver = HintSolver::with_all_strategies();
//! match solver.solve(&pool, &window, &requirement, 2) {
//!     HintOutcome::Witness(witness) => {
//!         assert_eq!(witness.total_weight(), 5);
//!     }
//!     HintOutcome::Infeasible => unreachable!(),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod feasibility;
mod hint_solver;
mod pool_info;
pub mod strategy;
pub mod testing;
mod witness;

pub use self::{
    hint_solver::{HintOutcome, HintSolver, HintSolverStats},
    pool_info::{CategoryPool, PoolInfo},
    strategy::{Backtracking, BoxedStrategy, Greedy, Strategy, StrategyError, all_strategies},
    witness::{SoundnessViolation, Witness},
};
