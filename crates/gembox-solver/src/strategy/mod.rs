//! Hint-search strategies.
//!
//! This module provides the three fallback tiers of the hint engine. Each
//! strategy implements the [`Strategy`] trait: a self-contained attempt over
//! the derived candidate pools that either produces a witness or fails
//! cleanly without touching caller state.

use std::fmt::Debug;

pub use self::{backtracking::Backtracking, greedy::Greedy};
use crate::{PoolInfo, Witness};

mod backtracking;
mod greedy;

/// Returns all strategies in fallback order, cheapest first.
///
/// The two greedy tiers are fast heuristics; the backtracking tier is the
/// only one guaranteed complete and runs last.
///
/// # Examples
///
/// ```
/// use gembox_solver::strategy;
///
/// let strategies = strategy::all_strategies();
/// assert_eq!(strategies.len(), 3);
/// assert_eq!(strategies[0].name(), "greedy ascending");
/// ```
#[must_use]
pub fn all_strategies() -> Vec<BoxedStrategy> {
    vec![
        Box::new(Greedy::ascending()),
        Box::new(Greedy::descending()),
        Box::new(Backtracking::new()),
    ]
}

/// An internal fault inside one strategy attempt.
///
/// A fault is never an answer about the instance: the orchestrator logs it
/// and falls through to the next tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StrategyError {
    /// The greedy fill loop ran past its iteration ceiling.
    #[display("fill loop exceeded {_0} iterations")]
    FillLimitExceeded(#[error(not(source))] usize),
    /// The backtracking search ran past its node budget.
    #[display("search exceeded {_0} visited nodes")]
    NodeLimitExceeded(#[error(not(source))] usize),
}

/// A trait representing one tier of the hint search.
///
/// Each strategy works on a private copy of the candidate pools; a failed
/// attempt requires no rollback.
pub trait Strategy: Debug {
    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the strategy.
    fn clone_box(&self) -> BoxedStrategy;

    /// Runs one self-contained search attempt.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(witness))` - A valid selection was found
    /// * `Ok(None)` - No valid selection exists within this strategy's reach
    ///
    /// # Errors
    ///
    /// Returns a [`StrategyError`] on an internal fault (a safety ceiling
    /// was hit); the caller treats this as failure of this tier only.
    fn attempt(&self, pool_info: &PoolInfo) -> Result<Option<Witness>, StrategyError>;
}

/// A boxed strategy.
pub type BoxedStrategy = Box<dyn Strategy>;

impl Clone for BoxedStrategy {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
