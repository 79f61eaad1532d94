//! The tier orchestrator.

use gembox_core::{GlobalPool, RoundRequirement, VisibleWindow};
use log::{debug, warn};

use crate::{
    PoolInfo, Witness, feasibility,
    strategy::{self, BoxedStrategy},
};

/// The final answer of one solver invocation.
///
/// Infeasibility is an expected, valid outcome — "cannot help, the game may
/// be unwinnable from here" — not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    /// A valid selection was found.
    Witness(Witness),
    /// No valid selection exists given the current window and ceilings.
    Infeasible,
}

impl HintOutcome {
    /// Returns `true` if no valid selection exists.
    #[must_use]
    pub const fn is_infeasible(&self) -> bool {
        matches!(self, Self::Infeasible)
    }

    /// Returns the witness, if one was found.
    #[must_use]
    pub const fn witness(&self) -> Option<&Witness> {
        match self {
            Self::Witness(witness) => Some(witness),
            Self::Infeasible => None,
        }
    }

    /// Converts the outcome into an optional witness.
    #[must_use]
    pub fn into_witness(self) -> Option<Witness> {
        match self {
            Self::Witness(witness) => Some(witness),
            Self::Infeasible => None,
        }
    }
}

/// Statistics collected during one or more solver invocations.
///
/// Tracks how many times each tier was attempted, in tier order. Useful for
/// observing the fallback behavior: a pre-check rejection leaves every
/// attempt count at zero, while a hard instance shows all tiers attempted.
///
/// # Examples
///
/// ```
/// use gembox_solver::HintSolver;
///
/// let solver = HintSolver::with_all_strategies();
/// let stats = solver.new_stats();
/// assert!(!stats.has_attempts());
/// ```
#[derive(Debug, Clone)]
pub struct HintSolverStats {
    attempts: Vec<usize>,
    total_attempts: usize,
}

impl HintSolverStats {
    /// Returns tier attempt counts in solver order.
    ///
    /// Includes tiers that never ran with a count of `0`.
    #[must_use]
    pub fn attempts(&self) -> &[usize] {
        &self.attempts
    }

    /// Returns the total number of tier attempts.
    #[must_use]
    pub const fn total_attempts(&self) -> usize {
        self.total_attempts
    }

    /// Returns `true` if any tier was attempted at least once.
    #[must_use]
    pub const fn has_attempts(&self) -> bool {
        self.total_attempts > 0
    }
}

/// The hint-engine orchestrator.
///
/// Runs the feasibility pre-check, derives the candidate pools once, then
/// attempts each strategy in fallback order. The first witness found is
/// returned as-is; if every tier fails, the answer is a definitive
/// [`HintOutcome::Infeasible`], because the final tier is complete.
///
/// The solver is synchronous and works entirely on private copies of pool
/// data; the caller's pool and window are never mutated. The caller must
/// not mutate them either while an invocation is in flight, and must not
/// start a second invocation before the first returns.
///
/// # Examples
///
/// ```
/// use gembox_core::{Category, GlobalPool, Item, ItemId, RoundRequirement, VisibleWindow};
/// use gembox_solver::{HintOutcome, HintSolver};
///
/// let pool = GlobalPool::from_items([
///     Item::new(ItemId::new(0), Category::new(0), 2),
///     Item::new(ItemId::new(1), Category::new(1), 3),
/// ])?;
/// let mut window = VisibleWindow::new(12);
/// for item in pool.iter() {
///     window.place_first_empty(item.clone())?;
/// }
/// let requirement = RoundRequirement::new(5, 1)?;
///
/// let solver = HintSolver::with_all_strategies();
/// let outcome = solver.solve(&pool, &window, &requirement, 2);
/// assert!(!outcome.is_infeasible());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct HintSolver {
    strategies: Vec<BoxedStrategy>,
}

impl HintSolver {
    /// Creates a solver with the specified strategies.
    ///
    /// Strategies are attempted in the order they appear in the vector.
    #[must_use]
    pub fn new(strategies: Vec<BoxedStrategy>) -> Self {
        Self { strategies }
    }

    /// Creates a solver with all strategies in fallback order, as defined
    /// by [`strategy::all_strategies`].
    #[must_use]
    pub fn with_all_strategies() -> Self {
        Self {
            strategies: strategy::all_strategies(),
        }
    }

    /// Creates a statistics object aligned with this solver's tier order.
    #[must_use]
    pub fn new_stats(&self) -> HintSolverStats {
        HintSolverStats {
            attempts: vec![0; self.strategies.len()],
            total_attempts: 0,
        }
    }

    /// Returns the configured strategies in attempt order.
    ///
    /// The returned slice defines the index mapping used by
    /// [`HintSolverStats::attempts`].
    #[must_use]
    pub fn strategies(&self) -> &[BoxedStrategy] {
        &self.strategies
    }

    /// Solves one hint request.
    ///
    /// The pool and window must be a consistent snapshot: every window item
    /// present in the pool, frozen for the duration of the call.
    #[must_use]
    pub fn solve(
        &self,
        pool: &GlobalPool,
        window: &VisibleWindow,
        requirement: &RoundRequirement,
        category_count: usize,
    ) -> HintOutcome {
        let mut stats = self.new_stats();
        self.solve_with_stats(pool, window, requirement, category_count, &mut stats)
    }

    /// Solves one hint request, accumulating tier statistics.
    ///
    /// This is similar to [`solve`](Self::solve), but allows reusing an
    /// existing statistics object across invocations.
    #[must_use]
    pub fn solve_with_stats(
        &self,
        pool: &GlobalPool,
        window: &VisibleWindow,
        requirement: &RoundRequirement,
        category_count: usize,
        stats: &mut HintSolverStats,
    ) -> HintOutcome {
        debug_assert_eq!(self.strategies.len(), stats.attempts.len());

        if !feasibility::is_globally_feasible(pool, requirement, category_count) {
            debug!("pre-check rejected instance: some category cannot feed the remaining rounds");
            return HintOutcome::Infeasible;
        }

        let Some(pool_info) = PoolInfo::build(pool, window, requirement, category_count) else {
            debug!("candidate pool build failed");
            return HintOutcome::Infeasible;
        };

        for (i, strategy) in self.strategies.iter().enumerate() {
            stats.attempts[i] += 1;
            stats.total_attempts += 1;
            match strategy.attempt(&pool_info) {
                Ok(Some(witness)) => {
                    debug!("{} found a witness of {} gems", strategy.name(), witness.len());
                    return HintOutcome::Witness(witness);
                }
                Ok(None) => {
                    debug!("{} found no witness", strategy.name());
                }
                Err(err) => {
                    // Internal faults fail one tier only; the next tier
                    // still gets its attempt.
                    warn!("{} faulted: {err}", strategy.name());
                }
            }
        }

        HintOutcome::Infeasible
    }
}
