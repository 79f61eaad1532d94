//! Test utilities for hint-engine strategies.
//!
//! This module provides [`SolverTester`], a harness for building small
//! solver instances and asserting how the strategies and the orchestrator
//! behave on them.
//!
//! # Example
//!
//! ```
//! use gembox_solver::{Backtracking, testing::SolverTester};
//!
//! SolverTester::new(2, 5, 1)
//!     .visible(0, [1, 3])
//!     .visible(1, [2, 4])
//!     .assert_strategy_weights(&Backtracking::new(), [1, 4]);
//! ```

use gembox_core::{Category, GlobalPool, Item, ItemId, RoundRequirement, VisibleWindow};

use crate::{HintOutcome, HintSolver, HintSolverStats, PoolInfo, Strategy, StrategyError, Witness};

/// A test harness for hint-engine instances.
///
/// The tester accumulates visible and hidden (pool-only) gems per category,
/// assigns ids in insertion order so runs are reproducible, and exposes
/// assertion helpers over individual strategies and the full solver.
///
/// # Method Chaining
///
/// Setup methods consume and return `self`, enabling fluent chaining.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct SolverTester {
    category_count: usize,
    target_sum: u32,
    remaining_rounds: u32,
    visible: Vec<Item>,
    hidden: Vec<Item>,
    next_id: u32,
}

impl SolverTester {
    /// Creates a tester for an instance with the given category count,
    /// target sum, and remaining-round count.
    #[must_use]
    pub const fn new(category_count: usize, target_sum: u32, remaining_rounds: u32) -> Self {
        Self {
            category_count,
            target_sum,
            remaining_rounds,
            visible: Vec::new(),
            hidden: Vec::new(),
            next_id: 0,
        }
    }

    /// Adds gems of one category to both the pool and the visible window.
    #[must_use]
    pub fn visible<I>(mut self, category: u8, weights: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        for weight in weights {
            let item = Item::new(ItemId::new(self.next_id), Category::new(category), weight);
            self.next_id += 1;
            self.visible.push(item);
        }
        self
    }

    /// Adds gems of one category to the pool only.
    ///
    /// Hidden gems affect the feasibility pre-check and the per-category
    /// selection ceilings, but can never be selected.
    #[must_use]
    pub fn hidden<I>(mut self, category: u8, weights: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        for weight in weights {
            let item = Item::new(ItemId::new(self.next_id), Category::new(category), weight);
            self.next_id += 1;
            self.hidden.push(item);
        }
        self
    }

    /// Builds the global pool for this instance.
    ///
    /// # Panics
    ///
    /// Panics if the accumulated gems are invalid (duplicate ids cannot
    /// occur; ids are assigned by the tester).
    #[must_use]
    pub fn pool(&self) -> GlobalPool {
        GlobalPool::from_items(self.visible.iter().chain(&self.hidden).cloned())
            .expect("tester-assigned ids are unique")
    }

    /// Builds the visible window for this instance.
    ///
    /// # Panics
    ///
    /// Panics if the window overflows; its capacity covers all visible gems.
    #[must_use]
    pub fn window(&self) -> VisibleWindow {
        let mut window = VisibleWindow::new(self.visible.len().max(12));
        for item in &self.visible {
            window
                .place_first_empty(item.clone())
                .expect("window sized to fit all visible gems");
        }
        window
    }

    /// Builds the round requirement for this instance.
    ///
    /// # Panics
    ///
    /// Panics if the target sum or round count is zero.
    #[must_use]
    pub fn requirement(&self) -> RoundRequirement {
        RoundRequirement::new(self.target_sum, self.remaining_rounds)
            .expect("tester parameters must be positive")
    }

    /// Derives the candidate pools for this instance.
    #[must_use]
    pub fn pool_info(&self) -> Option<PoolInfo> {
        PoolInfo::build(
            &self.pool(),
            &self.window(),
            &self.requirement(),
            self.category_count,
        )
    }

    /// Runs a single strategy over this instance's candidate pools.
    ///
    /// # Panics
    ///
    /// Panics if the candidate pool build fails; use the full solver
    /// assertions for instances that are rejected before the strategies.
    pub fn attempt(&self, strategy: &dyn Strategy) -> Result<Option<Witness>, StrategyError> {
        let pool_info = self
            .pool_info()
            .expect("candidate pool build failed; instance never reaches the strategies");
        strategy.attempt(&pool_info)
    }

    /// Runs the full solver with all strategies.
    #[must_use]
    pub fn solve(&self) -> HintOutcome {
        HintSolver::with_all_strategies().solve(
            &self.pool(),
            &self.window(),
            &self.requirement(),
            self.category_count,
        )
    }

    /// Runs the full solver, collecting per-tier statistics.
    #[must_use]
    pub fn solve_with_stats(&self, stats: &mut HintSolverStats) -> HintOutcome {
        HintSolver::with_all_strategies().solve_with_stats(
            &self.pool(),
            &self.window(),
            &self.requirement(),
            self.category_count,
            stats,
        )
    }

    /// Asserts that `strategy` finds a witness with exactly these weights,
    /// in selection order, and that the witness is sound.
    #[track_caller]
    pub fn assert_strategy_weights<I>(&self, strategy: &dyn Strategy, expected: I) -> &Self
    where
        I: IntoIterator<Item = u32>,
    {
        let witness = match self.attempt(strategy) {
            Ok(Some(witness)) => witness,
            Ok(None) => panic!("{} found no witness", strategy.name()),
            Err(err) => panic!("{} faulted: {err}", strategy.name()),
        };
        self.assert_sound(&witness);
        let weights: Vec<_> = witness.items().iter().map(Item::weight).collect();
        let expected: Vec<_> = expected.into_iter().collect();
        assert_eq!(
            weights,
            expected,
            "{} selected unexpected weights",
            strategy.name()
        );
        self
    }

    /// Asserts that `strategy` fails cleanly (no witness, no fault).
    #[track_caller]
    pub fn assert_strategy_fails(&self, strategy: &dyn Strategy) -> &Self {
        match self.attempt(strategy) {
            Ok(None) => {}
            Ok(Some(witness)) => panic!(
                "{} unexpectedly found witness with weights {:?}",
                strategy.name(),
                witness.items().iter().map(Item::weight).collect::<Vec<_>>()
            ),
            Err(err) => panic!("{} faulted: {err}", strategy.name()),
        }
        self
    }

    /// Asserts that the full solver finds a sound witness with exactly
    /// these weights in selection order.
    #[track_caller]
    pub fn assert_solver_weights<I>(&self, expected: I) -> &Self
    where
        I: IntoIterator<Item = u32>,
    {
        let HintOutcome::Witness(witness) = self.solve() else {
            panic!("solver reported infeasible");
        };
        self.assert_sound(&witness);
        let weights: Vec<_> = witness.items().iter().map(Item::weight).collect();
        let expected: Vec<_> = expected.into_iter().collect();
        assert_eq!(weights, expected, "solver selected unexpected weights");
        self
    }

    /// Asserts that the full solver reports the instance infeasible.
    #[track_caller]
    pub fn assert_infeasible(&self) -> &Self {
        if let HintOutcome::Witness(witness) = self.solve() {
            panic!(
                "solver unexpectedly found witness with weights {:?}",
                witness.items().iter().map(Item::weight).collect::<Vec<_>>()
            );
        }
        self
    }

    #[track_caller]
    fn assert_sound(&self, witness: &Witness) {
        let pool_info = self
            .pool_info()
            .expect("witness produced without candidate pools");
        if let Err(violation) = witness.verify(&pool_info, &self.window()) {
            panic!("unsound witness: {violation}");
        }
    }
}
