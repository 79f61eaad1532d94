use gembox_core::{Category, GlobalPool, Item, ItemId, RoundRequirement, VisibleWindow};
use gembox_solver::{HintSolver, Witness};
use log::debug;

/// An error raised by [`Session`] operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// The session needs at least one category.
    #[display("session needs at least one category")]
    NoCategories,
    /// The category count exceeds the representable maximum of 256.
    #[display("category count {_0} exceeds 256")]
    TooManyCategories(#[error(not(source))] usize),
    /// The session needs at least one round target.
    #[display("session needs at least one round target")]
    NoTargets,
    /// A round target in the sequence is zero.
    #[display("round target {index} is zero")]
    ZeroTarget {
        /// Position of the offending target in the round sequence.
        index: usize,
    },
    /// A window gem is missing from the global pool.
    #[display("window item {_0} is not in the global pool")]
    WindowItemMissing(#[error(not(source))] ItemId),
    /// Every round has already been completed.
    #[display("no rounds remaining")]
    NoRoundsRemaining,
    /// A submitted gem is not in the visible window.
    #[display("item {_0} is not visible")]
    ItemNotVisible(#[error(not(source))] ItemId),
    /// A submitted gem appears twice.
    #[display("item {_0} submitted twice")]
    DuplicateSelection(#[error(not(source))] ItemId),
    /// The submitted selection does not sum to the round target.
    #[display("selection sums to {actual}, round requires {expected}")]
    WrongSum {
        /// The current round's target sum.
        expected: u32,
        /// The selection's actual total, which may exceed `u32::MAX`.
        actual: u64,
    },
    /// The submitted selection misses a category.
    #[display("selection has no gem of {_0}")]
    MissingCategory(#[error(not(source))] Category),
}

/// The record of one completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    target_sum: u32,
    items: Vec<Item>,
}

impl RoundRecord {
    /// Returns the target sum the round was completed against.
    #[must_use]
    pub const fn target_sum(&self) -> u32 {
        self.target_sum
    }

    /// Returns the gems consumed by the round, in submission order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

/// A gembox game session.
///
/// Owns the global pool, the visible window, and the sequence of round
/// targets. The session is the single writer of this state: the solver only
/// ever sees a frozen snapshot, and gems leave play exclusively through
/// [`complete_round`](Self::complete_round), which moves them into the
/// history.
///
/// # Examples
///
/// ```
/// use gembox_core::{Category, GlobalPool, Item, ItemId, VisibleWindow};
/// use gembox_game::Session;
///
/// let pool = GlobalPool::from_items([
///     Item::new(ItemId::new(0), Category::new(0), 2),
///     Item::new(ItemId::new(1), Category::new(1), 3),
/// ])?;
/// let mut window = VisibleWindow::new(12);
/// for item in pool.iter() {
///     window.place_first_empty(item.clone())?;
/// }
///
/// let session = Session::new(2, pool, window, vec![5])?;
/// let witness = session.hint().expect("round is solvable");
/// assert_eq!(witness.total_weight(), 5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    category_count: usize,
    pool: GlobalPool,
    window: VisibleWindow,
    /// Upcoming round targets; the front is the current round.
    targets: Vec<u32>,
    completed: Vec<RoundRecord>,
    solver: HintSolver,
}

impl Session {
    /// Creates a session over a pool, a window, and a sequence of round
    /// targets.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when the category count or target
    /// sequence is empty, a target is zero, or a window gem is missing
    /// from the pool.
    pub fn new(
        category_count: usize,
        pool: GlobalPool,
        window: VisibleWindow,
        targets: Vec<u32>,
    ) -> Result<Self, SessionError> {
        if category_count == 0 {
            return Err(SessionError::NoCategories);
        }
        if category_count > 256 {
            return Err(SessionError::TooManyCategories(category_count));
        }
        if targets.is_empty() {
            return Err(SessionError::NoTargets);
        }
        if let Some(index) = targets.iter().position(|&target| target == 0) {
            return Err(SessionError::ZeroTarget { index });
        }
        if let Some(item) = window.items().find(|item| !pool.contains(item.id())) {
            return Err(SessionError::WindowItemMissing(item.id()));
        }

        Ok(Self {
            category_count,
            pool,
            window,
            targets,
            completed: Vec::new(),
            solver: HintSolver::with_all_strategies(),
        })
    }

    /// Returns the number of gem categories.
    #[must_use]
    pub const fn category_count(&self) -> usize {
        self.category_count
    }

    /// Returns the global pool.
    #[must_use]
    pub const fn pool(&self) -> &GlobalPool {
        &self.pool
    }

    /// Returns the visible window.
    #[must_use]
    pub const fn window(&self) -> &VisibleWindow {
        &self.window
    }

    /// Returns the completed-round history, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.completed
    }

    /// Returns `true` when every round has been completed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.targets.is_empty()
    }

    /// Returns the requirement of the current round, or `None` when the
    /// session is finished.
    #[must_use]
    pub fn current_requirement(&self) -> Option<RoundRequirement> {
        let &target = self.targets.first()?;
        let remaining = u32::try_from(self.targets.len()).ok()?;
        // Both are nonzero by construction
        RoundRequirement::new(target, remaining).ok()
    }

    /// Requests a hint for the current round.
    ///
    /// The call is synchronous and runs over the session's frozen state;
    /// returns `None` when the session is finished or no valid selection
    /// exists for the current window.
    #[must_use]
    pub fn hint(&self) -> Option<Witness> {
        let requirement = self.current_requirement()?;
        self.solver
            .solve(&self.pool, &self.window, &requirement, self.category_count)
            .into_witness()
    }

    /// Completes the current round with the given selection.
    ///
    /// The selection is validated against the round requirement: every gem
    /// must be visible, no gem may repeat, the weights must sum exactly to
    /// the target, and every category must be represented. On success the
    /// gems move out of the pool and window into a new history record, and
    /// the session advances to the next round.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] describing the first violation; the
    /// session state is untouched on error.
    pub fn complete_round(&mut self, selection: &[ItemId]) -> Result<&RoundRecord, SessionError> {
        let requirement = self
            .current_requirement()
            .ok_or(SessionError::NoRoundsRemaining)?;

        let mut items = Vec::with_capacity(selection.len());
        for (i, &id) in selection.iter().enumerate() {
            if selection[..i].contains(&id) {
                return Err(SessionError::DuplicateSelection(id));
            }
            let item = self
                .window
                .items()
                .find(|item| item.id() == id)
                .ok_or(SessionError::ItemNotVisible(id))?;
            items.push(item.clone());
        }

        let actual: u64 = items.iter().map(|item| u64::from(item.weight())).sum();
        if actual != u64::from(requirement.target_sum()) {
            return Err(SessionError::WrongSum {
                expected: requirement.target_sum(),
                actual,
            });
        }
        if let Some(category) = Category::all(self.category_count)
            .find(|&category| !items.iter().any(|item| item.category() == category))
        {
            return Err(SessionError::MissingCategory(category));
        }

        // Validation passed; move the gems out of play.
        for item in &items {
            self.window.remove(item.id());
            self.pool.remove(item.id());
        }
        self.targets.remove(0);
        debug!(
            "round completed with {} gems, {} rounds left",
            items.len(),
            self.targets.len()
        );
        self.completed.push(RoundRecord {
            target_sum: requirement.target_sum(),
            items,
        });
        Ok(self.completed.last().expect("record just pushed"))
    }
}
