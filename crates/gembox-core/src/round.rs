//! Round (box) requirements.

/// An error raised when constructing an invalid [`RoundRequirement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RoundError {
    /// The target sum must be strictly positive.
    #[display("target sum must be positive")]
    ZeroTarget,
    /// The remaining-round count must be strictly positive.
    #[display("remaining round count must be positive")]
    ZeroRounds,
}

/// The parameters of one target-sum round.
///
/// `remaining_rounds` includes the current round and all future rounds that
/// still need to be fed from the same pool; the hint engine uses it to
/// reserve enough of every category for the rounds still to come.
///
/// # Examples
///
/// ```
/// use gembox_core::RoundRequirement;
///
/// let requirement = RoundRequirement::new(10, 3)?;
/// assert_eq!(requirement.target_sum(), 10);
/// assert_eq!(requirement.remaining_rounds(), 3);
/// # Ok::<(), gembox_core::RoundError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRequirement {
    target_sum: u32,
    remaining_rounds: u32,
}

impl RoundRequirement {
    /// Creates a round requirement.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::ZeroTarget`] or [`RoundError::ZeroRounds`] when
    /// the corresponding parameter is zero; both are strictly positive by
    /// definition.
    pub const fn new(target_sum: u32, remaining_rounds: u32) -> Result<Self, RoundError> {
        if target_sum == 0 {
            return Err(RoundError::ZeroTarget);
        }
        if remaining_rounds == 0 {
            return Err(RoundError::ZeroRounds);
        }
        Ok(Self {
            target_sum,
            remaining_rounds,
        })
    }

    /// Returns the exact sum a selection must reach.
    #[must_use]
    pub const fn target_sum(self) -> u32 {
        self.target_sum
    }

    /// Returns the number of rounds still to be fed from the pool,
    /// including the current one.
    #[must_use]
    pub const fn remaining_rounds(self) -> u32 {
        self.remaining_rounds
    }
}
