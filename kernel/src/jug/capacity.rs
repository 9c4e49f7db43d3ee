//! Jug capacities and the linear state index.
//!
//! Every state `(big, small)` with `big <= large` and `small <= small_cap` has
//! exactly one linear index `big * (small_cap + 1) + small`. The index is used
//! both as an arena offset and as the canonical identity of a state in the
//! distance and parent tables.

use crate::jug::state::JugState;

/// Largest state space a search will allocate dense tables for.
pub const MAX_STATE_COUNT: usize = 1 << 24;

/// Capacities of the two jugs.
///
/// The model itself does not require `large > small`; that ordering is an
/// input rule enforced by the caller before a search is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JugCapacities {
    large: u32,
    small: u32,
}

impl JugCapacities {
    #[must_use]
    pub const fn new(large: u32, small: u32) -> Self {
        Self { large, small }
    }

    #[must_use]
    pub fn large(&self) -> u32 {
        self.large
    }

    #[must_use]
    pub fn small(&self) -> u32 {
        self.small
    }

    /// Total number of combinatorial states: `(L + 1) * (S + 1)`.
    ///
    /// `None` if the product does not fit in `usize`.
    #[must_use]
    pub fn state_count(&self) -> Option<usize> {
        let rows = usize::try_from(self.large).ok()?.checked_add(1)?;
        let cols = usize::try_from(self.small).ok()?.checked_add(1)?;
        rows.checked_mul(cols)
    }

    /// Whether the state space is at most [`MAX_STATE_COUNT`] states.
    #[must_use]
    pub fn within_state_limit(&self) -> bool {
        self.state_count().is_some_and(|n| n <= MAX_STATE_COUNT)
    }

    /// Whether `state` lies inside `[0, L] x [0, S]`.
    #[must_use]
    pub fn contains(&self, state: JugState) -> bool {
        state.big <= self.large && state.small <= self.small
    }

    /// Linear index of `state`, or `None` if it is out of bounds.
    #[must_use]
    pub fn index_of(&self, state: JugState) -> Option<usize> {
        if !self.contains(state) {
            return None;
        }
        let row = usize::try_from(self.small).ok()?.checked_add(1)?;
        usize::try_from(state.big)
            .ok()?
            .checked_mul(row)?
            .checked_add(usize::try_from(state.small).ok()?)
    }

    /// Greatest common divisor of the two capacities.
    ///
    /// `(W, 0)` is reachable from `(0, 0)` exactly when `W` is a multiple of this.
    #[must_use]
    pub fn gcd(&self) -> u32 {
        let (mut a, mut b) = (self.large, self.small);
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }

    /// Iterate every combinatorial state in linear-index order.
    pub fn states(&self) -> impl Iterator<Item = JugState> {
        let small_cap = self.small;
        (0..=self.large)
            .flat_map(move |big| (0..=small_cap).map(move |small| JugState { big, small }))
    }
}
