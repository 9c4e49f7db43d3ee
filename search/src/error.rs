//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. An exhausted frontier
//! is a normal outcome and is expressed via
//! [`crate::search::TerminationReason::FrontierExhausted`].

use decant_kernel::jug::capacity::{JugCapacities, MAX_STATE_COUNT};
use decant_kernel::jug::state::JugState;

/// Typed failure raised before any traversal happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A strategy selector that names neither strategy.
    #[error("unknown strategy {selector:?}: expected 1 (eager) or 2 (lazy)")]
    UnknownStrategy { selector: String },
    /// The start state lies outside the capacities of the successor source.
    #[error("state {state} is outside capacities (large {large}, small {small})")]
    StateOutOfBounds {
        state: JugState,
        large: u32,
        small: u32,
    },
    /// `(L + 1) * (S + 1)` exceeds the dense table limit.
    #[error("state space of capacities (large {large}, small {small}) exceeds {limit} states")]
    StateSpaceTooLarge { large: u32, small: u32, limit: usize },
}

impl SearchError {
    /// Reject capacities whose state space is too large to allocate.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::StateSpaceTooLarge`] when
    /// [`JugCapacities::within_state_limit`] does not hold.
    pub fn check_state_limit(caps: JugCapacities) -> Result<(), Self> {
        if caps.within_state_limit() {
            return Ok(());
        }
        Err(Self::StateSpaceTooLarge {
            large: caps.large(),
            small: caps.small(),
            limit: MAX_STATE_COUNT,
        })
    }
}
