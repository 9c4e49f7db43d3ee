//! Puzzle input contract: raw user values and their validated form.
//!
//! The search core never sees invalid capacities. Everything a user can get
//! wrong is rejected here, before any graph is built or state expanded.

use decant_kernel::jug::capacity::{JugCapacities, MAX_STATE_COUNT};
use decant_kernel::jug::state::JugState;

/// Which user-supplied field an [`InputError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Large,
    Small,
    Target,
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Large => "L",
            Self::Small => "S",
            Self::Target => "W",
        })
    }
}

/// Typed rejection of user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("invalid input: {field} must not be negative (got {value})")]
    NegativeValue { field: InputField, value: i64 },
    #[error("invalid input: {field} = {value} is too large")]
    ValueTooLarge { field: InputField, value: i64 },
    #[error("invalid input: L ({large}) must be greater than S ({small})")]
    LargeNotGreaterThanSmall { large: u32, small: u32 },
    #[error("invalid input: W ({target}) must not exceed L ({large})")]
    TargetOutOfRange { target: u32, large: u32 },
    #[error("invalid input: L = {large}, S = {small} give more than {limit} states")]
    StateSpaceTooLarge { large: u32, small: u32, limit: usize },
}

/// Raw puzzle values as typed by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleInput {
    pub large: i64,
    pub small: i64,
    pub target: i64,
}

impl PuzzleInput {
    /// Enforce `L > S >= 0`, `0 <= W <= L`, and a state space of at most
    /// [`MAX_STATE_COUNT`] states.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] found, checking sign and range of each
    /// field before the relations between them.
    pub fn validate(&self) -> Result<Puzzle, InputError> {
        let large = to_amount(InputField::Large, self.large)?;
        let small = to_amount(InputField::Small, self.small)?;
        let target = to_amount(InputField::Target, self.target)?;
        if large <= small {
            return Err(InputError::LargeNotGreaterThanSmall { large, small });
        }
        if target > large {
            return Err(InputError::TargetOutOfRange { target, large });
        }
        let caps = JugCapacities::new(large, small);
        if !caps.within_state_limit() {
            return Err(InputError::StateSpaceTooLarge {
                large,
                small,
                limit: MAX_STATE_COUNT,
            });
        }
        Ok(Puzzle { caps, target })
    }
}

fn to_amount(field: InputField, value: i64) -> Result<u32, InputError> {
    if value < 0 {
        return Err(InputError::NegativeValue { field, value });
    }
    u32::try_from(value).map_err(|_| InputError::ValueTooLarge { field, value })
}

/// A validated puzzle: capacities plus the target amount for the large jug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub caps: JugCapacities,
    pub target: u32,
}

impl Puzzle {
    /// `(W, 0)`.
    #[must_use]
    pub fn goal(&self) -> JugState {
        JugState::goal(self.target)
    }
}
