//! `replay_verify()`: check a recorded path by re-applying each operation.
//!
//! A path is valid when every recorded `(operation, state)` step reproduces
//! its state from the previous one through [`crate::operators::apply::apply`].

use crate::jug::capacity::JugCapacities;
use crate::jug::state::JugState;
use crate::operators::apply::apply;
use crate::operators::operation::Operation;

/// Why a recorded path failed to replay.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    /// The replay start is outside the capacities.
    #[error("start state {start} is outside the jug capacities")]
    StartOutOfBounds { start: JugState },
    /// The operation's guard did not hold at this step.
    #[error("step {step}: {op:?} is not applicable at {from}")]
    NotApplicable {
        step: usize,
        op: Operation,
        from: JugState,
    },
    /// The operation applied but produced a different state than recorded.
    #[error("step {step}: {op:?} from {from} yields {actual}, recorded {recorded}")]
    StepMismatch {
        step: usize,
        op: Operation,
        from: JugState,
        actual: JugState,
        recorded: JugState,
    },
}

/// Replay `steps` from `start`, returning the final state.
///
/// `steps[i]` is the operation taken at step `i` and the state it is recorded
/// to produce. An empty step list replays to `start` itself.
///
/// # Errors
///
/// Returns the first [`ReplayError`] encountered.
pub fn replay_verify(
    caps: JugCapacities,
    start: JugState,
    steps: &[(Operation, JugState)],
) -> Result<JugState, ReplayError> {
    if !caps.contains(start) {
        return Err(ReplayError::StartOutOfBounds { start });
    }
    steps
        .iter()
        .enumerate()
        .try_fold(start, |from, (step, &(op, recorded))| {
            let actual =
                apply(op, from, caps).ok_or(ReplayError::NotApplicable { step, op, from })?;
            if actual != recorded {
                return Err(ReplayError::StepMismatch {
                    step,
                    op,
                    from,
                    actual,
                    recorded,
                });
            }
            Ok(actual)
        })
}
