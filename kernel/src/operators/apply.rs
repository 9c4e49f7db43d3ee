//! `apply()` and `candidates()`: the pure state-to-candidates rule.
//!
//! No I/O, no internal state. Both search strategies derive every transition
//! through this module, so the eager graph and the lazy generator can never
//! disagree about what is legal.

use crate::jug::capacity::JugCapacities;
use crate::jug::state::JugState;
use crate::operators::operation::Operation;

/// One operation applied to a state, with its resulting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub op: Operation,
    pub to: JugState,
}

/// Apply a single operation to `state`.
///
/// Returns `None` when the operation's guard does not hold (for example,
/// filling a jug that is already full). The caller is responsible for
/// `state` lying inside `caps`.
#[must_use]
pub fn apply(op: Operation, state: JugState, caps: JugCapacities) -> Option<JugState> {
    let (big, small) = (state.big, state.small);
    let (large_cap, small_cap) = (caps.large(), caps.small());

    match op {
        Operation::FillLarge => (big < large_cap).then_some(JugState::new(large_cap, small)),
        Operation::FillSmall => (small < small_cap).then_some(JugState::new(big, small_cap)),
        Operation::EmptyLarge => (big > 0).then_some(JugState::new(0, small)),
        Operation::EmptySmall => (small > 0).then_some(JugState::new(big, 0)),
        Operation::TransferLargeToSmall => {
            if big == 0 || small >= small_cap {
                return None;
            }
            let pour = big.min(small_cap - small);
            Some(JugState::new(big - pour, small + pour))
        }
        Operation::TransferSmallToLarge => {
            if small == 0 || big >= large_cap {
                return None;
            }
            let pour = small.min(large_cap - big);
            Some(JugState::new(big + pour, small - pour))
        }
    }
}

/// Apply every operation to `state`, in [`Operation::ALL`] order.
///
/// Each applicable operation yields exactly one candidate. Candidates are
/// neither sorted nor deduplicated here.
#[must_use]
pub fn candidates(state: JugState, caps: JugCapacities) -> Vec<Candidate> {
    Operation::ALL
        .iter()
        .filter_map(|&op| apply(op, state, caps).map(|to| Candidate { op, to }))
        .collect()
}
