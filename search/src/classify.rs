//! Operation classifier: name the operation between two adjacent path states.
//!
//! Paths store states only. The label is recovered from the endpoint pair,
//! assuming the pair really is one legal operation apart; no validation is
//! performed here (use `decant_kernel::proof::replay::replay_verify` for that).

use decant_kernel::jug::capacity::JugCapacities;
use decant_kernel::jug::state::JugState;
use decant_kernel::operators::operation::Operation;

/// Which operation turns `from` into `to`.
#[must_use]
pub fn classify(from: JugState, to: JugState, caps: JugCapacities) -> Operation {
    let big_changed = from.big != to.big;
    let small_changed = from.small != to.small;

    if big_changed && !small_changed {
        if to.big == caps.large() {
            Operation::FillLarge
        } else if to.big == 0 {
            Operation::EmptyLarge
        } else {
            Operation::TransferSmallToLarge
        }
    } else if small_changed && !big_changed {
        if to.small == caps.small() {
            Operation::FillSmall
        } else if to.small == 0 {
            Operation::EmptySmall
        } else {
            Operation::TransferLargeToSmall
        }
    } else if from.big > to.big && from.small < to.small {
        Operation::TransferLargeToSmall
    } else {
        Operation::TransferSmallToLarge
    }
}

/// Label every consecutive pair of `path`.
#[must_use]
pub fn label_path(path: &[JugState], caps: JugCapacities) -> Vec<Operation> {
    path.windows(2)
        .map(|pair| classify(pair[0], pair[1], caps))
        .collect()
}
