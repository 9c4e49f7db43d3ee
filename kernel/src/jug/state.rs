//! `JugState`: the immutable `(big, small)` pair that identifies a search state.

/// Amount of water in each jug.
///
/// Field order matters: the derived `Ord` compares `big` first, then `small`,
/// which is the lexicographic order every neighbor list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JugState {
    /// Amount in the large jug.
    pub big: u32,
    /// Amount in the small jug.
    pub small: u32,
}

impl JugState {
    /// Both jugs empty: the root of every search.
    pub const EMPTY: Self = Self { big: 0, small: 0 };

    #[must_use]
    pub const fn new(big: u32, small: u32) -> Self {
        Self { big, small }
    }

    /// The goal state for a target amount: `target` in the large jug, small jug empty.
    #[must_use]
    pub const fn goal(target: u32) -> Self {
        Self {
            big: target,
            small: 0,
        }
    }
}

impl std::fmt::Display for JugState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.big, self.small)
    }
}

impl From<(u32, u32)> for JugState {
    fn from((big, small): (u32, u32)) -> Self {
        Self { big, small }
    }
}
