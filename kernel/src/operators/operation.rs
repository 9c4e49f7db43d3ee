//! The six legal jug operations.

/// A single legal operation on the jug pair.
///
/// Variant order is the order in which candidates are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    FillLarge,
    FillSmall,
    EmptyLarge,
    EmptySmall,
    /// Pour from the large jug into the small jug until one is exhausted.
    TransferLargeToSmall,
    /// Pour from the small jug into the large jug until one is exhausted.
    TransferSmallToLarge,
}

impl Operation {
    /// All operations in generation order.
    pub const ALL: [Operation; 6] = [
        Self::FillLarge,
        Self::FillSmall,
        Self::EmptyLarge,
        Self::EmptySmall,
        Self::TransferLargeToSmall,
        Self::TransferSmallToLarge,
    ];

    /// Human-readable label used when printing a solution.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FillLarge => "Fill large jug",
            Self::FillSmall => "Fill small jug",
            Self::EmptyLarge => "Empty large jug",
            Self::EmptySmall => "Empty small jug",
            Self::TransferLargeToSmall => "Transfer from large jug to small jug",
            Self::TransferSmallToLarge => "Transfer from small jug to large jug",
        }
    }

    /// Stable snake_case code for machine-readable output.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::FillLarge => "fill_large",
            Self::FillSmall => "fill_small",
            Self::EmptyLarge => "empty_large",
            Self::EmptySmall => "empty_small",
            Self::TransferLargeToSmall => "transfer_large_to_small",
            Self::TransferSmallToLarge => "transfer_small_to_large",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
