//! Strategy selection: how successors are produced during search.

use std::str::FromStr;

use crate::error::SearchError;

/// Which successor source backs the breadth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Materialize the full transition graph up front, then search it.
    Eager,
    /// Generate successors on demand, tracking visited states in a set.
    Lazy,
}

impl Strategy {
    /// Map the numeric menu selector (`1` eager, `2` lazy).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownStrategy`] for any other value.
    pub fn from_selector(selector: i64) -> Result<Self, SearchError> {
        match selector {
            1 => Ok(Self::Eager),
            2 => Ok(Self::Lazy),
            other => Err(SearchError::UnknownStrategy {
                selector: other.to_string(),
            }),
        }
    }

    /// Inverse of [`Strategy::from_selector`].
    #[must_use]
    pub const fn selector(self) -> u8 {
        match self {
            Self::Eager => 1,
            Self::Lazy => 2,
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Eager => "eager",
            Self::Lazy => "lazy",
        }
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "eager" => Ok(Self::Eager),
            "2" | "lazy" => Ok(Self::Lazy),
            _ => Err(SearchError::UnknownStrategy {
                selector: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
