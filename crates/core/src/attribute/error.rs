use core::fmt::{Display, Formatter, Result};

/// A combination size larger than the set it is drawn from.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsufficientElements {
    pub requested: usize,
    pub available: usize,
}

impl Display for InsufficientElements {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "cannot choose {} elements from a set of {}",
            self.requested, self.available
        )
    }
}

impl core::error::Error for InsufficientElements {}
