use core::fmt::{Display, Formatter, Result};

use crate::attribute::{Attribute, AttributeSet};

/// Arrow used when rendering a dependency.
pub const ARROW: char = '\u{2192}';

/// A functional dependency `lhs → rhs`.
///
/// Dependencies held by a [`Schema`](super::Schema) always have non-empty,
/// disjoint sides drawn from the schema's attributes.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "A: ::serde::Deserialize<'de> + Ord"))
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionalDependency<A> {
    pub(crate) lhs: AttributeSet<A>,
    pub(crate) rhs: AttributeSet<A>,
}

impl<A: Attribute> FunctionalDependency<A> {
    pub(crate) const fn new(lhs: AttributeSet<A>, rhs: AttributeSet<A>) -> Self {
        Self { lhs, rhs }
    }

    #[must_use]
    pub const fn lhs(&self) -> &AttributeSet<A> {
        &self.lhs
    }

    #[must_use]
    pub const fn rhs(&self) -> &AttributeSet<A> {
        &self.rhs
    }

    /// `lhs ∪ rhs`.
    #[must_use]
    pub fn attributes(&self) -> AttributeSet<A> {
        self.lhs.union(&self.rhs)
    }
}

/// Renders as `[a, b] → [c]`.
impl<A: Display> Display for FunctionalDependency<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {ARROW} {}", self.lhs, self.rhs)
    }
}
