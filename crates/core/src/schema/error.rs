use core::fmt::{Debug, Display, Formatter, Result};

use derive_more::From;

use crate::attribute::{AttributeSet, InsufficientElements};

/// The kind of value an operation expected but did not get.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArgumentKind {
    /// A 1-based dependency position; `0` is never valid.
    PositiveIndex,
    /// A dependency side must name at least one attribute.
    NonEmptyAttributeSet,
}

impl Display for ArgumentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::PositiveIndex => f.write_str("a positive integer"),
            Self::NonEmptyAttributeSet => f.write_str("a non-empty attribute set"),
        }
    }
}

/// Error returned by schema mutations and queries.
///
/// Validation always happens before any mutation, so a schema is unchanged
/// when an operation returns one of these.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "A: ::serde::Deserialize<'de> + Ord"))
)]
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum Error<A> {
    /// An argument of the wrong category.
    InvalidArgumentType(ArgumentKind),
    /// Some of the supplied attributes are not part of the schema.
    NotSubsetOfSchema { unknown: AttributeSet<A> },
    /// Left- and right-hand side of a dependency overlap.
    TrivialDependency { shared: AttributeSet<A> },
    /// A 1-based dependency position past the end of the list.
    IndexOutOfRange { index: usize, count: usize },
    /// A combination larger than the set it is drawn from.
    ///
    /// Schema operations never return this. It lets callers combine
    /// [`AttributeSet::combinations`] with schema queries under one error
    /// type using `?`.
    #[from]
    InsufficientElements(InsufficientElements),
}

impl<A: Display> Display for Error<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidArgumentType(kind) => write!(f, "expected {kind}"),
            Self::NotSubsetOfSchema { unknown } => {
                write!(f, "attributes {unknown} are not part of the schema")
            }
            Self::TrivialDependency { shared } => {
                write!(f, "dependency is trivial: {shared} appear on both sides")
            }
            Self::IndexOutOfRange { index, count } => {
                write!(f, "dependency {index} does not exist, there are only {count}")
            }
            Self::InsufficientElements(inner) => Display::fmt(inner, f),
        }
    }
}

impl<A: Debug + Display> core::error::Error for Error<A> {}
