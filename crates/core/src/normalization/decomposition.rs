use alloc::vec::Vec;
use core::fmt::{Display, Formatter, Result};

use super::normal_form::NormalForm;
use crate::attribute::Attribute;
use crate::schema::{FunctionalDependency, Schema};

/// Outcome of a normalization request.
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decomposition<A> {
    /// The relation already satisfies the requested form and is left alone.
    AlreadyNormalized(NormalForm),
    /// The relation was split into `relations`, each in the `target` form.
    ///
    /// `lost` lists the dependencies of the original minimal cover that no
    /// longer follow from the pieces. It is always empty for 3NF synthesis.
    Decomposed {
        target: NormalForm,
        relations: Vec<Schema<A>>,
        lost: Vec<FunctionalDependency<A>>,
    },
}

impl<A> Decomposition<A> {
    /// The resulting relations; empty when nothing was decomposed.
    #[must_use]
    pub fn relations(&self) -> &[Schema<A>] {
        match self {
            Self::AlreadyNormalized(_) => &[],
            Self::Decomposed { relations, .. } => relations,
        }
    }

    #[must_use]
    pub fn lost_dependencies(&self) -> &[FunctionalDependency<A>] {
        match self {
            Self::AlreadyNormalized(_) => &[],
            Self::Decomposed { lost, .. } => lost,
        }
    }

    /// Returns `true` if every original dependency can still be derived.
    #[must_use]
    pub fn is_dependency_preserving(&self) -> bool {
        self.lost_dependencies().is_empty()
    }

    #[must_use]
    pub const fn is_decomposed(&self) -> bool {
        matches!(self, Self::Decomposed { .. })
    }
}

/// `Relation i : <schema>` blocks separated by blank lines. A BCNF
/// decomposition also lists the lost dependencies, or `None`.
impl<A> Display for Decomposition<A>
where
    A: Attribute + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::AlreadyNormalized(normal_form) => {
                write!(f, "Relation is already in {normal_form}.")
            }
            Self::Decomposed {
                target,
                relations,
                lost,
            } => {
                for (index, relation) in relations.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "Relation {} : {relation}", index + 1)?;
                }
                if *target == NormalForm::BoyceCodd {
                    f.write_str("\nFunctional Dependencies lost: \n")?;
                    if lost.is_empty() {
                        f.write_str("None\n")?;
                    }
                    for (index, dependency) in lost.iter().enumerate() {
                        writeln!(f, "{}. {dependency}", index + 1)?;
                    }
                }
                Ok(())
            }
        }
    }
}
