//! Relation schemas: an attribute set plus an ordered list of functional
//! dependencies.
//!
//! Dependencies are addressed by 1-based position, matching how they are
//! numbered when rendered. Every mutation validates its arguments first and
//! leaves the schema untouched on error.

use alloc::vec::Vec;

use crate::attribute::{Attribute, AttributeSet};

pub mod closure;
pub mod dependency;
pub mod display;
pub mod error;

pub use dependency::{FunctionalDependency, ARROW};
pub use display::format_schema;
pub use error::{ArgumentKind, Error};

/// A relation schema `R(attributes)` with its functional dependencies.
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema<A> {
    pub(crate) attributes: AttributeSet<A>,
    pub(crate) dependencies: Vec<FunctionalDependency<A>>,
}

impl<A: Attribute> Default for Schema<A> {
    fn default() -> Self {
        Self::new([])
    }
}

impl<A: Attribute> Schema<A> {
    /// Builds a schema without dependencies. Labels may repeat and come in
    /// any order.
    pub fn new<I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        Self {
            attributes: attributes.into_iter().collect(),
            dependencies: Vec::new(),
        }
    }

    /// A schema over `attributes` carrying `dependencies` as given.
    ///
    /// Callers guarantee every dependency is valid for `attributes`.
    pub(crate) const fn from_parts(
        attributes: AttributeSet<A>,
        dependencies: Vec<FunctionalDependency<A>>,
    ) -> Self {
        Self {
            attributes,
            dependencies,
        }
    }

    #[must_use]
    pub const fn attributes(&self) -> &AttributeSet<A> {
        &self.attributes
    }

    /// The attributes in canonical order.
    #[must_use]
    pub fn attribute_list(&self) -> Vec<A> {
        self.attributes.to_vec()
    }

    /// Extends the attribute set. Existing dependencies stay valid.
    pub fn add_attributes(&mut self, attributes: &AttributeSet<A>) {
        tracing::debug!(added = attributes.len(), "adding attributes");
        self.attributes.append(attributes);
    }

    #[must_use]
    pub fn dependencies(&self) -> &[FunctionalDependency<A>] {
        &self.dependencies
    }

    #[must_use]
    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }

    /// The dependency at 1-based `position`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgumentType`] for position `0`,
    /// [`Error::IndexOutOfRange`] past the last dependency.
    pub fn dependency(&self, position: usize) -> Result<&FunctionalDependency<A>, Error<A>> {
        let index = self.check_position(position)?;
        Ok(&self.dependencies[index])
    }

    /// All attributes mentioned by the dependency at 1-based `position`.
    ///
    /// # Errors
    ///
    /// Same as [`dependency`](Self::dependency).
    pub fn dependency_attributes(&self, position: usize) -> Result<AttributeSet<A>, Error<A>> {
        self.dependency(position).map(FunctionalDependency::attributes)
    }

    /// Returns `true` if an identical dependency is already present.
    #[must_use]
    pub fn contains_dependency(&self, dependency: &FunctionalDependency<A>) -> bool {
        self.dependencies.contains(dependency)
    }

    /// Appends the non-trivial dependency `lhs → rhs`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgumentType`] if either side is empty.
    /// - [`Error::NotSubsetOfSchema`] if either side names an unknown attribute.
    /// - [`Error::TrivialDependency`] if the sides overlap.
    pub fn add_dependency<L, R>(&mut self, lhs: L, rhs: R) -> Result<(), Error<A>>
    where
        L: IntoIterator<Item = A>,
        R: IntoIterator<Item = A>,
    {
        let lhs: AttributeSet<A> = lhs.into_iter().collect();
        let rhs: AttributeSet<A> = rhs.into_iter().collect();
        if lhs.is_empty() || rhs.is_empty() {
            return Err(Error::InvalidArgumentType(ArgumentKind::NonEmptyAttributeSet));
        }
        self.check_subset(&lhs)?;
        self.check_subset(&rhs)?;
        let shared = lhs.intersect(&rhs);
        if !shared.is_empty() {
            return Err(Error::TrivialDependency { shared });
        }
        self.dependencies.push(FunctionalDependency::new(lhs, rhs));
        Ok(())
    }

    /// Copies the dependency at 1-based `position` of `other` into `self`.
    ///
    /// # Errors
    ///
    /// Position errors refer to `other`; the copied dependency is then
    /// validated against `self` as in [`add_dependency`](Self::add_dependency).
    pub fn copy_dependency(&mut self, other: &Self, position: usize) -> Result<(), Error<A>> {
        let dependency = other.dependency(position)?;
        self.add_dependency(dependency.lhs.iter().cloned(), dependency.rhs.iter().cloned())
    }

    /// Removes and returns the dependency at 1-based `position`.
    ///
    /// # Errors
    ///
    /// Same as [`dependency`](Self::dependency).
    pub fn remove_dependency(
        &mut self,
        position: usize,
    ) -> Result<FunctionalDependency<A>, Error<A>> {
        let index = self.check_position(position)?;
        Ok(self.dependencies.remove(index))
    }

    /// Drops every dependency.
    pub fn reset_dependencies(&mut self) {
        self.dependencies.clear();
    }

    /// Same attributes, no dependencies.
    #[must_use]
    pub fn without_dependencies(&self) -> Self {
        Self::from_parts(self.attributes.clone(), Vec::new())
    }

    /// Appends a dependency that is already known to be valid for `self`.
    pub(crate) fn push_dependency(&mut self, dependency: FunctionalDependency<A>) {
        debug_assert!(dependency.attributes().is_subset(&self.attributes));
        debug_assert!(dependency.lhs.is_disjoint(&dependency.rhs));
        self.dependencies.push(dependency);
    }

    /// Maps a 1-based position to an index into `dependencies`.
    pub(crate) fn check_position(&self, position: usize) -> Result<usize, Error<A>> {
        if position == 0 {
            return Err(Error::InvalidArgumentType(ArgumentKind::PositiveIndex));
        }
        if position > self.dependencies.len() {
            return Err(Error::IndexOutOfRange {
                index: position,
                count: self.dependencies.len(),
            });
        }
        Ok(position - 1)
    }

    pub(crate) fn check_subset(&self, attributes: &AttributeSet<A>) -> Result<(), Error<A>> {
        let unknown = attributes.difference(&self.attributes);
        if unknown.is_empty() {
            Ok(())
        } else {
            Err(Error::NotSubsetOfSchema { unknown })
        }
    }
}
