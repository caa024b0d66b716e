use alloc::vec::Vec;

use super::{Error, FunctionalDependency, Schema};
use crate::attribute::{Attribute, AttributeSet};

/// Fixed-point closure of `start` under `dependencies`.
///
/// Each pass applies every pending dependency whose left-hand side is
/// already covered and drops it from the pending list; the loop ends after a
/// pass that applies nothing.
pub(crate) fn attribute_closure<'a, A, I>(start: &AttributeSet<A>, dependencies: I) -> AttributeSet<A>
where
    A: Attribute + 'a,
    I: IntoIterator<Item = &'a FunctionalDependency<A>>,
{
    let mut closure = start.clone();
    let mut pending: Vec<&FunctionalDependency<A>> = dependencies.into_iter().collect();
    loop {
        let before = pending.len();
        pending.retain(|dependency| {
            if dependency.lhs.is_subset(&closure) {
                closure.append(&dependency.rhs);
                false
            } else {
                true
            }
        });
        if pending.len() == before {
            break;
        }
    }
    closure
}

impl<A: Attribute> Schema<A> {
    /// Every attribute functionally determined by `attributes`.
    ///
    /// With `ignoring = Some(i)` the dependency at 1-based position `i` is
    /// left out, which is how [`is_transitive`](Self::is_transitive) asks
    /// whether a dependency follows from the others.
    ///
    /// # Errors
    ///
    /// [`Error::NotSubsetOfSchema`] if `attributes` is not drawn from the
    /// schema; position errors as in [`dependency`](Self::dependency) for
    /// `ignoring`.
    pub fn closure(
        &self,
        attributes: &AttributeSet<A>,
        ignoring: Option<usize>,
    ) -> Result<AttributeSet<A>, Error<A>> {
        self.check_subset(attributes)?;
        let skip = ignoring.map(|position| self.check_position(position)).transpose()?;
        Ok(self.closure_skipping(attributes, skip))
    }

    /// Closure over all dependencies without argument checks.
    pub(crate) fn closure_of(&self, attributes: &AttributeSet<A>) -> AttributeSet<A> {
        attribute_closure(attributes, &self.dependencies)
    }

    /// Closure leaving out the dependency at 0-based `skip`.
    pub(crate) fn closure_skipping(
        &self,
        attributes: &AttributeSet<A>,
        skip: Option<usize>,
    ) -> AttributeSet<A> {
        let closure = attribute_closure(
            attributes,
            self.dependencies
                .iter()
                .enumerate()
                .filter(|(index, _)| Some(*index) != skip)
                .map(|(_, dependency)| dependency),
        );
        tracing::trace!(?attributes, ?closure, ?skip, "closure");
        closure
    }

    /// Returns `true` if `attributes` determines the whole schema.
    ///
    /// # Errors
    ///
    /// [`Error::NotSubsetOfSchema`] if `attributes` is not drawn from the
    /// schema.
    pub fn is_superkey(&self, attributes: &AttributeSet<A>) -> Result<bool, Error<A>> {
        self.check_subset(attributes)?;
        Ok(self.is_superkey_unchecked(attributes))
    }

    pub(crate) fn is_superkey_unchecked(&self, attributes: &AttributeSet<A>) -> bool {
        self.closure_of(attributes) == self.attributes
    }
}
