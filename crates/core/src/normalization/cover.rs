//! Rewrites of a dependency list that keep its meaning: right-hand side
//! splitting and merging, minimal covers, and projection onto a subset of
//! the attributes.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::attribute::{Attribute, AttributeSet};
use crate::schema::{Error, FunctionalDependency, Schema};

impl<A: Attribute> Schema<A> {
    /// Replaces every `X → A1..An` by `X → A1`, .., `X → An`, in place.
    pub fn expand_rhs(&mut self) {
        let dependencies = core::mem::take(&mut self.dependencies);
        self.dependencies = dependencies
            .into_iter()
            .flat_map(|FunctionalDependency { lhs, rhs }| {
                rhs.into_iter().map(move |attribute| {
                    FunctionalDependency::new(lhs.clone(), AttributeSet::singleton(attribute))
                })
            })
            .collect();
    }

    /// A copy whose dependencies sharing a left-hand side are merged into
    /// one, ordered by first appearance of each left-hand side.
    #[must_use]
    pub fn union_by_lhs(&self) -> Self {
        let mut merged: Vec<FunctionalDependency<A>> = Vec::new();
        let mut slots: HashMap<&AttributeSet<A>, usize> = HashMap::new();
        for dependency in &self.dependencies {
            if let Some(&slot) = slots.get(&dependency.lhs) {
                merged[slot].rhs.append(&dependency.rhs);
            } else {
                slots.insert(&dependency.lhs, merged.len());
                merged.push(dependency.clone());
            }
        }
        Self::from_parts(self.attributes.clone(), merged)
    }

    /// Returns `true` if the dependency at 1-based `position` follows from
    /// the other dependencies.
    ///
    /// # Errors
    ///
    /// Position errors as in [`dependency`](Self::dependency).
    pub fn is_transitive(&self, position: usize) -> Result<bool, Error<A>> {
        let index = self.check_position(position)?;
        Ok(self.is_redundant_at(index))
    }

    fn is_redundant_at(&self, index: usize) -> bool {
        let dependency = &self.dependencies[index];
        dependency
            .rhs
            .is_subset(&self.closure_skipping(&dependency.lhs, Some(index)))
    }

    /// An equivalent dependency list with single-attribute right-hand sides,
    /// no extraneous left-hand side attributes and no redundant dependencies.
    ///
    /// Dependencies are reduced front to back in insertion order, which picks
    /// one cover when several exist. With `union`, dependencies sharing a
    /// left-hand side are merged at the end.
    #[must_use]
    pub fn minimal_cover(&self, union: bool) -> Self {
        let mut working = self.clone();
        working.expand_rhs();
        tracing::debug!(dependencies = working.dependencies.len(), "expanded right-hand sides");

        let reduced = working
            .dependencies
            .into_iter()
            .map(|dependency| {
                let lhs = self.reduce_lhs(&dependency.lhs);
                FunctionalDependency::new(lhs, dependency.rhs)
            })
            .collect();
        let mut cover = Self::from_parts(self.attributes.clone(), reduced);

        let mut index = 0;
        while index < cover.dependencies.len() {
            if cover.is_redundant_at(index) {
                cover.dependencies.remove(index);
            } else {
                index += 1;
            }
        }
        tracing::debug!(dependencies = cover.dependencies.len(), union, "minimal cover");

        if union {
            cover.union_by_lhs()
        } else {
            cover
        }
    }

    /// Drops left-hand side attributes implied by the remaining ones, in
    /// canonical order, never emptying the set.
    ///
    /// One pass suffices: an attribute kept once stays non-removable after
    /// later removals since closures only shrink.
    fn reduce_lhs(&self, lhs: &AttributeSet<A>) -> AttributeSet<A> {
        let mut reduced = lhs.clone();
        for attribute in lhs {
            if reduced.len() <= 1 {
                break;
            }
            let mut without = reduced.clone();
            without.remove(attribute);
            if reduced.is_subset(&self.closure_of(&without)) {
                reduced = without;
            }
        }
        reduced
    }

    /// A schema over `attributes` holding the non-trivial dependencies of
    /// `self` that only mention those attributes.
    ///
    /// Candidate left-hand sides are the non-empty proper subsets of
    /// `attributes` with at most one more attribute than the largest existing
    /// left-hand side. Dependencies that need a wider left-hand side are not
    /// found.
    ///
    /// # Errors
    ///
    /// [`Error::NotSubsetOfSchema`] if `attributes` is not drawn from the
    /// schema.
    pub fn project(&self, attributes: &AttributeSet<A>) -> Result<Self, Error<A>> {
        self.check_subset(attributes)?;
        Ok(self.project_unchecked(attributes))
    }

    pub(crate) fn project_unchecked(&self, attributes: &AttributeSet<A>) -> Self {
        let widest = self
            .dependencies
            .iter()
            .map(|dependency| dependency.lhs.len())
            .max()
            .unwrap_or(0);
        let mut projected = Self::from_parts(attributes.clone(), Vec::new());
        for lhs in attributes.power_set(Some(widest + 1)) {
            if lhs.is_empty() || lhs.len() == attributes.len() {
                continue;
            }
            let rhs = self
                .closure_of(&lhs)
                .intersect(attributes)
                .difference(&lhs);
            if !rhs.is_empty() {
                projected.push_dependency(FunctionalDependency::new(lhs, rhs));
            }
        }
        tracing::debug!(
            attributes = attributes.len(),
            dependencies = projected.dependencies.len(),
            "projected dependencies"
        );
        projected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(attributes: &[&'static str], fds: &[(&[&'static str], &[&'static str])]) -> Schema<&'static str> {
        let mut schema = Schema::new(attributes.iter().copied());
        for (lhs, rhs) in fds {
            schema
                .add_dependency(lhs.iter().copied(), rhs.iter().copied())
                .unwrap();
        }
        schema
    }

    fn pairs(schema: &Schema<&'static str>) -> Vec<(Vec<&'static str>, Vec<&'static str>)> {
        schema
            .dependencies()
            .iter()
            .map(|fd| (fd.lhs().to_vec(), fd.rhs().to_vec()))
            .collect()
    }

    #[test]
    fn test_expand_rhs() {
        let mut s = schema(&["A", "B", "C", "D"], &[(&["A"], &["C", "B"]), (&["C"], &["D"])]);
        s.expand_rhs();
        assert_eq!(
            pairs(&s),
            vec![
                (vec!["A"], vec!["B"]),
                (vec!["A"], vec!["C"]),
                (vec!["C"], vec!["D"]),
            ]
        );
    }

    #[test]
    fn test_union_by_lhs() {
        let s = schema(
            &["A", "B", "C", "D"],
            &[(&["A"], &["B"]), (&["C"], &["D"]), (&["A"], &["C"])],
        );
        assert_eq!(
            pairs(&s.union_by_lhs()),
            vec![(vec!["A"], vec!["B", "C"]), (vec!["C"], vec!["D"])]
        );
    }

    #[test]
    fn test_is_transitive() {
        let s = schema(
            &["A", "B", "C"],
            &[(&["A"], &["B"]), (&["B"], &["C"]), (&["A"], &["C"])],
        );
        assert!(!s.is_transitive(1).unwrap());
        assert!(!s.is_transitive(2).unwrap());
        assert!(s.is_transitive(3).unwrap());
        assert!(s.is_transitive(4).is_err());
    }

    #[test]
    fn test_minimal_cover_extraneous_lhs() {
        let s = schema(&["A", "B", "C"], &[(&["A", "B"], &["C"]), (&["A"], &["B"])]);
        assert_eq!(
            pairs(&s.minimal_cover(false)),
            vec![(vec!["A"], vec!["C"]), (vec!["A"], vec!["B"])]
        );
        assert_eq!(
            pairs(&s.minimal_cover(true)),
            vec![(vec!["A"], vec!["B", "C"])]
        );
    }

    #[test]
    fn test_minimal_cover_drops_redundant() {
        let s = schema(
            &["A", "B", "C"],
            &[(&["A"], &["B", "C"]), (&["B"], &["C"])],
        );
        assert_eq!(
            pairs(&s.minimal_cover(false)),
            vec![(vec!["A"], vec!["B"]), (vec!["B"], vec!["C"])]
        );
    }

    #[test]
    fn test_minimal_cover_drops_duplicates() {
        let s = schema(&["A", "B", "C"], &[(&["A"], &["B"]), (&["A"], &["B", "C"])]);
        assert_eq!(
            pairs(&s.minimal_cover(false)),
            vec![(vec!["A"], vec!["B"]), (vec!["A"], vec!["C"])]
        );
    }

    #[test]
    fn test_minimal_cover_leaves_schema_untouched() {
        let s = schema(&["A", "B", "C"], &[(&["A"], &["B", "C"])]);
        let before = s.clone();
        let _ = s.minimal_cover(true);
        assert_eq!(s, before);
    }

    #[test]
    fn test_project() {
        let s = schema(
            &["A", "B", "C", "D"],
            &[(&["A"], &["B"]), (&["B"], &["C"]), (&["C"], &["D"])],
        );
        let projected = s.project(&AttributeSet::from(["A", "C", "D"])).unwrap();
        assert_eq!(projected.attribute_list(), vec!["A", "C", "D"]);
        assert_eq!(
            pairs(&projected),
            vec![
                (vec!["A"], vec!["C", "D"]),
                (vec!["C"], vec!["D"]),
                (vec!["A", "C"], vec!["D"]),
                (vec!["A", "D"], vec!["C"]),
            ]
        );
    }

    #[test]
    fn test_project_unknown_attributes() {
        let s = schema(&["A", "B"], &[(&["A"], &["B"])]);
        assert!(matches!(
            s.project(&AttributeSet::from(["A", "Q"])),
            Err(Error::NotSubsetOfSchema { .. })
        ));
    }
}
