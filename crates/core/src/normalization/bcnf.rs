//! Top-down BCNF decomposition.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use super::decomposition::Decomposition;
use super::normal_form::NormalForm;
use crate::attribute::Attribute;
use crate::schema::{FunctionalDependency, Schema};

impl<A: Attribute> Schema<A> {
    /// Lossless decomposition into BCNF.
    ///
    /// Relations are split on their first non-superkey determinant `X` into
    /// the projection onto the closure of `X` and the projection onto the
    /// remaining attributes plus `X`, until every piece is in BCNF. Pieces
    /// are reported in the order they reach BCNF, each reduced to its merged
    /// minimal cover. Dependencies of the original minimal cover that the
    /// pieces no longer imply are reported as lost.
    #[must_use]
    pub fn bcnf_decomposition(&self) -> Decomposition<A> {
        if self.is_boyce_codd_normal_form() {
            return Decomposition::AlreadyNormalized(NormalForm::BoyceCodd);
        }

        let mut leaves: Vec<Self> = Vec::new();
        let mut worklist: VecDeque<Self> = VecDeque::from([self.clone()]);
        while let Some(relation) = worklist.pop_front() {
            let Some((left, right)) = relation.split_on_first_violation() else {
                leaves.push(relation);
                continue;
            };
            for piece in [left, right] {
                if piece.is_boyce_codd_normal_form() {
                    leaves.push(piece);
                } else {
                    worklist.push_back(piece);
                }
            }
        }
        let relations: Vec<Self> = leaves
            .iter()
            .map(|leaf| leaf.minimal_cover(true))
            .collect();

        let original = self.minimal_cover(true);
        let mut joined = self.without_dependencies();
        for dependency in relations.iter().flat_map(|relation| &relation.dependencies) {
            joined.push_dependency(dependency.clone());
        }
        let lost: Vec<FunctionalDependency<A>> = original
            .dependencies
            .iter()
            .filter_map(|dependency| {
                let missing = original
                    .closure_of(&dependency.lhs)
                    .difference(&joined.closure_of(&dependency.lhs));
                (!missing.is_empty())
                    .then(|| FunctionalDependency::new(dependency.lhs.clone(), missing))
            })
            .collect();
        tracing::debug!(
            relations = relations.len(),
            lost = lost.len(),
            "BCNF decomposition"
        );

        Decomposition::Decomposed {
            target: NormalForm::BoyceCodd,
            relations,
            lost,
        }
    }

    /// Splits on the first dependency whose left-hand side is not a
    /// superkey, or returns `None` if there is none.
    fn split_on_first_violation(&self) -> Option<(Self, Self)> {
        let lhs = &self
            .dependencies
            .iter()
            .find(|dependency| !self.is_superkey_unchecked(&dependency.lhs))?
            .lhs;
        let left = self.project_unchecked(&self.closure_of(lhs));
        let right = self.project_unchecked(&self.attributes.difference(&left.attributes).union(lhs));
        tracing::debug!(
            ?lhs,
            left = left.attributes.len(),
            right = right.attributes.len(),
            "split relation"
        );
        Some((left, right))
    }
}
