//! 3NF synthesis from a minimal cover.

use alloc::vec::Vec;

use super::decomposition::Decomposition;
use super::normal_form::NormalForm;
use crate::attribute::Attribute;
use crate::schema::Schema;

impl<A: Attribute> Schema<A> {
    /// Lossless, dependency-preserving decomposition into 3NF.
    ///
    /// One relation is built per dependency of the merged minimal cover.
    /// A relation whose attributes are contained in another surviving
    /// relation is folded into it, and a relation over the first candidate
    /// key is appended when no piece holds a whole key.
    #[must_use]
    pub fn three_nf_synthesis(&self) -> Decomposition<A> {
        if self.is_third_normal_form() {
            return Decomposition::AlreadyNormalized(NormalForm::Third);
        }

        let cover = self.minimal_cover(true);
        let mut pieces: Vec<Option<Self>> = cover
            .dependencies
            .iter()
            .map(|dependency| {
                let mut piece = Self::from_parts(dependency.attributes(), Vec::new());
                piece.push_dependency(dependency.clone());
                Some(piece)
            })
            .collect();

        for i in 0..pieces.len() {
            for j in 0..pieces.len() {
                if i == j {
                    continue;
                }
                let absorbed = match (&pieces[i], &pieces[j]) {
                    (Some(host), Some(guest)) => guest.attributes.is_subset(&host.attributes),
                    _ => false,
                };
                if !absorbed {
                    continue;
                }
                if let Some(guest) = pieces[j].take() {
                    if let Some(host) = pieces[i].as_mut() {
                        for dependency in guest.dependencies {
                            if !host.contains_dependency(&dependency) {
                                host.push_dependency(dependency);
                            }
                        }
                    }
                }
            }
        }
        let mut relations: Vec<Self> = pieces.into_iter().flatten().collect();

        let keys = self.candidate_keys();
        let holds_key = keys.iter().any(|key| {
            relations
                .iter()
                .any(|relation| key.is_subset(&relation.attributes))
        });
        if !holds_key {
            if let Some(key) = keys.into_iter().next() {
                relations.push(Self::from_parts(key, Vec::new()));
            }
        }
        tracing::debug!(relations = relations.len(), "3NF synthesis");

        Decomposition::Decomposed {
            target: NormalForm::Third,
            relations,
            lost: Vec::new(),
        }
    }
}
