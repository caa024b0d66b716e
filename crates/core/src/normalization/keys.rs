//! Candidate keys and prime attributes.

use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::attribute::{Attribute, AttributeSet};
use crate::schema::{Error, Schema};

/// Largest number of attributes added to a seed when searching for a key.
///
/// Relations whose keys need a wider extension are not fully explored.
pub const MAX_KEY_EXTENSION: usize = 3;

/// Union of all `keys`.
pub(crate) fn prime_attributes_of<A: Attribute>(keys: &[AttributeSet<A>]) -> AttributeSet<A> {
    keys.iter().fold(AttributeSet::new(), |mut prime, key| {
        prime.append(key);
        prime
    })
}

impl<A: Attribute> Schema<A> {
    /// Candidate keys, ordered by where each was last discovered.
    ///
    /// Attributes that never appear on a right-hand side belong to every key
    /// and form the seed. For each dependency the seed is widened with its
    /// left-hand side and, if that does not yet determine everything, with
    /// up to [`MAX_KEY_EXTENSION`] of the attributes still missing from its
    /// closure. Attributes that complete a key on their own are not reused
    /// in wider extensions. Finally any key that strictly contains another
    /// is discarded.
    #[must_use]
    pub fn candidate_keys(&self) -> Vec<AttributeSet<A>> {
        let seed = self
            .dependencies
            .iter()
            .fold(self.attributes.clone(), |seed, dependency| {
                seed.difference(&dependency.rhs)
            });
        if self.dependencies.is_empty() {
            return vec![seed];
        }

        let mut found: Vec<AttributeSet<A>> = Vec::new();
        for dependency in &self.dependencies {
            let base = seed.union(&dependency.lhs);
            if self.is_superkey_unchecked(&base) {
                found.push(base);
                continue;
            }
            let mut missing = self.attributes.difference(&self.closure_of(&base));
            if missing.len() == 1 {
                found.push(base.union(&missing));
                continue;
            }
            let mut sufficient = AttributeSet::new();
            for size in 1..=MAX_KEY_EXTENSION {
                for extension in missing.combinations(size).into_iter().flatten() {
                    let candidate = base.union(&extension);
                    if self.is_superkey_unchecked(&candidate) {
                        found.push(candidate);
                        if size == 1 {
                            sufficient.append(&extension);
                        }
                    }
                }
                missing = missing.difference(&sufficient);
            }
        }

        // A key found more than once is placed at its last occurrence.
        let mut seen: HashSet<AttributeSet<A>> = HashSet::new();
        let mut keys: Vec<AttributeSet<A>> = found
            .iter()
            .rev()
            .filter(|key| !found.iter().any(|other| other.is_proper_subset(key)))
            .filter(|key| seen.insert((*key).clone()))
            .cloned()
            .collect();
        keys.reverse();
        tracing::debug!(candidates = found.len(), keys = keys.len(), "candidate keys");
        keys
    }

    /// Union of all candidate keys.
    #[must_use]
    pub fn prime_attributes(&self) -> AttributeSet<A> {
        prime_attributes_of(&self.candidate_keys())
    }

    /// Returns `true` if `attribute` belongs to some candidate key.
    ///
    /// # Errors
    ///
    /// [`Error::NotSubsetOfSchema`] if `attribute` is not in the schema.
    pub fn is_prime(&self, attribute: &A) -> Result<bool, Error<A>> {
        self.check_subset(&AttributeSet::singleton(attribute.clone()))?;
        Ok(self.prime_attributes().contains(attribute))
    }

    /// The first candidate key that strictly contains `attributes`, if any.
    ///
    /// # Errors
    ///
    /// [`Error::NotSubsetOfSchema`] if `attributes` is not drawn from the
    /// schema.
    pub fn proper_key_subset(
        &self,
        attributes: &AttributeSet<A>,
    ) -> Result<Option<AttributeSet<A>>, Error<A>> {
        self.check_subset(attributes)?;
        Ok(self
            .candidate_keys()
            .into_iter()
            .find(|key| attributes.is_proper_subset(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(schema: &Schema<&'static str>) -> Vec<Vec<&'static str>> {
        schema.candidate_keys().iter().map(AttributeSet::to_vec).collect()
    }

    #[test]
    fn test_no_dependencies() {
        let schema = Schema::new(["A", "B"]);
        assert_eq!(keys(&schema), vec![vec!["A", "B"]]);
    }

    #[test]
    fn test_single_key() {
        let mut schema = Schema::new(["A", "B", "C"]);
        schema.add_dependency(["A"], ["B"]).unwrap();
        schema.add_dependency(["B"], ["C"]).unwrap();
        assert_eq!(keys(&schema), vec![vec!["A"]]);
    }

    #[test]
    fn test_overlapping_keys() {
        // AB -> C, C -> B: keys AB and AC.
        let mut schema = Schema::new(["A", "B", "C"]);
        schema.add_dependency(["A", "B"], ["C"]).unwrap();
        schema.add_dependency(["C"], ["B"]).unwrap();
        assert_eq!(keys(&schema), vec![vec!["A", "B"], vec!["A", "C"]]);
        assert!(schema.is_prime(&"C").unwrap());
        assert!(schema.is_prime(&"A").unwrap());
    }

    #[test]
    fn test_cyclic_keys() {
        // A -> B -> C -> A: every single attribute is a key.
        let mut schema = Schema::new(["A", "B", "C"]);
        schema.add_dependency(["A"], ["B"]).unwrap();
        schema.add_dependency(["B"], ["C"]).unwrap();
        schema.add_dependency(["C"], ["A"]).unwrap();
        assert_eq!(keys(&schema), vec![vec!["A"], vec!["B"], vec!["C"]]);
    }

    #[test]
    fn test_key_needs_extension() {
        // B -> C with A and D untouched: the seed AD plus B is the only key.
        let mut schema = Schema::new(["A", "B", "C", "D"]);
        schema.add_dependency(["B"], ["C"]).unwrap();
        assert_eq!(keys(&schema), vec![vec!["A", "B", "D"]]);
    }

    #[test]
    fn test_extension_search() {
        // C -> A, A -> C, B -> D, D -> B: keys are one of {A, C} with one of {B, D}.
        let mut schema = Schema::new(["A", "B", "C", "D"]);
        schema.add_dependency(["A"], ["C"]).unwrap();
        schema.add_dependency(["C"], ["A"]).unwrap();
        schema.add_dependency(["B"], ["D"]).unwrap();
        schema.add_dependency(["D"], ["B"]).unwrap();
        assert_eq!(
            keys(&schema),
            vec![
                vec!["A", "B"],
                vec!["B", "C"],
                vec!["A", "D"],
                vec!["C", "D"],
            ]
        );
    }

    #[test]
    fn test_repeated_key_takes_last_place() {
        // Found as AE, AD, AE, AD, AE: AD is last seen before AE is.
        let mut schema = Schema::new(["A", "B", "C", "D", "E"]);
        schema.add_dependency(["E"], ["D"]).unwrap();
        schema.add_dependency(["A"], ["B", "C"]).unwrap();
        schema.add_dependency(["D"], ["E"]).unwrap();
        schema.add_dependency(["A"], ["B"]).unwrap();
        assert_eq!(keys(&schema), vec![vec!["A", "D"], vec!["A", "E"]]);
        assert_eq!(
            schema.proper_key_subset(&AttributeSet::from(["A"])).unwrap(),
            Some(AttributeSet::from(["A", "D"]))
        );
    }

    #[test]
    fn test_is_prime_unknown_attribute() {
        let schema = Schema::new(["A"]);
        assert!(matches!(
            schema.is_prime(&"Z"),
            Err(Error::NotSubsetOfSchema { .. })
        ));
    }

    #[test]
    fn test_proper_key_subset() {
        let mut schema = Schema::new(["A", "B", "C"]);
        schema.add_dependency(["A", "B"], ["C"]).unwrap();
        assert_eq!(
            schema.proper_key_subset(&AttributeSet::from(["A"])).unwrap(),
            Some(AttributeSet::from(["A", "B"]))
        );
        assert_eq!(
            schema
                .proper_key_subset(&AttributeSet::from(["A", "B"]))
                .unwrap(),
            None
        );
    }
}
