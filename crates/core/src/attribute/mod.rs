//! Sets of attribute labels.
//!
//! An [`AttributeSet`] is an ordered set: iteration always follows the
//! attribute type's `Ord`, which is the canonical order used both for
//! rendering and for enumerating combinations.

use alloc::collections::btree_set::{self, BTreeSet};
use alloc::vec::Vec;
use core::fmt::{Debug, Display, Formatter};
use core::hash::Hash;

pub mod combination;
pub mod error;

pub use combination::Combinations;
pub use error::InsufficientElements;

/// An atomic attribute label.
///
/// Blanket-implemented for every type that can be ordered, hashed, cloned
/// and debug-printed, so `&str`, `String` and small integer ids all work.
pub trait Attribute: Ord + Hash + Clone + Debug {}

impl<T> Attribute for T where T: Ord + Hash + Clone + Debug {}

/// A finite set of distinct attributes.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(transparent, bound(deserialize = "A: ::serde::Deserialize<'de> + Ord"))
)]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttributeSet<A> {
    elements: BTreeSet<A>,
}

impl<A> Default for AttributeSet<A> {
    fn default() -> Self {
        Self {
            elements: BTreeSet::new(),
        }
    }
}

impl<A: Attribute> AttributeSet<A> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: BTreeSet::new(),
        }
    }

    /// Set with a single element.
    #[must_use]
    pub fn singleton(attribute: A) -> Self {
        let mut set = Self::new();
        set.insert(attribute);
        set
    }

    /// Cardinality.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn contains(&self, attribute: &A) -> bool {
        self.elements.contains(attribute)
    }

    /// Iterates in canonical order.
    pub fn iter(&self) -> btree_set::Iter<'_, A> {
        self.elements.iter()
    }

    /// Adds an attribute, returning `false` if it was already present.
    pub fn insert(&mut self, attribute: A) -> bool {
        self.elements.insert(attribute)
    }

    /// Removes an attribute, returning `false` if it was absent.
    pub fn remove(&mut self, attribute: &A) -> bool {
        self.elements.remove(attribute)
    }

    /// Unions `other` into `self` in place.
    pub fn append(&mut self, other: &Self) {
        self.elements.extend(other.elements.iter().cloned());
    }

    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            elements: self.elements.union(&other.elements).cloned().collect(),
        }
    }

    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            elements: self
                .elements
                .intersection(&other.elements)
                .cloned()
                .collect(),
        }
    }

    /// `self − other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            elements: self.elements.difference(&other.elements).cloned().collect(),
        }
    }

    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.elements.is_subset(&other.elements)
    }

    #[must_use]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.elements.is_disjoint(&other.elements)
    }

    /// The elements as a list in canonical order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<A> {
        self.elements.iter().cloned().collect()
    }

    /// All `k`-element subsets, in lexicographic order over the canonical
    /// element order.
    ///
    /// # Errors
    ///
    /// Returns [`InsufficientElements`] if `k` exceeds the cardinality.
    pub fn combinations(&self, k: usize) -> Result<Combinations<A>, InsufficientElements> {
        if k > self.len() {
            return Err(InsufficientElements {
                requested: k,
                available: self.len(),
            });
        }
        Ok(Combinations::new(self.to_vec(), k))
    }

    /// `combinations(0)`, `combinations(1)`, .. up to `max_size` (or the
    /// cardinality when `max_size` is `None` or larger), concatenated.
    ///
    /// The unbounded form has `2^n` entries; callers that can pass a bound
    /// should.
    #[must_use]
    pub fn power_set(&self, max_size: Option<usize>) -> Vec<Self> {
        let upper = max_size.map_or(self.len(), |max| max.min(self.len()));
        let pool = self.to_vec();
        (0..=upper)
            .flat_map(|k| Combinations::new(pool.clone(), k))
            .collect()
    }
}

impl<A: Attribute> FromIterator<A> for AttributeSet<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<A: Attribute> Extend<A> for AttributeSet<A> {
    fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<A: Attribute, const N: usize> From<[A; N]> for AttributeSet<A> {
    fn from(elements: [A; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<A: Attribute> From<Vec<A>> for AttributeSet<A> {
    fn from(elements: Vec<A>) -> Self {
        elements.into_iter().collect()
    }
}

impl<A> IntoIterator for AttributeSet<A> {
    type Item = A;
    type IntoIter = btree_set::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a AttributeSet<A> {
    type Item = &'a A;
    type IntoIter = btree_set::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<A: Debug> Debug for AttributeSet<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(&self.elements).finish()
    }
}

/// Renders as `[a, b, c]`.
impl<A: Display> Display for AttributeSet<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write_list(f, self.elements.iter())
    }
}

/// Writes `[a, b, c]`.
pub(crate) fn write_list<W, I, T>(out: &mut W, items: I) -> core::fmt::Result
where
    W: core::fmt::Write + ?Sized,
    I: IntoIterator<Item = T>,
    T: Display,
{
    out.write_char('[')?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write!(out, "{item}")?;
    }
    out.write_char(']')
}
