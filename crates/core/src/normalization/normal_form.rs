//! Normal-form membership tests.
//!
//! Every test scans the dependencies in insertion order and reports the first
//! one that breaks the form as a [`Violation`]. The relation is always
//! assumed to be in first normal form.

use core::fmt::{Display, Formatter};

use super::keys::prime_attributes_of;
use crate::attribute::{Attribute, AttributeSet};
use crate::schema::Schema;

/// Normal forms, ordered from weakest to strongest.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NormalForm {
    /// First normal form: atomic attributes only.
    First,
    /// Second normal form: no non-prime attribute depends on part of a key.
    Second,
    /// Third normal form: every determinant is a superkey or determines only
    /// prime attributes.
    Third,
    /// Boyce-Codd normal form: every determinant is a superkey.
    BoyceCodd,
}

impl NormalForm {
    /// The next stronger form, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::First => Some(Self::Second),
            Self::Second => Some(Self::Third),
            Self::Third => Some(Self::BoyceCodd),
            Self::BoyceCodd => None,
        }
    }
}

impl Display for NormalForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::First => "1NF",
            Self::Second => "2NF",
            Self::Third => "3NF",
            Self::BoyceCodd => "BCNF",
        })
    }
}

/// The first dependency that keeps a relation out of a normal form.
///
/// `position` is the 1-based position of the offending dependency.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "A: ::serde::Deserialize<'de> + Ord"))
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation<A> {
    /// `lhs` is a proper subset of `key` and determines the non-prime
    /// `attribute`.
    SecondNormalForm {
        position: usize,
        lhs: AttributeSet<A>,
        key: AttributeSet<A>,
        attribute: A,
    },
    /// `lhs` is not a superkey and determines the non-prime `attribute`.
    ThirdNormalForm {
        position: usize,
        lhs: AttributeSet<A>,
        attribute: A,
    },
    /// `lhs` is not a superkey.
    BoyceCodd { position: usize, lhs: AttributeSet<A> },
}

impl<A> Violation<A> {
    /// 1-based position of the offending dependency.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::SecondNormalForm { position, .. }
            | Self::ThirdNormalForm { position, .. }
            | Self::BoyceCodd { position, .. } => *position,
        }
    }

    /// The normal form this violation rules out.
    #[must_use]
    pub const fn normal_form(&self) -> NormalForm {
        match self {
            Self::SecondNormalForm { .. } => NormalForm::Second,
            Self::ThirdNormalForm { .. } => NormalForm::Third,
            Self::BoyceCodd { .. } => NormalForm::BoyceCodd,
        }
    }
}

impl<A: Display> Display for Violation<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Violation: first instance at dependency {}.", self.position())?;
        match self {
            Self::SecondNormalForm {
                lhs,
                key,
                attribute,
                ..
            } => write!(
                f,
                "Reason: {lhs} is a proper subset of key {key},\n        \
                 and {attribute} is not a prime attribute."
            ),
            Self::ThirdNormalForm { lhs, attribute, .. } => write!(
                f,
                "Reason: {lhs} is not a superkey, and {attribute} is not a prime attribute."
            ),
            Self::BoyceCodd { lhs, .. } => write!(f, "Reason: {lhs} is not a superkey."),
        }
    }
}

/// Highest normal form of a relation and what keeps it from the next one.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "A: ::serde::Deserialize<'de> + Ord"))
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<A> {
    pub normal_form: NormalForm,
    /// `None` exactly when `normal_form` is BCNF.
    pub violation: Option<Violation<A>>,
}

impl<A: Attribute> Schema<A> {
    /// Checks second normal form.
    ///
    /// # Errors
    ///
    /// The first dependency whose left-hand side is a proper subset of a
    /// candidate key while its right-hand side holds a non-prime attribute.
    pub fn check_second_normal_form(&self) -> Result<(), Violation<A>> {
        let keys = self.candidate_keys();
        let prime = prime_attributes_of(&keys);
        self.second_normal_form_with(&keys, &prime)
    }

    /// Checks third normal form.
    ///
    /// # Errors
    ///
    /// The first dependency whose left-hand side is not a superkey while its
    /// right-hand side holds a non-prime attribute.
    pub fn check_third_normal_form(&self) -> Result<(), Violation<A>> {
        let prime = self.prime_attributes();
        self.third_normal_form_with(&prime)
    }

    /// Checks Boyce-Codd normal form.
    ///
    /// # Errors
    ///
    /// The first dependency whose left-hand side is not a superkey.
    pub fn check_boyce_codd_normal_form(&self) -> Result<(), Violation<A>> {
        match self
            .dependencies
            .iter()
            .position(|dependency| !self.is_superkey_unchecked(&dependency.lhs))
        {
            Some(index) => Err(Violation::BoyceCodd {
                position: index + 1,
                lhs: self.dependencies[index].lhs.clone(),
            }),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn is_second_normal_form(&self) -> bool {
        self.check_second_normal_form().is_ok()
    }

    #[must_use]
    pub fn is_third_normal_form(&self) -> bool {
        self.check_third_normal_form().is_ok()
    }

    #[must_use]
    pub fn is_boyce_codd_normal_form(&self) -> bool {
        self.check_boyce_codd_normal_form().is_ok()
    }

    /// Strongest normal form the relation satisfies.
    #[must_use]
    pub fn highest_normal_form(&self) -> NormalForm {
        self.classify().normal_form
    }

    /// Highest normal form together with the violation that blocks the next
    /// one. Candidate keys are computed once for all three checks.
    #[must_use]
    pub fn classify(&self) -> Classification<A> {
        let keys = self.candidate_keys();
        let prime = prime_attributes_of(&keys);
        let (normal_form, violation) = match self
            .second_normal_form_with(&keys, &prime)
            .and_then(|()| self.third_normal_form_with(&prime))
            .and_then(|()| self.check_boyce_codd_normal_form())
        {
            Ok(()) => (NormalForm::BoyceCodd, None),
            Err(violation) => {
                let normal_form = match violation.normal_form() {
                    NormalForm::First | NormalForm::Second => NormalForm::First,
                    NormalForm::Third => NormalForm::Second,
                    NormalForm::BoyceCodd => NormalForm::Third,
                };
                (normal_form, Some(violation))
            }
        };
        tracing::debug!(%normal_form, keys = keys.len(), "classified relation");
        Classification {
            normal_form,
            violation,
        }
    }

    fn second_normal_form_with(
        &self,
        keys: &[AttributeSet<A>],
        prime: &AttributeSet<A>,
    ) -> Result<(), Violation<A>> {
        for (index, dependency) in self.dependencies.iter().enumerate() {
            let Some(key) = keys.iter().find(|key| dependency.lhs.is_proper_subset(key)) else {
                continue;
            };
            if let Some(attribute) = dependency.rhs.iter().find(|a| !prime.contains(a)) {
                return Err(Violation::SecondNormalForm {
                    position: index + 1,
                    lhs: dependency.lhs.clone(),
                    key: key.clone(),
                    attribute: attribute.clone(),
                });
            }
        }
        Ok(())
    }

    fn third_normal_form_with(&self, prime: &AttributeSet<A>) -> Result<(), Violation<A>> {
        for (index, dependency) in self.dependencies.iter().enumerate() {
            if self.is_superkey_unchecked(&dependency.lhs) {
                continue;
            }
            if let Some(attribute) = dependency.rhs.iter().find(|a| !prime.contains(a)) {
                return Err(Violation::ThirdNormalForm {
                    position: index + 1,
                    lhs: dependency.lhs.clone(),
                    attribute: attribute.clone(),
                });
            }
        }
        Ok(())
    }
}
